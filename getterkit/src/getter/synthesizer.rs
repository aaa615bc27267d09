use crate::host::FieldHandle;
use crate::method::{SyntheticMethod, SyntheticMethodBuilder};
use crate::types::{MethodVisibility, Modifier};
use crate::usage::UsageRegistry;

use super::GetterFieldProcessor;

impl GetterFieldProcessor {
    /// Builds the getter for a field that already passed [`GetterFieldProcessor::validate`].
    ///
    /// `visibility` is trusted as given. The field is recorded as read in `usage`.
    pub fn synthesize<F, U>(&self, field: &F, visibility: MethodVisibility, usage: &U) -> SyntheticMethod
    where
        F: FieldHandle + ?Sized,
        U: UsageRegistry + ?Sized,
    {
        let field_ref = field.field_ref();
        usage.add_read_usage(&field_ref);

        let method = SyntheticMethodBuilder::new(self.getter_name(field), field.declared_type().clone(), field_ref)
            .containing_class(field.containing_class().qualified_name())
            .visibility(visibility)
            .static_method(field.has_modifier(Modifier::Static))
            .build();

        log::debug!("synthesized `{method}` in {}", method.owner_class());
        method
    }
}
