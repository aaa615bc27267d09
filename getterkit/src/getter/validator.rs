use crate::diagnostics::{ProblemBuilder, ValidationResult};
use crate::host::FieldHandle;
use crate::types::{GetterAnnotation, Modifier};

use super::GetterFieldProcessor;

pub const LAZY_WITH_ACCESS_NONE: &str = "lazy does not work when access level is NONE";
pub const LAZY_REQUIRES_PRIVATE_FINAL: &str = "lazy requires the field to be private and final";
pub const LAZY_REQUIRES_INITIALIZER: &str = "lazy requires field initialization";

impl GetterFieldProcessor {
    /// Decides whether a getter may be generated for `field` under `annotation`.
    ///
    /// Every applicable check runs and every diagnostic is collected; nothing short-circuits
    /// except the collision check, which only runs while the field is still valid.
    pub fn validate<F>(&self, field: &F, annotation: &GetterAnnotation) -> ValidationResult
    where
        F: FieldHandle + ?Sized,
    {
        let mut problems = ProblemBuilder::new();

        let visibility = annotation.method_visibility();
        let mut ok = visibility.is_some();

        if visibility.is_none() && annotation.lazy {
            problems.add_warning(LAZY_WITH_ACCESS_NONE);
        }

        if ok && annotation.lazy {
            if !field.has_modifier(Modifier::Private) || !field.has_modifier(Modifier::Final) {
                let field_ref = field.field_ref();
                problems.add_error_with_fixes(
                    LAZY_REQUIRES_PRIVATE_FINAL,
                    [
                        self.fix_factory.modifier_list_fix(&field_ref, Modifier::Private, true),
                        self.fix_factory.modifier_list_fix(&field_ref, Modifier::Final, true),
                    ],
                );
            }
            if !field.has_initializer() {
                problems.add_error(LAZY_REQUIRES_INITIALIZER);
            }
            ok = !problems.has_errors();
        }

        if ok {
            ok = self.validate_existing_methods(field, &mut problems);
        }

        problems.finish(ok)
    }

    /// Name-only collision check against methods declared directly in the owning class.
    ///
    /// Collisions are reported as warnings but each one makes the field invalid.
    /// Parameter lists and return types are not compared.
    fn validate_existing_methods<F>(&self, field: &F, problems: &mut ProblemBuilder) -> bool
    where
        F: FieldHandle + ?Sized,
    {
        let class = field.containing_class();
        let getter_name = self.getter_name(field);

        let mut ok = true;
        for candidate in self.candidate_names(field) {
            log::trace!("checking {} for existing method `{candidate}`", class.qualified_name());
            if class.has_method_named(&candidate) {
                problems.add_warning(format!(
                    "Not generated '{getter_name}()': a method with similar name '{candidate}' already exists"
                ));
                ok = false;
            }
        }
        ok
    }
}
