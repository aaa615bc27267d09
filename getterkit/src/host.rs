//! Capability traits through which the rules read the host's syntax tree.
//!
//! The rules never see concrete tree nodes; any host (an IDE model, a parsed
//! snapshot, a test fake) plugs in by implementing these two traits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Modifier, TypeRef};

/// Read-only view of the class that declares an annotated field.
pub trait ClassHandle {
    /// Fully qualified name, used as the owner of synthesized methods.
    fn qualified_name(&self) -> &str;

    /// Names of the methods declared directly in this class, in declaration order.
    fn method_names(&self) -> Vec<&str>;

    fn has_method_named(&self, name: &str) -> bool {
        self.method_names().into_iter().any(|existing| existing == name)
    }
}

/// Read-only view of an annotated field.
pub trait FieldHandle {
    fn name(&self) -> &str;

    fn declared_type(&self) -> &TypeRef;

    fn has_modifier(&self, modifier: Modifier) -> bool;

    fn has_initializer(&self) -> bool;

    fn containing_class(&self) -> &dyn ClassHandle;

    /// Relation-only reference to this field, safe to keep after the handle is gone.
    fn field_ref(&self) -> FieldRef {
        FieldRef::new(self.containing_class().qualified_name(), self.name())
    }
}

/// Identifies a field by owning class and name without borrowing the host tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldRef {
    pub class: String,
    pub field: String,
}

impl FieldRef {
    pub fn new(class: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.field)
    }
}
