use std::fmt;

use serde::Serialize;

use crate::host::FieldRef;
use crate::types::{MethodVisibility, TypeRef};

/// A getter that exists only in the augmented, in-memory view of a class.
///
/// Immutable once built. Attaching it to the class member list is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticMethod {
    name: String,
    return_type: TypeRef,
    visibility: MethodVisibility,
    is_static: bool,
    owner_class: String,
    source_field: FieldRef,
}

impl SyntheticMethod {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    pub fn visibility(&self) -> MethodVisibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn owner_class(&self) -> &str {
        &self.owner_class
    }

    /// The field this getter reads. A relation only; the field is not owned.
    pub fn source_field(&self) -> &FieldRef {
        &self.source_field
    }

    /// Modifier keywords in declaration order, e.g. `["public", "static"]`.
    pub fn modifiers(&self) -> Vec<&'static str> {
        let mut modifiers: Vec<&'static str> = self.visibility.keyword().into_iter().collect();
        if self.is_static {
            modifiers.push("static");
        }
        modifiers
    }

    /// Declaration-style signature such as `public static int getCount()`.
    pub fn signature(&self) -> String {
        let mut parts: Vec<&str> = self.modifiers();
        parts.push(self.return_type.name());
        format!("{} {}()", parts.join(" "), self.name)
    }
}

impl fmt::Display for SyntheticMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

/// Builder for [`SyntheticMethod`].
#[derive(Debug, Clone)]
pub struct SyntheticMethodBuilder {
    name: String,
    return_type: TypeRef,
    visibility: MethodVisibility,
    is_static: bool,
    owner_class: String,
    source_field: FieldRef,
}

impl SyntheticMethodBuilder {
    /// Starts a package-private, non-static method reading `source_field`.
    pub fn new(name: impl Into<String>, return_type: TypeRef, source_field: FieldRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            visibility: MethodVisibility::Package,
            is_static: false,
            owner_class: source_field.class.clone(),
            source_field,
        }
    }

    pub fn containing_class(mut self, owner_class: impl Into<String>) -> Self {
        self.owner_class = owner_class.into();
        self
    }

    pub fn visibility(mut self, visibility: MethodVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_method(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn build(self) -> SyntheticMethod {
        SyntheticMethod {
            name: self.name,
            return_type: self.return_type,
            visibility: self.visibility,
            is_static: self.is_static,
            owner_class: self.owner_class,
            source_field: self.source_field,
        }
    }
}
