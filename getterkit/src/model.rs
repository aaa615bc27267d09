//! Serde-backed snapshot of a class, usable as a host tree.
//!
//! A class model is a JSON document listing the directly declared method names and
//! the fields, each with an optional getter annotation:
//!
//! ```json
//! {
//!   "name": "com.example.Session",
//!   "methods": ["getId"],
//!   "fields": [
//!     { "name": "active", "type": "boolean", "modifiers": ["private", "final"],
//!       "initializer": true, "getter": { "lazy": true } },
//!     { "name": "count", "type": "int", "modifiers": ["static"],
//!       "getter": { "value": "AccessLevel.PROTECTED" } }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::GetterError;
use crate::host::{ClassHandle, FieldHandle};
use crate::types::{AccessLevel, GetterAnnotation, Modifier, TypeRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub initializer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<RawGetterAnnotation>,
}

/// Annotation attributes as written in source, before the access level is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGetterAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub lazy: bool,
}

impl RawGetterAnnotation {
    pub fn resolve(&self) -> Result<GetterAnnotation, GetterError> {
        let value = self
            .value
            .as_deref()
            .map(str::parse::<AccessLevel>)
            .transpose()?;
        Ok(GetterAnnotation::new(value, self.lazy))
    }
}

impl From<GetterAnnotation> for RawGetterAnnotation {
    fn from(annotation: GetterAnnotation) -> Self {
        Self {
            value: annotation.value.map(|level| format!("AccessLevel.{level}")),
            lazy: annotation.lazy,
        }
    }
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }

    pub fn with_field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    pub fn from_json_str(content: &str) -> Result<Self, GetterError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a file holding either one class model or an array of them.
    pub fn load_all(path: &Path) -> Result<Vec<Self>, GetterError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Document {
            Many(Vec<ClassModel>),
            One(ClassModel),
        }

        let content = std::fs::read_to_string(path).map_err(|err| GetterError::io(path, err))?;
        let document: Document = serde_json::from_str(&content)?;
        match document {
            Document::Many(classes) => Ok(classes),
            Document::One(class) => Ok(vec![class]),
        }
    }

    pub fn field_views(&self) -> impl Iterator<Item = FieldView<'_>> {
        self.fields.iter().map(move |field| FieldView { class: self, field })
    }

    pub fn field(&self, name: &str) -> Option<FieldView<'_>> {
        self.field_views().find(|view| view.field.name == name)
    }
}

impl ClassHandle for ClassModel {
    fn qualified_name(&self) -> &str {
        &self.name
    }

    fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(String::as_str).collect()
    }
}

impl FieldModel {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Vec::new(),
            initializer: false,
            getter: None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    pub fn with_initializer(mut self) -> Self {
        self.initializer = true;
        self
    }

    pub fn with_getter(mut self, annotation: GetterAnnotation) -> Self {
        self.getter = Some(annotation.into());
        self
    }
}

/// A field together with its owning class, which is what the rules need to see.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    class: &'a ClassModel,
    field: &'a FieldModel,
}

impl<'a> FieldView<'a> {
    pub fn model(&self) -> &'a FieldModel {
        self.field
    }

    pub fn class(&self) -> &'a ClassModel {
        self.class
    }
}

impl FieldHandle for FieldView<'_> {
    fn name(&self) -> &str {
        &self.field.name
    }

    fn declared_type(&self) -> &TypeRef {
        &self.field.ty
    }

    fn has_modifier(&self, modifier: Modifier) -> bool {
        self.field.modifiers.contains(&modifier)
    }

    fn has_initializer(&self) -> bool {
        self.field.initializer
    }

    fn containing_class(&self) -> &dyn ClassHandle {
        self.class
    }
}
