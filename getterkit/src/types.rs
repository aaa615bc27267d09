use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::GetterError;

/// Accepts `PUBLIC`, `AccessLevel.PUBLIC` and `lombok.AccessLevel.PUBLIC`.
static ACCESS_LEVEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:(?:lombok\.)?AccessLevel\.)?([A-Z]+)\s*$").expect("access level pattern compiles")
});

/// Visibility tier requested by the accessor annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    #[default]
    Public,
    Protected,
    Package,
    Private,
    /// Generate nothing.
    None,
}

impl AccessLevel {
    /// Maps the access level to the visibility of the generated method.
    ///
    /// Returns `None` for [`AccessLevel::None`], meaning no method is generated at all.
    pub fn method_visibility(self) -> Option<MethodVisibility> {
        match self {
            AccessLevel::Public => Some(MethodVisibility::Public),
            AccessLevel::Protected => Some(MethodVisibility::Protected),
            AccessLevel::Package => Some(MethodVisibility::Package),
            AccessLevel::Private => Some(MethodVisibility::Private),
            AccessLevel::None => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Public => "PUBLIC",
            AccessLevel::Protected => "PROTECTED",
            AccessLevel::Package => "PACKAGE",
            AccessLevel::Private => "PRIVATE",
            AccessLevel::None => "NONE",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = GetterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let unknown = || GetterError::UnknownAccessLevel { value: raw.to_string() };
        let captures = ACCESS_LEVEL_PATTERN.captures(raw).ok_or_else(unknown)?;
        match &captures[1] {
            "PUBLIC" => Ok(AccessLevel::Public),
            "PROTECTED" => Ok(AccessLevel::Protected),
            "PACKAGE" => Ok(AccessLevel::Package),
            "PRIVATE" => Ok(AccessLevel::Private),
            "NONE" => Ok(AccessLevel::None),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field or method modifier as exposed by the host tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Package,
    Private,
    Static,
    Final,
}

impl Modifier {
    /// Source keyword for the modifier. Package-private has none.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Modifier::Public => Some("public"),
            Modifier::Protected => Some("protected"),
            Modifier::Package => None,
            Modifier::Private => Some("private"),
            Modifier::Static => Some("static"),
            Modifier::Final => Some("final"),
        }
    }

    pub fn as_str(self) -> &'static str {
        self.keyword().unwrap_or("package")
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved visibility of a synthesized method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodVisibility {
    Public,
    Protected,
    Package,
    Private,
}

impl MethodVisibility {
    pub fn modifier(self) -> Modifier {
        match self {
            MethodVisibility::Public => Modifier::Public,
            MethodVisibility::Protected => Modifier::Protected,
            MethodVisibility::Package => Modifier::Package,
            MethodVisibility::Private => Modifier::Private,
        }
    }

    pub fn keyword(self) -> Option<&'static str> {
        self.modifier().keyword()
    }
}

impl fmt::Display for MethodVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.modifier().as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn from_name(name: &str) -> Option<Self> {
        let primitive = match name {
            "boolean" => PrimitiveType::Boolean,
            "byte" => PrimitiveType::Byte,
            "char" => PrimitiveType::Char,
            "short" => PrimitiveType::Short,
            "int" => PrimitiveType::Int,
            "long" => PrimitiveType::Long,
            "float" => PrimitiveType::Float,
            "double" => PrimitiveType::Double,
            _ => return None,
        };
        Some(primitive)
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }
}

/// Declared type of a field, kept as the host spells it.
///
/// Serialized as its textual name (`"boolean"`, `"java.lang.String"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeRef {
    Primitive(PrimitiveType),
    Named(String),
}

impl TypeRef {
    pub fn boolean() -> Self {
        TypeRef::Primitive(PrimitiveType::Boolean)
    }

    pub fn int() -> Self {
        TypeRef::Primitive(PrimitiveType::Int)
    }

    pub fn named(name: impl Into<String>) -> Self {
        let name: String = name.into();
        TypeRef::from(name)
    }

    pub fn is_primitive_boolean(&self) -> bool {
        matches!(self, TypeRef::Primitive(PrimitiveType::Boolean))
    }

    pub fn name(&self) -> &str {
        match self {
            TypeRef::Primitive(primitive) => primitive.name(),
            TypeRef::Named(name) => name,
        }
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        let trimmed = name.trim();
        match PrimitiveType::from_name(trimmed) {
            Some(primitive) => TypeRef::Primitive(primitive),
            None if trimmed.len() == name.len() => TypeRef::Named(name),
            None => TypeRef::Named(trimmed.to_string()),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::from(name.to_string())
    }
}

impl From<TypeRef> for String {
    fn from(ty: TypeRef) -> Self {
        match ty {
            TypeRef::Primitive(primitive) => primitive.name().to_string(),
            TypeRef::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved accessor annotation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetterAnnotation {
    /// Requested access level; absent means PUBLIC.
    #[serde(default)]
    pub value: Option<AccessLevel>,
    #[serde(default)]
    pub lazy: bool,
}

impl GetterAnnotation {
    pub fn new(value: Option<AccessLevel>, lazy: bool) -> Self {
        Self { value, lazy }
    }

    /// Plain annotation: default access level, not lazy.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn lazy() -> Self {
        Self::new(None, true)
    }

    pub fn with_access(mut self, level: AccessLevel) -> Self {
        self.value = Some(level);
        self
    }

    pub fn access_level(&self) -> AccessLevel {
        self.value.unwrap_or_default()
    }

    pub fn method_visibility(&self) -> Option<MethodVisibility> {
        self.access_level().method_visibility()
    }
}
