//! getterkit core library.
//!
//! Decides whether a getter may be synthesized for an annotated field and, when it may,
//! builds the synthetic method declaration. The host tree is reached only through the
//! capability traits in [`host`]; nothing here mutates source text.

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod getter;
pub mod host;
pub mod method;
pub mod model;
pub mod naming;
pub mod pass;
pub mod types;
pub mod usage;

pub use config::GetterConfig;
pub use diagnostics::{Diagnostic, Fix, FixFactory, ModifierFixFactory, ProblemBuilder, Severity, ValidationResult};
pub use errors::*;
pub use getter::GetterFieldProcessor;
pub use host::{ClassHandle, FieldHandle, FieldRef};
pub use method::{SyntheticMethod, SyntheticMethodBuilder};
pub use model::{ClassModel, FieldModel, FieldView, RawGetterAnnotation};
pub use pass::{ClassReport, FieldReport, FieldState, GenerationPass};
pub use types::{AccessLevel, GetterAnnotation, MethodVisibility, Modifier, PrimitiveType, TypeRef};
pub use usage::{ReadUsageRegistry, UsageRegistry};
