//! Validation and synthesis for the field-level getter annotation.
//!
//! A field goes through [`GetterFieldProcessor::process`] once per generation pass:
//! it is validated, and only a successful validation leads to a synthesized method.

mod synthesizer;
mod validator;

pub use validator::{LAZY_REQUIRES_INITIALIZER, LAZY_REQUIRES_PRIVATE_FINAL, LAZY_WITH_ACCESS_NONE};

use crate::config::GetterConfig;
use crate::diagnostics::{FixFactory, ModifierFixFactory, ValidationResult};
use crate::host::FieldHandle;
use crate::method::SyntheticMethod;
use crate::naming;
use crate::types::GetterAnnotation;
use crate::usage::UsageRegistry;

/// Rule engine for getter generation on a single annotated field.
///
/// Holds no per-field state, so one processor can serve any number of fields,
/// from any number of threads.
pub struct GetterFieldProcessor {
    config: GetterConfig,
    fix_factory: Box<dyn FixFactory + Send + Sync>,
}

impl Default for GetterFieldProcessor {
    fn default() -> Self {
        Self::new(GetterConfig::default())
    }
}

impl GetterFieldProcessor {
    pub fn new(config: GetterConfig) -> Self {
        Self {
            config,
            fix_factory: Box::new(ModifierFixFactory),
        }
    }

    pub fn with_fix_factory<F>(mut self, factory: F) -> Self
    where
        F: FixFactory + Send + Sync + 'static,
    {
        self.fix_factory = Box::new(factory);
        self
    }

    pub fn config(&self) -> &GetterConfig {
        &self.config
    }

    /// Canonical getter name for `field`.
    pub fn getter_name<F: FieldHandle + ?Sized>(&self, field: &F) -> String {
        naming::getter_name(field.name(), self.config.is_boolean(field.declared_type()))
    }

    /// Every name checked for collisions before a getter for `field` is generated.
    pub fn candidate_names<F: FieldHandle + ?Sized>(&self, field: &F) -> Vec<String> {
        naming::all_getter_names(field.name(), self.config.is_boolean(field.declared_type()))
    }

    /// Validates `field`, then synthesizes its getter into `target` when validation succeeds.
    ///
    /// Exactly one method is appended on success and none otherwise.
    pub fn process<F, U>(
        &self,
        field: &F,
        annotation: &GetterAnnotation,
        usage: &U,
        target: &mut Vec<SyntheticMethod>,
    ) -> ValidationResult
    where
        F: FieldHandle + ?Sized,
        U: UsageRegistry + ?Sized,
    {
        let result = self.validate(field, annotation);
        if result.is_ok() {
            if let Some(visibility) = annotation.method_visibility() {
                target.push(self.synthesize(field, visibility, usage));
            }
        } else {
            log::debug!(
                "getter for {} rejected with {} diagnostic(s)",
                field.field_ref(),
                result.diagnostics().len()
            );
        }
        result
    }
}
