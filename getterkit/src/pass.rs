//! One generation pass over a class: every annotated field is processed exactly once.

use serde::Serialize;

use crate::diagnostics::{Diagnostic, Severity};
use crate::errors::GetterError;
use crate::getter::GetterFieldProcessor;
use crate::method::SyntheticMethod;
use crate::model::ClassModel;
use crate::usage::UsageRegistry;

/// Terminal state of a field after the pass. There is no partial success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    Rejected,
    Generated,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub state: FieldState,
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<SyntheticMethod>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    pub class: String,
    pub fields: Vec<FieldReport>,
}

impl ClassReport {
    /// Synthetic members to append to the class, in field declaration order.
    pub fn synthetic_methods(&self) -> impl Iterator<Item = &SyntheticMethod> {
        self.fields.iter().filter_map(|report| report.method.as_ref())
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = (&str, &Diagnostic)> {
        self.fields
            .iter()
            .flat_map(|report| report.diagnostics.iter().map(move |d| (report.field.as_str(), d)))
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics().filter(|(_, d)| d.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}

/// Drives [`GetterFieldProcessor::process`] over the annotated fields of a class.
pub struct GenerationPass<'a, U: UsageRegistry + ?Sized> {
    processor: &'a GetterFieldProcessor,
    usage: &'a U,
}

impl<'a, U: UsageRegistry + ?Sized> GenerationPass<'a, U> {
    pub fn new(processor: &'a GetterFieldProcessor, usage: &'a U) -> Self {
        Self { processor, usage }
    }

    /// Fields without a getter annotation are skipped and do not appear in the report.
    ///
    /// Fails only if an annotation carries an unknown access level.
    pub fn run(&self, class: &ClassModel) -> Result<ClassReport, GetterError> {
        let mut fields = Vec::new();

        for view in class.field_views() {
            let Some(raw) = view.model().getter.as_ref() else {
                continue;
            };
            let annotation = raw.resolve()?;

            let mut generated = Vec::with_capacity(1);
            let result = self.processor.process(&view, &annotation, self.usage, &mut generated);
            let method = generated.pop();
            let state = if method.is_some() {
                FieldState::Generated
            } else {
                FieldState::Rejected
            };

            fields.push(FieldReport {
                field: view.model().name.clone(),
                state,
                diagnostics: result.into_diagnostics(),
                method,
            });
        }

        log::debug!(
            "{}: {} annotated field(s), {} getter(s) generated",
            class.name,
            fields.len(),
            fields.iter().filter(|f| f.state == FieldState::Generated).count()
        );

        Ok(ClassReport {
            class: class.name.clone(),
            fields,
        })
    }
}
