use std::fmt;

use serde::Serialize;

use crate::host::FieldRef;
use crate::types::Modifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Suggested quick fix attached to a diagnostic. The rules only describe it; the host applies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub field: FieldRef,
    pub modifier: Modifier,
    /// `true` to add the modifier, `false` to remove it.
    pub value: bool,
}

impl Fix {
    pub fn title(&self) -> String {
        let modifier = self.modifier.as_str();
        if self.value {
            format!("Make '{}' {}", self.field.field, modifier)
        } else {
            format!("Make '{}' not {}", self.field.field, modifier)
        }
    }
}

/// Builds quick fixes on behalf of the rules.
pub trait FixFactory {
    fn modifier_list_fix(&self, field: &FieldRef, modifier: Modifier, value: bool) -> Fix;
}

/// Default factory producing plain modifier-list fixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierFixFactory;

impl FixFactory for ModifierFixFactory {
    fn modifier_list_fix(&self, field: &FieldRef, modifier: Modifier, value: bool) -> Fix {
        Fix {
            field: field.clone(),
            modifier,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            fixes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            fixes: Vec::new(),
        }
    }

    pub fn with_fixes<I>(mut self, fixes: I) -> Self
    where
        I: IntoIterator<Item = Fix>,
    {
        self.fixes.extend(fixes);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Accumulates diagnostics in emission order while a field is being validated.
#[derive(Debug, Default)]
pub struct ProblemBuilder {
    diagnostics: Vec<Diagnostic>,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(message));
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(message));
    }

    pub fn add_error_with_fixes<I>(&mut self, message: impl Into<String>, fixes: I)
    where
        I: IntoIterator<Item = Fix>,
    {
        self.diagnostics.push(Diagnostic::error(message).with_fixes(fixes));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn finish(self, ok: bool) -> ValidationResult {
        ValidationResult {
            ok,
            diagnostics: self.diagnostics,
        }
    }
}

/// Outcome of validating one annotated field.
///
/// `ok` alone decides whether a method is generated. Severity does not: a
/// name collision is reported as a warning yet still sets `ok` to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    ok: bool,
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_emission_order() {
        let mut problems = ProblemBuilder::new();
        problems.add_warning("first");
        problems.add_error("second");
        problems.add_warning("third");

        let result = problems.finish(false);
        let messages: Vec<_> = result.diagnostics().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);
        assert_eq!(result.warnings().count(), 2);
        assert!(result.has_errors());
    }

    #[test]
    fn warnings_alone_are_not_errors() {
        let mut problems = ProblemBuilder::new();
        problems.add_warning("careful");
        assert!(!problems.has_errors());
    }

    #[test]
    fn fix_titles_reflect_polarity() {
        let factory = ModifierFixFactory;
        let field = FieldRef::new("com.example.Config", "name");
        assert_eq!(
            factory.modifier_list_fix(&field, Modifier::Private, true).title(),
            "Make 'name' private"
        );
        assert_eq!(
            factory.modifier_list_fix(&field, Modifier::Final, false).title(),
            "Make 'name' not final"
        );
    }
}
