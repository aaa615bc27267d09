use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{Cell, Color as TableColor, Table};
use serde::Serialize;

use getterkit::{ClassModel, ClassReport, FieldState, GenerationPass, GetterFieldProcessor, ReadUsageRegistry, Severity};

use crate::discovery::discover_models;
use crate::examples::ExampleGroup;
use crate::output::{BULLET, OutputManager, OutputOptions, Render, Tone, header, new_table, tinted};

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Check Models",
        commands: &[
            "getterkit check model/Session.json     # Validate one class model",
            "getterkit check model/                 # Walk a directory of class models",
        ],
    },
    ExampleGroup {
        title: "Scripting",
        commands: &["getterkit --output json check model/   # Emit reports as JSON"],
    },
];

#[derive(Args)]
pub struct CheckArgs {
    /// Class model files or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Reports for every class found, plus totals.
#[derive(Serialize)]
pub struct CheckReport {
    pub classes: Vec<ClassReport>,
    pub generated: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckReport {
    fn new(classes: Vec<ClassReport>) -> Self {
        let generated = classes.iter().map(|class| class.synthetic_methods().count()).sum();
        let warnings = classes.iter().map(|class| class.count(Severity::Warning)).sum();
        let errors = classes.iter().map(|class| class.count(Severity::Error)).sum();
        Self {
            classes,
            generated,
            warnings,
            errors,
        }
    }
}

impl Render for CheckReport {
    fn table(&self, options: &OutputOptions) -> Table {
        let mut table = new_table(options);
        table.set_header(vec![header("Class"), header("Field"), header("Result")]);

        if self.classes.iter().all(|class| class.fields.is_empty()) {
            table.add_row(vec![Cell::new("No annotated fields found")]);
            return table;
        }

        for class in &self.classes {
            for field in &class.fields {
                let mut lines = Vec::new();
                if let Some(method) = &field.method {
                    lines.push(method.signature());
                }
                for diagnostic in &field.diagnostics {
                    let icon = match diagnostic.severity {
                        Severity::Warning => Tone::Warning.icon(),
                        Severity::Error => Tone::Error.icon(),
                    };
                    lines.push(format!("{icon} {}", diagnostic.message));
                    for fix in &diagnostic.fixes {
                        lines.push(format!("  {} {}", BULLET, fix.title()));
                    }
                }

                let color = match field.state {
                    FieldState::Generated => TableColor::Green,
                    FieldState::Rejected if field.diagnostics.iter().any(|d| d.is_error()) => TableColor::Red,
                    FieldState::Rejected => TableColor::Yellow,
                };
                table.add_row(vec![
                    Cell::new(&class.class),
                    tinted(&field.field, color, options),
                    Cell::new(lines.join("\n")),
                ]);
            }
        }

        table
    }

    fn summary(&self) -> String {
        format!(
            "classes={} generated={} warnings={} errors={}",
            self.classes.len(),
            self.generated,
            self.warnings,
            self.errors
        )
    }
}

pub fn handle_check(args: CheckArgs, processor: &GetterFieldProcessor, output: &OutputManager) -> Result<()> {
    let files = discover_models(&args.paths)?;
    if files.is_empty() {
        output.warning("No class model files found.");
        return Ok(());
    }

    let usage = ReadUsageRegistry::new();
    let pass = GenerationPass::new(processor, &usage);
    let mut classes = Vec::new();

    for file in &files {
        output.verbose(&format!("Loading {}", file.display()));
        let models = ClassModel::load_all(file).with_context(|| format!("Failed to load {}", file.display()))?;
        for model in &models {
            let report = pass
                .run(model)
                .with_context(|| format!("Failed to process {} in {}", model.name, file.display()))?;
            classes.push(report);
        }
    }

    let report = CheckReport::new(classes);
    output.heading("Getter generation");
    output.display(&report)?;

    for field in usage.read_fields() {
        output.verbose(&format!("read usage recorded for {field}"));
    }

    if report.errors > 0 {
        anyhow::bail!("{} error(s) reported", report.errors);
    }
    if report.warnings > 0 {
        output.warning(&format!("{} warning(s) reported", report.warnings));
    }
    output.success(&format!("{} getter(s) generated", report.generated));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use getterkit::{FieldModel, GetterAnnotation, Modifier, TypeRef};

    fn report_for(class: ClassModel) -> CheckReport {
        let processor = GetterFieldProcessor::default();
        let usage = ReadUsageRegistry::new();
        let report = GenerationPass::new(&processor, &usage).run(&class).unwrap();
        CheckReport::new(vec![report])
    }

    #[test]
    fn totals_cover_all_classes() {
        let report = report_for(
            ClassModel::new("Counter")
                .with_method("getLabel")
                .with_field(
                    FieldModel::new("count", TypeRef::int())
                        .with_modifier(Modifier::Static)
                        .with_getter(GetterAnnotation::plain()),
                )
                .with_field(FieldModel::new("label", TypeRef::named("String")).with_getter(GetterAnnotation::plain()))
                .with_field(FieldModel::new("cache", TypeRef::named("Map")).with_getter(GetterAnnotation::lazy())),
        );

        assert_eq!(report.generated, 1);
        assert_eq!(report.warnings, 1);
        assert_eq!(report.errors, 2);
        assert_eq!(report.summary(), "classes=1 generated=1 warnings=1 errors=2");
    }

    #[test]
    fn table_lists_signatures_and_fixes() {
        let report = report_for(
            ClassModel::new("Counter")
                .with_field(
                    FieldModel::new("count", TypeRef::int())
                        .with_modifier(Modifier::Static)
                        .with_getter(GetterAnnotation::plain()),
                )
                .with_field(
                    FieldModel::new("cache", TypeRef::named("Map"))
                        .with_initializer()
                        .with_getter(GetterAnnotation::lazy()),
                ),
        );
        let rendered = report
            .table(&OutputOptions {
                no_color: true,
                ..Default::default()
            })
            .to_string();

        assert!(rendered.contains("public static int getCount()"));
        assert!(rendered.contains("Make 'cache' private"));
        assert!(rendered.contains("Make 'cache' final"));
    }
}
