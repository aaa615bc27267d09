use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Table};
use serde::Serialize;

use getterkit::{GetterFieldProcessor, TypeRef, naming};

use crate::examples::ExampleGroup;
use crate::output::{OutputManager, OutputOptions, Render, header, new_table};

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Getter Names",
    commands: &[
        "getterkit name count                   # getCount",
        "getterkit name active --type boolean   # isActive, plus getActive as a collision candidate",
    ],
}];

#[derive(Args)]
pub struct NameArgs {
    /// Field name
    pub field: String,

    /// Declared type of the field
    #[arg(long = "type", default_value = "java.lang.Object")]
    pub ty: String,
}

#[derive(Serialize)]
pub struct NameReport {
    pub field: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub boolean: bool,
    pub getter: String,
    pub candidates: Vec<String>,
}

impl NameReport {
    pub fn new(field: &str, ty: &TypeRef, processor: &GetterFieldProcessor) -> Self {
        let boolean = processor.config().is_boolean(ty);
        Self {
            field: field.to_string(),
            ty: ty.to_string(),
            boolean,
            getter: naming::getter_name(field, boolean),
            candidates: naming::all_getter_names(field, boolean),
        }
    }
}

impl Render for NameReport {
    fn table(&self, options: &OutputOptions) -> Table {
        let mut table = new_table(options);
        table.add_row(vec![header("Field"), Cell::new(&self.field)]);
        table.add_row(vec![header("Type"), Cell::new(&self.ty)]);
        table.add_row(vec![header("Boolean"), Cell::new(self.boolean.to_string())]);
        table.add_row(vec![header("Getter"), Cell::new(&self.getter)]);
        table.add_row(vec![header("Candidates"), Cell::new(self.candidates.join(", "))]);
        table
    }

    fn summary(&self) -> String {
        self.getter.clone()
    }
}

pub fn handle_name(args: NameArgs, processor: &GetterFieldProcessor, output: &OutputManager) -> Result<()> {
    let ty = TypeRef::from(args.ty);
    output.display(&NameReport::new(&args.field, &ty, processor))
}
