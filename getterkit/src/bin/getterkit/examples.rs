//! Usage examples appended to each subcommand's `--help`.

use std::fmt::Write;

use crate::commands::{check, name};

#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

/// Subcommand name paired with its example groups.
pub const COMMAND_EXAMPLES: &[(&str, &[ExampleGroup])] = &[("check", check::EXAMPLES), ("name", name::EXAMPLES)];

pub fn render(groups: &[ExampleGroup]) -> String {
    let mut text = String::from("Examples:\n");
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        let _ = writeln!(text, "  {}", group.title);
        for command in group.commands {
            let _ = writeln!(text, "    $ {command}");
        }
    }
    text
}
