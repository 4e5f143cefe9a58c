//! GitHub-flavored markdown renderer.

use super::{block_definition, method_heading, type_entries, Renderer};
use crate::model::*;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, pkg: &Package) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}\n", pkg.name));

        if let Some(ref path) = pkg.import_path {
            push_code(&mut lines, &format!("import \"{}\"", path));
        }

        if !pkg.doc.is_empty() {
            lines.push(pkg.doc.clone());
            lines.push(String::new());
        }

        render_index(&mut lines, pkg);

        render_values(
            &mut lines,
            "Constants",
            ValueKind::Const,
            &pkg.constant_blocks,
            &pkg.constants,
        );
        render_values(
            &mut lines,
            "Variables",
            ValueKind::Var,
            &pkg.variable_blocks,
            &pkg.variables,
        );

        if !pkg.functions.is_empty() {
            lines.push("## Functions\n".to_string());
            for func in &pkg.functions {
                lines.push(format!("### func {}\n", func.name));
                push_code(&mut lines, &func.definition);
                push_doc(&mut lines, &func.doc);
            }
        }

        let entries = type_entries(pkg);
        if !entries.is_empty() {
            lines.push("## Types\n".to_string());
            for entry in &entries {
                lines.push(format!("### type {}\n", entry.name));
                push_code(&mut lines, entry.definition);
                push_doc(&mut lines, entry.doc);
                for method in entry.methods {
                    lines.push(format!("#### {}\n", method_heading(entry.name, method)));
                    push_code(&mut lines, &method.definition);
                    push_doc(&mut lines, &method.doc);
                }
            }
        }

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Index of every heading below, methods nested under their type.
fn render_index(lines: &mut Vec<String>, pkg: &Package) {
    let mut items: Vec<String> = Vec::new();

    if !pkg.constants.is_empty() || !pkg.constant_blocks.is_empty() {
        items.push(toc::render_toc_item("Constants", 0));
    }
    if !pkg.variables.is_empty() || !pkg.variable_blocks.is_empty() {
        items.push(toc::render_toc_item("Variables", 0));
    }
    for func in &pkg.functions {
        items.push(toc::render_toc_item(&format!("func {}", func.name), 0));
    }
    for entry in type_entries(pkg) {
        items.push(toc::render_toc_item(&format!("type {}", entry.name), 0));
        for method in entry.methods {
            items.push(toc::render_toc_item(&method_heading(entry.name, method), 1));
        }
    }

    if items.is_empty() {
        return;
    }
    lines.push("## Index\n".to_string());
    lines.extend(items);
    lines.push(String::new());
}

fn render_values(
    lines: &mut Vec<String>,
    title: &str,
    kind: ValueKind,
    blocks: &[VariableBlock],
    values: &[Variable],
) {
    if blocks.is_empty() && values.is_empty() {
        return;
    }
    lines.push(format!("## {}\n", title));
    for block in blocks {
        push_code(lines, &block_definition(kind, block));
        push_doc(lines, &block.doc);
    }
    for value in values {
        push_code(lines, &value.definition);
        push_doc(lines, &value.doc);
    }
}

fn push_code(lines: &mut Vec<String>, code: &str) {
    lines.push("```go".to_string());
    lines.push(code.trim_end().to_string());
    lines.push("```".to_string());
    lines.push(String::new());
}

fn push_doc(lines: &mut Vec<String>, doc: &str) {
    let doc = doc.trim_end();
    if doc.is_empty() {
        return;
    }
    lines.push(doc.to_string());
    lines.push(String::new());
}
