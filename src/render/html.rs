//! HTML renderer — standalone HTML page with semantic markup.

use super::{block_definition, method_heading, type_entries, Renderer, TypeEntry};
use crate::model::*;
use crate::toc::github_slug;
use anyhow::Result;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, pkg: &Package) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&pkg.name)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        out.push_str(&format!("<h1>{}</h1>\n", html_escape(&pkg.name)));
        if let Some(ref path) = pkg.import_path {
            out.push_str(&code_block(&format!("import \"{}\"", path)));
        }
        out.push_str(&paragraph(&pkg.doc));

        let entries = type_entries(pkg);
        render_index(&mut out, pkg, &entries);

        render_values(&mut out, "Constants", ValueKind::Const, &pkg.constant_blocks, &pkg.constants);
        render_values(&mut out, "Variables", ValueKind::Var, &pkg.variable_blocks, &pkg.variables);

        if !pkg.functions.is_empty() {
            out.push_str("<h2>Functions</h2>\n");
            for func in &pkg.functions {
                out.push_str(&heading(3, &format!("func {}", func.name)));
                out.push_str(&code_block(&func.definition));
                out.push_str(&paragraph(&func.doc));
            }
        }

        if !entries.is_empty() {
            out.push_str("<h2>Types</h2>\n");
            for entry in &entries {
                out.push_str(&heading(3, &format!("type {}", entry.name)));
                out.push_str(&code_block(entry.definition));
                out.push_str(&paragraph(entry.doc));
                for method in entry.methods {
                    out.push_str(&heading(4, &method_heading(entry.name, method)));
                    out.push_str(&code_block(&method.definition));
                    out.push_str(&paragraph(&method.doc));
                }
            }
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_index(out: &mut String, pkg: &Package, entries: &[TypeEntry]) {
    let mut items = String::new();

    if !pkg.constants.is_empty() || !pkg.constant_blocks.is_empty() {
        items.push_str(&index_item("Constants"));
    }
    if !pkg.variables.is_empty() || !pkg.variable_blocks.is_empty() {
        items.push_str(&index_item("Variables"));
    }
    for func in &pkg.functions {
        items.push_str(&index_item(&format!("func {}", func.name)));
    }
    for entry in entries {
        if entry.methods.is_empty() {
            items.push_str(&index_item(&format!("type {}", entry.name)));
            continue;
        }
        // Methods nest under their type's item
        items.push_str(&format!("<li>{}\n<ul>\n", index_link(&format!("type {}", entry.name))));
        for method in entry.methods {
            items.push_str(&index_item(&method_heading(entry.name, method)));
        }
        items.push_str("</ul>\n</li>\n");
    }

    if items.is_empty() {
        return;
    }
    out.push_str("<h2>Index</h2>\n<ul>\n");
    out.push_str(&items);
    out.push_str("</ul>\n");
}

fn index_item(text: &str) -> String {
    format!("<li>{}</li>\n", index_link(text))
}

fn index_link(text: &str) -> String {
    format!(
        "<a href=\"#{}\">{}</a>",
        html_escape(&github_slug(text)),
        html_escape(text)
    )
}

fn render_values(
    out: &mut String,
    title: &str,
    kind: ValueKind,
    blocks: &[VariableBlock],
    values: &[Variable],
) {
    if blocks.is_empty() && values.is_empty() {
        return;
    }
    out.push_str(&heading(2, title));
    for block in blocks {
        out.push_str(&code_block(&block_definition(kind, block)));
        out.push_str(&paragraph(&block.doc));
    }
    for value in values {
        out.push_str(&code_block(&value.definition));
        out.push_str(&paragraph(&value.doc));
    }
}

fn heading(level: u8, text: &str) -> String {
    format!(
        "<h{level} id=\"{}\">{}</h{level}>\n",
        html_escape(&github_slug(text)),
        html_escape(text)
    )
}

fn code_block(code: &str) -> String {
    format!(
        "<pre><code class=\"language-go\">{}</code></pre>\n",
        html_escape(code.trim_end())
    )
}

fn paragraph(doc: &str) -> String {
    let doc = doc.trim_end();
    if doc.is_empty() {
        return String::new();
    }
    format!("<p>{}</p>\n", html_escape(doc))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
