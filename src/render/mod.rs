//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::{Function, Package, ValueKind, VariableBlock};
use anyhow::{anyhow, Result};

/// Trait for rendering a Package into a specific output format.
pub trait Renderer {
    fn render(&self, pkg: &Package) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}

/// A struct, interface, or named type, viewed uniformly for output.
pub(crate) struct TypeEntry<'a> {
    pub name: &'a str,
    pub definition: &'a str,
    pub doc: &'a str,
    pub methods: &'a [Function],
}

/// All type-like declarations, sorted by name the way `go doc` lists them.
pub(crate) fn type_entries(pkg: &Package) -> Vec<TypeEntry<'_>> {
    let mut entries: Vec<TypeEntry> = Vec::new();
    for t in &pkg.types {
        entries.push(TypeEntry {
            name: &t.name,
            definition: &t.definition,
            doc: &t.doc,
            methods: &t.functions,
        });
    }
    for s in &pkg.structs {
        entries.push(TypeEntry {
            name: &s.name,
            definition: &s.definition,
            doc: &s.doc,
            methods: &s.functions,
        });
    }
    for i in &pkg.interfaces {
        entries.push(TypeEntry {
            name: &i.name,
            definition: &i.definition,
            doc: &i.doc,
            methods: &[],
        });
    }
    entries.sort_by(|a, b| a.name.cmp(b.name));
    entries
}

/// Rebuild the `const ( ... )` source of a block from its members.
pub(crate) fn block_definition(kind: ValueKind, block: &VariableBlock) -> String {
    let mut out = format!("{} (\n", kind.keyword());
    for v in &block.variables {
        out.push('\t');
        out.push_str(&v.definition);
        out.push('\n');
    }
    out.push(')');
    out
}

/// Heading for a function listed under a type.
///
/// Methods read `func (Owner) Name`; constructors keep the plain
/// `func Name` shape of their declaration.
pub(crate) fn method_heading(owner: &str, func: &Function) -> String {
    if func.definition.starts_with("func (") {
        format!("func ({}) {}", owner, func.name)
    } else {
        format!("func {}", func.name)
    }
}
