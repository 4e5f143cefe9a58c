//! Listing parser — sections first, then one sub-parser per section.

pub mod decl;
pub mod functions;
pub mod header;
pub mod sections;
pub mod types;
pub mod values;

use crate::error::ParseError;
use crate::model::{Package, ValueKind};

/// Parse a complete `go doc -all` listing into a fresh [`Package`].
///
/// Lines no sub-parser recognizes are dropped; only a preamble without a
/// package line is an error.
pub fn parse(raw: &str) -> Result<Package, ParseError> {
    let sections = sections::split(raw);
    tracing::debug!(
        sections = ?sections.names().collect::<Vec<_>>(),
        "split listing"
    );

    let header = header::parse(sections.get(sections::PREAMBLE))?;
    let mut pkg = Package {
        name: header.name,
        import_path: header.import_path,
        doc: header.doc,
        ..Default::default()
    };

    pkg.functions = functions::parse(sections.get("functions"));

    for kind in [ValueKind::Var, ValueKind::Const] {
        values::parse(&mut pkg, kind, sections.get(kind.section()));
    }

    types::parse(&mut pkg, sections.get("types"));

    tracing::debug!(
        package = %pkg.name,
        functions = pkg.functions.len(),
        types = pkg.types.len(),
        structs = pkg.structs.len(),
        interfaces = pkg.interfaces.len(),
        "parsed listing"
    );
    Ok(pkg)
}
