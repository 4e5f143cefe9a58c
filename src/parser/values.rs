//! Variables and constants from the VARIABLES / CONSTANTS sections.

use super::decl;
use crate::model::{Focus, Package, ValueKind};

/// Parse one value section into the lists `kind` selects.
///
/// Runs once per kind; the two runs write disjoint parts of `pkg`.
pub fn parse(pkg: &mut Package, kind: ValueKind, section: &str) {
    let keyword = kind.keyword();
    let opener = format!("{} (", keyword);
    let prefix = format!("{} ", keyword);

    let mut in_block = false;
    let mut focus: Option<Focus> = None;

    for line in section.split('\n') {
        if decl::is_continuation(line) {
            if !pkg.append_doc(focus, decl::doc_fragment(line)) {
                tracing::trace!(line, "dropping doc line without a declaration");
            }
            continue;
        }

        if line.starts_with(&opener) {
            focus = Some(pkg.push_block(kind));
            in_block = true;
            continue;
        }

        if line.trim_end() == ")" {
            in_block = false;
            continue;
        }

        if in_block {
            if decl::is_comment_or_blank(line) {
                continue;
            }
            if let Some(block) = pkg.blocks_mut(kind).last_mut() {
                block.variables.push(decl::parse_variable(line));
            }
        } else if line.trim().starts_with(&prefix) {
            focus = Some(pkg.push_value(kind, decl::parse_variable(line)));
        } else if !line.is_empty() {
            tracing::trace!(line, section = kind.section(), "ignoring unrecognized line");
        }
    }
}
