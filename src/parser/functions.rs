//! Free functions from the FUNCTIONS section.

use super::decl;
use crate::model::{Documentable, Function};

/// Parse the functions section into free functions with their docs.
///
/// Lines before the first declaration have nowhere to go and are dropped.
pub fn parse(section: &str) -> Vec<Function> {
    let mut functions: Vec<Function> = Vec::new();

    for line in section.split('\n') {
        if decl::is_free_function(line) {
            functions.push(Function {
                name: decl::function_name(line),
                definition: line.trim().to_string(),
                ..Default::default()
            });
            continue;
        }
        if line.is_empty() {
            continue;
        }
        match functions.last_mut() {
            Some(func) => func.append_doc(decl::doc_fragment(line)),
            None => tracing::trace!(line, "dropping line before first function"),
        }
    }

    functions
}
