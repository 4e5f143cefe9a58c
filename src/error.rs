//! Error types for listing retrieval and parsing.

use thiserror::Error;

/// Hard failures of the listing parser.
///
/// Everything else the parser does not recognize is dropped silently, so
/// these only cover a preamble too short to index into.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("package header is missing: expected at least 2 preamble lines, found {lines}")]
    MissingHeader { lines: usize },

    #[error("package header has no package name: {line:?}")]
    MissingPackageName { line: String },
}

/// Failures of the `go doc` invocation.
#[derive(Error, Debug)]
pub enum GoDocError {
    #[error("failed to run \"go doc\": {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    #[error("error while running \"go doc\":\n{output}")]
    Failed { output: String },
}
