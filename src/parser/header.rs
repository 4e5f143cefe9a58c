//! Package name, import path, and package doc from the preamble.

use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static RE_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"//\s*import\s+"([^"]*)""#).unwrap());

/// Parsed preamble.
#[derive(Debug, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub import_path: Option<String>,
    pub doc: String,
}

/// Parse the preamble section.
///
/// The first line reads `package <name> [// import "<path>"]`, the second
/// is blank, and the package doc runs from the third line to the end.
pub fn parse(preamble: &str) -> Result<Header, ParseError> {
    let lines: Vec<&str> = preamble.split('\n').collect();
    if lines.len() < 2 {
        return Err(ParseError::MissingHeader { lines: lines.len() });
    }

    let first = lines[0];
    let name = first
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ParseError::MissingPackageName {
            line: first.to_string(),
        })?
        .to_string();

    let import_path = RE_IMPORT.captures(first).map(|caps| caps[1].to_string());
    let doc = lines[2..].join("\n").trim().to_string();

    Ok(Header {
        name,
        import_path,
        doc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_import_and_doc() {
        let header = parse(
            "package experimenting // import \"github.com/acme/experimenting\"\n\nPackage experimenting is an experimenting package.\nThis is the package doc.\n\n\n",
        )
        .unwrap();
        assert_eq!(header.name, "experimenting");
        assert_eq!(
            header.import_path.as_deref(),
            Some("github.com/acme/experimenting")
        );
        assert_eq!(
            header.doc,
            "Package experimenting is an experimenting package.\nThis is the package doc."
        );
    }

    #[test]
    fn no_import_comment() {
        let header = parse("package demo\n\nDemo docs.\n\n").unwrap();
        assert_eq!(header.name, "demo");
        assert_eq!(header.import_path, None);
        assert_eq!(header.doc, "Demo docs.");
    }

    #[test]
    fn two_lines_gives_empty_doc() {
        let header = parse("package demo\n").unwrap();
        assert_eq!(header.name, "demo");
        assert_eq!(header.doc, "");
    }

    #[test]
    fn single_line_fails() {
        assert_eq!(
            parse("package demo"),
            Err(ParseError::MissingHeader { lines: 1 })
        );
    }

    #[test]
    fn missing_name_fails() {
        assert_eq!(
            parse("\n\n"),
            Err(ParseError::MissingPackageName {
                line: String::new()
            })
        );
    }
}
