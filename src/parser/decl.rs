//! Declaration line grammar shared by the section parsers.

use crate::model::Variable;
use regex::Regex;
use std::sync::LazyLock;

/// Prefix marking a documentation or continuation line.
pub const INDENT: &str = "    ";

/// Keywords stripped from the front of a value declaration.
const VALUE_KEYWORDS: &[&str] = &["var ", "const "];

// Method: text after the receiver's closing paren, up to the next paren
static RE_METHOD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^func \([^)]*\)([^(]*)").unwrap());

// Free function: text after the keyword, up to the first paren
static RE_FUNC_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^func ([^(]*)").unwrap());

/// Whether a line is documentation for the preceding declaration.
pub fn is_continuation(line: &str) -> bool {
    line.starts_with(INDENT)
}

/// Strip exactly one indent level from a documentation line.
pub fn doc_fragment(line: &str) -> &str {
    line.strip_prefix(INDENT).unwrap_or(line)
}

/// Whether a line declares a free function (`func Name(`), not a method.
pub fn is_free_function(line: &str) -> bool {
    line.starts_with("func ") && !is_method(line)
}

/// Whether a line declares a method (`func (recv) Name(`).
pub fn is_method(line: &str) -> bool {
    line.starts_with("func (")
}

/// Name of a declared function or method, independent of the receiver.
///
/// `func (t *Foo) Bar() string` → `Bar`, `func Foo(a int)` → `Foo`.
/// Returns an empty string for anything that is not a `func` line.
pub fn function_name(line: &str) -> String {
    let re = if is_method(line) {
        &RE_METHOD_NAME
    } else {
        &RE_FUNC_NAME
    };
    re.captures(line)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Parse one value declaration line.
///
/// `var Name Type` keeps `Type`; `const Name = value` is recognized as an
/// assignment but the value is not kept. Works for lines inside blocks and
/// interface method signatures too, which carry no keyword.
pub fn parse_variable(line: &str) -> Variable {
    let definition = line.trim();
    let mut variable = Variable {
        definition: definition.to_string(),
        ..Default::default()
    };

    let rest = VALUE_KEYWORDS
        .iter()
        .find_map(|kw| definition.strip_prefix(kw))
        .unwrap_or(definition);

    let Some(name) = rest.split_whitespace().next() else {
        return variable;
    };
    variable.name = name.to_string();

    let remainder = rest.trim_start()[name.len()..].trim();
    if !remainder.is_empty() && !remainder.starts_with('=') {
        variable.type_name = remainder.to_string();
    }
    variable
}

/// Whether a body line is a blank or `//` comment rather than a declaration.
pub fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("//")
}
