//! Split a listing into named sections at ALL-CAPS header lines.

use std::collections::HashMap;

/// Section name for everything before the first header.
pub const PREAMBLE: &str = "preamble";

/// Section texts keyed by lowercased header name.
#[derive(Debug, Default)]
pub struct Sections {
    sections: HashMap<String, String>,
}

impl Sections {
    /// Text of a section; an absent section reads as empty.
    pub fn get(&self, name: &str) -> &str {
        self.sections.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

/// A trimmed line made only of uppercase letters starts a section.
pub fn is_header(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

/// Partition raw text into sections.
///
/// Header lines are consumed; every other line is kept untrimmed and
/// re-terminated with `\n`, so each section ends with a newline.
pub fn split(raw: &str) -> Sections {
    let mut sections: HashMap<String, String> = HashMap::new();
    let mut current = PREAMBLE.to_string();

    for line in raw.split('\n') {
        let trimmed = line.trim();
        if is_header(trimmed) {
            current = trimmed.to_lowercase();
            continue;
        }
        let text = sections.entry(current.clone()).or_default();
        text.push_str(line);
        text.push('\n');
    }

    Sections { sections }
}
