//! JSON renderer — the package model serialized for tooling.

use crate::model::Package;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, pkg: &Package) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(pkg).context("failed to serialize package as JSON")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
