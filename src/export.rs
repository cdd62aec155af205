//! Scheme export: render a color set as CSS custom properties, a Tailwind
//! config fragment, or JSON.

use std::fmt::Write;

use crate::schemes::{Scheme, SchemeColors};

/// Supported export document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Css,
    Tailwind,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "js",
            ExportFormat::Json => "json",
        }
    }
}

/// Render `colors` in the given format.
pub fn render(colors: &SchemeColors, format: ExportFormat) -> String {
    match format {
        ExportFormat::Css => {
            let mut out = String::from(":root {");
            for (key, value) in colors.entries() {
                let _ = write!(out, "\n  --color-{}: {};", key, value.to_hex());
            }
            out.push_str("\n}");
            out
        }
        ExportFormat::Tailwind => {
            let mut out = String::from("// Add to tailwind.config.js\ncolors: {");
            for (key, value) in colors.entries() {
                let _ = write!(out, "\n  {}: \"{}\",", key, value.to_hex());
            }
            out.push_str("\n}");
            out
        }
        // `Rgb` serializes as its hex string, so this is the plain mapping.
        ExportFormat::Json => serde_json::to_string_pretty(colors).unwrap_or_default(),
    }
}

/// Download-style file name for an exported scheme.
pub fn file_name(scheme: &Scheme, format: ExportFormat) -> String {
    let slug = scheme
        .name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    match format {
        ExportFormat::Tailwind => format!("{}-tailwind-colors.{}", slug, format.extension()),
        _ => format!("{}-colors.{}", slug, format.extension()),
    }
}
