//! Output formatting for a completed selection.
//!
//! Pure functions: (Picked, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::types::OutputFormat;

/// What the CLI prints about the confirmed choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Picked {
    /// 1-based position in the menu.
    pub index: usize,
    pub name: String,
    pub value: String,
}

/// Format a selection for output.
pub fn format_selection(picked: &Picked, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format!("{}\n", picked.value),
        OutputFormat::Json => format_json(picked),
    }
}

fn format_json(picked: &Picked) -> String {
    let mut out = serde_json::to_string(picked)
        .unwrap_or_else(|e| panic!("Failed to serialize selection to JSON: {}", e));
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================
