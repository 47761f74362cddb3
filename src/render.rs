//! Canonical text output: normalize, then print the literal form.
//!
//! ```text
//! {"c": (2, 1, 3), 10: ["d", "c", "a"]}
//!   → normalize() → {'10': ['a', 'c', 'd'], 'c': (1, 2, 3)}
//! ```

use std::io::Write;

use crate::model::Value;
use crate::sort::normalize;
use crate::Result;

/// Normalize `value` and write its canonical text plus a newline.
pub fn render(value: &Value, writer: &mut dyn Write) -> Result<()> {
    let normalized = normalize(value)?;
    writeln!(writer, "{normalized}")?;
    Ok(())
}

/// [`render`] to standard output.
pub fn render_stdout(value: &Value) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    render(value, &mut lock)
}

/// Normalize `value` and return its canonical text.
pub fn to_canonical_string(value: &Value) -> Result<String> {
    Ok(normalize(value)?.to_string())
}
