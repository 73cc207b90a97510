//! Structured result output.

use std::io::{self, Write};

use serde::Serialize;

/// Write `value` as pretty JSON followed by a newline.
///
/// The document is rendered in full before anything is written, so a
/// serialization failure never leaves partial output behind.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> io::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(writer, "{rendered}")?;
    writer.flush()
}

/// Write `value` to stdout.
pub fn emit_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}
