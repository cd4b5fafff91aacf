use crate::engine::Result;
use crate::keywords::Keywords;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// Compact JSON with `", "` between array items, the layout Python's
/// `json.dumps` produces by default. Non-ASCII text stays literal.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

/// Encode keywords as a single JSON line, newline included.
pub fn to_json_line(keywords: &Keywords) -> Result<String> {
    let mut buffer = Vec::with_capacity(16 + keywords.iter().map(|k| k.len() + 4).sum::<usize>());
    let mut serializer = Serializer::with_formatter(&mut buffer, SpacedFormatter);
    keywords.serialize(&mut serializer)?;
    buffer.push(b'\n');

    // serde_json only ever writes valid UTF-8
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write the JSON line to `writer` and flush it.
pub fn write_json_line<W: Write>(mut writer: W, keywords: &Keywords) -> Result<()> {
    let line = to_json_line(keywords)?;
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}
