//! The textual header: one `<code> <label>` line per symbol, the sentinel
//! line, then the decimal count of meaningful payload bits.

use std::io::{self, BufRead, Write};

use crate::code_table::{Code, CodeTable};
use crate::error::{Result, Zip301Error};

pub const HEADER_SENTINEL: &[u8] = b"*****";

const NAMED_LABELS: [(u8, &[u8]); 4] = [
    (b'\n', b"newline"),
    (b' ', b"space"),
    (b'\r', b"return"),
    (b'\t', b"tab"),
];

pub fn symbol_label(byte: u8) -> Vec<u8> {
    NAMED_LABELS
        .iter()
        .find(|(b, _)| *b == byte)
        .map(|(_, name)| name.to_vec())
        .unwrap_or_else(|| vec![byte])
}

pub fn parse_label(label: &[u8]) -> Option<u8> {
    if let Some((byte, _)) = NAMED_LABELS.iter().find(|(_, name)| *name == label) {
        return Some(*byte);
    }
    match label {
        [byte] => Some(*byte),
        _ => None,
    }
}

pub fn write_header<W: Write>(writer: &mut W, table: &CodeTable, total_bits: u64) -> io::Result<()> {
    for (byte, code) in table.iter() {
        write!(writer, "{code} ")?;
        writer.write_all(&symbol_label(byte))?;
        writer.write_all(b"\n")?;
    }
    writer.write_all(HEADER_SENTINEL)?;
    writer.write_all(b"\n")?;
    writeln!(writer, "{total_bits}")?;
    Ok(())
}

/// Reads one `\n`-terminated line without its terminator. `None` at EOF.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    Ok(Some(line))
}

/// Parses the header, leaving `reader` positioned at the first payload byte.
pub fn read_header<R: BufRead>(reader: &mut R) -> Result<(CodeTable, u64)> {
    let mut table = CodeTable::new();
    let mut line_no = 0;

    loop {
        line_no += 1;
        let line = read_line(reader)?
            .ok_or_else(|| Zip301Error::malformed(line_no, "missing header sentinel"))?;
        if line == HEADER_SENTINEL {
            break;
        }

        let split = line
            .iter()
            .position(|&b| b == b' ')
            .ok_or_else(|| Zip301Error::malformed(line_no, "expected `<code> <label>`"))?;
        let (code_text, label) = (&line[..split], &line[split + 1..]);

        let code_text = String::from_utf8_lossy(code_text);
        let code = Code::parse(&code_text).ok_or_else(|| Zip301Error::InvalidCode {
            line: line_no,
            code: code_text.to_string(),
        })?;
        let byte = parse_label(label).ok_or_else(|| {
            Zip301Error::malformed(
                line_no,
                format!("unknown label {:?}", String::from_utf8_lossy(label)),
            )
        })?;
        table.insert(byte, code)?;
    }

    line_no += 1;
    let count_line = read_line(reader)?
        .ok_or_else(|| Zip301Error::malformed(line_no, "missing bit count"))?;
    let total_bits = std::str::from_utf8(&count_line)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| Zip301Error::malformed(line_no, "bit count is not a decimal integer"))?;

    Ok((table, total_bits))
}
