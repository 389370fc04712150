use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::code_table::CodeTable;
use crate::error::{Result, Zip301Error};
use crate::metadata::{read_header, write_header};

/// Everything the artifact stores: the code table, the exact number of
/// meaningful bits, and the packed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData {
    pub code_table: CodeTable,
    pub total_bits: u64,
    pub payload: Vec<u8>,
}

impl CompressedData {
    pub fn empty() -> Self {
        CompressedData {
            code_table: CodeTable::new(),
            total_bits: 0,
            payload: Vec::new(),
        }
    }

    /// Bytes needed to hold `total_bits`.
    pub fn payload_len(&self) -> usize {
        self.total_bits.div_ceil(8) as usize
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_header(writer, &self.code_table, self.total_bits)?;
        writer.write_all(&self.payload)?;
        Ok(())
    }

    pub fn serialize(&self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    pub fn write_file(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }

    pub fn read_file(path: &Path) -> Result<CompressedData> {
        let mut reader = BufReader::new(File::open(path)?);
        CompressedData::deserialize(&mut reader)
    }

    pub fn deserialize<R: BufRead>(reader: &mut R) -> Result<CompressedData> {
        let (code_table, total_bits) = read_header(reader)?;

        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;

        let expected = total_bits.div_ceil(8) as usize;
        if payload.len() < expected {
            return Err(Zip301Error::TruncatedPayload {
                expected,
                actual: payload.len(),
            });
        }
        if payload.len() > expected {
            warn!(
                expected,
                actual = payload.len(),
                "ignoring trailing bytes after payload"
            );
            payload.truncate(expected);
        }

        Ok(CompressedData {
            code_table,
            total_bits,
            payload,
        })
    }
}
