use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::bit_vec::BitVec;
use crate::code_table::{Code, CodeTable};
use crate::compressed_data::CompressedData;
use crate::config::Zip301Config;
use crate::error::{Result, Zip301Error};
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffmanTree;
use crate::input::read_input;

/// Encoder state for one input: its symbol counts and the code table built
/// from them.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    code_table: CodeTable,
}

impl HuffmanCodec {
    /// Counts `data`, builds the tree, and derives the code table. The tree is
    /// dropped once the table exists.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_bytes(data);
        let code_table = match HuffmanTree::from_frequencies(&frequencies)? {
            Some(tree) => CodeTable::from_tree(&tree),
            None => CodeTable::new(),
        };
        Ok(HuffmanCodec {
            frequencies,
            code_table,
        })
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    /// Packs `data`, which must be the input this codec was built from, and
    /// checks the packed length against the bit total computed from counts.
    pub fn encode(&self, data: &[u8]) -> Result<CompressedData> {
        let total_bits = self.code_table.total_bits(&self.frequencies)?;

        let mut bit_vec = BitVec::with_capacity_bits(total_bits);
        for &byte in data {
            let code = self
                .code_table
                .get(byte)
                .ok_or(Zip301Error::UnknownSymbol { symbol: byte })?;
            bit_vec.push_code(code);
        }

        if bit_vec.bit_count() != total_bits {
            return Err(Zip301Error::BitCountMismatch {
                expected: total_bits,
                actual: bit_vec.bit_count(),
            });
        }

        debug!(
            input_bytes = data.len(),
            symbols = self.code_table.len(),
            total_bits,
            payload_bytes = bit_vec.as_bytes().len(),
            "encoded input"
        );

        Ok(CompressedData {
            code_table: self.code_table.clone(),
            total_bits,
            payload: bit_vec.into_bytes(),
        })
    }

    pub fn compress(data: &[u8]) -> Result<CompressedData> {
        HuffmanCodec::from_bytes(data)?.encode(data)
    }

    /// Reads `input` line by line, compresses it, and writes the artifact next
    /// to it. Returns the output path.
    pub fn encode_file(input: &Path, config: &Zip301Config) -> Result<PathBuf> {
        let data = read_input(input)?;
        HuffmanCodec::write_artifact(input, &data, config)
    }

    /// Compresses `data`, already loaded from `input`, and writes the artifact
    /// at `config.output_path(input)`.
    pub fn write_artifact(input: &Path, data: &[u8], config: &Zip301Config) -> Result<PathBuf> {
        let compressed = HuffmanCodec::compress(data)?;
        let output = config.output_path(input);
        compressed.write_file(&output)?;
        info!(
            input = %input.display(),
            output = %output.display(),
            total_bits = compressed.total_bits,
            "wrote artifact"
        );
        Ok(output)
    }

    pub fn decode_file(path: &Path) -> Result<Vec<u8>> {
        HuffmanCodec::decode(&CompressedData::read_file(path)?)
    }

    /// Reads exactly `total_bits` bits, emitting a symbol each time the walk
    /// reaches a code's end. Padding bits past `total_bits` are never read.
    pub fn decode(compressed: &CompressedData) -> Result<Vec<u8>> {
        let expected = compressed.payload_len();
        if compressed.payload.len() < expected {
            return Err(Zip301Error::TruncatedPayload {
                expected,
                actual: compressed.payload.len(),
            });
        }

        let trie = DecodeTrie::from_table(&compressed.code_table)?;
        let bit_vec = BitVec::from((compressed.total_bits, compressed.payload.clone()));

        let mut result = Vec::new();
        let mut current = DecodeTrie::ROOT;
        for bit_index in 0..compressed.total_bits {
            current = trie
                .step(current, bit_vec.read_bit(bit_index))
                .ok_or(Zip301Error::UnmatchedBits { bit_index })?;
            if let Some(byte) = trie.symbol(current) {
                result.push(byte);
                current = DecodeTrie::ROOT;
            }
        }

        if current != DecodeTrie::ROOT {
            return Err(Zip301Error::IncompleteCode {
                bit_index: compressed.total_bits,
            });
        }

        Ok(result)
    }
}

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: [Option<usize>; 2],
    symbol: Option<u8>,
}

/// Binary trie over the code table, stored as an index arena.
#[derive(Debug)]
struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl DecodeTrie {
    const ROOT: usize = 0;

    fn from_table(table: &CodeTable) -> Result<Self> {
        let mut trie = DecodeTrie {
            nodes: vec![TrieNode::default()],
        };
        for (byte, code) in table.iter() {
            trie.insert(byte, code)?;
        }
        Ok(trie)
    }

    fn insert(&mut self, byte: u8, code: &Code) -> Result<()> {
        let ambiguous = || Zip301Error::AmbiguousCode {
            code: code.to_string(),
        };

        let mut current = Self::ROOT;
        for &bit in code.bits() {
            if self.nodes[current].symbol.is_some() {
                return Err(ambiguous());
            }
            let slot = usize::from(bit);
            current = match self.nodes[current].children[slot] {
                Some(next) => next,
                None => {
                    self.nodes.push(TrieNode::default());
                    let next = self.nodes.len() - 1;
                    self.nodes[current].children[slot] = Some(next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        let occupied = node.symbol.is_some() || node.children.iter().any(Option::is_some);
        if current == Self::ROOT || occupied {
            return Err(ambiguous());
        }
        node.symbol = Some(byte);
        Ok(())
    }

    fn step(&self, node: usize, bit: bool) -> Option<usize> {
        self.nodes[node].children[usize::from(bit)]
    }

    fn symbol(&self, node: usize) -> Option<u8> {
        self.nodes[node].symbol
    }
}
