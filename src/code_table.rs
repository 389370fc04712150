//! Prefix codes derived from a [`HuffmanTree`].

use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

use crate::error::{Result, Zip301Error};
use crate::frequency::FrequencyTable;
use crate::hufftree::{HuffNode, HuffmanTree};

/// An ordered, non-empty bit sequence; `false` is 0, `true` is 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn new(bits: Vec<bool>) -> Self {
        Code(bits)
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Parses a string of `0`/`1` characters. Returns `None` for anything
    /// else, including the empty string.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        text.chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<bool>>>()
            .map(Code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping, iterated in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks the tree, 0 for left and 1 for right. A tree that is a single
    /// leaf gets the code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::new();
        match &tree.root {
            HuffNode::Leaf { byte, .. } => {
                table.codes.insert(*byte, Code(vec![false]));
            }
            root => {
                let mut path = Vec::new();
                generate_table(root, &mut path, &mut table.codes);
            }
        }
        for (byte, code) in &table.codes {
            trace!(byte = *byte, %code, "assigned code");
        }
        table
    }

    /// Adds an entry, rejecting a symbol that already has a code.
    pub fn insert(&mut self, byte: u8, code: Code) -> Result<()> {
        if self.codes.contains_key(&byte) {
            return Err(Zip301Error::DuplicateSymbol { symbol: byte });
        }
        self.codes.insert(byte, code);
        Ok(())
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes.get(&byte)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&b, c)| (b, c))
    }

    /// Sum of code length times occurrence count over every counted symbol.
    pub fn total_bits(&self, frequencies: &FrequencyTable) -> Result<u64> {
        frequencies.iter().try_fold(0u64, |acc, (byte, count)| {
            let code = self
                .get(byte)
                .ok_or(Zip301Error::UnknownSymbol { symbol: byte })?;
            Ok(acc + code.len() as u64 * count)
        })
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In sorted order a prefix sorts directly before the codes it prefixes.
        let mut sorted: Vec<&Code> = self.codes.values().collect();
        sorted.sort();
        sorted.windows(2).all(|w| !w[0].is_prefix_of(w[1]))
    }
}

fn generate_table(node: &HuffNode, path: &mut Vec<bool>, codes: &mut BTreeMap<u8, Code>) {
    match node {
        HuffNode::Leaf { byte, .. } => {
            codes.insert(*byte, Code(path.clone()));
        }
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            generate_table(left, path, codes);
            path.pop();

            path.push(true);
            generate_table(right, path, codes);
            path.pop();
        }
    }
}
