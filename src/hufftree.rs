use std::cmp::Ordering;

use tracing::debug;

use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        byte: u8,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(b: u8, f: u64) -> Self {
        HuffNode::Leaf { weight: f, byte: b }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// `a` becomes the left (0) child, `b` the right (1) child.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// A node waiting in the build queue. Ordered by weight, then by the order
/// in which it entered the queue, so equal weights always resolve the same way.
#[derive(Debug)]
struct Queued {
    weight: u64,
    seq: usize,
    node: HuffNode,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Result<Option<Self>> {
        HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(bytes))
    }

    /// Builds the tree by greedy pairwise merging. Returns `None` for an empty
    /// table; a single-symbol table yields a lone leaf.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Option<Self>> {
        if frequencies.is_empty() {
            return Ok(None);
        }

        let mut seq = 0;
        let leaves: Vec<Queued> = frequencies
            .iter()
            .map(|(byte, count)| {
                let queued = Queued {
                    weight: count,
                    seq,
                    node: HuffNode::new(byte, count),
                };
                seq += 1;
                queued
            })
            .collect();

        let heap = MinHeap::build(leaves);
        let tree = HuffmanTree::build_from_heap(heap, seq)?;
        debug!(
            symbols = frequencies.len(),
            weight = tree.root.weight(),
            "built huffman tree"
        );
        Ok(Some(tree))
    }

    fn build_from_heap(mut heap: MinHeap<Queued>, mut next_seq: usize) -> Result<Self> {
        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;

            let z = HuffNode::merge(x.node, y.node);
            heap.insert(Queued {
                weight: z.weight(),
                seq: next_seq,
                node: z,
            });
            next_seq += 1;
        }

        let root = heap.into_single()?.node;
        Ok(HuffmanTree { root })
    }
}
