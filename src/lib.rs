//! # zip301
//!
//! A small, deterministic Huffman compressor for text.
//!
//! ## Quick Start
//!
//! ```rust
//! use zip301::HuffmanCodec;
//!
//! let text = b"the quick brown fox jumps over the lazy dog";
//! let compressed = HuffmanCodec::compress(text)?;
//!
//! // Header lines, the `*****` sentinel, the bit count, then packed bytes.
//! let artifact = compressed.serialize()?;
//! assert!(artifact.len() > compressed.payload.len());
//!
//! let restored = HuffmanCodec::decode(&compressed)?;
//! assert_eq!(restored, text);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod code_table;
pub mod compressed_data;
pub mod config;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod input;
pub mod metadata;

// Internal modules - not part of public API
mod bit_vec;
mod min_heap;

// Re-export main types for convenience
pub use code_table::{Code, CodeTable};
pub use compressed_data::CompressedData;
pub use config::Zip301Config;
pub use error::{Result, Zip301Error};
pub use frequency::FrequencyTable;
pub use huffman_codec::HuffmanCodec;
pub use hufftree::HuffmanTree;
