use std::fs;

use zip301::{HuffmanCodec, Zip301Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("zip301-demo");
    fs::create_dir_all(&dir)?;

    let sample_text = "Hello, world! This is a sample text for Huffman compression.\n\
                       The quick brown fox jumps over the lazy dog.\n\
                       Huffman encoding is a greedy algorithm that builds optimal prefix codes.";
    let input = dir.join("sample.txt");
    fs::write(&input, sample_text)?;
    println!("Created sample file: {} bytes", sample_text.len());

    let output = HuffmanCodec::encode_file(&input, &Zip301Config::default())?;
    let compressed_size = fs::metadata(&output)?.len();
    println!(
        "Compressed to {}: {} bytes ({:.1}% of original)",
        output.display(),
        compressed_size,
        compressed_size as f64 / sample_text.len() as f64 * 100.0
    );

    let decoded = HuffmanCodec::decode_file(&output)?;
    if decoded != sample_text.as_bytes() {
        return Err("decompression verification failed".into());
    }
    println!("Round trip matches.");

    fs::remove_dir_all(&dir)?;
    Ok(())
}
