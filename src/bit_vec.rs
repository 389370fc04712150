use crate::code_table::Code;

/// MSB-first bit buffer. Unused low bits of the last byte stay zero.
#[derive(Default, Debug)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: u64,
}

impl BitVec {
    pub fn with_capacity_bits(bit_count: u64) -> Self {
        BitVec {
            bits: Vec::with_capacity(bit_count.div_ceil(8) as usize),
            bit_count: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bits
    }

    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = (self.bit_count / 8) as usize;
        let bit_offset = self.bit_count % 8;

        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    pub fn push_code(&mut self, code: &Code) {
        for &bit in code.bits() {
            self.push_bit(bit);
        }
    }

    /// Reads bit `index`. Callers keep `index` below `bit_count`.
    pub fn read_bit(&self, index: u64) -> bool {
        let byte = self.bits[(index / 8) as usize];
        (byte >> (7 - index % 8)) & 1 == 1
    }
}

impl From<(u64, Vec<u8>)> for BitVec {
    fn from((bit_count, bits): (u64, Vec<u8>)) -> Self {
        BitVec { bits, bit_count }
    }
}
