//! Owned bit vectors.

use std::fmt;
use std::str::FromStr;

use super::chess_map::CodecError;

/// An ordered sequence of bits produced by a position codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    pub fn with_capacity(capacity: usize) -> Self {
        BitVector {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Appends the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u16, width: usize) {
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.bits
    }

    /// Builds a vector from 0/1 integers, as found in CSV exports.
    pub fn from_u8s(values: &[u8]) -> Result<Self, CodecError> {
        let bits = values
            .iter()
            .enumerate()
            .map(|(index, &v)| match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(CodecError::InvalidBit {
                    index,
                    value: v.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BitVector { bits })
    }

    /// Returns the bits as 0/1 integers.
    pub fn to_u8s(&self) -> Vec<u8> {
        self.bits.iter().map(|&b| u8::from(b)).collect()
    }

    /// Returns the bits as a `0`/`1` string.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

/// Reads `width` bits starting at `offset` as a big-endian unsigned integer.
#[inline]
pub(crate) fn read_bits(bits: &[bool], offset: usize, width: usize) -> u16 {
    bits[offset..offset + width]
        .iter()
        .fold(0u16, |acc, &b| (acc << 1) | u16::from(b))
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        BitVector { bits }
    }
}

impl FromStr for BitVector {
    type Err = CodecError;

    /// Parses a string of `0` and `1` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .trim()
            .chars()
            .enumerate()
            .map(|(index, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(CodecError::InvalidBit {
                    index,
                    value: c.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BitVector { bits })
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_bits_is_msb_first() {
        let mut v = BitVector::default();
        v.push_bits(0b1001, 4);
        assert_eq!(v.to_bit_string(), "1001");
        v.push_bits(20, 6);
        assert_eq!(v.to_bit_string(), "1001010100");
        assert_eq!(read_bits(v.as_slice(), 4, 6), 20);
        assert_eq!(read_bits(v.as_slice(), 0, 4), 0b1001);
    }

    #[test]
    fn parse_bit_string() {
        let v: BitVector = "0110".parse().unwrap();
        assert_eq!(v.as_slice(), &[false, true, true, false]);
        assert_eq!(v.to_string(), "0110");
    }

    #[test]
    fn parse_rejects_other_chars() {
        let err = "01x0".parse::<BitVector>().unwrap_err();
        assert!(matches!(err, CodecError::InvalidBit { index: 2, ref value } if value == "x"));
    }

    #[test]
    fn u8_conversion() {
        let v = BitVector::from_u8s(&[1, 0, 1]).unwrap();
        assert_eq!(v.to_u8s(), vec![1, 0, 1]);
        assert!(matches!(
            BitVector::from_u8s(&[0, 2]),
            Err(CodecError::InvalidBit { index: 1, ref value }) if value == "2"
        ));
    }
}
