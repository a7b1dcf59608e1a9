//! CRC-16-CCITT in both bit orders.
//!
//! [`crc16_lsb`] (reflected, polynomial `0x8408`) protects every packet on
//! the wire. [`crc16_msb`] is the straight `0x1021` form and is kept as a
//! reference for peers that compute the checksum MSB first.

pub(crate) use iter::CRCComputeIter;

mod iter;

/// Generator polynomial, MSB-first form.
pub const CRC_16_CCITT_POLYNOMIAL: u16 = 0x1021;
/// Generator polynomial, bit-reversed for LSB-first processing.
pub const CRC_16_CCITT_POLYNOMIAL_REVERSED: u16 = 0x8408;
/// Initial remainder for both variants.
pub const CRC_16_INIT: u16 = 0xffff;

/// Describes types that can provide
/// a CRC computation.
pub trait CRCProvider {
    type Word;
    type Rep: Eq;

    fn update(&mut self, word: &Self::Word);
    fn finalize(&mut self) -> Self::Rep;
}

/// Reflected CRC-16-CCITT (LSB first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc16Lsb {
    rem: u16,
}

impl Default for Crc16Lsb {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc16Lsb {
    pub const fn new() -> Self {
        Self { rem: CRC_16_INIT }
    }
}

impl CRCProvider for Crc16Lsb {
    type Word = u8;
    type Rep = u16;

    fn update(&mut self, word: &u8) {
        self.rem ^= *word as u16;

        for _ in 0..8 {
            if self.rem & 0x0001 != 0 {
                self.rem = (self.rem >> 1) ^ CRC_16_CCITT_POLYNOMIAL_REVERSED;
            } else {
                self.rem >>= 1;
            }
        }
    }

    /// Returns the remainder and rearms the provider.
    fn finalize(&mut self) -> u16 {
        core::mem::replace(&mut self.rem, CRC_16_INIT)
    }
}

/// CRC-16-CCITT computed MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc16Msb {
    rem: u16,
}

impl Default for Crc16Msb {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc16Msb {
    pub const fn new() -> Self {
        Self { rem: CRC_16_INIT }
    }
}

impl CRCProvider for Crc16Msb {
    type Word = u8;
    type Rep = u16;

    fn update(&mut self, word: &u8) {
        self.rem ^= (*word as u16) << 8;

        for _ in 0..8 {
            if self.rem & 0x8000 != 0 {
                self.rem = (self.rem << 1) ^ CRC_16_CCITT_POLYNOMIAL;
            } else {
                self.rem <<= 1;
            }
        }
    }

    /// Returns the remainder and rearms the provider.
    fn finalize(&mut self) -> u16 {
        core::mem::replace(&mut self.rem, CRC_16_INIT)
    }
}

/// Compute the checksum of `data` with `provider`.
fn compute<'a, C>(mut provider: C, data: impl IntoIterator<Item = &'a u8>) -> u16
where
    C: CRCProvider<Word = u8, Rep = u16>,
{
    data.into_iter().for_each(|byte| provider.update(byte));
    provider.finalize()
}

/// CRC-16-CCITT over `data`, MSB first.
pub fn crc16_msb(data: &[u8]) -> u16 {
    compute(Crc16Msb::new(), data)
}

/// Reflected CRC-16-CCITT over `data`, LSB first.
///
/// This is the checksum carried by every frame.
pub fn crc16_lsb(data: &[u8]) -> u16 {
    compute(Crc16Lsb::new(), data)
}
