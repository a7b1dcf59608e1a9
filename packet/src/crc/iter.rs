use core::borrow::Borrow;

use super::CRCProvider;

/// An iterator wrapper that computes
/// the CRC of the bytes iterated over.
pub(crate) struct CRCComputeIter<'a, C, I> {
    crc_provider: &'a mut C,
    iter: I,
}

impl<'a, C, I> CRCComputeIter<'a, C, I> {
    pub fn new(crc_provider: &'a mut C, iter: I) -> Self {
        Self { crc_provider, iter }
    }
}

impl<'a, C, I> Iterator for CRCComputeIter<'a, C, I>
where
    C: CRCProvider,
    I: Iterator,
    I::Item: Borrow<C::Word>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.iter.next()?;

        self.crc_provider.update(word.borrow());

        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::{crc16_lsb, Crc16Lsb};

    #[test]
    fn passes_bytes_through() {
        let data = [0xde, 0xad, 0xbe, 0xef];
        let mut crc = Crc16Lsb::new();

        let copied: Vec<u8> = CRCComputeIter::new(&mut crc, data.iter())
            .copied()
            .collect();

        assert_eq!(&data[..], &copied[..]);
        assert_eq!(crc16_lsb(&data), crc.finalize());
    }

    #[test]
    fn partial_consumption() {
        let data = [0xde, 0xad, 0xbe, 0xef];
        let mut crc = Crc16Lsb::new();

        let mut iter = CRCComputeIter::new(&mut crc, data.iter());
        iter.next();
        iter.next();

        assert_eq!(crc16_lsb(&data[..2]), crc.finalize());
    }
}
