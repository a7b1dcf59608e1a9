use core::ops::Deref;

use heapless::Vec;

use crate::Error;

/// Hard ceiling on the size of a frame, header and checksum included.
pub const FRAME_CAPACITY: usize = 255;

/// `[command, payload length]`
pub const HEADER_LEN: usize = 2;

pub const CHECKSUM_LEN: usize = 2;

/// Bytes a frame carries on top of its payload.
pub const FRAME_OVERHEAD: usize = HEADER_LEN + CHECKSUM_LEN;

/// Largest payload a well-formed frame can carry.
pub const MAX_PAYLOAD_LEN: usize = FRAME_CAPACITY - FRAME_OVERHEAD;

/// Largest payload the serializer accepts. Serialization requires the
/// frame to stay strictly below [`FRAME_CAPACITY`].
pub const MAX_SEND_PAYLOAD_LEN: usize = MAX_PAYLOAD_LEN - 1;

/// Raw frame bytes, after deframing or before framing.
///
/// Layout: `command | length | payload.. | crc_hi | crc_lo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: Vec<u8, FRAME_CAPACITY>,
}

impl Frame {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Copy `src` into a new frame.
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        let mut frame = Self::new();
        frame.copy_from(src)?;

        Ok(frame)
    }

    /// Replace the contents of the frame with `src`.
    ///
    /// On overflow the frame is left untouched.
    pub fn copy_from(&mut self, src: &[u8]) -> Result<(), Error> {
        if src.len() > FRAME_CAPACITY {
            return Err(Error::BufferOverflow);
        }

        self.bytes.clear();
        self.bytes
            .extend_from_slice(src)
            .map_err(|_| Error::BufferOverflow)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Append a single byte.
    #[inline]
    pub(crate) fn push(&mut self, byte: u8) -> Result<(), Error> {
        self.bytes.push(byte).map_err(|_| Error::BufferOverflow)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Command byte, if the header is present.
    pub fn command(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Payload length as declared by the header.
    pub fn declared_len(&self) -> Option<usize> {
        self.bytes.get(1).map(|&len| len as usize)
    }
}

impl Deref for Frame {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_constants() {
        assert_eq!(4, FRAME_OVERHEAD);
        assert_eq!(251, MAX_PAYLOAD_LEN);
        assert_eq!(250, MAX_SEND_PAYLOAD_LEN);
    }

    #[test]
    fn copy_exact() {
        let src = [0xaa; FRAME_CAPACITY];
        let frame = Frame::from_slice(&src).unwrap();

        assert_eq!(FRAME_CAPACITY, frame.len());
    }

    #[test]
    fn copy_overflow_leaves_frame_untouched() {
        let mut frame = Frame::from_slice(&[0x72, 0x00, 0xde, 0xad]).unwrap();

        assert_eq!(
            Err(Error::BufferOverflow),
            frame.copy_from(&[0; FRAME_CAPACITY + 1])
        );
        assert_eq!(&[0x72, 0x00, 0xde, 0xad], frame.as_bytes());
    }

    #[test]
    fn header_accessors() {
        let frame = Frame::from_slice(&[b'b', 3]).unwrap();

        assert_eq!(Some(b'b'), frame.command());
        assert_eq!(Some(3), frame.declared_len());
        assert_eq!(None, Frame::new().command());
    }
}
