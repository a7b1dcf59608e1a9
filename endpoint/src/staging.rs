use serial_packet::Frame;

pub mod error {
    /// The decoded frame does not fit the staging buffer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Overflow;
}

/// Single-slot holder for the last decoded frame.
///
/// A frame staged while another is still pending replaces it; the older
/// frame is lost and counted in [`overwritten`](Self::overwritten).
/// Taking the frame clears the slot whether or not the frame turns out to
/// be valid, so every frame is handed out at most once.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StagingBuffer {
    frame: Frame,
    pending: bool,
    overwritten: u32,
}

impl StagingBuffer {
    pub const fn new() -> Self {
        Self {
            frame: Frame::new(),
            pending: false,
            overwritten: 0,
        }
    }

    /// Stage a freshly decoded frame.
    ///
    /// Oversized frames are rejected and leave the slot as it was.
    pub fn stage(&mut self, bytes: &[u8]) -> Result<(), error::Overflow> {
        self.frame.copy_from(bytes).map_err(|_| error::Overflow)?;

        if self.pending {
            warn!("unread frame overwritten");
            self.overwritten = self.overwritten.wrapping_add(1);
        }

        self.pending = true;

        Ok(())
    }

    /// Drain the slot.
    #[inline]
    pub fn take(&mut self) -> Option<&Frame> {
        core::mem::replace(&mut self.pending, false).then_some(&self.frame)
    }

    /// Whether a frame is waiting to be taken.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of frames replaced before they were taken.
    #[inline]
    pub fn overwritten(&self) -> u32 {
        self.overwritten
    }
}

#[cfg(test)]
mod tests {
    use super::StagingBuffer;

    use serial_packet::FRAME_CAPACITY;

    mod stage {
        use super::*;

        #[test]
        fn basic() {
            let mut staging = StagingBuffer::new();

            staging.stage(&[0xde, 0xad, 0xbe, 0xef]).unwrap();

            assert!(staging.is_pending());
            assert_eq!(
                Some(&[0xde, 0xad, 0xbe, 0xef][..]),
                staging.take().map(|frame| frame.as_bytes())
            );
        }

        #[test]
        fn exact() {
            let mut staging = StagingBuffer::new();

            staging.stage(&[0x5a; FRAME_CAPACITY]).unwrap();

            assert_eq!(Some(FRAME_CAPACITY), staging.take().map(|frame| frame.len()));
        }

        #[test]
        fn overflow() {
            let mut staging = StagingBuffer::new();

            staging.stage(&[0x01, 0x02, 0x03, 0x04]).unwrap();

            assert!(staging.stage(&[0x5a; FRAME_CAPACITY + 1]).is_err());

            // previous frame survives
            assert_eq!(0, staging.overwritten());
            assert_eq!(
                Some(&[0x01, 0x02, 0x03, 0x04][..]),
                staging.take().map(|frame| frame.as_bytes())
            );
        }

        #[test]
        fn last_write_wins() {
            let mut staging = StagingBuffer::new();

            staging.stage(&[0x01, 0x00, 0xaa, 0xbb]).unwrap();
            staging.stage(&[0x02, 0x00, 0xcc, 0xdd]).unwrap();

            assert_eq!(1, staging.overwritten());
            assert_eq!(
                Some(&[0x02, 0x00, 0xcc, 0xdd][..]),
                staging.take().map(|frame| frame.as_bytes())
            );
        }
    }

    mod take {
        use super::*;

        #[test]
        fn empty() {
            let mut staging = StagingBuffer::new();

            assert!(!staging.is_pending());
            assert!(staging.take().is_none());
        }

        #[test]
        fn at_most_once() {
            let mut staging = StagingBuffer::new();

            staging.stage(&[0xde, 0xad, 0xbe, 0xef]).unwrap();

            assert!(staging.take().is_some());
            assert!(!staging.is_pending());
            assert!(staging.take().is_none());
        }

        #[test]
        fn cycle() {
            let mut staging = StagingBuffer::new();

            for i in 0..10u8 {
                staging.stage(&[i, 0x00, 0xbe, 0xef]).unwrap();

                assert_eq!(Some(i), staging.take().and_then(|frame| frame.command()));
                assert!(staging.take().is_none());
            }

            assert_eq!(0, staging.overwritten());
        }
    }
}
