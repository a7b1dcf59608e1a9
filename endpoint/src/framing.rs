use embedded_io::{Read, ReadReady, Write};
use heapless::Vec;
use serial_packet::{Frame, FRAME_CAPACITY};

/// Frames are terminated by a zero byte on the wire.
pub const DELIMITER: u8 = 0x00;

/// Worst-case COBS encoding of a full frame, delimiter included.
pub const ENCODED_CAPACITY: usize = FRAME_CAPACITY + FRAME_CAPACITY / 254 + 1 + 1;

/// The layer that delimits frames on the byte stream.
pub trait Framing {
    type Error;

    /// Encode `frame` and write it out.
    fn send(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Make progress on decoding incoming bytes.
    ///
    /// Invokes `on_frame` at most once, synchronously, with the decoded
    /// bytes of a complete frame.
    fn service<F>(&mut self, on_frame: F) -> Result<(), Self::Error>
    where
        F: FnMut(&[u8]);
}

/// COBS framing over a byte transport.
///
/// Reads never block: bytes are only pulled while the transport reports
/// them ready, and reading stops right after a frame is delivered so
/// later frames stay queued in the transport.
pub struct CobsFraming<T> {
    transport: T,
    rx: Vec<u8, ENCODED_CAPACITY>,
    discarding: bool,
    tx: [u8; ENCODED_CAPACITY],
}

impl<T> CobsFraming<T> {
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            rx: Vec::new(),
            discarding: false,
            tx: [0; ENCODED_CAPACITY],
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport, dropping any partial frame.
    pub fn release(self) -> T {
        self.transport
    }

    /// Handle one incoming byte, returning the decoded length once a
    /// complete frame sits at the front of `rx`.
    fn ingest(&mut self, byte: u8) -> Option<usize> {
        if byte != DELIMITER {
            if !self.discarding && self.rx.push(byte).is_err() {
                warn!("oversized frame, skipping to next delimiter");
                self.discarding = true;
            }

            return None;
        }

        if core::mem::take(&mut self.discarding) || self.rx.is_empty() {
            self.rx.clear();
            return None;
        }

        match cobs::decode_in_place(&mut self.rx) {
            Ok(len) => Some(len),
            Err(_) => {
                warn!("dropping undecodable frame");
                self.rx.clear();
                None
            }
        }
    }
}

impl<T> Framing for CobsFraming<T>
where
    T: Read + ReadReady + Write,
{
    type Error = T::Error;

    fn send(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        // frames never exceed FRAME_CAPACITY, so tx always has room
        let len = cobs::encode(frame, &mut self.tx[..ENCODED_CAPACITY - 1]);
        self.tx[len] = DELIMITER;

        self.transport.write_all(&self.tx[..=len])?;
        self.transport.flush()
    }

    fn service<F>(&mut self, mut on_frame: F) -> Result<(), Self::Error>
    where
        F: FnMut(&[u8]),
    {
        let mut byte = [0u8; 1];

        while self.transport.read_ready()? {
            if self.transport.read(&mut byte)? == 0 {
                break;
            }

            if let Some(len) = self.ingest(byte[0]) {
                trace!("frame decoded, {=usize} bytes", len);
                on_frame(&self.rx[..len]);
                self.rx.clear();

                break;
            }
        }

        Ok(())
    }
}
