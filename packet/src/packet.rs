use heapless::Vec;

use crate::{
    crc::{crc16_lsb, CRCComputeIter, CRCProvider, Crc16Lsb},
    frame::{Frame, CHECKSUM_LEN, FRAME_CAPACITY, FRAME_OVERHEAD, HEADER_LEN, MAX_PAYLOAD_LEN},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The frame would not fit in [`FRAME_CAPACITY`].
    BufferOverflow,
    /// Declared payload length disagrees with the frame size.
    MalformedFrame,
    /// Checksum did not match the frame contents.
    ChecksumMismatch,
    /// No frame waiting to be parsed.
    NoData,
}

/// A command and its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    command: u8,
    payload: Vec<u8, MAX_PAYLOAD_LEN>,
}

impl Packet {
    pub fn new(command: u8, payload: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            command,
            payload: Vec::from_slice(payload).map_err(|_| Error::BufferOverflow)?,
        })
    }

    /// A packet with no payload.
    pub const fn empty(command: u8) -> Self {
        Self {
            command,
            payload: Vec::new(),
        }
    }

    #[inline]
    pub fn command(&self) -> u8 {
        self.command
    }

    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Render the packet to a new frame.
    pub fn serialize(&self) -> Result<Frame, Error> {
        serialize(self.command, &self.payload)
    }

    /// Construct the packet from frame bytes.
    pub fn parse(frame: &[u8]) -> Result<Self, Error> {
        parse(frame)
    }
}

/// Render `command` and `payload` to a new frame.
pub fn serialize(command: u8, payload: &[u8]) -> Result<Frame, Error> {
    let mut frame = Frame::new();
    serialize_into(command, payload, &mut frame)?;

    Ok(frame)
}

/// Render `command` and `payload` into `frame`, replacing its contents.
///
/// Fails with [`Error::BufferOverflow`] unless `payload.len() + 4 < 255`,
/// in which case `frame` is not modified.
pub fn serialize_into(command: u8, payload: &[u8], frame: &mut Frame) -> Result<(), Error> {
    if payload.len() + FRAME_OVERHEAD >= FRAME_CAPACITY {
        return Err(Error::BufferOverflow);
    }

    frame.clear();

    // length fits a byte, checked above
    let header = [command, payload.len() as u8];
    let mut crc = Crc16Lsb::new();

    CRCComputeIter::new(&mut crc, header.iter().chain(payload))
        .try_for_each(|&byte| frame.push(byte))?;

    crc.finalize()
        .to_be_bytes()
        .into_iter()
        .try_for_each(|byte| frame.push(byte))
}

/// Validate frame bytes and extract the packet.
///
/// The checksum is verified before the declared length so that any
/// single-bit error, header included, reports [`Error::ChecksumMismatch`].
pub fn parse(frame: &[u8]) -> Result<Packet, Error> {
    if frame.len() < FRAME_OVERHEAD || frame.len() > FRAME_CAPACITY {
        return Err(Error::MalformedFrame);
    }

    let (body, checksum) = frame.split_at(frame.len() - CHECKSUM_LEN);
    let received = u16::from_be_bytes([checksum[0], checksum[1]]);

    if crc16_lsb(body) != received {
        return Err(Error::ChecksumMismatch);
    }

    let (header, payload) = body.split_at(HEADER_LEN);

    if header[1] as usize + FRAME_OVERHEAD != frame.len() {
        return Err(Error::MalformedFrame);
    }

    Ok(Packet {
        command: header[0],
        payload: Vec::from_slice(payload).map_err(|_| Error::MalformedFrame)?,
    })
}
