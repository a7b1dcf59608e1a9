use serial_packet::{packet, serialize_into, Frame, Packet};

use crate::{framing::Framing, staging::StagingBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    Packet(packet::Error),
    Transport(E),
}

impl<E> From<packet::Error> for Error<E> {
    fn from(value: packet::Error) -> Self {
        Self::Packet(value)
    }
}

/// One end of a packet link.
///
/// Owns the framing layer, the receive staging slot and the buffer
/// outgoing packets are serialized into.
pub struct Endpoint<F> {
    framing: F,
    staging: StagingBuffer,
    tx: Frame,
}

impl<F> Endpoint<F>
where
    F: Framing,
{
    pub const fn new(framing: F) -> Self {
        Self {
            framing,
            staging: StagingBuffer::new(),
            tx: Frame::new(),
        }
    }

    /// Service the framing layer, staging a frame if one completes.
    ///
    /// Should be called at least once per loop iteration.
    pub fn update(&mut self) -> Result<(), F::Error> {
        let staging = &mut self.staging;

        self.framing.service(|frame| {
            if staging.stage(frame).is_err() {
                warn!("decoded frame too large, dropped ({=usize} bytes)", frame.len());
            }
        })
    }

    /// Serialize a packet and hand it to the framing layer.
    ///
    /// Nothing is transmitted if the packet does not fit a frame. There is
    /// no retry if the transport fails.
    pub fn send_packet(&mut self, command: u8, payload: &[u8]) -> Result<(), Error<F::Error>> {
        serialize_into(command, payload, &mut self.tx)?;

        self.framing.send(&self.tx).map_err(Error::Transport)
    }

    /// Send an already built packet.
    #[inline]
    pub fn send(&mut self, packet: &Packet) -> Result<(), Error<F::Error>> {
        self.send_packet(packet.command(), packet.payload())
    }

    /// Parse the staged frame, if any.
    ///
    /// Returns [`packet::Error::NoData`] when nothing is staged. A staged
    /// frame is consumed by the first call regardless of the outcome.
    pub fn read_packet(&mut self) -> Result<Packet, packet::Error> {
        let frame = self.staging.take().ok_or(packet::Error::NoData)?;

        Packet::parse(frame).inspect_err(|err| {
            warn!("discarding frame: {}", err);
        })
    }

    /// Whether a frame is waiting to be read.
    #[inline]
    pub fn has_packet(&self) -> bool {
        self.staging.is_pending()
    }

    /// Frames lost because a newer one arrived before they were read.
    #[inline]
    pub fn overwritten_frames(&self) -> u32 {
        self.staging.overwritten()
    }

    pub fn framing(&self) -> &F {
        &self.framing
    }

    pub fn framing_mut(&mut self) -> &mut F {
        &mut self.framing
    }

    /// Give back the framing layer.
    pub fn release(self) -> F {
        self.framing
    }
}
