use embedded_hal::digital::StatefulOutputPin;
use serial_endpoint::{packet, Endpoint, Framing};

use crate::{
    blink::Blinker,
    command::Command,
    config::Config,
    dispatcher::{Dispatcher, Mode},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E, P> {
    Link(serial_endpoint::Error<E>),
    Pin(P),
}

impl<E, P> From<serial_endpoint::Error<E>> for Error<E, P> {
    fn from(value: serial_endpoint::Error<E>) -> Self {
        Self::Link(value)
    }
}

/// The device control loop.
///
/// Owns the endpoint, the dispatcher state and the LED. Call
/// [`poll`](Self::poll) repeatedly with a monotonic millisecond clock.
pub struct Controller<F, P> {
    endpoint: Endpoint<F>,
    dispatcher: Dispatcher,
    blinker: Blinker<P>,
}

impl<F, P> Controller<F, P>
where
    F: Framing,
    P: StatefulOutputPin,
{
    pub fn new(framing: F, led: P, config: &Config) -> Self {
        Self {
            endpoint: Endpoint::new(framing),
            dispatcher: Dispatcher::new(),
            blinker: Blinker::new(led, config.blink_interval_ms),
        }
    }

    /// Run one loop iteration.
    ///
    /// Services the link, dispatches at most one packet, then advances the
    /// blinker. Returns the command dispatched this iteration, if any.
    /// The blinker is advanced even when the link reports an error.
    pub fn poll(&mut self, now_ms: u64) -> Result<Option<Command>, Error<F::Error, P::Error>> {
        let dispatched = self.receive();

        self.blinker
            .tick(self.dispatcher.mode(), now_ms)
            .map_err(Error::Pin)?;

        dispatched.map_err(Error::Link)
    }

    fn receive(&mut self) -> Result<Option<Command>, serial_endpoint::Error<F::Error>> {
        self.endpoint
            .update()
            .map_err(serial_endpoint::Error::Transport)?;

        match self.endpoint.read_packet() {
            Ok(packet) => self.dispatcher.dispatch(&packet, &mut self.endpoint),
            // corrupt frames are dropped, nothing to report
            Err(packet::Error::NoData)
            | Err(packet::Error::ChecksumMismatch)
            | Err(packet::Error::MalformedFrame) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.dispatcher.mode()
    }

    /// Send a packet to the peer.
    pub fn send_packet(
        &mut self,
        command: u8,
        payload: &[u8],
    ) -> Result<(), Error<F::Error, P::Error>> {
        Ok(self.endpoint.send_packet(command, payload)?)
    }

    pub fn endpoint(&self) -> &Endpoint<F> {
        &self.endpoint
    }

    pub fn endpoint_mut(&mut self) -> &mut Endpoint<F> {
        &mut self.endpoint
    }

    pub fn led_mut(&mut self) -> &mut P {
        self.blinker.pin_mut()
    }

    /// Tear down, returning the framing layer and the LED.
    pub fn release(self) -> (F, P) {
        (self.endpoint.release(), self.blinker.release())
    }
}
