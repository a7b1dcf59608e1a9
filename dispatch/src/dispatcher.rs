use serial_endpoint::{Endpoint, Error, Framing, Packet};

use crate::command::Command;

/// Whether the periodic action is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Disabled,
    Enabled,
}

/// Maps received packets to their effect.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatcher {
    mode: Mode,
}

impl Dispatcher {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Disabled,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Act on one parsed packet.
    ///
    /// Returns the recognized command, or `None` for unknown command bytes,
    /// which are ignored.
    pub fn dispatch<F>(
        &mut self,
        packet: &Packet,
        endpoint: &mut Endpoint<F>,
    ) -> Result<Option<Command>, Error<F::Error>>
    where
        F: Framing,
    {
        let Ok(command) = Command::try_from(packet.command()) else {
            debug!("ignoring unknown command {=u8:#x}", packet.command());
            return Ok(None);
        };

        debug!("dispatching {}", command);

        match command {
            Command::Echo => endpoint.send(packet)?,
            Command::StartBlink => self.mode = Mode::Enabled,
            Command::StopBlink => self.mode = Mode::Disabled,
        }

        Ok(Some(command))
    }
}
