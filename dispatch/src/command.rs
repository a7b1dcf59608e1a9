use serial_macros::CommandCode;

/// Commands understood by the device.
#[derive(CommandCode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Send the received packet back unchanged. Used as a link self-test.
    #[code(b'r')]
    Echo,
    #[code(b'b')]
    StartBlink,
    #[code(b'o')]
    StopBlink,
}
