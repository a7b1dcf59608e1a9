/// Serial link parameters, for whoever opens the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Line speed in bits per second.
    pub baud_rate: u32,
}

impl LinkConfig {
    pub const DEFAULT: Self = Self { baud_rate: 115_200 };
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
