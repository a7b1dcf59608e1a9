use serial_endpoint::LinkConfig;

/// Application settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub link: LinkConfig,
    /// Time between LED toggles while blinking.
    pub blink_interval_ms: u32,
}

impl Config {
    pub const DEFAULT: Self = Self {
        link: LinkConfig::DEFAULT,
        blink_interval_ms: 500,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(115_200, config.link.baud_rate);
        assert_eq!(500, config.blink_interval_ms);
    }
}
