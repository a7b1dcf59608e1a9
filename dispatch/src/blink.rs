use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use crate::dispatcher::Mode;

/// Non-blocking LED blinker.
///
/// Driven from the control loop with the current monotonic time; the pin
/// is only touched once the interval has elapsed since the last toggle.
pub struct Blinker<P> {
    pin: P,
    interval_ms: u32,
    last_toggle_ms: Option<u64>,
}

impl<P> Blinker<P>
where
    P: StatefulOutputPin,
{
    pub const fn new(pin: P, interval_ms: u32) -> Self {
        Self {
            pin,
            interval_ms,
            last_toggle_ms: None,
        }
    }

    /// Advance the blink pattern.
    ///
    /// Enabling lights the LED at once. Disabling turns it off and resets
    /// the pattern.
    pub fn tick(&mut self, mode: Mode, now_ms: u64) -> Result<(), P::Error> {
        match (mode, self.last_toggle_ms) {
            (Mode::Disabled, None) => {}
            (Mode::Disabled, Some(_)) => {
                self.pin.set_low()?;
                self.last_toggle_ms = None;
            }
            (Mode::Enabled, None) => {
                self.pin.set_high()?;
                self.last_toggle_ms = Some(now_ms);
            }
            (Mode::Enabled, Some(last)) => {
                if now_ms.saturating_sub(last) >= self.interval_ms as u64 {
                    self.pin.toggle()?;
                    self.last_toggle_ms = Some(now_ms);
                }
            }
        }

        Ok(())
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use core::convert::Infallible;

    use embedded_hal::digital::ErrorType;

    /// Pin that remembers its level and counts level changes.
    #[derive(Default)]
    pub struct MockPin {
        pub high: bool,
        pub changes: u32,
    }

    impl MockPin {
        fn set(&mut self, high: bool) {
            if self.high != high {
                self.changes += 1;
            }

            self.high = high;
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.set(true);
            Ok(())
        }
    }

    impl StatefulOutputPin for MockPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn idle_when_disabled() {
        let mut blinker = Blinker::new(MockPin::default(), 500);

        for now in [0, 500, 1000, 5000] {
            blinker.tick(Mode::Disabled, now).unwrap();
        }

        assert_eq!(0, blinker.pin_mut().changes);
    }

    #[test]
    fn toggles_on_interval() {
        let mut blinker = Blinker::new(MockPin::default(), 500);

        blinker.tick(Mode::Enabled, 1000).unwrap();
        assert!(blinker.pin_mut().high);

        blinker.tick(Mode::Enabled, 1499).unwrap();
        assert!(blinker.pin_mut().high);

        blinker.tick(Mode::Enabled, 1500).unwrap();
        assert!(!blinker.pin_mut().high);

        blinker.tick(Mode::Enabled, 2000).unwrap();
        assert!(blinker.pin_mut().high);

        assert_eq!(3, blinker.pin_mut().changes);
    }

    #[test]
    fn interval_restarts_from_last_toggle() {
        let mut blinker = Blinker::new(MockPin::default(), 500);

        blinker.tick(Mode::Enabled, 0).unwrap();
        // late poll
        blinker.tick(Mode::Enabled, 800).unwrap();
        blinker.tick(Mode::Enabled, 1200).unwrap();

        assert_eq!(2, blinker.pin_mut().changes);

        blinker.tick(Mode::Enabled, 1300).unwrap();

        assert_eq!(3, blinker.pin_mut().changes);
    }

    #[test]
    fn disable_turns_off() {
        let mut blinker = Blinker::new(MockPin::default(), 500);

        blinker.tick(Mode::Enabled, 0).unwrap();
        blinker.tick(Mode::Disabled, 10).unwrap();

        assert!(!blinker.pin_mut().high);

        // re-enable lights immediately
        blinker.tick(Mode::Enabled, 20).unwrap();

        assert!(blinker.pin_mut().high);
    }

    #[test]
    fn clock_going_backwards_holds() {
        let mut blinker = Blinker::new(MockPin::default(), 500);

        blinker.tick(Mode::Enabled, 1000).unwrap();
        blinker.tick(Mode::Enabled, 10).unwrap();

        assert_eq!(1, blinker.pin_mut().changes);
    }
}
