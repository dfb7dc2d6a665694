//! Seesaw device interface consumed by pin adapters
//!
//! The device driver owns the bus and the register protocol; pin
//! adapters only need the three GPIO primitives defined here.

use core::cell::RefCell;

/// Pin configuration modes understood by the seesaw GPIO module
///
/// The discriminants are the wire values the seesaw firmware expects in
/// a mode-set register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinMode {
    /// Floating input
    Input = 0x00,
    /// Push-pull output
    Output = 0x01,
    /// Input with internal pull-up
    InputPullup = 0x02,
    /// Input with internal pull-down
    InputPulldown = 0x03,
}

/// Register-level GPIO operations of a seesaw device
///
/// Implemented by device drivers that own the bus transaction layer.
/// All operations are synchronous and unretried; transport failures
/// surface through [`SeesawGpio::Error`] and pin adapters pass them
/// through unmodified.
pub trait SeesawGpio {
    /// Transport error reported by the device driver
    type Error;

    /// Configure the mode of a pin
    fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error>;

    /// Drive a pin's output latch high or low
    fn digital_write(&mut self, pin: u8, value: bool) -> Result<(), Self::Error>;

    /// Sample the current logic level of a pin
    fn digital_read(&mut self, pin: u8) -> Result<bool, Self::Error>;
}

impl<T: SeesawGpio> SeesawGpio for &mut T {
    type Error = T::Error;

    fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error> {
        T::pin_mode(self, pin, mode)
    }

    fn digital_write(&mut self, pin: u8, value: bool) -> Result<(), Self::Error> {
        T::digital_write(self, pin, value)
    }

    fn digital_read(&mut self, pin: u8) -> Result<bool, Self::Error> {
        T::digital_read(self, pin)
    }
}

/// Shared-handle access for several pin adapters on one device.
///
/// Access is strictly sequential; the caller must not hold a borrow of
/// the cell across a pin operation.
impl<T: SeesawGpio> SeesawGpio for &RefCell<T> {
    type Error = T::Error;

    fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error> {
        self.borrow_mut().pin_mode(pin, mode)
    }

    fn digital_write(&mut self, pin: u8, value: bool) -> Result<(), Self::Error> {
        self.borrow_mut().digital_write(pin, value)
    }

    fn digital_read(&mut self, pin: u8) -> Result<bool, Self::Error> {
        self.borrow_mut().digital_read(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingDevice {
        mode_sets: u8,
        writes: u8,
        reads: u8,
    }

    impl SeesawGpio for CountingDevice {
        type Error = ();

        fn pin_mode(&mut self, _pin: u8, _mode: PinMode) -> Result<(), ()> {
            self.mode_sets += 1;
            Ok(())
        }

        fn digital_write(&mut self, _pin: u8, _value: bool) -> Result<(), ()> {
            self.writes += 1;
            Ok(())
        }

        fn digital_read(&mut self, _pin: u8) -> Result<bool, ()> {
            self.reads += 1;
            Ok(false)
        }
    }

    fn exercise<D: SeesawGpio>(mut dev: D) -> Result<(), D::Error> {
        dev.pin_mode(0, PinMode::Output)?;
        dev.digital_write(0, true)?;
        dev.digital_read(1)?;
        Ok(())
    }

    #[test]
    fn test_mut_ref_forwarding() {
        let mut dev = CountingDevice {
            mode_sets: 0,
            writes: 0,
            reads: 0,
        };

        exercise(&mut dev).unwrap();
        assert_eq!(dev.mode_sets, 1);
        assert_eq!(dev.writes, 1);
        assert_eq!(dev.reads, 1);
    }

    #[test]
    fn test_refcell_forwarding() {
        let dev = RefCell::new(CountingDevice {
            mode_sets: 0,
            writes: 0,
            reads: 0,
        });

        // Two handles onto the same device
        exercise(&dev).unwrap();
        exercise(&dev).unwrap();

        let dev = dev.into_inner();
        assert_eq!(dev.mode_sets, 2);
        assert_eq!(dev.writes, 2);
        assert_eq!(dev.reads, 2);
    }
}
