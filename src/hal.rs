//! embedded-hal 1.0 digital trait implementations
//!
//! These let a [`DigitalPin`] drive generic driver code that is written
//! against `embedded_hal::digital` traits. The semantics match the
//! inherent API: output reads come from the latch cache, input reads
//! sample hardware.

use core::fmt::Debug;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::device::SeesawGpio;
use crate::digital::DigitalPin;
use crate::error::Error;

impl<D: SeesawGpio> ErrorType for DigitalPin<D>
where
    D::Error: Debug,
{
    type Error = Error<D::Error>;
}

impl<D: SeesawGpio> OutputPin for DigitalPin<D>
where
    D::Error: Debug,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_value(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_value(true)
    }
}

impl<D: SeesawGpio> StatefulOutputPin for DigitalPin<D>
where
    D::Error: Debug,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.latch())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.latch())
    }
}

impl<D: SeesawGpio> InputPin for DigitalPin<D>
where
    D::Error: Debug,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.value()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.value().map(|v| !v)
    }
}
