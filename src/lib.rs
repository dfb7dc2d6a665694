//! Digital I/O pins on seesaw I/O expanders
//!
//! The seesaw is an I2C-attached helper chip that exposes GPIO, ADC and
//! other peripherals through a register interface. This crate covers the
//! digital GPIO side:
//!
//! - A [`SeesawGpio`] trait describing the three register-level pin
//!   operations a device driver must provide (mode set, write, read)
//! - A [`DigitalPin`] adapter that turns those primitives into a
//!   direction/value/pull pin object with the usual latch caching
//! - `embedded-hal` 1.0 digital trait implementations so seesaw pins
//!   slot into generic driver code
//!
//! The bus transaction layer (I2C framing, addressing, retries) is out
//! of scope; implement [`SeesawGpio`] on your device driver and hand the
//! adapter a shared handle to it.

#![no_std]
#![deny(unsafe_code)]

pub mod device;
pub mod digital;
pub mod error;

mod hal;

pub use device::{PinMode, SeesawGpio};
pub use digital::{DigitalPin, Direction, DriveMode, Pull};
pub use error::Error;
