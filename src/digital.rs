//! Digital pin adapter
//!
//! [`DigitalPin`] presents one expander pin as a direction/value/pull
//! object backed by the register primitives of a [`SeesawGpio`] device.
//! Output pins keep a latch cache so reading an output never touches
//! the bus; input pins always sample hardware.

use crate::device::{PinMode, SeesawGpio};
use crate::error::Error;

/// Signal direction of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Pin samples external logic levels
    #[default]
    Input,
    /// Pin drives its output latch
    Output,
}

/// Output driver topology
///
/// The seesaw GPIO module only drives push-pull; the selection is kept
/// for interface compatibility but never reaches hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveMode {
    /// Actively driven high and low
    #[default]
    PushPull,
    /// Driven low, released high
    OpenDrain,
}

/// Internal pull resistor for input pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Bias toward logic high
    Up,
    /// Bias toward logic low
    Down,
}

fn input_mode(pull: Option<Pull>) -> PinMode {
    match pull {
        Some(Pull::Up) => PinMode::InputPullup,
        Some(Pull::Down) => PinMode::InputPulldown,
        None => PinMode::Input,
    }
}

/// One digital pin on a seesaw expander
///
/// Holds a device handle and a pin index. Construction performs no
/// device access; the hardware pin keeps its previous configuration
/// until a direction is set explicitly.
///
/// The handle is typically shared between pins, e.g. a
/// `&RefCell<Driver>` (see [`SeesawGpio`]'s forwarding impls).
pub struct DigitalPin<D> {
    device: D,
    pin: u8,
    direction: Direction,
    drive_mode: DriveMode,
    pull: Option<Pull>,
    /// Output latch cache, valid while direction is Output
    value: bool,
}

impl<D: SeesawGpio> DigitalPin<D> {
    /// Create an adapter for `pin` on the given device
    pub fn new(device: D, pin: u8) -> Self {
        Self {
            device,
            pin,
            direction: Direction::Input,
            drive_mode: DriveMode::PushPull,
            pull: None,
            value: false,
        }
    }

    /// Pin index on the expander
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Consume the adapter and return the device handle
    ///
    /// The hardware pin retains its last configuration.
    pub fn free(self) -> D {
        self.device
    }

    /// Configure the pin as an output driving `value`
    ///
    /// Issues one mode-set and one write. Any pull selection is
    /// cleared; `drive_mode` is recorded but not sent to hardware.
    pub fn configure_output(
        &mut self,
        value: bool,
        drive_mode: DriveMode,
    ) -> Result<(), Error<D::Error>> {
        self.device.pin_mode(self.pin, PinMode::Output)?;
        self.device.digital_write(self.pin, value)?;
        self.value = value;
        self.drive_mode = drive_mode;
        self.pull = None;
        self.direction = Direction::Output;
        Ok(())
    }

    /// Configure the pin as an input with the given pull selection
    ///
    /// Issues one mode-set.
    pub fn configure_input(&mut self, pull: Option<Pull>) -> Result<(), Error<D::Error>> {
        self.device.pin_mode(self.pin, input_mode(pull))?;
        self.pull = pull;
        self.direction = Direction::Input;
        Ok(())
    }

    /// Current direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the direction, applying default output/input configuration
    ///
    /// Dispatches to [`configure_output`](Self::configure_output) with
    /// `(false, PushPull)` or [`configure_input`](Self::configure_input)
    /// with no pull, so prior drive-mode and pull selections are
    /// overwritten. Callers needing either should call the configure
    /// methods or [`set_pull`](Self::set_pull) afterward.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), Error<D::Error>> {
        match direction {
            Direction::Output => self.configure_output(false, DriveMode::PushPull),
            Direction::Input => self.configure_input(None),
        }
    }

    /// Current logic level of the pin
    ///
    /// Output pins answer from the latch cache without a bus
    /// transaction; input pins sample hardware on every call.
    pub fn value(&mut self) -> Result<bool, Error<D::Error>> {
        match self.direction {
            Direction::Output => Ok(self.value),
            Direction::Input => self.device.digital_read(self.pin).map_err(Error::Bus),
        }
    }

    /// Drive the output latch
    ///
    /// Always writes to hardware, even while the pin is configured as
    /// an input (the latch takes effect once the pin becomes an
    /// output), and updates the latch cache.
    pub fn set_value(&mut self, value: bool) -> Result<(), Error<D::Error>> {
        self.device.digital_write(self.pin, value)?;
        self.value = value;
        Ok(())
    }

    /// Last value driven onto the output latch
    pub(crate) fn latch(&self) -> bool {
        self.value
    }

    /// Stored drive mode
    pub fn drive_mode(&self) -> DriveMode {
        self.drive_mode
    }

    /// Inert drive-mode setter
    ///
    /// The seesaw GPIO module has no drive-mode control, so this
    /// neither stores the selection nor touches hardware. The stored
    /// mode only changes through
    /// [`configure_output`](Self::configure_output).
    pub fn set_drive_mode(&mut self, _mode: DriveMode) {}

    /// Stored pull selection
    pub fn pull(&self) -> Option<Pull> {
        self.pull
    }

    /// Change the pull resistor of an input pin
    ///
    /// Issues one mode-set. Fails with [`Error::PullOnOutput`] while
    /// the pin is configured as an output.
    pub fn set_pull(&mut self, pull: Option<Pull>) -> Result<(), Error<D::Error>> {
        if self.direction == Direction::Output {
            return Err(Error::PullOnOutput);
        }
        self.device.pin_mode(self.pin, input_mode(pull))?;
        self.pull = pull;
        Ok(())
    }
}
