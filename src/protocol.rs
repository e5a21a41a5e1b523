//! Litra Beam HID protocol constants.
//!
//! Every property update is a single output report:
//!
//! | offset | field |
//! |--------|-------|
//! | 0 | report ID (`0x11`) |
//! | 1..3 | header (`0xff 0x04`) |
//! | 3 | property code |
//! | 4.. | payload, big endian |

use std::fmt::{self, Display, Formatter};

/// Logitech USB vendor ID.
pub const VENDOR_ID: u16 = 0x046d;

/// Litra Beam USB product ID.
pub const PRODUCT_ID: u16 = 0xb901;

/// Report ID of the output report used for property updates.
pub const REPORT_ID: u8 = 0x11;

/// Fixed bytes following the report ID.
pub const HEADER: [u8; 2] = [0xff, 0x04];

/// Brightness range in device units.
pub const BRIGHTNESS_MIN: u16 = 30;
pub const BRIGHTNESS_MAX: u16 = 400;

/// Color temperature range in Kelvin.
pub const TEMPERATURE_MIN: u16 = 2700;
pub const TEMPERATURE_MAX: u16 = 6500;

/// Granularity of accepted temperatures.
pub const TEMPERATURE_STEP: u16 = 100;

/// Light property addressed by an update report.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Property {
    Power,
    Brightness,
    Temperature,
}

impl Property {
    /// Property code byte on the wire.
    pub const fn code(self) -> u8 {
        match self {
            Self::Power => 0x1c,
            Self::Brightness => 0x4c,
            Self::Temperature => 0x9c,
        }
    }

    /// Payload length in bytes.
    pub const fn payload_len(self) -> usize {
        match self {
            Self::Power => 1,
            Self::Brightness | Self::Temperature => 2,
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power => write!(f, "power"),
            Self::Brightness => write!(f, "brightness"),
            Self::Temperature => write!(f, "temperature"),
        }
    }
}
