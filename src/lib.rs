//! Logitech Litra Beam control.
//!
//! Lights are found with [`Litra::discover`] and controlled through the
//! [`Light`] operations of a [`Beam`], which addresses a light by its serial
//! number:
//!
//! ```no_run
//! use litra::{Light, Litra};
//!
//! let litra = Litra::new();
//! for device in litra.discover()? {
//!     let beam = litra.beam(device.serial_number());
//!     beam.on()?;
//!     beam.set_brightness(40)?;
//!     beam.set_temperature(4000)?;
//! }
//! # Ok::<(), litra::Error>(())
//! ```
//!
//! Every operation opens the light, writes a single report and closes it
//! again. Out of range values are clamped instead of rejected.

pub mod access;
pub mod beam;
pub mod bridge;
pub mod codec;
pub mod device;
pub mod error;
pub mod hidapi_access;
pub mod protocol;

pub use crate::beam::{Beam, Light, Litra};
pub use crate::codec::PropertyUpdate;
pub use crate::device::DeviceDescriptor;
pub use crate::error::{Error, Result};
pub use crate::protocol::Property;
