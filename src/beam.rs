//! Discovery and control of Litra Beam lights.

use std::collections::HashSet;

use crate::access::{HidAccess, HidConnection};
use crate::codec::{report_bytes, PropertyUpdate};
use crate::device::DeviceDescriptor;
use crate::error::Result;
use crate::hidapi_access::HidApiAccess;
use crate::protocol::{Property, PRODUCT_ID, VENDOR_ID};

/// Controllable light.
pub trait Light {
    /// Serial number addressing the light.
    fn serial_number(&self) -> &str;

    /// Turn the light on.
    fn on(&self) -> Result<()>;

    /// Turn the light off.
    fn off(&self) -> Result<()>;

    /// Set brightness as a percentage, clamped to `0..=100`.
    fn set_brightness(&self, percent: i32) -> Result<()>;

    /// Set color temperature in Kelvin, clamped to `2700..=6500`.
    fn set_temperature(&self, kelvin: i32) -> Result<()>;

    /// Set color temperature as a percentage of the Kelvin range.
    fn set_temperature_percentage(&self, percent: i32) -> Result<()>;

    fn set_power(&self, on: bool) -> Result<()> {
        if on {
            self.on()
        } else {
            self.off()
        }
    }
}

/// Entry point for finding and addressing lights.
#[derive(Default, Debug, Clone)]
pub struct Litra<A = HidApiAccess> {
    access: A,
}

impl Litra {
    /// Use the system HID library.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: HidAccess> Litra<A> {
    /// Use a custom HID backend.
    pub fn with_access(access: A) -> Self {
        Self { access }
    }

    /// Find all attached lights.
    ///
    /// Devices are reported once per serial number, in enumeration order.
    /// No attached light is not an error.
    pub fn discover(&self) -> Result<Vec<DeviceDescriptor>> {
        let mut seen = HashSet::new();

        let devices: Vec<_> = self
            .access
            .enumerate(VENDOR_ID, PRODUCT_ID)?
            .into_iter()
            .filter(|device| {
                let new = seen.insert(device.serial_number().to_owned());
                if !new {
                    log::debug!("Skipping duplicate interface of {}", device.serial_number());
                }
                new
            })
            .collect();

        log::info!("Discovered {} Litra Beam(s)", devices.len());

        Ok(devices)
    }

    /// Read the descriptor of the light with this serial number.
    pub fn open_by_identity(&self, serial_number: &str) -> Result<DeviceDescriptor> {
        let connection = self.access.open(VENDOR_ID, PRODUCT_ID, serial_number)?;
        connection.descriptor()
    }

    /// Controller for the light with this serial number.
    ///
    /// The light is not opened until a property is written.
    pub fn beam(&self, serial_number: impl Into<String>) -> Beam<'_, A> {
        Beam { access: &self.access, serial_number: serial_number.into() }
    }

    /// Write a single property update report.
    ///
    /// A new connection is opened for every write and closed before
    /// returning, whether or not the write succeeded.
    pub fn write_property(
        &self,
        serial_number: &str,
        property: Property,
        payload: &[u8],
    ) -> Result<usize> {
        write_property(&self.access, serial_number, property, payload)
    }
}

fn write_property<A: HidAccess>(
    access: &A,
    serial_number: &str,
    property: Property,
    payload: &[u8],
) -> Result<usize> {
    let report = report_bytes(property, payload);

    let mut connection = access.open(VENDOR_ID, PRODUCT_ID, serial_number)?;
    log::debug!("Writing {} to {}: {:02x?}", property, serial_number, &report[..]);
    let written = connection.write(&report);
    drop(connection);

    written
}

/// Light addressed by serial number.
#[derive(Debug, Clone)]
pub struct Beam<'a, A> {
    access: &'a A,
    serial_number: String,
}

impl<A: HidAccess> Beam<'_, A> {
    /// Write a property update to this light.
    pub fn write_update(&self, update: &PropertyUpdate) -> Result<usize> {
        write_property(self.access, &self.serial_number, update.property(), update.payload())
    }

    fn apply(&self, update: PropertyUpdate) -> Result<()> {
        self.write_update(&update).map(drop)
    }
}

impl<A: HidAccess> Light for Beam<'_, A> {
    fn serial_number(&self) -> &str {
        &self.serial_number
    }

    fn on(&self) -> Result<()> {
        self.apply(PropertyUpdate::power(true))
    }

    fn off(&self) -> Result<()> {
        self.apply(PropertyUpdate::power(false))
    }

    fn set_brightness(&self, percent: i32) -> Result<()> {
        self.apply(PropertyUpdate::brightness(percent))
    }

    fn set_temperature(&self, kelvin: i32) -> Result<()> {
        self.apply(PropertyUpdate::temperature_kelvin(kelvin))
    }

    fn set_temperature_percentage(&self, percent: i32) -> Result<()> {
        self.apply(PropertyUpdate::temperature_percent(percent))
    }
}
