//! Smart home bridge adapter.
//!
//! Maps value changes coming from a home automation bridge onto a [`Light`].
//! The bridge framework itself is not part of this crate; it only needs to
//! forward its characteristic updates to a [`BridgeAccessory`].
//!
//! Failures are logged and otherwise ignored.

use std::error::Error as _;
use std::thread;
use std::time::Duration;

use crate::beam::Light;
use crate::device::DeviceDescriptor;
use crate::error::Error;

/// Number of on/off cycles performed to identify a light.
const IDENTIFY_BLINKS: u32 = 5;

/// Time between on/off toggles while identifying.
const IDENTIFY_INTERVAL: Duration = Duration::from_millis(500);

/// Accessory metadata presented to the bridge.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct AccessoryInfo {
    pub name: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub model: String,
    pub firmware_revision: String,
}

impl From<&DeviceDescriptor> for AccessoryInfo {
    fn from(device: &DeviceDescriptor) -> Self {
        Self {
            name: format!("Litra Beam {}", device.serial_number()),
            serial_number: device.serial_number().to_owned(),
            manufacturer: String::from("Logitech"),
            model: device.product_string().to_owned(),
            firmware_revision: device.release_number().to_string(),
        }
    }
}

/// Convert a color temperature in mireds to Kelvin.
pub fn mireds_to_kelvin(mireds: i32) -> Option<i32> {
    (mireds > 0).then(|| 1_000_000 / mireds)
}

/// Render an error together with its cause.
fn describe(err: &Error) -> String {
    match err.source() {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}

/// Bridge accessory forwarding updates to a light.
pub struct BridgeAccessory<L> {
    info: AccessoryInfo,
    light: L,
    identify_blinks: u32,
    identify_interval: Duration,
}

impl<L: Light> BridgeAccessory<L> {
    pub fn new(info: AccessoryInfo, light: L) -> Self {
        log::info!("Adding accessory for Litra Beam {}", info.serial_number);

        Self {
            info,
            light,
            identify_blinks: IDENTIFY_BLINKS,
            identify_interval: IDENTIFY_INTERVAL,
        }
    }

    /// Override the identify blink pattern.
    pub fn with_identify(mut self, blinks: u32, interval: Duration) -> Self {
        self.identify_blinks = blinks;
        self.identify_interval = interval;
        self
    }

    pub fn info(&self) -> &AccessoryInfo {
        &self.info
    }

    pub fn light(&self) -> &L {
        &self.light
    }

    /// Handle a remote power change.
    pub fn update_power(&self, on: bool) {
        if let Err(err) = self.light.set_power(on) {
            log::error!(
                "Error setting power of {} ({}): {}",
                self.light.serial_number(),
                on,
                describe(&err)
            );
        }
    }

    /// Handle a remote brightness change.
    pub fn update_brightness(&self, percent: i32) {
        if let Err(err) = self.light.set_brightness(percent) {
            log::error!(
                "Error setting brightness of {} ({}): {}",
                self.light.serial_number(),
                percent,
                describe(&err)
            );
        }
    }

    /// Handle a remote color temperature change in mireds.
    pub fn update_color_temperature(&self, mireds: i32) {
        let kelvin = match mireds_to_kelvin(mireds) {
            Some(kelvin) => kelvin,
            None => {
                log::warn!("Ignoring invalid color temperature ({} mireds)", mireds);
                return;
            },
        };

        if let Err(err) = self.light.set_temperature(kelvin) {
            log::error!(
                "Error setting color temperature of {} ({}): {}",
                self.light.serial_number(),
                mireds,
                describe(&err)
            );
        }
    }

    /// Blink the light so it can be located.
    pub fn identify(&self) {
        log::info!("Identify Litra Beam {}", self.light.serial_number());

        for _ in 0..self.identify_blinks {
            self.update_power(true);
            thread::sleep(self.identify_interval);
            self.update_power(false);
            thread::sleep(self.identify_interval);
        }
    }
}
