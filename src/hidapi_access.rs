//! HID access through the `hidapi` crate.

use hidapi::{HidApi, HidDevice, HidResult};

use crate::access::{HidAccess, HidConnection};
use crate::device::DeviceDescriptor;
use crate::error::{Error, Result};

/// [`HidAccess`] backed by the system HID library.
///
/// The device list is rebuilt for every call, so nothing is cached between
/// calls.
#[derive(Default, Debug, Copy, Clone)]
pub struct HidApiAccess;

impl HidApiAccess {
    /// Create a HID context listing only matching devices.
    fn context(vendor_id: u16, product_id: u16) -> HidResult<HidApi> {
        let mut api = HidApi::new()?;
        api.reset_devices()?;
        api.add_devices(vendor_id, product_id)?;
        Ok(api)
    }
}

/// Check a reported serial number against the requested one.
///
/// Devices without a serial string are described with an empty serial
/// number, so an empty request matches them.
fn serial_matches(reported: Option<&str>, requested: &str) -> bool {
    reported.unwrap_or_default() == requested
}

impl HidAccess for HidApiAccess {
    type Connection = HidApiConnection;

    fn enumerate(&self, vendor_id: u16, product_id: u16) -> Result<Vec<DeviceDescriptor>> {
        let api = Self::context(vendor_id, product_id).map_err(Error::enumeration)?;

        Ok(api
            .device_list()
            .filter(|info| info.vendor_id() == vendor_id && info.product_id() == product_id)
            .map(DeviceDescriptor::from)
            .collect())
    }

    fn open(
        &self,
        vendor_id: u16,
        product_id: u16,
        serial_number: &str,
    ) -> Result<HidApiConnection> {
        let api = Self::context(vendor_id, product_id).map_err(Error::access)?;

        let info = api
            .device_list()
            .find(|info| {
                info.vendor_id() == vendor_id
                    && info.product_id() == product_id
                    && serial_matches(info.serial_number(), serial_number)
            })
            .ok_or_else(|| Error::not_found(serial_number))?;

        let device = info.open_device(&api).map_err(Error::access)?;
        log::debug!("Opened {} ({})", serial_number, info.path().to_string_lossy());

        Ok(HidApiConnection { device, serial_number: serial_number.to_owned() })
    }
}

/// Open `hidapi` device handle.
pub struct HidApiConnection {
    device: HidDevice,
    serial_number: String,
}

impl HidConnection for HidApiConnection {
    fn write(&mut self, report: &[u8]) -> Result<usize> {
        self.device.write(report).map_err(Error::access)
    }

    fn descriptor(&self) -> Result<DeviceDescriptor> {
        let info = self.device.get_device_info().map_err(Error::access)?;
        Ok(DeviceDescriptor::from(&info))
    }
}

impl Drop for HidApiConnection {
    fn drop(&mut self) {
        log::debug!("Closing {}", self.serial_number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{PRODUCT_ID, VENDOR_ID};

    #[test]
    fn serial_matching() {
        assert!(serial_matches(Some("ABC123"), "ABC123"));
        assert!(!serial_matches(Some("ABC123"), "XYZ789"));
        assert!(!serial_matches(Some("ABC123"), ""));
        assert!(serial_matches(None, ""));
        assert!(!serial_matches(None, "ABC123"));
    }

    #[test]
    fn enumerate_alongside_host_context() {
        // Another HID context in the same process must not break enumeration.
        let _host = HidApi::new();

        if let Ok(devices) = HidApiAccess.enumerate(VENDOR_ID, PRODUCT_ID) {
            // Every interface is listed once.
            let mut paths: Vec<_> = devices.iter().map(|d| d.path().to_owned()).collect();
            let count = paths.len();
            paths.sort();
            paths.dedup();
            assert_eq!(paths.len(), count);
        }
    }
}
