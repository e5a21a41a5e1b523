//! Descriptor of an attached light.

use std::fmt::{self, Display, Formatter};

use hidapi::DeviceInfo;

/// Snapshot of a light's identity and metadata taken at enumeration time.
///
/// A descriptor does not hold an open connection. Lights are addressed by
/// their serial number, which is unique among attached lights.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct DeviceDescriptor {
    serial_number: String,
    path: String,
    product_string: String,
    release_number: u16,
}

impl DeviceDescriptor {
    pub fn new(
        serial_number: impl Into<String>,
        path: impl Into<String>,
        product_string: impl Into<String>,
        release_number: u16,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            path: path.into(),
            product_string: product_string.into(),
            release_number,
        }
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Platform-specific device path, e.g. `/dev/hidraw3` on Linux.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn product_string(&self) -> &str {
        &self.product_string
    }

    /// Firmware revision.
    pub fn release_number(&self) -> u16 {
        self.release_number
    }
}

impl From<&DeviceInfo> for DeviceDescriptor {
    fn from(info: &DeviceInfo) -> Self {
        Self {
            serial_number: info.serial_number().unwrap_or_default().to_owned(),
            path: info.path().to_string_lossy().into_owned(),
            product_string: info.product_string().unwrap_or_default().to_owned(),
            release_number: info.release_number(),
        }
    }
}

impl Display for DeviceDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Serial Number: {}, Path: {}", self.serial_number, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_serial_and_path() {
        let device = DeviceDescriptor::new("ABC123", "/dev/hidraw3", "Litra Beam", 0x0110);
        assert_eq!(device.to_string(), "Serial Number: ABC123, Path: /dev/hidraw3");
        assert_eq!(device.release_number(), 0x0110);
    }
}
