//! HID access abstraction.

use crate::device::DeviceDescriptor;
use crate::error::Result;

/// Host HID capability used to find and open lights.
pub trait HidAccess {
    type Connection: HidConnection;

    /// List descriptors of all attached devices matching the IDs.
    ///
    /// Devices exposing several interfaces may be listed more than once.
    fn enumerate(&self, vendor_id: u16, product_id: u16) -> Result<Vec<DeviceDescriptor>>;

    /// Open the device with the IDs and serial number.
    ///
    /// Must fail with [`Error::NotFound`](crate::Error::NotFound) if no such
    /// device is attached.
    fn open(
        &self,
        vendor_id: u16,
        product_id: u16,
        serial_number: &str,
    ) -> Result<Self::Connection>;
}

/// Open connection to a single device.
///
/// The connection is closed when it is dropped.
pub trait HidConnection {
    /// Write one output report, returning the number of bytes written.
    fn write(&mut self, report: &[u8]) -> Result<usize>;

    /// Read the descriptor of the connected device.
    fn descriptor(&self) -> Result<DeviceDescriptor>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::Error;

    #[derive(Default, Debug)]
    pub struct State {
        pub devices: Vec<DeviceDescriptor>,
        pub fail_enumerate: bool,
        pub fail_open: bool,
        pub fail_write: bool,
        pub opened: usize,
        pub closed: usize,
        pub writes: Vec<(String, Vec<u8>)>,
    }

    /// In-memory HID backend recording every write.
    #[derive(Clone, Default)]
    pub struct MockAccess {
        pub state: Rc<RefCell<State>>,
    }

    impl MockAccess {
        pub fn with_devices(devices: Vec<DeviceDescriptor>) -> Self {
            let access = Self::default();
            access.state.borrow_mut().devices = devices;
            access
        }

        pub fn writes(&self) -> Vec<(String, Vec<u8>)> {
            self.state.borrow().writes.clone()
        }
    }

    impl HidAccess for MockAccess {
        type Connection = MockConnection;

        fn enumerate(&self, _vendor_id: u16, _product_id: u16) -> Result<Vec<DeviceDescriptor>> {
            let state = self.state.borrow();
            if state.fail_enumerate {
                return Err(Error::enumeration("permission denied"));
            }
            Ok(state.devices.clone())
        }

        fn open(
            &self,
            _vendor_id: u16,
            _product_id: u16,
            serial_number: &str,
        ) -> Result<MockConnection> {
            let mut state = self.state.borrow_mut();
            if state.fail_open {
                return Err(Error::access("permission denied"));
            }

            let descriptor = state
                .devices
                .iter()
                .find(|device| device.serial_number() == serial_number)
                .cloned()
                .ok_or_else(|| Error::not_found(serial_number))?;

            state.opened += 1;

            Ok(MockConnection { state: self.state.clone(), descriptor })
        }
    }

    pub struct MockConnection {
        state: Rc<RefCell<State>>,
        descriptor: DeviceDescriptor,
    }

    impl HidConnection for MockConnection {
        fn write(&mut self, report: &[u8]) -> Result<usize> {
            let mut state = self.state.borrow_mut();
            if state.fail_write {
                return Err(Error::access("broken pipe"));
            }
            state.writes.push((self.descriptor.serial_number().to_owned(), report.to_vec()));
            Ok(report.len())
        }

        fn descriptor(&self) -> Result<DeviceDescriptor> {
            Ok(self.descriptor.clone())
        }
    }

    impl Drop for MockConnection {
        fn drop(&mut self) {
            self.state.borrow_mut().closed += 1;
        }
    }
}
