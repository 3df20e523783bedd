pub mod device_id;
pub mod error;
pub mod os;
#[cfg(target_os = "linux")]
pub mod config;

pub use device_id::DeviceId;
pub use error::{Error, Result};
#[cfg(target_os = "linux")]
pub use os::linux::constants::*;
#[cfg(target_os = "linux")]
pub use os::linux::enumerate::UsbEnumerate;
#[cfg(target_os = "linux")]
pub use os::linux::usb_device::UsbDevice;
#[cfg(target_os = "linux")]
pub use os::linux::usbfs::{reset, UsbFs};
