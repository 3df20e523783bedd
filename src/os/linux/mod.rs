pub mod constants;
pub mod enumerate;
pub mod usb_device;
pub mod usbfs;
