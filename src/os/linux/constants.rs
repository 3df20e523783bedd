/// Directory the kernel exposes one entry per attached USB device under.
pub const SYSFS_USB_DEVICES: &str = "/sys/bus/usb/devices";
/// Root of the usbfs device files, laid out as `<root>/<bus>/<dev>`.
pub const USBFS_ROOT: &str = "/dev/bus/usb";

/// Top level devices only, interfaces are `<bus>-<port>:<config>.<iface>`.
pub(crate) const UEVENT_GLOB: &str = "[0-9]*-[0-9]*/uevent";

pub(crate) const UEVENT_BUSNUM: &[u8] = b"BUSNUM=";
pub(crate) const UEVENT_DEVNUM: &[u8] = b"DEVNUM=";

/// `_IO('U', 20)` from `linux/usbdevice_fs.h`.
pub const USBDEVFS_RESET: u32 = 0x5514;
