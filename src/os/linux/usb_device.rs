#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A device found in sysfs, located by the bus and device numbers the
/// kernel reported for it.
///
/// The numbers are kept exactly as they appear in the uevent file, which is
/// already zero padded (`BUSNUM=003`) the way usbfs names its nodes.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsbDevice {
    pub bus_num: String,
    pub dev_num: String,
    pub uevent: PathBuf,
}

impl fmt::Display for UsbDevice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{} ({})", self.bus_num, self.dev_num, self.uevent.display())
    }
}

impl UsbDevice {
    pub(crate) fn new(bus_num: String, dev_num: String, uevent: PathBuf) -> Self {
        UsbDevice {
            bus_num,
            dev_num,
            uevent,
        }
    }

    /// usbfs node of the device under `usbfs_root`, normally `/dev/bus/usb`.
    pub fn path<P: AsRef<Path>>(&self, usbfs_root: P) -> PathBuf {
        usbfs_root.as_ref().join(&self.bus_num).join(&self.dev_num)
    }
}
