use super::constants::*;
use super::usb_device::UsbDevice;
use crate::device_id::DeviceId;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Looks up attached devices through the uevent files sysfs exposes for
/// every top level USB device.
#[derive(Clone, Debug)]
pub struct UsbEnumerate {
    root: PathBuf,
}

impl Default for UsbEnumerate {
    fn default() -> Self {
        Self::new()
    }
}

impl UsbEnumerate {
    pub fn new() -> Self {
        Self::with_root(SYSFS_USB_DEVICES)
    }

    /// Scan `root` instead of `/sys/bus/usb/devices`.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        UsbEnumerate { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// uevent files of all top level devices in glob (sorted) order.
    pub fn uevent_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(&self.root.to_string_lossy()),
            UEVENT_GLOB
        );
        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if is_interface(&path) {
                log::debug!("Skipping interface {}", path.display());
                continue;
            }
            files.push(path);
        }
        Ok(files)
    }

    /// Returns the first device whose uevent carries `PRODUCT=<vendor>/<product>`.
    ///
    /// Reading a candidate fails the whole lookup, as does a matching file
    /// without `BUSNUM=` or `DEVNUM=`. Later candidates are never consulted.
    pub fn find(&self, id: &DeviceId) -> Result<UsbDevice> {
        let token = id.token();
        for path in self.uevent_files()? {
            let contents = fs::read(&path).map_err(|source| Error::ReadUevent {
                path: path.clone(),
                source,
            })?;

            if !contains(&contents, &token) {
                log::debug!("{}: no match for {}", path.display(), id);
                continue;
            }
            log::debug!("{}: matches {}", path.display(), id);

            let device = parse_uevent(&contents, path)?;
            log::debug!("Resolved {} to bus {} device {}", id, device.bus_num, device.dev_num);
            return Ok(device);
        }

        Err(Error::NotFound { id: id.clone() })
    }
}

fn is_interface(uevent: &Path) -> bool {
    uevent
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().contains(':'))
        .unwrap_or(false)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Pull `BUSNUM=` and `DEVNUM=` out of a uevent file, last one wins.
pub(crate) fn parse_uevent(contents: &[u8], path: PathBuf) -> Result<UsbDevice> {
    let mut bus_num = None;
    let mut dev_num = None;
    for line in contents.split(|b| *b == b'\n') {
        if let Some(bus) = line.strip_prefix(UEVENT_BUSNUM) {
            bus_num = Some(String::from_utf8_lossy(bus).into_owned());
        } else if let Some(dev) = line.strip_prefix(UEVENT_DEVNUM) {
            dev_num = Some(String::from_utf8_lossy(dev).into_owned());
        }
    }

    let bus_num = bus_num.ok_or_else(|| Error::MalformedUevent {
        path: path.clone(),
        field: "BUSNUM",
    })?;
    let dev_num = dev_num.ok_or_else(|| Error::MalformedUevent {
        path: path.clone(),
        field: "DEVNUM",
    })?;
    Ok(UsbDevice::new(bus_num, dev_num, path))
}
