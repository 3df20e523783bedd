use super::constants::USBDEVFS_RESET;
use crate::error::{Error, Result};
use nix::ioctl_write_int_bad;
use std::fs::{File, OpenOptions};
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

ioctl_write_int_bad!(usbdevfs_reset, USBDEVFS_RESET);

/// An open usbfs device node.
///
/// The handle is opened write-only, which is all `USBDEVFS_RESET` needs.
/// Dropping it closes the descriptor and any close error is discarded.
#[derive(Debug)]
pub struct UsbFs {
    handle: File,
    path: PathBuf,
}

impl UsbFs {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<UsbFs> {
        let path = path.as_ref().to_path_buf();
        log::debug!("Opening {} write-only", path.display());
        let handle = OpenOptions::new()
            .write(true)
            .open(&path)
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
        Ok(UsbFs { handle, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ask the kernel to reset the port the device hangs off.
    ///
    /// Examples
    ///
    /// ```no_run
    /// let usb = usbreset::UsbFs::open("/dev/bus/usb/003/004")?;
    /// usb.reset()?;
    /// # Ok::<(), usbreset::Error>(())
    /// ```
    pub fn reset(&self) -> Result<()> {
        log::debug!("USBDEVFS_RESET 0x{:04X} on {}", USBDEVFS_RESET, self.path.display());
        unsafe { usbdevfs_reset(self.handle.as_raw_fd(), 0) }.map_err(|source| Error::Reset {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

impl AsRawFd for UsbFs {
    fn as_raw_fd(&self) -> RawFd {
        self.handle.as_raw_fd()
    }
}

/// Open `path` and reset it, closing the handle again either way.
pub fn reset<P: AsRef<Path>>(path: P) -> Result<()> {
    UsbFs::open(path)?.reset()
}
