//! Command line arguments and the configuration built from them.

use crate::device_id::DeviceId;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "usbreset")]
#[command(
    version,
    about = "Reset a USB device without re-plugging it"
)]
#[command(long_about = "
Reset a USB device through its usbfs node, the same thing that happens when
it is unplugged and plugged back in.

The device is either given directly as its node under /dev/bus/usb, or looked
up by the vendor and product id lsusb prints for it. When several attached
devices share the same ids the first one found in sysfs is reset.

EXAMPLES:
    usbreset -p /dev/bus/usb/003/004
    usbreset -v 1a86 -P 7523
")]
pub struct Args {
    /// The device node under /dev/bus/usb/ that shall be reset, wins over --vendor/--product
    #[arg(
        short = 'p',
        long = "pathToReset",
        visible_alias = "resetPath",
        value_name = "PATH"
    )]
    pub path_to_reset: Option<PathBuf>,

    /// Vendor id (hex) of the device to reset, e.g. 1a86
    #[arg(short = 'v', long, value_name = "HEX", requires = "product")]
    pub vendor: Option<String>,

    /// Product id (hex) of the device to reset, e.g. 7523
    #[arg(short = 'P', long, value_name = "HEX", requires = "vendor")]
    pub product: Option<String>,

    /// Print which uevent files were scanned and whether they matched (RUST_LOG is ignored then)
    #[arg(short, long)]
    pub debug: bool,

    /// sysfs directory holding one entry per USB device
    #[arg(long, value_name = "DIR", default_value = crate::SYSFS_USB_DEVICES)]
    pub sysfs_root: PathBuf,

    /// Directory device nodes are looked up under
    #[arg(long, value_name = "DIR", default_value = crate::USBFS_ROOT)]
    pub usbfs_root: PathBuf,
}

/// What a single run acts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A device node given by the caller, not checked until it is opened.
    Path(PathBuf),
    /// A vendor/product pair still to be looked up in sysfs.
    Device(DeviceId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub target: Target,
    pub debug: bool,
    pub sysfs_root: PathBuf,
    pub usbfs_root: PathBuf,
}

/// Neither a path nor a vendor/product pair was supplied.
#[derive(Debug, PartialEq, Eq)]
pub struct UsageError;

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "No path to reset specified!")
    }
}

impl std::error::Error for UsageError {}

impl TryFrom<Args> for Config {
    type Error = UsageError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let target = match (args.path_to_reset, args.vendor, args.product) {
            (Some(path), _, _) => Target::Path(path),
            (_, Some(vendor), Some(product)) => Target::Device(DeviceId::new(vendor, product)),
            _ => return Err(UsageError),
        };

        Ok(Config {
            target,
            debug: args.debug,
            sysfs_root: args.sysfs_root,
            usbfs_root: args.usbfs_root,
        })
    }
}

impl Config {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
