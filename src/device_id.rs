#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;

const PRODUCT_KEY: &str = "PRODUCT=";

/// Vendor/product pair as printed by `lsusb`, e.g. `1a86:7523`.
///
/// Both halves are kept as given. They are never parsed as numbers, only
/// matched literally against the `PRODUCT=` line of a device's uevent file.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceId {
    pub vendor: String,
    pub product: String,
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.vendor, self.product)
    }
}

impl DeviceId {
    pub fn new<V: Into<String>, P: Into<String>>(vendor: V, product: P) -> Self {
        DeviceId {
            vendor: vendor.into(),
            product: product.into(),
        }
    }

    /// Bytes searched for in a uevent file: `PRODUCT=<vendor>/<product>`.
    ///
    /// The trailing `/` keeps a short vendor id from matching a longer one,
    /// a short product id is still a prefix match against `<product>/<bcdDevice>`.
    pub fn token(&self) -> Vec<u8> {
        format!("{}{}/{}", PRODUCT_KEY, self.vendor, self.product).into_bytes()
    }
}
