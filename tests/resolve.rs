//! Device lookup against a fake `/sys/bus/usb/devices` tree.
#![cfg(target_os = "linux")]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use usbreset::{DeviceId, Error, UsbEnumerate};

const CH340: &str = "MAJOR=189\nMINOR=259\nDEVNAME=bus/usb/003/004\nDEVTYPE=usb_device\nDRIVER=usb\nPRODUCT=1a86/7523/264\nTYPE=255/0/0\nBUSNUM=003\nDEVNUM=004\n";
const HUB: &str = "DEVTYPE=usb_device\nDRIVER=usb\nPRODUCT=5e3/610/6060\nBUSNUM=001\nDEVNUM=002\n";

fn sysfs(entries: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, uevent) in entries {
        let entry = dir.path().join(name);
        fs::create_dir_all(&entry).unwrap();
        fs::write(entry.join("uevent"), uevent).unwrap();
    }
    dir
}

fn ch340() -> DeviceId {
    DeviceId::new("1a86", "7523")
}

#[test]
fn single_match_resolves_to_usbfs_node() {
    let sys = sysfs(&[("1-2", HUB), ("3-4", CH340)]);
    let dev = UsbEnumerate::with_root(sys.path()).find(&ch340()).unwrap();
    assert_eq!(dev.bus_num, "003");
    assert_eq!(dev.dev_num, "004");
    assert_eq!(dev.uevent, sys.path().join("3-4").join("uevent"));
    assert_eq!(dev.path("/dev/bus/usb"), PathBuf::from("/dev/bus/usb/003/004"));
}

#[test]
fn no_match_is_not_found() {
    let sys = sysfs(&[("1-2", HUB)]);
    match UsbEnumerate::with_root(sys.path()).find(&ch340()) {
        Err(Error::NotFound { id }) => assert_eq!(id, ch340()),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn empty_tree_is_not_found() {
    let sys = sysfs(&[]);
    let usb = UsbEnumerate::with_root(sys.path());
    assert!(usb.uevent_files().unwrap().is_empty());
    assert!(matches!(usb.find(&ch340()), Err(Error::NotFound { .. })));
}

#[test]
fn first_match_in_sorted_order_wins() {
    let second = CH340.replace("BUSNUM=003", "BUSNUM=005").replace("DEVNUM=004", "DEVNUM=009");
    let sys = sysfs(&[("5-1", second.as_str()), ("3-4", CH340)]);
    let usb = UsbEnumerate::with_root(sys.path());

    let files = usb.uevent_files().unwrap();
    assert_eq!(
        files,
        vec![sys.path().join("3-4/uevent"), sys.path().join("5-1/uevent")]
    );

    let dev = usb.find(&ch340()).unwrap();
    assert_eq!((dev.bus_num.as_str(), dev.dev_num.as_str()), ("003", "004"));
}

#[test]
fn malformed_match_does_not_fall_back() {
    let broken = "PRODUCT=1a86/7523/264\nDEVNUM=004\n";
    let sys = sysfs(&[("2-1", broken), ("3-4", CH340)]);
    match UsbEnumerate::with_root(sys.path()).find(&ch340()) {
        Err(Error::MalformedUevent { path, field }) => {
            assert_eq!(path, sys.path().join("2-1/uevent"));
            assert_eq!(field, "BUSNUM");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn interfaces_and_root_hubs_are_not_candidates() {
    // interface uevents repeat PRODUCT= but have no BUSNUM/DEVNUM
    let iface = "DEVTYPE=usb_interface\nPRODUCT=1a86/7523/264\nINTERFACE=255/1/2\n";
    let sys = sysfs(&[
        ("usb3", "PRODUCT=1d6b/2/510\nBUSNUM=003\nDEVNUM=001\n"),
        ("3-4:1.0", iface),
        ("3-4", CH340),
        ("1-1.2", HUB),
    ]);
    let usb = UsbEnumerate::with_root(sys.path());
    let names: Vec<String> = usb
        .uevent_files()
        .unwrap()
        .iter()
        .map(|p| p.parent().and_then(Path::file_name).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["1-1.2", "3-4"]);

    let dev = usb.find(&ch340()).unwrap();
    assert_eq!(dev.uevent, sys.path().join("3-4/uevent"));
}

#[test]
fn unreadable_candidate_is_fatal() {
    // a directory named uevent matches the glob but cannot be read as a file
    let sys = sysfs(&[("3-4", CH340)]);
    fs::create_dir_all(sys.path().join("1-1").join("uevent")).unwrap();
    match UsbEnumerate::with_root(sys.path()).find(&ch340()) {
        Err(Error::ReadUevent { path, .. }) => assert_eq!(path, sys.path().join("1-1/uevent")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn root_with_glob_characters_is_escaped() {
    let parent = tempfile::tempdir().unwrap();
    let root = parent.path().join("sys[1]");
    fs::create_dir_all(root.join("3-4")).unwrap();
    fs::write(root.join("3-4/uevent"), CH340).unwrap();

    let dev = UsbEnumerate::with_root(&root).find(&ch340()).unwrap();
    assert_eq!(dev.path("/dev/bus/usb"), PathBuf::from("/dev/bus/usb/003/004"));
}

#[test]
fn short_vendor_does_not_match() {
    let sys = sysfs(&[("3-4", CH340)]);
    let usb = UsbEnumerate::with_root(sys.path());
    assert!(matches!(
        usb.find(&DeviceId::new("1a8", "7523")),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn error_messages_name_the_file() {
    let sys = sysfs(&[("2-1", "PRODUCT=1a86/7523/264\nBUSNUM=002\n")]);
    let err = UsbEnumerate::with_root(sys.path()).find(&ch340()).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Malformed uevent {}: missing DEVNUM", sys.path().join("2-1/uevent").display())
    );

    let err = Error::NotFound { id: ch340() };
    assert_eq!(err.to_string(), "No device found matching 1a86:7523");
}
