use std::fmt;
use std::process::ExitCode;

#[cfg(target_os = "linux")]
fn main() -> ExitCode {
    use clap::{CommandFactory, Parser};
    use simple_logger::SimpleLogger;
    use usbreset::config::{Args, Config};

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version end up here as well
        Err(e) if !e.use_stderr() => {
            print!("{}", e);
            return ExitCode::SUCCESS;
        }
        Err(e) => return fail(e.to_string().trim_end()),
    };

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            let _ = Args::command().print_help();
            println!();
            return fail(e);
        }
    };

    let mut logger = SimpleLogger::new()
        .with_level(config.log_level())
        .without_timestamps();
    // --debug always shows the scan, RUST_LOG only tunes the quiet default
    if !config.debug {
        logger = logger.env();
    }
    if let Err(e) = logger.init() {
        println!("Could not set up logging: {}", e);
    }

    match linux::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

#[cfg(not(target_os = "linux"))]
fn main() -> ExitCode {
    fail("usbreset needs usbfs and only runs on Linux")
}

/// Every failure ends here: one line on stdout and exit status 1.
fn fail<M: fmt::Display>(msg: M) -> ExitCode {
    println!("{}", msg);
    ExitCode::FAILURE
}

#[cfg(target_os = "linux")]
mod linux {
    use usbreset::config::{Config, Target};
    use usbreset::{UsbEnumerate, UsbFs};

    pub(crate) fn run(config: &Config) -> usbreset::Result<()> {
        let path = match &config.target {
            Target::Path(path) => path.clone(),
            Target::Device(id) => UsbEnumerate::with_root(config.sysfs_root.clone())
                .find(id)?
                .path(&config.usbfs_root),
        };

        let usb = UsbFs::open(&path)?;
        usb.reset()?;
        log::debug!("Reset {}", usb.path().display());
        Ok(())
    }
}
