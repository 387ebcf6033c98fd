//! Decode a file written in a legacy Mac encoding and print it as UTF-8.
//!
//! Usage: `decode <encoding> <file>`, e.g. `decode x-mac-thai text.txt`.

use mac_encodings::Encoding;
use std::env;
use std::fs;
use std::process;

fn main() {
    #[cfg(feature = "logging")]
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Warn);
    }

    let mut args = env::args().skip(1);
    let (Some(label), Some(path)) = (args.next(), args.next()) else {
        eprintln!("Usage: decode <encoding> <file>");
        process::exit(1);
    };

    let Some(encoding) = Encoding::from_label(&label) else {
        eprintln!("Unknown encoding: {label}");
        process::exit(1);
    };

    let data = match fs::read(&path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            process::exit(1);
        }
    };

    println!("{}", encoding.decode(&data));
}

#[cfg(feature = "logging")]
static LOGGER: SimpleLogger = SimpleLogger;

#[cfg(feature = "logging")]
struct SimpleLogger;

#[cfg(feature = "logging")]
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!("{}", record.args());
    }

    fn flush(&self) {}
}
