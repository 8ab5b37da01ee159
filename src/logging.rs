//! Diagnostic log output for the CLI.
//!
//! Library code logs through the `log` facade; the binary installs a `fern`
//! dispatcher on stderr sized by the number of `-v` flags.

use log::LevelFilter;

use crate::error::Result;

/// Log level for a count of `-v` flags
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Fails if a logger is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Warn)
        .level_for("apk_namer", level_for_verbosity(verbosity))
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(7), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_fails() {
        // Only this test installs a logger in the unit test binary
        assert!(init(2).is_ok());
        assert!(init(2).is_err());
    }
}
