use std::path::Path;

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

/// Optional logging configuration picked up from the working directory.
pub const CONFIG_FILE: &str = "log4rs.yaml";

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Install the global logger.
///
/// Uses `log4rs.yaml` when present, otherwise a console appender at `Info`.
/// Calling it again after a logger is installed only prints a warning.
pub fn initialize() {
    let result = if Path::new(CONFIG_FILE).exists() {
        log4rs::init_file(CONFIG_FILE, Default::default())
    } else {
        default_config().and_then(|config| {
            log4rs::init_config(config)?;
            Ok(())
        })
    };

    if let Err(err) = result {
        eprintln!("Logger not initialized: {}", err);
    }
}

fn default_config() -> anyhow::Result<Config> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        assert!(default_config().is_ok());
    }
}
