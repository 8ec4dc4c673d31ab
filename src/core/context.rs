use crate::config::Config;
use crate::core::address_book::AddressBook;

use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub book: AddressBook,
    pub logger: Logger,
    pub startup_displayed: bool,
}

impl AppContext {
    /// Context with default settings and file logging off, ignoring any
    /// config file on disk.
    pub fn in_memory() -> Self {
        let logger = Logger::new();
        logger.set_file_logging_enabled(false);
        Self {
            config: Config::default(),
            book: AddressBook::new(),
            logger,
            startup_displayed: false,
        }
    }

    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_or_default(&config_path)?;

        let logger = Logger::in_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            book: AddressBook::new(),
            logger,
            startup_displayed: false,
        })
    }
}
