//! Utility functions

use crate::constants::DATA_DIR_NAME;
use std::path::PathBuf;

/// Get the application data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}
