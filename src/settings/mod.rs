//! Dictionary generation settings.

use std::path::PathBuf;

use crate::dict::LengthGuard;
use crate::dict::charset;

pub const DEFAULT_DICT_FILE: &str = "dict.txt";
pub const DEFAULT_INFO_FILE: &str = "info.txt";
pub const DEFAULT_PASSWORD_LENGTH: i64 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dict_file: PathBuf,
    pub info_file: PathBuf,
    /// Requested minimum length, validated against the info list at run time.
    pub password_length: i64,
    pub special_chars: Vec<char>,
    pub length_guard: LengthGuard,
    pub sorted: bool,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dict_file: PathBuf::from(DEFAULT_DICT_FILE),
            info_file: PathBuf::from(DEFAULT_INFO_FILE),
            password_length: DEFAULT_PASSWORD_LENGTH,
            special_chars: charset::special_chars(),
            length_guard: LengthGuard::Heuristic,
            sorted: false,
            quiet: false,
        }
    }
}
