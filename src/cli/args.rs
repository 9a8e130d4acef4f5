use std::path::PathBuf;

use clap::Parser;

use crate::dict::{LengthGuard, charset};
use crate::logging;
use crate::settings::{DEFAULT_DICT_FILE, DEFAULT_INFO_FILE, DEFAULT_PASSWORD_LENGTH, Settings};

#[derive(Parser, Debug)]
#[command(name = "socdict", version)]
#[command(about = "Generate a social-engineering password dictionary from personal info")]
pub struct Args {
    /// Dictionary output path (`-` for stdout)
    #[arg(
        short,
        long,
        alias = "dict_file",
        env = "SOCDICT_DICT_FILE",
        default_value = DEFAULT_DICT_FILE
    )]
    pub dict_file: PathBuf,

    /// Personal info file, one `key:value` fact per line
    #[arg(
        short,
        long,
        alias = "info_file",
        env = "SOCDICT_INFO_FILE",
        default_value = DEFAULT_INFO_FILE
    )]
    pub info_file: PathBuf,

    /// Minimum password length
    #[arg(
        short = 'l',
        long,
        alias = "password_length",
        env = "SOCDICT_PASSWORD_LENGTH",
        default_value_t = DEFAULT_PASSWORD_LENGTH,
        allow_negative_numbers = true
    )]
    pub password_length: i64,

    /// Special characters to combine tokens with (default: ASCII punctuation)
    #[arg(long, value_name = "CHARS", allow_hyphen_values = true)]
    pub special: Option<String>,

    /// Allow lengths above info tokens + special characters
    #[arg(long)]
    pub no_length_guard: bool,

    /// Write candidates in sorted order
    #[arg(long)]
    pub sort: bool,

    /// Only log warnings and errors, skip the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter directive, e.g. `debug`
    #[arg(long, env = "SOCDICT_LOG", value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            dict_file: self.dict_file.clone(),
            info_file: self.info_file.clone(),
            password_length: self.password_length,
            special_chars: self
                .special
                .as_deref()
                .map(charset::parse_special)
                .unwrap_or_else(charset::special_chars),
            length_guard: if self.no_length_guard {
                LengthGuard::Off
            } else {
                LengthGuard::Heuristic
            },
            sorted: self.sort,
            quiet: self.quiet,
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| logging::default_filter(self.quiet))
    }
}
