//! CLI context - one dictionary run from settings to written output.

use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::dict::{self, MinLength, Sink, charset::DIGITS, output};
use crate::error::{ConfigError, Error, ReadError};
use crate::info::{self, InfoList};
use crate::settings::Settings;
use crate::terminal::Summary;

/// How a run ended when it did not fail.
#[derive(Debug)]
pub enum Outcome {
    /// No info tokens; nothing was written.
    Skipped,
    Written(Summary),
}

/// Application context for one run.
pub struct Context {
    pub settings: Settings,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Read, validate, generate, write.
    ///
    /// Validation failures return before the output file is touched.
    pub fn run(&self) -> Result<Outcome, Error> {
        let start = Instant::now();

        let info = self.read_info()?;
        if info.is_empty() {
            warn!(
                "info list from '{}' is empty, no dictionary generated",
                self.settings.info_file.display()
            );
            return Ok(Outcome::Skipped);
        }

        let min_length = self.validate(&info)?;
        self.warn_unreachable(&info, min_length);

        let (candidates, stats) = dict::generate_with_stats(
            info.tokens(),
            &self.settings.special_chars,
            min_length.get(),
        );
        debug!(
            padded = stats.padded,
            paired = stats.paired,
            tripled = stats.tripled,
            offered = stats.offered(),
            unique = stats.unique,
            "generation passes complete"
        );

        let sink = Sink::from_path(&self.settings.dict_file);
        let written = output::write(&sink, candidates, self.settings.sorted)?;
        let output = self.output_display(&sink);
        info!(count = written, "dictionary written to {output}");

        Ok(Outcome::Written(Summary {
            written,
            output,
            tokens: info.len(),
            skipped: info.skipped().len(),
            min_length: min_length.get(),
            stats,
            elapsed: start.elapsed(),
        }))
    }

    /// Whether a finished run should print its summary box.
    pub fn shows_summary(&self) -> bool {
        !self.settings.quiet && Sink::from_path(&self.settings.dict_file) != Sink::Stdout
    }

    fn read_info(&self) -> Result<InfoList, Error> {
        recover_read(info::read(&self.settings.info_file))
    }

    fn validate(&self, info: &InfoList) -> Result<MinLength, ConfigError> {
        if self.settings.special_chars.is_empty() {
            return Err(ConfigError::EmptySpecials);
        }

        let min_length = MinLength::new(
            self.settings.password_length,
            info.len(),
            self.settings.special_chars.len(),
            self.settings.length_guard,
        )?;

        if self.settings.length_guard == dict::LengthGuard::Off {
            warn!(
                "length guard disabled, accepting minimum length {}",
                min_length.get()
            );
        }

        Ok(min_length)
    }

    /// Tokens too short for the padding pass get no padded candidates.
    fn warn_unreachable(&self, info: &InfoList, min_length: MinLength) {
        let short = info
            .tokens()
            .iter()
            .filter(|t| t.chars().count() + DIGITS.len() < min_length.get())
            .count();
        if short > 0 {
            warn!(
                "{short} token(s) need more than {} padding digits and will not be padded",
                DIGITS.len()
            );
        }
    }

    fn output_display(&self, sink: &Sink) -> String {
        match sink {
            Sink::Stdout => "stdout".to_owned(),
            Sink::File(path) => std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.display().to_string()),
        }
    }
}

/// Recoverable read failures are logged and yield an empty list.
fn recover_read(result: Result<InfoList, ReadError>) -> Result<InfoList, Error> {
    match result {
        Ok(list) => {
            for line in list.skipped() {
                warn!(line = line.number, "malformed info line: {}", line.content);
            }
            debug!(tokens = list.len(), "info file read");
            Ok(list)
        }
        Err(e) if e.is_recoverable() => {
            error!("{e}");
            Ok(InfoList::default())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn recoverable_read_error_gives_empty_list() {
        let err = ReadError::from_io(
            PathBuf::from("info.txt"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        let list = recover_read(Err(err)).expect("recoverable");
        assert!(list.is_empty());
    }

    #[test]
    fn unexpected_read_error_propagates() {
        let err = ReadError::from_io(
            PathBuf::from("info.txt"),
            io::Error::other("stream closed by peer"),
        );
        let err = recover_read(Err(err)).expect_err("unexpected");
        assert!(matches!(err, Error::Read(ReadError::Unexpected { .. })));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn parsed_list_passes_through() {
        let list = recover_read(Ok(InfoList::parse("name:ann\n"))).expect("ok");
        assert_eq!(list.tokens(), ["ann"]);
    }
}
