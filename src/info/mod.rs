//! Info source reading.
//!
//! The info file holds one `key:value` fact per line, e.g. `name:ann` or
//! `birthyear:1990`. Only values are used; keys are free-form labels.

use std::fs;
use std::path::Path;

use zeroize::Zeroize;

use crate::error::ReadError;

/// A line that could not be turned into a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub number: usize,
    pub content: String,
}

/// Tokens read from an info source plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct InfoList {
    tokens: Vec<String>,
    skipped: Vec<SkippedLine>,
}

impl InfoList {
    /// Parse info text. Lines that are not exactly one `key:value` pair,
    /// blank ones included, or whose value is empty, are skipped.
    pub fn parse(text: &str) -> Self {
        let mut list = InfoList::default();

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            match parse_line(line) {
                Some(token) => list.tokens.push(token.to_owned()),
                None => list.skipped.push(SkippedLine {
                    number: i + 1,
                    content: line.to_owned(),
                }),
            }
        }

        list
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl Drop for InfoList {
    fn drop(&mut self) {
        self.tokens.zeroize();
        for line in &mut self.skipped {
            line.content.zeroize();
        }
    }
}

fn parse_line(line: &str) -> Option<&str> {
    let (_key, value) = line.split_once(':')?;
    if value.contains(':') {
        return None;
    }
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Read and parse the info file at `path`.
pub fn read(path: &Path) -> Result<InfoList, ReadError> {
    let mut text =
        fs::read_to_string(path).map_err(|e| ReadError::from_io(path.to_path_buf(), e))?;
    let list = InfoList::parse(&text);
    text.zeroize();
    Ok(list)
}
