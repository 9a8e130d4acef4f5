//! Terminal output utilities.
//!
//! Box drawing and number formatting for the run summary.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use crate::dict::PassStats;

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
    format!("┌{}{}┐", title_part, "─".repeat(remaining))
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Run Summary
// ============================================================================

/// What one run produced.
#[derive(Debug, Clone)]
pub struct Summary {
    pub written: usize,
    pub output: String,
    pub tokens: usize,
    pub skipped: usize,
    pub min_length: usize,
    pub stats: PassStats,
    pub elapsed: Duration,
}

impl Summary {
    /// Boxed summary lines; the title is colored when `color` is set.
    pub fn render(&self, color: bool) -> Vec<String> {
        let title = if color {
            "Complete".green().bold().to_string()
        } else {
            "Complete".to_owned()
        };

        vec![
            box_top(&title),
            box_line(&format!(
                "{} candidate(s) generated in {}ms",
                format_number(self.written),
                self.elapsed.as_millis()
            )),
            box_line(&format!(
                "Info: {} token(s) • {} skipped line(s) • Min length: {}",
                format_number(self.tokens),
                format_number(self.skipped),
                self.min_length
            )),
            box_line(&format!(
                "Passes: {} padded • {} paired • {} tripled",
                format_number(self.stats.padded),
                format_number(self.stats.paired),
                format_number(self.stats.tripled)
            )),
            box_line(&format!("Output: {}", self.output)),
            box_bottom(),
        ]
    }

    /// Print the summary to stdout.
    pub fn print(&self) {
        let stdout = io::stdout();
        let color = stdout.is_tty();
        let mut out = stdout.lock();
        let _ = writeln!(out);
        for line in self.render(color) {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary {
            written: 1234,
            output: "/tmp/dict.txt".to_owned(),
            tokens: 2,
            skipped: 1,
            min_length: 4,
            stats: PassStats {
                padded: 11,
                paired: 4,
                tripled: 0,
                unique: 15,
            },
            elapsed: Duration::from_millis(7),
        }
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(3_628_800), "3,628,800");
    }

    #[test]
    fn box_lines_have_fixed_width() {
        for line in summary().render(false) {
            assert_eq!(line.chars().count(), BOX_WIDTH, "{line}");
        }
    }

    #[test]
    fn colored_title_keeps_width() {
        let lines = summary().render(true);
        assert_eq!(console_width(&lines[0]), BOX_WIDTH);
    }

    #[test]
    fn summary_mentions_counts_and_output() {
        let lines = summary().render(false);
        assert!(lines[0].contains("Complete"));
        assert!(lines[1].contains("1,234 candidate(s) generated in 7ms"));
        assert!(lines[4].contains("Output: /tmp/dict.txt"));
    }
}
