//! Character sets used to extend info tokens.

/// Digit alphabet used for padding short tokens.
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// ASCII punctuation in ASCII order.
pub const PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Default special character set: every ASCII punctuation character.
pub fn special_chars() -> Vec<char> {
    PUNCTUATION.to_vec()
}

/// Parse a user-supplied special set, keeping first occurrences in order.
pub fn parse_special(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(s.len());
    for c in s.chars() {
        if !chars.contains(&c) {
            chars.push(c);
        }
    }
    chars
}

/// Every ordered arrangement of `len` distinct digits, in lexicographic order.
///
/// `len == 0` yields a single empty string. Lengths above the digit alphabet
/// size yield nothing, so tokens needing more than ten characters of padding
/// cannot be padded at all.
pub fn digit_permutations(len: usize) -> DigitPermutations {
    DigitPermutations::new(len)
}

/// Lazy permutation enumerator over [`DIGITS`].
pub struct DigitPermutations {
    // Index into DIGITS per suffix position; `None` once exhausted.
    indices: Option<Vec<usize>>,
    used: [bool; 10],
}

impl DigitPermutations {
    fn new(len: usize) -> Self {
        if len > DIGITS.len() {
            return Self {
                indices: None,
                used: [false; 10],
            };
        }

        let mut used = [false; 10];
        let indices: Vec<usize> = (0..len).collect();
        for &i in &indices {
            used[i] = true;
        }

        Self {
            indices: Some(indices),
            used,
        }
    }

    /// Advance to the next arrangement; `false` once every one was produced.
    fn advance(&mut self) -> bool {
        let Some(indices) = self.indices.as_mut() else {
            return false;
        };

        let len = indices.len();
        let mut pos = len;
        while pos > 0 {
            pos -= 1;
            self.used[indices[pos]] = false;

            let next = (indices[pos] + 1..DIGITS.len()).find(|&d| !self.used[d]);
            if let Some(d) = next {
                indices[pos] = d;
                self.used[d] = true;

                // Refill the tail with the smallest unused digits.
                for slot in indices.iter_mut().skip(pos + 1) {
                    let Some(free) = (0..DIGITS.len()).find(|&d| !self.used[d]) else {
                        return false;
                    };
                    *slot = free;
                    self.used[free] = true;
                }
                return true;
            }
        }

        false
    }
}

impl Iterator for DigitPermutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current: String = self.indices.as_ref()?.iter().map(|&i| DIGITS[i]).collect();
        if !self.advance() {
            self.indices = None;
        }
        Some(current)
    }
}
