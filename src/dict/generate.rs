//! Candidate generation.
//!
//! Three shapes are enumerated and unioned into one set:
//! a token padded with distinct digits, two tokens joined, and two tokens
//! joined around or beside one special character.

use std::collections::HashSet;

use zeroize::Zeroize;

use super::charset::digit_permutations;

/// Counts of strings each pass offered to the set.
///
/// Offers that collided with an existing candidate are counted too, so the
/// sum can exceed `unique`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub padded: usize,
    pub paired: usize,
    pub tripled: usize,
    pub unique: usize,
}

impl PassStats {
    pub fn offered(&self) -> usize {
        self.padded + self.paired + self.tripled
    }
}

/// Build the candidate set for `tokens`, `specials` and `min_length`.
pub fn generate(tokens: &[String], specials: &[char], min_length: usize) -> HashSet<String> {
    generate_with_stats(tokens, specials, min_length).0
}

/// Same as [`generate`], also returning per-pass counts.
pub fn generate_with_stats(
    tokens: &[String],
    specials: &[char],
    min_length: usize,
) -> (HashSet<String>, PassStats) {
    let mut candidates = HashSet::new();
    let mut stats = PassStats::default();

    // Lengths in chars, computed once per token.
    let sized: Vec<(&str, usize)> = tokens
        .iter()
        .map(|t| (t.as_str(), t.chars().count()))
        .collect();

    for &(a, len) in &sized {
        if len >= min_length {
            offer(&mut candidates, &mut a.to_owned());
            stats.padded += 1;
            continue;
        }
        for suffix in digit_permutations(min_length - len) {
            let mut padded = String::with_capacity(a.len() + suffix.len());
            padded.push_str(a);
            padded.push_str(&suffix);
            offer(&mut candidates, &mut padded);
            stats.padded += 1;
        }
    }

    for &(a, a_len) in &sized {
        for &(c, c_len) in &sized {
            if a_len + c_len >= min_length {
                offer(&mut candidates, &mut concat(&[a, c]));
                stats.paired += 1;
            }
        }
    }

    // Each arrangement has the same length, so one check covers all three.
    for &(a, a_len) in &sized {
        for &(d, d_len) in &sized {
            if a_len + d_len + 1 < min_length {
                continue;
            }
            let mut buf = [0u8; 4];
            for e in specials {
                let e: &str = e.encode_utf8(&mut buf);
                offer(&mut candidates, &mut concat(&[a, d, e]));
                offer(&mut candidates, &mut concat(&[e, d, a]));
                offer(&mut candidates, &mut concat(&[a, e, d]));
                stats.tripled += 3;
            }
        }
    }

    stats.unique = candidates.len();
    (candidates, stats)
}

/// Move `candidate` into the set, or wipe it if already present.
/// Either way `candidate` is left empty.
fn offer(candidates: &mut HashSet<String>, candidate: &mut String) -> bool {
    if candidates.contains(candidate.as_str()) {
        candidate.zeroize();
        return false;
    }
    candidates.insert(std::mem::take(candidate))
}

fn concat(parts: &[&str]) -> String {
    let mut s = String::with_capacity(parts.iter().map(|p| p.len()).sum());
    for p in parts {
        s.push_str(p);
    }
    s
}
