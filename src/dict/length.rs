//! Minimum password length validation.

use std::num::NonZeroUsize;

use crate::error::ConfigError;

/// How the requested minimum length is bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthGuard {
    /// Reject lengths above `tokens + specials`.
    ///
    /// Not the true longest candidate, only a sanity cap.
    #[default]
    Heuristic,
    /// Only require a positive length.
    Off,
}

/// A validated minimum candidate length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLength(NonZeroUsize);

impl MinLength {
    pub fn new(
        requested: i64,
        tokens: usize,
        specials: usize,
        guard: LengthGuard,
    ) -> Result<Self, ConfigError> {
        let len = usize::try_from(requested)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::NonPositive(requested))?;

        if guard == LengthGuard::Heuristic {
            let cap = tokens + specials;
            if len.get() > cap {
                return Err(ConfigError::ExceedsCap { requested, cap });
            }
        }

        Ok(Self(len))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            MinLength::new(0, 3, 32, LengthGuard::Heuristic),
            Err(ConfigError::NonPositive(0))
        );
        assert_eq!(
            MinLength::new(-4, 3, 32, LengthGuard::Off),
            Err(ConfigError::NonPositive(-4))
        );
    }

    #[test]
    fn cap_is_inclusive() {
        let len = MinLength::new(35, 3, 32, LengthGuard::Heuristic);
        assert_eq!(len.map(MinLength::get), Ok(35));
    }

    #[test]
    fn rejects_above_cap() {
        assert_eq!(
            MinLength::new(36, 3, 32, LengthGuard::Heuristic),
            Err(ConfigError::ExceedsCap {
                requested: 36,
                cap: 35
            })
        );
    }

    #[test]
    fn guard_off_skips_cap() {
        let len = MinLength::new(36, 3, 32, LengthGuard::Off);
        assert_eq!(len.map(MinLength::get), Ok(36));
    }
}
