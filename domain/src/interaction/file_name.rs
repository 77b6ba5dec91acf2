//! Log file naming.
//!
//! Each interaction gets `llm_interaction_<micros>.log`. Uniqueness is only as
//! good as the clock resolution: two interactions stamped with the same
//! microsecond share a name, and the later write replaces the earlier one.

use crate::core::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every interaction log file.
pub const FILE_NAME_PREFIX: &str = "llm_interaction_";

/// Extension (without the dot) of every interaction log file.
pub const FILE_NAME_EXTENSION: &str = "log";

/// File name of one interaction log, identified by its microsecond stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InteractionFileName(u64);

impl InteractionFileName {
    pub fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    /// Build a stamp from whole seconds and the nanosecond remainder.
    ///
    /// Sub-microsecond precision is floored away.
    pub fn from_parts(secs: u64, subsec_nanos: u32) -> Self {
        Self(
            secs.saturating_mul(1_000_000)
                .saturating_add(u64::from(subsec_nanos / 1_000)),
        )
    }

    pub fn micros(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InteractionFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{}", FILE_NAME_PREFIX, self.0, FILE_NAME_EXTENSION)
    }
}

impl FromStr for InteractionFileName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(FILE_NAME_PREFIX)
            .and_then(|rest| rest.strip_suffix(FILE_NAME_EXTENSION))
            .and_then(|rest| rest.strip_suffix('.'))
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| DomainError::InvalidFileName(s.to_string()))?;

        digits
            .parse()
            .map(Self)
            .map_err(|_| DomainError::InvalidFileName(s.to_string()))
    }
}
