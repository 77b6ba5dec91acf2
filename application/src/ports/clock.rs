//! Clock port used to stamp interaction log file names.

/// Source of microsecond timestamps
///
/// Readings from one clock must never go backwards. They do not need to be
/// distinct: two calls within the same microsecond may return the same value.
pub trait InteractionClock: Send + Sync {
    /// Current reading in whole microseconds since the clock's epoch.
    fn now_micros(&self) -> u64;
}
