use crate::led::LedKind;

/// Errors raised while constructing drivers
///
/// Runtime operations never fail: out-of-range pixel writes are dropped
/// and strip write errors are swallowed so a refresh loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedError {
    #[error("{kind:?} needs at least {required} pins, got {given}")]
    NotEnoughPins {
        kind: LedKind,
        required: usize,
        given: usize,
    },
    #[error("{kind:?} supports at most {max} pins, got {given}")]
    TooManyPins {
        kind: LedKind,
        max: usize,
        given: usize,
    },
    #[error("matrix supports at most {max} rows, got {given}")]
    TooManyRows { max: usize, given: usize },
    #[error("matrix supports at most {max} columns, got {given}")]
    TooManyColumns { max: usize, given: usize },
    #[error("{0:?} needs a nonzero LED count")]
    MissingLength(LedKind),
    #[error("{kind:?} supports at most {max} LEDs, got {given}")]
    LengthTooLarge {
        kind: LedKind,
        max: usize,
        given: usize,
    },
    #[error("driver table is full")]
    HalFull,
    #[error("platform cannot open a strip on pin {0}")]
    StripUnavailable(u8),
}
