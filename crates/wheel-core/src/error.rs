use thiserror::Error;

/// Configuration errors. The engine itself never fails mid-spin; everything
/// here is caught when a wheel is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    #[error("segment table is empty")]
    EmptyTable,
    #[error("segment {index} ({label:?}) has invalid weight {weight}")]
    InvalidWeight {
        index: usize,
        label: String,
        weight: f64,
    },
    #[error("total segment weight is zero; no outcome can be drawn")]
    ZeroTotalWeight,
    #[error("malformed segment entry {0:?}, expected `label:weight`")]
    MalformedSegment(String),
    #[error("spin duration must be a positive number of milliseconds, got {0}")]
    InvalidDuration(f64),
    #[error(
        "base rotation {base}° is out of range; the shortest landing offset must be at least {min_offset}° and the rotation at most {max}°",
        max = crate::constants::MAX_BASE_ROTATION_DEG
    )]
    InvalidBaseRotation { base: f64, min_offset: f64 },
    #[error("unknown setting {0:?}")]
    UnknownSetting(String),
    #[error("invalid value {value:?} for setting {key:?}")]
    InvalidSetting { key: String, value: String },
}
