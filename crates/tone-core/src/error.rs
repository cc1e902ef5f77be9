use thiserror::Error;

/// Failures surfaced to the control side. The render path never produces one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToneError {
    #[error("audio output unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("invalid tone frequency {frequency} Hz (must be finite and positive)")]
    InvalidParameter { frequency: f32 },

    #[error("invalid synth configuration: {0}")]
    InvalidConfig(String),
}

impl ToneError {
    /// Wrap any platform error as a device failure.
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        ToneError::DeviceUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ToneError>;
