/// Alias for `Result<T, PlaybackError>`.
pub type PlaybackResult<T> = Result<T, PlaybackError>;

/// Errors raised when a viewer is configured. Playback itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// The tick cadence was zero.
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    /// The per-tick progress step was not a percentage in (0, 100].
    #[error("progress step must be within (0, 100], got {0}")]
    InvalidProgressStep(f32),

    /// The navigation tap zone was not a fraction in (0, 0.5].
    #[error("tap zone must be within (0, 0.5], got {0}")]
    InvalidTapZone(f32),
}
