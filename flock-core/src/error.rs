use flock_shared::SettingsError;
use thiserror::Error;

/// Configuration errors, all rejected at construction time. Nothing in the
/// per-tick math returns an error; degenerate geometry falls back to the zero
/// vector instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("domain dimensions must be positive, got {width}x{height}")]
    InvalidDomain { width: f32, height: f32 },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("polygon placement needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),
}
