use std::fmt;

/// Errors surfaced by the engine.
///
/// Out-of-range input is not an error: it is clamped and reported through
/// [`BoundaryNotifier`](crate::input::BoundaryNotifier).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// A viewport dimension is zero, negative, or non-finite.
    InvalidViewport { width: f64, height: f64 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {width}x{height}: both dimensions must be finite and > 0")
            }
        }
    }
}

impl std::error::Error for EngineError {}
