//! Trackpad engine crate.
//!
//! Deterministic geometry and color math behind a circular trackpad widget:
//! a raw pointer sample inside a square region becomes a cursor position on
//! the inscribed disc plus a color-wheel color.
//!
//! # Quick start
//!
//! ```rust
//! use trackpad_engine::coords::{Rect, Vec2};
//! use trackpad_engine::input::{InputCoordinator, RecordingNotifier};
//!
//! let coordinator = InputCoordinator::new(RecordingNotifier::new());
//! let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
//!
//! let sample = coordinator.process_input(Vec2::new(-20.0, -20.0), frame, 100.0).unwrap();
//! assert!(sample.clamped());
//! assert_eq!(coordinator.notifier().count(), 1);
//! ```
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Viewport`, `Rect`, square ↔ disc warp |
//! | [`paint`] | `Rgb`, `Hsv`, color wheel |
//! | [`input`] | `InputCoordinator`, `BoundaryNotifier` and stock notifiers |
//! | [`logging`] | `init_logging` |
//! | [`error`] | `EngineError` |

pub mod coords;
pub mod error;
pub mod input;
pub mod logging;
pub mod paint;

#[cfg(test)]
mod approx;

pub use error::EngineError;
