//! Input subsystem.
//!
//! Turns a raw pointer sample into a cursor position on the disc and a wheel
//! color. The only side effect is the boundary notification; hosts own every
//! other piece of presentation state.

mod coordinator;
mod notifier;

pub use coordinator::{BoundaryEvent, CoordinatorConfig, InputCoordinator, TrackpadSample};
pub use notifier::{
    BoundaryNotifier,
    DebouncedNotifier,
    LogNotifier,
    NoopNotifier,
    RecordingNotifier,
};
