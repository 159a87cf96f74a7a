use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Reacts to an input sample that had to be clamped into the trackpad square.
///
/// Called synchronously, at most once per sample. Implementations decide what
/// the crossing means to the user (a bump sound, a haptic tick, a log line).
/// The method takes `&self`; stateful implementations use interior mutability.
///
/// Any `Fn()` closure is a notifier:
///
/// ```rust
/// use std::cell::Cell;
/// use trackpad_engine::input::BoundaryNotifier;
///
/// let hits = Cell::new(0);
/// let notify = || hits.set(hits.get() + 1);
/// notify.notify_boundary_exceeded();
/// assert_eq!(hits.get(), 1);
/// ```
pub trait BoundaryNotifier {
    fn notify_boundary_exceeded(&self);
}

impl<F: Fn()> BoundaryNotifier for F {
    #[inline]
    fn notify_boundary_exceeded(&self) {
        self()
    }
}

/// Ignores every notification.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoopNotifier;

impl BoundaryNotifier for NoopNotifier {
    #[inline]
    fn notify_boundary_exceeded(&self) {}
}

/// Emits an `info` record on the `trackpad::boundary` target.
#[derive(Debug, Copy, Clone, Default)]
pub struct LogNotifier;

impl BoundaryNotifier for LogNotifier {
    fn notify_boundary_exceeded(&self) {
        log::info!(target: "trackpad::boundary", "pointer left the trackpad square; clamped");
    }
}

/// Counts notifications. Intended as a test double.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    count: AtomicUsize,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    pub fn did_notify(&self) -> bool {
        self.count() > 0
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}

impl BoundaryNotifier for RecordingNotifier {
    fn notify_boundary_exceeded(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

/// Forwards to `inner` at most once per `interval`.
///
/// A drag that rides along the edge produces a clamped sample every frame;
/// without a gate a bump sound would retrigger on each one. Calls arriving
/// inside the interval are dropped, not queued.
#[derive(Debug)]
pub struct DebouncedNotifier<N> {
    inner: N,
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl<N: BoundaryNotifier> DebouncedNotifier<N> {
    /// Roughly the length of a short bump effect.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(150);

    pub fn new(inner: N) -> Self {
        Self::with_interval(inner, Self::DEFAULT_INTERVAL)
    }

    pub fn with_interval(inner: N, interval: Duration) -> Self {
        Self { inner, interval, last: Mutex::new(None) }
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Forgets the last forwarded call so the next one goes through.
    pub fn reset(&self) {
        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl<N: BoundaryNotifier> BoundaryNotifier for DebouncedNotifier<N> {
    fn notify_boundary_exceeded(&self) {
        let now = Instant::now();
        {
            let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(prev) = *last {
                if now.saturating_duration_since(prev) < self.interval {
                    log::trace!("boundary notification suppressed");
                    return;
                }
            }
            *last = Some(now);
        }
        self.inner.notify_boundary_exceeded();
    }
}
