use std::sync::Arc;

use leptos::prelude::{Get, ReadSignal, RwSignal, Set, Signal};

/// Vertical offset past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 10.0;

pub fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

type StopHandle = Arc<dyn Fn() + Send + Sync>;

/// Window scroll subscription owned by whoever attached it.
///
/// The listener goes away on [`ScrollTracker::detach`] or when the reactive
/// owner that attached it is disposed, whichever comes first.
#[derive(Clone)]
pub struct ScrollTracker {
    scrolled: RwSignal<bool>,
    stop: StopHandle,
}

impl ScrollTracker {
    /// A tracker with no event source. Offsets only arrive via [`observe`](Self::observe).
    pub fn detached() -> Self {
        Self {
            scrolled: RwSignal::new(false),
            stop: Arc::new(|| {}),
        }
    }

    #[cfg(feature = "web")]
    pub fn attach() -> Self {
        use leptos::ev::scroll;
        use leptos_use::{use_event_listener, use_window};

        let scrolled = RwSignal::new(false);
        let stop = use_event_listener(use_window(), scroll, move |_| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            scrolled.set(past_threshold(offset));
        });

        Self {
            scrolled,
            stop: Arc::new(stop),
        }
    }

    #[cfg(not(feature = "web"))]
    pub fn attach() -> Self {
        Self::detached()
    }

    pub fn observe(&self, offset: f64) {
        self.scrolled.set(past_threshold(offset));
    }

    pub fn scrolled(&self) -> Signal<bool> {
        let read: ReadSignal<bool> = self.scrolled.read_only();
        read.into()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn detach(&self) {
        (self.stop)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn threshold_is_exclusive() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(10.0));
        assert!(past_threshold(10.5));
        assert!(past_threshold(11.0));
    }

    #[test]
    fn starts_unscrolled() {
        let tracker = ScrollTracker::detached();
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn follows_current_offset_not_history() {
        let tracker = ScrollTracker::detached();

        tracker.observe(0.0);
        assert!(!tracker.is_scrolled());

        tracker.observe(11.0);
        assert!(tracker.is_scrolled());

        tracker.observe(0.0);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn signal_reflects_tracker() {
        let tracker = ScrollTracker::detached();
        let scrolled = tracker.scrolled();
        tracker.observe(250.0);
        assert!(scrolled.get());
    }

    #[test]
    fn detach_runs_stop_handle() {
        static STOPPED: AtomicUsize = AtomicUsize::new(0);
        let tracker = ScrollTracker {
            scrolled: RwSignal::new(false),
            stop: Arc::new(|| {
                STOPPED.fetch_add(1, Ordering::SeqCst);
            }),
        };
        tracker.detach();
        assert_eq!(STOPPED.load(Ordering::SeqCst), 1);
    }
}
