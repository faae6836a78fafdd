//! Swipe Engine State Machine
//!
//! One engine instance per card. Lifecycle:
//!
//! ```text
//! idle ──start──▶ dragging ──end, |dx| ≤ threshold──▶ idle
//!                    │
//!                    └──end, |dx| > threshold──▶ exiting (terminal)
//! ```
//!
//! Exiting is terminal for a card instance: once entered, the card leaves the
//! interactive set and its decision is reported upward exactly once, after
//! the exit delay. Explicit apply/skip buttons enter the same exiting path
//! without any session state.

use crate::app::config::Config;
use crate::gesture::session::GestureSession;
use crate::gesture::visuals::CardVisuals;
use crate::gesture::{SwipeDecision, SwipeDirection};
use crate::input::pointer::{PointerOffset, PointerPoint, PointerSource};
use crate::time::ExitTimer;
use std::time::{Duration, Instant};
use tracing::debug;

/// Lifecycle phase of one card instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    /// No gesture in progress
    Idle,
    /// A gesture session is active
    Dragging,
    /// Committed; playing the exit animation. Terminal.
    Exiting,
}

/// Decision callback, fired with the resolved direction at most once per card
pub type SwipeCallback = Box<dyn FnMut(SwipeDirection)>;
/// Callback for affordances independent of swiping (save, view details)
pub type ActionCallback = Box<dyn FnMut()>;
/// Observer notified whenever the derived visuals change
pub type VisualObserver = Box<dyn FnMut(&CardVisuals)>;

/// Gesture engine for a single swipeable card
pub struct SwipeEngine {
    config: Config,
    session: Option<GestureSession>,
    phase: SwipePhase,
    exit_timer: Option<ExitTimer>,
    /// Direction of the committed swipe, set on entering `Exiting`
    committed: Option<SwipeDirection>,
    /// The decision callback has been delivered
    decided: bool,
    /// The container removed this card; suppress any pending callback
    disposed: bool,
    /// Save affordance toggle
    liked: bool,
    on_swipe: Option<SwipeCallback>,
    on_save: Option<ActionCallback>,
    on_view_details: Option<ActionCallback>,
    observer: Option<VisualObserver>,
}

impl SwipeEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an engine with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            session: None,
            phase: SwipePhase::Idle,
            exit_timer: None,
            committed: None,
            decided: false,
            disposed: false,
            liked: false,
            on_swipe: None,
            on_save: None,
            on_view_details: None,
            observer: None,
        }
    }

    /// Register the decision callback
    pub fn set_on_swipe(&mut self, callback: impl FnMut(SwipeDirection) + 'static) {
        self.on_swipe = Some(Box::new(callback));
    }

    /// Register the save callback
    pub fn set_on_save(&mut self, callback: impl FnMut() + 'static) {
        self.on_save = Some(Box::new(callback));
    }

    /// Register the view-details callback
    pub fn set_on_view_details(&mut self, callback: impl FnMut() + 'static) {
        self.on_view_details = Some(Box::new(callback));
    }

    /// Subscribe the rendering layer to visual changes
    pub fn set_observer(&mut self, observer: impl FnMut(&CardVisuals) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Whether the decision callback has been delivered
    pub fn is_decided(&self) -> bool {
        self.decided
    }

    /// Direction of the committed swipe, if the card has committed
    pub fn committed_direction(&self) -> Option<SwipeDirection> {
        self.committed
    }

    /// Whether the card has been disposed by its container
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Save affordance toggle state
    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Configured delay between visual exit and decision callback
    pub fn exit_delay(&self) -> Duration {
        self.config.gesture.exit_delay()
    }

    /// Current drag displacement; zero outside an active session
    pub fn offset(&self) -> PointerOffset {
        self.session
            .as_ref()
            .map(GestureSession::offset)
            .unwrap_or(PointerOffset::ZERO)
    }

    /// Derived visuals for the current state
    pub fn visuals(&self) -> CardVisuals {
        match self.phase {
            SwipePhase::Idle => CardVisuals::rest(),
            SwipePhase::Dragging => CardVisuals::dragging(self.offset(), &self.config.visuals),
            SwipePhase::Exiting => CardVisuals::exiting(
                self.committed.unwrap_or(SwipeDirection::Right),
                &self.config.visuals,
            ),
        }
    }

    /// Begin a gesture session.
    ///
    /// A start while a session is active is a no-op: the first session
    /// retains control, so a second finger cannot corrupt the drag.
    pub fn pointer_down(&mut self, point: PointerPoint, source: PointerSource) {
        if self.disposed || self.phase == SwipePhase::Exiting {
            return;
        }
        if self.session.is_some() {
            return;
        }
        debug!(x = point.x, y = point.y, ?source, "gesture start");
        self.session = Some(GestureSession::open(point, source));
        self.phase = SwipePhase::Dragging;
        self.notify_observer();
    }

    /// Track a move sample. Ignored with no active session.
    ///
    /// For touch input only: if the first move sample is mostly vertical the
    /// gesture is a page-scroll intent, and the session aborts with no
    /// decision. Later samples in the same gesture cannot resurrect it.
    pub fn pointer_move(&mut self, point: PointerPoint) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.source().yields_to_vertical_scroll()
            && session.is_first_move()
            && session.peek(point).is_mostly_vertical()
        {
            debug!("first touch sample is vertical, yielding to scroll");
            self.abort_session();
            return;
        }
        session.track(point);
        self.notify_observer();
    }

    /// End the gesture and resolve it against the commit threshold.
    pub fn pointer_up(&mut self, now: Instant) {
        self.end_drag(now);
    }

    /// The pointer left the tracked surface. Closes an active session exactly
    /// as pointer-up does, so a card can never be stuck dragging.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.end_drag(now);
    }

    /// Trigger the exiting sequence directly with a decision value.
    ///
    /// This is the button fallback: identical exit animation and callback as
    /// a completed drag, with no session state required. Ignored once the
    /// card is terminal.
    pub fn decide(&mut self, direction: SwipeDirection, now: Instant) {
        if self.disposed || self.phase == SwipePhase::Exiting {
            return;
        }
        self.session = None;
        self.commit(direction, now);
    }

    /// Toggle the save affordance and notify the container. Independent of
    /// swiping; allowed in any non-disposed state.
    pub fn save(&mut self) {
        if self.disposed {
            return;
        }
        self.liked = !self.liked;
        if let Some(callback) = self.on_save.as_mut() {
            callback();
        }
    }

    /// Ask the container to show the details view
    pub fn view_details(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(callback) = self.on_view_details.as_mut() {
            callback();
        }
    }

    /// Advance the exit timer. Returns the direction when the decision
    /// callback fires; the callback is invoked at most once per card.
    pub fn poll(&mut self, now: Instant) -> Option<SwipeDirection> {
        if self.disposed || self.decided {
            return None;
        }
        let direction = self.exit_timer.as_mut()?.poll(now)?;
        self.decided = true;
        self.exit_timer = None;
        debug!(?direction, "decision delivered");
        if let Some(callback) = self.on_swipe.as_mut() {
            callback(direction);
        }
        Some(direction)
    }

    /// The container removed this card. Cancels a pending exit timer so the
    /// decision callback can never fire into a disposed container.
    pub fn dispose(&mut self) {
        if self.exit_timer.take().is_some() && !self.decided {
            debug!("card disposed with pending exit timer, decision suppressed");
        }
        self.session = None;
        self.disposed = true;
    }

    fn end_drag(&mut self, now: Instant) {
        let Some(session) = self.session.take() else {
            return;
        };
        let decision =
            SwipeDecision::resolve(session.offset().dx, self.config.gesture.commit_threshold_px);
        match decision.direction() {
            Some(direction) => self.commit(direction, now),
            None => {
                debug!(dx = session.offset().dx, "gesture abandoned, back to rest");
                self.phase = SwipePhase::Idle;
                self.notify_observer();
            }
        }
    }

    fn abort_session(&mut self) {
        self.session = None;
        self.phase = SwipePhase::Idle;
        self.notify_observer();
    }

    fn commit(&mut self, direction: SwipeDirection, now: Instant) {
        debug!(?direction, "swipe committed");
        self.phase = SwipePhase::Exiting;
        self.committed = Some(direction);
        self.exit_timer = Some(ExitTimer::schedule(
            now,
            self.config.gesture.exit_delay(),
            direction,
        ));
        self.notify_observer();
    }

    fn notify_observer(&mut self) {
        let visuals = self.visuals();
        if let Some(observer) = self.observer.as_mut() {
            observer(&visuals);
        }
    }
}

impl Default for SwipeEngine {
    fn default() -> Self {
        Self::new()
    }
}
