//! # Gizmo Controller
//!
//! Core of the interactive transform system: owns the current transform
//! mode and drag state, arbitrates between selecting a new target and
//! resuming the previous one, and drives the per-mode tick engines in
//! [`engines`]. One controller exists per controlling agent and lives
//! for the agent's session.
//!
//! All scene access goes through a [`GizmoHost`] passed into each call;
//! the controller holds only ids, never references into the scene, so a
//! target vanishing between calls degrades to a skipped operation.

pub mod config;
pub mod engines;
pub mod input;

use cgmath::Vector3;
use log::{debug, warn};

use crate::events::{EventBus, GizmoEvent, SubscriptionId};
use crate::host::{FrameId, GizmoHost, InputFocusMode, TargetId};
use crate::target::TransformHooks;
use crate::timing::{TimerBank, TimerKind};

pub use config::GizmoConfig;

/// Manipulation mode selected by the host.
///
/// `Idle` is both the initial state and the state outside any
/// manipulation; it is never a valid argument to `switch_on_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    #[default]
    Idle,
    Translate,
    /// Combined yaw + pitch from the two pointer axes.
    RotateYawPitch,
    RotateRoll,
    RotatePitch,
    RotateYaw,
    Scale,
}

impl TransformMode {
    /// Timer class driving this mode, if any.
    pub(crate) fn timer_kind(self) -> Option<TimerKind> {
        match self {
            TransformMode::Idle => None,
            TransformMode::Translate => Some(TimerKind::Location),
            TransformMode::RotateYawPitch
            | TransformMode::RotateRoll
            | TransformMode::RotatePitch
            | TransformMode::RotateYaw => Some(TimerKind::Rotation),
            TransformMode::Scale => Some(TimerKind::Scale),
        }
    }
}

/// Interactive transform controller. See the module docs for the
/// overall data flow.
pub struct GizmoController {
    config: GizmoConfig,
    mode: TransformMode,
    dragging: bool,

    target: Option<TargetId>,
    previous_target: Option<TargetId>,
    reference_frame: Option<FrameId>,

    timers: TimerBank,
    events: EventBus,

    /// One flag per timer class; false means the next tick of that
    /// class must capture its calibration baseline.
    first_sample_consumed: [bool; 3],

    // Per-gesture calibration baselines.
    saved_roll: f32,
    saved_pitch: f32,
    saved_yaw: f32,
    saved_distance: f32,
    click_x: f32,
    click_y: f32,
    saved_scale: Vector3<f32>,
    current_scale: Vector3<f32>,

    accumulated_axis_input: f32,
}

impl GizmoController {
    pub fn new(config: GizmoConfig) -> Self {
        Self {
            config,
            mode: TransformMode::Idle,
            dragging: false,
            target: None,
            previous_target: None,
            reference_frame: None,
            timers: TimerBank::new(),
            events: EventBus::new(),
            first_sample_consumed: [false; 3],
            saved_roll: 0.0,
            saved_pitch: 0.0,
            saved_yaw: 0.0,
            saved_distance: 0.0,
            click_x: 0.0,
            click_y: 0.0,
            saved_scale: Vector3::new(1.0, 1.0, 1.0),
            current_scale: Vector3::new(1.0, 1.0, 1.0),
            accumulated_axis_input: 0.0,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// True exactly while a grab is live and engine ticks run.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn target(&self) -> Option<TargetId> {
        self.target
    }

    pub fn previous_target(&self) -> Option<TargetId> {
        self.previous_target
    }

    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GizmoConfig {
        &mut self.config
    }

    /// Running sum of depth-axis input for the current grab.
    pub fn accumulated_axis_input(&self) -> f32 {
        self.accumulated_axis_input
    }

    /// Frame whose axes interpret 2D input, or `None` to fall back to
    /// the controlling agent's embodiment axes.
    pub fn set_reference_frame(&mut self, frame: Option<FrameId>) {
        self.reference_frame = frame;
    }

    pub fn reference_frame(&self) -> Option<FrameId> {
        self.reference_frame
    }

    /// Register an observer for controller notifications.
    pub fn subscribe(&mut self, observer: impl FnMut(GizmoEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Enter a transform mode.
    ///
    /// Silently refuses when the controlling agent cannot be resolved,
    /// while a grab is live, for `Idle`, and for the mode already
    /// active. On success switches input focus to shared game/UI
    /// capture and emits [`GizmoEvent::ModeEnabled`].
    pub fn switch_on_mode(&mut self, host: &mut dyn GizmoHost, requested: TransformMode) {
        if host.resolve_agent().is_none() {
            if self.config.debug_logging {
                warn!("switch_on_mode: controlling agent is not resolvable");
            }
            return;
        }
        if self.dragging || requested == TransformMode::Idle || requested == self.mode {
            return;
        }

        host.set_input_focus(InputFocusMode::GameAndUi);
        self.mode = requested;
        self.events.emit(GizmoEvent::ModeEnabled);
    }

    /// Leave the current transform mode.
    ///
    /// No-op when already idle. A live grab is stopped first, then the
    /// selection is cleared (with a highlight-off notification to the
    /// current target), game-only input focus is restored, and
    /// [`GizmoEvent::ModeDisabled`] is emitted.
    pub fn switch_off_mode(&mut self, host: &mut dyn GizmoHost) {
        if self.mode == TransformMode::Idle {
            return;
        }

        host.set_input_focus(InputFocusMode::GameOnly);
        if self.dragging {
            self.stop_manipulation(host);
        }
        self.reset_transform(host);
        self.events.emit(GizmoEvent::ModeDisabled);
    }

    /// Begin a grab on whatever is under the pointer.
    ///
    /// Resolves a pick, verifies the target supports the transform-hook
    /// capability, then either resumes the previous target (no highlight
    /// traffic) or selects the new one, and starts the engine for the
    /// active mode. Any precondition failure leaves all state untouched.
    pub fn start_manipulation(&mut self, host: &mut dyn GizmoHost) {
        if self.dragging || self.mode == TransformMode::Idle {
            return;
        }

        let Some(found) = host.find_target_under_pointer() else {
            if self.config.debug_logging {
                debug!("start_manipulation: nothing under pointer");
            }
            return;
        };
        if !self.supports_hooks(host, found) {
            if self.config.debug_logging {
                debug!("start_manipulation: target {found:?} lacks transform hooks");
            }
            return;
        }

        self.accumulated_axis_input = 0.0;

        if Some(found) != self.previous_target {
            self.select_new_target(host, found);
        }
        self.start_engine(host);
    }

    /// End the current grab.
    ///
    /// Emits [`GizmoEvent::ManipulationStopped`], notifies the target,
    /// cancels the active engine timer, and clears its calibration flag
    /// so the next grab recalibrates. The depth-axis accumulator is
    /// deliberately left alone; it resets only on the next successful
    /// selection.
    pub fn stop_manipulation(&mut self, host: &mut dyn GizmoHost) {
        if self.mode != TransformMode::Idle {
            self.events.emit(GizmoEvent::ManipulationStopped);
            self.notify_hooks(host, self.target, |h| h.stop_transformation());
            self.dragging = false;
        }
        if let Some(kind) = self.mode.timer_kind() {
            self.first_sample_consumed[kind.index()] = false;
            self.timers.cancel(kind);
        }
    }

    /// Aggregate a secondary continuous axis sample (mouse wheel,
    /// gamepad trigger). Ignored outside a grab; consumed by the
    /// translate engine as depth.
    pub fn accumulate_axis_input(&mut self, value: f32) {
        if !self.dragging {
            return;
        }
        self.accumulated_axis_input += value;
    }

    /// Pump the engine timers by `dt` seconds and run every due tick.
    ///
    /// The host calls this once per frame. A tick that cannot resolve
    /// its dependencies this frame is skipped and retried on the next
    /// due tick.
    pub fn advance(&mut self, dt: f32, host: &mut dyn GizmoHost) {
        let due = self.timers.advance(dt);
        for kind in TimerKind::ALL {
            for _ in 0..due[kind.index()] {
                if let Err(err) = self.tick(kind, host) {
                    if self.config.debug_logging {
                        debug!("{kind:?} tick skipped: {err}");
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Selection internals
    // ------------------------------------------------------------------

    fn select_new_target(&mut self, host: &mut dyn GizmoHost, new: TargetId) {
        self.notify_hooks(host, self.previous_target, |h| h.highlight_off());
        self.notify_hooks(host, Some(new), |h| h.highlight_on());
        self.previous_target = Some(new);
        self.target = Some(new);
    }

    fn start_engine(&mut self, host: &mut dyn GizmoHost) {
        let Some(kind) = self.mode.timer_kind() else {
            return;
        };

        self.dragging = true;
        self.events.emit(GizmoEvent::ManipulationStarted);
        self.notify_hooks(host, self.target, |h| h.start_transformation());

        self.first_sample_consumed[kind.index()] = false;
        self.timers.start(kind, self.tick_period(kind));
    }

    fn reset_transform(&mut self, host: &mut dyn GizmoHost) {
        self.notify_hooks(host, self.target, |h| h.highlight_off());
        self.previous_target = None;
        self.target = None;
        self.mode = TransformMode::Idle;
    }

    fn tick_period(&self, kind: TimerKind) -> f32 {
        match kind {
            TimerKind::Location => self.config.location_tick_period,
            TimerKind::Rotation => self.config.rotation_tick_period,
            TimerKind::Scale => self.config.scale_tick_period,
        }
    }

    fn supports_hooks(&self, host: &mut dyn GizmoHost, id: TargetId) -> bool {
        match host.target(id) {
            Some(target) => target.transform_hooks().is_some(),
            None => false,
        }
    }

    /// Deliver one lifecycle notification, skipping silently when the
    /// target is absent, gone, or does not expose the capability.
    fn notify_hooks(
        &self,
        host: &mut dyn GizmoHost,
        id: Option<TargetId>,
        call: fn(&mut dyn TransformHooks),
    ) {
        let Some(id) = id else { return };
        let Some(target) = host.target(id) else {
            if self.config.debug_logging {
                debug!("notify_hooks: target {id:?} is gone");
            }
            return;
        };
        if let Some(hooks) = target.transform_hooks() {
            call(hooks);
        }
    }
}

impl Default for GizmoController {
    fn default() -> Self {
        Self::new(GizmoConfig::default())
    }
}
