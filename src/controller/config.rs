//! # Controller Configuration
//!
//! Free-standing tunables for the gizmo controller. None of these carry
//! invariants; they are literal multipliers and periods applied by the
//! tick engines.

/// Shared default for all three tick periods, roughly 60 Hz.
pub const DEFAULT_TICK_PERIOD: f32 = 0.017;

/// Tunables for [`GizmoController`](crate::GizmoController).
#[derive(Debug, Clone)]
pub struct GizmoConfig {
    /// Period of the translate engine tick, in seconds.
    pub location_tick_period: f32,
    /// Period of the rotation engine tick, in seconds.
    pub rotation_tick_period: f32,
    /// Period of the scale engine tick, in seconds.
    pub scale_tick_period: f32,

    /// Interpolation rate for translate smoothing. Higher values track
    /// the pointer tighter; zero disables smoothing entirely.
    pub interp_speed: f32,
    /// Depth (dolly) translation speed per unit of accumulated axis
    /// input.
    pub depth_speed: f32,
    /// Rotation in degrees per unit of pointer travel.
    pub rotation_speed: f32,
    /// Scale change per unit of planar pointer displacement.
    pub scale_speed: f32,

    /// Declared minimum scale. Currently unused: the shrink floor
    /// rejects any candidate with a non-positive axis instead of
    /// consulting this value.
    pub min_scale: f32,

    /// Emit diagnostic log messages for skipped operations.
    pub debug_logging: bool,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            location_tick_period: DEFAULT_TICK_PERIOD,
            rotation_tick_period: DEFAULT_TICK_PERIOD,
            scale_tick_period: DEFAULT_TICK_PERIOD,
            interp_speed: 25.0,
            depth_speed: 25.0,
            rotation_speed: 0.5,
            scale_speed: 0.015,
            min_scale: 0.0,
            debug_logging: false,
        }
    }
}
