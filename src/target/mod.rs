//! # Manipulable Targets
//!
//! The capability contract a scene object must expose to be driven by
//! the gizmo controller. Transform access is mandatory; the lifecycle
//! hooks are an optional capability probed at selection time and before
//! every notification.

use cgmath::{Quaternion, Vector3};

/// Fire-and-forget lifecycle notifications a target may implement.
///
/// All methods default to no-ops so implementors override only what
/// they react to. Calls carry no return value and the controller never
/// depends on their effect.
pub trait TransformHooks {
    /// The target became the current selection.
    fn highlight_on(&mut self) {}

    /// The target stopped being the current selection.
    fn highlight_off(&mut self) {}

    /// A grab on this target is about to start ticking.
    fn start_transformation(&mut self) {}

    /// The grab on this target ended.
    fn stop_transformation(&mut self) {}
}

/// Transform access the update engines need from a scene object.
///
/// Targets are looked up through the host by id on every access, so an
/// implementation only needs to represent a live object; disappearing
/// is handled by the lookup returning nothing.
pub trait Manipulable {
    /// World-space position.
    fn position(&self) -> Vector3<f32>;

    fn set_position(&mut self, position: Vector3<f32>);

    /// Apply an incremental rotation in world space.
    fn add_world_rotation(&mut self, delta: Quaternion<f32>);

    /// Per-axis world scale.
    fn scale3d(&self) -> Vector3<f32>;

    fn set_scale3d(&mut self, scale: Vector3<f32>);

    /// Capability probe for the optional lifecycle hooks.
    ///
    /// Objects that return `None` cannot be grabbed; the target
    /// selector rejects them before any controller state changes.
    fn transform_hooks(&mut self) -> Option<&mut dyn TransformHooks> {
        None
    }
}
