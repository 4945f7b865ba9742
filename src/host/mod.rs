//! # Host Services
//!
//! Everything the controller consumes from its environment, gathered
//! behind one trait so hosts inject their scene, pointer, and input
//! plumbing explicitly instead of the controller reaching into process
//! globals. All lookups are fallible: a picked object or a reference
//! frame may be gone by the time it is resolved again, and the
//! controller treats that as "skip this invocation", never as an error
//! to propagate.

use cgmath::{InnerSpace, Vector3};

use crate::target::Manipulable;

/// Identifier for a manipulable object owned by the host scene.
///
/// A plain value with no ownership semantics; resolving it through
/// [`GizmoHost::target`] may fail at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Identifier for a reference-frame provider, typically the active
/// camera or a fixed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// World-space pointer ray used by the translate engine.
#[derive(Debug, Clone, Copy)]
pub struct PointerRay {
    /// Ray origin in world space, usually the unprojected cursor on the
    /// near plane.
    pub origin: Vector3<f32>,
    /// Ray direction, normalized.
    pub direction: Vector3<f32>,
}

impl PointerRay {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point along the ray at distance `t` from the origin.
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Right/up/forward axes used to interpret 2D input as 3D rotation
/// axes. All three vectors are expected to be unit length.
#[derive(Debug, Clone, Copy)]
pub struct Basis {
    pub right: Vector3<f32>,
    pub up: Vector3<f32>,
    pub forward: Vector3<f32>,
}

/// The controlling agent as resolved by the host: whatever embodies the
/// user in the scene (a player pawn, an editor camera rig). Its basis
/// is the fallback axis frame when no reference frame is configured.
#[derive(Debug, Clone, Copy)]
pub struct AgentContext {
    pub embodiment: Basis,
}

/// Pointer capture modes the host can be asked to enter.
///
/// `UiOnly` is part of the contract for hosts that need it but the
/// controller itself only ever requests the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocusMode {
    /// Pointer visible, input shared between the scene and UI. Entered
    /// when a transform mode switches on.
    GameAndUi,
    /// Scene-only input capture. Restored when the mode switches off.
    GameOnly,
    /// UI-exclusive capture.
    UiOnly,
}

/// Services the controller needs from the host, injected per call.
pub trait GizmoHost {
    /// Pick the scene object under the pointer, if any.
    fn find_target_under_pointer(&mut self) -> Option<TargetId>;

    /// Current pointer position in screen coordinates.
    fn pointer_position(&self) -> Option<(f32, f32)>;

    /// Unproject the pointer into a world-space ray.
    fn pointer_world_ray(&self) -> Option<PointerRay>;

    /// Resolve the controlling agent. Absence makes mode switching and
    /// engine ticks no-op for that invocation.
    fn resolve_agent(&self) -> Option<AgentContext>;

    /// Switch the host's input capture mode.
    fn set_input_focus(&mut self, mode: InputFocusMode);

    /// Resolve a target id to a live object. `None` means gone.
    fn target(&mut self, id: TargetId) -> Option<&mut dyn Manipulable>;

    /// Resolve a reference frame to its current basis. `None` means the
    /// frame provider is gone; the controller falls back to the agent's
    /// embodiment axes.
    fn frame_basis(&self, id: FrameId) -> Option<Basis>;
}

#[cfg(test)]
pub(crate) mod mock;
