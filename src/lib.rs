// src/lib.rs
//! Gizmo Core
//!
//! An interactive 3D object-manipulation controller: pick a target
//! under the pointer, then translate, rotate, or scale it from
//! continuous 2D input. The crate owns the manipulation state machine
//! and the per-tick math; rendering, picking, and windowing stay on the
//! host side behind the [`GizmoHost`] trait.

pub mod controller;
pub mod events;
pub mod host;
pub mod math;
pub mod target;
pub mod timing;

// Re-export the main types for convenience
pub use controller::config::GizmoConfig;
pub use controller::engines::TickError;
pub use controller::input::{GizmoInputController, ModeBindings};
pub use controller::{GizmoController, TransformMode};
pub use events::{GizmoEvent, SubscriptionId};
pub use host::{
    AgentContext, Basis, FrameId, GizmoHost, InputFocusMode, PointerRay, TargetId,
};
pub use target::{Manipulable, TransformHooks};
pub use timing::TimerKind;
