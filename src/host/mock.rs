//! Test double for [`GizmoHost`] shared by the controller and engine
//! unit tests. Every external dependency is a plain field so tests can
//! script pick results, pointer samples, and disappearing targets.

use std::collections::{HashMap, HashSet};

use cgmath::{Quaternion, Vector3};

use super::{AgentContext, Basis, FrameId, GizmoHost, InputFocusMode, PointerRay, TargetId};
use crate::target::{Manipulable, TransformHooks};

pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn axis_aligned_basis() -> Basis {
    Basis {
        right: Vector3::unit_x(),
        up: Vector3::unit_y(),
        forward: Vector3::unit_z(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HookCall {
    HighlightOn,
    HighlightOff,
    StartTransformation,
    StopTransformation,
}

pub(crate) struct MockTarget {
    pub position: Vector3<f32>,
    pub scale: Vector3<f32>,
    /// Every incremental world rotation applied, in call order.
    pub rotations: Vec<Quaternion<f32>>,
    pub supports_hooks: bool,
    pub hook_calls: Vec<HookCall>,
}

impl MockTarget {
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotations: Vec::new(),
            supports_hooks: true,
            hook_calls: Vec::new(),
        }
    }

    pub fn hook_count(&self, call: HookCall) -> usize {
        self.hook_calls.iter().filter(|c| **c == call).count()
    }
}

impl Manipulable for MockTarget {
    fn position(&self) -> Vector3<f32> {
        self.position
    }

    fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    fn add_world_rotation(&mut self, delta: Quaternion<f32>) {
        self.rotations.push(delta);
    }

    fn scale3d(&self) -> Vector3<f32> {
        self.scale
    }

    fn set_scale3d(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
    }

    fn transform_hooks(&mut self) -> Option<&mut dyn TransformHooks> {
        if self.supports_hooks {
            Some(self)
        } else {
            None
        }
    }
}

impl TransformHooks for MockTarget {
    fn highlight_on(&mut self) {
        self.hook_calls.push(HookCall::HighlightOn);
    }

    fn highlight_off(&mut self) {
        self.hook_calls.push(HookCall::HighlightOff);
    }

    fn start_transformation(&mut self) {
        self.hook_calls.push(HookCall::StartTransformation);
    }

    fn stop_transformation(&mut self) {
        self.hook_calls.push(HookCall::StopTransformation);
    }
}

pub(crate) struct MockHost {
    pub targets: Vec<MockTarget>,
    /// Target ids that resolve to "gone" even though the data is kept
    /// around for post-mortem assertions.
    pub gone: HashSet<u64>,
    pub pick: Option<TargetId>,
    pub pointer: Option<(f32, f32)>,
    pub ray: Option<PointerRay>,
    pub agent: Option<AgentContext>,
    pub frames: HashMap<u64, Basis>,
    pub focus_changes: Vec<InputFocusMode>,
}

impl MockHost {
    /// Host with `target_count` hook-capable targets, a resolvable
    /// agent with axis-aligned embodiment, and a pointer at the origin.
    pub fn new(target_count: usize) -> Self {
        Self {
            targets: (0..target_count).map(|_| MockTarget::new()).collect(),
            gone: HashSet::new(),
            pick: None,
            pointer: Some((0.0, 0.0)),
            ray: Some(PointerRay::new(
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            )),
            agent: Some(AgentContext {
                embodiment: axis_aligned_basis(),
            }),
            frames: HashMap::new(),
            focus_changes: Vec::new(),
        }
    }
}

impl GizmoHost for MockHost {
    fn find_target_under_pointer(&mut self) -> Option<TargetId> {
        self.pick
    }

    fn pointer_position(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    fn pointer_world_ray(&self) -> Option<PointerRay> {
        self.ray
    }

    fn resolve_agent(&self) -> Option<AgentContext> {
        self.agent
    }

    fn set_input_focus(&mut self, mode: InputFocusMode) {
        self.focus_changes.push(mode);
    }

    fn target(&mut self, id: TargetId) -> Option<&mut dyn Manipulable> {
        if self.gone.contains(&id.0) {
            return None;
        }
        self.targets
            .get_mut(id.0 as usize)
            .map(|t| t as &mut dyn Manipulable)
    }

    fn frame_basis(&self, id: FrameId) -> Option<Basis> {
        self.frames.get(&id.0).copied()
    }
}
