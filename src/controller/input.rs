//! # Input Adapter
//!
//! Optional glue between winit device events and the controller
//! commands, in the same shape as a camera controller: one method for
//! device events, one for key events. Hosts with their own input stack
//! can skip this module and call the commands directly.

use winit::dpi::PhysicalPosition;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{GizmoController, TransformMode};
use crate::host::GizmoHost;

/// Keyboard bindings for mode selection.
///
/// Defaults put grab/rotate/scale on G/R/S and the single-axis rotate
/// variants on X/Y/Z, matching the axis each one spins around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeBindings {
    pub translate: KeyCode,
    pub rotate_yaw_pitch: KeyCode,
    pub rotate_roll: KeyCode,
    pub rotate_pitch: KeyCode,
    pub rotate_yaw: KeyCode,
    pub scale: KeyCode,
    pub exit: KeyCode,
}

impl Default for ModeBindings {
    fn default() -> Self {
        Self {
            translate: KeyCode::KeyG,
            rotate_yaw_pitch: KeyCode::KeyR,
            rotate_roll: KeyCode::KeyX,
            rotate_pitch: KeyCode::KeyY,
            rotate_yaw: KeyCode::KeyZ,
            scale: KeyCode::KeyS,
            exit: KeyCode::Escape,
        }
    }
}

/// Maps pointer buttons, wheel, and hotkeys onto controller commands.
pub struct GizmoInputController {
    /// Depth-axis units fed per wheel line scrolled.
    pub wheel_sensitivity: f32,
    pub bindings: ModeBindings,
}

impl GizmoInputController {
    pub fn new(wheel_sensitivity: f32) -> Self {
        Self {
            wheel_sensitivity,
            bindings: ModeBindings::default(),
        }
    }

    pub fn process_events(
        &mut self,
        event: &DeviceEvent,
        controller: &mut GizmoController,
        host: &mut dyn GizmoHost,
    ) {
        match event {
            DeviceEvent::Button {
                button: 0, // Left mouse button
                state,
            } => {
                self.on_button(*state == ElementState::Pressed, controller, host);
            }
            DeviceEvent::MouseWheel { delta } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => {
                        *scroll as f32
                    }
                };
                self.on_scroll(amount, controller);
            }
            _ => (),
        }
    }

    pub fn process_keyed_events(
        &mut self,
        event: &KeyEvent,
        controller: &mut GizmoController,
        host: &mut dyn GizmoHost,
    ) {
        if let KeyEvent {
            physical_key: PhysicalKey::Code(code),
            state: ElementState::Pressed,
            ..
        } = event
        {
            self.on_key(*code, controller, host);
        }
    }

    /// Pointer button edge: press grabs, release lets go.
    pub fn on_button(
        &mut self,
        pressed: bool,
        controller: &mut GizmoController,
        host: &mut dyn GizmoHost,
    ) {
        if pressed {
            controller.start_manipulation(host);
        } else {
            controller.stop_manipulation(host);
        }
    }

    /// Wheel travel feeds the depth axis used by the translate engine.
    pub fn on_scroll(&mut self, amount: f32, controller: &mut GizmoController) {
        controller.accumulate_axis_input(amount * self.wheel_sensitivity);
    }

    pub fn on_key(
        &mut self,
        code: KeyCode,
        controller: &mut GizmoController,
        host: &mut dyn GizmoHost,
    ) {
        let bindings = &self.bindings;
        if code == bindings.exit {
            controller.switch_off_mode(host);
            return;
        }

        let mode = match code {
            c if c == bindings.translate => TransformMode::Translate,
            c if c == bindings.rotate_yaw_pitch => TransformMode::RotateYawPitch,
            c if c == bindings.rotate_roll => TransformMode::RotateRoll,
            c if c == bindings.rotate_pitch => TransformMode::RotatePitch,
            c if c == bindings.rotate_yaw => TransformMode::RotateYaw,
            c if c == bindings.scale => TransformMode::Scale,
            _ => return,
        };
        controller.switch_on_mode(host, mode);
    }
}

impl Default for GizmoInputController {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;
    use crate::host::TargetId;

    #[test]
    fn hotkeys_drive_mode_switching() {
        let mut host = MockHost::new(1);
        let mut controller = GizmoController::default();
        let mut input = GizmoInputController::default();

        input.on_key(KeyCode::KeyG, &mut controller, &mut host);
        assert_eq!(controller.mode(), TransformMode::Translate);

        input.on_key(KeyCode::KeyZ, &mut controller, &mut host);
        assert_eq!(controller.mode(), TransformMode::RotateYaw);

        // Unbound key changes nothing.
        input.on_key(KeyCode::KeyQ, &mut controller, &mut host);
        assert_eq!(controller.mode(), TransformMode::RotateYaw);

        input.on_key(KeyCode::Escape, &mut controller, &mut host);
        assert_eq!(controller.mode(), TransformMode::Idle);
    }

    #[test]
    fn button_edges_start_and_stop_the_grab() {
        let mut host = MockHost::new(1);
        host.pick = Some(TargetId(0));
        let mut controller = GizmoController::default();
        let mut input = GizmoInputController::default();

        input.on_key(KeyCode::KeyS, &mut controller, &mut host);
        input.on_button(true, &mut controller, &mut host);
        assert!(controller.is_dragging());

        input.on_button(false, &mut controller, &mut host);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn wheel_feeds_depth_axis_scaled() {
        let mut host = MockHost::new(1);
        host.pick = Some(TargetId(0));
        let mut controller = GizmoController::default();
        let mut input = GizmoInputController::new(0.5);

        input.on_key(KeyCode::KeyG, &mut controller, &mut host);
        input.on_button(true, &mut controller, &mut host);
        input.on_scroll(4.0, &mut controller);
        assert_eq!(controller.accumulated_axis_input(), 2.0);
    }

    #[test]
    fn device_events_route_to_commands() {
        let mut host = MockHost::new(1);
        host.pick = Some(TargetId(0));
        let mut controller = GizmoController::default();
        let mut input = GizmoInputController::default();

        input.on_key(KeyCode::KeyG, &mut controller, &mut host);
        input.process_events(
            &DeviceEvent::Button {
                button: 0,
                state: ElementState::Pressed,
            },
            &mut controller,
            &mut host,
        );
        assert!(controller.is_dragging());

        input.process_events(
            &DeviceEvent::MouseWheel {
                delta: MouseScrollDelta::LineDelta(0.0, 3.0),
            },
            &mut controller,
            &mut host,
        );
        assert_eq!(controller.accumulated_axis_input(), 3.0);

        // Other buttons are ignored.
        input.process_events(
            &DeviceEvent::Button {
                button: 1,
                state: ElementState::Released,
            },
            &mut controller,
            &mut host,
        );
        assert!(controller.is_dragging());
    }
}
