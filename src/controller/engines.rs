//! # Per-Mode Update Engines
//!
//! The tick-driven algorithms that turn raw pointer samples into
//! transform updates: translate along the pointer ray, four rotation
//! variants, and planar-distance scaling. Each engine calibrates a
//! baseline on the first tick of a grab and works in deltas from then
//! on.
//!
//! Every tick revalidates its dependencies. A missing pointer, agent,
//! or target skips that tick with a [`TickError`]; the next due tick
//! retries, so transient dropouts self-heal without host involvement.

use cgmath::{Deg, InnerSpace, Quaternion, Rotation3, Vector3};
use thiserror::Error;

use super::{GizmoController, TransformMode};
use crate::host::{AgentContext, Basis, GizmoHost, TargetId};
use crate::math::{planar_distance, vinterp_to};
use crate::timing::TimerKind;

/// Reason an engine tick was skipped. Never escalated past a log line.
#[derive(Debug, Error)]
pub enum TickError {
    #[error("controlling agent could not be resolved")]
    AgentUnresolved,
    #[error("pointer position unavailable")]
    PointerUnavailable,
    #[error("pointer ray unavailable")]
    RayUnavailable,
    #[error("no target selected")]
    NoTarget,
    #[error("target {0:?} is gone")]
    TargetGone(TargetId),
}

impl GizmoController {
    /// Run one engine tick for a due timer.
    pub(crate) fn tick(
        &mut self,
        kind: TimerKind,
        host: &mut dyn GizmoHost,
    ) -> Result<(), TickError> {
        match kind {
            TimerKind::Location => self.tick_translate(host),
            TimerKind::Rotation => self.tick_rotate(host),
            TimerKind::Scale => self.tick_scale(host),
        }
    }

    /// Translate the target along the pointer's world ray.
    ///
    /// The distance from ray origin to target is captured on the first
    /// tick of the grab and only the accumulated depth axis changes it
    /// afterwards, so planar pointer motion keeps the target at a fixed
    /// depth. The write goes through an interpolation step that trades
    /// a one-tick lag for jitter suppression.
    fn tick_translate(&mut self, host: &mut dyn GizmoHost) -> Result<(), TickError> {
        let ray = host.pointer_world_ray().ok_or(TickError::RayUnavailable)?;
        let id = self.target.ok_or(TickError::NoTarget)?;
        let target = host.target(id).ok_or(TickError::TargetGone(id))?;

        let current = target.position();
        let slot = TimerKind::Location.index();
        if !self.first_sample_consumed[slot] {
            self.saved_distance = (current - ray.origin).magnitude();
            self.first_sample_consumed[slot] = true;
        }

        let multiplier = self.saved_distance + self.accumulated_axis_input * self.config.depth_speed;
        let candidate = ray.point_at(multiplier);
        let next = vinterp_to(
            current,
            candidate,
            self.config.location_tick_period,
            self.config.interp_speed,
        );
        target.set_position(next);
        Ok(())
    }

    /// Apply one incremental world rotation from the per-tick pointer
    /// delta, around axes taken from the resolved frame.
    fn tick_rotate(&mut self, host: &mut dyn GizmoHost) -> Result<(), TickError> {
        let (x, y) = host.pointer_position().ok_or(TickError::PointerUnavailable)?;
        let agent = host.resolve_agent().ok_or(TickError::AgentUnresolved)?;
        let basis = self.resolve_axis_frame(host, &agent);
        let id = self.target.ok_or(TickError::NoTarget)?;

        // First tick after a (re)start seeds the baseline for the axes
        // this variant reads, making that tick's delta exactly zero.
        let slot = TimerKind::Rotation.index();
        if !self.first_sample_consumed[slot] {
            match self.mode {
                TransformMode::RotateYawPitch => {
                    self.saved_pitch = y;
                    self.saved_yaw = x;
                }
                TransformMode::RotateRoll => self.saved_roll = x,
                TransformMode::RotatePitch => self.saved_pitch = y,
                TransformMode::RotateYaw => self.saved_yaw = x,
                _ => {}
            }
            self.first_sample_consumed[slot] = true;
        }

        let speed = self.config.rotation_speed;
        let delta = match self.mode {
            TransformMode::RotateYawPitch => {
                let pitch = Quaternion::from_axis_angle(
                    -basis.right,
                    Deg(self.calc_delta_pitch(y) * speed),
                );
                let yaw =
                    Quaternion::from_axis_angle(-basis.up, Deg(self.calc_delta_yaw(x) * speed));
                pitch * yaw
            }
            TransformMode::RotateRoll => Quaternion::from_axis_angle(
                -basis.forward,
                Deg(self.calc_delta_roll(x) * speed),
            ),
            TransformMode::RotatePitch => Quaternion::from_axis_angle(
                -basis.right,
                Deg(self.calc_delta_pitch(y) * speed),
            ),
            TransformMode::RotateYaw => {
                Quaternion::from_axis_angle(-basis.up, Deg(self.calc_delta_yaw(x) * speed))
            }
            // A stale rotation tick outside a rotate mode does nothing.
            _ => return Ok(()),
        };

        let target = host.target(id).ok_or(TickError::TargetGone(id))?;
        target.add_world_rotation(delta);
        Ok(())
    }

    /// Uniform scale from planar pointer displacement since the grab.
    ///
    /// Above the click point grows, below shrinks; a shrink that would
    /// push any axis to zero or negative is rejected whole and the
    /// previous tick's scale is kept. Returning to the click row resets
    /// to the grabbed scale.
    fn tick_scale(&mut self, host: &mut dyn GizmoHost) -> Result<(), TickError> {
        let (x, y) = host.pointer_position().ok_or(TickError::PointerUnavailable)?;
        let id = self.target.ok_or(TickError::NoTarget)?;
        let target = host.target(id).ok_or(TickError::TargetGone(id))?;

        let slot = TimerKind::Scale.index();
        if !self.first_sample_consumed[slot] {
            self.click_x = x;
            self.click_y = y;
            self.saved_scale = target.scale3d();
            self.current_scale = self.saved_scale;
            self.first_sample_consumed[slot] = true;
        }

        let stretch = planar_distance(self.click_x, self.click_y, x, y) * self.config.scale_speed;
        let stretch = Vector3::new(stretch, stretch, stretch);

        // Screen Y grows downward: above the click row means smaller y.
        if y < self.click_y {
            self.current_scale = self.saved_scale + stretch;
        }
        if y > self.click_y {
            let candidate = self.saved_scale - stretch;
            if candidate.x > 0.0 && candidate.y > 0.0 && candidate.z > 0.0 {
                self.current_scale = candidate;
            }
        }
        if y == self.click_y {
            self.current_scale = self.saved_scale;
        }

        target.set_scale3d(self.current_scale);
        Ok(())
    }

    /// Axes for interpreting 2D input: the configured reference frame
    /// when present and still resolvable, else the controlling agent's
    /// embodiment axes.
    fn resolve_axis_frame(&self, host: &dyn GizmoHost, agent: &AgentContext) -> Basis {
        self.reference_frame
            .and_then(|id| host.frame_basis(id))
            .unwrap_or(agent.embodiment)
    }

    // Delta against the previous tick's sample, not the grab baseline.

    fn calc_delta_roll(&mut self, roll: f32) -> f32 {
        let delta = roll - self.saved_roll;
        self.saved_roll = roll;
        delta
    }

    fn calc_delta_pitch(&mut self, pitch: f32) -> f32 {
        let delta = pitch - self.saved_pitch;
        self.saved_pitch = pitch;
        delta
    }

    fn calc_delta_yaw(&mut self, yaw: f32) -> f32 {
        let delta = yaw - self.saved_yaw;
        self.saved_yaw = yaw;
        delta
    }
}
