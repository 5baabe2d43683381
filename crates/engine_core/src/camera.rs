// crates/engine_core/src/camera.rs

use engine_ecs::{Entity, EntityTable};
use engine_shared::Vector2;
use tracing::{debug, warn};

use crate::capabilities::{Describe, Movable, Rotatable};
use crate::components::{Position, Rotation};
use crate::error::{EngineError, EngineResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraTarget {
    Untargeted,
    Targeted(Entity),
}

/// Follows one entity. Moves are one-tick impulses: they accumulate until the
/// next `update`, which applies them on top of the target position and then
/// forgets them.
#[derive(Debug)]
pub struct Camera {
    position: Position,
    rotation: Rotation,
    target: CameraTarget,
    displacement: Position,
    last_position: Position,
    zoom: f32,
    /// Set once a failed update has been logged; cleared by the next success
    /// or retarget so a lost target is reported once, not every tick.
    target_warned: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector2::ZERO)
    }
}

impl Camera {
    pub fn new(position: Vector2) -> Self {
        Self {
            position: position.into(),
            rotation: Rotation::default(),
            target: CameraTarget::Untargeted,
            displacement: Position::ORIGIN,
            last_position: position.into(),
            zoom: 1.0,
            target_warned: false,
        }
    }

    pub fn target(&self) -> CameraTarget {
        self.target
    }

    pub fn set_target(&mut self, entity: Entity) {
        debug!(%entity, "camera target set");
        self.target = CameraTarget::Targeted(entity);
        self.target_warned = false;
    }

    pub fn clear_target(&mut self) {
        self.target = CameraTarget::Untargeted;
        self.target_warned = false;
    }

    pub fn is_targeting(&self, entity: Entity) -> bool {
        self.target == CameraTarget::Targeted(entity)
    }

    /// Displacement queued for the next `update`.
    pub fn pending_displacement(&self) -> Vector2 {
        self.displacement.as_vec2()
    }

    /// Resolve the camera against its target.
    ///
    /// 1. remember the current position as the last one
    /// 2. new position = target position + pending displacement
    /// 3. clear the displacement
    ///
    /// Without a live target nothing changes and the error says why. The
    /// first failure of a streak is also logged.
    pub fn update<T: Movable>(&mut self, entities: &EntityTable<T>) -> EngineResult<Vector2> {
        let target = match self.target {
            CameraTarget::Untargeted => Err(EngineError::MissingTarget),
            CameraTarget::Targeted(entity) => entities.get(entity).ok_or(EngineError::StaleTarget(entity)),
        };
        let target = match target {
            Ok(target) => target,
            Err(err) => {
                if !self.target_warned {
                    warn!(error = %err, "camera update skipped");
                    self.target_warned = true;
                }
                return Err(err);
            }
        };
        self.target_warned = false;

        let resolved = target.current_position() + self.displacement.as_vec2();
        self.last_position = self.position;
        self.position.set_position(resolved);
        self.displacement = Position::ORIGIN;
        Ok(resolved)
    }

    pub fn last_position(&self) -> Vector2 {
        self.last_position.as_vec2()
    }

    /// Movement over the last resolved tick.
    pub fn velocity(&self) -> Vector2 {
        self.position.as_vec2() - self.last_position.as_vec2()
    }

    /// Blend between the last and current positions, `alpha` in `[0, 1]`.
    pub fn interpolate(&self, alpha: f32) -> Vector2 {
        self.last_position.as_vec2().lerp(self.position.as_vec2(), alpha.clamp(0.0, 1.0))
    }

    /// Records a zoom factor. Nothing reads it yet; the screen transform is
    /// unscaled.
    pub fn zoom(&mut self, factor: f32) {
        self.zoom *= factor;
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom
    }
}

impl Movable for Camera {
    /// Queue an offset for the next `update`; the resolved position is untouched.
    fn move_by(&mut self, offset: Vector2) {
        self.displacement.move_by(offset);
    }

    /// Place the camera directly, e.g. before any target exists.
    fn set_position(&mut self, position: Vector2) {
        self.position.set_position(position);
    }

    fn current_position(&self) -> Vector2 {
        self.position.as_vec2()
    }
}

impl Rotatable for Camera {
    fn set_rotation(&mut self, degrees: f32) {
        self.rotation.set_rotation(degrees);
    }

    fn rotate(&mut self, delta: f32) {
        self.rotation.rotate(delta);
    }

    fn rotation(&self) -> f32 {
        self.rotation.rotation()
    }
}

impl Describe for Camera {
    fn describe(&self) -> String {
        let target = match self.target {
            CameraTarget::Untargeted => "none".to_string(),
            CameraTarget::Targeted(entity) => entity.to_string(),
        };
        format!(
            "Camera at {} target {} pending {}",
            self.position.as_vec2().describe(),
            target,
            self.displacement.as_vec2().describe()
        )
    }
}
