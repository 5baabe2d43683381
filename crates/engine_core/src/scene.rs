// crates/engine_core/src/scene.rs
use engine_ecs::{Entity, EntityTable};
use engine_shared::{Intent, IntentQueue, Size, Vector2};
use tracing::{debug, info, warn};

use crate::assets::ImageLoader;
use crate::camera::Camera;
use crate::capabilities::{Collidable, Contact, Movable};
use crate::entities::{IntentOutcome, SceneEntity};
use crate::error::EngineResult;
use crate::renderer::RenderSurface;

/// Map a world position into render-target space with the camera at the
/// screen center. Pure: nothing is written back to the entity.
pub fn world_to_screen(world: Vector2, camera: Vector2, render_target: Size) -> Vector2 {
    world - camera + render_target.half()
}

/// Owns every entity, the order they are drawn in, and the camera.
#[derive(Default)]
pub struct Scene {
    entities: EntityTable<SceneEntity>,
    render_queue: Vec<Entity>,
    camera: Camera,
    controlled: Option<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity; it is drawn after everything spawned before it.
    pub fn spawn(&mut self, entity: impl Into<SceneEntity>) -> Entity {
        let entity = entity.into();
        let kind = entity.kind();
        let handle = self.entities.spawn(entity);
        self.render_queue.push(handle);
        debug!(entity = %handle, kind, "spawned");
        handle
    }

    /// Remove an entity, release its texture, and drop every reference the
    /// scene holds to it (render queue, camera target, controlled slot).
    pub fn despawn(&mut self, handle: Entity, surface: &mut dyn RenderSurface) -> bool {
        let Some(entity) = self.entities.despawn(handle) else {
            return false;
        };
        entity.release(surface);

        self.render_queue.retain(|queued| *queued != handle);
        if self.camera.is_targeting(handle) {
            self.camera.clear_target();
        }
        if self.controlled == Some(handle) {
            self.controlled = None;
        }
        debug!(entity = %handle, "despawned");
        true
    }

    pub fn entities(&self) -> &EntityTable<SceneEntity> {
        &self.entities
    }

    pub fn get(&self, handle: Entity) -> Option<&SceneEntity> {
        self.entities.get(handle)
    }

    pub fn get_mut(&mut self, handle: Entity) -> Option<&mut SceneEntity> {
        self.entities.get_mut(handle)
    }

    pub fn render_queue(&self) -> &[Entity] {
        &self.render_queue
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Point the camera at a live entity.
    pub fn follow(&mut self, handle: Entity) -> bool {
        if !self.entities.is_alive(handle) {
            warn!(entity = %handle, "cannot follow a dead entity");
            return false;
        }
        self.camera.set_target(handle);
        true
    }

    /// Route input intents to `handle`, which must be a player.
    pub fn set_controlled(&mut self, handle: Entity) -> bool {
        match self.entities.get(handle) {
            Some(SceneEntity::Player(_)) => {
                self.controlled = Some(handle);
                true
            }
            _ => {
                warn!(entity = %handle, "only a live player can take input");
                false
            }
        }
    }

    pub fn controlled(&self) -> Option<Entity> {
        self.controlled
    }

    /// Drain the queue into the controlled player. Returns true once a quit
    /// intent is seen; anything queued after it is discarded.
    pub fn apply_intents(
        &mut self,
        intents: &mut IntentQueue,
        loader: &dyn ImageLoader,
        surface: &mut dyn RenderSurface,
    ) -> bool {
        let player = self
            .controlled
            .and_then(|handle| self.entities.get_mut(handle))
            .and_then(SceneEntity::as_player_mut);

        let Some(player) = player else {
            let mut quit = false;
            let mut dropped = 0usize;
            for intent in intents.drain() {
                if matches!(intent, Intent::Quit) {
                    quit = true;
                    break;
                }
                dropped += 1;
            }
            if dropped > 0 {
                warn!(dropped, "no controlled player, intents dropped");
            }
            return quit;
        };

        for intent in intents.drain() {
            if player.apply_intent(intent, loader, surface) == IntentOutcome::Quit {
                info!("quit requested");
                return true;
            }
        }
        false
    }

    /// Resolve the camera for this tick.
    pub fn update_camera(&mut self) -> EngineResult<Vector2> {
        self.camera.update(&self.entities)
    }

    pub fn screen_position(&self, handle: Entity, render_target: Size) -> Option<Vector2> {
        let entity = self.entities.get(handle)?;
        Some(world_to_screen(
            entity.current_position(),
            self.camera.current_position(),
            render_target,
        ))
    }

    /// Screen positions for the render queue, in draw order.
    pub fn screen_positions(&self, render_target: Size) -> Vec<(Entity, Vector2)> {
        self.render_queue
            .iter()
            .filter_map(|&handle| Some((handle, self.screen_position(handle, render_target)?)))
            .collect()
    }

    /// Deliver a collision to both participants. The intersection test is the
    /// caller's; only collidable entities hear about it. Returns how many
    /// were notified.
    pub fn notify_collision(&mut self, a: Entity, b: Entity) -> usize {
        let hitbox = |handle: Entity| {
            self.entities
                .get(handle)
                .and_then(SceneEntity::as_collidable)
                .map(|c| c.hitbox_position().as_vec2())
        };
        let (hitbox_a, hitbox_b) = (hitbox(a), hitbox(b));

        let mut notified = 0;
        let deliveries = [(a, b, hitbox_b), (b, a, hitbox_a)];
        for (receiver, other, other_hitbox) in deliveries {
            // The other side need not be collidable; fall back to its position.
            let other_hitbox = other_hitbox
                .or_else(|| self.entities.get(other).map(|e| e.current_position()));
            let (Some(other_hitbox), Some(target)) = (
                other_hitbox,
                self.entities.get_mut(receiver).and_then(SceneEntity::as_collidable_mut),
            ) else {
                continue;
            };
            target.collide_with(&Contact { other, other_hitbox });
            notified += 1;
        }
        notified
    }

    /// Advance animations and draw every queued entity. Returns the number of
    /// entities that drew something.
    pub fn render(&mut self, surface: &mut dyn RenderSurface, now_ms: u64) -> usize {
        for &handle in &self.render_queue {
            if let Some(entity) = self.entities.get_mut(handle) {
                entity.animate(now_ms);
            }
        }

        let placements = self.screen_positions(surface.size());
        let mut drawn = 0;
        for (handle, screen) in placements {
            if let Some(entity) = self.entities.get(handle) {
                if entity.render(surface, screen) {
                    drawn += 1;
                }
            }
        }
        drawn
    }
}
