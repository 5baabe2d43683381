// crates/engine_core/src/entities/player.rs
use engine_shared::{Intent, Size, Vector2};
use tracing::{debug, info};

use super::{Actor, Health};
use crate::assets::ImageLoader;
use crate::capabilities::{Collidable, Contact, Describe, Healthable, Movable, Rotatable, Sizable};
use crate::components::Position;
use crate::renderer::RenderSurface;

/// Result of applying one intent to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    Applied,
    /// The intent was understood but could not take effect (bad asset, no
    /// sprite sheet, ...). Already logged.
    Rejected,
    Quit,
}

/// The input-controlled actor.
#[derive(Debug)]
pub struct Player {
    actor: Actor,
    health: Health,
    last_contact: Option<Contact>,
}

impl Player {
    pub fn new(actor: Actor, max_health: u32) -> Self {
        Self { actor, health: Health::full(max_health), last_contact: None }
    }

    pub fn with_health(actor: Actor, health: Health) -> Self {
        Self { actor, health, last_contact: None }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn into_actor(self) -> Actor {
        self.actor
    }

    pub fn last_contact(&self) -> Option<&Contact> {
        self.last_contact.as_ref()
    }

    /// Map one intent onto the entity-level operation it names.
    pub fn apply_intent(
        &mut self,
        intent: Intent,
        loader: &dyn ImageLoader,
        surface: &mut dyn RenderSurface,
    ) -> IntentOutcome {
        let applied = match intent {
            Intent::Move(offset) => {
                self.move_by(offset);
                true
            }
            Intent::SelectFrame { column, row } => self.actor.set_animation_frame(column, row),
            Intent::ChangeSprite(path) => self.actor.change_sprite(&path, loader, surface).is_ok(),
            Intent::ChangeAnimation { path, grid } => {
                self.actor.change_animation(&path, grid, loader, surface).is_ok()
            }
            Intent::PlayAnimation { fps, frame_count, row } => {
                self.actor.play_animation(fps, frame_count, row)
            }
            Intent::TakeDamage(amount) => {
                self.take_damage(amount);
                true
            }
            Intent::Heal(amount) => {
                self.heal(amount);
                true
            }
            Intent::Quit => return IntentOutcome::Quit,
        };

        if applied {
            IntentOutcome::Applied
        } else {
            IntentOutcome::Rejected
        }
    }
}

impl Movable for Player {
    fn move_by(&mut self, offset: Vector2) {
        self.actor.move_by(offset);
    }

    fn set_position(&mut self, position: Vector2) {
        self.actor.set_position(position);
    }

    fn current_position(&self) -> Vector2 {
        self.actor.current_position()
    }
}

impl Rotatable for Player {
    fn set_rotation(&mut self, degrees: f32) {
        self.actor.set_rotation(degrees);
    }

    fn rotate(&mut self, delta: f32) {
        self.actor.rotate(delta);
    }

    fn rotation(&self) -> f32 {
        self.actor.rotation()
    }
}

impl Sizable for Player {
    fn scale(&mut self, factor: f32) {
        self.actor.scale(factor);
    }

    fn size(&self) -> Size {
        self.actor.size()
    }
}

impl Healthable for Player {
    fn heal(&mut self, amount: u32) {
        self.health.heal(amount);
        debug!(amount, health = self.health.health(), "player healed");
    }

    fn take_damage(&mut self, amount: u32) {
        let was_alive = self.health.is_alive();
        self.health.take_damage(amount);
        debug!(amount, health = self.health.health(), "player damaged");
        if was_alive && !self.health.is_alive() {
            info!("player died");
        }
    }

    fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    fn health(&self) -> u32 {
        self.health.health()
    }

    fn max_health(&self) -> u32 {
        self.health.max_health()
    }
}

impl Collidable for Player {
    fn collide_with(&mut self, contact: &Contact) {
        debug!(other = %contact.other, "player collision");
        self.last_contact = Some(*contact);
    }

    fn hitbox_position(&self) -> &Position {
        self.actor.object().position()
    }
}

impl Describe for Player {
    fn describe(&self) -> String {
        format!(
            "Player hp {}/{} {}",
            self.health.health(),
            self.health.max_health(),
            self.actor.describe()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{DecodedImage, MemoryImageLoader};
    use crate::entities::GameObject;
    use crate::renderer::HeadlessSurface;
    use engine_ecs::Entity;
    use engine_shared::SheetGrid;
    use std::path::PathBuf;

    fn player() -> Player {
        let object = GameObject::new(Vector2::new(0.0, 0.0), Size::new(32.0, 32.0));
        Player::with_health(Actor::new(object), Health::new(90, 100))
    }

    #[test]
    fn intents_drive_entity_operations() {
        let mut loader = MemoryImageLoader::new();
        loader.insert("run.png", DecodedImage::solid(128, 32, [0; 4]));
        let mut surface = HeadlessSurface::new(Size::new(800.0, 600.0));
        let mut p = player();

        let mut apply = |p: &mut Player, intent| p.apply_intent(intent, &loader, &mut surface);

        assert_eq!(apply(&mut p, Intent::Move(Vector2::new(3.0, -2.0))), IntentOutcome::Applied);
        assert_eq!(p.current_position(), Vector2::new(3.0, -2.0));

        // No sheet yet.
        assert_eq!(apply(&mut p, Intent::SelectFrame { column: 1, row: 0 }), IntentOutcome::Rejected);

        let change = Intent::ChangeAnimation { path: PathBuf::from("run.png"), grid: SheetGrid::new(1, 4, 0.0) };
        assert_eq!(apply(&mut p, change), IntentOutcome::Applied);
        assert_eq!(apply(&mut p, Intent::SelectFrame { column: 2, row: 0 }), IntentOutcome::Applied);
        assert_eq!(p.actor().visual().as_sheet().unwrap().clip().x, 64.0);

        assert_eq!(
            apply(&mut p, Intent::ChangeSprite(PathBuf::from("missing.png"))),
            IntentOutcome::Rejected
        );
        assert_eq!(p.actor().visual().kind(), "sheet");

        apply(&mut p, Intent::Heal(50));
        assert_eq!(p.health(), 100);
        apply(&mut p, Intent::TakeDamage(30));
        assert_eq!(p.health(), 70);

        assert_eq!(apply(&mut p, Intent::Quit), IntentOutcome::Quit);
    }

    #[test]
    fn collision_records_contact_and_exposes_hitbox() {
        let mut p = player();
        p.set_position(Vector2::new(7.0, 8.0));
        let contact = Contact { other: Entity::new(3, 0), other_hitbox: Vector2::new(9.0, 9.0) };
        p.collide_with(&contact);
        assert_eq!(p.last_contact(), Some(&contact));
        assert_eq!(p.hitbox_position().as_vec2(), Vector2::new(7.0, 8.0));
    }

    #[test]
    fn scale_and_rotation_reach_the_draw() {
        let mut loader = MemoryImageLoader::new();
        loader.insert("hero.png", DecodedImage::solid(8, 8, [1; 4]));
        let mut surface = HeadlessSurface::new(Size::new(800.0, 600.0));
        let mut p = player();
        p.apply_intent(Intent::ChangeSprite(PathBuf::from("hero.png")), &loader, &mut surface);

        p.scale(1.5);
        p.rotate(-90.0);
        assert_eq!(p.size(), Size::new(48.0, 48.0));
        assert_eq!(p.rotation(), 270.0);

        assert!(p.actor().render(&mut surface, Vector2::new(10.0, 20.0)));
        let draw = surface.pending_draws()[0].params;
        assert_eq!(draw.dest_size, Size::new(48.0, 48.0));
        assert_eq!(draw.rotation, 270.0);
    }

    #[test]
    fn lethal_damage_kills() {
        let mut p = player();
        p.take_damage(1_000);
        assert!(!p.is_alive());
        assert_eq!(p.describe().split_whitespace().take(3).collect::<Vec<_>>(), ["Player", "hp", "0/100"]);
    }
}
