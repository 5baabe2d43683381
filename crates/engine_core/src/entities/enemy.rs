// crates/engine_core/src/entities/enemy.rs
use engine_shared::{Size, Vector2};
use tracing::debug;

use super::{Actor, Health};
use crate::capabilities::{Collidable, Contact, Describe, Healthable, Movable, Rotatable, Sizable};
use crate::components::Position;

#[derive(Debug)]
pub struct Enemy {
    actor: Actor,
    health: Health,
    /// World units per second when pursuing.
    speed: f32,
    last_contact: Option<Contact>,
}

impl Enemy {
    pub fn new(actor: Actor, max_health: u32, speed: f32) -> Self {
        Self { actor, health: Health::full(max_health), speed, last_contact: None }
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

    /// Step straight toward `target`, never overshooting it.
    pub fn pursue(&mut self, target: Vector2, dt: f32) {
        let to_target = target - self.current_position();
        let distance = to_target.length();
        let step = self.speed * dt;
        if distance <= step {
            self.set_position(target);
        } else if distance > 0.0 {
            self.move_by(to_target / distance * step);
        }
    }
}

impl Movable for Enemy {
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

impl Rotatable for Enemy {
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

impl Sizable for Enemy {
    fn scale(&mut self, factor: f32) {
        self.actor.scale(factor);
    }

    fn size(&self) -> Size {
        self.actor.size()
    }
}

impl Healthable for Enemy {
    fn heal(&mut self, amount: u32) {
        self.health.heal(amount);
    }

    fn take_damage(&mut self, amount: u32) {
        self.health.take_damage(amount);
        debug!(amount, health = self.health.health(), "enemy damaged");
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

impl Collidable for Enemy {
    fn collide_with(&mut self, contact: &Contact) {
        debug!(other = %contact.other, "enemy collision");
        self.last_contact = Some(*contact);
    }

    fn hitbox_position(&self) -> &Position {
        self.actor.object().position()
    }
}

impl Describe for Enemy {
    fn describe(&self) -> String {
        format!(
            "Enemy hp {}/{} speed {} {}",
            self.health.health(),
            self.health.max_health(),
            self.speed,
            self.actor.describe()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GameObject;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy::new(Actor::new(GameObject::new(Vector2::new(x, y), Size::new(8.0, 8.0))), 20, 100.0)
    }

    #[test]
    fn pursue_moves_at_speed_and_stops_on_target() {
        let mut enemy = enemy_at(0.0, 0.0);
        enemy.pursue(Vector2::new(300.0, 400.0), 0.5);
        let pos = enemy.current_position();
        assert!((pos - Vector2::new(30.0, 40.0)).length() < 1e-4);

        enemy.pursue(Vector2::new(35.0, 40.0), 1.0);
        assert_eq!(enemy.current_position(), Vector2::new(35.0, 40.0));
    }

    #[test]
    fn enemy_is_movable_sizable_and_rotatable() {
        let mut enemy = enemy_at(1.0, 1.0);
        enemy.scale(0.5);
        enemy.set_rotation(45.0);
        enemy.move_by(Vector2::new(1.0, 0.0));
        assert_eq!(enemy.size(), Size::new(4.0, 4.0));
        assert_eq!(enemy.rotation(), 45.0);
        assert_eq!(enemy.hitbox_position().as_vec2(), Vector2::new(2.0, 1.0));
    }

    #[test]
    fn heal_never_exceeds_max() {
        let mut enemy = enemy_at(0.0, 0.0);
        enemy.take_damage(5);
        enemy.heal(50);
        assert_eq!(enemy.health(), 20);
    }
}
