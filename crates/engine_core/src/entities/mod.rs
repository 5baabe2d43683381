// crates/engine_core/src/entities/mod.rs
//! Entity hierarchy: `GameObject` → `Actor` → `Player` / `Enemy`, built by
//! composition. `SceneEntity` is the closed set the scene stores.

mod actor;
mod enemy;
mod game_object;
mod health;
mod player;

pub use actor::{Actor, Animation};
pub use enemy::Enemy;
pub use game_object::GameObject;
pub use health::Health;
pub use player::{IntentOutcome, Player};

use engine_shared::Vector2;

use crate::capabilities::{Collidable, Describe, Healthable, Movable};
use crate::renderer::RenderSurface;

#[derive(Debug)]
pub enum SceneEntity {
    Object(GameObject),
    Actor(Actor),
    Player(Player),
    Enemy(Enemy),
}

impl SceneEntity {
    pub fn kind(&self) -> &'static str {
        match self {
            SceneEntity::Object(_) => "object",
            SceneEntity::Actor(_) => "actor",
            SceneEntity::Player(_) => "player",
            SceneEntity::Enemy(_) => "enemy",
        }
    }

    pub fn object(&self) -> &GameObject {
        match self {
            SceneEntity::Object(object) => object,
            SceneEntity::Actor(actor) => actor.object(),
            SceneEntity::Player(player) => player.actor().object(),
            SceneEntity::Enemy(enemy) => enemy.actor().object(),
        }
    }

    pub fn object_mut(&mut self) -> &mut GameObject {
        match self {
            SceneEntity::Object(object) => object,
            SceneEntity::Actor(actor) => actor.object_mut(),
            SceneEntity::Player(player) => player.actor_mut().object_mut(),
            SceneEntity::Enemy(enemy) => enemy.actor_mut().object_mut(),
        }
    }

    pub fn actor(&self) -> Option<&Actor> {
        match self {
            SceneEntity::Object(_) => None,
            SceneEntity::Actor(actor) => Some(actor),
            SceneEntity::Player(player) => Some(player.actor()),
            SceneEntity::Enemy(enemy) => Some(enemy.actor()),
        }
    }

    pub fn actor_mut(&mut self) -> Option<&mut Actor> {
        match self {
            SceneEntity::Object(_) => None,
            SceneEntity::Actor(actor) => Some(actor),
            SceneEntity::Player(player) => Some(player.actor_mut()),
            SceneEntity::Enemy(enemy) => Some(enemy.actor_mut()),
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            SceneEntity::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            SceneEntity::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut Enemy> {
        match self {
            SceneEntity::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn as_collidable(&self) -> Option<&dyn Collidable> {
        match self {
            SceneEntity::Player(player) => Some(player),
            SceneEntity::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn as_collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
        match self {
            SceneEntity::Player(player) => Some(player),
            SceneEntity::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn as_healthable_mut(&mut self) -> Option<&mut dyn Healthable> {
        match self {
            SceneEntity::Player(player) => Some(player),
            SceneEntity::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn animate(&mut self, now_ms: u64) {
        if let Some(actor) = self.actor_mut() {
            actor.animate(now_ms);
        }
    }

    pub fn render(&self, surface: &mut dyn RenderSurface, screen: Vector2) -> bool {
        match self.actor() {
            Some(actor) => actor.render(surface, screen),
            None => self.object().render(surface, screen),
        }
    }

    /// Drop the entity, returning its texture to the surface.
    pub fn release(self, surface: &mut dyn RenderSurface) {
        match self {
            SceneEntity::Object(_) => {}
            SceneEntity::Actor(actor) => actor.release(surface),
            SceneEntity::Player(player) => player.into_actor().release(surface),
            SceneEntity::Enemy(enemy) => enemy.into_actor().release(surface),
        }
    }
}

impl Movable for SceneEntity {
    fn move_by(&mut self, offset: Vector2) {
        self.object_mut().move_by(offset);
    }

    fn set_position(&mut self, position: Vector2) {
        self.object_mut().set_position(position);
    }

    fn current_position(&self) -> Vector2 {
        self.object().current_position()
    }
}

impl Describe for SceneEntity {
    fn describe(&self) -> String {
        match self {
            SceneEntity::Object(object) => object.describe(),
            SceneEntity::Actor(actor) => actor.describe(),
            SceneEntity::Player(player) => player.describe(),
            SceneEntity::Enemy(enemy) => enemy.describe(),
        }
    }
}

impl From<GameObject> for SceneEntity {
    fn from(object: GameObject) -> Self {
        SceneEntity::Object(object)
    }
}

impl From<Actor> for SceneEntity {
    fn from(actor: Actor) -> Self {
        SceneEntity::Actor(actor)
    }
}

impl From<Player> for SceneEntity {
    fn from(player: Player) -> Self {
        SceneEntity::Player(player)
    }
}

impl From<Enemy> for SceneEntity {
    fn from(enemy: Enemy) -> Self {
        SceneEntity::Enemy(enemy)
    }
}
