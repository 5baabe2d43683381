// crates/sandbox/src/main.rs
mod loader;

use std::env;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use engine_core::assets::MemoryImageLoader;
use engine_core::capabilities::{Describe, Movable, Sizable};
use engine_core::entities::{Actor, Enemy, GameObject, Player, SceneEntity};
use engine_core::renderer::HeadlessSurface;
use engine_core::time::SystemClock;
use engine_core::{logging, EngineConfig, EngineLoop, FrameOutcome, Scene};
use engine_ecs::Entity;
use engine_shared::{Intent, IntentQueue, SheetGrid, Size};
use glam::Vec2;
use tracing::{debug, info};

use loader::{striped_sheet, FallbackLoader, FileImageLoader};

const HERO_SHEET: &str = "hero.png";
const GRUNT_SHEET: &str = "grunt.png";
const CONTACT_DAMAGE: u32 = 1;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => EngineConfig::load(path).with_context(|| format!("reading config {path}"))?,
        None => EngineConfig::default(),
    };
    logging::init(&config.log_filter);
    info!(?config, "sandbox starting");

    let mut placeholders = MemoryImageLoader::new();
    placeholders.insert(HERO_SHEET, striped_sheet(8, 2, 32));
    placeholders.insert(GRUNT_SHEET, striped_sheet(4, 1, 24));
    let loader = FallbackLoader::new(FileImageLoader::new(&config.asset_root), placeholders);

    let mut surface = HeadlessSurface::new(config.render_target);
    let mut scene = Scene::new();
    let player = scene.spawn(Player::new(
        Actor::new(GameObject::new(Vec2::ZERO, Size::new(32.0, 32.0))),
        20,
    ));
    scene.set_controlled(player);
    scene.follow(player);

    let mut enemies = Vec::new();
    for (i, at) in [Vec2::new(200.0, 0.0), Vec2::new(-150.0, 120.0), Vec2::new(0.0, -250.0)]
        .into_iter()
        .enumerate()
    {
        let mut actor = Actor::new(GameObject::new(at, Size::new(24.0, 24.0)));
        actor
            .change_animation(&PathBuf::from(GRUNT_SHEET), SheetGrid::new(1, 4, 0.0), &loader, &mut surface)
            .context("loading enemy sheet")?;
        actor.play_animation(6, 4, 0);
        let enemy = scene.spawn(Enemy::new(actor, 5, 40.0 + 15.0 * i as f32));
        enemies.push(enemy);
    }

    let mut intents = IntentQueue::new();
    intents.push(Intent::ChangeAnimation {
        path: PathBuf::from(HERO_SHEET),
        grid: SheetGrid::new(2, 8, 0.0),
    });
    intents.push(Intent::PlayAnimation { fps: 10, frame_count: 8, row: 0 });

    let budget = config.frame_budget();
    let dt = budget.as_secs_f32().max(1.0 / 60.0);
    let mut engine = EngineLoop::new(SystemClock::new(), budget);

    for frame in 0..config.frames {
        let started = Instant::now();
        intents.extend(scripted_input(frame));

        let target = scene.get(player).map(|p| p.current_position());
        if let Some(target) = target {
            for &enemy in &enemies {
                if let Some(e) = scene.get_mut(enemy).and_then(SceneEntity::as_enemy_mut) {
                    e.pursue(target, dt);
                }
            }
            resolve_contacts(&mut scene, player, &enemies, &mut intents);
        }

        if engine.run_frame(&mut scene, &mut intents, &loader, &mut surface) == FrameOutcome::Quit {
            info!(frame, "quit");
            break;
        }
        debug!(frame, draws = surface.last_frame().len(), camera = %scene.camera().describe());

        let remaining = engine.remaining_budget(started.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }

    if let Some(p) = scene.get(player) {
        info!(player = %p.describe(), frames = engine.frames(), "sandbox finished");
    }
    for handle in scene.render_queue().to_vec() {
        scene.despawn(handle, &mut surface);
    }
    info!(live_textures = surface.live_texture_count(), "released");
    Ok(())
}

/// Canned input: circle around, flip animation rows, heal now and then.
fn scripted_input(frame: u64) -> Vec<Intent> {
    let angle = frame as f32 * 0.03;
    let mut out = vec![Intent::Move(Vec2::new(angle.cos(), angle.sin()) * 2.0)];
    if frame % 120 == 60 {
        out.push(Intent::PlayAnimation { fps: 10, frame_count: 8, row: 1 });
    }
    if frame % 120 == 0 && frame > 0 {
        out.push(Intent::PlayAnimation { fps: 10, frame_count: 8, row: 0 });
        out.push(Intent::Heal(3));
    }
    out
}

/// Box-overlap test between the player and each enemy. Hits are reported
/// through the scene and cost the player health; a dead player ends the run.
fn resolve_contacts(scene: &mut Scene, player: Entity, enemies: &[Entity], intents: &mut IntentQueue) {
    let Some((p_pos, p_size)) = scene.get(player).map(|p| (p.current_position(), p.object().size())) else {
        return;
    };

    let hits: Vec<Entity> = enemies
        .iter()
        .copied()
        .filter(|&e| {
            scene.get(e).is_some_and(|enemy| {
                let reach = (p_size.as_vec2() + enemy.object().size().as_vec2()) * 0.5;
                let gap = (enemy.current_position() - p_pos).abs();
                gap.x < reach.x && gap.y < reach.y
            })
        })
        .collect();

    for enemy in hits {
        scene.notify_collision(player, enemy);
        intents.push(Intent::TakeDamage(CONTACT_DAMAGE));
    }

    let dead = scene
        .get_mut(player)
        .and_then(SceneEntity::as_healthable_mut)
        .is_some_and(|p| !p.is_alive());
    if dead {
        intents.push(Intent::Quit);
    }
}
