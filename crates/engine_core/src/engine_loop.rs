// crates/engine_core/src/engine_loop.rs

use std::time::Duration;

use engine_shared::IntentQueue;
use tracing::trace;

use crate::assets::ImageLoader;
use crate::renderer::RenderSurface;
use crate::scene::Scene;
use crate::time::TickSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Runs one logical frame at a time and keeps the pacing bookkeeping.
///
/// A frame is: drain intents → resolve camera → place entities on screen →
/// draw → present. Waiting out the rest of the frame is the caller's job;
/// `remaining_budget` says how long.
pub struct EngineLoop<C: TickSource> {
    clock: C,
    frame_budget: Duration,
    frames: u64,
}

impl<C: TickSource> EngineLoop<C> {
    pub fn new(clock: C, frame_budget: Duration) -> Self {
        Self {
            clock,
            frame_budget,
            frames: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn run_frame(
        &mut self,
        scene: &mut Scene,
        intents: &mut IntentQueue,
        loader: &dyn ImageLoader,
        surface: &mut dyn RenderSurface,
    ) -> FrameOutcome {
        // 1. Input
        if scene.apply_intents(intents, loader, surface) {
            return FrameOutcome::Quit;
        }

        // 2. Camera. A missing or stale target is logged by the camera and
        // the frame renders from where the camera already is.
        if let Err(err) = scene.update_camera() {
            trace!(error = %err, "camera held");
        }

        // 3. Screen transforms + draw, in render-queue order
        let now = self.clock.now_ms();
        let drawn = scene.render(surface, now);

        // 4. Present
        surface.present();
        self.frames += 1;
        trace!(frame = self.frames, now, drawn, "frame presented");

        FrameOutcome::Continue
    }

    /// Time left in this frame's budget after `elapsed` was spent.
    pub fn remaining_budget(&self, elapsed: Duration) -> Duration {
        self.frame_budget.saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{DecodedImage, MemoryImageLoader};
    use crate::capabilities::Movable;
    use crate::entities::{Actor, GameObject, Player};
    use crate::renderer::HeadlessSurface;
    use crate::time::ManualClock;
    use engine_shared::{ClipRect, Intent, SheetGrid, Size, Vector2};
    use std::path::PathBuf;

    struct Fixture {
        scene: Scene,
        intents: IntentQueue,
        loader: MemoryImageLoader,
        surface: HeadlessSurface,
        engine: EngineLoop<ManualClock>,
    }

    fn fixture() -> Fixture {
        let mut loader = MemoryImageLoader::new();
        // 8 columns x 2 rows of 16x16 cells.
        loader.insert("hero.png", DecodedImage::solid(128, 32, [200; 4]));

        let mut scene = Scene::new();
        let player = scene.spawn(Player::new(
            Actor::new(GameObject::new(Vector2::new(10.0, 10.0), Size::new(16.0, 16.0))),
            100,
        ));
        scene.set_controlled(player);
        scene.follow(player);

        Fixture {
            scene,
            intents: IntentQueue::new(),
            loader,
            surface: HeadlessSurface::new(Size::new(800.0, 600.0)),
            engine: EngineLoop::new(ManualClock::default(), Duration::from_millis(16)),
        }
    }

    impl Fixture {
        fn frame(&mut self) -> FrameOutcome {
            self.engine
                .run_frame(&mut self.scene, &mut self.intents, &self.loader, &mut self.surface)
        }
    }

    #[test]
    fn followed_player_is_drawn_at_screen_center() {
        let mut f = fixture();
        f.intents.push(Intent::ChangeAnimation {
            path: PathBuf::from("hero.png"),
            grid: SheetGrid::new(2, 8, 0.0),
        });

        assert_eq!(f.frame(), FrameOutcome::Continue);
        let draws = f.surface.last_frame();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].params.dest, Vector2::new(400.0, 300.0));
        assert_eq!(f.surface.frames_presented(), 1);
    }

    #[test]
    fn moves_apply_before_camera_resolves() {
        let mut f = fixture();
        f.intents.push(Intent::Move(Vector2::new(5.0, 0.0)));
        f.frame();
        assert_eq!(f.scene.camera().current_position(), Vector2::new(15.0, 10.0));
    }

    #[test]
    fn animation_frames_follow_the_clock() {
        let mut f = fixture();
        f.intents.push(Intent::ChangeAnimation {
            path: PathBuf::from("hero.png"),
            grid: SheetGrid::new(2, 8, 0.0),
        });
        f.intents.push(Intent::PlayAnimation { fps: 4, frame_count: 8, row: 1 });
        f.frame();
        let first = f.surface.last_frame()[0].params.source;
        assert_eq!(first, Some(ClipRect::new(0.0, 16.0, 16.0, 16.0)));

        f.engine.clock_mut().advance(750);
        f.frame();
        assert_eq!(f.surface.last_frame()[0].params.source, Some(ClipRect::new(48.0, 16.0, 16.0, 16.0)));

        // A full cycle later the clip repeats.
        f.engine.clock_mut().advance(2_000);
        f.frame();
        assert_eq!(f.surface.last_frame()[0].params.source, Some(ClipRect::new(48.0, 16.0, 16.0, 16.0)));
    }

    #[test]
    fn quit_stops_before_presenting() {
        let mut f = fixture();
        f.intents.push(Intent::Quit);
        assert_eq!(f.frame(), FrameOutcome::Quit);
        assert_eq!(f.surface.frames_presented(), 0);
        assert_eq!(f.engine.frames(), 0);
    }

    #[test]
    fn untargeted_camera_does_not_block_rendering() {
        let mut f = fixture();
        f.scene.camera_mut().clear_target();
        f.frame();
        f.frame();
        assert_eq!(f.surface.frames_presented(), 2);
        assert_eq!(f.scene.camera().current_position(), Vector2::ZERO);
    }

    #[test]
    fn remaining_budget_saturates() {
        let f = fixture();
        assert_eq!(f.engine.remaining_budget(Duration::from_millis(10)), Duration::from_millis(6));
        assert_eq!(f.engine.remaining_budget(Duration::from_millis(40)), Duration::ZERO);
    }
}
