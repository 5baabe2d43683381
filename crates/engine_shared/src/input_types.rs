// crates/engine_shared/src/input_types.rs
//! Discrete input intents. Raw key/controller mapping happens outside the
//! engine; whatever does it pushes `Intent`s here and the frame loop drains
//! them once per tick.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::components::SheetGrid;
use crate::math::Vector2;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Move the controlled entity by an offset.
    Move(Vector2),
    /// Explicitly pick a sprite-sheet cell.
    SelectFrame { column: u32, row: u32 },
    /// Replace the visual with a single-image sprite.
    ChangeSprite(PathBuf),
    /// Replace the visual with a sprite sheet laid out on `grid`.
    ChangeAnimation { path: PathBuf, grid: SheetGrid },
    /// Start time-driven frame selection on the current sheet.
    PlayAnimation { fps: u32, frame_count: u32, row: u32 },
    TakeDamage(u32),
    Heal(u32),
    Quit,
}

/// FIFO of intents collected between two frames.
#[derive(Debug, Default)]
pub struct IntentQueue {
    pending: VecDeque<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending intent in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> impl Iterator<Item = Intent> + '_ {
        self.pending.drain(..)
    }
}

impl Extend<Intent> for IntentQueue {
    fn extend<I: IntoIterator<Item = Intent>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties_queue() {
        let mut queue = IntentQueue::new();
        queue.push(Intent::Move(Vector2::new(1.0, 0.0)));
        queue.push(Intent::Heal(3));
        queue.push(Intent::Quit);

        let drained: Vec<Intent> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![Intent::Move(Vector2::new(1.0, 0.0)), Intent::Heal(3), Intent::Quit]
        );
        assert!(queue.is_empty());
    }
}
