// crates/engine_core/src/components/rotation.rs
use crate::capabilities::{Describe, Rotatable};

const FULL_TURN: f32 = 360.0;

/// Angle in degrees, kept in `[0, 360)` by `rotate`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        let mut rotation = Self::default();
        rotation.set_rotation(degrees);
        rotation
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn radians(&self) -> f32 {
        self.degrees.to_radians()
    }
}

impl Rotatable for Rotation {
    /// Out-of-range input (including NaN) resets to 0; it is not wrapped.
    fn set_rotation(&mut self, degrees: f32) {
        self.degrees = if (0.0..FULL_TURN).contains(&degrees) { degrees } else { 0.0 };
    }

    fn rotate(&mut self, delta: f32) {
        let mut angle = (self.degrees + delta) % FULL_TURN;
        if angle < 0.0 {
            angle += FULL_TURN;
        }
        // -epsilon + 360 rounds up to exactly 360 in f32.
        if angle >= FULL_TURN {
            angle = 0.0;
        }
        self.degrees = angle;
    }

    fn rotation(&self) -> f32 {
        self.degrees
    }
}

impl Describe for Rotation {
    fn describe(&self) -> String {
        format!("Rotation({}°)", self.degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn rotate_stays_in_range_for_any_delta() {
        let starts = [0.0, 0.5, 90.0, 180.0, 359.9];
        let deltas = [-1e-7, -0.5, -360.0, -725.25, 1e-7, 45.0, 360.0, 1080.5, 1.0e6, -1.0e6];
        for &start in &starts {
            for &delta in &deltas {
                let mut r = Rotation::new(start);
                r.rotate(delta);
                assert!(
                    (0.0..360.0).contains(&r.degrees()),
                    "rotate({start}, {delta}) gave {}",
                    r.degrees()
                );
            }
        }
    }

    #[test]
    fn full_turns_are_identity() {
        let mut r = Rotation::new(123.4);
        for _ in 0..10 {
            r.rotate(360.0);
        }
        assert!((r.degrees() - 123.4).abs() < EPS);
    }

    #[test]
    fn negative_delta_wraps_backwards() {
        let mut r = Rotation::new(10.0);
        r.rotate(-30.0);
        assert!((r.degrees() - 340.0).abs() < EPS);
    }

    #[test]
    fn set_rotation_resets_instead_of_wrapping() {
        let mut r = Rotation::new(45.0);
        r.set_rotation(370.0);
        assert_eq!(r.degrees(), 0.0);

        r.set_rotation(359.0);
        assert_eq!(r.degrees(), 359.0);

        r.set_rotation(-1.0);
        assert_eq!(r.degrees(), 0.0);

        r.set_rotation(f32::NAN);
        assert_eq!(r.degrees(), 0.0);
    }
}
