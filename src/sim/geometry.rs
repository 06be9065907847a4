//! Mouth geometry in normalized playfield coordinates
//!
//! The frontend measures the hippo's bounding box every frame and hands it in
//! as a pure query; nothing here is cached across ticks. The eat zone is the
//! upper half of that box (the mouth, not the whole body) and the exact same
//! predicate is used by the motion integrator and the eat resolver, so
//! "reachable" and "actually eaten" always agree.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The hippo's bounding box on the 0-100 playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouthRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl MouthRect {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// A zero-size box, as measured before the frontend layout settles.
    /// Treated as "no eat zone this tick" everywhere.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Whether a point is inside the eat zone: within the horizontal bounds
    /// and the upper half of the vertical bounds.
    pub fn eat_zone_contains(&self, p: Vec2) -> bool {
        if self.is_degenerate() {
            return false;
        }
        p.x > self.left
            && p.x < self.right
            && p.y > self.top
            && p.y < self.top + self.height() / 2.0
    }
}
