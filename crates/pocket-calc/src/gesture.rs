//! Swipe recognition
//!
//! Turns a pointer drag (start point, end point, elapsed time) into a swipe
//! direction. A swipe counts when it is fast enough along one axis and stays
//! close enough to that axis on the other. Front ends decide what a swipe
//! means; the calculator only ever sees the resulting [`Key::Backspace`].

use serde::{Deserialize, Serialize};

use crate::core::Key;

/// Direction of a recognized swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Right to left
    Left,
    /// Left to right
    Right,
    /// Bottom to top
    Up,
    /// Top to bottom
    Down,
}

impl SwipeDirection {
    /// Key a swipe over the display produces, if any
    ///
    /// Only a left swipe is bound: it deletes the last character.
    #[must_use]
    pub const fn display_key(&self) -> Option<Key> {
        match self {
            Self::Left => Some(Key::Backspace),
            Self::Right | Self::Up | Self::Down => None,
        }
    }
}

/// A pointer position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point {
    /// Creates a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Thresholds for swipe recognition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Minimum speed along the swipe axis, in units per millisecond
    pub velocity_threshold: f64,
    /// Maximum drift across the swipe axis, in units
    pub directional_offset_threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: 0.3,
            directional_offset_threshold: 80.0,
        }
    }
}

impl SwipeConfig {
    /// Set the velocity threshold
    #[must_use]
    pub const fn with_velocity_threshold(mut self, threshold: f64) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    /// Set the directional offset threshold
    #[must_use]
    pub const fn with_directional_offset_threshold(mut self, threshold: f64) -> Self {
        self.directional_offset_threshold = threshold;
        self
    }
}

/// Classifies drags as swipes
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
}

impl SwipeRecognizer {
    /// Creates a recognizer with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recognizer with custom thresholds
    #[must_use]
    pub const fn with_config(config: SwipeConfig) -> Self {
        Self { config }
    }

    /// Returns the thresholds in use
    #[must_use]
    pub const fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Classifies a drag from `start` to `end` taking `elapsed_ms`
    ///
    /// Horizontal swipes win when both axes qualify. A zero-length interval
    /// never yields a swipe.
    #[must_use]
    pub fn recognize(&self, start: Point, end: Point, elapsed_ms: f64) -> Option<SwipeDirection> {
        if elapsed_ms <= 0.0 || !elapsed_ms.is_finite() {
            return None;
        }

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let vx = dx / elapsed_ms;
        let vy = dy / elapsed_ms;

        if self.is_valid(vx, dy) {
            Some(if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            })
        } else if self.is_valid(vy, dx) {
            Some(if dy > 0.0 {
                SwipeDirection::Down
            } else {
                SwipeDirection::Up
            })
        } else {
            None
        }
    }

    fn is_valid(&self, velocity: f64, cross_offset: f64) -> bool {
        velocity.abs() > self.config.velocity_threshold
            && cross_offset.abs() < self.config.directional_offset_threshold
    }
}
