//! Viewport and map geometry
//!
//! The map is derived from the viewport by a fixed scale. Resizes are
//! debounced and never reset a run.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;

/// Visible window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Build from raw window size, flooring at the minimum viewport
    pub fn from_window(width: f32, height: f32) -> Self {
        Self {
            width: width.max(MIN_VIEWPORT_WIDTH),
            height: height.max(MIN_VIEWPORT_HEIGHT),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Map size for this viewport
    pub fn map(&self) -> MapBounds {
        MapBounds {
            width: self.width * MAP_SCALE,
            height: self.height * MAP_SCALE,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_window(MIN_VIEWPORT_WIDTH, MIN_VIEWPORT_HEIGHT)
    }
}

/// Playable map size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl MapBounds {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Clamp a point into `[margin, size - margin]` per axis
    pub fn clamp_inset(&self, p: Vec2, margin: f32) -> Vec2 {
        Vec2::new(
            p.x.clamp(margin, (self.width - margin).max(margin)),
            p.y.clamp(margin, (self.height - margin).max(margin)),
        )
    }

    /// Inclusive containment in `[0, size]`
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Camera offset centering the player, clamped to `[0, map - viewport]`
pub fn camera_for(player: Vec2, viewport: &Viewport, map: &MapBounds) -> Vec2 {
    let target = player - viewport.size() / 2.0;
    let max = (map.size() - viewport.size()).max(Vec2::ZERO);
    target.clamp(Vec2::ZERO, max)
}

/// Holds the latest resize request until it settles
#[derive(Debug, Clone, Default)]
pub struct ResizeDebouncer {
    pending: Option<(Viewport, f64)>,
}

impl ResizeDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resize; restarts the debounce window
    pub fn request(&mut self, viewport: Viewport, now_ms: f64) {
        self.pending = Some((viewport, now_ms));
    }

    /// Take the pending viewport once the debounce window has passed
    pub fn poll(&mut self, now_ms: f64) -> Option<Viewport> {
        match self.pending {
            Some((viewport, at)) if now_ms - at >= RESIZE_DEBOUNCE_MS => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_floor_and_map_scale() {
        let vp = Viewport::from_window(100.0, 900.0);
        assert_eq!(vp.width, 320.0);
        assert_eq!(vp.height, 900.0);
        let map = vp.map();
        assert_eq!(map.width, 960.0);
        assert_eq!(map.height, 2700.0);
    }

    #[test]
    fn test_camera_clamped_to_map() {
        let vp = Viewport::from_window(800.0, 600.0);
        let map = vp.map();

        // Centered player
        let cam = camera_for(Vec2::new(1200.0, 900.0), &vp, &map);
        assert_eq!(cam, Vec2::new(800.0, 600.0));

        // Near the top-left corner
        let cam = camera_for(Vec2::new(48.0, 48.0), &vp, &map);
        assert_eq!(cam, Vec2::ZERO);

        // Near the bottom-right corner
        let cam = camera_for(Vec2::new(2352.0, 1752.0), &vp, &map);
        assert_eq!(cam, Vec2::new(1600.0, 1200.0));
    }

    #[test]
    fn test_clamp_inset() {
        let map = MapBounds {
            width: 960.0,
            height: 720.0,
        };
        let p = map.clamp_inset(Vec2::new(-10.0, 1000.0), 48.0);
        assert_eq!(p, Vec2::new(48.0, 672.0));
    }

    #[test]
    fn test_resize_debounce() {
        let mut debouncer = ResizeDebouncer::new();
        debouncer.request(Viewport::from_window(800.0, 600.0), 0.0);
        assert!(debouncer.poll(50.0).is_none());

        // A new request restarts the window
        debouncer.request(Viewport::from_window(1024.0, 768.0), 60.0);
        assert!(debouncer.poll(120.0).is_none());

        let vp = debouncer.poll(160.0).expect("resize should settle");
        assert_eq!(vp.width, 1024.0);
        assert!(!debouncer.is_pending());
        assert!(debouncer.poll(500.0).is_none());
    }
}
