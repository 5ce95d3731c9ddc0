//! Collision detection
//!
//! Everything on the track is an axis-aligned square. Touching edges never
//! count as a hit.

use glam::Vec2;

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from its top-left corner and size
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Strict overlap on the horizontal axis only
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && other.min.x < self.max.x
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.min.y < other.max.y && other.min.y < self.max.y
    }
}

/// Does a falling obstacle hit the player?
///
/// Vertically this is one-sided: once the obstacle's bottom edge is past the
/// top of the player band it hits, even if it has already fallen below the
/// band's bottom edge.
pub fn obstacle_hits_player(player: &Aabb, obstacle: &Aabb) -> bool {
    player.overlaps_x(obstacle) && obstacle.max.y > player.min.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_box(x: f32) -> Aabb {
        Aabb::new(Vec2::new(x, 530.0), Vec2::splat(60.0))
    }

    fn obstacle_box(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::splat(50.0))
    }

    #[test]
    fn test_direct_hit() {
        assert!(obstacle_hits_player(&player_box(170.0), &obstacle_box(170.0, 531.0)));
    }

    #[test]
    fn test_above_band_misses() {
        // Bottom edge exactly on the band's top edge
        assert!(!obstacle_hits_player(&player_box(170.0), &obstacle_box(170.0, 480.0)));
        assert!(obstacle_hits_player(&player_box(170.0), &obstacle_box(170.0, 480.5)));
    }

    #[test]
    fn test_horizontal_edges() {
        let player = player_box(170.0);
        // Obstacle ending where the player starts
        assert!(!obstacle_hits_player(&player, &obstacle_box(120.0, 540.0)));
        // Obstacle starting where the player ends
        assert!(!obstacle_hits_player(&player, &obstacle_box(230.0, 540.0)));
        // One pixel of overlap on the right
        assert!(obstacle_hits_player(&player, &obstacle_box(229.0, 540.0)));
    }

    #[test]
    fn test_below_band_still_hits() {
        let player = player_box(170.0);
        assert!(obstacle_hits_player(&player, &obstacle_box(170.0, 590.0)));
        assert!(obstacle_hits_player(&player, &obstacle_box(170.0, 599.0)));
        // The plain box test stops at the band's bottom edge
        assert!(!player.overlaps(&obstacle_box(170.0, 590.0)));
    }

    #[test]
    fn test_overlaps_symmetric() {
        let a = player_box(10.0);
        let b = obstacle_box(40.0, 560.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps_x(&b), b.overlaps_x(&a));
    }
}
