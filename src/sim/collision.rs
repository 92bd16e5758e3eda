//! Collision predicates for the bird against pipes, floor, and ceiling
//!
//! Pure free functions over plain data. The bird's circular body is
//! tested by its bounding extents against the pipe's rectangles.

use super::state::{Bird, Pipe};

/// Bird vs. pipe pair: horizontal extents overlap AND the bird pokes
/// outside the gap (above its top boundary or below its bottom boundary)
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe, pipe_width: f32) -> bool {
    let overlaps_x =
        bird.pos.x + bird.radius > pipe.x && bird.pos.x - bird.radius < pipe.x + pipe_width;
    if !overlaps_x {
        return false;
    }
    bird.top() < pipe.top_height || bird.bottom() > pipe.bottom_y
}

/// Bird's bottom edge at or below the floor line. Terminal, and checked
/// independently of pipes: an empty playfield still grounds the bird.
pub fn bird_floor_collision(bird: &Bird, floor_y: f32) -> bool {
    bird.bottom() >= floor_y
}

/// Bird's top edge at or above the visible top boundary.
///
/// This is NOT terminal: the caller clamps position to the boundary and
/// zeroes velocity. The asymmetry with the floor is intentional.
pub fn bird_ceiling_contact(bird: &Bird) -> bool {
    bird.top() <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn bird_at(y: f32) -> Bird {
        let mut bird = Bird::new();
        bird.pos.y = y;
        bird
    }

    #[test]
    fn pipe_miss_when_no_horizontal_overlap() {
        // Pipe far to the right; bird vertical position irrelevant
        let pipe = Pipe::new(300.0, 10.0, PIPE_GAP);
        let bird = bird_at(5.0);
        assert!(!bird_pipe_collision(&bird, &pipe, PIPE_WIDTH));
    }

    #[test]
    fn pipe_miss_when_inside_gap() {
        let pipe = Pipe::new(BIRD_X - 10.0, 200.0, PIPE_GAP);
        // Gap spans [200, 350]; bird box [260, 290] is fully inside
        let bird = bird_at(275.0);
        assert!(!bird_pipe_collision(&bird, &pipe, PIPE_WIDTH));
    }

    #[test]
    fn pipe_hit_on_top_segment() {
        let pipe = Pipe::new(BIRD_X - 10.0, 200.0, PIPE_GAP);
        // Bird top edge at 185, above the gap start at 200
        let bird = bird_at(200.0);
        assert!(bird_pipe_collision(&bird, &pipe, PIPE_WIDTH));
    }

    #[test]
    fn pipe_hit_on_bottom_segment() {
        let pipe = Pipe::new(BIRD_X - 10.0, 200.0, PIPE_GAP);
        // Bird bottom edge at 365, below the gap end at 350
        let bird = bird_at(350.0);
        assert!(bird_pipe_collision(&bird, &pipe, PIPE_WIDTH));
    }

    #[test]
    fn pipe_edge_grazing_does_not_collide() {
        // Bird exactly flush with both gap boundaries
        let pipe = Pipe::new(BIRD_X - 10.0, 200.0, 2.0 * BIRD_RADIUS);
        let bird = bird_at(200.0 + BIRD_RADIUS);
        assert!(!bird_pipe_collision(&bird, &pipe, PIPE_WIDTH));
    }

    #[test]
    fn floor_collision_at_and_below_line() {
        assert!(!bird_floor_collision(&bird_at(FLOOR_Y - BIRD_RADIUS - 1.0), FLOOR_Y));
        assert!(bird_floor_collision(&bird_at(FLOOR_Y - BIRD_RADIUS), FLOOR_Y));
        assert!(bird_floor_collision(&bird_at(FLOOR_Y), FLOOR_Y));
    }

    #[test]
    fn ceiling_contact_at_and_above_boundary() {
        assert!(!bird_ceiling_contact(&bird_at(BIRD_RADIUS + 1.0)));
        assert!(bird_ceiling_contact(&bird_at(BIRD_RADIUS)));
        assert!(bird_ceiling_contact(&bird_at(-5.0)));
    }
}
