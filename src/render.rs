//! Backend-agnostic scene construction
//!
//! A pure read of the game state: produces an ordered list of 2D shapes
//! (back to front) that any rasterizing backend can draw. No game-logic
//! mutation happens here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Bird, GamePhase, GameState, Pipe};

/// sRGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed game palette
pub mod palette {
    use super::Color;

    pub const BIRD_BODY: Color = Color::rgb(0xf1, 0xc4, 0x0f);
    pub const BIRD_OUTLINE: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const BIRD_EYE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BIRD_PUPIL: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const PIPE_BODY: Color = Color::rgb(0x2e, 0xcc, 0x71);
    pub const PIPE_OUTLINE: Color = Color::rgb(0x27, 0xae, 0x60);
    pub const GROUND: Color = Color::rgb(0xde, 0xd8, 0x95);
    pub const GROUND_EDGE: Color = Color::rgb(0xc5, 0xbb, 0x6f);
    pub const SCORE_FILL: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const SCORE_OUTLINE: Color = Color::rgb(0x00, 0x00, 0x00);
}

/// Outline on top of a filled shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// A single draw command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Rect {
        /// Top-left corner (screen coordinates, y grows downward)
        min: Vec2,
        size: Vec2,
        fill: Color,
        stroke: Option<Stroke>,
    },
    /// Horizontally centered text
    Text {
        pos: Vec2,
        size: f32,
        fill: Color,
        stroke: Option<Stroke>,
        text: String,
    },
}

/// One frame's worth of draw commands, back to front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

/// Width pipe caps extend past the pipe body on each side
const CAP_OVERHANG: f32 = 5.0;
/// Height of a pipe cap
const CAP_HEIGHT: f32 = 20.0;

/// Build the scene for the current state: ground, pipes, bird, score HUD
pub fn build_scene(state: &GameState) -> Scene {
    let mut shapes = Vec::with_capacity(state.pipes.len() * 4 + 8);

    push_ground(&mut shapes);
    for pipe in &state.pipes {
        push_pipe(&mut shapes, pipe, state.tuning.pipe_width);
    }
    push_bird(&mut shapes, &state.bird);

    // The start screen shows only the idle bird, no score
    if state.phase != GamePhase::NotStarted {
        shapes.push(Shape::Text {
            pos: Vec2::new(WORLD_WIDTH / 2.0, 50.0),
            size: 40.0,
            fill: palette::SCORE_FILL,
            stroke: Some(Stroke {
                color: palette::SCORE_OUTLINE,
                width: 2.0,
            }),
            text: state.score.to_string(),
        });
    }

    Scene { shapes }
}

fn push_ground(shapes: &mut Vec<Shape>) {
    shapes.push(Shape::Rect {
        min: Vec2::new(0.0, FLOOR_Y),
        size: Vec2::new(WORLD_WIDTH, GROUND_HEIGHT),
        fill: palette::GROUND,
        stroke: Some(Stroke {
            color: palette::GROUND_EDGE,
            width: 4.0,
        }),
    });
}

fn push_pipe(shapes: &mut Vec<Shape>, pipe: &Pipe, width: f32) {
    let outline = Some(Stroke {
        color: palette::PIPE_OUTLINE,
        width: 4.0,
    });

    // Top segment and its cap
    shapes.push(Shape::Rect {
        min: Vec2::new(pipe.x, 0.0),
        size: Vec2::new(width, pipe.top_height),
        fill: palette::PIPE_BODY,
        stroke: outline,
    });
    shapes.push(Shape::Rect {
        min: Vec2::new(pipe.x - CAP_OVERHANG, pipe.top_height - CAP_HEIGHT),
        size: Vec2::new(width + 2.0 * CAP_OVERHANG, CAP_HEIGHT),
        fill: palette::PIPE_BODY,
        stroke: outline,
    });

    // Bottom segment runs to the bottom of the playfield
    shapes.push(Shape::Rect {
        min: Vec2::new(pipe.x, pipe.bottom_y),
        size: Vec2::new(width, WORLD_HEIGHT - pipe.bottom_y),
        fill: palette::PIPE_BODY,
        stroke: outline,
    });
    shapes.push(Shape::Rect {
        min: Vec2::new(pipe.x - CAP_OVERHANG, pipe.bottom_y),
        size: Vec2::new(width + 2.0 * CAP_OVERHANG, CAP_HEIGHT),
        fill: palette::PIPE_BODY,
        stroke: outline,
    });
}

fn push_bird(shapes: &mut Vec<Shape>, bird: &Bird) {
    shapes.push(Shape::Circle {
        center: bird.pos,
        radius: bird.radius,
        fill: palette::BIRD_BODY,
        stroke: Some(Stroke {
            color: palette::BIRD_OUTLINE,
            width: 2.0,
        }),
    });
    // Eye and pupil
    shapes.push(Shape::Circle {
        center: bird.pos + Vec2::new(5.0, -5.0),
        radius: 3.0,
        fill: palette::BIRD_EYE,
        stroke: None,
    });
    shapes.push(Shape::Circle {
        center: bird.pos + Vec2::new(6.0, -5.0),
        radius: 1.5,
        fill: palette::BIRD_PUPIL,
        stroke: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn start_screen_has_no_score_text() {
        let state = GameState::new(1);
        let scene = build_scene(&state);
        assert!(
            !scene
                .shapes
                .iter()
                .any(|s| matches!(s, Shape::Text { .. }))
        );
        // Ground + three bird circles
        assert_eq!(scene.shapes.len(), 4);
    }

    #[test]
    fn running_scene_counts_pipes_and_hud() {
        let mut state = GameState::new(2);
        state.start();
        state.spawn_pipe();
        state.spawn_pipe();
        let scene = build_scene(&state);

        let rects = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { .. }))
            .count();
        // Ground plus four rects per pipe
        assert_eq!(rects, 1 + 4 * 2);

        let score_text = scene.shapes.iter().find_map(|s| match s {
            Shape::Text { text, .. } => Some(text.clone()),
            _ => None,
        });
        assert_eq!(score_text.as_deref(), Some("0"));
    }

    #[test]
    fn build_scene_does_not_mutate_state() {
        let mut state = GameState::new(3);
        state.start();
        state.spawn_pipe();
        let before = state.clone();
        let _ = build_scene(&state);
        assert_eq!(state, before);
    }
}
