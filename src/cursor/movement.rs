use super::constants::{GLIDE_STEP, HOLD_REPEAT_DELAY};
use super::corners::CornerId;
use super::MapCursor;
use bevy::prelude::*;

/// The four cursor movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl MoveDir {
    pub const ALL: [MoveDir; 4] = [MoveDir::Up, MoveDir::Down, MoveDir::Left, MoveDir::Right];

    /// Grid delta as (row, col)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            MoveDir::Up => (-1, 0),
            MoveDir::Down => (1, 0),
            MoveDir::Left => (0, -1),
            MoveDir::Right => (0, 1),
        }
    }
}

/// One frame's directional input state, taken once per tick from the
/// input backend. The movement controller only ever sees this snapshot,
/// so it runs identically under tests and under a live keyboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    just_pressed: [bool; 4],
    just_released: [bool; 4],
    held: [bool; 4],
}

impl InputSnapshot {
    pub fn record(&mut self, dir: MoveDir, just_pressed: bool, just_released: bool, held: bool) {
        self.just_pressed[dir as usize] = just_pressed;
        self.just_released[dir as usize] = just_released;
        self.held[dir as usize] = held;
    }

    /// Mark a direction as pressed this frame (and therefore held)
    pub fn press(&mut self, dir: MoveDir) {
        self.just_pressed[dir as usize] = true;
        self.held[dir as usize] = true;
    }

    /// Mark a direction as held from an earlier frame
    pub fn hold(&mut self, dir: MoveDir) {
        self.held[dir as usize] = true;
    }

    pub fn just_pressed(&self, dir: MoveDir) -> bool {
        self.just_pressed[dir as usize]
    }

    pub fn held(&self, dir: MoveDir) -> bool {
        self.held[dir as usize]
    }

    /// Whether any direction changed state this frame
    pub fn any_edge(&self) -> bool {
        self.just_pressed.iter().any(|&p| p) || self.just_released.iter().any(|&r| r)
    }
}

impl MapCursor {
    fn step(&mut self, dir: MoveDir) {
        let (dr, dc) = dir.delta();
        self.row += dr;
        self.col += dc;
    }

    /// One frame of the movement controller. Returns the number of tile
    /// steps issued this frame; the caller fires the move blip once per
    /// step.
    pub fn advance(&mut self, dt: f32, input: &InputSnapshot) -> u32 {
        let mut moves = 0;

        // 1. Press/release edges: step once per freshly pressed direction
        if input.any_edge() {
            self.input_changed = true;
        }
        for dir in MoveDir::ALL {
            if input.just_pressed(dir) {
                self.step(dir);
                moves += 1;
            }
        }

        // 2. Key repeat: with the combination unchanged long enough and
        // the previous move visually settled, re-issue from held keys.
        // The threshold test also passes with no direction held at all;
        // the loop below then issues nothing, so the effect is nil.
        if !self.input_changed {
            self.hold_timer += dt;
            if self.hold_timer > HOLD_REPEAT_DELAY && self.settled() {
                for dir in MoveDir::ALL {
                    if input.held(dir) {
                        self.step(dir);
                        moves += 1;
                    }
                }
            }
        } else {
            self.hold_timer = 0.0;
        }

        // 3. Glide every anchor toward the grid-derived target, one
        // axis-independent step per frame, never overshooting
        let target = self.expected_anchor();
        let current = self.active_set().corner(CornerId::TopLeft).anchor;
        let delta = Vec2::new(
            glide_toward(current.x, target.x),
            glide_toward(current.y, target.y),
        );
        if delta != Vec2::ZERO {
            self.active_set_mut().translate_anchors(delta);
        }

        // 4. Edge flag only lives for one frame
        self.input_changed = false;

        moves
    }
}

/// Single-axis glide increment: at most GLIDE_STEP toward the target
fn glide_toward(current: f32, target: f32) -> f32 {
    let diff = target - current;
    diff.signum() * diff.abs().min(GLIDE_STEP)
}
