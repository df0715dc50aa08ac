use super::constants::{
    BOUNCE_LOOP_DELAY, BOUNCE_START_DELAY, BOUNCE_SWEEP, CORNER_SIZE,
};
use super::corners::{CornerId, CornerState};
use bevy::prelude::*;

/// Animation behavior applied to all four corners of the active set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    /// No driver installed; corners rest on their anchors
    #[default]
    None,
    /// Corners pulse inward and back out in a loop
    BounceInOut,
    /// Corners hold still on their (expanded) anchors
    ExpandedStill,
}

/// How a mode transition applies its anchor offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorApply {
    /// Recompute every anchor from the tile origin
    Absolute,
    /// Add only the per-edge delta, keeping in-flight displacement
    Relative,
}

/// Quadratic ease-in-out over [0, 1]
fn ease_in_out(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        let u = -2.0 * x + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Scalar bounce displacement at `elapsed` seconds since the driver was
/// installed: a start delay, then looping eased sweeps from 0 up to the
/// corner width and back, each followed by a rest. Symmetric about the
/// sweep midpoint.
pub fn bounce_offset(elapsed: f32) -> f32 {
    if elapsed < BOUNCE_START_DELAY {
        return 0.0;
    }
    let t = (elapsed - BOUNCE_START_DELAY) % (BOUNCE_SWEEP + BOUNCE_LOOP_DELAY);
    if t >= BOUNCE_SWEEP {
        return 0.0;
    }
    let f = t / BOUNCE_SWEEP;
    let tri = 1.0 - (1.0 - 2.0 * f).abs();
    ease_in_out(tri) * CORNER_SIZE
}

/// Step one corner's driver by `dt` and write its displacement.
/// Equivalent to the per-frame callback the animation scheduler would
/// invoke for this corner under the given mode.
pub fn drive_corner(mode: MovementMode, id: CornerId, corner: &mut CornerState, dt: f32) {
    corner.anim.elapsed += dt;
    match mode {
        MovementMode::None => {
            corner.draw_offset = Vec2::ZERO;
        }
        MovementMode::BounceInOut => {
            // Inward pulse, mirrored across axes by edge membership
            let s = bounce_offset(corner.anim.elapsed);
            corner.draw_offset = Vec2::new(s * id.x_sign(), s * id.y_sign());
        }
        MovementMode::ExpandedStill => {
            // Re-snap every tick; the anchor itself may still be gliding
            corner.draw_offset = Vec2::ZERO;
        }
    }
}
