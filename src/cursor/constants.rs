/// Pixel size of each battle-grid tile
pub const TILE_SIZE: f32 = 64.0;

/// Pixel size of one corner decoration sprite
pub const CORNER_SIZE: f32 = 16.0;

/// Pixels the cursor glides per frame on each axis while settling.
/// One full tile takes TILE_SIZE / GLIDE_STEP = 4 frames.
pub const GLIDE_STEP: f32 = TILE_SIZE / 4.0;

/// Seconds a direction combination must stay unchanged before
/// held-key repeat movement kicks in
pub const HOLD_REPEAT_DELAY: f32 = 0.25;

// Bounce animation timing
/// Delay before the first inward sweep starts
pub const BOUNCE_START_DELAY: f32 = 0.2;

/// Duration of one full in-and-out sweep
pub const BOUNCE_SWEEP: f32 = 0.7;

/// Rest between sweeps
pub const BOUNCE_LOOP_DELAY: f32 = 0.2;

// Anchor offset presets per movement mode (negative = outward from the
// tile edge, positive = inward)
/// Bounce mode sits slightly outside the tile so the sweep pulses inward
pub const BOUNCE_ANCHOR_X: f32 = -2.0;
pub const BOUNCE_ANCHOR_Y: f32 = -2.0;

/// Expanded mode holds the corners further out, motionless
pub const EXPANDED_ANCHOR_X: f32 = -6.0;
pub const EXPANDED_ANCHOR_Y: f32 = -6.0;

/// Z position for corner sprites (above tiles and units)
pub const CURSOR_Z: f32 = 10.0;
