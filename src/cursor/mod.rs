pub mod animation;
pub mod constants;
pub mod corners;
mod movement;
mod systems;

pub use animation::{AnchorApply, MovementMode};
pub use constants::*;
pub use corners::{AnchorOffsets, CornerId, CornerSet, CursorStyle};
pub use movement::{InputSnapshot, MoveDir};

use animation::drive_corner;
use bevy::prelude::*;

/// Plugin for the battle-map cursor
pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapCursor>()
            .add_message::<CursorMoved>()
            .add_systems(Startup, systems::spawn_cursor_corners)
            .add_systems(
                Update,
                (
                    systems::tick_cursor,
                    systems::sync_corner_sprites.after(systems::tick_cursor),
                    systems::play_move_sound.after(systems::tick_cursor),
                ),
            );
    }
}

/// Message fired once per tile step so the move blip plays
#[derive(Message)]
pub struct CursorMoved;

/// Marker component tying a spawned sprite to one corner of one set
#[derive(Component)]
pub struct CornerSprite {
    pub style: CursorStyle,
    pub id: CornerId,
}

/// The map cursor: logical grid position plus the two corner sets
/// it decorates the highlighted tile with
#[derive(Resource, Debug)]
pub struct MapCursor {
    pub row: i32,
    pub col: i32,
    style: CursorStyle,
    mode: MovementMode,
    offsets: AnchorOffsets,
    normal: CornerSet,
    target: CornerSet,
    visible: bool,
    /// Seconds since the held direction combination last changed
    pub(crate) hold_timer: f32,
    pub(crate) input_changed: bool,
}

impl Default for MapCursor {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl MapCursor {
    pub fn new(row: i32, col: i32) -> Self {
        let mut cursor = Self {
            row,
            col,
            style: CursorStyle::default(),
            mode: MovementMode::default(),
            offsets: AnchorOffsets::default(),
            normal: CornerSet::default(),
            target: CornerSet::default(),
            visible: true,
            hold_timer: 0.0,
            input_changed: false,
        };
        let origin = cursor.origin();
        let offsets = cursor.offsets;
        cursor.active_set_mut().set_anchors(origin, &offsets);
        cursor
    }

    /// Pixel origin of the highlighted tile in the y-down grid space
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.col as f32 * TILE_SIZE, self.row as f32 * TILE_SIZE)
    }

    pub fn style(&self) -> CursorStyle {
        self.style
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn corner_set(&self, style: CursorStyle) -> &CornerSet {
        match style {
            CursorStyle::Normal => &self.normal,
            CursorStyle::Target => &self.target,
        }
    }

    fn corner_set_mut(&mut self, style: CursorStyle) -> &mut CornerSet {
        match style {
            CursorStyle::Normal => &mut self.normal,
            CursorStyle::Target => &mut self.target,
        }
    }

    pub fn active_set(&self) -> &CornerSet {
        self.corner_set(self.style)
    }

    pub(crate) fn active_set_mut(&mut self) -> &mut CornerSet {
        let style = self.style;
        self.corner_set_mut(style)
    }

    /// Where the reference (top-left) corner's anchor lands once
    /// movement has settled on the current tile
    pub fn expected_anchor(&self) -> Vec2 {
        self.origin() + Vec2::new(self.offsets.left, self.offsets.top)
    }

    /// Whether the reference corner has caught up with the grid position
    pub fn settled(&self) -> bool {
        let anchor = self.active_set().corner(CornerId::TopLeft).anchor;
        anchor.distance_squared(self.expected_anchor()) < 1e-6
    }

    /// Set the logical position and let the glide carry the corners
    /// there over the following frames
    pub fn move_to(&mut self, row: i32, col: i32) {
        self.row = row;
        self.col = col;
    }

    /// Set the logical position and snap anchors and rendered positions
    /// immediately, with no transition
    pub fn jump_to(&mut self, row: i32, col: i32) {
        self.row = row;
        self.col = col;
        let origin = self.origin();
        let offsets = self.offsets;
        let set = self.active_set_mut();
        set.set_anchors(origin, &offsets);
        set.snap_to_anchors();
        for corner in &mut set.corners {
            corner.anim.elapsed = 0.0;
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn reveal(&mut self) {
        self.visible = true;
    }

    /// Anchor offset preset a mode installs
    fn mode_offsets(mode: MovementMode) -> AnchorOffsets {
        match mode {
            MovementMode::None => AnchorOffsets::default(),
            MovementMode::BounceInOut => {
                AnchorOffsets::new(BOUNCE_ANCHOR_X, BOUNCE_ANCHOR_X, BOUNCE_ANCHOR_Y, BOUNCE_ANCHOR_Y)
            }
            MovementMode::ExpandedStill => AnchorOffsets::new(
                EXPANDED_ANCHOR_X,
                EXPANDED_ANCHOR_X,
                EXPANDED_ANCHOR_Y,
                EXPANDED_ANCHOR_Y,
            ),
        }
    }

    /// Switch the animation mode, tearing down the previous per-corner
    /// drivers before installing the new ones
    pub fn set_mode(&mut self, mode: MovementMode, apply: AnchorApply) {
        if mode == self.mode {
            warn!("cursor already in mode {:?}, ignoring", mode);
            return;
        }
        self.install_mode(mode, apply);
    }

    fn install_mode(&mut self, mode: MovementMode, apply: AnchorApply) {
        let new_offsets = Self::mode_offsets(mode);
        let old_offsets = self.offsets;
        let origin = self.origin();
        let set = self.active_set_mut();
        match apply {
            AnchorApply::Absolute => set.set_anchors(origin, &new_offsets),
            AnchorApply::Relative => set.shift_anchors(&old_offsets, &new_offsets),
        }
        // One fresh driver per corner; the old ones are gone with the reset
        for corner in &mut set.corners {
            corner.anim.elapsed = 0.0;
            corner.draw_offset = Vec2::ZERO;
        }
        self.offsets = new_offsets;
        self.mode = mode;
    }

    /// Switch which corner set is active. The incoming set inherits the
    /// outgoing set's anchors member-by-member and snaps to them; the
    /// movement mode is untouched (see [`MapCursor::change_style`]).
    pub fn switch_style(&mut self, target: CursorStyle) {
        if target == self.style {
            warn!("cursor style {:?} already active, ignoring", target);
            return;
        }
        let outgoing = self.active_set().clone();
        let incoming = self.corner_set_mut(target);
        incoming.copy_anchors_from(&outgoing);
        incoming.snap_to_anchors();
        self.style = target;
    }

    /// Switch corner sets and re-enter the current mode on the incoming
    /// set so its offsets and drivers match
    pub fn change_style(&mut self, target: CursorStyle) {
        if target == self.style {
            warn!("cursor style {:?} already active, ignoring", target);
            return;
        }
        self.switch_style(target);
        let mode = self.mode;
        self.install_mode(mode, AnchorApply::Relative);
    }

    /// Step the active set's animation drivers by one frame
    pub fn animate(&mut self, dt: f32) {
        let mode = self.mode;
        let set = self.active_set_mut();
        for id in CornerId::ALL {
            drive_corner(mode, id, set.corner_mut(id), dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_snaps_with_zero_delta() {
        let mut cursor = MapCursor::new(0, 0);
        cursor.set_mode(MovementMode::BounceInOut, AnchorApply::Absolute);
        // Mid-sweep, so the corners carry a nonzero displacement
        cursor.animate(BOUNCE_START_DELAY + BOUNCE_SWEEP / 2.0);
        cursor.jump_to(3, 5);

        let origin = Vec2::new(5.0 * TILE_SIZE, 3.0 * TILE_SIZE);
        let tl = cursor.active_set().corner(CornerId::TopLeft);
        assert_eq!(tl.anchor, origin + Vec2::new(BOUNCE_ANCHOR_X, BOUNCE_ANCHOR_Y));
        for id in CornerId::ALL {
            assert_eq!(cursor.active_set().corner(id).draw_offset, Vec2::ZERO);
        }
        assert!(cursor.settled());
    }

    #[test]
    fn test_switch_style_preserves_anchors() {
        let mut cursor = MapCursor::new(2, 4);
        cursor.jump_to(2, 4);
        cursor.set_mode(MovementMode::BounceInOut, AnchorApply::Absolute);
        let before: Vec<Vec2> = CornerId::ALL
            .iter()
            .map(|&id| cursor.active_set().corner(id).anchor)
            .collect();

        cursor.switch_style(CursorStyle::Target);

        assert_eq!(cursor.style(), CursorStyle::Target);
        for (i, id) in CornerId::ALL.into_iter().enumerate() {
            let corner = cursor.active_set().corner(id);
            assert_eq!(corner.anchor, before[i]);
            assert_eq!(corner.draw_offset, Vec2::ZERO);
        }
        // Mode is deliberately untouched by the raw switch
        assert_eq!(cursor.mode(), MovementMode::BounceInOut);
    }

    #[test]
    fn test_mode_switches_leave_four_fresh_drivers() {
        let mut cursor = MapCursor::new(0, 0);
        let sequence = [
            MovementMode::BounceInOut,
            MovementMode::ExpandedStill,
            MovementMode::BounceInOut,
            MovementMode::None,
            MovementMode::ExpandedStill,
        ];
        for mode in sequence {
            cursor.animate(0.5);
            cursor.set_mode(mode, AnchorApply::Relative);
            // Every switch discards the old drivers and installs exactly
            // one per active corner, all starting from zero
            let live: Vec<f32> = cursor
                .active_set()
                .corners
                .iter()
                .map(|c| c.anim.elapsed)
                .collect();
            assert_eq!(live, vec![0.0; 4]);
            // The inactive set carries no drivers at all
            for corner in &cursor.corner_set(CursorStyle::Target).corners {
                assert_eq!(corner.anim.elapsed, 0.0);
                assert_eq!(corner.draw_offset, Vec2::ZERO);
            }
        }
    }

    #[test]
    fn test_same_mode_and_style_are_ignored() {
        let mut cursor = MapCursor::new(1, 1);
        cursor.set_mode(MovementMode::ExpandedStill, AnchorApply::Absolute);
        let anchors: Vec<Vec2> = CornerId::ALL
            .iter()
            .map(|&id| cursor.active_set().corner(id).anchor)
            .collect();

        cursor.set_mode(MovementMode::ExpandedStill, AnchorApply::Absolute);
        cursor.switch_style(CursorStyle::Normal);

        assert_eq!(cursor.style(), CursorStyle::Normal);
        assert_eq!(cursor.mode(), MovementMode::ExpandedStill);
        for (i, id) in CornerId::ALL.into_iter().enumerate() {
            assert_eq!(cursor.active_set().corner(id).anchor, anchors[i]);
        }
    }

    #[test]
    fn test_relative_mode_switch_keeps_glide_displacement() {
        let mut cursor = MapCursor::new(0, 0);
        cursor.set_mode(MovementMode::BounceInOut, AnchorApply::Absolute);
        // Mid-glide: corners sit one step away from the settled target
        cursor.move_to(0, 1);
        cursor.advance(1.0 / 60.0, &InputSnapshot::default());
        assert!(!cursor.settled());
        let lag = cursor.expected_anchor() - cursor.active_set().corner(CornerId::TopLeft).anchor;

        cursor.set_mode(MovementMode::ExpandedStill, AnchorApply::Relative);
        let lag_after =
            cursor.expected_anchor() - cursor.active_set().corner(CornerId::TopLeft).anchor;
        assert_eq!(lag, lag_after);
    }

    #[test]
    fn test_hide_and_reveal_toggle_visibility_only() {
        let mut cursor = MapCursor::new(4, 4);
        cursor.hide();
        assert!(!cursor.is_visible());
        assert_eq!((cursor.row, cursor.col), (4, 4));
        cursor.reveal();
        assert!(cursor.is_visible());
    }
}
