use super::constants::{CORNER_SIZE, TILE_SIZE};
use bevy::prelude::*;

/// One of the four decorations framing the highlighted tile,
/// clockwise from top-left. The discriminant doubles as the
/// index into a corner set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub enum CornerId {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl CornerId {
    pub const ALL: [CornerId; 4] = [
        CornerId::TopLeft,
        CornerId::TopRight,
        CornerId::BottomRight,
        CornerId::BottomLeft,
    ];

    /// Index into a corner set's array
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether this corner sits on the tile's left edge
    pub fn on_left_edge(&self) -> bool {
        matches!(self, CornerId::TopLeft | CornerId::BottomLeft)
    }

    /// Whether this corner sits on the tile's top edge
    pub fn on_top_edge(&self) -> bool {
        matches!(self, CornerId::TopLeft | CornerId::TopRight)
    }

    /// Sign of an inward x displacement for this corner
    /// (left corners move right, right corners move left)
    pub fn x_sign(&self) -> f32 {
        if self.on_left_edge() {
            1.0
        } else {
            -1.0
        }
    }

    /// Sign of an inward y displacement in the y-down grid space
    pub fn y_sign(&self) -> f32 {
        if self.on_top_edge() {
            1.0
        } else {
            -1.0
        }
    }
}

/// Which of the two corner sets is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Plain movement cursor
    #[default]
    Normal,
    /// Attack/target selection cursor
    Target,
}

/// Per-edge anchor displacement shared by all four corners of a set.
/// Negative values push a corner outward past the tile edge, positive
/// values pull it inward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorOffsets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl AnchorOffsets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// The x component for a corner on the given edge side
    fn edge_x(&self, id: CornerId) -> f32 {
        if id.on_left_edge() {
            self.left
        } else {
            self.right
        }
    }

    /// The y component for a corner on the given edge side
    fn edge_y(&self, id: CornerId) -> f32 {
        if id.on_top_edge() {
            self.top
        } else {
            self.bottom
        }
    }
}

/// Animation state of a single corner, stepped once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerAnim {
    /// Seconds since this corner's current driver was installed
    pub elapsed: f32,
}

/// A single corner's resting anchor plus its animated displacement.
/// The rendered position is `anchor + draw_offset`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerState {
    pub anchor: Vec2,
    pub draw_offset: Vec2,
    pub anim: CornerAnim,
}

/// Fixed ordered collection of the four corners of one cursor style
#[derive(Debug, Clone, Default)]
pub struct CornerSet {
    pub corners: [CornerState; 4],
}

impl CornerSet {
    pub fn corner(&self, id: CornerId) -> &CornerState {
        &self.corners[id.index()]
    }

    pub fn corner_mut(&mut self, id: CornerId) -> &mut CornerState {
        &mut self.corners[id.index()]
    }

    /// Recompute every anchor from the tile's pixel origin, measuring
    /// right/bottom offsets inward from the far edge less the corner width
    pub fn set_anchors(&mut self, origin: Vec2, offsets: &AnchorOffsets) {
        for id in CornerId::ALL {
            let x = if id.on_left_edge() {
                origin.x + offsets.left
            } else {
                origin.x + TILE_SIZE - CORNER_SIZE - offsets.right
            };
            let y = if id.on_top_edge() {
                origin.y + offsets.top
            } else {
                origin.y + TILE_SIZE - CORNER_SIZE - offsets.bottom
            };
            self.corner_mut(id).anchor = Vec2::new(x, y);
        }
    }

    /// Add the per-edge delta between two offset values to every anchor,
    /// preserving whatever independent displacement each corner carries
    pub fn shift_anchors(&mut self, old: &AnchorOffsets, new: &AnchorOffsets) {
        for id in CornerId::ALL {
            let dx = new.edge_x(id) - old.edge_x(id);
            let dy = new.edge_y(id) - old.edge_y(id);
            let corner = self.corner_mut(id);
            // Right/bottom offsets measure inward, so their delta moves
            // the anchor the opposite way
            corner.anchor.x += if id.on_left_edge() { dx } else { -dx };
            corner.anchor.y += if id.on_top_edge() { dy } else { -dy };
        }
    }

    /// Copy anchor coordinates from another set, matching by corner index
    pub fn copy_anchors_from(&mut self, other: &CornerSet) {
        for id in CornerId::ALL {
            self.corner_mut(id).anchor = other.corner(id).anchor;
        }
    }

    /// Drop every corner's animated displacement so the rendered
    /// position coincides with the anchor on the next frame
    pub fn snap_to_anchors(&mut self) {
        for corner in &mut self.corners {
            corner.draw_offset = Vec2::ZERO;
        }
    }

    /// Translate every anchor by the same delta
    pub fn translate_anchors(&mut self, delta: Vec2) {
        for corner in &mut self.corners {
            corner.anchor += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_anchors_edges() {
        let mut set = CornerSet::default();
        let offsets = AnchorOffsets::new(-2.0, -2.0, -3.0, -3.0);
        set.set_anchors(Vec2::new(64.0, 128.0), &offsets);

        assert_eq!(set.corner(CornerId::TopLeft).anchor, Vec2::new(62.0, 125.0));
        assert_eq!(
            set.corner(CornerId::TopRight).anchor,
            Vec2::new(64.0 + TILE_SIZE - CORNER_SIZE + 2.0, 125.0)
        );
        assert_eq!(
            set.corner(CornerId::BottomLeft).anchor,
            Vec2::new(62.0, 128.0 + TILE_SIZE - CORNER_SIZE + 3.0)
        );
    }

    #[test]
    fn test_shift_preserves_displacement() {
        let mut set = CornerSet::default();
        let old = AnchorOffsets::new(-2.0, -2.0, -2.0, -2.0);
        set.set_anchors(Vec2::ZERO, &old);

        // Displace one corner independently, as mid-glide movement does
        set.corner_mut(CornerId::TopLeft).anchor += Vec2::new(16.0, 0.0);
        let displaced = set.corner(CornerId::TopLeft).anchor;

        let new = AnchorOffsets::new(-6.0, -6.0, -6.0, -6.0);
        set.shift_anchors(&old, &new);

        // Left edge moved 4px further out (leftward)
        assert_eq!(
            set.corner(CornerId::TopLeft).anchor,
            displaced + Vec2::new(-4.0, -4.0)
        );
        // Right edge moves the opposite way on x
        let mut absolute = CornerSet::default();
        absolute.set_anchors(Vec2::ZERO, &new);
        assert_eq!(
            set.corner(CornerId::BottomRight).anchor,
            absolute.corner(CornerId::BottomRight).anchor
        );
    }

    #[test]
    fn test_copy_anchors_matches_by_index() {
        let mut from = CornerSet::default();
        from.set_anchors(Vec2::new(192.0, 64.0), &AnchorOffsets::new(-2.0, -2.0, -2.0, -2.0));
        let mut to = CornerSet::default();
        to.corner_mut(CornerId::TopRight).draw_offset = Vec2::new(3.0, 3.0);

        to.copy_anchors_from(&from);
        to.snap_to_anchors();

        for id in CornerId::ALL {
            assert_eq!(to.corner(id).anchor, from.corner(id).anchor);
            assert_eq!(to.corner(id).draw_offset, Vec2::ZERO);
        }
    }

    #[test]
    fn test_inward_signs() {
        assert_eq!(CornerId::TopLeft.x_sign(), 1.0);
        assert_eq!(CornerId::TopLeft.y_sign(), 1.0);
        assert_eq!(CornerId::BottomRight.x_sign(), -1.0);
        assert_eq!(CornerId::BottomRight.y_sign(), -1.0);
        assert_eq!(CornerId::TopRight.x_sign(), -1.0);
        assert_eq!(CornerId::BottomLeft.y_sign(), -1.0);
    }
}
