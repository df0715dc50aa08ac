/// Gameplay classification of a battle-map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terrain {
    /// Reserved for raw tile index 0 and anything unclassified
    #[default]
    None,
    Plain,
    Forest,
    Mountain,
    River,
    Road,
    Fort,
}

impl Terrain {
    /// Terrain for a slot in the translation table. Slot 0 is the
    /// reserved none entry; slots past the known types also fall back
    /// to none.
    pub fn from_slot(slot: usize) -> Terrain {
        match slot {
            1 => Terrain::Plain,
            2 => Terrain::Forest,
            3 => Terrain::Mountain,
            4 => Terrain::River,
            5 => Terrain::Road,
            6 => Terrain::Fort,
            _ => Terrain::None,
        }
    }

    /// Whether a unit can stand on this terrain
    pub fn walkable(&self) -> bool {
        !matches!(self, Terrain::None | Terrain::River)
    }
}

/// Maps raw tile indices from a level layer onto terrain types.
///
/// Slot `i` of the table holds the first raw tile index belonging to
/// terrain type `i`, as declared by the level's `terrain_type_tile_N`
/// properties; slot 0 is reserved for [`Terrain::None`]. The table
/// therefore always has `number_of_terrain_types + 1` entries.
#[derive(Debug, Clone)]
pub struct TerrainTranslator {
    first_tiles: Vec<u16>,
}

impl TerrainTranslator {
    pub fn new(first_tiles: Vec<u16>) -> Self {
        Self { first_tiles }
    }

    /// Number of table entries, including the reserved zero slot
    pub fn len(&self) -> usize {
        self.first_tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_tiles.is_empty()
    }

    /// Translate one raw tile index. Index 0 is always none, whatever
    /// the level's properties declare; otherwise the highest slot whose
    /// first tile is at or below the raw index wins.
    pub fn translate(&self, raw: u16) -> Terrain {
        if raw == 0 {
            return Terrain::None;
        }
        for slot in (1..self.first_tiles.len()).rev() {
            if raw >= self.first_tiles[slot] {
                return Terrain::from_slot(slot);
            }
        }
        Terrain::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> TerrainTranslator {
        // Plains start at tile 1, forest at 17, mountain at 33
        TerrainTranslator::new(vec![0, 1, 17, 33])
    }

    #[test]
    fn test_zero_is_always_none() {
        assert_eq!(translator().translate(0), Terrain::None);
        // Even a table claiming tile 0 for a type does not override it
        let greedy = TerrainTranslator::new(vec![0, 0]);
        assert_eq!(greedy.translate(0), Terrain::None);
    }

    #[test]
    fn test_table_length_is_types_plus_one() {
        assert_eq!(translator().len(), 3 + 1);
    }

    #[test]
    fn test_ranges_map_to_terrain() {
        let t = translator();
        assert_eq!(t.translate(1), Terrain::Plain);
        assert_eq!(t.translate(16), Terrain::Plain);
        assert_eq!(t.translate(17), Terrain::Forest);
        assert_eq!(t.translate(40), Terrain::Mountain);
    }

    #[test]
    fn test_unknown_slot_falls_back_to_none() {
        // More declared types than the game knows terrain for
        let t = TerrainTranslator::new(vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(t.translate(7), Terrain::None);
        assert_eq!(t.translate(6), Terrain::Fort);
    }
}
