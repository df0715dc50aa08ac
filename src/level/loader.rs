use super::map::LevelMap;
use super::terrain::{Terrain, TerrainTranslator};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the layer holding terrain tile indices
pub const TERRAIN_LAYER: &str = "terrain";

/// Number of declared terrain types
const PROP_TERRAIN_COUNT: &str = "number_of_terrain_types";

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    Io(io::Error),
    Json(serde_json::Error),
    MissingLayer(String),
    BadProperty(String),
}

impl From<io::Error> for LevelError {
    fn from(err: io::Error) -> Self {
        LevelError::Io(err)
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        LevelError::Json(err)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "IO error: {}", e),
            LevelError::Json(e) => write!(f, "JSON error: {}", e),
            LevelError::MissingLayer(name) => write!(f, "Missing layer: {}", name),
            LevelError::BadProperty(name) => write!(f, "Bad or missing property: {}", name),
        }
    }
}

impl std::error::Error for LevelError {}

/// A loaded level: the terrain grid derived from the map description
#[derive(Debug, Clone)]
pub struct Level {
    pub width: usize,
    pub height: usize,
    rows: Vec<Vec<Terrain>>,
}

impl Level {
    pub fn terrain_at(&self, row: usize, col: usize) -> Terrain {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<Terrain>] {
        &self.rows
    }
}

/// Load a level description from a JSON file and translate its terrain
/// layer into gameplay terrain types
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let text = fs::read_to_string(path)?;
    let map: LevelMap = serde_json::from_str(&text)?;
    build_level(&map)
}

/// Build the terrain grid from an already-parsed map description
pub fn build_level(map: &LevelMap) -> Result<Level, LevelError> {
    let translator = translator_from_properties(&map.properties)?;
    let layer = map
        .layer(TERRAIN_LAYER)
        .ok_or_else(|| LevelError::MissingLayer(TERRAIN_LAYER.to_string()))?;

    let rows = layer
        .data
        .chunks(map.width)
        .take(map.height)
        .map(|row| row.iter().map(|&raw| translator.translate(raw)).collect())
        .collect();

    Ok(Level {
        width: map.width,
        height: map.height,
        rows,
    })
}

/// Build the tile-index translation table from the level's metadata
/// properties: `number_of_terrain_types` entries named
/// `terrain_type_tile_N`, plus the reserved zero slot
pub fn translator_from_properties(
    properties: &HashMap<String, String>,
) -> Result<TerrainTranslator, LevelError> {
    let count: usize = int_property(properties, PROP_TERRAIN_COUNT)?;
    let mut first_tiles = Vec::with_capacity(count + 1);
    first_tiles.push(0); // raw index 0 stays Terrain::None
    for n in 1..=count {
        first_tiles.push(int_property(properties, &format!("terrain_type_tile_{}", n))?);
    }
    Ok(TerrainTranslator::new(first_tiles))
}

fn int_property<T: std::str::FromStr>(
    properties: &HashMap<String, String>,
    name: &str,
) -> Result<T, LevelError> {
    properties
        .get(name)
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| LevelError::BadProperty(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP_JSON: &str = r#"{
        "width": 3,
        "height": 2,
        "properties": {
            "number_of_terrain_types": "2",
            "terrain_type_tile_1": "1",
            "terrain_type_tile_2": "4"
        },
        "layers": [
            { "name": "terrain", "data": [0, 1, 3, 4, 5, 0] },
            { "name": "deploy", "data": [0, 0, 0, 0, 0, 0] }
        ]
    }"#;

    #[test]
    fn test_build_level_from_json() {
        let map: LevelMap = serde_json::from_str(MAP_JSON).unwrap();
        let level = build_level(&map).unwrap();

        assert_eq!((level.width, level.height), (3, 2));
        assert_eq!(level.terrain_at(0, 0), Terrain::None);
        assert_eq!(level.terrain_at(0, 1), Terrain::Plain);
        assert_eq!(level.terrain_at(0, 2), Terrain::Plain);
        assert_eq!(level.terrain_at(1, 0), Terrain::Forest);
        assert_eq!(level.terrain_at(1, 2), Terrain::None);
    }

    #[test]
    fn test_translator_table_length() {
        let map: LevelMap = serde_json::from_str(MAP_JSON).unwrap();
        let translator = translator_from_properties(&map.properties).unwrap();
        assert_eq!(translator.len(), 2 + 1);
    }

    #[test]
    fn test_missing_layer() {
        let mut map: LevelMap = serde_json::from_str(MAP_JSON).unwrap();
        map.layers.retain(|layer| layer.name != TERRAIN_LAYER);
        match build_level(&map) {
            Err(LevelError::MissingLayer(name)) => assert_eq!(name, TERRAIN_LAYER),
            other => panic!("expected MissingLayer, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_bad_property() {
        let mut map: LevelMap = serde_json::from_str(MAP_JSON).unwrap();
        map.properties
            .insert(PROP_TERRAIN_COUNT.to_string(), "many".to_string());
        assert!(matches!(
            build_level(&map),
            Err(LevelError::BadProperty(_))
        ));
    }
}
