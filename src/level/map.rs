use serde::Deserialize;
use std::collections::HashMap;

/// On-disk description of a battle map: a Tiled-style JSON document
/// with named tile layers and a flat string property bag
#[derive(Debug, Clone, Deserialize)]
pub struct LevelMap {
    /// Map width in tiles
    pub width: usize,
    /// Map height in tiles
    pub height: usize,
    #[serde(default)]
    pub properties: HashMap<String, String>,
    pub layers: Vec<MapLayer>,
}

/// One named layer of raw tile indices, row-major
#[derive(Debug, Clone, Deserialize)]
pub struct MapLayer {
    pub name: String,
    pub data: Vec<u16>,
}

impl LevelMap {
    /// Find a layer by name
    pub fn layer(&self, name: &str) -> Option<&MapLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }
}
