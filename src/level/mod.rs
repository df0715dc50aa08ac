pub mod loader;
pub mod map;
pub mod terrain;

// Re-export commonly used items
pub use loader::{load_level, Level, LevelError, TERRAIN_LAYER};
pub use map::{LevelMap, MapLayer};
pub use terrain::{Terrain, TerrainTranslator};
