use bevy::prelude::*;

mod cursor;
mod level;
mod ui;

use cursor::{CursorPlugin, MapCursor, TILE_SIZE};
use level::{Level, Terrain};

/// Level file loaded at startup
const LEVEL_PATH: &str = "assets/levels/chapter_01.json";

/// The currently loaded battle level
#[derive(Resource)]
struct BattleLevel(Level);

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(ImagePlugin::default_nearest()))
        .add_plugins(CursorPlugin)
        .init_resource::<ui::SelectedSlot>()
        .add_systems(Startup, (setup_battle, ui::spawn_item_slots))
        .add_systems(Update, log_cursor_terrain)
        .run();
}

/// Spawns the camera and the terrain grid for the loaded level
fn setup_battle(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 999.0)));

    let level = match level::load_level(LEVEL_PATH) {
        Ok(level) => level,
        Err(e) => {
            warn!("Failed to load level {}: {}", LEVEL_PATH, e);
            return;
        }
    };

    // One tinted tile per terrain cell; proper tile art comes from the
    // map tileset later
    for (row, cells) in level.rows().iter().enumerate() {
        for (col, terrain) in cells.iter().enumerate() {
            commands.spawn((
                Sprite::from_color(terrain_color(*terrain), Vec2::splat(TILE_SIZE)),
                Transform::from_xyz(
                    col as f32 * TILE_SIZE + TILE_SIZE / 2.0,
                    -(row as f32 * TILE_SIZE + TILE_SIZE / 2.0),
                    0.0,
                ),
            ));
        }
    }

    info!(
        "Loaded level {} ({}x{} tiles)",
        LEVEL_PATH, level.width, level.height
    );
    commands.insert_resource(BattleLevel(level));
}

/// Placeholder tint per terrain type
fn terrain_color(terrain: Terrain) -> Color {
    match terrain {
        Terrain::None => Color::srgb(0.1, 0.1, 0.1),
        Terrain::Plain => Color::srgb(0.45, 0.65, 0.3),
        Terrain::Forest => Color::srgb(0.2, 0.45, 0.2),
        Terrain::Mountain => Color::srgb(0.5, 0.45, 0.4),
        Terrain::River => Color::srgb(0.25, 0.4, 0.7),
        Terrain::Road => Color::srgb(0.65, 0.6, 0.45),
        Terrain::Fort => Color::srgb(0.55, 0.35, 0.35),
    }
}

/// Logs the terrain under the cursor whenever it reaches a new tile
fn log_cursor_terrain(
    cursor: Res<MapCursor>,
    level: Option<Res<BattleLevel>>,
    mut last: Local<Option<(i32, i32)>>,
) {
    let Some(level) = level else {
        return;
    };
    let pos = (cursor.row, cursor.col);
    if *last == Some(pos) {
        return;
    }
    *last = Some(pos);

    if cursor.row >= 0
        && cursor.col >= 0
        && (cursor.row as usize) < level.0.height
        && (cursor.col as usize) < level.0.width
    {
        let terrain = level.0.terrain_at(cursor.row as usize, cursor.col as usize);
        info!("Cursor on ({}, {}): {:?}", cursor.row, cursor.col, terrain);
    }
}
