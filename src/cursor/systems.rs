use super::constants::{CORNER_SIZE, CURSOR_Z};
use super::corners::{CornerId, CursorStyle};
use super::movement::{InputSnapshot, MoveDir};
use super::{AnchorApply, CornerSprite, CursorMoved, MapCursor, MovementMode};
use bevy::prelude::*;

/// Sound played on every tile step
#[derive(Resource)]
pub struct CursorMoveSound(pub Handle<AudioSource>);

/// Key pair (arrow + WASD) mapped to each direction, matching the
/// camera controls elsewhere in the game
fn keys_for(dir: MoveDir) -> [KeyCode; 2] {
    match dir {
        MoveDir::Up => [KeyCode::ArrowUp, KeyCode::KeyW],
        MoveDir::Down => [KeyCode::ArrowDown, KeyCode::KeyS],
        MoveDir::Left => [KeyCode::ArrowLeft, KeyCode::KeyA],
        MoveDir::Right => [KeyCode::ArrowRight, KeyCode::KeyD],
    }
}

/// Spawns the two corner sets (one entity per corner) and starts the
/// cursor bouncing on its home tile
pub fn spawn_cursor_corners(
    mut commands: Commands,
    assets: Res<AssetServer>,
    mut cursor: ResMut<MapCursor>,
) {
    let textures = [
        (CursorStyle::Normal, assets.load("ui/cursor_corner.png")),
        (CursorStyle::Target, assets.load("ui/cursor_corner_target.png")),
    ];

    for (style, texture) in textures {
        for id in CornerId::ALL {
            let mut sprite = Sprite::from_image(texture.clone());
            // Corner art points inward from the top-left; flip it to
            // face the tile on the other edges
            sprite.flip_x = !id.on_left_edge();
            sprite.flip_y = !id.on_top_edge();
            commands.spawn((
                CornerSprite { style, id },
                sprite,
                Transform::from_xyz(0.0, 0.0, CURSOR_Z),
                Visibility::Hidden,
            ));
        }
    }

    commands.insert_resource(CursorMoveSound(assets.load("sounds/cursor_move.ogg")));

    cursor.set_mode(MovementMode::BounceInOut, AnchorApply::Absolute);
    info!("Cursor spawned at ({}, {})", cursor.row, cursor.col);
}

/// Per-frame cursor driver: snapshots the keyboard, runs the movement
/// controller, steps the corner animations, and fires move blips
pub fn tick_cursor(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cursor: ResMut<MapCursor>,
    mut moved: MessageWriter<CursorMoved>,
) {
    let mut snapshot = InputSnapshot::default();
    for dir in MoveDir::ALL {
        let [a, b] = keys_for(dir);
        snapshot.record(
            dir,
            keyboard.just_pressed(a) || keyboard.just_pressed(b),
            keyboard.just_released(a) || keyboard.just_released(b),
            keyboard.pressed(a) || keyboard.pressed(b),
        );
    }

    let dt = time.delta_secs();
    let moves = cursor.advance(dt, &snapshot);
    for _ in 0..moves {
        moved.write(CursorMoved);
    }
    cursor.animate(dt);

    // Tab flips between the movement cursor and the target cursor
    if keyboard.just_pressed(KeyCode::Tab) {
        match cursor.style() {
            CursorStyle::Normal => {
                cursor.change_style(CursorStyle::Target);
                cursor.set_mode(MovementMode::ExpandedStill, AnchorApply::Relative);
            }
            CursorStyle::Target => {
                cursor.change_style(CursorStyle::Normal);
                cursor.set_mode(MovementMode::BounceInOut, AnchorApply::Relative);
            }
        }
    }

    if keyboard.just_pressed(KeyCode::KeyH) {
        if cursor.is_visible() {
            cursor.hide();
        } else {
            cursor.reveal();
        }
    }
}

/// Writes each corner's rendered position and visibility to its sprite.
/// Cursor math runs in a y-down grid space; only this system converts
/// into bevy's y-up world.
pub fn sync_corner_sprites(
    cursor: Res<MapCursor>,
    mut query: Query<(&CornerSprite, &mut Transform, &mut Visibility)>,
) {
    for (corner, mut transform, mut visibility) in &mut query {
        let active = corner.style == cursor.style() && cursor.is_visible();
        *visibility = if active {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if active {
            let state = cursor.active_set().corner(corner.id);
            let pos = state.anchor + state.draw_offset;
            transform.translation.x = pos.x + CORNER_SIZE / 2.0;
            transform.translation.y = -(pos.y + CORNER_SIZE / 2.0);
        }
    }
}

/// Plays the move blip once per tile step
pub fn play_move_sound(
    mut commands: Commands,
    mut moved: MessageReader<CursorMoved>,
    sound: Option<Res<CursorMoveSound>>,
) {
    let Some(sound) = sound else {
        return;
    };
    for _ in moved.read() {
        commands.spawn((AudioPlayer::new(sound.0.clone()), PlaybackSettings::DESPAWN));
    }
}
