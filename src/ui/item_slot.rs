use bevy::prelude::*;

/// Pixel size of one inventory slot button
const SLOT_SIZE: f32 = 64.0;

/// Item icon sheet layout (32x32 icons)
const ICON_SIZE: u32 = 32;
const ICON_SHEET_COLS: u32 = 8;
const ICON_SHEET_ROWS: u32 = 4;

/// Number of slots in the column
const SLOT_COUNT: usize = 5;

const SLOT_BG: Color = Color::srgb(0.2, 0.2, 0.3);
const SLOT_BG_SELECTED: Color = Color::srgb(0.3, 0.35, 0.5);

/// One inventory slot in the side column
#[derive(Component)]
pub struct ItemSlot {
    pub index: usize,
}

/// Which slot is currently selected, if any
#[derive(Resource, Default)]
pub struct SelectedSlot(pub Option<usize>);

/// Builds the inventory column along the left edge of the screen
pub fn spawn_item_slots(
    mut commands: Commands,
    assets: Res<AssetServer>,
    mut texture_atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let texture = assets.load("ui/items.png");
    let layout = TextureAtlasLayout::from_grid(
        UVec2::splat(ICON_SIZE),
        ICON_SHEET_COLS,
        ICON_SHEET_ROWS,
        None,
        None,
    );
    let atlas_layout = texture_atlas_layouts.add(layout);

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Start,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(10.0),
            ..default()
        })
        .with_children(|parent| {
            for index in 0..SLOT_COUNT {
                parent
                    .spawn((
                        Button,
                        ItemSlot { index },
                        Node {
                            width: Val::Px(SLOT_SIZE),
                            height: Val::Px(SLOT_SIZE),
                            display: Display::Flex,
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            padding: UiRect::all(Val::Px(0.0)),
                            ..default()
                        },
                        BackgroundColor(SLOT_BG),
                        BorderColor::all(Color::srgb(0.4, 0.4, 0.6)),
                        BorderRadius::all(Val::Px(4.0)),
                    ))
                    .observe(slot_clicked)
                    .with_children(|button| {
                        button.spawn((
                            ImageNode {
                                image: texture.clone(),
                                image_mode: NodeImageMode::Stretch,
                                texture_atlas: Some(TextureAtlas {
                                    layout: atlas_layout.clone(),
                                    index,
                                }),
                                ..default()
                            },
                            Node {
                                width: Val::Px(SLOT_SIZE),
                                height: Val::Px(SLOT_SIZE),
                                ..default()
                            },
                        ));
                    });
            }
        });
}

/// Selects the clicked slot and highlights it, clearing the old one
fn slot_clicked(
    trigger: On<Pointer<Click>>,
    mut selected: ResMut<SelectedSlot>,
    mut slots: Query<(Entity, &ItemSlot, &mut BackgroundColor)>,
) {
    let Ok((_, slot, _)) = slots.get(trigger.entity) else {
        return;
    };
    let index = slot.index;
    selected.0 = Some(index);
    info!("Selected item slot {}", index);

    for (entity, _, mut bg_color) in &mut slots {
        *bg_color = if entity == trigger.entity {
            BackgroundColor(SLOT_BG_SELECTED)
        } else {
            BackgroundColor(SLOT_BG)
        };
    }
}
