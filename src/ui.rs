use bevy::prelude::*;

use crate::scenes::seed_dunes;
use crate::simulation::{Sandbox, SelectedElement, paint_with_cursor};
use crate::world::Element;

const SELECTED_BORDER: Color = Color::srgb(0.0, 1.0, 0.0);
const IDLE_BORDER: Color = Color::srgb(0.333, 0.333, 0.333);
const BUTTON_BACKGROUND: Color = Color::srgb(0.2, 0.2, 0.2);

/// Button that selects its element when clicked
#[derive(Component, Clone, Copy)]
pub struct ElementButton(pub Element);

/// Marker component for the controls help text
#[derive(Component)]
pub struct InstructionsPanel;

/// Plugin for the element bar and keyboard controls
pub struct SandboxUiPlugin;

impl Plugin for SandboxUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ui).add_systems(
            Update,
            (
                handle_element_buttons,
                handle_keyboard,
                update_button_borders,
            )
                .chain()
                .before(paint_with_cursor),
        );
    }
}

fn spawn_ui(mut commands: Commands) {
    let text_font = TextFont {
        font_size: 16.0,
        ..default()
    };

    commands.spawn((
        Text::new("Granular Sandbox Simulator"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
    ));

    // Element bar
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(52.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(10.0),
            ..default()
        })
        .with_children(|parent| {
            for element in Element::ALL {
                parent
                    .spawn((
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BorderColor(border_for(element, SelectedElement::default().get())),
                        BorderRadius::all(Val::Px(5.0)),
                        BackgroundColor(BUTTON_BACKGROUND),
                        ElementButton(element),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(element.name()),
                            text_font.clone(),
                            TextColor(element.color()),
                        ));
                    });
            }
        });

    commands.spawn((
        Text::new("1-4 select  |  C clear  |  R dunes"),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        InstructionsPanel,
    ));
}

fn border_for(element: Element, selected: Element) -> Color {
    if element == selected {
        SELECTED_BORDER
    } else {
        IDLE_BORDER
    }
}

fn handle_element_buttons(
    buttons: Query<(&Interaction, &ElementButton), (Changed<Interaction>, With<Button>)>,
    mut selected: ResMut<SelectedElement>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            selected.select(button.0);
        }
    }
}

/// Number keys pick an element; C and R reset the grid
fn handle_keyboard(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut selected: ResMut<SelectedElement>,
    mut sandbox: ResMut<Sandbox>,
    time: Res<Time>,
) {
    let hotkeys = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];
    for (key, element) in hotkeys.into_iter().zip(Element::ALL) {
        if keyboard_input.just_pressed(key) {
            selected.select(element);
        }
    }

    if keyboard_input.just_pressed(KeyCode::KeyC) {
        sandbox.grid.clear();
        info!("Grid cleared");
    }
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        let seed = time.elapsed().as_millis() as u32;
        match seed_dunes(&mut sandbox.grid, seed) {
            Ok(()) => info!("Seeded dunes with seed {seed}"),
            Err(err) => warn!("Dune preset stopped early: {err}"),
        }
    }
}

fn update_button_borders(
    selected: Res<SelectedElement>,
    mut buttons: Query<(&ElementButton, &mut BorderColor)>,
) {
    if !selected.is_changed() {
        return;
    }
    for (button, mut border) in &mut buttons {
        *border = BorderColor(border_for(button.0, selected.get()));
    }
}
