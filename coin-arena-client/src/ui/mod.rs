//! UI module - score HUD, instructions panel and win banner

use bevy::prelude::*;

use crate::AppState;
use crate::game::{Simulation, ViewCommand};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, (setup_hud, setup_instructions))
            .add_systems(Update, handle_view_commands)
            .add_systems(OnEnter(AppState::Won), setup_win_banner);
    }
}

/// Marker for the score text
#[derive(Component)]
struct ScoreText;

/// Marker for the instructions panel
#[derive(Component)]
struct InstructionsUI;

/// Marker for the win banner
#[derive(Component)]
struct WinUI;

fn score_label(collected: u32, total: u32) -> String {
    format!("Coins: {collected}/{total}")
}

/// Score in the top-left corner
fn setup_hud(mut commands: Commands, sim: Res<Simulation>) {
    commands.spawn((
        Text::new(score_label(sim.state.collected_coins, sim.state.total_coins())),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0),
            left: Val::Px(20.0),
            ..default()
        },
        ScoreText,
    ));
}

/// Controls and goal, shown until the first key press
fn setup_instructions(mut commands: Commands, sim: Res<Simulation>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        InstructionsUI,
    )).with_children(|parent| {
        parent.spawn((
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(24.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        )).with_children(|panel| {
            panel.spawn((
                Text::new("WASD or arrow keys to move"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            panel.spawn((
                Text::new(format!(
                    "Collect all {} coins and avoid the red blocks",
                    sim.state.total_coins()
                )),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
        });
    });
}

/// Apply commands forwarded from the game loop
fn handle_view_commands(
    mut commands: EventReader<ViewCommand>,
    mut score_query: Query<&mut Text, With<ScoreText>>,
    mut instructions_query: Query<&mut Visibility, With<InstructionsUI>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands.read() {
        match *command {
            ViewCommand::UpdateScore { collected, total } => {
                for mut text in score_query.iter_mut() {
                    text.0 = score_label(collected, total);
                }
            }
            ViewCommand::HideInstructions => {
                for mut visibility in instructions_query.iter_mut() {
                    *visibility = Visibility::Hidden;
                }
            }
            ViewCommand::ShowWinState => {
                info!("All coins collected!");
                next_state.set(AppState::Won);
            }
        }
    }
}

/// Centered win banner
fn setup_win_banner(mut commands: Commands, sim: Res<Simulation>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        WinUI,
    )).with_children(|parent| {
        parent.spawn((
            Text::new("YOU WIN!"),
            TextFont {
                font_size: 64.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 0.84, 0.0)),
            Node {
                margin: UiRect::bottom(Val::Px(20.0)),
                ..default()
            },
        ));

        parent.spawn((
            Text::new(format!("All {} coins collected", sim.state.total_coins())),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(0, 10), "Coins: 0/10");
        assert_eq!(score_label(10, 10), "Coins: 10/10");
    }
}
