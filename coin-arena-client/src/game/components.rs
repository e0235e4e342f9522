//! Marker components linking scene entities to the simulation.

use bevy::prelude::*;

/// Root of the avatar model. Children are the body parts.
#[derive(Component)]
pub struct AvatarModel;

/// Coin model, by coin id.
#[derive(Component)]
pub struct CoinModel(pub u32);

/// Obstacle block. Never moves after spawn.
#[derive(Component)]
pub struct ObstacleModel;

/// Ground plane
#[derive(Component)]
pub struct Floor;
