//! Per-frame visuals - copy core state into the scene, camera follow

use bevy::prelude::*;

use coin_arena::core::fixed::to_float;

use super::{AvatarModel, CoinModel, Simulation};

/// Camera height above the floor
const CAMERA_HEIGHT: f32 = 5.0;

/// Camera distance behind the avatar (+z)
const CAMERA_DISTANCE: f32 = 10.0;

// ============================================================================
// STATE SYNC
// ============================================================================

/// Place and orient the avatar model
pub fn sync_avatar(
    sim: Res<Simulation>,
    mut query: Query<&mut Transform, With<AvatarModel>>,
) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    let avatar = &sim.state.avatar;
    transform.translation = Vec3::from_array(avatar.world_position());
    transform.rotation = Quat::from_rotation_y(avatar.facing.yaw_radians());
}

/// Hide collected coins, spin the rest
pub fn sync_coins(
    sim: Res<Simulation>,
    mut query: Query<(&CoinModel, &mut Transform, &mut Visibility)>,
) {
    for (model, mut transform, mut visibility) in query.iter_mut() {
        let Some(coin) = sim.state.coins.get(model.0 as usize) else {
            continue;
        };

        if coin.collected {
            *visibility = Visibility::Hidden;
        } else {
            transform.rotation = Quat::from_rotation_y(to_float(coin.spin));
        }
    }
}

// ============================================================================
// CAMERA FOLLOW
// ============================================================================

/// Camera sits behind and above the avatar, looking at it
pub fn camera_follow(
    avatar_query: Query<&Transform, With<AvatarModel>>,
    mut camera_query: Query<&mut Transform, (With<Camera3d>, Without<AvatarModel>)>,
) {
    let Ok(avatar_transform) = avatar_query.get_single() else {
        return;
    };

    let Ok(mut camera_transform) = camera_query.get_single_mut() else {
        return;
    };

    let target = avatar_transform.translation;
    camera_transform.translation = Vec3::new(target.x, CAMERA_HEIGHT, target.z + CAMERA_DISTANCE);
    camera_transform.look_at(target, Vec3::Y);
}
