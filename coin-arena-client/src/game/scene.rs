//! Static scene: lights, floor, avatar model, coins and obstacles.

use bevy::prelude::*;

use coin_arena::core::fixed::to_float;

use super::{AvatarModel, CoinModel, Floor, ObstacleModel, Simulation};

/// Side length of the visible floor.
const FLOOR_SIZE: f32 = 50.0;

fn hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Spawn everything the first frame needs.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<Simulation>,
) {
    // Lighting
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 600.0,
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: hex(0x90EE90),
            perceptual_roughness: 0.8,
            ..default()
        })),
        Floor,
    ));

    spawn_avatar(&mut commands, &mut meshes, &mut materials, &sim);

    // Coins
    let coin_mesh = meshes.add(Cylinder::new(0.3, 0.1));
    let coin_material = materials.add(StandardMaterial {
        base_color: hex(0xFFD700),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });
    for coin in &sim.state.coins {
        let [x, y, z] = coin.world_position();
        commands.spawn((
            Mesh3d(coin_mesh.clone()),
            MeshMaterial3d(coin_material.clone()),
            Transform::from_xyz(x, y, z).with_rotation(Quat::from_rotation_y(to_float(coin.spin))),
            CoinModel(coin.id),
        ));
    }

    // Obstacles
    let obstacle_mesh = meshes.add(Cuboid::new(1.0, 2.0, 1.0));
    let obstacle_material = materials.add(StandardMaterial {
        base_color: hex(0xE74C3C),
        ..default()
    });
    for obstacle in &sim.state.arena.obstacles {
        let [x, y, z] = obstacle.world_position();
        commands.spawn((
            Mesh3d(obstacle_mesh.clone()),
            MeshMaterial3d(obstacle_material.clone()),
            Transform::from_xyz(x, y, z),
            ObstacleModel,
        ));
    }

    info!(
        "Scene ready: {} coins, {} obstacles",
        sim.state.total_coins(),
        sim.state.arena.obstacles.len()
    );
}

/// Blue body, round head and two eyes facing +z.
fn spawn_avatar(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    sim: &Simulation,
) {
    let avatar = &sim.state.avatar;
    let [x, y, z] = avatar.world_position();

    let body = (
        Mesh3d(meshes.add(Cuboid::new(1.0, 1.5, 0.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: hex(0x3498DB),
            ..default()
        })),
        Transform::from_xyz(0.0, 1.0, 0.0),
    );
    let head = (
        Mesh3d(meshes.add(Sphere::new(0.4).mesh().uv(16, 16))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: hex(0xFFDBAC),
            ..default()
        })),
        Transform::from_xyz(0.0, 2.0, 0.0),
    );
    let eye_mesh = meshes.add(Sphere::new(0.08).mesh().uv(8, 8));
    let eye_material = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        ..default()
    });

    commands
        .spawn((
            AvatarModel,
            Transform::from_xyz(x, y, z).with_rotation(Quat::from_rotation_y(avatar.facing.yaw_radians())),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn(body);
            parent.spawn(head);
            for eye_x in [-0.15, 0.15] {
                parent.spawn((
                    Mesh3d(eye_mesh.clone()),
                    MeshMaterial3d(eye_material.clone()),
                    Transform::from_xyz(eye_x, 2.1, 0.35),
                ));
            }
        });
}
