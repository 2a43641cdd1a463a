//! End-to-end targeting scenarios against whole worlds.

use cubecast_math::Vec3f;
use cubecast_raycast::{GridWalk, InteractError, Ray, raycast, remove_block};
use cubecast_voxel::{
    Chunk, ChunkCoord, SOLID, World, WorldPreset, build_world, chunk_coord_of, local_coords_of,
};
use glam::{IVec3, UVec3};

fn all_solid_chunk() -> World {
    let mut world = World::with_capacity_limit(4);
    world
        .insert_chunk(Chunk::new_filled(ChunkCoord::new(0, 0, 0), SOLID))
        .unwrap();
    world
}

#[test]
fn ray_starting_above_chunk_never_reaches_it() {
    let world = all_solid_chunk();
    let result = raycast(
        &world,
        &Ray::new(Vec3f::new(0.0, 20.0, 0.0), Vec3f::new(0.0, -1.0, 0.0), 3.0),
    );
    assert!(!result.collision());
}

#[test]
fn ray_entering_chunk_top_hits_at_half_block() {
    let world = all_solid_chunk();
    let result = raycast(
        &world,
        &Ray::new(Vec3f::new(8.0, 16.5, 8.0), Vec3f::new(0.0, -1.0, 0.0), 3.0),
    );
    assert!(result.collision());
    assert_eq!(result.hit_cell, IVec3::new(8, 15, 8));
    assert!((result.distance - 0.5).abs() < 1e-5);
}

#[test]
fn negative_block_maps_to_negative_chunk() {
    let block = IVec3::new(-1, -1, -1);
    assert_eq!(chunk_coord_of(block), ChunkCoord::new(-1, -1, -1));
    assert_eq!(local_coords_of(block), UVec3::new(15, 15, 15));
}

#[test]
fn diagonal_tie_advances_x_first() {
    let mut walk = GridWalk::new(Vec3f::new(0.5, 0.5, 0.5), Vec3f::new(3.5, 3.5, 0.5));
    walk.next();
    let first = walk.next().unwrap();
    assert_eq!(first.step, IVec3::X);
    assert_eq!(first.cell, IVec3::new(1, 0, 0));
}

#[test]
fn every_origin_inside_solid_reports_zero_distance() {
    let world = all_solid_chunk();
    let dirs = [
        Vec3f::new(1.0, 0.0, 0.0),
        Vec3f::new(-1.0, 0.0, 0.0),
        Vec3f::new(0.0, 0.0, 1.0),
        Vec3f::new(1.0, 2.0, 3.0).normalize(),
        Vec3f::new(-3.0, -1.0, 2.0).normalize(),
    ];
    for (i, dir) in dirs.into_iter().enumerate() {
        let origin = Vec3f::new(1.1 + i as f32 * 2.7, 0.4 + i as f32, 14.9 - i as f32 * 1.3);
        let result = raycast(&world, &Ray::new(origin, dir, 3.0));
        assert!(result.collision());
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.hit_cell, origin.floor_to_cell());
    }
}

#[test]
fn rays_through_empty_chunks_end_on_end_cell() {
    let mut world = World::new();
    for cx in -1..=1 {
        world
            .insert_chunk(Chunk::new(ChunkCoord::new(cx, 0, 0)))
            .unwrap();
    }
    let origin = Vec3f::new(0.5, 8.25, 8.75);
    for dir in [
        Vec3f::new(1.0, 0.0, 0.0),
        Vec3f::new(-1.0, 0.0, 0.0),
        Vec3f::new(1.0, 0.2, -0.3).normalize(),
    ] {
        let ray = Ray::new(origin, dir, 12.0);
        let result = raycast(&world, &ray);
        assert!(!result.collision());
        assert_eq!(result.hit_cell, ray.end().floor_to_cell());
        assert_eq!(result.hit_chunk, None);
    }
}

#[test]
fn digging_down_through_reference_floor() {
    let mut world = build_world(&WorldPreset::Reference, Some(4)).unwrap();
    let down = Vec3f::new(0.0, -1.0, 0.0);
    let origin = Vec3f::new(5.5, 6.5, 5.5);

    let mut removed = Vec::new();
    for _ in 0..3 {
        let result = raycast(&world, &Ray::new(origin, down, 6.0));
        assert!(result.collision());
        remove_block(&mut world, &result).unwrap();
        removed.push(result.hit_cell.y);
    }
    assert_eq!(removed, vec![3, 2, 1]);
    assert_eq!(world.dirty_chunks().count(), 1);

    let result = raycast(&world, &Ray::new(origin, down, 6.0));
    assert_eq!(result.hit_cell, IVec3::new(5, 0, 5));
    remove_block(&mut world, &result).unwrap();

    let through = raycast(&world, &Ray::new(origin, down, 6.0));
    assert!(!through.collision());
    assert_eq!(
        remove_block(&mut world, &through),
        Err(InteractError::NoCollision)
    );
}

#[test]
fn sparse_chunk_hit_is_owned_by_sparse_chunk() {
    let world = build_world(&WorldPreset::Reference, None).unwrap();
    let sparse = world.find_chunk(ChunkCoord::new(-1, 0, -1));
    // (-16, 0, -16) is the first solid block of the sparse field.
    let result = raycast(
        &world,
        &Ray::new(Vec3f::new(-15.5, 2.5, -15.5), Vec3f::new(0.0, -1.0, 0.0), 3.0),
    );
    assert!(result.collision());
    assert_eq!(result.hit_chunk, sparse);
    assert!(world.is_occupied(result.hit_cell));
}
