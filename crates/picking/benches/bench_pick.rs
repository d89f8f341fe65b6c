use std::hint::black_box;
use std::time::Instant;

use cubepick_picking::{Ray, pick, pick_ray};
use cubepick_scene::{GridLayout, Scene};
use glam::{Mat4, Vec2, Vec3};

fn camera() -> Mat4 {
    let view = Mat4::look_at_rh(Vec3::new(10.0, 8.0, 12.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(75.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
    proj * view
}

fn make_scene(grid_size: u32) -> Scene {
    Scene::cube_grid(&GridLayout {
        grid_size,
        ..GridLayout::default()
    })
}

fn bench_pick_center(grid_size: u32, iterations: usize) {
    let scene = make_scene(grid_size);
    let vp = camera();

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(pick(black_box(Vec2::ZERO), &vp, black_box(&scene)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  pick center ({} objects, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}",
        scene.len()
    );
}

fn bench_pick_sweep(grid_size: u32, steps: usize) {
    let mut scene = make_scene(grid_size);
    scene.apply_idle_animation(1.0);
    let vp = camera();

    let start = Instant::now();
    let mut hits = 0usize;
    for iy in 0..steps {
        for ix in 0..steps {
            let ndc = Vec2::new(
                ix as f32 / steps as f32 * 2.0 - 1.0,
                1.0 - iy as f32 / steps as f32 * 2.0,
            );
            if pick(black_box(ndc), &vp, &scene).is_some() {
                hits += 1;
            }
        }
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / (steps * steps) as u32;
    println!(
        "  ndc sweep ({} objects, {steps}x{steps} rays, {hits} hits): {per_iter:?}/ray, total {elapsed:?}",
        scene.len()
    );
}

fn bench_ray_only(grid_size: u32, iterations: usize) {
    let scene = make_scene(grid_size);
    let ray = Ray::new(Vec3::new(10.0, 8.0, 12.0), -Vec3::new(10.0, 8.0, 12.0));

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(pick_ray(black_box(&ray), black_box(&scene)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  pick_ray ({} objects, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}",
        scene.len()
    );
}

fn main() {
    println!("=== Picking Benchmarks ===\n");

    println!("Center pick:");
    bench_pick_center(3, 100_000);
    bench_pick_center(10, 10_000);
    bench_pick_center(32, 1_000);

    println!("\nNDC sweep:");
    bench_pick_sweep(3, 200);
    bench_pick_sweep(10, 100);

    println!("\nPrecomputed ray:");
    bench_ray_only(3, 100_000);
    bench_ray_only(32, 1_000);

    println!("\n=== Done ===");
}
