//! Narrowphase benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench narrowphase
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench narrowphase -- epa

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Quat, Vec3};
use rein_collision::{
    aabb_vs_aabb, epa, gjk_intersection, shape_vs_shape, sphere_vs_aabb, sphere_vs_sphere,
    support, Aabb, Collider, ConvexHull, GjkOutcome, NarrowphaseConfig, Shape, Sphere, Transform,
};

fn unit_sphere() -> Sphere {
    Sphere {
        center: Vec3::ZERO,
        radius: 1.0,
    }
}

fn unit_box() -> Aabb {
    Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0))
}

/// Points on a latitude/longitude grid over the unit sphere.
fn sphere_hull(rings: usize, segments: usize) -> ConvexHull {
    let mut points = vec![Vec3::Y, Vec3::NEG_Y];
    for ring in 1..rings {
        let theta = std::f32::consts::PI * ring as f32 / rings as f32;
        for segment in 0..segments {
            let phi = std::f32::consts::TAU * segment as f32 / segments as f32;
            points.push(Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            ));
        }
    }
    ConvexHull::new(points).expect("non-empty hull")
}

// ---------------------------------------------------------------------------
// Support
// ---------------------------------------------------------------------------

fn bench_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("support");
    let direction = Vec3::new(0.3, 0.8, -0.5);
    let transform = Transform::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::from_rotation_y(0.785),
        Vec3::new(1.0, 2.0, 0.5),
    );

    let sphere = unit_sphere();
    group.bench_function("sphere", |b| {
        b.iter(|| support(&sphere, Some(&transform), direction));
    });

    let aabb = unit_box();
    group.bench_function("aabb", |b| {
        b.iter(|| support(&aabb, Some(&transform), direction));
    });

    for &(rings, segments) in &[(4, 8), (8, 16), (16, 32)] {
        let hull = sphere_hull(rings, segments);
        group.bench_with_input(BenchmarkId::new("hull", hull.len()), &hull, |b, hull| {
            b.iter(|| support(hull, Some(&transform), direction));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// GJK / EPA
// ---------------------------------------------------------------------------

fn bench_gjk(c: &mut Criterion) {
    let mut group = c.benchmark_group("gjk");
    let config = NarrowphaseConfig::default();
    let aabb = unit_box();
    let hull = sphere_hull(8, 16);

    let tb_hit = Transform::from_translation(Vec3::new(1.5, 0.3, 0.0));
    let tb_miss = Transform::from_translation(Vec3::new(5.0, 0.0, 0.0));

    group.bench_function("box_box/intersecting", |b| {
        let (a, other) = (Collider::new(&aabb, None), Collider::new(&aabb, Some(&tb_hit)));
        b.iter(|| gjk_intersection(&a, &other, &config));
    });
    group.bench_function("box_box/separated", |b| {
        let (a, other) = (Collider::new(&aabb, None), Collider::new(&aabb, Some(&tb_miss)));
        b.iter(|| gjk_intersection(&a, &other, &config));
    });
    group.bench_function("hull_hull/intersecting", |b| {
        let (a, other) = (Collider::new(&hull, None), Collider::new(&hull, Some(&tb_hit)));
        b.iter(|| gjk_intersection(&a, &other, &config));
    });
    group.finish();
}

fn bench_epa(c: &mut Criterion) {
    let mut group = c.benchmark_group("epa");
    let config = NarrowphaseConfig::default();
    let aabb = unit_box();
    let sphere = unit_sphere();
    let tb = Transform::from_translation(Vec3::new(1.5, 0.3, 0.0));

    let box_box = (Collider::new(&aabb, None), Collider::new(&aabb, Some(&tb)));
    let sphere_box = (Collider::new(&sphere, None), Collider::new(&aabb, Some(&tb)));

    for (name, (a, b)) in [("box_box", box_box), ("sphere_box", sphere_box)] {
        let GjkOutcome::EnclosesOrigin(tetrahedron) = gjk_intersection(&a, &b, &config) else {
            panic!("{name}: benchmark shapes must intersect");
        };
        group.bench_function(name, |bencher| {
            bencher.iter(|| epa(&tetrahedron, &a, &b));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Pair facade
// ---------------------------------------------------------------------------

fn bench_facade(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("facade/sphere_sphere");
        let sphere = unit_sphere();

        let tb_hit = Transform::from_translation(Vec3::new(1.5, 0.0, 0.0));
        group.bench_function("intersecting", |b| {
            b.iter(|| sphere_vs_sphere(&sphere, None, &sphere, Some(&tb_hit), true));
        });

        let tb_miss = Transform::from_translation(Vec3::new(5.0, 0.0, 0.0));
        group.bench_function("separated", |b| {
            b.iter(|| sphere_vs_sphere(&sphere, None, &sphere, Some(&tb_miss), true));
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("facade/box_box");
        let aabb = unit_box();
        let tb_hit = Transform::from_translation(Vec3::new(1.5, 0.0, 0.0));

        group.bench_function("hit_only", |b| {
            b.iter(|| aabb_vs_aabb(&aabb, None, &aabb, Some(&tb_hit), false));
        });
        group.bench_function("with_contact", |b| {
            b.iter(|| aabb_vs_aabb(&aabb, None, &aabb, Some(&tb_hit), true));
        });

        let tb_rot = Transform::from_translation_rotation(
            Vec3::new(1.5, 0.0, 0.0),
            Quat::from_rotation_y(0.785),
        );
        group.bench_function("rotated", |b| {
            b.iter(|| aabb_vs_aabb(&aabb, None, &aabb, Some(&tb_rot), true));
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("facade/sphere_box");
        let sphere = unit_sphere();
        let aabb = unit_box();
        let ts = Transform::from_translation(Vec3::new(1.5, 0.0, 0.0));
        group.bench_function("with_contact", |b| {
            b.iter(|| sphere_vs_aabb(&sphere, Some(&ts), &aabb, None, true));
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("facade/batch");
        for &n in &[100usize, 500, 1000] {
            let shapes = [
                Shape::from(unit_sphere()),
                Shape::from(unit_box()),
                Shape::from(sphere_hull(4, 8)),
            ];
            let pairs: Vec<_> = (0..n)
                .map(|i| {
                    let x = (i as f32) * 3.0;
                    let ta = Transform::from_translation(Vec3::new(x, 0.0, 0.0));
                    let tb = Transform::from_translation(Vec3::new(x + 1.5, 0.2, 0.0));
                    (shapes[i % 3].clone(), ta, shapes[(i / 3) % 3].clone(), tb)
                })
                .collect();

            group.bench_with_input(BenchmarkId::from_parameter(n), &pairs, |b, pairs| {
                b.iter(|| {
                    for (sa, ta, sb, tb) in pairs {
                        shape_vs_shape(sa, Some(ta), sb, Some(tb), true);
                    }
                });
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_support, bench_gjk, bench_epa, bench_facade);
criterion_main!(benches);
