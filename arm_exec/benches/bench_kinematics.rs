//! # Kinematics Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arm_lib::kinematics::{forward_kinematics, inverse_kinematics, JointAngles, Point2D};

fn kinematics_benchmark(c: &mut Criterion) {
    let base = Point2D::new(5.0, 0.0);
    let lengths = [3.0, 2.0];

    // Targets spread over the reachable annulus
    let targets: Vec<Point2D> = (0..64)
        .map(|i| {
            let theta = (i as f64) * std::f64::consts::PI / 64.0;
            let radius = 1.5 + 3.0 * ((i % 8) as f64) / 8.0;
            Point2D::new(base.x + radius * theta.cos(), base.y + radius * theta.sin())
        })
        .collect();

    c.bench_function("inverse_kinematics", |b| {
        b.iter(|| {
            for t in targets.iter() {
                black_box(inverse_kinematics(&base, &lengths, black_box(t)).ok());
            }
        })
    });

    let angles = JointAngles::new(0.7, 1.9);

    c.bench_function("forward_kinematics", |b| {
        b.iter(|| forward_kinematics(&base, &lengths, black_box(&angles)))
    });
}

criterion_group!(benches, kinematics_benchmark);
criterion_main!(benches);
