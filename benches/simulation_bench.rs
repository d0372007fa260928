use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vectorverse::{
    simulation::ObjectSpawner, IntegrationMethod, PhysicsEngine, Vec2,
};

// --- Helper for filling a ball pit --- //
fn fill_ball_pit(engine: &mut PhysicsEngine, num_circles: usize) {
    let mut spawner = ObjectSpawner::from_seed(1);
    let per_row = 30;
    for i in 0..num_circles {
        let x = 30.0 + (i % per_row) as f64 * 41.0;
        let y = 30.0 + (i / per_row) as f64 * 41.0;
        engine.add_object(spawner.spawn(Vec2::new(x, y), 10.0, Vec2::new(50.0, 0.0)));
    }
}

fn run_steps(engine: &mut PhysicsEngine, steps: usize) {
    let dt = 1.0 / 60.0;
    for _ in 0..steps {
        engine.update(black_box(dt));
        engine.handle_boundary_collisions(1280.0, 720.0);
    }
}

// Brute-force all-pairs collisions under gravity
fn bench_ball_pit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ball_pit");

    for num_circles in [10, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_circles), num_circles, |b, &n| {
            b.iter(|| {
                let mut engine = PhysicsEngine::new();
                fill_ball_pit(&mut engine, black_box(n));
                run_steps(&mut engine, 30);
            });
        });
    }
    group.finish();
}

// Integration cost alone, no contacts
fn bench_integrators(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrators");

    for method in IntegrationMethod::ALL {
        group.bench_function(method.name(), |b| {
            b.iter(|| {
                let mut engine = PhysicsEngine::new();
                engine.collisions_enabled = false;
                engine.set_integration_method(method);
                fill_ball_pit(&mut engine, 500);
                run_steps(&mut engine, 30);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ball_pit, bench_integrators);
criterion_main!(benches);
