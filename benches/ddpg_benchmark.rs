//! Throughput of policy inference and of one DDPG training step

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array1;
use podracer::builders::AgentBuilder;
use podracer::DdpgAgent;

fn warmed_agent(hidden_dim: usize, batch_size: usize) -> DdpgAgent {
    let mut agent = AgentBuilder::new(5, 3)
        .hidden_dim(hidden_dim)
        .buffer_size(500)
        .batch_size(batch_size)
        .seed(0)
        .build()
        .unwrap();

    for t in 0..499 {
        let state = Array1::from_elem(5, (t as f32 * 0.01).sin());
        let action = agent.forward(state.view()).unwrap();
        agent
            .learn(state.view(), action.view(), 0.0, state.view(), batch_size)
            .unwrap();
    }
    agent
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("actor_forward");
    for hidden_dim in [16, 64, 256] {
        let mut agent = warmed_agent(hidden_dim, 100);
        let state = Array1::from_elem(5, 0.3);
        group.bench_with_input(BenchmarkId::from_parameter(hidden_dim), &hidden_dim, |b, _| {
            b.iter(|| agent.forward(black_box(state.view())).unwrap())
        });
    }
    group.finish();
}

fn bench_training_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("training_step");
    for batch_size in [32, 100, 250] {
        let mut agent = warmed_agent(32, batch_size);
        let state = Array1::from_elem(5, 0.3);
        group.bench_with_input(BenchmarkId::from_parameter(batch_size), &batch_size, |b, &batch_size| {
            b.iter(|| {
                let action = agent.forward(state.view()).unwrap();
                agent
                    .learn(state.view(), action.view(), 1.0, state.view(), batch_size)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_training_step);
criterion_main!(benches);
