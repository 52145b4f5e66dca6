use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bitga::{
    breeding::Reproduction,
    options::TuningParameters,
    rng::RandomNumberGenerator,
    solution::Solution,
    solver::GaSolver,
    Challenge,
};

fn count_ones(bits: &[bool]) -> f64 {
    bits.iter().filter(|bit| **bit).count() as f64
}

fn bench_procreate(c: &mut Criterion) {
    let reproduction = Reproduction::new(0.9, 0.05);
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut group = c.benchmark_group("procreate");
    for size in [16, 128, 1024].iter() {
        let first = Solution::evaluate(vec![true; *size], &count_ones).unwrap();
        let second = Solution::evaluate(vec![false; *size], &count_ones).unwrap();

        group.bench_function(&format!("procreate_{}", size), |b| {
            b.iter(|| {
                let result = reproduction.procreate(
                    black_box([&first, &second]),
                    black_box(2),
                    &count_ones,
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for size in [10, 50, 200].iter() {
        let parameters = TuningParameters::builder()
            .number_of_generations(50)
            .population_size(*size as f64)
            .elitism(2)
            .tournament_round_size(3)
            .probability_of_crossover(0.9)
            .probability_of_mutation(0.05)
            .build();

        group.bench_function(&format!("solve_population_{}", size), |b| {
            b.iter(|| {
                let mut solver = GaSolver::with_seed(32, count_ones, parameters, 7).unwrap();
                black_box(solver.solve().unwrap());
            })
        });

        group.bench_function(&format!("solve_population_{}_cached", size), |b| {
            b.iter(|| {
                let challenge = (|bits: &[bool]| count_ones(bits)).with_cache();
                let mut solver = GaSolver::with_seed(32, challenge, parameters, 7).unwrap();
                black_box(solver.solve().unwrap());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_procreate, bench_solve);
criterion_main!(benches);
