use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_pursuit::{Algorithm, Area, Coord, EntityKind};
use rand::{rngs::StdRng, Rng, SeedableRng};

const N: usize = 32;
const N_SCENARIOS: usize = 20;

/// Seeded scattered-wall grid with guaranteed-open scenario endpoints.
fn scattered_area(rng: &mut StdRng) -> (Area, Vec<(Coord, Coord)>) {
    let mut area = Area::new(N, N);
    for y in 0..N as i32 {
        for x in 0..N as i32 {
            if rng.gen_bool(0.3) {
                area.add_entity(Coord::new(x, y), EntityKind::Wall).unwrap();
            }
        }
    }
    let mut scenarios = Vec::with_capacity(N_SCENARIOS);
    for _ in 0..N_SCENARIOS {
        let start = Coord::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Coord::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        area.delete_entity(start);
        area.delete_entity(end);
        scenarios.push((start, end));
    }
    area.update();
    (area, scenarios)
}

fn algorithm_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let (area, scenarios) = scattered_area(&mut rng);
    for algorithm in Algorithm::ALL {
        for allow_diagonals in [false, true] {
            let diag_str = if allow_diagonals { "8-grid" } else { "4-grid" };
            let name = format!("{}, {diag_str}", algorithm.label());
            c.bench_function(&name, |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(algorithm.find_path(&area, *start, *end, allow_diagonals));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, algorithm_bench);
criterion_main!(benches);
