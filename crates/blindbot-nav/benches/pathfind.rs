use blindbot_nav::{Cell, GridPathfinder, Mark, Overlay, Pathfinder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn serpentine(width: u32, height: u32) -> Overlay {
    let mut o = Overlay::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let mark = if x % 4 == 2 && (y != 0 && y != height as i32 - 1) {
                Mark::Wall
            } else if (x + y) % 3 == 0 {
                Mark::Safe
            } else {
                Mark::Unknown
            };
            o.set(Cell::new(x, y), mark);
        }
    }
    o
}

fn bench_pathfind(c: &mut Criterion) {
    let overlay = serpentine(64, 64);
    let start = Cell::new(0, 0);
    let goal = Cell::new(63, 63);
    let pf = GridPathfinder::default();

    let mut group = c.benchmark_group("blindbot-nav/grid");
    group.bench_function("a_star_64x64", |b| {
        b.iter(|| {
            let route = pf.pathfind(&overlay, start, goal).expect("route");
            black_box(route.len());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_pathfind);
criterion_main!(benches);
