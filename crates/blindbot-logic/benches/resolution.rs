use blindbot_logic::{Cell, Clause, KnowledgeBase, Literal};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Knowledge of the kind the agent accumulates: a field of pit-free cells
/// plus a handful of "one of my neighbours is a pit" disjunctions.
fn explored_kb(width: i32, height: i32) -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 5 == 0 {
                let c = Cell::new(x, y);
                kb.tell(Clause::new([
                    Literal::pit(c.offset(1, 0), true),
                    Literal::pit(c.offset(0, 1), true),
                ]));
            } else {
                kb.tell(Clause::unit(Literal::pit(Cell::new(x, y), false)));
            }
        }
    }
    kb
}

fn bench_ask(c: &mut Criterion) {
    let kb = explored_kb(12, 12);
    let entailed = Clause::unit(Literal::pit(Cell::new(3, 3), false));
    let open = Clause::unit(Literal::pit(Cell::new(5, 6), true));

    let mut group = c.benchmark_group("blindbot-logic/ask");

    group.bench_function("entailed_unit", |b| {
        b.iter(|| black_box(kb.ask(&entailed)));
    });

    group.bench_function("saturate_open_query", |b| {
        b.iter(|| black_box(kb.ask(&open)));
    });

    group.finish();
}

criterion_group!(benches, bench_ask);
criterion_main!(benches);
