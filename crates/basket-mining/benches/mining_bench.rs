use basket_core::models::{FrequentItemset, ItemSet, ItemsetTable};
use basket_mining::derive_rules;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Complete lattice over `n` items, the worst case for split enumeration.
fn full_lattice(n: usize) -> ItemsetTable {
    let names: Vec<String> = (0..n).map(|i| format!("Item{i:02}")).collect();
    let mut itemsets = Vec::new();
    for mask in 1usize..(1 << n) {
        let members: Vec<String> = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| names[i].clone())
            .collect();
        let support = 0.8f64.powi(members.len() as i32);
        itemsets.push(FrequentItemset {
            itemset: ItemSet::new(members),
            support,
        });
    }
    ItemsetTable { itemsets }
}

fn bench_derive(c: &mut Criterion) {
    let table = full_lattice(10);
    c.bench_function("derive_rules/10-item lattice", |b| {
        b.iter(|| derive_rules(black_box(&table), 0.1).unwrap())
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
