#![allow(dead_code)]

use heatsort::config::ScoringWeights;
use heatsort::heatmap::{Permutation, Row};
use heatsort::scorer::Scorer;

pub fn row(name: &str, values: &[f64]) -> Row {
    Row::new(name, values.to_vec())
}

/// Two low rows and two high rows, each pair nearly identical.
pub fn abcd_rows() -> Vec<Row> {
    vec![
        row("A", &[0.0, 0.0, 0.0]),
        row("B", &[10.0, 10.0, 10.0]),
        row("C", &[0.0, 0.0, 1.0]),
        row("D", &[10.0, 10.0, 9.0]),
    ]
}

/// Deterministic pseudo-random rows.
pub fn random_rows(seed: u64, n: usize, dim: usize) -> Vec<Row> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..n)
        .map(|i| {
            let values = (0..dim).map(|_| rng.f64() * 20.0 - 10.0).collect();
            Row::new(format!("r{}", i), values)
        })
        .collect()
}

pub fn scorer(window: usize) -> Scorer {
    Scorer::new(&ScoringWeights::default(), window).unwrap()
}

pub fn names(p: &Permutation<Row>) -> Vec<String> {
    p.iter().map(|r| r.name().to_string()).collect()
}

/// Best score over every ordering of `rows`, by exhaustive search.
pub fn brute_force_best(rows: &[Row], scorer: &Scorer) -> (f64, Vec<String>) {
    let base = Permutation::from_rows(rows.to_vec());
    let n = rows.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut best = (f64::NEG_INFINITY, Vec::new());
    permute(&mut order, 0, &mut |o| {
        let p: Permutation<Row> = o.iter().map(|&i| base.get(i).unwrap().clone()).collect();
        let s = scorer.score(&p);
        if s > best.0 {
            best = (s, names(&p));
        }
    });
    best
}

fn permute(order: &mut Vec<usize>, k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k == order.len() {
        visit(order);
        return;
    }
    for i in k..order.len() {
        order.swap(k, i);
        permute(order, k + 1, visit);
        order.swap(k, i);
    }
}

/// True when `a` and `b` sit next to each other in `order`.
pub fn adjacent(order: &[String], a: &str, b: &str) -> bool {
    order
        .windows(2)
        .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
}
