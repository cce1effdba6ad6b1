use super::{ScoreDetails, Scorer};
use crate::heatmap::{Permutation, Row};

/// Sum of `decay^(j-1) * disagreement(i, i + j)` over all `i` and
/// `1 <= j < window`, negated so that higher is better.
pub fn score_full(scorer: &Scorer, rows: &Permutation<Row>) -> f64 {
    let backing = rows.backing();
    let index = rows.index();
    let n = index.len();
    let reach = scorer.window - 1;

    let mut total = 0.0;
    for i in 0..n {
        let a = &backing[index[i]];
        let mut weight = 1.0 / scorer.decay;
        for j in 1..=reach.min(n - 1 - i) {
            weight *= scorer.decay;
            total += weight * a.disagreement(&backing[index[i + j]], scorer.diag_reward);
        }
    }
    -total
}

pub fn score_details(scorer: &Scorer, rows: &Permutation<Row>) -> ScoreDetails {
    let mut d = ScoreDetails {
        score: score_full(scorer, rows),
        rows: rows.len(),
        window: scorer.window,
        worst_pair_cost: f64::NEG_INFINITY,
        ..Default::default()
    };

    let n = rows.len();
    for i in 0..n {
        d.pairs += (scorer.window - 1).min(n - 1 - i);
    }

    let ordered: Vec<&Row> = rows.iter().collect();
    for pair in ordered.windows(2) {
        let cost = pair[0].disagreement(pair[1], scorer.diag_reward);
        d.adjacent_total += cost;
        if cost > d.worst_pair_cost {
            d.worst_pair_cost = cost;
            d.worst_pair = Some((pair[0].name().to_string(), pair[1].name().to_string()));
        }
    }

    if n > 1 {
        d.adjacent_mean = d.adjacent_total / (n - 1) as f64;
    } else {
        d.worst_pair_cost = 0.0;
    }
    d
}
