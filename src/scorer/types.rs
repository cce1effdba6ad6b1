use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct ScoreDetails {
    /// The search objective (negated weighted disagreement).
    pub score: f64,

    pub rows: usize,
    pub window: usize,
    /// Number of row pairs inside the window.
    pub pairs: usize,

    /// Disagreement summed over directly adjacent rows only.
    pub adjacent_total: f64,
    /// Mean disagreement between adjacent rows.
    pub adjacent_mean: f64,

    /// Adjacent pair with the highest disagreement, by row name.
    pub worst_pair: Option<(String, String)>,
    pub worst_pair_cost: f64,
}
