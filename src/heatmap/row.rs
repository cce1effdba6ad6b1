use serde::{Deserialize, Serialize};

/// Default weight of the cross-dimension (diagonal) reward in [`Row::disagreement`].
pub const DEFAULT_DIAG_REWARD: f64 = 0.1;

/// A named, fixed-length numeric vector: one line of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    name: String,
    values: Vec<f64>,
}

impl Row {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Pairwise cost between two rows of equal dimension.
    ///
    /// The squared euclidean distance is penalized, while closeness to the
    /// other row's *neighboring* columns is rewarded with weight
    /// `diag_reward`, which favors diagonal banding in the rendered map.
    /// The reward can outweigh the distance, so the result may be negative.
    #[inline(always)]
    pub fn disagreement(&self, other: &Row, diag_reward: f64) -> f64 {
        debug_assert_eq!(self.dimension(), other.dimension());
        let a = &self.values;
        let b = &other.values;
        let dim = a.len().min(b.len());

        let mut direct = 0.0;
        let mut diagonal = 0.0;
        for i in 0..dim {
            let d = a[i] - b[i];
            direct += d * d;
            if i > 0 {
                let d = a[i] - b[i - 1];
                diagonal += d * d;
            }
            if i + 1 < dim {
                let d = a[i] - b[i + 1];
                diagonal += d * d;
            }
        }
        direct - diag_reward * diagonal
    }
}
