pub mod loader;
pub mod permutation;
pub mod row;

pub use self::permutation::Permutation;
pub use self::row::Row;

use crate::error::{HeatsortError, HsResult};

/// A parsed heatmap: column labels plus named rows of equal dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    /// First header field. Carries no meaning, kept for writing back.
    pub corner: String,
    pub labels: Vec<String>,
    pub rows: Vec<Row>,
}

impl Heatmap {
    pub fn new(corner: impl Into<String>, labels: Vec<String>, rows: Vec<Row>) -> HsResult<Self> {
        if let Some(bad) = rows.iter().find(|r| r.dimension() != labels.len()) {
            return Err(HeatsortError::Config(format!(
                "Row '{}' has {} values but the header declares {} columns",
                bad.name(),
                bad.dimension(),
                labels.len()
            )));
        }
        Ok(Self {
            corner: corner.into(),
            labels,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.labels.len()
    }

    /// Identity arrangement over the rows, consuming the heatmap's row list.
    pub fn into_permutation(self) -> (HeatmapHeader, Permutation<Row>) {
        let header = HeatmapHeader {
            corner: self.corner,
            labels: self.labels,
        };
        (header, Permutation::from_rows(self.rows))
    }
}

/// The header line of a heatmap file.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapHeader {
    pub corner: String,
    pub labels: Vec<String>,
}
