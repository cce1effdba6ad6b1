pub mod arrange;
pub mod score;
