use super::SequenceSource;
use anyhow::Result;
use async_trait::async_trait;

/// Values already held in memory, e.g. given on the command line.
pub struct InlineSource {
    values: Vec<i64>,
}

impl InlineSource {
    /// Input used when the caller supplies nothing.
    pub const EXAMPLE: [i64; 6] = [1, 4, 20, 3, 10, 5];

    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn example() -> Self {
        Self::new(Self::EXAMPLE.to_vec())
    }
}

#[async_trait]
impl SequenceSource for InlineSource {
    async fn read_sequence(&self) -> Result<Vec<i64>> {
        Ok(self.values.clone())
    }

    fn describe(&self) -> String {
        format!("{} inline value(s)", self.values.len())
    }
}
