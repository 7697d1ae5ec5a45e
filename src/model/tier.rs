use serde::{Deserialize, Serialize};

/// A rewards level, reached once a balance meets `min_points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Ordinal, 1 for the entry tier.
    pub level: u32,
    pub name: String,
    pub min_points: u64,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Display color as a hex string, e.g. `"#CD7F32"`.
    pub color: String,
}

impl Tier {
    pub fn new(level: u32, name: impl Into<String>, min_points: u64, color: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
            min_points,
            benefits: Vec::new(),
            color: color.into(),
        }
    }

    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }
}
