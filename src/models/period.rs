//! Monthly periods and their list-page targets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (year, month) adjudication period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Human-readable label, e.g. "2019년 3월".
    pub fn label(&self) -> String {
        format!("{}년 {}월", self.year, self.month)
    }

    /// Relative directory for the period's documents, e.g. "2019/03".
    pub fn dir_key(&self) -> String {
        format!("{}/{:02}", self.year, self.month)
    }

    /// File name of the period index, e.g. "INDEX_2019_03.md".
    pub fn index_filename(&self) -> String {
        format!("INDEX_{}_{:02}.md", self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// A configured monthly list page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetPeriod {
    pub year: i32,
    pub month: u32,

    /// Absolute URL of the list page for this month
    pub url: String,
}

impl TargetPeriod {
    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_keys() {
        let period = Period::new(2019, 3);
        assert_eq!(period.label(), "2019년 3월");
        assert_eq!(period.dir_key(), "2019/03");
        assert_eq!(period.index_filename(), "INDEX_2019_03.md");
        assert_eq!(period.to_string(), "2019-03");
    }
}
