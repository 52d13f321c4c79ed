//! Letter grade thresholds.
//!
//! # Invariants
//! - Thresholds are inclusive lower bounds evaluated in descending order.
//! - The mapping is total: every finite score maps to a grade.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Letter grade for one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Maps a numeric score to its letter grade.
    ///
    /// `>= 70` A, `>= 60` B, `>= 50` C, `>= 40` D, otherwise F.
    pub fn for_marks(marks: f64) -> Self {
        if marks >= 70.0 {
            Self::A
        } else if marks >= 60.0 {
            Self::B
        } else if marks >= 50.0 {
            Self::C
        } else if marks >= 40.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Letter as a static string, for storage-free formatting.
    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}
