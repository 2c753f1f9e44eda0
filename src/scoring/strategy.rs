//! Named weight presets for the priority score.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relative influence of each factor. Presets sum to 1.0, but nothing
/// enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl Weights {
    pub const fn new(urgency: f64, importance: f64, effort: f64, dependency: f64) -> Self {
        Self {
            urgency,
            importance,
            effort,
            dependency,
        }
    }

    pub fn sum(&self) -> f64 {
        self.urgency + self.importance + self.effort + self.dependency
    }
}

/// Scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Exact lookup by name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Lookup by name. Unknown names fall back to [`Strategy::SmartBalance`]
    /// without error.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    pub const fn weights(self) -> Weights {
        match self {
            Strategy::FastestWins => Weights::new(0.2, 0.3, 0.4, 0.1),
            Strategy::HighImpact => Weights::new(0.2, 0.6, 0.1, 0.1),
            Strategy::DeadlineDriven => Weights::new(0.6, 0.2, 0.1, 0.1),
            Strategy::SmartBalance => Weights::new(0.35, 0.35, 0.2, 0.1),
        }
    }
}

impl From<&str> for Strategy {
    fn from(name: &str) -> Self {
        Strategy::from_name(name)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
