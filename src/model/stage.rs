//! The five analytical stages of the correlation model.

use serde::{Deserialize, Serialize};

/// Processing stage at which a node or edge entered the correlation model.
///
/// The stages are ordered: direct biological correlation first, quantum
/// composite effects last. `Ord` follows that progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Direct biological correlation.
    Stage1Direct,
    /// Indirect correlation through comorbidities.
    Stage2Indirect,
    /// Systemic socioeconomic factors.
    Stage3Systemic,
    /// Environmental transmission factors.
    Stage4Environmental,
    /// Quantum-composite entanglement effects.
    Stage5Quantum,
}

impl Stage {
    /// All stages in analytical order.
    pub const ALL: [Stage; 5] = [
        Stage::Stage1Direct,
        Stage::Stage2Indirect,
        Stage::Stage3Systemic,
        Stage::Stage4Environmental,
        Stage::Stage5Quantum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Stage1Direct => "Stage1Direct",
            Stage::Stage2Indirect => "Stage2Indirect",
            Stage::Stage3Systemic => "Stage3Systemic",
            Stage::Stage4Environmental => "Stage4Environmental",
            Stage::Stage5Quantum => "Stage5Quantum",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
