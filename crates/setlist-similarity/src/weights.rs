//! Component weights for the overall similarity score.
//!
//! The analyzer always holds a normalized copy: every assignment divides each
//! weight by the sum of all five, so the weights sum to 1.0 whatever raw
//! values were supplied.

use serde::{Deserialize, Serialize};

use setlist_core::defaults::{
    WEIGHT_DEVICE, WEIGHT_FEATURE, WEIGHT_PLUGIN, WEIGHT_STRUCTURAL, WEIGHT_TEMPO,
};
use setlist_core::{parse_f64_env, Error, Result};

/// One of the five similarity components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityComponent {
    Feature,
    Plugin,
    Device,
    Tempo,
    Structural,
}

impl SimilarityComponent {
    pub const ALL: [SimilarityComponent; 5] = [
        Self::Feature,
        Self::Plugin,
        Self::Device,
        Self::Tempo,
        Self::Structural,
    ];

    /// Environment variable that overrides this component's weight.
    pub fn env_key(self) -> &'static str {
        match self {
            Self::Feature => "SETLIST_WEIGHT_FEATURE",
            Self::Plugin => "SETLIST_WEIGHT_PLUGIN",
            Self::Device => "SETLIST_WEIGHT_DEVICE",
            Self::Tempo => "SETLIST_WEIGHT_TEMPO",
            Self::Structural => "SETLIST_WEIGHT_STRUCTURAL",
        }
    }
}

impl std::fmt::Display for SimilarityComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feature => write!(f, "feature"),
            Self::Plugin => write!(f, "plugin"),
            Self::Device => write!(f, "device"),
            Self::Tempo => write!(f, "tempo"),
            Self::Structural => write!(f, "structural"),
        }
    }
}

impl std::str::FromStr for SimilarityComponent {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feature" => Ok(Self::Feature),
            "plugin" => Ok(Self::Plugin),
            "device" => Ok(Self::Device),
            "tempo" => Ok(Self::Tempo),
            "structural" => Ok(Self::Structural),
            _ => Err(format!("Invalid similarity component: {}", s)),
        }
    }
}

/// Weight per similarity component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    pub feature: f64,
    pub plugin: f64,
    pub device: f64,
    pub tempo: f64,
    pub structural: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            feature: WEIGHT_FEATURE,
            plugin: WEIGHT_PLUGIN,
            device: WEIGHT_DEVICE,
            tempo: WEIGHT_TEMPO,
            structural: WEIGHT_STRUCTURAL,
        }
    }
}

impl SimilarityWeights {
    /// Same raw weight for every component.
    pub fn uniform(weight: f64) -> Self {
        Self {
            feature: weight,
            plugin: weight,
            device: weight,
            tempo: weight,
            structural: weight,
        }
    }

    /// Default weights with environment overrides applied.
    ///
    /// Environment variables (unset = default):
    /// - `SETLIST_WEIGHT_FEATURE` (default: 0.35)
    /// - `SETLIST_WEIGHT_PLUGIN` (default: 0.20)
    /// - `SETLIST_WEIGHT_DEVICE` (default: 0.15)
    /// - `SETLIST_WEIGHT_TEMPO` (default: 0.15)
    /// - `SETLIST_WEIGHT_STRUCTURAL` (default: 0.15)
    ///
    /// The result is raw; the analyzer normalizes it on assignment.
    pub fn from_env() -> Result<Self> {
        let mut weights = Self::default();
        for component in SimilarityComponent::ALL {
            if let Some(value) = parse_f64_env(component.env_key())? {
                weights.set(component, value);
            }
        }
        Ok(weights)
    }

    pub fn get(&self, component: SimilarityComponent) -> f64 {
        match component {
            SimilarityComponent::Feature => self.feature,
            SimilarityComponent::Plugin => self.plugin,
            SimilarityComponent::Device => self.device,
            SimilarityComponent::Tempo => self.tempo,
            SimilarityComponent::Structural => self.structural,
        }
    }

    pub fn set(&mut self, component: SimilarityComponent, value: f64) {
        match component {
            SimilarityComponent::Feature => self.feature = value,
            SimilarityComponent::Plugin => self.plugin = value,
            SimilarityComponent::Device => self.device = value,
            SimilarityComponent::Tempo => self.tempo = value,
            SimilarityComponent::Structural => self.structural = value,
        }
    }

    /// Overwrite the given components, leaving the others untouched.
    pub fn merge<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (SimilarityComponent, f64)>,
    {
        for (component, value) in overrides {
            self.set(component, value);
        }
    }

    pub fn total(&self) -> f64 {
        SimilarityComponent::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Divide every weight by the total so they sum to 1.0.
    ///
    /// Fails when a weight is negative or non-finite, or when all are zero.
    pub fn normalized(&self) -> Result<Self> {
        for component in SimilarityComponent::ALL {
            let value = self.get(component);
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidWeights(format!(
                    "{} weight must be a finite non-negative number, got {}",
                    component, value
                )));
            }
        }

        let total = self.total();
        if total <= 0.0 {
            return Err(Error::InvalidWeights(
                "weights must not all be zero".to_string(),
            ));
        }

        let mut normalized = *self;
        for component in SimilarityComponent::ALL {
            normalized.set(component, self.get(component) / total);
        }
        Ok(normalized)
    }
}
