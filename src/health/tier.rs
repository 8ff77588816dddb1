use std::fmt::{Display, Formatter};

/// Presentation band for a failure-risk score, higher is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    Nominal,
    Caution,
    Warning,
    Critical,
}

impl HealthTier {
    pub fn from_score(score: f64) -> Self {
        if score < 0.3 {
            HealthTier::Nominal
        } else if score < 0.5 {
            HealthTier::Caution
        } else if score < 0.8 {
            HealthTier::Warning
        } else {
            HealthTier::Critical
        }
    }
}

impl Display for HealthTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HealthTier::Nominal => "nominal",
            HealthTier::Caution => "caution",
            HealthTier::Warning => "warning",
            HealthTier::Critical => "critical",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Normal,
    Elevated,
    High,
}

impl TemperatureBand {
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature < 45.0 {
            TemperatureBand::Normal
        } else if temperature < 60.0 {
            TemperatureBand::Elevated
        } else {
            TemperatureBand::High
        }
    }
}

impl Display for TemperatureBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            TemperatureBand::Normal => "Normal operating temperature",
            TemperatureBand::Elevated => "Elevated temperature",
            TemperatureBand::High => "High temperature warning",
        };
        f.write_str(description)
    }
}
