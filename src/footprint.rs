//! Carbon Footprint Estimator
//!
//! Maps a handful of lifestyle quantities to per-category CO₂ contributions
//! plus monthly and yearly aggregates.
//!
//! Transport and electricity inputs are monthly-scaled, waste and diet are
//! weekly quantities; all four are summed unconverted into `total_monthly`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Emission Factors
// ============================================================================

/// kg CO₂ per kWh of electricity
pub const ELECTRICITY_FACTOR: f64 = 0.5;

/// kg CO₂ per kg of household waste
pub const WASTE_FACTOR: f64 = 0.3;

/// kg CO₂ per kg of meat eaten
pub const DIET_FACTOR: f64 = 2.5;

/// Yearly footprint (tons) above which the status reads "above average"
pub const STATUS_THRESHOLD_TONS: f64 = 10.0;

/// How the visitor commutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Car,
    Bus,
    Train,
    Bicycle,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Bicycle,
    ];

    /// kg CO₂ per km travelled
    pub fn emission_factor(&self) -> f64 {
        match self {
            TransportMode::Car => 0.2,
            TransportMode::Bus => 0.08,
            TransportMode::Train => 0.04,
            TransportMode::Bicycle => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Bicycle => "bicycle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Bus => "Bus",
            TransportMode::Train => "Train",
            TransportMode::Bicycle => "Bicycle",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode '{0}' (expected car, bus, train or bicycle)")]
pub struct UnknownTransportMode(pub String);

impl FromStr for TransportMode {
    type Err = UnknownTransportMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(TransportMode::Car),
            "bus" => Ok(TransportMode::Bus),
            "train" => Ok(TransportMode::Train),
            "bicycle" => Ok(TransportMode::Bicycle),
            _ => Err(UnknownTransportMode(s.to_string())),
        }
    }
}

// ============================================================================
// Input / Output
// ============================================================================

/// Lifestyle quantities entered on the calculator
///
/// Missing fields deserialize as zero (and `car`). Negative values are not
/// rejected here; the form only hints at a minimum of 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FootprintInput {
    pub daily_distance_km: f64,
    pub transport_mode: TransportMode,
    pub monthly_electricity_kwh: f64,
    pub weekly_waste_kg: f64,
    pub weekly_meat_kg: f64,
}

/// Per-category contributions in kg CO₂
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FootprintBreakdown {
    pub transport: f64,
    pub electricity: f64,
    pub waste: f64,
    pub diet: f64,
}

impl FootprintBreakdown {
    /// Contributions in display order, paired with their category
    pub fn categories(&self) -> [(FootprintCategory, f64); 4] {
        [
            (FootprintCategory::Transport, self.transport),
            (FootprintCategory::Electricity, self.electricity),
            (FootprintCategory::Waste, self.waste),
            (FootprintCategory::Diet, self.diet),
        ]
    }

    pub fn total(&self) -> f64 {
        self.transport + self.electricity + self.waste + self.diet
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootprintCategory {
    Transport,
    Electricity,
    Waste,
    Diet,
}

impl FootprintCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FootprintCategory::Transport => "Transport",
            FootprintCategory::Electricity => "Electricity",
            FootprintCategory::Waste => "Waste",
            FootprintCategory::Diet => "Diet",
        }
    }
}

/// Result of a single estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub breakdown: FootprintBreakdown,
    pub total_monthly: f64,
    pub yearly_tons: f64,
}

impl FootprintResult {
    pub fn status(&self) -> FootprintStatus {
        status(self.yearly_tons)
    }
}

/// Estimate the footprint for one set of inputs.
pub fn estimate(input: &FootprintInput) -> FootprintResult {
    let breakdown = FootprintBreakdown {
        transport: input.daily_distance_km * input.transport_mode.emission_factor(),
        electricity: input.monthly_electricity_kwh * ELECTRICITY_FACTOR,
        waste: input.weekly_waste_kg * WASTE_FACTOR,
        diet: input.weekly_meat_kg * DIET_FACTOR,
    };
    let total_monthly = breakdown.total();
    let yearly_tons = total_monthly * 12.0 / 1000.0;

    FootprintResult {
        breakdown,
        total_monthly,
        yearly_tons,
    }
}

// ============================================================================
// Status Message
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintStatus {
    AboveAverage,
    BelowAverage,
}

impl FootprintStatus {
    pub fn message(&self) -> &'static str {
        match self {
            FootprintStatus::AboveAverage => {
                "Your carbon footprint is above average. Consider our recommendations below."
            }
            FootprintStatus::BelowAverage => {
                "Great job! Your footprint is below average. Check out ways to reduce it further."
            }
        }
    }
}

/// Strictly above the threshold counts as above average.
pub fn status(yearly_tons: f64) -> FootprintStatus {
    if yearly_tons > STATUS_THRESHOLD_TONS {
        FootprintStatus::AboveAverage
    } else {
        FootprintStatus::BelowAverage
    }
}

// ============================================================================
// Recommendations
// ============================================================================

/// A renewable-energy suggestion shown under the results
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    /// Icon token: "sun", "car", "home", "wind"
    pub icon: &'static str,
    pub action: &'static str,
    pub impact: &'static str,
    pub href: &'static str,
}

const RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        title: "Solar Energy",
        description: "Installing solar panels could reduce your electricity footprint by up to 80%",
        icon: "sun",
        action: "Learn more about solar installation",
        impact: "Potential saving: 2-3 tons CO₂/year",
        href: "/solutions/solar",
    },
    Recommendation {
        title: "Electric Vehicle",
        description: "Switching to an electric vehicle can reduce transport emissions by 50%",
        icon: "car",
        action: "Explore EV options",
        impact: "Potential saving: 2.5 tons CO₂/year",
        href: "/resources",
    },
    Recommendation {
        title: "Smart Home Systems",
        description: "Smart thermostats and energy monitoring can optimize consumption",
        icon: "home",
        action: "Discover smart home solutions",
        impact: "Potential saving: 0.8 tons CO₂/year",
        href: "/resources",
    },
    Recommendation {
        title: "Wind Energy",
        description: "Consider community wind energy projects or green energy providers",
        icon: "wind",
        action: "Find green energy providers",
        impact: "Potential saving: 1.5 tons CO₂/year",
        href: "/solutions/wind",
    },
];

/// The full recommendation list. Not filtered by the computed footprint.
pub fn recommendations() -> &'static [Recommendation] {
    &RECOMMENDATIONS
}
