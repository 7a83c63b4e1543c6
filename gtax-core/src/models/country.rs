use serde::{Deserialize, Serialize};

use super::bracket::BracketSchedule;
use super::relief::ReliefPolicy;

/// Countries with a configured tax table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    Nigeria,
    UnitedStates,
    UnitedKingdom,
    Canada,
    Ghana,
    Kenya,
    SouthAfrica,
    Australia,
}

impl CountryCode {
    /// Every supported country, in display order.
    pub const ALL: [CountryCode; 8] = [
        Self::Nigeria,
        Self::UnitedStates,
        Self::UnitedKingdom,
        Self::Canada,
        Self::Ghana,
        Self::Kenya,
        Self::SouthAfrica,
        Self::Australia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nigeria => "nigeria",
            Self::UnitedStates => "usa",
            Self::UnitedKingdom => "uk",
            Self::Canada => "canada",
            Self::Ghana => "ghana",
            Self::Kenya => "kenya",
            Self::SouthAfrica => "south-africa",
            Self::Australia => "australia",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "nigeria" => Some(Self::Nigeria),
            "usa" => Some(Self::UnitedStates),
            "uk" => Some(Self::UnitedKingdom),
            "canada" => Some(Self::Canada),
            "ghana" => Some(Self::Ghana),
            "kenya" => Some(Self::Kenya),
            "south-africa" => Some(Self::SouthAfrica),
            "australia" => Some(Self::Australia),
            _ => None,
        }
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A country's complete tax configuration: bracket schedule, relief policy,
/// and the display strings presentation layers need.
///
/// Profiles are static data built once at process start and shared read-only;
/// nothing mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub code: CountryCode,
    /// Human-readable country name, e.g. `"United Kingdom"`.
    pub display_name: String,
    /// Currency symbol prefixed to amounts, e.g. `"₦"`.
    pub currency_symbol: String,
    /// Name of the tax in this jurisdiction, e.g. `"PAYE Tax"`.
    pub tax_label: String,
    pub schedule: BracketSchedule,
    pub relief_policy: ReliefPolicy,
    /// Informational note about the automatic relief, if any.
    pub relief_note: Option<String>,
}
