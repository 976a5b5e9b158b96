use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TemperatureUnit {
    #[default]
    C,
    F,
}

impl TemperatureUnit {
    /// Unit system name used by the upstream weather provider
    pub fn units_param(&self) -> &'static str {
        match self {
            Self::C => "metric",
            Self::F => "imperial",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::F => "F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(Self::C),
            "F" => Ok(Self::F),
            other => Err(format!("unknown temperature unit: {}", other)),
        }
    }
}

/// Wardrobe category the outfit API predicts for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Baby,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Baby => "baby",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "baby" => Ok(Self::Baby),
            other => Err(format!("unknown wardrobe category: {}", other)),
        }
    }
}

/// One position in an outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClothingSlot {
    Topwear,
    Bottomwear,
    Footwear,
    Accessory,
}

impl ClothingSlot {
    /// Card display order
    pub const ALL: [ClothingSlot; 4] = [
        Self::Topwear,
        Self::Bottomwear,
        Self::Footwear,
        Self::Accessory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Topwear => "Top",
            Self::Bottomwear => "Bottom",
            Self::Footwear => "Shoes",
            Self::Accessory => "Accessory",
        }
    }
}

/// Garment labels predicted for one day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Outfit {
    pub topwear: String,
    pub bottomwear: String,
    pub footwear: String,
    pub accessory: String,
}

impl Outfit {
    pub fn piece(&self, slot: ClothingSlot) -> &str {
        match slot {
            ClothingSlot::Topwear => &self.topwear,
            ClothingSlot::Bottomwear => &self.bottomwear,
            ClothingSlot::Footwear => &self.footwear,
            ClothingSlot::Accessory => &self.accessory,
        }
    }
}

/// Response of `GET /outfit/{city}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitToday {
    pub temp: f64,
    pub humidity: u8,
    pub condition: String,
    #[serde(default)]
    pub unit: TemperatureUnit,
    #[serde(default)]
    pub outfit: Outfit,
    #[serde(default)]
    pub tip: String,
}

/// One element of `GET /forecast/{city}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub date: NaiveDate,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    #[serde(default)]
    pub unit: TemperatureUnit,
    #[serde(default)]
    pub outfit: Outfit,
    #[serde(default)]
    pub tip: String,
}
