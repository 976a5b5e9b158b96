//! Outfit display logic for WeatherWear
//!
//! Classifies garment labels from the outfit API into pictograms and builds
//! the card view models shown for today's outfit and the forecast.

pub mod card;
pub mod classify;
pub mod condition;
pub mod error;
pub mod payload;
pub mod types;

pub use card::{CardSlot, OutfitCard};
pub use classify::{classify, pictogram_for, GarmentCategory, Pictogram};
pub use condition::ConditionIcon;
pub use error::OutfitError;
pub use payload::{parse_forecast, parse_today};
pub use types::*;
