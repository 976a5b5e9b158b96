//! Outfit card view models.
//!
//! A card pairs the API's verbatim data with the two display lookups: the
//! condition icon and one garment pictogram per clothing slot.

use crate::classify::classify;
use crate::condition::ConditionIcon;
use crate::types::{ClothingSlot, ForecastDay, Outfit, OutfitToday};
use std::fmt;

/// One garment position on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    pub slot: ClothingSlot,
    /// Garment name as returned by the API
    pub name: String,
    /// Empty when the API said "none"
    pub pictogram: &'static str,
}

impl CardSlot {
    fn new(outfit: &Outfit, slot: ClothingSlot) -> Self {
        let name = outfit.piece(slot);
        Self {
            slot,
            name: name.to_string(),
            pictogram: classify(name),
        }
    }

    pub fn label(&self) -> &'static str {
        self.slot.label()
    }

    pub fn is_shown(&self) -> bool {
        !self.pictogram.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct OutfitCard {
    pub heading: String,
    pub date: Option<String>,
    pub condition: String,
    pub icon: ConditionIcon,
    pub temperature: String,
    pub humidity: Option<u8>,
    /// Unit, uppercase
    pub unit: String,
    pub slots: Vec<CardSlot>,
    pub tip: String,
}

impl OutfitCard {
    pub fn from_forecast(day: &ForecastDay) -> Self {
        Self {
            heading: day.day.clone(),
            date: Some(day.date.format("%Y-%m-%d").to_string()),
            condition: day.condition.clone(),
            icon: ConditionIcon::for_condition(&day.condition),
            temperature: format!("{}°/{}°", day.high, day.low),
            humidity: None,
            unit: day.unit.as_str().to_uppercase(),
            slots: slots_for(&day.outfit),
            tip: day.tip.clone(),
        }
    }

    pub fn from_today(today: &OutfitToday) -> Self {
        Self {
            heading: "Today".to_string(),
            date: None,
            condition: today.condition.clone(),
            icon: ConditionIcon::for_condition(&today.condition),
            temperature: format!("{}°", today.temp),
            humidity: Some(today.humidity),
            unit: today.unit.as_str().to_uppercase(),
            slots: slots_for(&today.outfit),
            tip: today.tip.clone(),
        }
    }

    /// Slots that have something to show
    pub fn shown_slots(&self) -> impl Iterator<Item = &CardSlot> {
        self.slots.iter().filter(|s| s.is_shown())
    }

    pub fn slot(&self, slot: ClothingSlot) -> Option<&CardSlot> {
        self.slots.iter().find(|s| s.slot == slot)
    }
}

fn slots_for(outfit: &Outfit) -> Vec<CardSlot> {
    ClothingSlot::ALL
        .iter()
        .map(|slot| CardSlot::new(outfit, *slot))
        .collect()
}

impl From<&ForecastDay> for OutfitCard {
    fn from(day: &ForecastDay) -> Self {
        Self::from_forecast(day)
    }
}

impl From<&OutfitToday> for OutfitCard {
    fn from(today: &OutfitToday) -> Self {
        Self::from_today(today)
    }
}

impl fmt::Display for OutfitCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.date {
            Some(date) => writeln!(f, "{} ({})", self.heading, date)?,
            None => writeln!(f, "{}", self.heading)?,
        }
        write!(
            f,
            "  {} {}  {} {}",
            self.icon.glyph(),
            self.condition,
            self.temperature,
            self.unit
        )?;
        if let Some(humidity) = self.humidity {
            write!(f, "  {}% humidity", humidity)?;
        }
        writeln!(f)?;
        for slot in self.shown_slots() {
            writeln!(f, "  {} {}: {}", slot.pictogram, slot.label(), slot.name)?;
        }
        if !self.tip.is_empty() {
            writeln!(f, "  Tip: {}", self.tip)?;
        }
        Ok(())
    }
}
