//! Garment label to pictogram classification.
//!
//! Labels come verbatim from the outfit API ("Puffer", "tank_top", "none").
//! Matching is substring based over an ordered rule table; the first rule
//! with a matching key wins.

/// Semantic grouping of pictograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GarmentCategory {
    UpperBody,
    Outerwear,
    LowerBody,
    Footwear,
    WeatherAccessory,
    HeadHandAccessory,
    Infant,
    /// Placeholders that carry no garment
    Placeholder,
}

/// The closed set of glyphs a garment label can render as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pictogram {
    Shirt,
    Coat,
    Pants,
    Shorts,
    Dress,
    Boots,
    Sneakers,
    Shoes,
    Sandals,
    FlipFlops,
    Umbrella,
    RainGear,
    Cap,
    Hat,
    Scarf,
    Gloves,
    Infant,
    /// Empty or missing label
    Unknown,
    /// Label present but not in the rule table
    Unrecognized,
}

impl Pictogram {
    pub const ALL: [Pictogram; 19] = [
        Self::Shirt,
        Self::Coat,
        Self::Pants,
        Self::Shorts,
        Self::Dress,
        Self::Boots,
        Self::Sneakers,
        Self::Shoes,
        Self::Sandals,
        Self::FlipFlops,
        Self::Umbrella,
        Self::RainGear,
        Self::Cap,
        Self::Hat,
        Self::Scarf,
        Self::Gloves,
        Self::Infant,
        Self::Unknown,
        Self::Unrecognized,
    ];

    /// Display glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Shirt => "👕",
            Self::Coat => "🧥",
            Self::Pants => "👖",
            Self::Shorts => "🩳",
            Self::Dress => "👗",
            Self::Boots => "🥾",
            Self::Sneakers => "👟",
            Self::Shoes => "👞",
            Self::Sandals => "👡",
            Self::FlipFlops => "🩴",
            Self::Umbrella => "☂️",
            Self::RainGear => "☔",
            Self::Cap => "🧢",
            Self::Hat => "🎩",
            Self::Scarf => "🧣",
            Self::Gloves => "🧤",
            Self::Infant => "👶",
            Self::Unknown => "❓",
            Self::Unrecognized => "👚",
        }
    }

    pub fn category(&self) -> GarmentCategory {
        match self {
            Self::Shirt => GarmentCategory::UpperBody,
            Self::Coat => GarmentCategory::Outerwear,
            Self::Pants | Self::Shorts | Self::Dress => GarmentCategory::LowerBody,
            Self::Boots | Self::Sneakers | Self::Shoes | Self::Sandals | Self::FlipFlops => {
                GarmentCategory::Footwear
            }
            Self::Umbrella | Self::RainGear => GarmentCategory::WeatherAccessory,
            Self::Cap | Self::Hat | Self::Scarf | Self::Gloves => {
                GarmentCategory::HeadHandAccessory
            }
            Self::Infant => GarmentCategory::Infant,
            Self::Unknown | Self::Unrecognized => GarmentCategory::Placeholder,
        }
    }
}

impl std::fmt::Display for Pictogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Label meaning "no item for this slot"
const NONE_LABEL: &str = "none";

// Order matters: "raincoat" must hit rain gear before "coat", footwear keys
// before "dress" ("dress shoes"), "pants" before "dress" ("dress pants") and
// before "cap" ("capri pants"), cap sleeves before caps, and head gear before
// the broad upper-body keys ("top hat").
const RULES: &[(&[&str], Pictogram)] = &[
    (&["onesie", "snowsuit", "romper", "bodysuit", "babygrow"], Pictogram::Infant),
    (&["umbrella"], Pictogram::Umbrella),
    (
        &["raincoat", "rain-coat", "rain_coat", "rain coat", "rain jacket", "rain_jacket", "poncho"],
        Pictogram::RainGear,
    ),
    (&["boots"], Pictogram::Boots),
    (&["flip", "thong"], Pictogram::FlipFlops),
    (&["sandal", "slides", "espadrille", "crocs"], Pictogram::Sandals),
    (
        &["sneaker", "trainers", "running shoe", "high-top", "high top", "high_top"],
        Pictogram::Sneakers,
    ),
    (&["shoe", "loafer", "moccasin", "oxfords", "heels", "slipper"], Pictogram::Shoes),
    (&["shorts"], Pictogram::Shorts),
    (
        &[
            "pants", "jeans", "trousers", "chinos", "leggings", "joggers", "capri", "culottes",
            "slacks", "bottoms",
        ],
        Pictogram::Pants,
    ),
    (&["skirt", "dress", "gown"], Pictogram::Dress),
    (&["glove", "mitten"], Pictogram::Gloves),
    (&["scarf", "scarves"], Pictogram::Scarf),
    (&["cap-sleeve", "cap sleeve", "cap_sleeve"], Pictogram::Shirt),
    (&["cap", "beanie"], Pictogram::Cap),
    (&["hat", "beret", "fedora", "earmuff"], Pictogram::Hat),
    (
        &["jacket", "coat", "parka", "puffer", "blazer", "bomber", "anorak", "breaker", "fleece"],
        Pictogram::Coat,
    ),
    (
        &[
            "shirt", "blouse", "polo", "tank", "top", "sweater", "hoodie", "cardigan", "jersey",
            "tunic", "kaftan", "vest", "jumper", "pullover",
        ],
        Pictogram::Shirt,
    ),
];

/// Classify a label into a pictogram.
///
/// Returns `None` for the "none" label (nothing to show). Empty or missing
/// labels give [`Pictogram::Unknown`]; labels no rule matches give
/// [`Pictogram::Unrecognized`].
pub fn pictogram_for<'a>(label: impl Into<Option<&'a str>>) -> Option<Pictogram> {
    let normalized = match label.into().map(str::trim) {
        None | Some("") => return Some(Pictogram::Unknown),
        Some(text) => text.to_lowercase(),
    };

    if normalized == NONE_LABEL {
        return None;
    }

    let matched = RULES
        .iter()
        .find(|(keys, _)| keys.iter().any(|key| normalized.contains(key)))
        .map(|(_, pictogram)| *pictogram);

    match matched {
        Some(pictogram) => Some(pictogram),
        None => {
            tracing::debug!("No pictogram rule for garment label: {}", normalized);
            Some(Pictogram::Unrecognized)
        }
    }
}

/// Display string for a garment label; empty for "none".
pub fn classify<'a>(label: impl Into<Option<&'a str>>) -> &'static str {
    pictogram_for(label).map_or("", |p| p.glyph())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty_are_unknown() {
        assert_eq!(classify(None::<&str>), "❓");
        assert_eq!(classify(""), "❓");
        assert_eq!(classify("   "), "❓");
    }

    #[test]
    fn test_none_label_is_empty() {
        assert_eq!(classify("none"), "");
        assert_eq!(classify("NONE"), "");
        assert_eq!(classify("  None "), "");
        assert_eq!(pictogram_for("none"), None);
    }

    #[test]
    fn test_shirt_variants() {
        let shirt = Pictogram::Shirt.glyph();
        assert_eq!(classify("t-shirt"), shirt);
        assert_eq!(classify("T-shirt"), shirt);
        assert_eq!(classify("tshirt"), shirt);
        assert_eq!(classify("tank_top"), shirt);
        assert_eq!(classify("Tank top"), shirt);
        assert_eq!(classify("Blouse"), shirt);
        assert_eq!(classify("Hoodie"), shirt);
    }

    #[test]
    fn test_unrecognized_fallback() {
        let glyph = classify("totally_unknown_item");
        assert_eq!(glyph, Pictogram::Unrecognized.glyph());
        assert_ne!(glyph, "❓");
    }

    #[test]
    fn test_fallback_is_not_a_rule_glyph() {
        for (_, pictogram) in RULES {
            assert_ne!(pictogram.glyph(), Pictogram::Unrecognized.glyph());
            assert_ne!(pictogram.glyph(), Pictogram::Unknown.glyph());
        }
    }

    #[test]
    fn test_rain_gear_wins_over_coat() {
        assert_eq!(pictogram_for("Rain-coat"), Some(Pictogram::RainGear));
        assert_eq!(pictogram_for("raincoat"), Some(Pictogram::RainGear));
        assert_eq!(pictogram_for("coat"), Some(Pictogram::Coat));
    }

    #[test]
    fn test_footwear_wins_over_dress() {
        assert_eq!(pictogram_for("dress_shoes"), Some(Pictogram::Shoes));
        assert_eq!(pictogram_for("summer dress"), Some(Pictogram::Dress));
    }

    #[test]
    fn test_overlapping_keys_resolve_by_garment() {
        assert_eq!(pictogram_for("Dress pants"), Some(Pictogram::Pants));
        assert_eq!(pictogram_for("High-tops"), Some(Pictogram::Sneakers));
        assert_eq!(pictogram_for("Oxford shirt"), Some(Pictogram::Shirt));
        assert_eq!(pictogram_for("Oxfords"), Some(Pictogram::Shoes));
        assert_eq!(pictogram_for("running shorts"), Some(Pictogram::Shorts));
        assert_eq!(pictogram_for("running shoes"), Some(Pictogram::Sneakers));
        assert_eq!(pictogram_for("Cap-sleeve top"), Some(Pictogram::Shirt));
        assert_eq!(pictogram_for("top hat"), Some(Pictogram::Hat));
    }

    // Garment vocabulary the outfit API is trained on, per slot
    const API_TOPWEAR: &[(&str, GarmentCategory)] = &[
        ("T-shirt", GarmentCategory::UpperBody),
        ("Tank top", GarmentCategory::UpperBody),
        ("Shirt", GarmentCategory::UpperBody),
        ("Polo", GarmentCategory::UpperBody),
        ("Blouse", GarmentCategory::UpperBody),
        ("Vest", GarmentCategory::UpperBody),
        ("Hoodie", GarmentCategory::UpperBody),
        ("Sweater", GarmentCategory::UpperBody),
        ("Cardigan", GarmentCategory::UpperBody),
        ("Jacket", GarmentCategory::Outerwear),
        ("Blazer", GarmentCategory::Outerwear),
        ("Coat", GarmentCategory::Outerwear),
        ("Parka", GarmentCategory::Outerwear),
        ("Puffer", GarmentCategory::Outerwear),
        ("Bomber", GarmentCategory::Outerwear),
        ("Rain-coat", GarmentCategory::WeatherAccessory),
        ("Wind-breaker", GarmentCategory::Outerwear),
        ("Jersey", GarmentCategory::UpperBody),
        ("Kaftan", GarmentCategory::UpperBody),
        ("Tunic", GarmentCategory::UpperBody),
        ("Uniform shirt", GarmentCategory::UpperBody),
        ("Chef coat", GarmentCategory::Outerwear),
        ("Pyjama top", GarmentCategory::UpperBody),
        ("Lounge top", GarmentCategory::UpperBody),
    ];

    const API_BOTTOMWEAR: &[&str] = &[
        "Jeans",
        "Trousers",
        "Chinos",
        "Shorts",
        "Skirt",
        "Leggings",
        "Joggers",
        "Cargo pants",
        "Sweatpants",
        "Palazzo pants",
        "Bootcut jeans",
        "Mom jeans",
        "Denim shorts",
        "Cargo shorts",
        "Pyjama bottoms",
        "Lounge pants",
        "Culottes",
        "Pleated trousers",
        "Dress pants",
    ];

    const API_FOOTWEAR: &[&str] = &[
        "Sneakers",
        "Loafers",
        "Boots",
        "Sandals",
        "Formal shoes",
        "Canvas shoes",
        "Espadrilles",
        "Moccasins",
        "Desert boots",
        "Chelsea boots",
        "Hiking boots",
        "Rain boots",
        "Slippers",
        "Flip-flops",
        "Slides",
        "High-tops",
        "Boat shoes",
        "Sport shoes",
        "Crocs",
    ];

    // Jewellery, bags and the like are left to the fallback glyph
    const API_ACCESSORIES: &[(&str, GarmentCategory)] = &[
        ("Cap", GarmentCategory::HeadHandAccessory),
        ("Beanie", GarmentCategory::HeadHandAccessory),
        ("Hat", GarmentCategory::HeadHandAccessory),
        ("Sunglasses", GarmentCategory::Placeholder),
        ("Scarf", GarmentCategory::HeadHandAccessory),
        ("Gloves", GarmentCategory::HeadHandAccessory),
        ("Watch", GarmentCategory::Placeholder),
        ("Backpack", GarmentCategory::Placeholder),
        ("Handbag", GarmentCategory::Placeholder),
        ("Umbrella", GarmentCategory::WeatherAccessory),
        ("Belt", GarmentCategory::Placeholder),
        ("Tie", GarmentCategory::Placeholder),
        ("Bow tie", GarmentCategory::Placeholder),
        ("Earmuffs", GarmentCategory::HeadHandAccessory),
        ("Face mask", GarmentCategory::Placeholder),
        ("Jewellery", GarmentCategory::Placeholder),
        ("Ring", GarmentCategory::Placeholder),
        ("Bracelet", GarmentCategory::Placeholder),
        ("Necklace", GarmentCategory::Placeholder),
        ("Earrings", GarmentCategory::Placeholder),
        ("Fit-bit", GarmentCategory::Placeholder),
        ("Tote bag", GarmentCategory::Placeholder),
        ("Cross-body bag", GarmentCategory::Placeholder),
        ("Rain coat", GarmentCategory::WeatherAccessory),
    ];

    fn category_of(label: &str) -> Option<GarmentCategory> {
        pictogram_for(label).map(|p| p.category())
    }

    #[test]
    fn test_api_topwear_categories() {
        for (label, expected) in API_TOPWEAR {
            assert_eq!(category_of(label), Some(*expected), "{}", label);
        }
    }

    #[test]
    fn test_api_bottomwear_is_lower_body() {
        for label in API_BOTTOMWEAR {
            assert_eq!(category_of(label), Some(GarmentCategory::LowerBody), "{}", label);
        }
    }

    #[test]
    fn test_api_footwear_is_footwear() {
        for label in API_FOOTWEAR {
            assert_eq!(category_of(label), Some(GarmentCategory::Footwear), "{}", label);
        }
    }

    #[test]
    fn test_api_accessory_categories() {
        for (label, expected) in API_ACCESSORIES {
            assert_eq!(category_of(label), Some(*expected), "{}", label);
        }
        assert_eq!(category_of("none"), None);
    }

    #[test]
    fn test_capri_pants_are_not_caps() {
        assert_eq!(pictogram_for("capris"), Some(Pictogram::Pants));
        assert_eq!(pictogram_for("baseball_cap"), Some(Pictogram::Cap));
    }

    #[test]
    fn test_outerwear() {
        for label in ["puffer_jacket", "Parka", "Blazer", "Wind-breaker", "Bomber"] {
            assert_eq!(pictogram_for(label), Some(Pictogram::Coat), "{}", label);
        }
    }

    #[test]
    fn test_footwear() {
        assert_eq!(pictogram_for("Sneakers"), Some(Pictogram::Sneakers));
        assert_eq!(pictogram_for("snow_boots"), Some(Pictogram::Boots));
        assert_eq!(pictogram_for("flip-flops"), Some(Pictogram::FlipFlops));
        assert_eq!(pictogram_for("Sandals"), Some(Pictogram::Sandals));
        assert_eq!(pictogram_for("Loafers"), Some(Pictogram::Shoes));
    }

    #[test]
    fn test_accessories_and_infant() {
        assert_eq!(pictogram_for("Umbrella"), Some(Pictogram::Umbrella));
        assert_eq!(pictogram_for("Scarf"), Some(Pictogram::Scarf));
        assert_eq!(pictogram_for("Gloves"), Some(Pictogram::Gloves));
        assert_eq!(pictogram_for("Beanie"), Some(Pictogram::Cap));
        assert_eq!(pictogram_for("sun_hat"), Some(Pictogram::Hat));
        assert_eq!(pictogram_for("snowsuit"), Some(Pictogram::Infant));
        assert_eq!(pictogram_for("Onesie"), Some(Pictogram::Infant));
    }

    #[test]
    fn test_output_is_in_closed_set() {
        let glyphs: Vec<&str> = Pictogram::ALL.iter().map(|p| p.glyph()).collect();
        for label in ["", "none", "Jeans", "watch", "x", "SHORTS", "Culottes", "???"] {
            let out = classify(label);
            assert!(out.is_empty() || glyphs.contains(&out), "{} -> {}", label, out);
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        for label in ["Sweater", "none", "", "mystery"] {
            assert_eq!(classify(label), classify(label));
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(Pictogram::Shirt.category(), GarmentCategory::UpperBody);
        assert_eq!(Pictogram::RainGear.category(), GarmentCategory::WeatherAccessory);
        assert_eq!(Pictogram::Unrecognized.category(), GarmentCategory::Placeholder);
    }
}
