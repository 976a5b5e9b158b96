use serde::{Deserialize, Serialize};

/// Card icon picked from the API's free-text weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionIcon {
    Rainy,
    Cloudy,
    Snow,
    Sunny,
    #[default]
    PartlySunny,
}

impl ConditionIcon {
    /// Pick an icon for condition text such as "Clouds" or "light rain".
    ///
    /// Rules are checked in order, so "Thunderstorm with rain" is rainy.
    pub fn for_condition(condition: &str) -> Self {
        let condition = condition.to_lowercase();
        if condition.contains("rain") {
            Self::Rainy
        } else if condition.contains("cloud") {
            Self::Cloudy
        } else if condition.contains("snow") {
            Self::Snow
        } else if condition.contains("sun") || condition.contains("clear") {
            Self::Sunny
        } else {
            Self::PartlySunny
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Rainy => "rainy",
            Self::Cloudy => "cloudy",
            Self::Snow => "snow",
            Self::Sunny => "sunny",
            Self::PartlySunny => "partly-sunny",
        }
    }

    /// Header background for the forecast details screen
    pub fn header_color(&self) -> &'static str {
        match self {
            Self::Rainy => "#4A6FA5",
            Self::Cloudy => "#5D8AA8",
            Self::Snow => "#A8D0E6",
            Self::Sunny => "#FFB347",
            Self::PartlySunny => "#6A8EAE",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Rainy => "🌧️",
            Self::Cloudy => "☁️",
            Self::Snow => "❄️",
            Self::Sunny => "☀️",
            Self::PartlySunny => "⛅",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openweather_main_conditions() {
        assert_eq!(ConditionIcon::for_condition("Rain"), ConditionIcon::Rainy);
        assert_eq!(ConditionIcon::for_condition("Clouds"), ConditionIcon::Cloudy);
        assert_eq!(ConditionIcon::for_condition("Snow"), ConditionIcon::Snow);
        assert_eq!(ConditionIcon::for_condition("Clear"), ConditionIcon::Sunny);
    }

    #[test]
    fn test_rain_checked_first() {
        assert_eq!(
            ConditionIcon::for_condition("Thunderstorm with rain"),
            ConditionIcon::Rainy
        );
        assert_eq!(
            ConditionIcon::for_condition("rain and snow"),
            ConditionIcon::Rainy
        );
    }

    #[test]
    fn test_unmatched_is_partly_sunny() {
        assert_eq!(ConditionIcon::for_condition("Mist"), ConditionIcon::PartlySunny);
        assert_eq!(ConditionIcon::for_condition("Drizzle"), ConditionIcon::PartlySunny);
        assert_eq!(ConditionIcon::for_condition(""), ConditionIcon::PartlySunny);
    }

    #[test]
    fn test_header_color_follows_condition_order() {
        assert_eq!(ConditionIcon::for_condition("Rain").header_color(), "#4A6FA5");
        assert_eq!(ConditionIcon::for_condition("Clouds").header_color(), "#5D8AA8");
        assert_eq!(ConditionIcon::for_condition("Snow").header_color(), "#A8D0E6");
        assert_eq!(ConditionIcon::for_condition("Clear").header_color(), "#FFB347");
        assert_eq!(ConditionIcon::for_condition("Mist").header_color(), "#6A8EAE");
        assert_eq!(
            ConditionIcon::for_condition("rain and snow").header_color(),
            "#4A6FA5"
        );
    }

    #[test]
    fn test_icon_name() {
        assert_eq!(ConditionIcon::Sunny.icon_name(), "sunny");
        assert_eq!(ConditionIcon::PartlySunny.icon_name(), "partly-sunny");
    }
}
