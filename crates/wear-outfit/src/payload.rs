// Parsing of outfit API response bodies
use crate::error::OutfitError;
use crate::types::{ForecastDay, OutfitToday};

/// Parse a `GET /outfit/{city}` body
pub fn parse_today(body: &str) -> Result<OutfitToday, OutfitError> {
    let today: OutfitToday = serde_json::from_str(body)?;
    tracing::debug!("Parsed today's outfit for condition {}", today.condition);
    Ok(today)
}

/// Parse a `GET /forecast/{city}` body
pub fn parse_forecast(body: &str) -> Result<Vec<ForecastDay>, OutfitError> {
    let days: Vec<ForecastDay> = serde_json::from_str(body)?;
    if days.is_empty() {
        return Err(OutfitError::InvalidPayload(
            "forecast contained no days".to_string(),
        ));
    }
    tracing::debug!("Parsed {} forecast days", days.len());
    Ok(days)
}
