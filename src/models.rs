use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

// ============================================================================
// Tool Input
// ============================================================================

/// Arguments of the `get-weather` tool.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    #[schemars(description = "Latitude in decimal degrees (e.g., 37.5665)")]
    pub latitude: f64,

    #[schemars(description = "Longitude in decimal degrees (e.g., 126.9780)")]
    pub longitude: f64,

    #[schemars(
        description = "Reference date as YYYYMMDD. Currently ignored; the latest publication slot is always used"
    )]
    pub date: Option<String>,

    #[schemars(
        description = "Reference time as HHMM. Currently ignored; the latest publication slot is always used"
    )]
    pub time: Option<String>,
}

impl GetWeatherRequest {
    /// Checks every argument and reports all violations at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if !(-90.0..=90.0).contains(&self.latitude) {
            issues.push(format!(
                "latitude: must be between -90 and 90, got {}",
                self.latitude
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            issues.push(format!(
                "longitude: must be between -180 and 180, got {}",
                self.longitude
            ));
        }
        if let Some(date) = &self.date {
            if !is_digits(date, 8) {
                issues.push(format!(
                    "date: must be an 8-digit YYYYMMDD string, got {:?}",
                    date
                ));
            }
        }
        if let Some(time) = &self.time {
            if !is_digits(time, 4) {
                issues.push(format!(
                    "time: must be a 4-digit HHMM string, got {:?}",
                    time
                ));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// KMA API Models
// ============================================================================

/// Response envelope shared by all three KMA endpoints.
///
/// Error replies may omit the body or the nested item list, so every layer
/// below the top is optional. The per-category records themselves stay
/// opaque JSON and are passed through to the caller unchanged.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub response: ResponseEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub header: Option<ResponseHeader>,
    #[serde(default)]
    pub body: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg")]
    pub result_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub items: Option<ItemList>,
}

#[derive(Debug, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub item: Option<Vec<Value>>,
}

impl ApiResponse {
    /// Upstream result message, when the envelope carries a header.
    pub fn result_msg(&self) -> Option<&str> {
        self.response.header.as_ref().map(|h| h.result_msg.as_str())
    }

    /// Unwraps the nested envelope down to the record list.
    pub fn into_items(self) -> Option<Vec<Value>> {
        self.response.body?.items?.item
    }
}

// ============================================================================
// Upstream Query / Combined Report
// ============================================================================

/// Query string shared by the three forecast endpoints.
#[derive(Debug, Serialize)]
pub struct ForecastQuery<'a> {
    #[serde(rename = "serviceKey")]
    pub service_key: &'a str,
    #[serde(rename = "pageNo")]
    pub page_no: u32,
    #[serde(rename = "numOfRows")]
    pub num_of_rows: u32,
    #[serde(rename = "dataType")]
    pub data_type: &'a str,
    pub base_date: &'a str,
    pub base_time: &'a str,
    pub nx: i32,
    pub ny: i32,
}

/// Combined payload returned to the tool caller.
#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub current: Vec<Value>,
    #[serde(rename = "ultraShortForecast")]
    pub ultra_short_forecast: Vec<Value>,
    pub forecast: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(latitude: f64, longitude: f64) -> GetWeatherRequest {
        GetWeatherRequest {
            latitude,
            longitude,
            date: None,
            time: None,
        }
    }

    #[test]
    fn validate_accepts_seoul() {
        assert!(request(37.5665, 126.978).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_latitude() {
        let err = request(95.0, 0.0).validate().unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn validate_collects_every_violation() {
        let mut req = request(95.0, -200.0);
        req.date = Some("2025-01-01".to_string());
        req.time = Some("12:00".to_string());

        let err = req.validate().unwrap_err();
        assert_eq!(err.issues.len(), 4);
        assert!(err.to_string().contains("longitude"));
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn validate_accepts_digit_overrides() {
        let mut req = request(37.5665, 126.978);
        req.date = Some("20250101".to_string());
        req.time = Some("0630".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn envelope_without_items_keeps_result_msg() {
        let json = r#"{"response":{"header":{"resultCode":"03","resultMsg":"NO_DATA"}}}"#;
        let parsed: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.result_msg(), Some("NO_DATA"));
        assert!(parsed.into_items().is_none());
    }

    #[test]
    fn envelope_with_items_deserializes() {
        let json = r#"{"response":{"header":{"resultCode":"00","resultMsg":"NORMAL_SERVICE"},"body":{"items":{"item":[{"category":"T1H","obsrValue":"23.5"}]}}}}"#;
        let parsed: ApiResponse = serde_json::from_str(json).unwrap();
        let items = parsed.into_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["category"], "T1H");
    }
}
