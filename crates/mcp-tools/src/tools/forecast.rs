//! Point forecast via the National Weather Service API.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::alerts::BLOCK_SEPARATOR;
use crate::error::ToolError;
use crate::json::{array_field, field, i64_field, str_field};
use crate::tool::{ParameterKind, Tool, ToolArgs, ToolOutput, ToolParameter};
use crate::upstream::Upstream;

/// Number of forecast periods rendered.
pub const MAX_PERIODS: usize = 5;

const PARAMETERS: &[ToolParameter] = &[
    ToolParameter::required("latitude", ParameterKind::Number, "Latitude of the location"),
    ToolParameter::required("longitude", ParameterKind::Number, "Longitude of the location"),
];

/// Forecast tool backed by `api.weather.gov`.
///
/// Resolves the coordinates to a grid point first, then follows the forecast
/// URL that the points response links to. The two requests are sequential.
///
/// # Parameters
///
/// - `latitude` (required): decimal degrees.
/// - `longitude` (required): decimal degrees.
pub struct Forecast {
    upstream: Upstream,
}

impl Forecast {
    /// Create the tool on top of a weather upstream client.
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }

    /// Path of the points resource. `f64` formatting never depends on locale.
    pub fn points_path(latitude: f64, longitude: f64) -> String {
        format!("/points/{},{}", latitude, longitude)
    }

    /// Pull `properties.forecast` out of a points document.
    pub fn forecast_url(points: &Value, latitude: f64, longitude: f64) -> Result<String, ToolError> {
        points
            .get("properties")
            .and_then(|p| p.get("forecast"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ToolError::ExecutionFailed(format!(
                    "No forecast URL provided by api.weather.gov for {},{}",
                    latitude, longitude
                ))
            })
    }

    /// Render the first [`MAX_PERIODS`] periods of a forecast document.
    pub fn render(document: &Value) -> Result<String, ToolError> {
        let periods = array_field(field(document, "properties")?, "periods")?;

        let blocks = periods
            .iter()
            .take(MAX_PERIODS)
            .map(Self::render_period)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(blocks.join(BLOCK_SEPARATOR))
    }

    fn render_period(period: &Value) -> Result<String, ToolError> {
        Ok(format!(
            "{}:\nTemperature: {}°{}\nWind: {} {}\nForecast: {}",
            str_field(period, "name")?,
            i64_field(period, "temperature")?,
            str_field(period, "temperatureUnit")?,
            str_field(period, "windSpeed")?,
            str_field(period, "windDirection")?,
            str_field(period, "detailedForecast")?,
        ))
    }
}

#[async_trait]
impl Tool for Forecast {
    fn name(&self) -> &str {
        "get_forecast"
    }

    fn description(&self) -> &str {
        "Get weather forecast for a location."
    }

    fn parameters(&self) -> &[ToolParameter] {
        PARAMETERS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let latitude = args.get_f64("latitude")?;
        let longitude = args.get_f64("longitude")?;
        debug!("Getting forecast for {},{}", latitude, longitude);

        let points = self
            .upstream
            .fetch_json(&Self::points_path(latitude, longitude))
            .await?;
        let forecast_url = Self::forecast_url(&points, latitude, longitude).inspect_err(|e| {
            warn!("{}", e);
        })?;

        let forecast = self.upstream.fetch_json(&forecast_url).await?;
        Ok(ToolOutput::success(Self::render(&forecast)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn period(name: &str, temperature: i64) -> Value {
        json!({
            "number": 1,
            "name": name,
            "temperature": temperature,
            "temperatureUnit": "F",
            "windSpeed": "10 mph",
            "windDirection": "SW",
            "detailedForecast": format!("{} forecast text.", name),
        })
    }

    #[test]
    fn test_points_path_uses_decimal_point() {
        assert_eq!(Forecast::points_path(39.7456, -97.0892), "/points/39.7456,-97.0892");
        assert_eq!(Forecast::points_path(40.0, -105.5), "/points/40,-105.5");
    }

    #[test]
    fn test_forecast_url_present() {
        let points = json!({"properties": {
            "forecast": "https://api.weather.gov/gridpoints/TOP/31,80/forecast"
        }});
        assert_eq!(
            Forecast::forecast_url(&points, 39.7456, -97.0892).unwrap(),
            "https://api.weather.gov/gridpoints/TOP/31,80/forecast"
        );
    }

    #[test]
    fn test_forecast_url_missing_names_coordinates() {
        for points in [
            json!({"properties": {}}),
            json!({"properties": {"forecast": null}}),
            json!({}),
        ] {
            let err = Forecast::forecast_url(&points, 39.7456, -97.0892).unwrap_err();
            let message = err.to_string();
            assert!(message.contains("39.7456"), "{}", message);
            assert!(message.contains("-97.0892"), "{}", message);
        }
    }

    #[test]
    fn test_render_caps_at_five_periods() {
        let names = ["Tonight", "Monday", "Monday Night", "Tuesday", "Tuesday Night", "Wednesday", "Wednesday Night"];
        let periods: Vec<Value> = names.iter().map(|n| period(n, 70)).collect();
        let doc = json!({"properties": {"periods": periods}});

        let text = Forecast::render(&doc).unwrap();
        let blocks: Vec<&str> = text.split("\n---\n").collect();

        assert_eq!(blocks.len(), MAX_PERIODS);
        for (block, name) in blocks.iter().zip(names.iter()) {
            assert!(block.starts_with(&format!("{}:\n", name)));
        }
        assert!(!text.contains("Wednesday"));
    }

    #[test]
    fn test_render_period_layout() {
        let doc = json!({"properties": {"periods": [period("Tonight", 58)]}});
        assert_eq!(
            Forecast::render(&doc).unwrap(),
            "Tonight:\nTemperature: 58°F\nWind: 10 mph SW\nForecast: Tonight forecast text."
        );
    }

    #[test]
    fn test_render_fewer_than_five() {
        let doc = json!({"properties": {"periods": [period("Today", 80), period("Tonight", 60)]}});
        assert_eq!(Forecast::render(&doc).unwrap().split("\n---\n").count(), 2);
    }

    #[test]
    fn test_render_non_integer_temperature() {
        let mut p = period("Today", 80);
        p["temperature"] = json!(80.5);
        let doc = json!({"properties": {"periods": [p]}});
        assert!(matches!(
            Forecast::render(&doc),
            Err(ToolError::UnexpectedType { .. })
        ));
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_fetch_live_forecast() {
        let tool = Forecast::new(Upstream::new(crate::UpstreamConfig::weather()).unwrap());
        let mut params = std::collections::HashMap::new();
        params.insert("latitude".to_string(), json!(39.7456));
        params.insert("longitude".to_string(), json!(-97.0892));
        let result = tool.execute(ToolArgs::new(params)).await.unwrap();
        assert!(result.content.contains("Temperature:"));
    }
}
