//! Active weather alerts via the National Weather Service API.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::json::{array_field, field, str_field};
use crate::tool::{ParameterKind, Tool, ToolArgs, ToolOutput, ToolParameter};
use crate::upstream::Upstream;

/// Returned when the state has no active alerts.
pub const NO_ALERTS: &str = "No active alerts for this state.";

/// Separator placed between rendered alerts and forecast periods.
pub(crate) const BLOCK_SEPARATOR: &str = "\n---\n";

const PARAMETERS: &[ToolParameter] = &[ToolParameter::required(
    "state",
    ParameterKind::String,
    "Two-letter US state code (e.g. CA, NY)",
)];

/// Weather alerts tool backed by `api.weather.gov`.
///
/// # Parameters
///
/// - `state` (required): two-letter US state code. Passed through unchecked.
///
/// # Examples
///
/// ```json
/// {"state": "CA"}
/// ```
pub struct Alerts {
    upstream: Upstream,
}

impl Alerts {
    /// Create the tool on top of a weather upstream client.
    pub fn new(upstream: Upstream) -> Self {
        Self { upstream }
    }

    /// Render an alerts document into text.
    ///
    /// Every element of `features` becomes one block of five labelled lines.
    pub fn render(document: &Value) -> Result<String, ToolError> {
        let features = array_field(document, "features")?;
        if features.is_empty() {
            return Ok(NO_ALERTS.to_string());
        }

        let blocks = features
            .iter()
            .map(Self::render_alert)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(blocks.join(BLOCK_SEPARATOR))
    }

    fn render_alert(feature: &Value) -> Result<String, ToolError> {
        let properties = field(feature, "properties")?;
        Ok(format!(
            "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
            str_field(properties, "event")?,
            str_field(properties, "areaDesc")?,
            str_field(properties, "severity")?,
            str_field(properties, "description")?,
            str_field(properties, "instruction")?,
        ))
    }
}

#[async_trait]
impl Tool for Alerts {
    fn name(&self) -> &str {
        "get_alerts"
    }

    fn description(&self) -> &str {
        "Get weather alerts for a US state."
    }

    fn parameters(&self) -> &[ToolParameter] {
        PARAMETERS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let state = args.get_string("state")?;
        debug!("Getting weather alerts for '{}'", state);

        let path = format!("/alerts/active/area/{}", urlencoding::encode(&state));
        let document = self.upstream.fetch_json(&path).await.inspect_err(|e| {
            warn!("Alerts fetch failed for '{}': {}", state, e);
        })?;

        Ok(ToolOutput::success(Self::render(&document)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alert(event: &str, instruction: Value) -> Value {
        json!({
            "properties": {
                "event": event,
                "areaDesc": "Coastal Marin",
                "severity": "Moderate",
                "description": "Strong winds expected.",
                "instruction": instruction,
            }
        })
    }

    #[test]
    fn test_no_alerts_sentinel() {
        let doc = json!({"type": "FeatureCollection", "features": []});
        assert_eq!(Alerts::render(&doc).unwrap(), NO_ALERTS);
    }

    #[test]
    fn test_single_alert_layout() {
        let doc = json!({"features": [alert("Wind Advisory", json!("Secure loose objects."))]});
        let text = Alerts::render(&doc).unwrap();
        assert_eq!(
            text,
            "Event: Wind Advisory\n\
             Area: Coastal Marin\n\
             Severity: Moderate\n\
             Description: Strong winds expected.\n\
             Instructions: Secure loose objects."
        );
    }

    #[test]
    fn test_multiple_alerts_separated() {
        let doc = json!({"features": [
            alert("Wind Advisory", json!("Stay inside.")),
            alert("Flood Watch", Value::Null),
            alert("Heat Advisory", json!("Drink water.")),
        ]});
        let text = Alerts::render(&doc).unwrap();
        let blocks: Vec<&str> = text.split("\n---\n").collect();

        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].starts_with("Event: Flood Watch\n"));
        assert!(blocks[1].ends_with("Instructions: "));
        for block in blocks {
            let labels: Vec<&str> = block
                .lines()
                .map(|l| l.split(':').next().unwrap_or_default())
                .collect();
            assert_eq!(
                labels,
                vec!["Event", "Area", "Severity", "Description", "Instructions"]
            );
        }
    }

    #[test]
    fn test_missing_field_is_error() {
        let doc = json!({"features": [{"properties": {"event": "Wind Advisory"}}]});
        assert!(matches!(
            Alerts::render(&doc),
            Err(ToolError::MissingField(f)) if f == "areaDesc"
        ));

        let doc = json!({"type": "FeatureCollection"});
        assert!(matches!(
            Alerts::render(&doc),
            Err(ToolError::MissingField(f)) if f == "features"
        ));
    }

    #[tokio::test]
    async fn test_missing_state() {
        let tool = Alerts::new(Upstream::new(crate::UpstreamConfig::weather()).unwrap());
        let result = tool.execute(ToolArgs::default()).await;
        assert!(matches!(result, Err(ToolError::MissingParameter(_))));
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn test_fetch_live_alerts() {
        let tool = Alerts::new(Upstream::new(crate::UpstreamConfig::weather()).unwrap());
        let mut params = std::collections::HashMap::new();
        params.insert("state".to_string(), json!("CA"));
        let result = tool.execute(ToolArgs::new(params)).await.unwrap();
        assert!(!result.content.is_empty());
    }
}
