//! JSON output for subnet summaries.

use crate::models::SubnetSummary;

/// Pretty printed JSON for one summary.
pub fn summary_json(summary: &SubnetSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
