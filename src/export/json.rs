use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{MatchRecord, RosterTemplate};
use crate::stats::AggregateStatistics;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub export_date: DateTime<Utc>,
    pub version: String,
    pub total_matches: usize,
    pub total_templates: usize,
}

/// Everything the app knows, in one document
#[derive(Debug, Serialize)]
pub struct FullExport<'a> {
    pub metadata: ExportMetadata,
    pub statistics: &'a AggregateStatistics,
    pub matches: &'a [MatchRecord],
    pub templates: &'a [RosterTemplate],
}

pub fn full_json(
    matches: &[MatchRecord],
    templates: &[RosterTemplate],
    stats: &AggregateStatistics,
    version: &str,
    exported_at: DateTime<Utc>,
) -> Result<String> {
    let export = FullExport {
        metadata: ExportMetadata {
            export_date: exported_at,
            version: version.to_string(),
            total_matches: matches.len(),
            total_templates: templates.len(),
        },
        statistics: stats,
        matches,
        templates,
    };
    serde_json::to_string_pretty(&export).context("Failed to serialize full export")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_full_json_shape() {
        let stats = AggregateStatistics::default();
        let json = full_json(&[], &[], &stats, "1.0.0", Utc::now()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["version"], "1.0.0");
        assert_eq!(value["metadata"]["totalMatches"], 0);
        assert_eq!(value["metadata"]["totalTemplates"], 0);
        assert!(value["metadata"]["exportDate"].is_string());
        assert_eq!(value["statistics"]["totalMatches"], 0);
        assert_eq!(value["matches"], Value::Array(vec![]));
        assert_eq!(value["templates"], Value::Array(vec![]));
    }
}
