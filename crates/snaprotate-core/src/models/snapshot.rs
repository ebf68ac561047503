use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{id_from_number_or_string, optional_id_from_number_or_string};

/// Date format used in generated snapshot names, e.g. `Mar-01-2024`.
pub const SNAPSHOT_DATE_FORMAT: &str = "%b-%d-%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "snapshotId", deserialize_with = "id_from_number_or_string")]
    pub snapshot_id: String,
    #[serde(
        rename = "instanceId",
        default,
        deserialize_with = "optional_id_from_number_or_string"
    )]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Provider timestamp, kept verbatim for log lines
    #[serde(rename = "createdDate", default)]
    pub created_date: Option<String>,
}

/// Form body for `POST /v1/compute/instances/{id}/snapshots`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSnapshot {
    pub name: String,
    pub description: String,
}

impl NewSnapshot {
    /// Build the dated snapshot for an instance: `<instance>-<Mon-DD-YYYY>`.
    pub fn dated(instance_name: &str, date: NaiveDate) -> Self {
        let stamp = date.format(SNAPSHOT_DATE_FORMAT).to_string();
        Self {
            name: format!("{}-{}", instance_name, stamp),
            description: format!("Snapshot created from script at {}", stamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListResponse;

    #[test]
    fn test_dated_snapshot_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let snap = NewSnapshot::dated("web1", date);
        assert_eq!(snap.name, "web1-Mar-01-2024");
        assert_eq!(snap.description, "Snapshot created from script at Mar-01-2024");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).expect("valid date");
        assert_eq!(NewSnapshot::dated("db1", date).name, "db1-Dec-25-2023");
    }

    #[test]
    fn test_parse_snapshots_response() {
        let json = r#"{"data": [{
            "tenantId": "DE",
            "customerId": "54321",
            "snapshotId": "snap1628603855",
            "name": "vmd100-Feb-28-2024",
            "description": "Snapshot created from script at Feb-28-2024",
            "instanceId": 100,
            "createdDate": "2024-02-28T03:00:00.000Z",
            "autoDeleteDate": "2024-03-28T03:00:00.000Z"
        }]}"#;

        let resp: ListResponse<Snapshot> =
            serde_json::from_str(json).expect("Failed to parse snapshots test JSON");
        let s = &resp.data[0];
        assert_eq!(s.snapshot_id, "snap1628603855");
        assert_eq!(s.instance_id.as_deref(), Some("100"));
        assert_eq!(s.name.as_deref(), Some("vmd100-Feb-28-2024"));
        assert_eq!(s.created_date.as_deref(), Some("2024-02-28T03:00:00.000Z"));
    }

    #[test]
    fn test_unused_fields_never_block_listing() {
        let json = r#"{"data": [
            {"snapshotId": "s-1", "instanceId": null, "createdDate": "2024-02-29"},
            {"snapshotId": "s-2", "instanceId": 100, "name": null, "createdDate": null}
        ]}"#;

        let resp: ListResponse<Snapshot> =
            serde_json::from_str(json).expect("odd optional fields should still parse");
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].snapshot_id, "s-1");
        assert_eq!(resp.data[0].instance_id, None);
        assert_eq!(resp.data[0].created_date.as_deref(), Some("2024-02-29"));
        assert_eq!(resp.data[1].instance_id.as_deref(), Some("100"));
        assert_eq!(resp.data[1].created_date, None);
    }

    #[test]
    fn test_parse_minimal_snapshot() {
        let s: Snapshot = serde_json::from_str(r#"{"snapshotId": "s-1"}"#)
            .expect("snapshot with only an id should parse");
        assert_eq!(s.snapshot_id, "s-1");
        assert_eq!(s.instance_id, None);
        assert_eq!(s.name, None);
    }
}
