use tracing::{info, warn};

use super::RotateError;

/// What happened to one instance during the pass.
#[derive(Debug)]
pub struct InstanceOutcome {
    pub instance_id: String,
    pub instance_name: String,
    /// Snapshots found when the instance was listed
    pub found: usize,
    /// Snapshot ids the provider confirmed deleted
    pub deleted: Vec<String>,
    /// Whether the provider accepted the new snapshot
    pub created: bool,
    /// Id of the new snapshot, when the provider echoed it back
    pub new_snapshot_id: Option<String>,
    pub errors: Vec<RotateError>,
}

impl InstanceOutcome {
    pub fn new(instance_id: &str, instance_name: &str) -> Self {
        Self {
            instance_id: instance_id.to_string(),
            instance_name: instance_name.to_string(),
            found: 0,
            deleted: Vec::new(),
            created: false,
            new_snapshot_id: None,
            errors: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.created
    }
}

/// Aggregated outcomes of one pass, in provider order.
#[derive(Debug, Default)]
pub struct RotationReport {
    pub instances: Vec<InstanceOutcome>,
}

impl RotationReport {
    pub fn push(&mut self, outcome: InstanceOutcome) {
        self.instances.push(outcome);
    }

    pub fn errors(&self) -> impl Iterator<Item = &RotateError> {
        self.instances.iter().flat_map(|o| o.errors.iter())
    }

    pub fn created_count(&self) -> usize {
        self.instances.iter().filter(|o| o.created).count()
    }

    pub fn deleted_count(&self) -> usize {
        self.instances.iter().map(|o| o.deleted.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.instances.iter().all(InstanceOutcome::is_clean)
    }

    /// Log one line for the pass, then one per failure
    pub fn log_summary(&self) {
        let failures = self.errors().count();
        info!(
            instances = self.instances.len(),
            created = self.created_count(),
            deleted = self.deleted_count(),
            failures,
            "Rotation pass finished"
        );
        for err in self.errors() {
            warn!(error = %err, "Rotation step failed");
        }
    }
}
