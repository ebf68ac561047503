use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::api::ApiClient;
use crate::auth::{AccessToken, Credentials, Session};
use crate::models::{Instance, NewSnapshot};

use super::{InstanceOutcome, RotateError, RotationReport};

/// Rotate the snapshots of one instance.
///
/// Lists the current snapshots, attempts to delete every one of them, then
/// attempts to create `<instance_name>-<Mon-DD-YYYY>`. A failed delete never
/// stops later deletes or the create. A failed listing skips the instance.
pub async fn rotate_instance(
    client: &ApiClient,
    token: &AccessToken,
    instance_id: &str,
    instance_name: &str,
    date: NaiveDate,
) -> InstanceOutcome {
    let mut outcome = InstanceOutcome::new(instance_id, instance_name);

    let snapshots = match client.list_snapshots(token, instance_id).await {
        Ok(snapshots) => snapshots,
        Err(source) => {
            error!(
                instance_id,
                timed_out = source.is_timeout(),
                error = %source,
                "Failed to list snapshots, skipping instance"
            );
            outcome.errors.push(RotateError::FetchSnapshots {
                instance_id: instance_id.to_string(),
                source,
            });
            return outcome;
        }
    };
    outcome.found = snapshots.len();
    info!(instance_id, count = snapshots.len(), "Snapshots received");

    for snapshot in &snapshots {
        let snapshot_id = snapshot.snapshot_id.as_str();
        match client.delete_snapshot(token, instance_id, snapshot_id).await {
            Ok(()) => {
                info!(instance_id, snapshot_id, "Snapshot deleted");
                outcome.deleted.push(snapshot_id.to_string());
            }
            Err(source) => {
                error!(
                    instance_id,
                    snapshot_id,
                    timed_out = source.is_timeout(),
                    error = %source,
                    "Failed to delete snapshot"
                );
                outcome.errors.push(RotateError::Delete {
                    instance_id: instance_id.to_string(),
                    snapshot_id: snapshot_id.to_string(),
                    source,
                });
            }
        }
    }

    let new_snapshot = NewSnapshot::dated(instance_name, date);
    match client.create_snapshot(token, instance_id, &new_snapshot).await {
        Ok(created) => {
            outcome.created = true;
            outcome.new_snapshot_id = created.map(|s| s.snapshot_id);
            info!(
                instance_id,
                name = %new_snapshot.name,
                snapshot_id = outcome.new_snapshot_id.as_deref().unwrap_or("unknown"),
                "Snapshot created"
            );
        }
        Err(source) => {
            error!(
                instance_id,
                name = %new_snapshot.name,
                timed_out = source.is_timeout(),
                error = %source,
                "Failed to create snapshot"
            );
            outcome.errors.push(RotateError::Create {
                instance_id: instance_id.to_string(),
                source,
            });
        }
    }

    outcome
}

/// Rotate every instance in the order given, one after another.
pub async fn rotate_all(
    client: &ApiClient,
    token: &AccessToken,
    instances: &[Instance],
    date: NaiveDate,
) -> RotationReport {
    let mut report = RotationReport::default();
    for instance in instances {
        info!(
            instance_id = %instance.instance_id,
            label = instance.label(),
            "Rotating snapshots"
        );
        let outcome =
            rotate_instance(client, token, &instance.instance_id, &instance.name, date).await;
        if !outcome.is_clean() {
            warn!(
                instance_id = %instance.instance_id,
                errors = outcome.errors.len(),
                "Instance rotated with errors"
            );
        }
        report.push(outcome);
    }
    report
}

/// One full pass: authenticate, list instances, rotate each.
///
/// Fails fast on authentication and instance listing; everything below
/// that is best effort and ends up in the report.
pub async fn run(
    client: &ApiClient,
    credentials: &Credentials,
    date: NaiveDate,
) -> Result<RotationReport, RotateError> {
    let session = Session::authenticate(client, credentials).await?;
    debug!(
        username = session.username(),
        authenticated_at = %session.created_at(),
        "Session established"
    );

    let instances = client
        .list_instances(session.token())
        .await
        .map_err(|source| {
            error!(error = %source, "Failed to list instances");
            RotateError::FetchInstances(source)
        })?;
    info!(count = instances.len(), "Instances received");

    Ok(rotate_all(client, session.token(), &instances, date).await)
}
