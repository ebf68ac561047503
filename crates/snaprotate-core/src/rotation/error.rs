use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Debug)]
pub enum RotateError {
    #[error("Authentication failed: {0}")]
    Auth(#[source] ApiError),

    #[error("Failed to list instances: {0}")]
    FetchInstances(#[source] ApiError),

    #[error("Failed to list snapshots of instance {instance_id}: {source}")]
    FetchSnapshots {
        instance_id: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to delete snapshot {snapshot_id} of instance {instance_id}: {source}")]
    Delete {
        instance_id: String,
        snapshot_id: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to create snapshot for instance {instance_id}: {source}")]
    Create {
        instance_id: String,
        #[source]
        source: ApiError,
    },
}

impl RotateError {
    pub fn api_error(&self) -> &ApiError {
        match self {
            RotateError::Auth(source) | RotateError::FetchInstances(source) => source,
            RotateError::FetchSnapshots { source, .. }
            | RotateError::Delete { source, .. }
            | RotateError::Create { source, .. } => source,
        }
    }
}
