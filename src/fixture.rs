//! Fixture lifecycle for contract cases.
//!
//! The remote service owns the authoritative user collection; these helpers
//! only hold transient copies used to construct requests. A run assumes it is
//! the sole writer against the remote while it executes.

use tracing::{info, warn};
use uuid::Uuid;

use crate::client::UserApiClient;
use crate::types::{ContractError, UserRecord};

/// Start of an id range the harness never creates a user in. Substituting one
/// of these into a payload references a resource that is guaranteed absent
/// without a create-then-delete round trip.
const RESERVED_ABSENT_ID: i64 = 900_000_000_000;

/// A user created ahead of a test and removed after it.
///
/// Creation failure is fatal to the case. Teardown failure after a successful
/// test is fatal too and names the username.
pub struct UpdateTargetFixture {
    record: UserRecord,
}

impl UpdateTargetFixture {
    /// Create the user on the remote service
    pub async fn provision(
        client: &UserApiClient,
        record: UserRecord,
    ) -> Result<Self, ContractError> {
        let response = client.create_user(&record).await?;
        if response.status.as_u16() != 200 {
            return Err(ContractError::SetupFailed {
                username: record.username.clone(),
                status: response.status.as_u16(),
                body: response.body,
            });
        }
        info!("Created fixture user {}", record.username);
        Ok(Self { record })
    }

    pub fn username(&self) -> &str {
        &self.record.username
    }

    /// Remove the user; anything but a 200 here is a hard failure
    pub async fn teardown(self, client: &UserApiClient) -> Result<(), ContractError> {
        let response = client.delete_user(&self.record.username).await?;
        if response.status.as_u16() != 200 {
            return Err(ContractError::TeardownFailed {
                username: self.record.username,
                status: response.status.as_u16(),
            });
        }
        info!("Deleted fixture user {}", self.record.username);
        Ok(())
    }
}

/// Create a user and immediately delete it, returning the now-absent id.
///
/// The demo service sometimes answers 404 on the delete even though the create
/// just succeeded; that mismatch is logged and tolerated. Only the create is
/// allowed to fail the case.
pub async fn provision_deleted_user_id(client: &UserApiClient) -> Result<i64, ContractError> {
    let record = UserRecord::doomed();
    let response = client.create_user(&record).await?;
    if response.status.as_u16() != 200 {
        return Err(ContractError::SetupFailed {
            username: record.username.clone(),
            status: response.status.as_u16(),
            body: response.body,
        });
    }

    let delete_response = client.delete_user(&record.username).await?;
    if delete_response.status.as_u16() != 200 {
        warn!(
            "User {} not found or already deleted. Status code: {}",
            record.username, delete_response.status
        );
    }

    Ok(record.id)
}

/// Deterministic known-absent id that never touches the remote service
pub fn reserved_absent_id() -> i64 {
    RESERVED_ABSENT_ID
}

/// Unique username for callers that cannot reuse the canonical fixture names
pub fn unique_username(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
