use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A flat user record as the remote service understands it.
/// Sent verbatim as the request body for create and update calls; the harness
/// only holds transient copies, the remote service owns the authoritative
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_status: i64,
}

impl UserRecord {
    /// The user created ahead of the successful-update scenario
    pub fn update_target() -> Self {
        Self {
            id: 0,
            username: "testuser".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "testuser@example.com".to_string(),
            password: "password123".to_string(),
            phone: "1234567890".to_string(),
            user_status: 0,
        }
    }

    /// The payload sent on every update call in the canonical table
    pub fn valid_update() -> Self {
        Self {
            id: 0,
            username: "updateduser".to_string(),
            first_name: "Updated".to_string(),
            last_name: "User".to_string(),
            email: "updateduser@example.com".to_string(),
            password: "newpassword123".to_string(),
            phone: "9876543210".to_string(),
            user_status: 0,
        }
    }

    /// A record created only to be deleted again, leaving a known-absent id
    /// behind for the not-found scenarios
    pub fn doomed() -> Self {
        Self {
            id: 12345,
            username: "deleteduser".to_string(),
            first_name: "Deleted".to_string(),
            last_name: "User".to_string(),
            email: "deleteduser@example.com".to_string(),
            password: "password123".to_string(),
            phone: "1234567890".to_string(),
            user_status: 0,
        }
    }

    /// Same record with the id swapped out; the not-found cases substitute
    /// the id of a user that has already vanished from the remote
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// What the contract expects back from an update call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedOutcome {
    /// 200 with a body that parses as JSON
    Success,
    /// 404 with a non-empty `message` field, or non-empty raw text
    NotFound,
}

impl ExpectedOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            ExpectedOutcome::Success => 200,
            ExpectedOutcome::NotFound => 404,
        }
    }
}

/// One contract expectation: update `username` with `payload`, expect
/// `expected` back from the remote
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: &'static str,
    pub username: String,
    pub payload: UserRecord,
    pub expected: ExpectedOutcome,
}

impl TestCase {
    pub fn new(
        name: &'static str,
        username: impl Into<String>,
        payload: UserRecord,
        expected: ExpectedOutcome,
    ) -> Self {
        Self {
            name,
            username: username.into(),
            payload,
            expected,
        }
    }

    /// The canonical table of update scenarios. Built fresh per run and
    /// passed into the runner explicitly; nothing here is ambient state.
    pub fn table() -> Vec<TestCase> {
        vec![
            TestCase::new(
                "existing-user-update",
                "testuser",
                UserRecord::valid_update(),
                ExpectedOutcome::Success,
            ),
            // Username containing characters the service cannot resolve
            TestCase::new(
                "invalid-username-characters",
                "№5",
                UserRecord::valid_update(),
                ExpectedOutcome::NotFound,
            ),
            TestCase::new(
                "never-created-username",
                "nonexistentuser",
                UserRecord::valid_update(),
                ExpectedOutcome::NotFound,
            ),
        ]
    }
}

/// Error types for the contract runner
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to create user {username}: status {status}, body: {body}")]
    SetupFailed {
        username: String,
        status: u16,
        body: String,
    },
    #[error("Failed to delete user with username {username}: status {status}")]
    TeardownFailed { username: String, status: u16 },
    #[error("Expected status code {expected}, but got {actual}: {body}")]
    StatusMismatch {
        expected: u16,
        actual: u16,
        body: String,
    },
    #[error("Response is not a valid JSON: {0}")]
    InvalidJsonBody(#[from] serde_json::Error),
    #[error("Error message should be present in the response")]
    MissingErrorMessage,
    #[error("Empty response for error status code")]
    EmptyErrorBody,
    #[error("Invalid configuration: {0}")]
    Config(String),
}
