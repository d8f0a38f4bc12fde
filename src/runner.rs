//! Sequential contract runner for the user update endpoint.
//!
//! One case runs to completion before the next starts; every network call is
//! attempted exactly once, no retries.

use serde_json::Value;
use tracing::{debug, error, info};

use crate::client::{ApiResponse, UserApiClient};
use crate::fixture::{self, UpdateTargetFixture};
use crate::types::{ContractError, ExpectedOutcome, TestCase, UserRecord};

/// Outcome of a single table entry
#[derive(Debug)]
pub struct CaseReport {
    pub name: &'static str,
    pub username: String,
    pub outcome: Result<(), ContractError>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Aggregated results for a full table run
#[derive(Debug, Default)]
pub struct RunReport {
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|case| case.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Drives a table of update cases against the remote service, one at a time
pub struct ContractRunner {
    client: UserApiClient,
}

impl ContractRunner {
    pub fn new(client: UserApiClient) -> Self {
        Self { client }
    }

    /// Run every case in order and collect per-case outcomes
    pub async fn run(&self, cases: Vec<TestCase>) -> RunReport {
        let mut report = RunReport::default();
        for case in cases {
            info!("Running case {} (username {})", case.name, case.username);
            let name = case.name;
            let username = case.username.clone();
            let outcome = self.run_case(case).await;
            match &outcome {
                Ok(()) => info!("Case {} passed", name),
                Err(e) => error!("Case {} failed: {}", name, e),
            }
            report.cases.push(CaseReport {
                name,
                username,
                outcome,
            });
        }
        report
    }

    /// Per-case state machine:
    /// created -> (optionally deleted to simulate not-found) -> updated ->
    /// asserted -> fixture cleanup
    async fn run_case(&self, case: TestCase) -> Result<(), ContractError> {
        let payload = match case.expected {
            ExpectedOutcome::Success => case.payload.clone(),
            // Not-found cases reference the id of a user that already vanished
            ExpectedOutcome::NotFound => {
                let deleted_id = fixture::provision_deleted_user_id(&self.client).await?;
                case.payload.clone().with_id(deleted_id)
            }
        };

        let target = match case.expected {
            ExpectedOutcome::Success => {
                let record = UserRecord {
                    username: case.username.clone(),
                    ..UserRecord::update_target()
                };
                Some(UpdateTargetFixture::provision(&self.client, record).await?)
            }
            ExpectedOutcome::NotFound => None,
        };

        let response = self.client.update_user(&case.username, &payload).await?;
        let verdict = assert_outcome(&response, case.expected);

        // Cleanup runs even when the assertion failed; an assertion failure
        // takes precedence over a teardown failure in the report.
        if let Some(target) = target {
            let teardown = target.teardown(&self.client).await;
            verdict?;
            teardown?;
        } else {
            verdict?;
        }
        Ok(())
    }
}

/// Check a captured response against the expected outcome.
///
/// Exact status equality in both directions. A success body must parse as
/// JSON. An error body must either parse and carry a non-empty `message`
/// field, or be non-empty raw text; an empty error body is a failure.
pub fn assert_outcome(
    response: &ApiResponse,
    expected: ExpectedOutcome,
) -> Result<(), ContractError> {
    let actual = response.status.as_u16();
    let want = expected.status_code();
    if actual != want {
        return Err(ContractError::StatusMismatch {
            expected: want,
            actual,
            body: response.body.clone(),
        });
    }

    match expected {
        ExpectedOutcome::Success => {
            response.json()?;
            Ok(())
        }
        ExpectedOutcome::NotFound => match response.json() {
            Ok(value) => match value.get("message") {
                Some(Value::String(message)) if !message.is_empty() => {
                    debug!("Error message: {}", message);
                    Ok(())
                }
                Some(Value::Null) | None => Err(ContractError::MissingErrorMessage),
                Some(Value::String(_)) => Err(ContractError::MissingErrorMessage),
                // A non-string message field still counts as present
                Some(_) => Ok(()),
            },
            Err(_) => {
                if response.body.is_empty() {
                    Err(ContractError::EmptyErrorBody)
                } else {
                    debug!("Non-JSON error response: {}", response.body);
                    Ok(())
                }
            }
        },
    }
}
