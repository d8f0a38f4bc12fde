//! Common test utilities and harness for contract runner integration tests
//!
//! This module provides:
//! - MockPetstore: a wiremock stand-in for the remote user API
//! - The response envelopes the demo service produces
//! - Mount helpers for the endpoint shapes the runner touches

use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use petstore_contract::{Config, UserApiClient};

/// Percent-encoded path for the invalid-characters username "№5"
#[allow(dead_code)]
pub const ENCODED_INVALID_USERNAME_PATH: &str = "/user/%E2%84%965";

/// Wiremock-backed stand-in for the petstore user API
pub struct MockPetstore {
    pub server: MockServer,
}

impl MockPetstore {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Build a client pointed at this mock instance
    pub fn client(&self) -> UserApiClient {
        UserApiClient::new(&Config::with_base_url(self.base_url()))
            .expect("Failed to build client for mock server")
    }

    /// POST /user answered with the generic 200 envelope
    #[allow(dead_code)]
    pub async fn mount_create_ok(&self) {
        Mock::given(method("POST"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope("9223372036854775807")))
            .mount(&self.server)
            .await;
    }

    /// POST /user answered with a failure status and raw body
    #[allow(dead_code)]
    pub async fn mount_create_failure(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// DELETE /user/{anything} answered with the generic 200 envelope
    #[allow(dead_code)]
    pub async fn mount_delete_ok(&self) {
        Mock::given(method("DELETE"))
            .and(path_regex("^/user/.+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope("deleteduser")))
            .mount(&self.server)
            .await;
    }

    /// DELETE /user/{anything} answered 404, the flaky-delete shape the demo
    /// service is known to produce
    #[allow(dead_code)]
    pub async fn mount_delete_not_found(&self) {
        Mock::given(method("DELETE"))
            .and(path_regex("^/user/.+$"))
            .respond_with(ResponseTemplate::new(404).set_body_json(error_envelope("User not found")))
            .mount(&self.server)
            .await;
    }

    /// PUT /user/{username} answered with the generic 200 envelope
    #[allow(dead_code)]
    pub async fn mount_update_ok(&self, username: &str) {
        Mock::given(method("PUT"))
            .and(path(format!("/user/{}", username)))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope("updateduser")))
            .mount(&self.server)
            .await;
    }

    /// PUT for the two not-found usernames of the canonical table, answered
    /// 404 with a structured message. Disjoint from the testuser path so no
    /// mount-order precedence is involved.
    #[allow(dead_code)]
    pub async fn mount_update_not_found(&self) {
        Mock::given(method("PUT"))
            .and(path_regex("^/user/(%E2%84%965|nonexistentuser)$"))
            .respond_with(ResponseTemplate::new(404).set_body_json(error_envelope("User not found")))
            .mount(&self.server)
            .await;
    }
}

/// The petstore's generic success envelope
pub fn ok_envelope(message: &str) -> serde_json::Value {
    serde_json::json!({ "code": 200, "type": "unknown", "message": message })
}

/// The petstore's error envelope
#[allow(dead_code)]
pub fn error_envelope(message: &str) -> serde_json::Value {
    serde_json::json!({ "code": 1, "type": "error", "message": message })
}

// Re-export commonly used types for tests
#[allow(unused_imports)]
pub use serde_json::json;
