//! Identity platform auth/session types.

use serde::{Deserialize, Serialize};

/// Credentials issued by a successful login.
///
/// Lives only for the duration of a session: created by a login or a
/// connected status check, invalidated by logout or expiry. Never
/// persisted across process restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token authorizing Graph API calls.
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// Token lifetime in seconds.
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
    /// Signed request blob from the identity SDK.
    #[serde(rename = "signedRequest")]
    pub signed_request: String,
    /// Identifier of the authenticated user.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Graph domain the token is valid for.
    #[serde(rename = "graphDomain")]
    pub graph_domain: String,
    /// Unix timestamp after which data access expires.
    pub data_access_expiration_time: i64,
}

/// Outcome of a login or status check.
///
/// Carries an [`AuthResponse`] only when the user is connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "authResponse", rename_all = "snake_case")]
pub enum LoginStatus {
    /// Logged in and the app is authorized.
    Connected(AuthResponse),
    /// Logged in to the platform but the app is not authorized.
    NotAuthorized,
    /// Not logged in, or state could not be determined.
    Unknown,
}

impl LoginStatus {
    /// The auth response, if connected.
    #[must_use]
    pub const fn auth(&self) -> Option<&AuthResponse> {
        match self {
            Self::Connected(auth) => Some(auth),
            Self::NotAuthorized | Self::Unknown => None,
        }
    }

    /// Whether this status represents a usable session.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}
