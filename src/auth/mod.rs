//! Authentication — signup/signin, two-factor flow, user profile.
//!
//! ## Security Model
//!
//! - The bearer token is the **only** session credential, and it lives in
//!   exactly one place: a private cell inside the HTTP layer. It is written
//!   on signin/OTP success, cleared on logout, and never exposed via a
//!   public accessor — there is no secondary durable mirror to drift out of
//!   sync with.
//! - Logout clears the token and resets every resource slice, so a
//!   subsequent session starts from pristine snapshots.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

// ============================================================================
// User profile types
// ============================================================================

/// Platform role attached to every user profile. Admin-only screens are
/// gated on [`Role::Admin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Full user profile.
///
/// Returned by `client.auth().profile()` and populated into the auth slice
/// after a successful signin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub two_factor_auth: TwoFactorAuth,
}

/// Two-factor settings on a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorAuth {
    pub enabled: bool,
    pub send_to: Option<VerificationType>,
}

/// Channel used for verification OTPs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationType {
    Email,
    Mobile,
}

impl VerificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Mobile => "MOBILE",
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Signin request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Auth endpoint response — shared by signup, signin and OTP verification.
///
/// When two-factor is enabled for the account, `jwt` is absent and `session`
/// carries the opaque id for the pending OTP verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub jwt: Option<String>,
    pub status: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub two_factor_auth_enabled: bool,
    pub session: Option<String>,
}

/// Outcome of a signin attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SigninOutcome {
    /// Credential accepted; profile fetched and committed to the auth slice.
    Authenticated(User),
    /// Two-factor is enabled: verify the OTP against this session id.
    TwoFactorRequired { session: String },
}
