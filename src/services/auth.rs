//! Hosted-platform auth flows — password sign-in, signup, sign-out.
//!
//! Account storage, password hashing, and verification emails all live on
//! the platform; this module shapes the requests, decodes the session, and
//! reports outcomes the way the login/register forms expect.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::{self, ApiClient, ApiError};
use crate::notify::{Notice, NotificationSink};

/// Optional profile fields collected by the register form and stored as
/// user metadata on signup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Platform account as returned by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserProfile,
}

/// A signed-in session. The access token authorizes data-API requests for
/// the owning user under row-level security.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub user: User,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("passwords don't match")]
    PasswordMismatch,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Pre-submit check for the register form: password and confirmation must
/// agree before any request is made.
pub fn validate_sign_up(password: &str, confirm: &str) -> Result<(), AuthError> {
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(())
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a UserProfile,
}

/// Sign in with email + password. On failure a "Login failed" notice is
/// reported and the error returned so the host can skip navigation.
pub async fn sign_in(
    api: &ApiClient,
    sink: &dyn NotificationSink,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let url = api.auth_url("token");
    let result = backend::send_json::<Session>(
        api.request(Method::POST, &url, None)
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password }),
    )
    .await;

    match result {
        Ok(session) => {
            tracing::info!(user = %session.user.id, "signed in");
            Ok(session)
        }
        Err(err) => {
            sink.report(Notice::failure("Login failed", failure_body(&err)));
            Err(err.into())
        }
    }
}

/// Register a new account. The platform sends its own verification email;
/// success therefore yields no session, only the "check your email" notice.
pub async fn sign_up(
    api: &ApiClient,
    sink: &dyn NotificationSink,
    email: &str,
    password: &str,
    profile: UserProfile,
) -> Result<(), AuthError> {
    let url = api.auth_url("signup");
    let result = backend::send_no_content(
        api.request(Method::POST, &url, None)
            .json(&SignUpBody { email, password, data: &profile }),
    )
    .await;

    match result {
        Ok(()) => {
            sink.report(Notice::success(
                "Registration successful",
                "Please check your email for verification",
            ));
            Ok(())
        }
        Err(err) => {
            sink.report(Notice::failure("Signup failed", failure_body(&err)));
            Err(err.into())
        }
    }
}

/// Revoke the session server-side. Best effort: a failed revocation is
/// trace-logged and the host signs out locally regardless.
pub async fn sign_out(api: &ApiClient, session: &Session) {
    let url = api.auth_url("logout");
    let result =
        backend::send_no_content(api.request(Method::POST, &url, Some(&session.access_token))).await;
    if let Err(err) = result {
        tracing::warn!(error = %err, "session revocation failed");
    }
}

/// Body text for a failed auth notice: the platform's message when it sent
/// one, a generic retry prompt otherwise.
fn failure_body(err: &ApiError) -> String {
    match err {
        ApiError::Status { body, .. } if !body.trim().is_empty() => platform_error_message(body),
        _ => "Please try again".to_owned(),
    }
}

/// The auth API wraps errors as `{"error_description": …}` or `{"msg": …}`;
/// fall back to the raw body when it is neither.
fn platform_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["error_description", "msg", "message", "error"]
                .into_iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_owned))
        })
        .unwrap_or_else(|| body.trim().to_owned())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
