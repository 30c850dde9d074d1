//! Waitlist confirmation dispatch.
//!
//! After the signup wizard accepts an email, the host asks the deployed
//! `send-confirmation` function to deliver the waitlist welcome email.
//! Rendering and delivery happen on the platform; this module only shapes
//! and sends the invocation.

use reqwest::Method;
use serde::Serialize;

use crate::backend::{self, ApiClient, ApiError};
use crate::wizard;

const FUNCTION: &str = "send-confirmation";

#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("valid email is required")]
    InvalidEmail,
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Serialize)]
struct ConfirmationBody<'a> {
    email: &'a str,
}

/// Ask the platform to send the waitlist confirmation email. Applies the
/// same permissive email check as the wizard so the function is never
/// invoked with input it would reject.
pub async fn request_confirmation(api: &ApiClient, email: &str) -> Result<(), WaitlistError> {
    wizard::validate_email(email).map_err(|_| WaitlistError::InvalidEmail)?;
    let trimmed = email.trim();

    let url = api.function_url(FUNCTION);
    backend::send_no_content(
        api.request(Method::POST, &url, None).json(&ConfirmationBody { email: trimmed }),
    )
    .await?;

    tracing::info!(email = trimmed, "waitlist confirmation requested");
    Ok(())
}

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod tests;
