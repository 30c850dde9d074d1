//! Waitlist signup wizard: a linear email → access-key flow.
//!
//! DESIGN
//! ======
//! The wizard is a two-step form state machine. Each step requires one
//! validated input before advancing, advancement is strictly monotonic
//! (`AwaitingEmail → AwaitingKey → Completed`), and there is no backward or
//! cancel transition. Validation failures keep the current step so the user
//! retries immediately; every outcome is reported through the injected
//! [`NotificationSink`]. The hosting form merely forwards submit events.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::notify::{Notice, NotificationSink};

/// Validation failures for wizard input. Both are user-correctable; neither
/// escapes the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("access key required")]
    EmptyKey,
}

/// Current step of the signup wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    AwaitingEmail,
    AwaitingKey,
    Completed,
}

/// Inputs collected so far plus the active step.
///
/// Owned exclusively by [`WizardController`]; hosts read it through
/// [`WizardController::state`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub email: String,
    pub access_key: String,
}

/// Accept any non-blank input containing an `'@'`. Deliberately permissive:
/// the waitlist only needs a deliverable-looking address, not RFC 5322.
pub fn validate_email(input: &str) -> Result<(), WizardError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(WizardError::InvalidEmail);
    }
    Ok(())
}

/// Accept any non-blank access key.
pub fn validate_access_key(input: &str) -> Result<(), WizardError> {
    if input.trim().is_empty() {
        return Err(WizardError::EmptyKey);
    }
    Ok(())
}

/// Owns the wizard state and advances it from validated form submissions.
pub struct WizardController {
    state: WizardState,
    sink: Arc<dyn NotificationSink>,
}

impl WizardController {
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { state: WizardState::default(), sink }
    }

    /// Read-only snapshot of the current wizard state.
    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Submit the email step. On invalid input the step is unchanged and a
    /// failure notice is reported; on success the email is stored and the
    /// wizard advances to the access-key step.
    pub fn submit_email(&mut self, input: &str) {
        if self.state.step != WizardStep::AwaitingEmail {
            tracing::debug!(step = ?self.state.step, "submit_email ignored outside email step");
            return;
        }

        match validate_email(input) {
            Err(err) => {
                tracing::debug!(error = %err, "email rejected");
                self.sink.report(Notice::failure(
                    "Invalid email",
                    "Please enter a valid email address.",
                ));
            }
            Ok(()) => {
                self.state.email = input.trim().to_owned();
                self.state.step = WizardStep::AwaitingKey;
                self.sink.report(Notice::success(
                    "Thanks for showing interest!",
                    "You will soon get access. Check your email for updates.",
                ));
            }
        }
    }

    /// Submit the access-key step. Only reachable after a successful
    /// [`submit_email`](Self::submit_email); any earlier call is ignored
    /// without touching state.
    pub fn submit_key(&mut self, input: &str) {
        if self.state.step != WizardStep::AwaitingKey {
            tracing::debug!(step = ?self.state.step, "submit_key ignored outside key step");
            return;
        }

        match validate_access_key(input) {
            Err(err) => {
                tracing::debug!(error = %err, "access key rejected");
                self.sink.report(Notice::failure(
                    "Access Key Required",
                    "Please enter your access key.",
                ));
            }
            Ok(()) => {
                // TODO: verify the key against the waitlist store once the
                // backend exposes a lookup; any non-blank key is accepted
                // until then.
                self.state.access_key = input.trim().to_owned();
                self.state.step = WizardStep::Completed;
                self.sink.report(Notice::success(
                    "Success!",
                    "Your access key has been verified. Welcome to Zymatric!",
                ));
            }
        }
    }
}
