//! Client core for the Zymatric site and dashboard.
//!
//! This crate owns the application's domain logic — the waitlist signup
//! wizard, auth and project/usage pass-throughs to the hosted backend
//! platform, and the client-side state the dashboard renders from. The
//! rendering layer, the platform itself, and email delivery are external
//! collaborators: hosts forward user input into the controllers here and
//! observe outcomes through [`notify::NotificationSink`].

pub mod backend;
pub mod config;
pub mod notify;
pub mod services;
pub mod state;
pub mod wizard;
