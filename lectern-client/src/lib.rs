//! HTTP progress-reporting client for Lectern.
//!
//! Implements the `lectern-contracts` notifier port against the platform's
//! REST API. All calls are best-effort: the watch session fires them without
//! awaiting results, and a failed delivery costs at most one report.

pub mod auth;
pub mod client;
pub mod error;

pub use auth::AuthToken;
pub use client::ProgressClient;
pub use error::ClientError;
