use lectern_core::policy::TrackerPolicy;
use serde::{Deserialize, Serialize};

/// Settings for the progress-reporting API client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the platform API the client reports progress to.
    pub base_url: String,
    /// API version segment used when building request URLs.
    pub api_version: String,
    /// Per-request timeout in seconds. Reports are fire-and-forget, so a
    /// short timeout only bounds how long an abandoned task lingers.
    pub request_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            api_version: "v1".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Top-level Lectern settings. Use these to tune the anti-skip policy and
/// point the reporting client at the right backend.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Playback policy: skip tolerance, minimum segment length, completion
    /// threshold, notice duration. Defaults match the platform-wide policy;
    /// loosen `skip_tolerance_secs` only for content where skipping ahead
    /// is acceptable.
    pub tracker: TrackerPolicy,
    /// Reporting client settings.
    pub api: ApiSettings,
}
