use async_trait::async_trait;
use lectern_config::ApiSettings;
use lectern_contracts::notifier::{NotifyError, ProgressNotifier};
use lectern_model::watch::{
    SegmentReport, SkipAttemptReport, VideoLengthReport,
};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::AuthToken;
use crate::error::ClientError;

/// Progress-reporting API client with authentication support
#[derive(Clone, Debug)]
pub struct ProgressClient {
    client: Client,
    base_url: String,
    api_version: String,
    token_store: Arc<RwLock<Option<AuthToken>>>,
}

impl ProgressClient {
    /// Create a new client from API settings
    pub fn new(settings: &ApiSettings) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(
                settings.request_timeout_secs,
            ))
            // In development, don't follow redirects to avoid HTTP->HTTPS issues
            .redirect(if cfg!(debug_assertions) {
                reqwest::redirect::Policy::none()
            } else {
                reqwest::redirect::Policy::default()
            })
            .danger_accept_invalid_certs(cfg!(debug_assertions)) // Accept self-signed certs in dev
            .build()
            .expect("Failed to create HTTP client");

        log::info!(
            "[ProgressClient] Creating new API client with base URL: {}",
            settings.base_url
        );

        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_version: settings.api_version.clone(),
            token_store: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a versioned API URL
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}/{}", self.base_url, self.api_version, path)
    }

    /// Set the authentication token
    pub async fn set_token(&self, token: Option<AuthToken>) {
        *self.token_store.write().await = token;
    }

    /// Get the current authentication token
    pub async fn get_token(&self) -> Option<AuthToken> {
        self.token_store.read().await.clone()
    }

    /// Attach authentication headers when a token is present
    async fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder
                .header("Authorization", format!("Bearer {}", token.access_token))
        } else {
            builder
        }
    }

    /// Send a report and map anything but a success status to an error
    async fn send_report<T: Serialize + Sync>(
        &self,
        builder: RequestBuilder,
        body: &T,
    ) -> Result<(), ClientError> {
        let request = self.with_auth(builder.json(body)).await;
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            log::warn!("[ProgressClient] Report rejected with status {status}");
            Err(ClientError::UnexpectedStatus(status))
        }
    }

    fn lecture_path(
        &self,
        report_course: &impl std::fmt::Display,
        report_lecture: &impl std::fmt::Display,
        tail: &str,
    ) -> String {
        self.build_url(&format!(
            "courses/{report_course}/lectures/{report_lecture}/{tail}"
        ))
    }
}

#[async_trait]
impl ProgressNotifier for ProgressClient {
    async fn report_segment(
        &self,
        report: SegmentReport,
    ) -> Result<(), NotifyError> {
        let url = self.lecture_path(
            &report.course_id,
            &report.lecture_id,
            "progress/segments",
        );
        log::debug!(
            "[ProgressClient] Reporting segment {:.1}-{:.1}s",
            report.segment.start_time,
            report.segment.end_time
        );
        self.send_report(self.client.post(url), &report)
            .await
            .map_err(NotifyError::from)
    }

    async fn report_skip_attempt(
        &self,
        report: SkipAttemptReport,
    ) -> Result<(), NotifyError> {
        let url = self.lecture_path(
            &report.course_id,
            &report.lecture_id,
            "progress/skips",
        );
        self.send_report(self.client.post(url), &report)
            .await
            .map_err(NotifyError::from)
    }

    async fn report_video_length(
        &self,
        report: VideoLengthReport,
    ) -> Result<(), NotifyError> {
        let url = self.lecture_path(
            &report.course_id,
            &report.lecture_id,
            "progress/video-length",
        );
        self.send_report(self.client.put(url), &report)
            .await
            .map_err(NotifyError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_model::ids::{CourseID, LectureID};

    fn client() -> ProgressClient {
        ProgressClient::new(&ApiSettings {
            base_url: "https://learn.example.com/".to_string(),
            ..ApiSettings::default()
        })
    }

    #[test]
    fn build_url_versions_and_normalizes_paths() {
        let client = client();
        assert_eq!(
            client.build_url("/courses/abc/lectures/def/progress/segments"),
            "https://learn.example.com/api/v1/courses/abc/lectures/def/progress/segments"
        );
    }

    #[test]
    fn lecture_path_embeds_both_ids() {
        let client = client();
        let course = CourseID::new();
        let lecture = LectureID::new();
        let url = client.lecture_path(&course, &lecture, "progress/skips");
        assert!(url.contains(&course.to_string()));
        assert!(url.contains(&lecture.to_string()));
        assert!(url.ends_with("progress/skips"));
    }

    #[tokio::test]
    async fn token_store_round_trips() {
        let client = client();
        assert!(client.get_token().await.is_none());

        client.set_token(Some(AuthToken::new("secret"))).await;
        assert_eq!(
            client.get_token().await.unwrap().access_token,
            "secret"
        );

        client.set_token(None).await;
        assert!(client.get_token().await.is_none());
    }
}
