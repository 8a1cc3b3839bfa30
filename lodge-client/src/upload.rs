//! File upload helper
//!
//! The dashboard's upload path is simulated: progress is delivered in
//! fixed 10% steps and the result is a synthetic URL. The trait is the
//! seam a real storage-backed uploader plugs into.

use crate::{ApiError, ApiResult};
use async_trait::async_trait;
use std::time::Duration;

/// Progress callback, invoked with 0-100 percent values
pub type ProgressFn<'a> = &'a (dyn Fn(u8) + Send + Sync);

/// Upload seam
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload a file, reporting progress, and resolve to its URL
    async fn upload(
        &self,
        file_name: &str,
        bytes: &[u8],
        on_progress: ProgressFn<'_>,
    ) -> ApiResult<String>;
}

/// Simulated uploader delivering staged progress and a synthetic URL
pub struct SimulatedUploader {
    base_url: String,
    step_delay: Duration,
}

impl SimulatedUploader {
    /// Create an uploader resolving to `{base_url}/uploads/{file_name}`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            step_delay: Duration::from_millis(300),
        }
    }

    /// Set the delay between progress steps (zero for tests)
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }
}

impl Default for SimulatedUploader {
    fn default() -> Self {
        Self::new("https://example.com")
    }
}

#[async_trait]
impl Uploader for SimulatedUploader {
    async fn upload(
        &self,
        file_name: &str,
        _bytes: &[u8],
        on_progress: ProgressFn<'_>,
    ) -> ApiResult<String> {
        if file_name.is_empty() {
            return Err(ApiError::internal("File name must not be empty"));
        }

        for step in 1..=10u8 {
            if !self.step_delay.is_zero() {
                tokio::time::sleep(self.step_delay).await;
            }
            on_progress(step * 10);
        }

        Ok(format!(
            "{}/uploads/{}",
            self.base_url.trim_end_matches('/'),
            file_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_upload_reports_staged_progress() {
        let uploader = SimulatedUploader::new("https://files.test").with_step_delay(Duration::ZERO);
        let seen = Mutex::new(Vec::new());

        let url = uploader
            .upload("invoice.pdf", b"%PDF", &|p| {
                seen.lock().unwrap().push(p);
            })
            .await
            .unwrap();

        assert_eq!(url, "https://files.test/uploads/invoice.pdf");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_name() {
        let uploader = SimulatedUploader::default().with_step_delay(Duration::ZERO);
        let err = uploader.upload("", b"", &|_| {}).await.unwrap_err();
        assert_eq!(err.status, 500);
    }
}
