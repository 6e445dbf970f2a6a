//! HTTP episode service client.

use crate::{ReleaseArchive, RemoteConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use showrunner_core::{EpisodeHandle, SceneDescriptor};
use showrunner_error::{HttpError, ShowrunnerResult, SourceError, SourceErrorKind};
use showrunner_interface::{EpisodeLifecycle, EpisodeSource};
use tracing::{debug, instrument, warn};

/// Route receiving the scene descriptor.
pub const SUPPORTED_SCENES_ROUTE: &str = "/set_supported_scenes";

/// Route answering with the next episode path.
pub const EPISODE_PATH_ROUTE: &str = "/get_episode_path";

/// Body of a [`EPISODE_PATH_ROUTE`] response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EpisodePathResponse {
    /// Episode directory; absent or empty when nothing is queued
    #[serde(default)]
    pub episode_path: Option<String>,
}

/// Episode source asking an HTTP service for work.
///
/// The service owns the queue. Episode paths it hands out must be readable
/// by this process.
#[derive(Debug, Clone)]
pub struct RemoteEpisodeSource {
    client: Client,
    config: RemoteConfig,
    mirror: Option<ReleaseArchive>,
}

impl RemoteEpisodeSource {
    /// Creates a client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(base_url = %config.base_url()))]
    pub fn new(config: RemoteConfig) -> ShowrunnerResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| {
                HttpError::new(
                    config.base_url().as_str(),
                    format!("Failed to build HTTP client: {}", e),
                )
            })?;
        let mirror = config.mirror_root().as_ref().map(ReleaseArchive::under_root);

        Ok(Self {
            client,
            config,
            mirror,
        })
    }

    /// Settings this client was built from.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), route)
    }
}

#[async_trait]
impl EpisodeSource for RemoteEpisodeSource {
    #[instrument(skip(self, descriptor), fields(actors = descriptor.actors().len()))]
    async fn register(&self, descriptor: &SceneDescriptor) -> ShowrunnerResult<()> {
        if descriptor.is_empty() {
            warn!("Registering a scene without actors");
        }

        let url = self.url(SUPPORTED_SCENES_ROUTE);
        debug!(url = %url, "Sending scene descriptor");

        let response = self
            .client
            .post(&url)
            .json(descriptor)
            .send()
            .await
            .map_err(|e| HttpError::new(&url, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(HttpError::rejected(&url, status, &error_text).into());
        }

        debug!("Scene registered");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn next(&self) -> ShowrunnerResult<EpisodeHandle> {
        let url = self.url(EPISODE_PATH_ROUTE);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HttpError::new(&url, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(HttpError::rejected(&url, status, &error_text).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| HttpError::new(&url, format!("Failed to read response: {}", e)))?;
        let parsed: EpisodePathResponse = serde_json::from_str(&body).map_err(|e| {
            SourceError::new(SourceErrorKind::InvalidResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        match parsed.episode_path {
            Some(path) if !path.is_empty() => {
                debug!(episode = %path, "Service returned episode");
                Ok(EpisodeHandle::new(path))
            }
            _ => Err(SourceError::new(SourceErrorKind::NotAvailable).into()),
        }
    }

    fn source_name(&self) -> &'static str {
        "remote"
    }
}

#[async_trait]
impl EpisodeLifecycle for RemoteEpisodeSource {
    async fn retire(&self, episode: &EpisodeHandle) -> ShowrunnerResult<()> {
        match &self.mirror {
            Some(archive) => archive.retire(episode).await,
            None => {
                debug!(episode = %episode, "Service owns retirement");
                Ok(())
            }
        }
    }
}
