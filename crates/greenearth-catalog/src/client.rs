//! HTTP client for the remote plant catalog.
//!
//! Every read comes in two flavours. The `try_*` methods return typed errors
//! for transport failures, non-success statuses, unparseable bodies and
//! unexpected envelopes. The plain methods never fail: on any error they log
//! a warning and answer from the [`crate::mock`] catalog, tagging the result
//! with [`Origin::Mock`].

use std::time::Duration;

use greenearth_core::{AppConfig, Category, Plant};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::envelope::{extract_list, extract_record, Endpoint};
use crate::error::CatalogError;
use crate::mock;
use crate::normalize::{normalize_category, normalize_plant, with_all_category, PlantFields};
use crate::retry::retry_with_backoff;

/// Where a catalog answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Mock,
}

/// A catalog answer together with its [`Origin`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub origin: Origin,
}

impl<T> Fetched<T> {
    fn remote(data: T) -> Self {
        Self {
            data,
            origin: Origin::Remote,
        }
    }

    fn mock(data: T) -> Self {
        Self {
            data,
            origin: Origin::Mock,
        }
    }

    /// Returns `true` when the answer came from the mock catalog.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Mock
    }
}

/// Client for the catalog API.
///
/// Use [`CatalogClient::from_config`] in the binary, or
/// [`CatalogClient::new`] to point at a mock server in tests.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl CatalogClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL, or [`CatalogError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so endpoint segments append to the
        // configured path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    /// Fetches every plant, falling back to the mock catalog.
    pub async fn all_plants(&self) -> Fetched<Vec<Plant>> {
        match self.try_all_plants().await {
            Ok(plants) => Fetched::remote(plants),
            Err(error) => {
                tracing::warn!(%error, "plants fetch failed, using mock catalog");
                Fetched::mock(mock::plants())
            }
        }
    }

    /// Fetches the plants of one category, falling back to the mock catalog
    /// filtered by the category's keyword.
    pub async fn plants_by_category(&self, category_id: &str) -> Fetched<Vec<Plant>> {
        match self.try_plants_by_category(category_id).await {
            Ok(plants) => Fetched::remote(plants),
            Err(error) => {
                tracing::warn!(
                    category_id,
                    %error,
                    "category plants fetch failed, using mock filter"
                );
                Fetched::mock(mock::plants_for_category(category_id))
            }
        }
    }

    /// Fetches the detail record of one plant. `None` means the catalog
    /// answered without a plant record. On failure answers with the mock
    /// plant of the same id, if there is one.
    pub async fn plant_by_id(&self, plant_id: &str) -> Fetched<Option<PlantFields>> {
        match self.try_plant_by_id(plant_id).await {
            Ok(fields) => Fetched::remote(fields),
            Err(error) => {
                tracing::warn!(plant_id, %error, "plant detail fetch failed, using mock catalog");
                Fetched::mock(mock::plant(plant_id))
            }
        }
    }

    /// Fetches the category list, "All Trees" first, falling back to the
    /// mock categories.
    pub async fn categories(&self) -> Fetched<Vec<Category>> {
        match self.try_categories().await {
            Ok(categories) => Fetched::remote(categories),
            Err(error) => {
                tracing::warn!(%error, "category fetch failed, using mock catalog");
                Fetched::mock(mock::categories())
            }
        }
    }

    /// Fetches and normalizes every plant.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure after all retries.
    /// - [`CatalogError::UnexpectedStatus`] on a non-2xx status.
    /// - [`CatalogError::Deserialize`] if the body is not JSON.
    /// - [`CatalogError::Envelope`] if the payload is not a list.
    pub async fn try_all_plants(&self) -> Result<Vec<Plant>, CatalogError> {
        let url = self.endpoint_url(&["plants"])?;
        let body = self.request_json(url, Endpoint::AllPlants).await?;
        let items = extract_list(&body, Endpoint::AllPlants)?;
        Ok(items.iter().map(normalize_plant).collect())
    }

    /// Fetches and normalizes the plants of `category_id`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_all_plants`].
    pub async fn try_plants_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<Plant>, CatalogError> {
        let url = self.endpoint_url(&["category", category_id])?;
        let body = self.request_json(url, Endpoint::PlantsByCategory).await?;
        let items = extract_list(&body, Endpoint::PlantsByCategory)?;
        Ok(items.iter().map(normalize_plant).collect())
    }

    /// Fetches one plant's detail record. Fields the response omits are
    /// left unset. A response without any plant envelope, which is how the
    /// catalog reports an unknown id, yields `None`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure after all retries.
    /// - [`CatalogError::UnexpectedStatus`] on a non-2xx status.
    /// - [`CatalogError::Deserialize`] if the body is not JSON.
    pub async fn try_plant_by_id(
        &self,
        plant_id: &str,
    ) -> Result<Option<PlantFields>, CatalogError> {
        let url = self.endpoint_url(&["plant", plant_id])?;
        let body = self.request_json(url, Endpoint::PlantById).await?;
        Ok(extract_record(&body, Endpoint::PlantById).map(PlantFields::extract))
    }

    /// Fetches and normalizes the categories, with "All Trees" prepended.
    ///
    /// # Errors
    ///
    /// Same as [`Self::try_all_plants`].
    pub async fn try_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let url = self.endpoint_url(&["categories"])?;
        let body = self.request_json(url, Endpoint::Categories).await?;
        let items = extract_list(&body, Endpoint::Categories)?;
        Ok(with_all_category(
            items
                .iter()
                .enumerate()
                .map(|(index, record)| normalize_category(record, index))
                .collect(),
        ))
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs `url` with caching disabled and parses the body as JSON.
    async fn request_json(&self, url: Url, endpoint: Endpoint) -> Result<Value, CatalogError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                tracing::debug!(%url, endpoint = endpoint.name(), "requesting catalog");
                let response = self
                    .client
                    .get(url.clone())
                    .header(CACHE_CONTROL, "no-cache")
                    .header(PRAGMA, "no-cache")
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(CatalogError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<Value>(&body).map_err(|e| CatalogError::Deserialize {
                    context: format!("{} from {url}", endpoint.name()),
                    source: e,
                })
            }
        })
        .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
