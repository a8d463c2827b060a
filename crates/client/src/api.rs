//! REST API client for the tier-list HTTP endpoints.
//!
//! Wraps the server's `/api` surface (class placements, map modifiers,
//! enchantment sets) using [`reqwest`]. One method per endpoint; rejected
//! requests surface the server's failure envelope message.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tierlist_core::board::TierBoard;
use tierlist_core::types::{Category, Tier};

/// Default API base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// HTTP client for a tier-list API server.
pub struct TierlistApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server rejected the request with its failure envelope.
    #[error("API error ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// The `message` from the `{success: false}` envelope.
        message: String,
    },
}

/// A class placement as sent to the upsert endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ClassUpsert {
    pub name: String,
    pub category: Category,
    pub tier: Tier,
    pub mpm: f64,
}

/// A map modifier as sent to the upsert endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MapUpsert {
    pub name: String,
    pub modifier: f64,
}

/// An enchantment set as read from and written to the API.
///
/// Slots left `None` serialize as absent, so the same type doubles as a
/// partial-update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enchantments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon: Option<String>,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cape: Option<String>,
}

impl Enchantments {
    /// Whether every slot is absent.
    pub fn is_empty(&self) -> bool {
        self.weapon.is_none()
            && self.class_slot.is_none()
            && self.helm.is_none()
            && self.cape.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ProcessedEnvelope {
    processed: u64,
}

#[derive(Debug, Deserialize)]
struct UpdatedEnvelope {
    updated: u64,
}

#[derive(Debug, Deserialize)]
struct FailureEnvelope {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateEnchantmentsBody<'a> {
    #[serde(rename = "className")]
    class_name: &'a str,
    #[serde(flatten)]
    set: &'a Enchantments,
}

impl TierlistApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base URL including the `/api` path, e.g.
    ///   `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    // -- Classes ------------------------------------------------------------

    /// Fetch every placement, grouped category → tier → entries.
    pub async fn list_classes(&self) -> Result<TierBoard, ApiError> {
        let response = self
            .client
            .get(format!("{}/classes", self.base_url))
            .send()
            .await?;
        let envelope: DataEnvelope<TierBoard> = Self::check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// Insert or overwrite one placement.
    pub async fn upsert_class(&self, class: &ClassUpsert) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/classes", self.base_url))
            .json(class)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Upsert a batch of placements; returns how many the server accepted.
    pub async fn bulk_upsert_classes(&self, classes: &[ClassUpsert]) -> Result<u64, ApiError> {
        let response = self
            .client
            .post(format!("{}/classes/bulk", self.base_url))
            .json(classes)
            .send()
            .await?;
        let envelope: ProcessedEnvelope = Self::check(response).await?.json().await?;
        Ok(envelope.processed)
    }

    /// Update (and possibly rename) the class currently called `current_name`.
    pub async fn update_class(
        &self,
        current_name: &str,
        class: &ClassUpsert,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(format!("{}/classes/{current_name}", self.base_url))
            .json(class)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Delete a placement by name.
    pub async fn delete_class(&self, name: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/classes/{name}", self.base_url))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // -- Maps ---------------------------------------------------------------

    /// Fetch every map modifier as a `{name: modifier}` mapping.
    pub async fn list_maps(&self) -> Result<IndexMap<String, f64>, ApiError> {
        let response = self
            .client
            .get(format!("{}/maps", self.base_url))
            .send()
            .await?;
        let envelope: DataEnvelope<IndexMap<String, f64>> =
            Self::check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// Insert or overwrite one map modifier.
    pub async fn upsert_map(&self, map: &MapUpsert) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/maps", self.base_url))
            .json(map)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Upsert a batch of maps; returns how many the server accepted.
    pub async fn bulk_upsert_maps(&self, maps: &[MapUpsert]) -> Result<u64, ApiError> {
        let response = self
            .client
            .post(format!("{}/maps/bulk", self.base_url))
            .json(maps)
            .send()
            .await?;
        let envelope: UpdatedEnvelope = Self::check(response).await?.json().await?;
        Ok(envelope.updated)
    }

    /// Delete a map by name.
    pub async fn delete_map(&self, name: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/maps/{name}", self.base_url))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // -- Enchantments -------------------------------------------------------

    /// Fetch the enchantment set for a class; `None` when it has none.
    pub async fn get_enchantments(
        &self,
        class_name: &str,
    ) -> Result<Option<Enchantments>, ApiError> {
        let response = self
            .client
            .get(format!("{}/enchantments/{class_name}", self.base_url))
            .send()
            .await?;
        let envelope: DataEnvelope<Option<Enchantments>> =
            Self::check(response).await?.json().await?;
        Ok(envelope.data)
    }

    /// Create the enchantment set for a class.
    pub async fn create_enchantments(
        &self,
        class_name: &str,
        set: &Enchantments,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/enchantments", self.base_url))
            .json(&CreateEnchantmentsBody {
                class_name,
                set,
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Partially update the enchantment set for a class; only the slots
    /// present in `set` are sent.
    pub async fn update_enchantments(
        &self,
        class_name: &str,
        set: &Enchantments,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(format!("{}/enchantments/{class_name}", self.base_url))
            .json(set)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // -- Internals ----------------------------------------------------------

    /// Pass through successful responses; turn the failure envelope of a
    /// rejected one into [`ApiError::Rejected`].
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<FailureEnvelope>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        tracing::warn!(status = status.as_u16(), %message, "API request rejected");

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
