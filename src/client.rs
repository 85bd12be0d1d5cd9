use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::coerce::Record;
use crate::config::PokemonConfig;
use crate::error::PokeApiError;
use crate::listing::ListingPage;
use crate::pokemon::Pokemon;

/// Public PokéAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Read-only client for the PokéAPI REST catalog.
#[derive(Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PokeApiError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            PokeApiError::from(e)
        })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &PokemonConfig) -> Result<Self, PokeApiError> {
        Self::new(&config.api_url, Duration::from_secs(config.timeout))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET and classify the response status. `what` names the
    /// resource in `NotFound` errors.
    async fn send(
        &self,
        request: RequestBuilder,
        url: &str,
        what: &str,
    ) -> Result<Response, PokeApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to make HTTP request to {}: {}", url, e);
            PokeApiError::Transport(format!("Request Error: {}", e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Resource not found: {}", what);
            return Err(PokeApiError::NotFound(format!("Resource not found: {}", what)));
        }
        if !status.is_success() {
            let error_msg = format!("HTTP Error: {} for {}", status, url);
            tracing::error!("{}", error_msg);
            return Err(PokeApiError::Transport(error_msg));
        }

        Ok(response)
    }

    async fn request(
        &self,
        endpoint: &str,
        query: Option<&[(&str, u32)]>,
    ) -> Result<Value, PokeApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("Fetching {} (query: {:?})", url, query);

        let mut request = self.http.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = self.send(request, &url, endpoint).await?;

        response.json::<Value>().await.map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            PokeApiError::MalformedResponse(format!("Invalid JSON response: {}", e))
        })
    }

    /// Fetch one resource by name or numeric id as raw JSON.
    pub async fn get_resource(
        &self,
        resource_type: &str,
        identifier: &str,
    ) -> Result<Value, PokeApiError> {
        self.request(&format!("{}/{}", resource_type, identifier), None)
            .await
    }

    /// Fetch one page of a listing endpoint.
    pub async fn get_resource_list(
        &self,
        resource_type: &str,
        limit: u32,
        offset: u32,
    ) -> Result<ListingPage, PokeApiError> {
        let query = [("limit", limit), ("offset", offset)];
        let raw = self.request(resource_type, Some(&query[..])).await?;
        ListingPage::from_value(raw)
    }

    pub async fn get_pokemon(&self, identifier: &str) -> Result<Pokemon, PokeApiError> {
        let raw = self.get_resource("pokemon", identifier).await?;
        let pokemon = Pokemon::from_value(raw).map_err(|e| {
            tracing::error!("Failed to build Pokémon {}: {}", identifier, e);
            e
        })?;
        tracing::debug!(
            "Successfully fetched Pokémon: {:?} (ID: {:?})",
            pokemon.name,
            pokemon.id
        );
        Ok(pokemon)
    }

    pub async fn get_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<ListingPage, PokeApiError> {
        self.get_resource_list("pokemon", limit, offset).await
    }

    /// Download raw bytes, e.g. a sprite image.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, PokeApiError> {
        tracing::debug!("Downloading {}", url);
        let response = self.send(self.http.get(url), url, url).await?;
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read body of {}: {}", url, e);
            PokeApiError::Transport(format!("Request Error: {}", e))
        })?;
        Ok(bytes.to_vec())
    }
}
