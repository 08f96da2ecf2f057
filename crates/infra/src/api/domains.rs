//! Domain facade: CRUD over the subscriber-domain collection
//!
//! Mutating calls identify the acting admin by attaching `adminEmail` and
//! `adminName` query parameters read from the injected session; with no
//! session user the parameters are omitted and the call still proceeds
//! (the backend decides whether that is permitted). Mutation failures
//! surface the server's error body verbatim when one is present.

use reportdeck_common::SessionStore;
use reportdeck_domain::DomainRecord;
use reqwest::{Method, RequestBuilder};
use tracing::{debug, info, warn};

use super::errors::ApiError;
use super::expect_json;
use crate::config::ApiConfig;
use crate::http::HttpClient;

/// Facade for the `/domains` endpoints
pub struct DomainApi {
    http: HttpClient,
    base_url: String,
    session: SessionStore,
}

impl DomainApi {
    /// Create the facade against `config`, reading admin identity from
    /// `session`
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, ApiError> {
        let http = super::build_http(config)?;
        Ok(Self { http, base_url: format!("{}/domains", config.base_url), session })
    }

    /// Fetch every domain
    pub async fn all_domains(&self) -> Result<Vec<DomainRecord>, ApiError> {
        match expect_json(&self.http, self.request(Method::GET, "")).await {
            Ok(domains) => Ok(domains),
            Err(err) => {
                warn!(error = %err, "fetching domains failed");
                Err(err)
            }
        }
    }

    /// Fetch one domain by id
    pub async fn domain_by_id(&self, id: &str) -> Result<DomainRecord, ApiError> {
        let path = format!("/{}", urlencoding::encode(id));
        match expect_json(&self.http, self.request(Method::GET, &path)).await {
            Ok(domain) => Ok(domain),
            Err(err) => {
                warn!(error = %err, id, "fetching domain failed");
                Err(err)
            }
        }
    }

    /// Create a new domain, attributed to the current session user
    pub async fn add_domain(&self, domain: &DomainRecord) -> Result<DomainRecord, ApiError> {
        let builder = self.request(Method::POST, "").query(&self.admin_params()).json(domain);
        let created = self.mutate_json(builder).await?;
        info!(name = %domain.name, "domain added");
        Ok(created)
    }

    /// Replace an existing domain, attributed to the current session user
    pub async fn update_domain(
        &self,
        id: &str,
        domain: &DomainRecord,
    ) -> Result<DomainRecord, ApiError> {
        let path = format!("/{}", urlencoding::encode(id));
        let builder = self.request(Method::PUT, &path).query(&self.admin_params()).json(domain);
        let updated = self.mutate_json(builder).await?;
        info!(id, "domain updated");
        Ok(updated)
    }

    /// Delete a domain, attributed to the current session user
    pub async fn delete_domain(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/{}", urlencoding::encode(id));
        let builder = self.request(Method::DELETE, &path).query(&self.admin_params());

        let response = self.http.send(builder).await.inspect_err(|err| {
            warn!(error = %err, id, "deleting domain failed");
        })?;
        self.check_mutation_status(response).await?;
        info!(id, "domain deleted");
        Ok(())
    }

    /// `adminEmail`/`adminName` pairs for the acting user, empty when no
    /// session user is present
    fn admin_params(&self) -> Vec<(&'static str, String)> {
        match self.session.current_user() {
            Some(user) => {
                vec![("adminEmail", user.email), ("adminName", user.full_name)]
            }
            None => Vec::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, url = %url, "domain request");
        self.http.request(method, url)
    }

    async fn mutate_json(&self, builder: RequestBuilder) -> Result<DomainRecord, ApiError> {
        let response = self.http.send(builder).await.inspect_err(|err| {
            warn!(error = %err, "domain mutation failed");
        })?;
        let response = self.check_mutation_status(response).await?;
        response.json().await.map_err(|e| ApiError::Client(format!("Failed to parse response: {e}")))
    }

    /// Surface the server's error body verbatim; with an empty body the
    /// status line alone becomes the message.
    async fn check_mutation_status(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        warn!(%status, url = %url, "domain mutation rejected");
        let message = if body.trim().is_empty() {
            format!("{url} returned status {status}")
        } else {
            body
        };
        Err(ApiError::from_status(status, message))
    }
}
