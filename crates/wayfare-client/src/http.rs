//! HTTP client for the wayfare API

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use wayfare_api::{
    requests::{
        CreateListingRequest, CreateSessionRequest, PatchListingRequest, UpdateListingRequest,
    },
    responses::{HealthResponse, ListingListResponse, ListingResponse, SessionResponse},
};

use crate::error::{ClientError, Result};

/// Credentials attached to every request
#[derive(Debug, Clone)]
enum Auth {
    Basic { username: String, password: String },
    Bearer(String),
}

/// HTTP client for communicating with the wayfare server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    auth: Option<Auth>,
}

impl HttpClient {
    /// Create a new unauthenticated HTTP client
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    ///
    /// # Example
    /// ```no_run
    /// use wayfare_client::HttpClient;
    ///
    /// let client = HttpClient::new("http://localhost:8080")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            client: Client::new(),
            base_url,
            auth: None,
        })
    }

    /// Create a new HTTP client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            client,
            base_url,
            auth: None,
        })
    }

    /// Attach basic credentials to every request
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(Auth::Basic {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Attach a bearer session token to every request
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(Auth::Bearer(token.into()));
        self
    }

    /// Build a full URL from a path
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(ClientError::Url)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(Auth::Basic { username, password }) => {
                request.basic_auth(username, Some(password))
            }
            Some(Auth::Bearer(token)) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }
        Ok(response.json().await?)
    }

    /// Perform a GET request and deserialize the response
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let response = self.apply_auth(self.client.get(url)).send().await?;
        Self::handle(response).await
    }

    /// Perform a POST request with JSON body
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl serde::Serialize,
    ) -> Result<T> {
        let url = self.url(path)?;
        let response = self
            .apply_auth(self.client.post(url))
            .json(&body)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// Perform a PUT request with JSON body
    async fn put<T: DeserializeOwned>(&self, path: &str, body: impl serde::Serialize) -> Result<T> {
        let url = self.url(path)?;
        let response = self
            .apply_auth(self.client.put(url))
            .json(&body)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// Perform a PATCH request with JSON body
    async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl serde::Serialize,
    ) -> Result<T> {
        let url = self.url(path)?;
        let response = self
            .apply_auth(self.client.patch(url))
            .json(&body)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// Perform a DELETE request
    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path)?;
        let response = self.apply_auth(self.client.delete(url)).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }
        Ok(())
    }

    // System endpoints

    /// Get server health status
    ///
    /// # Errors
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.get("/health").await
    }

    // Session endpoints

    /// Exchange credentials for a bearer session token
    ///
    /// The returned token is not stored on the client; pass it to
    /// [`HttpClient::with_token`].
    ///
    /// # Errors
    /// Returns `ClientError::Api` with status 401 on bad credentials.
    pub async fn create_session(&self, username: &str, password: &str) -> Result<SessionResponse> {
        let request = CreateSessionRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/api/v1/auth/sessions", request).await
    }

    /// Revoke the bearer session token attached to this client
    ///
    /// # Errors
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete_session(&self) -> Result<()> {
        self.delete("/api/v1/auth/sessions").await
    }

    // Listing endpoints

    /// List listings with optional filtering and pagination
    ///
    /// # Example
    /// ```no_run
    /// # use wayfare_client::HttpClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = HttpClient::new("http://localhost:8080")?
    ///     .with_basic_auth("admin", "hunter2");
    /// let listings = client.list_listings()
    ///     .page(1)
    ///     .per_page(50)
    ///     .status("active")
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn list_listings(&self) -> ListListingsBuilder {
        ListListingsBuilder::new(self.clone())
    }

    /// Get a single listing by id
    ///
    /// # Errors
    /// Returns `ClientError::Api` with status 404 when the id is unknown.
    pub async fn get_listing(&self, id: i64) -> Result<ListingResponse> {
        self.get(&format!("/api/v1/listings/{id}")).await
    }

    /// Create a new listing
    ///
    /// # Errors
    /// Returns `ClientError::Api` with status 400 on validation failure.
    pub async fn create_listing(&self, request: CreateListingRequest) -> Result<ListingResponse> {
        self.post("/api/v1/listings", request).await
    }

    /// Replace every writable field of a listing
    ///
    /// # Errors
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_listing(
        &self,
        id: i64,
        request: UpdateListingRequest,
    ) -> Result<ListingResponse> {
        self.put(&format!("/api/v1/listings/{id}"), request).await
    }

    /// Apply a partial update to a listing
    ///
    /// # Errors
    /// Returns an error if the request fails or the server returns an error.
    pub async fn patch_listing(
        &self,
        id: i64,
        request: PatchListingRequest,
    ) -> Result<ListingResponse> {
        self.patch(&format!("/api/v1/listings/{id}"), request).await
    }

    /// Delete a listing
    ///
    /// # Errors
    /// Returns `ClientError::Api` with status 404 when the id is unknown.
    pub async fn delete_listing(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/v1/listings/{id}")).await
    }
}

/// Builder for listing queries
#[derive(Debug, Clone)]
pub struct ListListingsBuilder {
    client: HttpClient,
    page: Option<u64>,
    per_page: Option<u64>,
    status: Option<String>,
}

impl ListListingsBuilder {
    fn new(client: HttpClient) -> Self {
        Self {
            client,
            page: None,
            per_page: None,
            status: None,
        }
    }

    /// Page number (1-indexed)
    #[must_use]
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Items per page
    #[must_use]
    pub fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Only return listings with this status
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Path with query string, relative to the base URL
    fn path(&self) -> String {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={page}"));
        }
        if let Some(per_page) = self.per_page {
            params.push(format!("per_page={per_page}"));
        }
        if let Some(status) = &self.status {
            params.push(format!("status={status}"));
        }
        if params.is_empty() {
            "/api/v1/listings".to_string()
        } else {
            format!("/api/v1/listings?{}", params.join("&"))
        }
    }

    /// Execute the query
    ///
    /// # Errors
    /// Returns an error if the request fails or the server returns an error.
    pub async fn send(self) -> Result<ListingListResponse> {
        let path = self.path();
        self.client.get(&path).await
    }
}
