//! HTTP client for the glamping backend REST API.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    payload::{Payload, RequestBody},
    query::{ListQuery, Query, StatisticsQuery},
    types::{
        MutationResponse, QuantityPoint, Resource, ResourcePage, SalesPoint, Session,
        SignInRequest,
    },
    Error,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the glamping backend.
///
/// Every request carries the active UI locale in `Accept-Language` and, once
/// signed in, the bearer token. The token lives only in memory.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API, e.g. `https://api.example.com/api`.
    base_api_url: String,
    locale: String,
    token: Option<String>,
}

impl Client {
    /// Creates a client for the given base URL with the default 30s timeout.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e.to_string())
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            locale: "en".to_string(),
            token: None,
        })
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Replaces the in-memory bearer token, e.g. after signing in.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("accept", "application/json")
            .header("accept-language", &self.locale);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and returns the raw body of a successful response.
    async fn send(&self, builder: RequestBuilder) -> Result<String, Error> {
        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to reach backend: {}", e);
            Error::Network(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e.to_string())
        })?;

        if !status.is_success() {
            tracing::warn!("Request failed with status {}: {}", status, truncate_body(&body));
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let body = self.send(self.request(Method::GET, url)).await?;
        decode(&body)
    }

    async fn mutate(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<MutationResponse, Error> {
        let url = self.get_url(path, None::<&ListQuery>)?;
        tracing::debug!("{} {}", method, url);
        let builder = self.request(method, url);
        let builder = match body {
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart(parts)) => builder.multipart(parts.into_form()?),
            None => builder,
        };
        let body = self.send(builder).await?;
        if body.trim().is_empty() {
            return Ok(MutationResponse::default());
        }
        decode(&body)
    }

    /// Fetches one page of `R`, e.g. `client.list::<Glamping>(&query)`.
    pub async fn list<R: Resource>(&self, query: &ListQuery) -> Result<ResourcePage<R>, Error> {
        let url = self.get_url(&format!("/{}", R::BASE_PATH), Some(query))?;
        tracing::debug!("GET {}", url);
        let body = self.send(self.request(Method::GET, url)).await?;
        ResourcePage::<R>::from_json(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {} page: {} | body: {}", R::LIST_KEY, e, snippet);
            Error::Decode(e.to_string())
        })
    }

    pub async fn create<P: Payload>(&self, payload: &P) -> Result<MutationResponse, Error> {
        let path = format!("/{}", P::Target::BASE_PATH);
        self.mutate(Method::POST, &path, Some(payload.to_body()?))
            .await
    }

    pub async fn update<P: Payload>(
        &self,
        id: i64,
        payload: &P,
    ) -> Result<MutationResponse, Error> {
        let path = format!("/{}/{}", P::Target::BASE_PATH, id);
        self.mutate(Method::PUT, &path, Some(payload.to_body()?))
            .await
    }

    pub async fn delete<R: Resource>(&self, id: i64) -> Result<MutationResponse, Error> {
        let path = format!("/{}/{}", R::BASE_PATH, id);
        self.mutate(Method::DELETE, &path, None).await
    }

    pub async fn enable<R: Resource>(&self, id: i64) -> Result<MutationResponse, Error> {
        let path = format!("/{}/{}/enable", R::BASE_PATH, id);
        self.mutate(Method::PUT, &path, None).await
    }

    pub async fn disable<R: Resource>(&self, id: i64) -> Result<MutationResponse, Error> {
        let path = format!("/{}/{}/disable", R::BASE_PATH, id);
        self.mutate(Method::PUT, &path, None).await
    }

    /// Exchanges credentials for a profile and bearer token.
    ///
    /// The token is returned, not stored; callers decide whether to keep it
    /// via [`Client::set_token`].
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<Session, Error> {
        let url = self.get_url("/auth/signin", None::<&ListQuery>)?;
        tracing::debug!("POST {}", url);
        let body = self
            .send(self.request(Method::POST, url).json(request))
            .await?;
        decode(&body)
    }

    pub async fn net_sales(&self, query: &StatisticsQuery) -> Result<Vec<SalesPoint>, Error> {
        self.get::<Vec<SalesPoint>, StatisticsQuery>("/statistics/net-sales", Some(query))
            .await
    }

    pub async fn reserve_quantity(
        &self,
        query: &StatisticsQuery,
    ) -> Result<Vec<QuantityPoint>, Error> {
        self.get::<Vec<QuantityPoint>, StatisticsQuery>("/statistics/reserve-quantity", Some(query))
            .await
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::Decode(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
