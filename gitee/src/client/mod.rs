use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

mod error;
mod pagination;
mod rate_limit;
mod repos;

pub use error::{Error, GiteeClientError, Result};
pub use pagination::{Pagination, PaginationOptions};
pub use rate_limit::Rate;
pub use repos::{
    CreateRepositoryRequest, ListCollaboratorsOptions, RepositoryClient, UpdateRepositoryRequest,
};

// Constants
const DEFAULT_BASE_URL: &str = "https://gitee.com/api/v5/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const HEADER_LINK: &str = "Link";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";
const HEADER_TOTAL_COUNT: &str = "total_count";
const HEADER_TOTAL_PAGE: &str = "total_page";

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    access_token: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            access_token: None,
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn access_token<S: Into<String>>(mut self, access_token: S) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let client = ReqwestClient::builder().user_agent(&user_agent).build()?;

        Ok(Client {
            base_url,
            user_agent,
            access_token: self.access_token,
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public Gitee API,
    /// but can be overridden for use with a self-hosted Gitee instance. Must
    /// always be terminated with a trailing slash.
    base_url: String,

    /// User agent string sent when communicating with Gitee APIs
    #[allow(unused)]
    user_agent: String,

    /// Access token appended to requests issued to Gitee
    access_token: Option<String>,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build().unwrap()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    fn patch(&self, url: &str) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, url);
        let request = self.client.request(method, &url);

        // Gitee takes the access token as a query parameter on every call
        match &self.access_token {
            Some(token) => request.query(&[("access_token", token.as_str())]),
            None => request,
        }
    }

    // Check a response received from Gitee, capturing the pagination and
    // rate limit information carried by its headers. Non-success statuses
    // are turned into errors built from the json payload Gitee returns.
    async fn error_for_status(
        &self,
        response: reqwest::Response,
    ) -> Result<(Pagination, Rate, reqwest::Response)> {
        debug!("Gitee Response: {:#?}", response);

        let pagination = Pagination::from_headers(response.headers());
        let rate = Rate::from_headers(response.headers());

        if !response.status().is_success() {
            let status = response.status();
            let payload = response.json().await.unwrap_or_default();
            return Err(Error::GiteeClientError(status, payload));
        }

        Ok((pagination, rate, response))
    }

    async fn json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<Response<T>> {
        let (pagination, rate, response) = self.error_for_status(response).await?;
        let payload = response.text().await?;
        let inner = serde_json::from_str(&payload)?;

        Ok(Response::new(pagination, rate, inner))
    }

    async fn empty(&self, response: reqwest::Response) -> Result<Response<()>> {
        let (pagination, rate, _response) = self.error_for_status(response).await?;

        Ok(Response::new(pagination, rate, ()))
    }

    // Endpoints which answer a yes/no question do so with 204 / 404 statuses
    async fn boolean(&self, response: reqwest::Response) -> Result<Response<bool>> {
        if response.status() == StatusCode::NOT_FOUND {
            let pagination = Pagination::from_headers(response.headers());
            let rate = Rate::from_headers(response.headers());
            return Ok(Response::new(pagination, rate, false));
        }

        let (pagination, rate, _response) = self.error_for_status(response).await?;

        Ok(Response::new(pagination, rate, true))
    }

    pub fn repos(&self) -> RepositoryClient {
        RepositoryClient::new(&self)
    }
}

fn header_number(headers: &reqwest::header::HeaderMap, name: &str) -> Option<usize> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse().ok())
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// A `Response` from the Gitee API: the deserialized payload along with the
/// pagination and rate limit information from the response headers
#[derive(Debug)]
pub struct Response<T> {
    pagination: Pagination,
    rate: Rate,
    inner: T,
}

impl<T> Response<T> {
    fn new(pagination: Pagination, rate: Rate, inner: T) -> Self {
        Self {
            pagination,
            rate,
            inner,
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn rate(&self) -> &Rate {
        &self.rate
    }

    pub fn into_parts(self) -> (Pagination, Rate, T) {
        (self.pagination, self.rate, self.inner)
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod test {
    use super::{Client, DEFAULT_BASE_URL};

    #[test]
    fn default_base_url() {
        let client = Client::new();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_always_ends_with_a_slash() {
        let client = Client::builder()
            .base_url("http://localhost:8080/api/v5")
            .access_token("token")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v5/");
    }
}
