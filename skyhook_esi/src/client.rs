use std::{sync::Arc, time::Duration};

use reqwest::{Method, header::ACCEPT_LANGUAGE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    EsiError, EsiResult,
    auth::AccessTokenSource,
    config::ClientConfig,
    errors::{StatusError, StatusKind},
    query::Query,
    response::EsiResponse,
};

const ERROR_LIMIT_WARN_THRESHOLD: u32 = 20;

/// Shared transport for every endpoint module.
///
/// Endpoint methods live in `crate::api::*` as additional `impl EsiClient`
/// blocks; they only shape paths, queries and payloads and delegate to
/// [`EsiClient::get`], [`EsiClient::post`], [`EsiClient::put`],
/// [`EsiClient::delete`] and [`EsiClient::get_paginated`].
#[derive(Clone)]
pub struct EsiClient {
    http: reqwest::Client,
    config: ClientConfig,
    base_url: Url,
    token_source: Option<Arc<dyn AccessTokenSource>>,
}

pub struct EsiClientBuilder {
    config: EsiResult<ClientConfig>,
    token_source: Option<Arc<dyn AccessTokenSource>>,
}

impl EsiClientBuilder {
    fn new(user_agent: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(user_agent),
            token_source: None,
        }
    }

    fn map_config(mut self, apply: impl FnOnce(&mut ClientConfig)) -> Self {
        if let Ok(config) = self.config.as_mut() {
            apply(config);
        }
        self
    }

    pub fn base_url(self, base_url: Url) -> Self {
        self.map_config(|config| config.base_url = base_url)
    }

    pub fn datasource(self, datasource: impl Into<String>) -> Self {
        let datasource = datasource.into();
        self.map_config(|config| config.datasource = datasource)
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        self.map_config(|config| config.timeout = timeout)
    }

    pub fn page_concurrency(self, page_concurrency: usize) -> Self {
        self.map_config(|config| config.page_concurrency = page_concurrency)
    }

    pub fn language(self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.map_config(|config| config.language = Some(language))
    }

    pub fn token_source(mut self, source: impl AccessTokenSource + 'static) -> Self {
        self.token_source = Some(Arc::new(source));
        self
    }

    pub fn build(self) -> EsiResult<EsiClient> {
        let client = EsiClient::new(self.config?)?;
        Ok(match self.token_source {
            Some(source) => client.with_shared_token_source(source),
            None => client,
        })
    }
}

impl EsiClient {
    pub fn builder(user_agent: impl Into<String>) -> EsiClientBuilder {
        EsiClientBuilder::new(user_agent)
    }

    pub fn new(config: ClientConfig) -> EsiResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url(),
            config,
            token_source: None,
        })
    }

    pub fn with_token_source(self, source: impl AccessTokenSource + 'static) -> Self {
        self.with_shared_token_source(Arc::new(source))
    }

    pub fn with_shared_token_source(mut self, source: Arc<dyn AccessTokenSource>) -> Self {
        self.token_source = Some(source);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.token_source.is_some()
    }

    pub async fn get(&self, path: &str, query: &Query) -> EsiResult<EsiResponse> {
        self.send::<()>(Method::GET, path, query, None).await
    }

    pub async fn post<B>(&self, path: &str, query: &Query, body: &B) -> EsiResult<EsiResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, query, Some(body)).await
    }

    /// POST carrying only query parameters.
    pub async fn post_empty(&self, path: &str, query: &Query) -> EsiResult<EsiResponse> {
        self.send::<()>(Method::POST, path, query, None).await
    }

    pub async fn put<B>(&self, path: &str, query: &Query, body: &B) -> EsiResult<EsiResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, query, Some(body)).await
    }

    pub async fn delete(&self, path: &str, query: &Query) -> EsiResult<EsiResponse> {
        self.send::<()>(Method::DELETE, path, query, None).await
    }

    /// Resolves `path` under the base url.
    ///
    /// Dot segments (plain or percent-encoded) and anything that lands on
    /// another origin are rejected, so an interpolated value cannot steer a
    /// request, and its bearer token, to a different route.
    pub(crate) fn url_for(&self, path: &str) -> EsiResult<Url> {
        let relative = path.trim_start_matches(['/', '\\']);
        let route = relative.split(['?', '#']).next().unwrap_or_default();
        if route.split(['/', '\\']).any(is_dot_segment) {
            return Err(EsiError::InvalidPath(path.to_string()));
        }

        let url = self.base_url.join(relative)?;
        if url.origin() != self.base_url.origin() || !url.path().starts_with(self.base_url.path())
        {
            return Err(EsiError::InvalidPath(path.to_string()));
        }
        Ok(url)
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> EsiResult<EsiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;

        // A caller-supplied datasource or language replaces the configured one.
        let mut params: Vec<(&str, &str)> = Vec::new();
        if !query.contains("datasource") {
            params.push(("datasource", self.config.datasource.as_str()));
        }
        let language = query.get("language").or(self.config.language.as_deref());
        if let Some(language) = language
            && !query.contains("language")
        {
            params.push(("language", language));
        }
        params.extend(
            query
                .pairs()
                .iter()
                .map(|(name, value)| (name.as_ref(), value.as_str())),
        );

        let mut request = self.http.request(method.clone(), url).query(&params);
        if let Some(language) = language {
            request = request.header(ACCEPT_LANGUAGE, language);
        }
        if let Some(source) = &self.token_source {
            request = request.bearer_auth(source.access_token().await?);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        log::debug!("esi {method} {path}");
        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        let response = EsiResponse::from_parts(status, headers, body);

        if let Some(remain) = response.error_limit_remain()
            && remain < ERROR_LIMIT_WARN_THRESHOLD
        {
            log::warn!(
                "esi error limit low: {remain} errors left, window resets in {}s",
                response.error_limit_reset().unwrap_or_default()
            );
        }

        if !status.is_success() {
            log::debug!("esi {method} {path} failed with {status}");
            return Err(status_error(&response).into());
        }

        log::trace!("esi {method} {path} -> {status}");
        Ok(response)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

fn status_error(response: &EsiResponse) -> StatusError {
    let status = response.status();
    let message = match serde_json::from_slice::<ErrorBody>(response.body()) {
        Ok(body) => body.error,
        Err(_) => {
            let text = response.text();
            if text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_string()
            } else {
                text
            }
        }
    };

    StatusError {
        kind: StatusKind::from_status(status.as_u16()),
        status: status.as_u16(),
        message,
        error_limit_remain: response.error_limit_remain(),
        error_limit_reset: response.error_limit_reset(),
    }
}

impl std::fmt::Debug for EsiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsiClient")
            .field("base_url", &self.base_url.as_str())
            .field("datasource", &self.config.datasource)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{
        StatusCode,
        header::{HeaderMap, HeaderValue},
    };

    use super::{EsiClient, status_error};
    use crate::{EsiError, EsiResponse, errors::StatusKind};

    #[test]
    fn unwraps_esi_error_body() {
        let mut headers = HeaderMap::new();
        headers.insert("x-esi-error-limit-remain", HeaderValue::from_static("15"));
        let response = EsiResponse::from_parts(
            StatusCode::NOT_FOUND,
            headers,
            br#"{"error":"Character not found"}"#.to_vec(),
        );

        let err = status_error(&response);
        assert_eq!(err.kind, StatusKind::NotFound);
        assert_eq!(err.message, "Character not found");
        assert_eq!(err.error_limit_remain, Some(15));
    }

    #[test]
    fn falls_back_to_reason_phrase_for_empty_body() {
        let response =
            EsiResponse::from_parts(StatusCode::BAD_GATEWAY, HeaderMap::new(), Vec::new());
        let err = status_error(&response);
        assert_eq!(err.kind, StatusKind::BadGateway);
        assert_eq!(err.message, "Bad Gateway");
    }

    #[test]
    fn joins_relative_paths_under_the_version_segment() {
        let client = EsiClient::builder("skyhook-tests/0.1")
            .build()
            .expect("client");
        let url = client.url_for("/characters/1/").expect("url");
        assert_eq!(
            url.as_str(),
            "https://esi.evetech.net/latest/characters/1/"
        );
    }

    #[test]
    fn rejects_paths_that_leave_their_route() {
        let client = EsiClient::builder("skyhook-tests/0.1")
            .build()
            .expect("client");

        for path in [
            "/killmails/1/../../characters/1/wallet/",
            "/killmails/1/%2E%2e/x/",
            "/killmails/1/..\\characters/",
            "/characters/./1/",
            "https://attacker.example/latest/status/",
        ] {
            let err = client.url_for(path).expect_err(path);
            assert!(matches!(err, EsiError::InvalidPath(_)), "{path}: {err:?}");
        }

        let url = client
            .url_for("/markets/10000002/orders/?type_id=34")
            .expect("query string is fine");
        assert_eq!(url.query(), Some("type_id=34"));
    }

    #[test]
    fn builder_surfaces_invalid_config() {
        let result = EsiClient::builder("skyhook-tests/0.1")
            .page_concurrency(0)
            .build();
        assert!(result.is_err());
    }
}
