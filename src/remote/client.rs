//! HTTP client for the recipe API.

use std::time::Duration;

use crate::config::RemoteConfig;
use crate::error::EngineError;
use crate::model::Recipe;
use crate::remote::{DataPage, SearchRequest};
use crate::search::orchestrator::RecipeSource;

/// reqwest-backed implementation of [`RecipeSource`].
///
/// Two read-only endpoints: the parameterless feed and the ranked search.
/// Both return `{ "data": [Recipe, ...] }`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_page(&self, req: reqwest::RequestBuilder) -> Result<Vec<Recipe>, EngineError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(EngineError::Status {
                code: status.as_u16(),
            });
        }
        let body = resp.text().await?;
        let page: DataPage<Recipe> = serde_json::from_str(&body)?;
        Ok(page.data)
    }
}

impl RecipeSource for ApiClient {
    async fn fetch_feed(&self) -> Result<Vec<Recipe>, EngineError> {
        let url = format!("{}/recipes", self.base_url);
        tracing::debug!(url = %url, "feed_fetch");
        self.get_page(self.http.get(&url)).await
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<Recipe>, EngineError> {
        let url = format!("{}/recipes/search", self.base_url);
        tracing::debug!(url = %url, q = %request.q, "search_fetch");
        self.get_page(self.http.get(&url).query(&[
            ("q", request.q.as_str()),
            ("dificultad", request.dificultad.as_str()),
            ("tiempo_max", request.tiempo_max.as_str()),
            ("orden", request.orden.as_str()),
        ]))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let cfg = RemoteConfig {
            base_url: "http://example.test/api/".into(),
            ..RemoteConfig::default()
        };
        let client = ApiClient::new(&cfg).unwrap();
        assert_eq!(client.base_url, "http://example.test/api");
    }
}
