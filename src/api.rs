use crate::error::AppError;
use crate::trending::{HashtagsResponse, TrendingTag};
use url::Url;

/// Thin client for the SphereMint backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(format!(
                "{} ({})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Other(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET /posts/hashtags`, truncated to the first few entries.
    pub async fn trending_hashtags(&self) -> Result<Vec<TrendingTag>, AppError> {
        let url = self.endpoint(&["posts", "hashtags"])?;
        tracing::debug!("fetching trending hashtags from {url}");
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let response: HashtagsResponse = serde_json::from_str(&body)?;
        Ok(response.into_trending())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_backend, unreachable_base_url, Reply};
    use axum::http::StatusCode;

    #[test]
    fn endpoint_appends_to_base_path() {
        let client = ApiClient::new(Url::parse("http://localhost:5000/api/").unwrap()).unwrap();
        assert_eq!(
            client.endpoint(&["posts", "hashtags"]).unwrap().as_str(),
            "http://localhost:5000/api/posts/hashtags"
        );
        let client = ApiClient::new(Url::parse("http://localhost:5000").unwrap()).unwrap();
        assert_eq!(
            client.endpoint(&["posts", "hashtags"]).unwrap().as_str(),
            "http://localhost:5000/posts/hashtags"
        );
    }

    #[tokio::test]
    async fn decodes_trending_hashtags() {
        let backend = spawn_backend(Reply::json(
            r##"{"hashtags":[{"tag":"#a"},{"tag":"#b"},{"tag":"#c"},{"tag":"#d"},{"tag":"#e"},{"tag":"#f"}]}"##,
        ))
        .await;
        let client = ApiClient::new(backend.base_url.clone()).unwrap();

        let tags = client.trending_hashtags().await.unwrap();
        let names: Vec<&str> = tags.iter().map(TrendingTag::name).collect();
        assert_eq!(names, ["a", "b", "c", "d", "e"]);
        assert_eq!(backend.hits(), 1);
    }

    #[tokio::test]
    async fn missing_field_is_empty() {
        let backend = spawn_backend(Reply::json("{}")).await;
        let client = ApiClient::new(backend.base_url.clone()).unwrap();
        assert!(client.trending_hashtags().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn error_status_is_a_request_error() {
        let backend = spawn_backend(Reply::status(StatusCode::INTERNAL_SERVER_ERROR)).await;
        let client = ApiClient::new(backend.base_url.clone()).unwrap();
        assert!(matches!(
            client.trending_hashtags().await,
            Err(AppError::Request(_))
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let backend = spawn_backend(Reply::json("<html>oops</html>")).await;
        let client = ApiClient::new(backend.base_url.clone()).unwrap();
        assert!(matches!(
            client.trending_hashtags().await,
            Err(AppError::Json(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_request_error() {
        let client = ApiClient::new(unreachable_base_url().await).unwrap();
        assert!(matches!(
            client.trending_hashtags().await,
            Err(AppError::Request(_))
        ));
    }
}
