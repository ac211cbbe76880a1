use crate::config::Config;
use crate::error::FetchError;
use crate::types::GitHubRepo;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;
use url::Url;

pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            FetchError::InvalidUrl(format!("{}: {}", config.api_base_url, e))
        })?;

        // No timeout or retry policy: one attempt, default transport settings.
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::ClientInit)?;

        Ok(GitHubClient { client, base_url })
    }

    /// List the public repositories of `username`, in the order the API returns them.
    ///
    /// Only the API's default first page is requested.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, FetchError> {
        let url = repos_url(&self.base_url, username)?;
        debug!(%url, "Requesting user repositories");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::RequestFailed)?;

        let status = response.status();
        let body = response.bytes().await.map_err(FetchError::BodyReadFailed)?;

        if status.as_u16() >= 400 {
            debug!(%url, status = status.as_u16(), "GitHub API returned an error status");
            return Err(FetchError::ApiError {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let repos: Vec<GitHubRepo> =
            serde_json::from_slice(&body).map_err(FetchError::DecodeFailed)?;
        debug!(count = repos.len(), "Decoded repositories");

        Ok(repos)
    }
}

/// Build `{base}/users/{username}/repos`.
///
/// The username becomes exactly one path segment, so reserved characters are
/// percent-encoded rather than reshaping the path or query. `.` and `..` are
/// rejected: URL parsing collapses them (even as `%2E`), which would address
/// a different resource.
pub fn repos_url(base: &Url, username: &str) -> Result<Url, FetchError> {
    if username == "." || username == ".." {
        return Err(FetchError::InvalidUrl(format!(
            "username {:?} cannot be used as a path segment",
            username
        )));
    }

    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .push("users")
        .push(username)
        .push("repos");
    Ok(url)
}

/// Create a client for `config` and perform the single listing request.
pub async fn fetch_repos(config: &Config, username: &str) -> Result<Vec<GitHubRepo>, FetchError> {
    let client = GitHubClient::new(config)?;
    client.fetch_user_repos(username).await
}
