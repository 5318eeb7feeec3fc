use std::fmt;

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const APP_NAME: &str = "ROX Toolbox";
pub const APP_REPO_URL: &str = "https://github.com/feyrin/rox_toolbox";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

const GITHUB_TAGS_ENDPOINT: &str = "https://api.github.com/repos/feyrin/rox_toolbox/tags";

#[derive(Clone, Debug)]
pub struct TagVersion {
    pub raw: String,
    pub version: Version,
}

#[derive(Clone, Debug)]
pub struct UpdateInfo {
    pub current: Version,
    pub latest: Option<TagVersion>,
}

impl UpdateInfo {
    pub fn update_available(&self) -> bool {
        self.latest
            .as_ref()
            .map(|candidate| candidate.version > self.current)
            .unwrap_or(false)
    }
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("failed to build HTTP client: {0}")]
    BuildClient(String),
    #[error("invalid tags endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

#[derive(Deserialize)]
struct GitTag {
    name: String,
}

pub async fn check_for_update() -> Result<UpdateInfo, UpdateError> {
    let user_agent = format!("{}/{} (+{})", APP_NAME, version_label(), APP_REPO_URL);
    let client = Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|err| UpdateError::BuildClient(err.to_string()))?;

    let current = current_version()?;
    let latest = fetch_tags(&client)
        .await?
        .into_iter()
        .filter_map(parse_tag)
        .max_by(|a, b| a.version.cmp(&b.version));

    Ok(UpdateInfo { current, latest })
}

async fn fetch_tags(client: &Client) -> Result<Vec<GitTag>, UpdateError> {
    let mut url = Url::parse(GITHUB_TAGS_ENDPOINT)?;
    url.query_pairs_mut().append_pair("per_page", "100");

    client
        .get(url)
        .send()
        .await
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .error_for_status()
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .json::<Vec<GitTag>>()
        .await
        .map_err(|err| UpdateError::Decode(err.to_string()))
}

fn parse_tag(tag: GitTag) -> Option<TagVersion> {
    parse_version_str(&tag.name).ok().map(|version| TagVersion {
        raw: tag.name,
        version,
    })
}

fn parse_version_str(input: &str) -> Result<Version, UpdateError> {
    let trimmed = input.trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|err| UpdateError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, UpdateError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }
    parse_version_str(APP_VERSION)
}

pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}

impl fmt::Display for UpdateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.latest, self.update_available()) {
            (Some(tag), true) => write!(
                f,
                "New version available: {} (current {})",
                tag.raw, self.current
            ),
            (Some(tag), false) => write!(f, "Up to date on {}", tag.raw),
            (None, _) => write!(f, "No release information found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_strings_tolerate_a_v_prefix() {
        assert_eq!(parse_version_str("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version_str("1.2.3").unwrap(), Version::new(1, 2, 3));
        assert!(parse_version_str("one.two").is_err());
    }

    #[test]
    fn update_available_compares_semver() {
        let info = UpdateInfo {
            current: Version::new(0, 4, 1),
            latest: Some(TagVersion {
                raw: "v0.5.0".into(),
                version: Version::new(0, 5, 0),
            }),
        };
        assert!(info.update_available());

        let info = UpdateInfo {
            current: Version::new(0, 4, 1),
            latest: None,
        };
        assert!(!info.update_available());
    }
}
