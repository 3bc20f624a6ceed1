use crate::config::OmdbApiConfig;
use crate::result::Result;
use crate::sources::Enrich;

use async_trait::async_trait;
use regex::Regex;
use serde_json::{Map, Value};

/// OMDb lookup client. Cloned into one tokio task per title, so it owns its
/// config rather than borrowing it.
#[derive(Debug, Clone)]
pub struct OmdbApi {
    config: OmdbApiConfig,
    rx_whitespace: Regex,
}

impl OmdbApi {
    pub fn new(config: OmdbApiConfig) -> Result<OmdbApi> {
        Ok(OmdbApi {
            config,
            rx_whitespace: Regex::new(r"\s")?,
        })
    }

    /// OMDb expects '+' separators inside the title query parameter.
    fn query_title(&self, title: &str) -> String {
        self.rx_whitespace.replace_all(title, "+").into_owned()
    }
}

#[async_trait]
impl Enrich for OmdbApi {
    async fn lookup(&self, title: &str) -> Result<Option<Map<String, Value>>> {
        let title = self.query_title(title);

        let client = reqwest::Client::new();
        let json = client
            .get(&self.config.url)
            .query(&[
                ("t", title.as_str()),
                ("y", ""),
                ("plot", "short"),
                ("r", "json"),
                ("tomatoes", "true"),
            ])
            .send()
            .await?
            .json::<Value>()
            .await?;

        match json {
            Value::Object(fields)
                if fields.get("Response").and_then(Value::as_str) == Some("True") =>
            {
                Ok(Some(fields))
            }
            _ => Ok(None),
        }
    }
}
