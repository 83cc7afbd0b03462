use std::env;

use url::Url;

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "MW_API_KEY";
pub const COLLEGIATE_URL: &str = "https://www.dictionaryapi.com/api/v3/references/collegiate/json/";

/// Everything the dictionary client needs to reach the API.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: Url,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Config {
            api_key: api_key.into(),
            base_url: Url::parse(COLLEGIATE_URL)?,
        })
    }

    /// Reads the API key from `MW_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Config::from_key(env::var(API_KEY_VAR).ok())
    }

    /// Builds a config from a raw key value; unset or blank is an error.
    pub fn from_key(value: Option<String>) -> Result<Self> {
        match value.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Config::new(key),
            _ => Err(Error::MissingApiKey(API_KEY_VAR)),
        }
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }
}
