use console::{style, Attribute};
use log::{debug, info};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::Response;

/// Where the orchestrator gets its data from.
pub trait DictionarySource {
    fn fetch(&self, word: &str) -> Result<Response>;
}

/// Appends `word` as a path segment of `base` and the key as `?key=`.
pub fn build_query_url(base: &Url, word: &str, api_key: &str) -> Result<Url> {
    let mut parsed = base.clone();
    parsed
        .path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(word);
    parsed.query_pairs_mut().append_pair("key", api_key);
    Ok(parsed)
}

/// Blocking HTTP client for the Collegiate Dictionary API.
pub struct HttpSource {
    config: Config,
    debug: bool,
}

impl HttpSource {
    pub fn new(config: Config) -> Self {
        HttpSource {
            config,
            debug: false,
        }
    }

    /// Echo the request URL and the raw JSON body to stdout.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl DictionarySource for HttpSource {
    fn fetch(&self, word: &str) -> Result<Response> {
        let url = build_query_url(&self.config.base_url, word, &self.config.api_key)?;
        if self.debug {
            println!("url: {}", style(&url).attr(Attribute::Underlined));
        }
        info!("looking up '{}'", word);

        let resp = reqwest::blocking::get(url)?;
        let status = resp.status();
        debug!("dictionary API answered {}", status);
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = resp.text()?;
        if self.debug {
            println!("{}", style(&body).green());
        }
        Response::from_json(&body)
    }
}
