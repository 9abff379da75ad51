use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::time::Duration;

use crate::api::DEFAULT_ENDPOINT;

pub(crate) const ENDPOINT_ENV: &str = "TXVIEW_ENDPOINT";
pub(crate) const TIMEOUT_ENV: &str = "TXVIEW_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) endpoint: Url,
    /// No timeout unless configured.
    pub(crate) timeout: Option<Duration>,
}

impl Config {
    /// Resolve from command-line flags, then the environment, then defaults.
    /// Returns the config and the arguments left after removing global flags.
    pub(crate) fn from_args(args: &[String]) -> Result<(Self, Vec<String>)> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    fn resolve(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, Vec<String>)> {
        let mut endpoint_flag = None;
        let mut timeout_flag = None;
        let mut rest = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let (name, inline) = match arg.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (arg.as_str(), None),
            };
            let slot = match name {
                "--endpoint" => &mut endpoint_flag,
                "--timeout" => &mut timeout_flag,
                _ => {
                    rest.push(arg.clone());
                    continue;
                }
            };
            let value = match inline {
                Some(value) => value,
                None => match iter.next() {
                    Some(value) => value.clone(),
                    None => bail!("Missing value for {name}"),
                },
            };
            *slot = Some(value);
        }

        let endpoint_raw = endpoint_flag
            .or_else(|| env(ENDPOINT_ENV))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = parse_endpoint(&endpoint_raw)?;

        let timeout = match timeout_flag.or_else(|| env(TIMEOUT_ENV)) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok((Self { endpoint, timeout }, rest))
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid endpoint URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Endpoint must be an http(s) URL: {raw}");
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid timeout (expected whole seconds): {raw}"))?;
    if secs == 0 {
        bail!("Timeout must be at least 1 second");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
