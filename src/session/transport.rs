/// Transport settings: base URL, upstream proxies, user agent, TLS verification.
use url::Url;

use crate::cli::args::MiscArgs;

use super::PeasantError;

/// Validated `--url`, `--proxies`, `--user-agent`, `--verify-ssl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transport {
    pub base_url: Url,
    pub proxies: Vec<Url>,
    pub user_agent: String,
    pub verify_ssl: bool,
}

impl Transport {
    /// Validate the miscellaneous flags shared by every subcommand.
    ///
    /// # Errors
    ///
    /// Returns `PeasantError::InvalidUrl` when the base URL is not an absolute
    /// http(s) URL, and `PeasantError::InvalidProxy` for a proxy without a host.
    pub fn from_args(args: &MiscArgs) -> Result<Self, PeasantError> {
        let base_url = parse_base_url(&args.url)?;
        let proxies = args
            .proxies
            .iter()
            .map(|p| parse_proxy(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            base_url,
            proxies,
            user_agent: args.user_agent.clone(),
            verify_ssl: args.verify_ssl,
        })
    }

    /// `<base>/company/<slug>/people/`
    #[must_use]
    pub fn company_people_url(&self, company: &str) -> String {
        self.join(&["company", company, "people"])
    }

    /// `<base>/in/<slug>/`
    #[must_use]
    pub fn profile_url(&self, public_identifier: &str) -> String {
        self.join(&["in", public_identifier])
    }

    fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        // Base URLs are checked for http(s) in `from_args`, so they always have a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url.to_string()
    }
}

fn parse_base_url(raw: &str) -> Result<Url, PeasantError> {
    let url = Url::parse(raw).map_err(|e| PeasantError::InvalidUrl {
        value: raw.to_owned(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PeasantError::InvalidUrl {
            value: raw.to_owned(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn parse_proxy(raw: &str) -> Result<Url, PeasantError> {
    let url = Url::parse(raw).map_err(|e| PeasantError::InvalidProxy {
        value: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(PeasantError::InvalidProxy {
            value: raw.to_owned(),
            reason: "missing host".to_owned(),
        });
    }
    Ok(url)
}
