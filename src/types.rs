/// Shared serializable output types for all commands.
///
/// These types are what gets printed, either as JSON or rendered
/// as a table. They are decoupled from the clap argument structs and from the
/// resolved session types.
use serde::{Deserialize, Serialize};
use url::Url;

use crate::session::{Authentication, PeasantError, Transport};

/// The resolved options record of one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationOutput {
    /// Subcommand name (`harvest`, `add_contacts`, `spoof_profile`).
    pub command: String,
    /// How the session will authenticate.
    pub authentication: AuthOutput,
    /// Base URL, proxies, user agent, certificate verification.
    pub transport: TransportOutput,
    /// Subcommand-specific fields.
    #[serde(flatten)]
    pub detail: CommandDetail,
}

/// Per-subcommand part of [`InvocationOutput`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandDetail {
    Harvest {
        /// Company slugs as given on the command line.
        company_names: Vec<String>,
        /// "people" page URL of each company.
        targets: Vec<String>,
        /// Whether connection requests will be sent.
        add_contacts: bool,
        /// `stdout` or the output file path.
        output_file: String,
        /// Rows already present in the output file.
        prior_records: usize,
    },
    AddContacts {
        /// Path of the input CSV.
        input_file: String,
        /// Data rows in the input CSV.
        input_records: usize,
        /// Distinct `public_identifier` values in the input CSV.
        profiles: usize,
    },
    SpoofProfile {
        /// Target profile slug.
        public_identifier: String,
        /// Full URL of the target profile.
        profile_url: String,
    },
}

/// Authentication mode, without secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthOutput {
    /// `credentials`, `cookies`, or `prompt`.
    pub mode: String,
    /// Username when authenticating with credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Cookie names when authenticating with cookies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_names: Option<Vec<String>>,
}

impl From<&Authentication> for AuthOutput {
    fn from(auth: &Authentication) -> Self {
        match auth {
            Authentication::Credentials { username, .. } => Self {
                mode: auth.mode().to_owned(),
                username: Some(username.clone()),
                cookie_names: None,
            },
            Authentication::Cookies(cookies) => Self {
                mode: auth.mode().to_owned(),
                username: None,
                cookie_names: Some(cookies.iter().map(|c| c.name.clone()).collect()),
            },
            Authentication::Prompt => Self {
                mode: auth.mode().to_owned(),
                username: None,
                cookie_names: None,
            },
        }
    }
}

/// Transport settings as printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportOutput {
    pub url: String,
    pub proxies: Vec<String>,
    pub user_agent: String,
    pub verify_ssl: bool,
}

impl From<&Transport> for TransportOutput {
    fn from(transport: &Transport) -> Self {
        Self {
            url: transport.base_url.to_string(),
            proxies: transport.proxies.iter().map(redact_password).collect(),
            user_agent: transport.user_agent.clone(),
            verify_ssl: transport.verify_ssl,
        }
    }
}

/// Proxy URL with any password replaced by `***`.
fn redact_password(proxy: &Url) -> String {
    let mut shown = proxy.clone();
    if shown.password().is_some() {
        // Only fails for cannot-be-a-base URLs, which carry no password.
        let _ = shown.set_password(Some("***"));
    }
    shown.to_string()
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `PeasantError`.
    #[must_use]
    pub fn from_error(err: &PeasantError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
