/// Authentication material derived from `--credentials` / `--cookies`.
use crate::cli::args::AuthArgs;

use super::PeasantError;

/// Cookies LinkedIn requires for an authenticated session.
pub const SESSION_COOKIES: &[&str] = &["li_at", "JSESSIONID"];

/// One `name=value` pair from `--cookies`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

/// How the session authenticates.
#[derive(Clone, PartialEq, Eq)]
pub enum Authentication {
    /// `--credentials username:password`.
    Credentials { username: String, password: String },
    /// `--cookies 'li_at=...; JSESSIONID=...'`.
    Cookies(Vec<Cookie>),
    /// Neither flag given; the user is asked interactively.
    Prompt,
}

// Hand-written so passwords and cookie values never reach logs.
impl std::fmt::Debug for Authentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credentials { username, .. } => f
                .debug_struct("Credentials")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::Cookies(cookies) => f
                .debug_tuple("Cookies")
                .field(&cookies.iter().map(|c| c.name.as_str()).collect::<Vec<_>>())
                .finish(),
            Self::Prompt => f.write_str("Prompt"),
        }
    }
}

impl Authentication {
    /// Resolve the authentication flags of any subcommand.
    ///
    /// The parser already guarantees at most one of the two is present.
    ///
    /// # Errors
    ///
    /// Returns `PeasantError::MalformedCredentials` or
    /// `PeasantError::MalformedCookies` when the value cannot be split.
    pub fn from_args(args: &AuthArgs) -> Result<Self, PeasantError> {
        match (&args.credentials, &args.cookies) {
            (Some(credentials), _) => parse_credentials(credentials),
            (None, Some(cookies)) => parse_cookies(cookies).map(Self::Cookies),
            (None, None) => Ok(Self::Prompt),
        }
    }

    /// Short name of the mode: `credentials`, `cookies`, or `prompt`.
    #[must_use]
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Credentials { .. } => "credentials",
            Self::Cookies(_) => "cookies",
            Self::Prompt => "prompt",
        }
    }

    /// Session cookies absent from a cookie-based login. Empty for other modes.
    #[must_use]
    pub fn missing_session_cookies(&self) -> Vec<&'static str> {
        let Self::Cookies(cookies) = self else {
            return Vec::new();
        };
        SESSION_COOKIES
            .iter()
            .copied()
            .filter(|required| !cookies.iter().any(|c| c.name == *required))
            .collect()
    }
}

/// Split `username:password` on the first colon; the password may contain more.
fn parse_credentials(raw: &str) -> Result<Authentication, PeasantError> {
    match raw.split_once(':') {
        Some((username, password)) if !username.is_empty() => Ok(Authentication::Credentials {
            username: username.to_owned(),
            password: password.to_owned(),
        }),
        _ => Err(PeasantError::MalformedCredentials),
    }
}

/// Split a `Cookie:` header style string into pairs.
fn parse_cookies(raw: &str) -> Result<Vec<Cookie>, PeasantError> {
    let mut cookies = Vec::new();
    for fragment in raw.split(';').map(str::trim).filter(|f| !f.is_empty()) {
        let Some((name, value)) = fragment.split_once('=') else {
            return Err(PeasantError::MalformedCookies {
                fragment: fragment.to_owned(),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(PeasantError::MalformedCookies {
                fragment: fragment.to_owned(),
            });
        }
        cookies.push(Cookie {
            name: name.to_owned(),
            value: value.trim().trim_matches('"').to_owned(),
        });
    }

    if cookies.is_empty() {
        return Err(PeasantError::MalformedCookies {
            fragment: raw.to_owned(),
        });
    }
    Ok(cookies)
}
