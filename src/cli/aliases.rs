/// Multi-character short flags (`-cns`, `-ac`, ...).
///
/// clap only understands single-character shorts, so these are rewritten to
/// their long form before the argument vector reaches the parser. Matching is
/// on whole tokens only: `-cns` and `-cns=acme` are rewritten, `-cnsacme` is
/// not. Everything after a bare `--` is left untouched.
use std::ffi::OsString;

/// Legacy short flag and the long flag it stands for.
pub const SHORT_ALIASES: &[(&str, &str)] = &[
    ("-cns", "--company-names"),
    ("-ac", "--add-contacts"),
    ("-of", "--output-file"),
    ("-ua", "--user-agent"),
    ("-vs", "--verify-ssl"),
    ("-pu", "--public-identifier"),
    ("-if", "--input-file"),
];

/// Long form of a single token, or `None` when the token is not a legacy short.
#[must_use]
pub fn rewrite(token: &str) -> Option<String> {
    let (flag, value) = match token.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (token, None),
    };
    let (_, long) = SHORT_ALIASES.iter().find(|(short, _)| *short == flag)?;
    Some(match value {
        Some(value) => format!("{long}={value}"),
        None => (*long).to_owned(),
    })
}

/// Rewrite every legacy short in an argument vector.
#[must_use]
pub fn expand<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::<OsString>::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(token) = arg.to_str() else {
                return arg;
            };
            if token == "--" {
                passthrough = true;
                return arg;
            }
            rewrite(token).map_or(arg, OsString::from)
        })
        .collect()
}
