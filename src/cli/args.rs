/// CLI argument definitions via clap derive.
///
/// Flag groups shared between subcommands (authentication, miscellaneous) are
/// plain `Args` structs flattened into each subcommand that needs them.
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand};

use super::aliases;

/// Base URL targeted when `--url` is not given.
pub const DEFAULT_URL: &str = "https://www.linkedin.com";

/// User agent sent when `--user-agent` is not given.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:60.0) Gecko/20100101Firefox/60.0";

/// peasant: detect, generate, and collect connection requests from LinkedIn.
#[derive(Debug, Parser)]
#[command(
    name = "peasant",
    about = "Detect, generate, and collect connection requests from LinkedIn",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse the process arguments, exiting with a usage message on failure.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse_from(aliases::expand(std::env::args_os()))
    }

    /// Parse an explicit argument vector (program name first).
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown, missing, or conflicting flags.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(aliases::expand(args))
    }
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Harvest profiles from the "people" pages of LinkedIn companies.
    #[command(after_help = HARVEST_AFTER_HELP)]
    Harvest(HarvestArgs),

    /// Send connection requests to profiles listed in a CSV file.
    #[command(name = "add_contacts", after_help = ADD_CONTACTS_AFTER_HELP)]
    AddContacts(AddContactsArgs),

    /// Copy the public profile of a target onto the authenticated account.
    #[command(name = "spoof_profile", after_help = SPOOF_PROFILE_AFTER_HELP)]
    SpoofProfile(SpoofProfileArgs),
}

impl Command {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Harvest(_) => "harvest",
            Self::AddContacts(_) => "add_contacts",
            Self::SpoofProfile(_) => "spoof_profile",
        }
    }
}

const HARVEST_AFTER_HELP: &str = "\
Operational Parameters:
  Determine the companies to target and if connection requests should be
  generated.

Authentication Parameters:
  Determine how to authenticate to LinkedIn. User is prompted for credentials
  if one of these mutually-exclusive options are not provided.

Output Parameters:
  Configure output options.

Miscellaneous Parameters:
  Additional parameters with sane defaults.";

const ADD_CONTACTS_AFTER_HELP: &str = "\
Authentication Parameters:
  Determine how to authenticate to LinkedIn. User is prompted for credentials
  if one of these mutually-exclusive options are not provided.

Miscellaneous Parameters:
  Additional parameters with sane defaults.";

const SPOOF_PROFILE_AFTER_HELP: &str = ADD_CONTACTS_AFTER_HELP;

/// Arguments for `peasant harvest`.
#[derive(Debug, Args)]
pub struct HarvestArgs {
    #[command(flatten)]
    pub operational: OperationalArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub misc: MiscArgs,
}

/// Arguments for `peasant add_contacts`.
#[derive(Debug, Args)]
pub struct AddContactsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub misc: MiscArgs,
}

/// Arguments for `peasant spoof_profile`.
#[derive(Debug, Args)]
pub struct SpoofProfileArgs {
    #[command(flatten)]
    pub targeting: TargetingArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub misc: MiscArgs,
}

/// Companies to target and whether to send connection requests.
#[derive(Debug, Args)]
#[command(next_help_heading = "Operational Parameters (REQUIRED)")]
pub struct OperationalArgs {
    /// Space delimited LinkedIn company names as observed in the URL of the
    /// company profile, e.g. 'black-hills-information-security' in
    /// /company/black-hills-information-security/people/ [short: -cns]
    #[arg(
        long,
        required = true,
        num_args = 1..,
        value_name = "COMPANY",
        action = ArgAction::Set,
        overrides_with = "company_names"
    )]
    pub company_names: Vec<String>,

    /// When possible, attempt to make a connection request for a contact.
    /// Default: false [short: -ac]
    #[arg(long)]
    pub add_contacts: bool,
}

/// Credentials and cookies; at most one may be given.
#[derive(Debug, Clone, Default, Args)]
#[command(next_help_heading = "Authentication Parameters (OPTIONAL)")]
#[group(id = "authentication", multiple = false)]
pub struct AuthArgs {
    /// Colon delimited credentials, e.g. 'username:password', to use for
    /// authentication.
    #[arg(short = 'C', long, value_name = "USERNAME:PASSWORD")]
    pub credentials: Option<String>,

    /// Cookies needed to access LinkedIn in context of the correct user,
    /// e.g. 'li_at=...; JSESSIONID=...'.
    #[arg(short = 'c', long, value_name = "COOKIES")]
    pub cookies: Option<String>,
}

/// Where harvested records are written.
#[derive(Debug, Args)]
#[command(next_help_heading = "Output Parameters (OPTIONAL)")]
pub struct OutputArgs {
    /// Name of file to receive CSV output (Default: stdout). If the file
    /// already exists, it is read into memory and treated as previous output
    /// so connection requests are not sent twice to the same profile.
    /// [short: -of]
    #[arg(long, value_name = "FILE", default_value = "-", hide_default_value = true)]
    pub output_file: OutputTarget,
}

/// Transport settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Miscellaneous Parameters (OPTIONAL)")]
pub struct MiscArgs {
    /// Base URL to target for requests.
    #[arg(short = 'u', long, value_name = "URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Space delimited series of upstream proxies that will be used to send
    /// requests.
    #[arg(
        short = 'p',
        long,
        num_args = 1..,
        value_name = "PROXY",
        action = ArgAction::Set,
        overrides_with = "proxies"
    )]
    pub proxies: Vec<String>,

    /// User agent string. [short: -ua]
    #[arg(long, value_name = "AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Verify SSL certificate. Default: false [short: -vs]
    #[arg(long)]
    pub verify_ssl: bool,
}

/// Profile to spoof.
#[derive(Debug, Args)]
#[command(next_help_heading = "Targeting Options (REQUIRED)")]
pub struct TargetingArgs {
    /// Public identifier of target profile. [short: -pu]
    #[arg(long, required = true, value_name = "IDENTIFIER")]
    pub public_identifier: String,
}

/// Source of records for `add_contacts`.
#[derive(Debug, Args)]
#[command(next_help_heading = "Input Options (REQUIRED)")]
pub struct InputArgs {
    /// Input CSV file to extract records. [short: -if]
    #[arg(long, required = true, value_name = "FILE")]
    pub input_file: PathBuf,
}

/// Destination of CSV output: standard output or a named file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("output file name must not be empty".to_owned()),
            "-" => Ok(Self::Stdout),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
