/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod add_contacts;
pub mod harvest;
pub mod spoof_profile;

use tracing::warn;

use crate::cli::{Command, OutputFormat};
use crate::session::{Authentication, PeasantError};

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `PeasantError` on any command failure.
pub fn dispatch(command: &Command, format: OutputFormat) -> Result<(), PeasantError> {
    match command {
        Command::Harvest(args) => harvest::run(args, format),
        Command::AddContacts(args) => add_contacts::run(args, format),
        Command::SpoofProfile(args) => spoof_profile::run(args, format),
    }
}

/// Log what the engine will have to do about authentication.
fn report_auth(auth: &Authentication) {
    match auth {
        Authentication::Prompt => {
            warn!("no credentials or cookies given; credentials will be prompted for");
        }
        Authentication::Cookies(_) => {
            let missing = auth.missing_session_cookies();
            if !missing.is_empty() {
                warn!(missing = ?missing, "cookie string lacks LinkedIn session cookies");
            }
        }
        Authentication::Credentials { .. } => {}
    }
}
