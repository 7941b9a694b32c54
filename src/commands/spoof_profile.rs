/// `spoof_profile` command: resolve the profile to copy.
use tracing::info;

use crate::cli::args::SpoofProfileArgs;
use crate::cli::{OutputFormat, write_summary};
use crate::session::{Authentication, PeasantError, Transport};
use crate::types::{AuthOutput, CommandDetail, InvocationOutput, TransportOutput};

/// Run `peasant spoof_profile`.
///
/// # Errors
///
/// Returns `PeasantError::EmptyPublicIdentifier` for a blank identifier, or a
/// malformed auth/transport error.
pub fn run(args: &SpoofProfileArgs, format: OutputFormat) -> Result<(), PeasantError> {
    let public_identifier = args.targeting.public_identifier.trim();
    if public_identifier.is_empty() {
        return Err(PeasantError::EmptyPublicIdentifier);
    }

    let auth = Authentication::from_args(&args.auth)?;
    let transport = Transport::from_args(&args.misc)?;
    super::report_auth(&auth);

    let profile_url = transport.profile_url(public_identifier);
    info!(%profile_url, "target profile resolved");

    let summary = InvocationOutput {
        command: "spoof_profile".to_owned(),
        authentication: AuthOutput::from(&auth),
        transport: TransportOutput::from(&transport),
        detail: CommandDetail::SpoofProfile {
            public_identifier: public_identifier.to_owned(),
            profile_url,
        },
    };
    write_summary(&summary, format);
    Ok(())
}
