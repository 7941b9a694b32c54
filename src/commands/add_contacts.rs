/// `add_contacts` command: load the profiles to send connection requests to.
use tracing::{info, warn};

use crate::cli::args::AddContactsArgs;
use crate::cli::{OutputFormat, write_summary};
use crate::records::{PUBLIC_IDENTIFIER_COLUMN, RecordSet};
use crate::session::{Authentication, PeasantError, Transport};
use crate::types::{AuthOutput, CommandDetail, InvocationOutput, TransportOutput};

/// Run `peasant add_contacts`.
///
/// # Errors
///
/// Returns `PeasantError` on malformed auth or transport values, or when the
/// input file is missing or not valid CSV.
pub fn run(args: &AddContactsArgs, format: OutputFormat) -> Result<(), PeasantError> {
    let auth = Authentication::from_args(&args.auth)?;
    let transport = Transport::from_args(&args.misc)?;
    super::report_auth(&auth);

    let path = &args.input.input_file;
    let records = RecordSet::load(path)?;
    if !records.has_column(PUBLIC_IDENTIFIER_COLUMN) {
        warn!(
            path = %path.display(),
            "input has no '{PUBLIC_IDENTIFIER_COLUMN}' column; no profiles can be contacted"
        );
    }
    let profiles = records.public_identifiers();

    info!(
        path = %path.display(),
        records = records.len(),
        profiles = profiles.len(),
        "input loaded"
    );

    let summary = InvocationOutput {
        command: "add_contacts".to_owned(),
        authentication: AuthOutput::from(&auth),
        transport: TransportOutput::from(&transport),
        detail: CommandDetail::AddContacts {
            input_file: path.display().to_string(),
            input_records: records.len(),
            profiles: profiles.len(),
        },
    };
    write_summary(&summary, format);
    Ok(())
}
