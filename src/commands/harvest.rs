/// `harvest` command: target company "people" pages and open the output sink.
use tracing::info;

use crate::cli::args::HarvestArgs;
use crate::cli::{OutputFormat, OutputTarget, Stream, write_summary, write_summary_to};
use crate::records::OutputSink;
use crate::session::{Authentication, PeasantError, Transport};
use crate::types::{AuthOutput, CommandDetail, InvocationOutput, TransportOutput};

/// Run `peasant harvest`.
///
/// # Errors
///
/// Returns `PeasantError` on malformed auth or transport values, or when the
/// output file cannot be read or opened.
pub fn run(args: &HarvestArgs, format: OutputFormat) -> Result<(), PeasantError> {
    let auth = Authentication::from_args(&args.auth)?;
    let transport = Transport::from_args(&args.misc)?;
    super::report_auth(&auth);

    let sink = OutputSink::open(&args.output.output_file)?;

    let company_names = &args.operational.company_names;
    let targets: Vec<String> = company_names
        .iter()
        .map(|c| transport.company_people_url(c))
        .collect();

    info!(
        companies = company_names.len(),
        add_contacts = args.operational.add_contacts,
        prior = sink.prior().len(),
        output = %sink.target(),
        "harvest configured"
    );

    let summary = InvocationOutput {
        command: "harvest".to_owned(),
        authentication: AuthOutput::from(&auth),
        transport: TransportOutput::from(&transport),
        detail: CommandDetail::Harvest {
            company_names: company_names.clone(),
            targets,
            add_contacts: args.operational.add_contacts,
            output_file: sink.target().to_string(),
            prior_records: sink.prior().len(),
        },
    };
    // Standard output carries the CSV records.
    if sink.target() == &OutputTarget::Stdout {
        write_summary_to(&summary, OutputFormat::detect_for(Stream::Stderr), Stream::Stderr);
    } else {
        write_summary(&summary, format);
    }

    sink.finish()
}
