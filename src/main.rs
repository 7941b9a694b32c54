use peasant::cli::{Cli, OutputFormat, write_error};
use peasant::types::ErrorOutput;
use peasant::{commands, logging};

fn main() {
    logging::init();

    let cli = Cli::parse_args();
    let format = OutputFormat::detect();
    tracing::debug!(command = cli.command.name(), "arguments parsed");

    match commands::dispatch(&cli.command, format) {
        Ok(()) => {}
        Err(err) => {
            write_error(&ErrorOutput::from_error(&err), format);
            std::process::exit(err.exit_code());
        }
    }
}
