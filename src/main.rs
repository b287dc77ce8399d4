use clap::Parser;
use objectform::cli::commands::{cmd_extract, cmd_fill};
use objectform::cli::config::{
    Cli, Commands, build_field_filter, load_config, resolve_duplicate_policy, resolve_trace_path,
};
use objectform::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Trace path: CLI > config
    let tracer = TraceLogger::from_path(resolve_trace_path(cli.trace.as_deref(), &config.trace));

    match cli.command {
        Commands::Extract {
            scope,
            into,
            skip,
            only,
            skip_empty,
            output,
        } => {
            let filter = build_field_filter(&config.extract, &skip, &only, skip_empty);
            cmd_extract(
                &scope,
                into.as_deref(),
                &filter,
                output.as_deref(),
                cli.verbose,
                &tracer,
            )?;
        }
        Commands::Fill {
            scope,
            values,
            duplicates,
            output,
        } => {
            let policy = resolve_duplicate_policy(duplicates, &config.fill);
            cmd_fill(
                &scope,
                &values,
                policy,
                output.as_deref(),
                cli.verbose,
                &tracer,
            )?;
        }
    }

    Ok(())
}
