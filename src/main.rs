//! rea CLI - engine deployment assembler
//!
//! Usage: rea [--root <DIR>] [--config <FILE>] [--json] [-v] [--skip-build]

use anyhow::Result;
use clap::Parser;

use rea::config::{self, Config};
use rea::presentation::{create_assemble_use_case, create_event_sink, output, Cli};
use rea::ui::{detect_capabilities, TerminalCapabilities};
use rea::AssembleOptions;

fn main() {
    let cli = Cli::parse();
    let caps = detect_capabilities();

    if let Err(err) = run(&cli, &caps) {
        output::print_error(&err, cli.json, &caps);
        std::process::exit(output::exit_code(&err));
    }
}

fn run(cli: &Cli, caps: &TerminalCapabilities) -> Result<()> {
    let (config, warnings) = config::load_for_root(&cli.root, cli.config.as_deref())?;
    output::print_config_warnings(&warnings, caps);

    let verbosity = config.output.verbosity.with_flag_count(cli.verbose);
    let options = options_for(cli, &config);

    let use_case = create_assemble_use_case(cli.json);
    let events = create_event_sink(cli.json, verbosity, caps);
    use_case.execute_with_events(&options, events)?;

    Ok(())
}

fn options_for(cli: &Cli, config: &Config) -> AssembleOptions {
    AssembleOptions::from_config(&cli.root, config).with_skip_build(cli.skip_build)
}
