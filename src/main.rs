mod cli;
mod settings;

use std::process::ExitCode;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, load_items, parse_cli, print_json, print_plain};
use filterlist::ui::style;
use filterlist::{DialogOutcome, PickerUi, logging};
use settings::ResolvedConfig;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in style::names() {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let resolved = settings::load(&cli)?;
    logging::initialize(resolved.log_level);

    if cli.print_config {
        resolved.print_summary();
    }

    let outcome = run_picker(&cli, resolved)?;
    report(cli.output, &outcome)?;

    Ok(if outcome.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Load the items and show the dialog until it is closed.
fn run_picker(cli: &CliArgs, settings: ResolvedConfig) -> Result<DialogOutcome> {
    let items = load_items(cli, settings.skip_empty)?;
    log::info!("loaded {} items", items.len());

    PickerUi::new(items)
        .with_ui_config(settings.ui)
        .with_initial_query(settings.initial_query)
        .with_theme(settings.theme)
        .with_log_pane(settings.log_pane)
        .run()
}

fn report(format: OutputFormat, outcome: &DialogOutcome) -> Result<()> {
    match format {
        OutputFormat::Plain => print_plain(outcome),
        OutputFormat::Json => print_json(outcome)?,
    }
    Ok(())
}
