use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
    builder::{
        BoolishValueParser, Styles,
        styling::{AnsiColor, Effects},
    },
};
use filterlist::app_dirs;

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("filterlist {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = CliArgs::command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
    name = "filterlist",
    version,
    long_version = long_version(),
    about = "Pick one item from a list, narrowing it with a live filter",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `filterlist` binary.
pub(crate) struct CliArgs {
    #[arg(
        value_name = "ITEM",
        help = "Items to choose from (default: read from --items or standard input)"
    )]
    pub(crate) items: Vec<String>,
    #[arg(
        short = 'i',
        long = "items",
        value_name = "FILE",
        conflicts_with = "items",
        help = "Read items from a file, one per line (default: none)"
    )]
    pub(crate) items_file: Option<PathBuf>,
    #[arg(
        long = "skip-empty",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Drop empty lines when reading items (default: disabled)"
    )]
    pub(crate) skip_empty: Option<bool>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "FILTERLIST_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Title drawn on the dialog border (default: none)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long = "filter-label",
        value_name = "TEXT",
        help = "Prompt shown before the filter box (default: Filter)"
    )]
    pub(crate) filter_label: Option<String>,
    #[arg(
        long = "empty-label",
        value_name = "TEXT",
        help = "Message shown when nothing matches (default: No matches)"
    )]
    pub(crate) empty_label: Option<String>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Start with this filter text (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "log-pane",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Show the runtime log below the list (default: disabled)"
    )]
    pub(crate) log_pane: Option<bool>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "FILTERLIST_LOG",
        help = "Minimum level captured by the log pane (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
