mod args;
mod items;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use items::load_items;
pub(crate) use output::{print_json, print_plain};
