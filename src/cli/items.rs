use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result, bail};
use filterlist::ItemStore;

use super::CliArgs;

/// Collect the items to show from arguments, a file, or piped standard input.
pub(crate) fn load_items(cli: &CliArgs, skip_empty: bool) -> Result<ItemStore> {
    if !cli.items.is_empty() {
        let items = cli
            .items
            .iter()
            .filter(|item| !(skip_empty && item.is_empty()))
            .cloned();
        return Ok(ItemStore::new(items));
    }

    if let Some(path) = &cli.items_file {
        return read_items_file(path, skip_empty);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no items given: pass them as arguments, with --items FILE or on standard input");
    }
    let items = read_items(stdin.lock(), skip_empty)
        .context("failed to read items from standard input")?;
    Ok(ItemStore::from(items))
}

fn read_items_file(path: &Path, skip_empty: bool) -> Result<ItemStore> {
    let file = File::open(path)
        .with_context(|| format!("failed to open items file {}", path.display()))?;
    let items = read_items(BufReader::new(file), skip_empty)
        .with_context(|| format!("failed to read items file {}", path.display()))?;
    Ok(ItemStore::from(items))
}

/// Split `reader` into one item per line, tolerating CRLF line endings.
pub(crate) fn read_items(reader: impl BufRead, skip_empty: bool) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        if skip_empty && line.is_empty() {
            continue;
        }
        items.push(line);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use clap::Parser;

    use super::*;

    #[test]
    fn keeps_duplicates_and_empty_lines_by_default() {
        let items = read_items(Cursor::new("Texas\n\nTexas\r\nOhio"), false).expect("reads");
        assert_eq!(items, ["Texas", "", "Texas", "Ohio"]);
    }

    #[test]
    fn skip_empty_drops_blank_lines_only() {
        let items = read_items(Cursor::new("Texas\n\n \nOhio\n"), true).expect("reads");
        assert_eq!(items, ["Texas", " ", "Ohio"]);
    }

    #[test]
    fn positional_items_take_precedence() {
        let cli = CliArgs::parse_from(["filterlist", "Alaska", "", "Alabama"]);
        let store = load_items(&cli, true).expect("loads");
        assert_eq!(store.as_slice(), ["Alaska", "Alabama"]);
    }

    #[test]
    fn reads_items_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "Arizona\nArkansas").expect("write");
        let path = file.path().to_string_lossy().into_owned();

        let cli = CliArgs::parse_from(["filterlist", "--items", path.as_str()]);
        let store = load_items(&cli, false).expect("loads");
        assert_eq!(store.as_slice(), ["Arizona", "Arkansas"]);
    }

    #[test]
    fn missing_items_file_is_reported_with_its_path() {
        let cli = CliArgs::parse_from(["filterlist", "--items", "/definitely/not/here.txt"]);
        let err = load_items(&cli, false).expect_err("missing file");
        assert!(format!("{err:#}").contains("/definitely/not/here.txt"));
    }

    #[test]
    fn empty_file_is_an_empty_list() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let path = file.path().to_string_lossy().into_owned();
        let cli = CliArgs::parse_from(["filterlist", "--items", path.as_str()]);
        assert!(load_items(&cli, false).expect("loads").is_empty());
    }
}
