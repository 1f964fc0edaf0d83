use anyhow::Result;
use filterlist::DialogOutcome;
use serde_json::json;

/// Print the selected item, or a cancellation notice on standard error.
pub(crate) fn print_plain(outcome: &DialogOutcome) {
    match (&outcome.selection, outcome.accepted) {
        (Some(item), true) => println!("{item}"),
        _ => eprintln!("Selection cancelled (query: '{}')", outcome.query),
    }
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &DialogOutcome) -> Result<String> {
    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": outcome.selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &DialogOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
