use anyhow::{Context, Result};
use phub::prelude::*;
use std::path::Path;

/// Delivers `payload` from `origin` to a hub started on `query`.
///
/// # Errors
/// Fails if the catalog or the settings cannot be loaded, or if `payload` is not JSON.
pub fn run(
    catalog: &Path,
    origin: &str,
    payload: &str,
    query: &str,
    settings: Option<&Path>,
) -> Result<()> {
    let payload: serde_json::Value =
        serde_json::from_str(payload).with_context(|| "Payload is not valid JSON")?;

    let mut nav = super::start(catalog, query, settings)?;
    let policy = nav.policy();
    if policy.allows_any() {
        println!("senders:   *");
    } else {
        println!("senders:   {}", policy.allowed().join(", "));
    }

    let outcome = nav.handle_message(origin, &payload);

    match &outcome {
        MessageOutcome::Navigated(id) => println!("outcome:   navigated {id}"),
        MessageOutcome::UnknownSite(id) => println!("outcome:   unknown site {id}"),
        MessageOutcome::Rejected => println!("outcome:   rejected"),
        MessageOutcome::Ignored => println!("outcome:   ignored"),
    }
    super::print_screen(&nav);
    Ok(())
}
