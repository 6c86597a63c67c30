use crate::output::{read_trace, TraceDocument};
use crate::utils::config::{EVENT_CATEGORY, EVENT_PHASE, PROCESS_ID};
use anyhow::{Context, Result};
use std::path::Path;

/// Check that a trace document is complete and well formed
pub fn validate_trace_file(file_path: impl AsRef<Path>) -> Result<TraceDocument> {
    let file_path = file_path.as_ref();
    println!("Validating trace: {}", file_path.display());

    let document = read_trace(file_path)
        .with_context(|| format!("Failed to read trace {}", file_path.display()))?;

    check_events(&document)?;

    println!("✓ Valid trace JSON");
    println!("  Events: {}", document.len());

    Ok(document)
}

/// Every entry must be a complete event from this writer
fn check_events(document: &TraceDocument) -> Result<()> {
    for (i, event) in document.trace_events.iter().enumerate() {
        if event.ph != EVENT_PHASE || event.cat != EVENT_CATEGORY || event.pid != PROCESS_ID {
            anyhow::bail!(
                "Event #{} ('{}') is not a complete '{}' event",
                i,
                event.name,
                EVENT_CATEGORY
            );
        }
        if event.name.contains('"') {
            anyhow::bail!("Event #{} has an unsanitized name", i);
        }
    }
    Ok(())
}
