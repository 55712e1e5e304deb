//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use wayfarer::{FilterCriteria, Listing, ResultSet, WayfarerError};

/// Writes a summary of a listing search to the given writer.
///
/// Validation notes recorded by the store are written first so that a
/// corrected price range or an ignored star class is visible next to the
/// results it produced.
pub fn write_results<W: Write>(
    writer: &mut W,
    criteria: &FilterCriteria,
    results: &ResultSet,
    notes: &[WayfarerError],
) -> Result<(), WayfarerError> {
    for note in notes {
        writeln!(writer, "note: {note}").map_err(|e| io_error(&e))?;
    }

    writeln!(
        writer,
        "Price {:.0} to {:.0}, sorted by {}",
        criteria.price_range.min, criteria.price_range.max, criteria.sort
    )
    .map_err(|e| io_error(&e))?;

    if results.is_empty_result() {
        writeln!(writer, "No listings match the current filters.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    for listing in &results.items {
        write_listing(writer, listing)?;
    }
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "{} of {} listings shown",
        results.items.len(),
        results.total
    )
    .map_err(|e| io_error(&e))
}

fn write_listing<W: Write>(writer: &mut W, listing: &Listing) -> Result<(), WayfarerError> {
    writeln!(
        writer,
        "  {} ({}) {}* rating {:.1} {:.2} {}",
        listing.name,
        listing.location,
        listing.stars,
        listing.rating,
        listing.actual_price,
        listing.currency
    )
    .map_err(|e| io_error(&e))
}

/// Writes destination suggestion labels to the given writer.
pub fn write_suggestions<W: Write>(
    writer: &mut W,
    query: &str,
    labels: &[String],
) -> Result<(), WayfarerError> {
    writeln!(writer, "Destinations for '{query}':").map_err(|e| io_error(&e))?;
    for label in labels {
        writeln!(writer, "  {label}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Converts an I/O error to a [`WayfarerError::Io`].
pub(crate) fn io_error(error: &io::Error) -> WayfarerError {
    WayfarerError::Io {
        message: error.to_string(),
    }
}
