//! Books table construction from a Goodreads-style export

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::{open_reader, row_error, BookRecord};
use crate::core::error::Result;

/// Columns read from the raw books CSV; the rest are ignored
#[derive(Debug, Deserialize)]
struct RawBook {
    authors: String,
    language_code: Option<String>,
    original_title: Option<String>,
    average_rating: f64,
    ratings_count: u64,
}

/// Select an author's books that have a language code.
///
/// Ratings are rescaled from 0-5 to 0-10. Source order is preserved.
pub fn build_books(path: impl AsRef<Path>, author: &str) -> Result<Vec<BookRecord>> {
    let path = path.as_ref();
    let mut reader = open_reader(path, b',', true)?;
    let mut books = Vec::new();
    let mut scanned = 0usize;

    for row in reader.deserialize::<RawBook>() {
        let raw = row.map_err(|e| row_error(path, e))?;
        scanned += 1;

        if !raw.authors.contains(author) {
            continue;
        }
        if raw.language_code.as_deref().map_or(true, |c| c.trim().is_empty()) {
            continue;
        }
        let Some(title) = raw.original_title.filter(|t| !t.trim().is_empty()) else {
            debug!("Skipping untitled book by {}", raw.authors);
            continue;
        };

        books.push(BookRecord {
            title,
            average_rating: raw.average_rating * 2.0,
            num_votes: raw.ratings_count,
        });
    }

    info!("Selected {} of {} books by {}", books.len(), scanned, author);
    Ok(books)
}
