//! Book vs film comparison table

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::dataset::{BookRecord, FilmRecord};
use crate::emotion::{EmotionLabels, EmotionRates};

/// Placeholder for a work without recognized emotion words
pub const NO_SIGNAL: &str = "n/a";

/// Render the emotion comparison between a book and a film.
///
/// The first line is `"<book> [book] vs <film> [film]"`, followed by a table
/// with one column per label and the rows `BOOK` and `FILM`.
pub fn comparison_table(
    book: &str,
    film: &str,
    labels: &EmotionLabels,
    book_rates: &EmotionRates,
    film_rates: &EmotionRates,
) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    header.extend(labels.iter().map(Cell::new));
    table.set_header(header);

    table.add_row(rate_row("BOOK", labels, book_rates));
    table.add_row(rate_row("FILM", labels, film_rates));

    format!("{} [book] vs {} [film]\n{}", book, film, table)
}

fn rate_row(name: &str, labels: &EmotionLabels, rates: &EmotionRates) -> Vec<Cell> {
    let mut row = vec![Cell::new(name)];
    match rates.as_vector() {
        Some(vector) => row.extend(
            vector
                .values()
                .iter()
                .map(|v| Cell::new(format_rate(*v)).set_alignment(CellAlignment::Right)),
        ),
        None => row.extend(
            (0..labels.len()).map(|_| Cell::new(NO_SIGNAL).set_alignment(CellAlignment::Right)),
        ),
    }
    row
}

/// Up to six decimals, trailing zeros trimmed but one decimal kept
pub fn format_rate(value: f64) -> String {
    let text = format!("{:.6}", value);
    let trimmed = text.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// `Book rating: R (N votes)` and `Film rating: R (N votes)`
pub fn ratings_lines(book: &BookRecord, film: &FilmRecord) -> String {
    format!(
        "Book rating: {} ({} votes)\nFilm rating: {} ({} votes)",
        format_rate(book.average_rating),
        book.num_votes,
        format_rate(film.average_rating),
        film.num_votes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::{aggregate, Lexicon};
    use crate::text::tokenize;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(1.0), "1.0");
        assert_eq!(format_rate(0.5), "0.5");
        assert_eq!(format_rate(0.25946562144900015), "0.259466");
        assert_eq!(format_rate(7.74), "7.74");
    }

    #[test]
    fn test_table_layout() {
        let labels = EmotionLabels::default();
        let lexicon =
            Lexicon::from_entries(labels.clone(), [("fog", vec![0.5, 0.2, 0.3, 0.4, 0.6, 0.7, 0.1])])
                .unwrap();
        let book = aggregate(&tokenize("fog"), &lexicon);

        let text = comparison_table("book1", "film1 (2020)", &labels, &book, &EmotionRates::NoSignal);
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("book1 [book] vs film1 (2020) [film]"));
        assert!(text.contains("disgust"));
        assert!(text.contains("fear"));

        let book_row = text.lines().find(|l| l.contains("BOOK")).unwrap();
        assert!(book_row.contains("50.0"));
        assert!(book_row.contains("70.0"));

        let film_row = text.lines().find(|l| l.contains("FILM")).unwrap();
        assert_eq!(film_row.matches(NO_SIGNAL).count(), 7);
    }

    #[test]
    fn test_ratings_lines() {
        let book = BookRecord {
            title: "The Invisible Man".to_string(),
            average_rating: 7.24,
            num_votes: 84778,
        };
        let film = FilmRecord {
            title: "The Invisible Man".to_string(),
            year: 1933,
            average_rating: 7.7,
            num_votes: 30172,
        };
        assert_eq!(
            ratings_lines(&book, &film),
            "Book rating: 7.24 (84778 votes)\nFilm rating: 7.7 (30172 votes)"
        );
    }
}
