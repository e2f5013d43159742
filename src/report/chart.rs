//! Books vs films ratings bar chart, rendered as text

use super::table::format_rate;
use crate::core::error::{EmotionError, Result};
use crate::dataset::Catalogue;

/// Upper bound of the rating scale
pub const RATING_SCALE: f64 = 10.0;

const BOOK_BAR: char = '█';
const FILM_BAR: char = '▒';

/// One group per film: a Book bar (the adapted book's rating) and a Film
/// bar, both on a 0-10 scale spanning `width` cells.
pub fn ratings_chart(catalogue: &Catalogue, width: usize) -> Result<String> {
    let width = width.max(1);
    let mut out = format!(
        "Books vs Films Ratings\n{} Book   {} Film   (scale 0-{})\n",
        BOOK_BAR, FILM_BAR, RATING_SCALE
    );

    for film in &catalogue.films {
        let book = catalogue.book(&film.title).ok_or_else(|| EmotionError::Dataset {
            message: format!("no book rating for film '{}'", film.label()),
            path: None,
        })?;

        out.push_str(&format!(
            "\n{}\n  Book │{}\n  Film │{}\n",
            film.label(),
            bar(book.average_rating, width, BOOK_BAR),
            bar(film.average_rating, width, FILM_BAR)
        ));
    }

    Ok(out)
}

fn bar(rating: f64, width: usize, fill: char) -> String {
    let clamped = rating.clamp(0.0, RATING_SCALE);
    let cells = (clamped / RATING_SCALE * width as f64).round() as usize;
    let mut bar: String = std::iter::repeat(fill).take(cells).collect();
    bar.push(' ');
    bar.push_str(&format_rate(rating));
    bar
}
