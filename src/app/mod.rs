//! Comparison workflows
//!
//! Glue between the catalogue, the script resolver and the report
//! renderers, plus the interactive menu driving them.

pub mod prompt;

use std::io::{BufRead, Write};

use tracing::info;

use crate::core::error::{EmotionError, Result};
use crate::dataset::{BookRecord, Catalogue, FilmRecord};
use crate::emotion::{EmotionLabels, EmotionRates};
use crate::report::{self, CONCLUSION};
use crate::script::{ScriptResolver, WorkId};

pub use prompt::{input_until_valid, INVALID_CHOICE};

/// Shown before the mode menu
pub const START_MESSAGE: &str = "
Do you want to compare emotions between a particular book and film (1)
or get an analysis based on the catalogue's books (2)?
";

/// Default chart width in cells
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Emotion rates and ratings of a book and one of its adaptations
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub book: BookRecord,
    pub film: FilmRecord,
    pub book_rates: EmotionRates,
    pub film_rates: EmotionRates,
}

impl Comparison {
    /// Table, ratings and conclusion, ready to print
    pub fn render(&self, labels: &EmotionLabels) -> String {
        format!(
            "\n{}\n\n{}\n\n{}\n",
            report::comparison_table(
                &self.book.title,
                &self.film.label(),
                labels,
                &self.book_rates,
                &self.film_rates,
            ),
            report::ratings_lines(&self.book, &self.film),
            CONCLUSION
        )
    }
}

/// Compare a book with one of its adaptations.
///
/// Without `year` the book must have exactly one adaptation. A missing
/// script surfaces as `NotFound`.
pub fn compare(
    resolver: &ScriptResolver,
    catalogue: &Catalogue,
    title: &str,
    year: Option<i32>,
) -> Result<Comparison> {
    let book = catalogue
        .book(title)
        .ok_or_else(|| EmotionError::validation("title", format!("unknown book '{}'", title)))?;

    let film = pick_film(catalogue, title, year)?;
    info!("Comparing '{}' with {}", title, film.label());

    let book_rates = resolver.emotions_for_work(&WorkId::book(&book.title))?;
    let film_rates = resolver.emotions_for_work(&WorkId::film(&film.title, film.year))?;

    Ok(Comparison {
        book: book.clone(),
        film: film.clone(),
        book_rates,
        film_rates,
    })
}

fn pick_film<'a>(catalogue: &'a Catalogue, title: &str, year: Option<i32>) -> Result<&'a FilmRecord> {
    if let Some(year) = year {
        return catalogue.film(title, year).ok_or_else(|| {
            EmotionError::validation("year", format!("no {} adaptation of '{}'", year, title))
        });
    }

    let films: Vec<&FilmRecord> = catalogue.films_for(title).collect();
    match films.as_slice() {
        [film] => Ok(*film),
        [] => Err(EmotionError::validation(
            "title",
            format!("no film adaptation of '{}'", title),
        )),
        many => {
            let years: Vec<String> = many.iter().map(|f| f.year.to_string()).collect();
            Err(EmotionError::validation(
                "year",
                format!("'{}' has several adaptations, pick a year: {}", title, years.join(", ")),
            ))
        }
    }
}

/// Ratings chart followed by the conclusion
pub fn analysis(catalogue: &Catalogue, width: usize) -> Result<String> {
    Ok(format!(
        "{}\n{}\n",
        report::ratings_chart(catalogue, width)?,
        CONCLUSION
    ))
}

/// Menu-driven session: choose a mode, then a book and a film year.
pub fn interactive<R, W>(
    resolver: &ScriptResolver,
    catalogue: &Catalogue,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mode = input_until_valid(&[1, 2], Some(START_MESSAGE), input, output)?;

    if mode == 2 {
        write!(output, "{}", analysis(catalogue, DEFAULT_CHART_WIDTH)?)?;
        return Ok(());
    }

    if catalogue.books.is_empty() {
        return Err(EmotionError::validation("books", "the books table is empty"));
    }

    writeln!(output, "Choose a book from the catalogue:")?;
    for (idx, book) in catalogue.books.iter().enumerate() {
        writeln!(output, "{} ({})", book.title, idx + 1)?;
    }
    let choices: Vec<usize> = (1..=catalogue.books.len()).collect();
    let title = &catalogue.books[input_until_valid(&choices, None, input, output)? - 1].title;

    let years: Vec<i32> = catalogue.films_for(title).map(|f| f.year).collect();
    let year = match years.as_slice() {
        [] => {
            return Err(EmotionError::validation(
                "title",
                format!("no film adaptation of '{}'", title),
            ))
        }
        [year] => *year,
        many => {
            writeln!(output, "Choose film creation year:")?;
            for (idx, year) in many.iter().enumerate() {
                writeln!(output, "{} - {} ({})", title, year, idx + 1)?;
            }
            let choices: Vec<usize> = (1..=many.len()).collect();
            many[input_until_valid(&choices, None, input, output)? - 1]
        }
    };

    let comparison = match compare(resolver, catalogue, title, Some(year)) {
        Ok(comparison) => comparison,
        Err(err) if err.is_recoverable() => {
            writeln!(output, "{}", err)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    write!(output, "{}", comparison.render(resolver.lexicon().labels()))?;
    Ok(())
}
