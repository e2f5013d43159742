//! Books and films datasets
//!
//! - `books`: select an author's books from a Goodreads-style CSV
//! - `films`: select matching films from IMDb title dumps
//! - `tables`: read/write the derived tables and look records up

pub mod books;
pub mod films;
pub mod tables;

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AppConfig;
use crate::core::error::{EmotionError, Result};

pub use books::build_books;
pub use films::build_films;
pub use tables::{load_books, load_films, write_books, write_films, Catalogue};

/// One row of the books table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub average_rating: f64,
    pub num_votes: u64,
}

/// One row of the films table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub title: String,
    pub year: i32,
    pub average_rating: f64,
    pub num_votes: u64,
}

impl FilmRecord {
    /// `"<title> (<year>)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

/// Build both derived tables from the raw sources and write them into
/// `data_dir`, creating it if needed.
pub fn generate_datasets(config: &AppConfig) -> Result<Catalogue> {
    let books = build_books(&config.raw.books, &config.author)?;
    let titles: HashSet<String> = books.iter().map(|b| b.title.clone()).collect();
    let films = build_films(&config.raw.film_basics, &config.raw.film_ratings, &titles)?;

    std::fs::create_dir_all(&config.data_dir).map_err(|e| EmotionError::Io {
        message: format!("cannot create data directory: {}", e),
        path: Some(config.data_dir.clone()),
    })?;

    write_books(config.books_table(), &books)?;
    write_films(config.films_table(), &films)?;
    info!(
        "Wrote {} books and {} films to {:?}",
        books.len(),
        films.len(),
        config.data_dir
    );

    Ok(Catalogue::new(books, films))
}

fn open_reader(path: &Path, delimiter: u8, quoting: bool) -> Result<csv::Reader<File>> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quoting(quoting)
        .has_headers(true)
        .from_path(path)
        .map_err(|e| EmotionError::Dataset {
            message: format!("cannot open {:?}: {}", path, e),
            path: Some(path.to_path_buf()),
        })
}

fn row_error(path: &Path, err: csv::Error) -> EmotionError {
    let location = err
        .position()
        .map(|p| format!(" at line {}", p.line()))
        .unwrap_or_default();
    EmotionError::Dataset {
        message: format!("malformed row in {:?}{}: {}", path, location, err),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("raw_data");
        std::fs::create_dir_all(&raw).unwrap();
        std::fs::write(
            raw.join("books.csv"),
            "authors,original_title,language_code,average_rating,ratings_count\n\
             H.G. Wells,The Time Machine,eng,3.87,276076\n",
        )
        .unwrap();
        std::fs::write(
            raw.join("title.basics.tsv"),
            "tconst\ttitleType\toriginalTitle\tstartYear\truntimeMinutes\n\
             tt1\tmovie\tThe Time Machine\t1960\t103\n\
             tt2\tmovie\tThe Time Machine\t2002\t96\n",
        )
        .unwrap();
        std::fs::write(
            raw.join("title.ratings.tsv"),
            "tconst\taverageRating\tnumVotes\ntt1\t7.6\t35786\ntt2\t6.0\t117796\n",
        )
        .unwrap();

        let config = AppConfig::default().rebase(dir.path());
        let catalogue = generate_datasets(&config).unwrap();
        assert_eq!(catalogue.books.len(), 1);
        assert_eq!(catalogue.films.len(), 2);
        assert_eq!(catalogue.films[1].label(), "The Time Machine (2002)");

        let reloaded = Catalogue::load(config.books_table(), config.films_table()).unwrap();
        assert_eq!(reloaded.films, catalogue.films);
    }
}
