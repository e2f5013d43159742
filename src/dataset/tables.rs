//! Derived books/films tables: reading, writing and lookups

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{open_reader, row_error, BookRecord, FilmRecord};
use crate::core::error::{EmotionError, Result};

const BOOKS_HEADER: [&str; 3] = ["title", "average_rating", "num_votes"];
const FILMS_HEADER: [&str; 4] = ["title", "year", "average_rating", "num_votes"];

pub fn load_books(path: impl AsRef<Path>) -> Result<Vec<BookRecord>> {
    load_table(path.as_ref())
}

pub fn load_films(path: impl AsRef<Path>) -> Result<Vec<FilmRecord>> {
    load_table(path.as_ref())
}

pub fn write_books(path: impl AsRef<Path>, books: &[BookRecord]) -> Result<()> {
    write_table(path.as_ref(), &BOOKS_HEADER, books)
}

pub fn write_films(path: impl AsRef<Path>, films: &[FilmRecord]) -> Result<()> {
    write_table(path.as_ref(), &FILMS_HEADER, films)
}

fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = open_reader(path, b',', true)?;
    let rows = reader
        .deserialize()
        .map(|row| row.map_err(|e| row_error(path, e)))
        .collect::<Result<Vec<T>>>()?;
    debug!("Loaded {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Rows carry their own header; an empty table still gets `header`
fn write_table<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let dataset_error = |e: csv::Error| EmotionError::Dataset {
        message: format!("cannot write table: {}", e),
        path: Some(path.to_path_buf()),
    };

    let mut writer = csv::Writer::from_path(path).map_err(dataset_error)?;
    if rows.is_empty() {
        writer.write_record(header).map_err(dataset_error)?;
    }
    for row in rows {
        writer.serialize(row).map_err(dataset_error)?;
    }
    writer.flush().map_err(|e| EmotionError::Io {
        message: format!("cannot flush table: {}", e),
        path: Some(path.to_path_buf()),
    })?;
    Ok(())
}

/// Books and their film adaptations
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub books: Vec<BookRecord>,
    pub films: Vec<FilmRecord>,
}

impl Catalogue {
    pub fn new(books: Vec<BookRecord>, films: Vec<FilmRecord>) -> Self {
        Self { books, films }
    }

    /// Load both tables
    pub fn load(books: impl AsRef<Path>, films: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_books(books)?, load_films(films)?))
    }

    pub fn book(&self, title: &str) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.title == title)
    }

    /// Adaptations of a book, in table order
    pub fn films_for<'a, 'b>(
        &'a self,
        title: &'b str,
    ) -> impl Iterator<Item = &'a FilmRecord> + 'b
    where
        'a: 'b,
    {
        self.films.iter().filter(move |f| f.title == title)
    }

    pub fn film(&self, title: &str, year: i32) -> Option<&FilmRecord> {
        self.films.iter().find(|f| f.title == title && f.year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::new(
            vec![BookRecord {
                title: "The Invisible Man".to_string(),
                average_rating: 7.24,
                num_votes: 84778,
            }],
            vec![
                FilmRecord {
                    title: "The Invisible Man".to_string(),
                    year: 1933,
                    average_rating: 7.7,
                    num_votes: 30172,
                },
                FilmRecord {
                    title: "The Time Machine".to_string(),
                    year: 1960,
                    average_rating: 7.6,
                    num_votes: 35786,
                },
                FilmRecord {
                    title: "The Invisible Man".to_string(),
                    year: 2020,
                    average_rating: 7.1,
                    num_votes: 152154,
                },
            ],
        )
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let books = dir.path().join("books.csv");
        let films = dir.path().join("films.csv");
        let original = catalogue();

        write_books(&books, &original.books).unwrap();
        write_films(&films, &original.films).unwrap();

        let header = std::fs::read_to_string(&films).unwrap();
        assert!(header.starts_with("title,year,average_rating,num_votes\n"));

        let loaded = Catalogue::load(&books, &films).unwrap();
        assert_eq!(loaded.books, original.books);
        assert_eq!(loaded.films, original.films);
    }

    #[test]
    fn test_lookups() {
        let c = catalogue();
        assert!(c.book("The Invisible Man").is_some());
        assert!(c.book("Kipps").is_none());

        let years: Vec<i32> = c.films_for("The Invisible Man").map(|f| f.year).collect();
        assert_eq!(years, [1933, 2020]);
        assert_eq!(c.film("The Time Machine", 1960).unwrap().num_votes, 35786);
        assert!(c.film("The Time Machine", 2002).is_none());
    }

    #[test]
    fn test_films_outlive_title() {
        let c = catalogue();
        let films: Vec<&FilmRecord> = {
            let title = String::from("The Invisible Man");
            c.films_for(&title).collect()
        };
        assert_eq!(films.len(), 2);
        assert_eq!(films[1].year, 2020);
    }

    #[test]
    fn test_empty_tables_keep_header() {
        let dir = tempfile::tempdir().unwrap();
        let books = dir.path().join("books.csv");
        let films = dir.path().join("films.csv");

        write_books(&books, &[]).unwrap();
        write_films(&films, &[]).unwrap();

        assert_eq!(
            std::fs::read_to_string(&books).unwrap(),
            "title,average_rating,num_votes\n"
        );
        assert_eq!(
            std::fs::read_to_string(&films).unwrap(),
            "title,year,average_rating,num_votes\n"
        );

        let loaded = Catalogue::load(&books, &films).unwrap();
        assert!(loaded.books.is_empty());
        assert!(loaded.films.is_empty());
    }
}
