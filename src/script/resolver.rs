//! Script resolution
//!
//! Maps a work identity to its text file and runs the tokenizer and
//! aggregator over it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::error::{EmotionError, Result, WorkKind};
use crate::emotion::{aggregate, EmotionRates, Lexicon};
use crate::text::WordTokenizer;

/// Identity of a work whose text can be analysed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkId {
    Book { title: String },
    Film { title: String, year: i32 },
}

impl WorkId {
    pub fn book(title: impl Into<String>) -> Self {
        WorkId::Book { title: title.into() }
    }

    pub fn film(title: impl Into<String>, year: i32) -> Self {
        WorkId::Film {
            title: title.into(),
            year,
        }
    }

    /// Build from loose parts. Films need a year, books ignore one.
    pub fn from_parts(kind: WorkKind, title: &str, year: Option<i32>) -> Result<Self> {
        match (kind, year) {
            (WorkKind::Film, Some(year)) => Ok(Self::film(title, year)),
            (WorkKind::Film, None) => Err(EmotionError::validation(
                "year",
                format!("film '{}' needs a release year", title),
            )),
            (WorkKind::Book, year) => {
                if let Some(year) = year {
                    debug!("Ignoring year {} for book '{}'", year, title);
                }
                Ok(Self::book(title))
            }
        }
    }

    pub fn kind(&self) -> WorkKind {
        match self {
            WorkId::Book { .. } => WorkKind::Book,
            WorkId::Film { .. } => WorkKind::Film,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            WorkId::Book { title } | WorkId::Film { title, .. } => title,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            WorkId::Book { .. } => None,
            WorkId::Film { year, .. } => Some(*year),
        }
    }
}

/// Resolves works to scripts and computes their emotion rates
#[derive(Debug, Clone)]
pub struct ScriptResolver {
    lexicon: Arc<Lexicon>,
    tokenizer: WordTokenizer,
    books_dir: PathBuf,
    scripts_dir: PathBuf,
}

impl ScriptResolver {
    /// `books_dir` holds `<title>.txt`, `scripts_dir` holds `<title> <year>.txt`
    pub fn new(
        lexicon: Arc<Lexicon>,
        books_dir: impl Into<PathBuf>,
        scripts_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            lexicon,
            tokenizer: WordTokenizer::default(),
            books_dir: books_dir.into(),
            scripts_dir: scripts_dir.into(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Text file backing a work
    pub fn script_path(&self, work: &WorkId) -> PathBuf {
        match work {
            WorkId::Book { title } => self.books_dir.join(format!("{}.txt", title)),
            WorkId::Film { title, year } => {
                self.scripts_dir.join(format!("{} {}.txt", title, year))
            }
        }
    }

    /// Emotion rates for a work given as loose parts
    pub fn emotions_for(&self, kind: WorkKind, title: &str, year: Option<i32>) -> Result<EmotionRates> {
        let work = WorkId::from_parts(kind, title, year)?;
        self.emotions_for_work(&work)
    }

    /// Emotion rates for a work; `NotFound` when its text file is absent
    pub fn emotions_for_work(&self, work: &WorkId) -> Result<EmotionRates> {
        let path = self.script_path(work);
        debug!("Resolved {} '{}' to {:?}", work.kind(), work.title(), path);

        let counts = self
            .tokenizer
            .tokenize_file(&path)?
            .ok_or_else(|| not_found(work, &path))?;

        let rates = aggregate(&counts, &self.lexicon);
        if rates.is_no_signal() {
            warn!(
                "No lexicon words in {} '{}' ({} tokens)",
                work.kind(),
                work.title(),
                counts.total()
            );
        }
        Ok(rates)
    }
}

fn not_found(work: &WorkId, path: &Path) -> EmotionError {
    EmotionError::NotFound {
        kind: work.kind(),
        title: work.title().to_string(),
        year: work.year(),
        path: path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::EmotionLabels;
    use std::fs;

    fn resolver(root: &Path) -> ScriptResolver {
        let lexicon = Lexicon::from_entries(
            EmotionLabels::default(),
            [("snow", vec![0.0, 0.1, 0.2, 0.0, 0.3, 0.0, 0.4])],
        )
        .unwrap();
        ScriptResolver::new(Arc::new(lexicon), root.join("books"), root.join("scripts"))
    }

    #[test]
    fn test_script_paths() {
        let r = resolver(Path::new("/data"));
        assert_eq!(
            r.script_path(&WorkId::book("The Invisible Man")),
            PathBuf::from("/data/books/The Invisible Man.txt")
        );
        assert_eq!(
            r.script_path(&WorkId::film("The Invisible Man", 1933)),
            PathBuf::from("/data/scripts/The Invisible Man 1933.txt")
        );
    }

    #[test]
    fn test_film_needs_year() {
        let r = resolver(Path::new("/data"));
        let err = r.emotions_for(WorkKind::Film, "The Time Machine", None).unwrap_err();
        assert!(matches!(err, EmotionError::Validation { .. }));
    }

    #[test]
    fn test_missing_script_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let r = resolver(dir.path());
        let err = r
            .emotions_for(WorkKind::Film, "The Time Machine", Some(1960))
            .unwrap_err();
        match err {
            EmotionError::NotFound { kind, title, year, path } => {
                assert_eq!(kind, WorkKind::Film);
                assert_eq!(title, "The Time Machine");
                assert_eq!(year, Some(1960));
                assert!(path.ends_with("The Time Machine 1960.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_book_ignores_year() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("books")).unwrap();
        fs::write(dir.path().join("books/Kipps.txt"), "Snow fell. snow\n").unwrap();

        let r = resolver(dir.path());
        let rates = r.emotions_for(WorkKind::Book, "Kipps", Some(1905)).unwrap();
        let vector = rates.as_vector().unwrap();
        assert_eq!(vector[6], 0.4 * 50.0);
    }

    #[test]
    fn test_no_signal_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scripts")).unwrap();
        fs::write(dir.path().join("scripts/Kipps 1921.txt"), "nothing to see").unwrap();

        let r = resolver(dir.path());
        let rates = r.emotions_for_work(&WorkId::film("Kipps", 1921)).unwrap();
        assert!(rates.is_no_signal());
    }
}
