//! Films table construction from IMDb title dumps

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::{open_reader, row_error, FilmRecord};
use crate::core::error::{EmotionError, Result};

/// IMDb null marker
const IMDB_NULL: &str = "\\N";

#[derive(Debug, Deserialize)]
struct RawBasics {
    tconst: String,
    #[serde(rename = "titleType")]
    title_type: String,
    #[serde(rename = "originalTitle")]
    original_title: String,
    #[serde(rename = "startYear")]
    start_year: String,
    #[serde(rename = "runtimeMinutes")]
    runtime_minutes: String,
}

#[derive(Debug, Deserialize)]
struct RawRating {
    tconst: String,
    #[serde(rename = "averageRating")]
    average_rating: f64,
    #[serde(rename = "numVotes")]
    num_votes: u64,
}

/// Select feature films whose original title is one of `titles`, joined
/// with their ratings. Basics order is preserved; films without a rating
/// are dropped.
pub fn build_films(
    basics: impl AsRef<Path>,
    ratings: impl AsRef<Path>,
    titles: &HashSet<String>,
) -> Result<Vec<FilmRecord>> {
    let basics = basics.as_ref();
    let candidates = select_basics(basics, titles)?;
    debug!("{} candidate films in {:?}", candidates.len(), basics);

    let wanted: HashSet<&str> = candidates.iter().map(|c| c.tconst.as_str()).collect();
    let ratings = load_ratings(ratings.as_ref(), &wanted)?;

    let mut films = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let Some(&(average_rating, num_votes)) = ratings.get(&candidate.tconst) else {
            debug!("No rating for {} ({})", candidate.original_title, candidate.tconst);
            continue;
        };

        let year: i32 = candidate.start_year.trim().parse().map_err(|_| EmotionError::Dataset {
            message: format!(
                "invalid startYear '{}' for {}",
                candidate.start_year, candidate.tconst
            ),
            path: Some(basics.to_path_buf()),
        })?;

        films.push(FilmRecord {
            title: candidate.original_title,
            year,
            average_rating,
            num_votes,
        });
    }

    info!("Selected {} films for {} titles", films.len(), titles.len());
    Ok(films)
}

fn select_basics(path: &Path, titles: &HashSet<String>) -> Result<Vec<RawBasics>> {
    let mut reader = open_reader(path, b'\t', false)?;
    let mut selected = Vec::new();

    for row in reader.deserialize::<RawBasics>() {
        let raw = row.map_err(|e| row_error(path, e))?;
        if raw.title_type == "movie"
            && raw.start_year != IMDB_NULL
            && raw.runtime_minutes != IMDB_NULL
            && titles.contains(&raw.original_title)
        {
            selected.push(raw);
        }
    }

    Ok(selected)
}

fn load_ratings(path: &Path, wanted: &HashSet<&str>) -> Result<HashMap<String, (f64, u64)>> {
    let mut reader = open_reader(path, b'\t', false)?;
    let mut ratings = HashMap::with_capacity(wanted.len());

    for row in reader.deserialize::<RawRating>() {
        let raw = row.map_err(|e| row_error(path, e))?;
        if wanted.contains(raw.tconst.as_str()) {
            ratings.insert(raw.tconst, (raw.average_rating, raw.num_votes));
        }
    }

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASICS: &str = "\
tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres
tt0024184\tmovie\tThe Invisible Man\tThe Invisible Man\t0\t1933\t\\N\t71\tHorror,Sci-Fi
tt0046534\tmovie\tThe War of the Worlds\tThe War of the Worlds\t0\t1953\t\\N\t85\tAction,Sci-Fi
tt0000001\ttvEpisode\tThe Invisible Man\tThe Invisible Man\t0\t1958\t\\N\t25\tDrama
tt0000002\tmovie\tThe Time Machine\tThe Time Machine\t0\t\\N\t\\N\t90\tSci-Fi
tt0000003\tmovie\tThe Time Machine\tThe Time Machine\t0\t1949\t\\N\t\\N\tSci-Fi
tt0054387\tmovie\t\"The Time Machine\"\tThe Time Machine\t0\t1960\t\\N\t103\tSci-Fi
tt0000004\tmovie\tKipps\tKipps\t0\t1941\t\\N\t112\tComedy
tt0000005\tmovie\tThe Invisible Man\tThe Invisible Man\t0\t2017\t\\N\t80\tHorror
";

    const RATINGS: &str = "\
tconst\taverageRating\tnumVotes
tt0054387\t7.6\t35786
tt0000004\t6.9\t500
tt0024184\t7.7\t30172
tt0046534\t7.1\t32429
";

    fn titles() -> HashSet<String> {
        ["The Invisible Man", "The War of the Worlds", "The Time Machine"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_filter_and_join() {
        let dir = tempfile::tempdir().unwrap();
        let basics = dir.path().join("title.basics.tsv");
        let ratings = dir.path().join("title.ratings.tsv");
        std::fs::write(&basics, BASICS).unwrap();
        std::fs::write(&ratings, RATINGS).unwrap();

        let films = build_films(&basics, &ratings, &titles()).unwrap();

        let ids: Vec<(&str, i32)> = films.iter().map(|f| (f.title.as_str(), f.year)).collect();
        assert_eq!(
            ids,
            [
                ("The Invisible Man", 1933),
                ("The War of the Worlds", 1953),
                ("The Time Machine", 1960),
            ]
        );
        assert_eq!(films[2].average_rating, 7.6);
        assert_eq!(films[2].num_votes, 35786);
    }

    #[test]
    fn test_missing_ratings_file() {
        let dir = tempfile::tempdir().unwrap();
        let basics = dir.path().join("title.basics.tsv");
        std::fs::write(&basics, BASICS).unwrap();
        let err = build_films(&basics, dir.path().join("absent.tsv"), &titles()).unwrap_err();
        assert!(matches!(err, EmotionError::Dataset { .. }));
    }
}
