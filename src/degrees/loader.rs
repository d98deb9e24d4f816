//! CSV loading for the co-starring graph.
//!
//! A data directory holds three tables:
//! - `people.csv`: `id,name,birth`
//! - `movies.csv`: `id,title,year`
//! - `stars.csv`: `person_id,movie_id`
//!
//! Star rows that cannot be parsed or that reference unknown ids are skipped
//! and counted in the [`LoadSummary`]; they never fail the load.

use std::{fs::File, io::Read, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::graph::Graph;
use crate::{
    Result,
    error::Error,
    identifiers::{MovieId, PersonId},
};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: PersonId,
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    birth: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: MovieId,
    title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct StarRecord {
    person_id: PersonId,
    movie_id: MovieId,
}

/// Counts from one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub people: usize,
    pub movies: usize,
    pub links: usize,
    pub skipped_links: usize,
}

/// Builds a [`Graph`] from the three tables
pub struct Loader;

impl Loader {
    /// Load from any readers holding the people, movies and stars tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Csv`] when the people or movies table is malformed.
    pub fn from_readers<P: Read, M: Read, S: Read>(
        people: P,
        movies: M,
        stars: S,
    ) -> Result<(Graph, LoadSummary)> {
        let mut graph = Graph::new();
        let mut summary = LoadSummary::default();

        for record in csv::Reader::from_reader(people).deserialize() {
            let record: PersonRecord = record?;
            graph.add_person(record.id, record.name, record.birth);
            summary.people += 1;
        }

        for record in csv::Reader::from_reader(movies).deserialize() {
            let record: MovieRecord = record?;
            graph.add_movie(record.id, record.title, record.year);
            summary.movies += 1;
        }

        for record in csv::Reader::from_reader(stars).deserialize::<StarRecord>() {
            let linked = match record {
                Ok(star) => {
                    let linked = graph.link(star.person_id.as_str(), star.movie_id.as_str());
                    if !linked {
                        debug!(
                            person_id = %star.person_id,
                            movie_id = %star.movie_id,
                            "skipping star row with unknown id"
                        );
                    }
                    linked
                }
                Err(err) => {
                    debug!(error = %err, "skipping malformed star row");
                    false
                }
            };
            if linked {
                summary.links += 1;
            } else {
                summary.skipped_links += 1;
            }
        }

        info!(
            people = summary.people,
            movies = summary.movies,
            links = summary.links,
            skipped_links = summary.skipped_links,
            "graph loaded"
        );

        Ok((graph, summary))
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Io {
        operation: format!("open {}", path.display()),
        source,
    })
}

/// Load `people.csv`, `movies.csv` and `stars.csv` from a directory.
///
/// # Errors
///
/// Returns [`Error::Io`] if a file cannot be opened and [`Error::Csv`] if
/// the people or movies table is malformed.
pub fn load_data(directory: &Path) -> Result<(Graph, LoadSummary)> {
    debug!(directory = %directory.display(), "loading graph");
    Loader::from_readers(
        open(&directory.join(PEOPLE_FILE))?,
        open(&directory.join(MOVIES_FILE))?,
        open(&directory.join(STARS_FILE))?,
    )
}
