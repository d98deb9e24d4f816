//! In-memory co-starring graph: people, movies and the name index

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::identifiers::{MovieId, PersonId};

/// A person and the movies they starred in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<i32>,
    pub movies: BTreeSet<MovieId>,
}

/// A movie and the people who starred in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<i32>,
    pub stars: BTreeSet<PersonId>,
}

/// Bidirectional person/movie graph.
///
/// Owns every record; searches borrow it. Two people are adjacent when they
/// share a movie, and the movie labels the edge.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Lower-cased name -> ids sharing that name
    names: HashMap<String, BTreeSet<PersonId>>,
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a person.
    ///
    /// Re-adding an id replaces its name and birth year but keeps the movies
    /// already linked to it.
    pub fn add_person(&mut self, id: PersonId, name: impl Into<String>, birth: Option<i32>) {
        let name = name.into();

        let movies = match self.people.remove(&id) {
            Some(previous) => {
                self.unindex_name(&previous.name, &id);
                previous.movies
            }
            None => BTreeSet::new(),
        };

        self.names
            .entry(name_key(&name))
            .or_default()
            .insert(id.clone());
        self.people.insert(
            id.clone(),
            Person {
                id,
                name,
                birth,
                movies,
            },
        );
    }

    fn unindex_name(&mut self, name: &str, id: &PersonId) {
        let key = name_key(name);
        if let Some(ids) = self.names.get_mut(&key) {
            ids.remove(id);
            if ids.is_empty() {
                self.names.remove(&key);
            }
        }
    }

    /// Insert or update a movie, keeping any stars already linked to it.
    pub fn add_movie(&mut self, id: MovieId, title: impl Into<String>, year: Option<i32>) {
        let stars = self
            .movies
            .remove(&id)
            .map(|previous| previous.stars)
            .unwrap_or_default();
        self.movies.insert(
            id.clone(),
            Movie {
                id,
                title: title.into(),
                year,
                stars,
            },
        );
    }

    /// Record that a person starred in a movie.
    ///
    /// Returns `false` and changes nothing when either id is unknown.
    pub fn link(&mut self, person_id: &str, movie_id: &str) -> bool {
        let (Some(person), Some(movie)) = (
            self.people.get_mut(person_id),
            self.movies.get_mut(movie_id),
        ) else {
            return false;
        };
        person.movies.insert(movie.id.clone());
        movie.stars.insert(person.id.clone());
        true
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Ids of everyone with this name, ignoring case, in id order
    pub fn person_ids_for_name(&self, name: &str) -> Vec<&PersonId> {
        self.names
            .get(&name_key(name))
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    /// `(movie, person)` pairs for everyone who shares a movie with `person_id`.
    ///
    /// The person appears among their own neighbors once per movie; the
    /// search skips them because they are already explored. Unknown ids have
    /// no neighbors.
    pub fn neighbors_for_person(&self, person_id: &str) -> BTreeSet<(&MovieId, &PersonId)> {
        let Some(person) = self.people.get(person_id) else {
            return BTreeSet::new();
        };

        person
            .movies
            .iter()
            .filter_map(|movie_id| self.movies.get(movie_id))
            .flat_map(|movie| movie.stars.iter().map(move |star| (&movie.id, star)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new();
        graph.add_person("1".into(), "Kevin Bacon", Some(1958));
        graph.add_person("2".into(), "Tom Hanks", Some(1956));
        graph.add_person("3".into(), "Kevin Bacon", None);
        graph.add_movie("10".into(), "Apollo 13", Some(1995));
        assert!(graph.link("1", "10"));
        assert!(graph.link("2", "10"));
        graph
    }

    #[test]
    fn test_name_index_is_case_insensitive() {
        let graph = sample();
        let ids = graph.person_ids_for_name("kevin BACON");
        assert_eq!(ids, vec![&PersonId::new("1"), &PersonId::new("3")]);
        assert!(graph.person_ids_for_name("Nobody").is_empty());
    }

    #[test]
    fn test_link_is_bidirectional() {
        let graph = sample();
        assert!(graph.person("1").unwrap().movies.contains("10"));
        assert!(graph.movie("10").unwrap().stars.contains("2"));
    }

    #[test]
    fn test_link_unknown_ids_is_rejected() {
        let mut graph = sample();
        assert!(!graph.link("99", "10"));
        assert!(!graph.link("1", "99"));
        assert_eq!(graph.movie("10").unwrap().stars.len(), 2);
    }

    #[test]
    fn test_neighbors_include_costars() {
        let graph = sample();
        let neighbors: Vec<(String, String)> = graph
            .neighbors_for_person("1")
            .into_iter()
            .map(|(m, p)| (m.to_string(), p.to_string()))
            .collect();
        assert_eq!(
            neighbors,
            vec![
                ("10".to_string(), "1".to_string()),
                ("10".to_string(), "2".to_string())
            ]
        );
        assert!(graph.neighbors_for_person("3").is_empty());
        assert!(graph.neighbors_for_person("404").is_empty());
    }

    #[test]
    fn test_re_adding_person_moves_name_and_keeps_movies() {
        let mut graph = sample();
        graph.add_person("1".into(), "Kyra Sedgwick", Some(1965));

        assert_eq!(graph.person_ids_for_name("kevin bacon"), vec![&PersonId::new("3")]);
        assert_eq!(graph.person_ids_for_name("kyra sedgwick"), vec![&PersonId::new("1")]);
        assert!(graph.person("1").unwrap().movies.contains("10"));
        assert_eq!(graph.people_count(), 3);
    }
}
