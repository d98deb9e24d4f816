//! Degrees of separation over a person/movie co-starring graph

pub mod frontier;
pub mod graph;
pub mod loader;
pub mod lookup;
pub mod search;

pub use frontier::{Frontier, Node, QueueFrontier, StackFrontier};
pub use graph::{Graph, Movie, Person};
pub use loader::{LoadSummary, Loader, load_data};
pub use lookup::{Disambiguate, FirstCandidate, person_id_for_name};
pub use search::{PathStep, SearchOutcome, find_path, shortest_path};
