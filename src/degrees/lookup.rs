//! Resolving a typed name to a single person

use super::graph::{Graph, Person};
use crate::identifiers::PersonId;

/// Chooses one person when several share a name.
///
/// Implementations may prompt a user; returning `None` means no choice was
/// made.
pub trait Disambiguate {
    fn choose(&mut self, name: &str, candidates: &[&Person]) -> Option<PersonId>;
}

/// Non-interactive choice: the candidate with the lowest id
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl Disambiguate for FirstCandidate {
    fn choose(&mut self, _name: &str, candidates: &[&Person]) -> Option<PersonId> {
        candidates.first().map(|person| person.id.clone())
    }
}

/// Resolve a name (ignoring case) to one person id.
///
/// Returns `None` when nobody has the name, or when the name is ambiguous and
/// the disambiguator's answer is not one of the candidates.
pub fn person_id_for_name<D: Disambiguate + ?Sized>(
    graph: &Graph,
    name: &str,
    disambiguator: &mut D,
) -> Option<PersonId> {
    let ids = graph.person_ids_for_name(name);
    match ids.as_slice() {
        [] => None,
        [only] => Some((*only).clone()),
        _ => {
            let candidates: Vec<&Person> = ids
                .iter()
                .filter_map(|id| graph.person(id.as_str()))
                .collect();
            let chosen = disambiguator.choose(name, &candidates)?;
            ids.iter().any(|id| **id == chosen).then_some(chosen)
        }
    }
}
