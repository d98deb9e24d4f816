//! Line-based prompts over any reader/writer pair

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::{
    degrees::{Disambiguate, Person},
    identifiers::PersonId,
};

/// Print `label` and read one trimmed line; `None` at end of input
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks the user to pick an id when several people share a name
pub struct PromptDisambiguator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptDisambiguator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, name: &str, candidates: &[&Person]) -> io::Result<Option<String>> {
        writeln!(self.output, "Which '{name}'?")?;
        for person in candidates {
            let birth = person
                .birth
                .map(|year| year.to_string())
                .unwrap_or_default();
            writeln!(
                self.output,
                "ID: {}, Name: {}, Birth: {}",
                person.id, person.name, birth
            )?;
        }
        prompt_line(&mut self.input, &mut self.output, "Intended Person ID: ")
    }
}

impl<R: BufRead, W: Write> Disambiguate for PromptDisambiguator<R, W> {
    fn choose(&mut self, name: &str, candidates: &[&Person]) -> Option<PersonId> {
        match self.ask(name, candidates) {
            Ok(Some(answer)) if !answer.is_empty() => Some(PersonId::new(answer)),
            Ok(_) => None,
            Err(err) => {
                warn!(error = %err, "failed to read disambiguation answer");
                None
            }
        }
    }
}
