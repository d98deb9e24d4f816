//! Degrees command - Degrees of separation between two people

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{CommonConfig, DegreesConfig},
        output::{create_spinner, format_number},
        prompt::{PromptDisambiguator, prompt_line},
    },
    degrees::{Graph, PathStep, load_data, person_id_for_name, shortest_path},
    identifiers::PersonId,
};

#[derive(Parser, Debug)]
#[command(about = "Find the degrees of separation between two people")]
pub struct DegreesArgs {
    /// Directory with people.csv, movies.csv and stars.csv
    #[arg(default_value = "large")]
    pub directory: PathBuf,

    /// Source person's name (prompted for when omitted)
    #[arg(long)]
    pub source: Option<String>,

    /// Target person's name (prompted for when omitted)
    #[arg(long)]
    pub target: Option<String>,

    /// Export the path to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// One printed hop, with names resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: String,
    pub to: String,
    pub movie_id: String,
    pub title: String,
}

impl DegreesArgs {
    pub fn config(&self) -> DegreesConfig {
        DegreesConfig {
            directory: self.directory.clone(),
            source: self.source.clone(),
            target: self.target.clone(),
            export: self.export.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DegreesExport<'a> {
    source: &'a PersonId,
    target: &'a PersonId,
    degrees: Option<usize>,
    hops: &'a [Hop],
}

pub fn execute(args: DegreesArgs, common: &CommonConfig) -> Result<()> {
    let config = args.config();

    println!("Loading data...");
    let spinner = create_spinner("Loading CSV tables", common.progress);
    let loaded = load_data(&config.directory);
    spinner.finish_and_clear();
    let (graph, summary) =
        loaded.with_context(|| format!("failed to load {}", config.directory.display()))?;
    println!(
        "Data loaded ({} people, {} movies, {} links).",
        format_number(summary.people),
        format_number(summary.movies),
        format_number(summary.links)
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let source = resolve(&graph, config.source, &mut input, &mut output)?;
    let target = resolve(&graph, config.target, &mut input, &mut output)?;

    let path = shortest_path(&graph, &source, &target);
    let hops = match &path {
        Some(path) => describe_path(&graph, &source, path),
        None => Vec::new(),
    };
    print_result(path.as_ref().map(|_| hops.as_slice()), &mut output)?;

    if let Some(export) = &config.export {
        let record = DegreesExport {
            source: &source,
            target: &target,
            degrees: path.as_ref().map(Vec::len),
            hops: &hops,
        };
        write_export(&record, export)?;
        println!("\nPath exported to: {}", export.display());
    }

    Ok(())
}

/// Resolve a name given on the command line, or prompt for one
fn resolve<R: BufRead, W: Write>(
    graph: &Graph,
    name: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<PersonId> {
    let name = match name {
        Some(name) => name,
        None => match prompt_line(input, output, "Name: ")? {
            Some(name) => name,
            None => bail!("input closed while reading a name"),
        },
    };

    let mut disambiguator = PromptDisambiguator::new(&mut *input, &mut *output);
    match person_id_for_name(graph, &name, &mut disambiguator) {
        Some(id) => Ok(id),
        None => bail!("Person not found."),
    }
}

/// Pair each hop with the previous person's name and the movie title
pub fn describe_path(graph: &Graph, source: &PersonId, path: &[PathStep]) -> Vec<Hop> {
    let name_of = |id: &PersonId| {
        graph
            .person(id.as_str())
            .map(|person| person.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let mut previous = source.clone();
    path.iter()
        .map(|step| {
            let hop = Hop {
                from: name_of(&previous),
                to: name_of(&step.person),
                movie_id: step.movie.to_string(),
                title: graph
                    .movie(step.movie.as_str())
                    .map(|movie| movie.title.clone())
                    .unwrap_or_else(|| step.movie.to_string()),
            };
            previous = step.person.clone();
            hop
        })
        .collect()
}

/// Print the degrees line and one line per hop, or "Not connected."
pub fn print_result<W: Write>(hops: Option<&[Hop]>, output: &mut W) -> io::Result<()> {
    let Some(hops) = hops else {
        return writeln!(output, "Not connected.");
    };

    writeln!(output, "{} degrees of separation.", hops.len())?;
    for (i, hop) in hops.iter().enumerate() {
        writeln!(
            output,
            "{}: {} and {} starred in {}",
            i + 1,
            hop.from,
            hop.to,
            hop.title
        )?;
    }
    Ok(())
}

fn write_export(record: &DegreesExport<'_>, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, record)?;
    Ok(())
}
