//! Common test utilities for the searchlab test suite.
//!
//! CSV fixtures for the degrees-of-separation tests.

#![allow(dead_code)]

use std::{fs, path::Path};

/// Write a people/movies/stars dataset into `dir`.
///
/// Rows are given without headers; the standard headers are added.
pub fn write_dataset(dir: &Path, people: &[&str], movies: &[&str], stars: &[&str]) {
    let write = |file: &str, header: &str, rows: &[&str]| {
        let mut body = String::from(header);
        for row in rows {
            body.push('\n');
            body.push_str(row);
        }
        body.push('\n');
        fs::write(dir.join(file), body).expect("failed to write fixture");
    };

    write("people.csv", "id,name,birth", people);
    write("movies.csv", "id,title,year", movies);
    write("stars.csv", "person_id,movie_id", stars);
}
