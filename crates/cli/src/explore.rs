//! Interactive prediction prompt.
//!
//! Answers `<entity> <year>` (or `<entity>;<year>`) queries against one
//! already-fitted [`Analysis`] until EOF or `quit`.

use anyhow::Result;
use regression_facade::prelude::*;
use std::io::{BufRead, Write};

/// A parsed prompt line.
#[derive(Debug, PartialEq)]
enum Query<'a> {
    Predict { entity: &'a str, year: i32 },
    List,
    Quit,
    Invalid(&'a str),
}

fn parse_query(line: &str) -> Option<Query<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line {
        "quit" | "exit" => return Some(Query::Quit),
        "list" => return Some(Query::List),
        _ => {}
    }

    // Entity names may contain spaces ("United States"), so split on the last one.
    let parts = line.split_once(';').or_else(|| line.rsplit_once(char::is_whitespace));
    let query = match parts {
        Some((entity, year)) => match year.trim().parse::<i32>() {
            Ok(year) if !entity.trim().is_empty() => Query::Predict {
                entity: entity.trim(),
                year,
            },
            _ => Query::Invalid(line),
        },
        None => Query::Invalid(line),
    };
    Some(query)
}

/// Run the prompt loop, returning the number of predictions answered.
pub fn run<R: BufRead, W: Write>(analysis: &Analysis, input: R, mut out: W) -> Result<usize> {
    let profile = analysis.profile();
    let precision = profile.precision as usize;
    let mut answered = 0;

    writeln!(
        out,
        "{}: {} entities available, years {}-{}. Type 'list' or 'quit'.",
        profile.name,
        analysis.models().len(),
        profile.min_year,
        profile.max_year
    )?;

    for line in input.lines() {
        let line = line?;
        let Some(query) = parse_query(&line) else {
            continue;
        };

        match query {
            Query::Quit => break,
            Query::List => {
                for entity in analysis.entities() {
                    writeln!(out, "  {entity}")?;
                }
            }
            Query::Invalid(text) => {
                writeln!(out, "expected '<entity> <year>', got '{text}'")?;
            }
            Query::Predict { year, .. } if !profile.contains_year(year) => {
                writeln!(
                    out,
                    "year {year} is outside {}-{}",
                    profile.min_year, profile.max_year
                )?;
            }
            Query::Predict { entity, year } => match analysis.predict(entity, year) {
                Ok(value) => {
                    answered += 1;
                    writeln!(out, "{entity} {year}: {value:.precision$} {}", profile.unit)?;
                }
                Err(err) if err.is_model_not_found() => {
                    writeln!(out, "no model for '{entity}'")?;
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    Ok(answered)
}
