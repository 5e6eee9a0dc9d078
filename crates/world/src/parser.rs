//! Parser for world seed files.
//!
//! A seed file describes a world one record per line, fields separated by
//! `::`:
//!
//! ```text
//! lover::<id>::<name>
//! place::<id>::<name>::<distance>::<item>,<item>,...
//! rate::<place id>::<lover id>::<score>
//! favorite::<lover id>::<place id>
//! friend::<lover id>::<lover id>
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Parsing only checks
//! the shape of each line; domain rules are enforced when the records are
//! applied to a world (see `index.rs`).

use crate::error::{Result, WorldError};
use crate::types::{LoverId, PlaceId};
use std::fs;
use std::path::Path;

/// One parsed line of a seed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedRecord {
    Lover {
        id: LoverId,
        name: String,
    },
    Place {
        id: PlaceId,
        name: String,
        distance: u32,
        menu: Vec<String>,
    },
    Rate {
        place: PlaceId,
        lover: LoverId,
        score: i32,
    },
    Favorite {
        lover: LoverId,
        place: PlaceId,
    },
    Friend {
        a: LoverId,
        b: LoverId,
    },
}

/// A record together with the line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedLine {
    pub line: usize,
    pub record: SeedRecord,
}

/// Read and parse a seed file from disk
pub fn parse_seed_file(path: &Path) -> Result<Vec<SeedLine>> {
    let content = fs::read_to_string(path)?;
    parse_seed(&file_label(path), &content)
}

/// Parse seed content; `file` is only used in error messages
pub fn parse_seed(file: &str, content: &str) -> Result<Vec<SeedLine>> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split("::").map(str::trim).collect();
        let record = parse_record(&fields).map_err(|reason| WorldError::Parse {
            file: file.to_string(),
            line: line_no,
            reason,
        })?;
        records.push(SeedLine {
            line: line_no,
            record,
        });
    }

    Ok(records)
}

pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn parse_record(fields: &[&str]) -> std::result::Result<SeedRecord, String> {
    let (kind, rest) = fields
        .split_first()
        .ok_or_else(|| "Empty record".to_string())?;

    match *kind {
        "lover" => {
            expect_fields(kind, rest, 2)?;
            Ok(SeedRecord::Lover {
                id: parse_number("lover id", rest[0])?,
                name: parse_name("lover name", rest[1])?,
            })
        }
        "place" => {
            expect_fields(kind, rest, 4)?;
            Ok(SeedRecord::Place {
                id: parse_number("place id", rest[0])?,
                name: parse_name("place name", rest[1])?,
                distance: parse_number("distance", rest[2])?,
                menu: parse_menu(rest[3]),
            })
        }
        "rate" => {
            expect_fields(kind, rest, 3)?;
            Ok(SeedRecord::Rate {
                place: parse_number("place id", rest[0])?,
                lover: parse_number("lover id", rest[1])?,
                score: parse_number("score", rest[2])?,
            })
        }
        "favorite" => {
            expect_fields(kind, rest, 2)?;
            Ok(SeedRecord::Favorite {
                lover: parse_number("lover id", rest[0])?,
                place: parse_number("place id", rest[1])?,
            })
        }
        "friend" => {
            expect_fields(kind, rest, 2)?;
            Ok(SeedRecord::Friend {
                a: parse_number("lover id", rest[0])?,
                b: parse_number("lover id", rest[1])?,
            })
        }
        other => Err(format!("Unknown record kind '{}'", other)),
    }
}

fn expect_fields(kind: &str, rest: &[&str], expected: usize) -> std::result::Result<(), String> {
    if rest.len() != expected {
        return Err(format!(
            "Expected {} fields after '{}' but found {}",
            expected,
            kind,
            rest.len()
        ));
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> std::result::Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid {}: '{}'", field, value))
}

fn parse_name(field: &str, value: &str) -> std::result::Result<String, String> {
    if value.is_empty() {
        return Err(format!("Missing {}", field));
    }
    Ok(value.to_string())
}

fn parse_menu(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
