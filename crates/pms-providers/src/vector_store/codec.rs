//! Vector record codec
//!
//! Line format used by the filesystem vector store:
//!
//! ```text
//! id,embedding
//! 1,[0.12;-0.5;3]
//! 2,[0.25;0;1.5]
//! ```
//!
//! Components are written with the shortest decimal form that reads back
//! as the same `f32`, so a decode of an encode reproduces every vector bit
//! for bit. Records are written in ascending id order.

use crate::constants::VECTOR_FILE_HEADER;
use pms_domain::entities::ProjectId;
use pms_domain::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Write;

/// Decoded contents of a vector file
#[derive(Debug, Default, PartialEq)]
pub struct DecodedVectors {
    /// Stored vectors keyed by project id
    pub vectors: HashMap<ProjectId, Vec<f32>>,
    /// Shared dimension of the vectors, `None` when there are none
    pub dimensions: Option<usize>,
}

/// Encode one record line, without the trailing newline
pub fn encode_record(id: ProjectId, vector: &[f32]) -> String {
    let mut line = String::with_capacity(16 + vector.len() * 12);
    // Writing to a String cannot fail
    let _ = write!(line, "{id},[");
    for (i, component) in vector.iter().enumerate() {
        if i > 0 {
            line.push(';');
        }
        let _ = write!(line, "{component}");
    }
    line.push(']');
    line
}

/// Decode one record line
///
/// `line_no` is 1-based and only used in error messages.
pub fn decode_record(line_no: usize, line: &str) -> Result<(ProjectId, Vec<f32>)> {
    let malformed = |what: &str| Error::store_init(format!("line {line_no}: {what}"));

    let (id_part, vector_part) = line
        .split_once(',')
        .ok_or_else(|| malformed("missing ',' between id and embedding"))?;

    let id: u64 = id_part
        .trim()
        .parse()
        .map_err(|_| malformed(&format!("invalid project id '{}'", id_part.trim())))?;
    if id == 0 {
        return Err(malformed("project id must be positive"));
    }

    let body = vector_part
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed("embedding must be enclosed in '[' and ']'"))?;
    if body.trim().is_empty() {
        return Err(malformed("embedding is empty"));
    }

    let vector = body
        .split(';')
        .map(|component| {
            component
                .trim()
                .parse::<f32>()
                .map_err(|_| malformed(&format!("invalid component '{}'", component.trim())))
        })
        .collect::<Result<Vec<f32>>>()?;

    Ok((ProjectId(id), vector))
}

/// Encode a full vector file, header included
pub fn encode_file(vectors: &HashMap<ProjectId, Vec<f32>>) -> String {
    let mut ids: Vec<&ProjectId> = vectors.keys().collect();
    ids.sort_unstable();

    let mut out = String::from(VECTOR_FILE_HEADER);
    out.push('\n');
    for id in ids {
        out.push_str(&encode_record(*id, &vectors[id]));
        out.push('\n');
    }
    out
}

/// Decode a full vector file
///
/// The first line must be the header. Blank lines after the last record
/// are ignored; any other malformed line, a duplicate id, or vectors of
/// differing length fail with [`Error::StoreInit`] naming the line.
pub fn decode_file(contents: &str) -> Result<DecodedVectors> {
    let mut lines = contents.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim() == VECTOR_FILE_HEADER => {}
        Some((_, other)) => {
            return Err(Error::store_init(format!(
                "line 1: expected header '{VECTOR_FILE_HEADER}', found '{}'",
                other.trim()
            )));
        }
        None => {
            return Err(Error::store_init(format!(
                "missing header '{VECTOR_FILE_HEADER}'"
            )));
        }
    }

    let mut decoded = DecodedVectors::default();
    let mut trailing_blank: Option<usize> = None;

    for (index, line) in lines {
        let line_no = index + 1;
        if line.trim().is_empty() {
            trailing_blank.get_or_insert(line_no);
            continue;
        }
        if let Some(blank) = trailing_blank {
            return Err(Error::store_init(format!(
                "line {blank}: blank line between records"
            )));
        }

        let (id, vector) = decode_record(line_no, line)?;
        match decoded.dimensions {
            None => decoded.dimensions = Some(vector.len()),
            Some(expected) if expected != vector.len() => {
                return Err(Error::store_init(format!(
                    "line {line_no}: expected {expected} components, found {}",
                    vector.len()
                )));
            }
            Some(_) => {}
        }
        if decoded.vectors.insert(id, vector).is_some() {
            return Err(Error::store_init(format!(
                "line {line_no}: duplicate project id {id}"
            )));
        }
    }

    Ok(decoded)
}
