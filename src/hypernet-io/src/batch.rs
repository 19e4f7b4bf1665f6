//! Edge batches from dynamically shaped JSON.
//!
//! JSON input does not say which batch layout it uses, so the shape is read
//! from the first entry and every later entry must match it. The result is a
//! typed `EdgeBatch` that the core accepts without further inspection.

use common_error::{HypernetError, HypernetResult};
use hypernet_core::{AttrMap, EdgeBatch, Id};
use indexmap::IndexMap;
use serde_json::Value as Json;

/// Layout of one batch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `[n1, n2, ...]`
    Members,
    /// `[[n1, ...], id]`
    WithId,
    /// `[[n1, ...], {attrs}]`
    WithAttrs,
    /// `[[n1, ...], id, {attrs}]`
    Full,
}

/// Parse a JSON edge batch.
///
/// Accepted layouts:
/// - an object mapping edge IDs to member arrays; keys that parse as
///   integers become `Id::Int`, so `{"0": [...]}` and `[[[...], 0]]` name
///   the same edge
/// - an array of member arrays
/// - an array of `[members, id]`, `[members, attrs]`, or
///   `[members, id, attrs]` entries
///
/// # Errors
/// `InvalidMembers` for a string where members are expected, for mixed
/// layouts, and for anything else that is not one of the layouts above.
/// `InvalidKey` for a `null` node or edge ID.
pub fn parse_edge_batch(value: &Json) -> HypernetResult<EdgeBatch<Id>> {
    match value {
        Json::Object(map) => {
            let mut edges = IndexMap::with_capacity(map.len());
            for (id, members) in map {
                edges.insert(id_from_str(id), parse_members(members)?);
            }
            Ok(EdgeBatch::Dict(edges))
        }
        Json::Array(entries) => parse_entries(entries),
        Json::String(s) => Err(HypernetError::invalid_members(format!(
            "edge batch cannot be a string, got {s:?}"
        ))),
        other => Err(HypernetError::invalid_members(format!(
            "edge batch must be an object or an array, got {other}"
        ))),
    }
}

fn parse_entries(entries: &[Json]) -> HypernetResult<EdgeBatch<Id>> {
    let Some(first) = entries.first() else {
        return Ok(EdgeBatch::Members(Vec::new()));
    };
    let shape = shape_of(first)?;
    for entry in entries {
        let found = shape_of(entry)?;
        if found != shape {
            return Err(HypernetError::invalid_members(format!(
                "mixed edge layouts in one batch: expected {shape:?}, found {found:?}"
            )));
        }
    }

    let batch = match shape {
        Shape::Members => EdgeBatch::Members(
            entries
                .iter()
                .map(parse_members)
                .collect::<HypernetResult<_>>()?,
        ),
        Shape::WithId => EdgeBatch::WithIds(
            entries
                .iter()
                .map(|entry| {
                    let parts = tuple_parts(entry);
                    Ok((parse_members(&parts[0])?, parse_json_id(&parts[1])?))
                })
                .collect::<HypernetResult<_>>()?,
        ),
        Shape::WithAttrs => EdgeBatch::WithAttrs(
            entries
                .iter()
                .map(|entry| {
                    let parts = tuple_parts(entry);
                    Ok((parse_members(&parts[0])?, parse_attrs(&parts[1])?))
                })
                .collect::<HypernetResult<_>>()?,
        ),
        Shape::Full => EdgeBatch::Full(
            entries
                .iter()
                .map(|entry| {
                    let parts = tuple_parts(entry);
                    Ok((
                        parse_members(&parts[0])?,
                        parse_json_id(&parts[1])?,
                        parse_attrs(&parts[2])?,
                    ))
                })
                .collect::<HypernetResult<_>>()?,
        ),
    };
    Ok(batch)
}

/// Classify one batch entry.
fn shape_of(entry: &Json) -> HypernetResult<Shape> {
    let items = match entry {
        Json::Array(items) => items,
        Json::String(s) => {
            return Err(HypernetError::invalid_members(format!(
                "edge members cannot be a string, got {s:?}"
            )));
        }
        other => {
            return Err(HypernetError::invalid_members(format!(
                "edge entry must be an array, got {other}"
            )));
        }
    };

    // A member list never nests arrays, so a leading array marks a tuple.
    if !matches!(items.first(), Some(Json::Array(_))) {
        return Ok(Shape::Members);
    }
    match (items.len(), items.get(1), items.get(2)) {
        (2, Some(Json::Object(_)), None) => Ok(Shape::WithAttrs),
        (2, Some(_), None) => Ok(Shape::WithId),
        (3, Some(_), Some(Json::Object(_))) => Ok(Shape::Full),
        _ => Err(HypernetError::invalid_members(format!(
            "unrecognized edge entry {entry}"
        ))),
    }
}

/// The elements of an entry already classified as a tuple.
fn tuple_parts(entry: &Json) -> &[Json] {
    entry.as_array().map(Vec::as_slice).unwrap_or_default()
}

fn parse_members(value: &Json) -> HypernetResult<Vec<Id>> {
    match value {
        Json::Array(items) => items.iter().map(parse_json_id).collect(),
        Json::String(s) => Err(HypernetError::invalid_members(format!(
            "edge members cannot be a string, got {s:?}"
        ))),
        other => Err(HypernetError::invalid_members(format!(
            "edge members must be an array, got {other}"
        ))),
    }
}

/// An integer ID when `s` parses as one, else a string ID.
pub(crate) fn id_from_str(s: &str) -> Id {
    s.parse::<i64>().map_or_else(|_| Id::from(s), Id::Int)
}

/// Read a node or edge ID: an integer or a string.
fn parse_json_id(value: &Json) -> HypernetResult<Id> {
    match value {
        Json::Null => Err(HypernetError::invalid_key("None cannot be a node or edge")),
        Json::String(s) => Ok(Id::from(s.as_str())),
        Json::Number(n) => n.as_i64().map(Id::Int).ok_or_else(|| {
            HypernetError::invalid_members(format!("ID must be an integer or a string, got {n}"))
        }),
        other => Err(HypernetError::invalid_members(format!(
            "ID must be an integer or a string, got {other}"
        ))),
    }
}

fn parse_attrs(value: &Json) -> HypernetResult<AttrMap> {
    Ok(serde_json::from_value(value.clone())?)
}
