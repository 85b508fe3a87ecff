//! Folds flat `a_b_c` keys into a tree for structured outputs.
//!
//! Conflict policy: the first entry to claim a path wins. A later key that
//! would turn an existing leaf into a branch (or a branch into a leaf, or
//! redefine a leaf) is dropped, so `{"kanine": "hound", "kanine_dog": "Ulla"}`
//! keeps only `kanine`.

use serde_json::{Map, Value};

use super::term::Segment;

pub const DEFAULT_SEPARATOR: &str = "_";

/// Ordered tree: string leaves and object branches.
pub type NestedTree = Map<String, Value>;

/// Build a tree from `(key, value)` pairs in input order.
pub fn build<'a, I>(pairs: I, separator: &str) -> NestedTree
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut tree = NestedTree::new();
    for (key, value) in pairs {
        let path: Vec<&str> = key.split(separator).collect();
        insert_nested(&mut tree, &path, value);
    }
    tree
}

/// Build a tree from keyed segments; comment segments carry no path and are skipped.
pub fn build_from_segments(segments: &[Segment], separator: &str) -> NestedTree {
    build(
        segments.iter().filter_map(|segment| {
            segment
                .key
                .as_deref()
                .map(|key| (key, segment.translation.as_str()))
        }),
        separator,
    )
}

/// Returns `false` when the entry was dropped because of a conflict.
fn insert_nested(root: &mut NestedTree, path: &[&str], value: &str) -> bool {
    let Some((last, parents)) = path.split_last() else {
        return false;
    };

    let mut node = root;
    for part in parents {
        let next = node
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match next {
            Value::Object(map) => node = map,
            _ => return false,
        }
    }

    if node.contains_key(*last) {
        return false;
    }
    node.insert(last.to_string(), Value::String(value.to_string()));
    true
}

/// Convert a tree into segments whose branches carry `nested` children.
pub fn to_segments(tree: &NestedTree, language: &str) -> Vec<Segment> {
    tree.iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some(Segment::new(key.as_str(), text.as_str(), language)),
            Value::Object(children) => Some(Segment::branch(
                key.as_str(),
                to_segments(children, language),
                language,
            )),
            _ => None,
        })
        .collect()
}

/// Fold the keyed segments of one language into a segment hierarchy.
pub fn nest_segments(segments: &[Segment], separator: &str, language: &str) -> Vec<Segment> {
    to_segments(&build_from_segments(segments, separator), language)
}
