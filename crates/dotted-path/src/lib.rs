//! Dotted-Path Lookup
//!
//! Resolves dot-delimited paths like `properties.2.name` against nested
//! JSON values. Knows nothing about the shape of the tree it walks:
//! objects are descended by key, arrays by numeric segment, anything else
//! ends the walk.

use serde_json::Value;

/// Walk `tree` one path segment at a time.
///
/// Returns the value sitting at the full path, or `None` as soon as any
/// segment has no child. A path that addresses nothing is an ordinary
/// `None`, never an error.
pub fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// True when *any* defined value sits at `path`.
///
/// The leaf does not have to be a message object; presence alone counts.
pub fn has_path(tree: &Value, path: &str) -> bool {
    lookup(tree, path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_branch_is_false() {
        let tree = json!({});
        assert!(!has_path(&tree, "properties.0.name"));

        let tree = json!({ "properties": { "1": { "name": { "message": "x" } } } });
        assert!(!has_path(&tree, "properties.0.name"));
        assert!(!has_path(&tree, "properties.1.value"));
    }

    #[test]
    fn test_present_leaf_is_true() {
        let tree = json!({ "properties": { "0": { "name": { "message": "required" } } } });
        assert!(has_path(&tree, "properties.0.name"));
        assert!(has_path(&tree, "properties.0.name.message"));
        assert_eq!(
            lookup(&tree, "properties.0.name.message"),
            Some(&json!("required"))
        );
    }

    #[test]
    fn test_any_defined_value_counts() {
        // Non-message leaves are still "present" — the walk only checks
        // that every segment resolves.
        let tree = json!({ "properties": { "0": { "name": 42 } } });
        assert!(has_path(&tree, "properties.0.name"));
        assert!(!has_path(&tree, "properties.0.name.message"));
    }

    #[test]
    fn test_array_segments() {
        let tree = json!({ "properties": [ { "name": { "message": "x" } } ] });
        assert!(has_path(&tree, "properties.0.name"));
        assert!(!has_path(&tree, "properties.1.name"));
        assert!(!has_path(&tree, "properties.first.name"));
    }

    #[test]
    fn test_lookup_is_pure() {
        let tree = json!({ "a": { "b": 1 } });
        assert_eq!(lookup(&tree, "a.b"), lookup(&tree, "a.b"));
        assert_eq!(has_path(&tree, "a.b"), has_path(&tree, "a.b"));
        assert_eq!(has_path(&tree, "a.c"), has_path(&tree, "a.c"));
    }

    #[test]
    fn test_null_tree() {
        assert!(!has_path(&Value::Null, "properties.0.name"));
    }
}
