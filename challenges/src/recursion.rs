//! Recursion: strings, key/value documents and nested sequences.
//!
//! Recursion depth grows with the input (string length, nesting depth), so
//! very large inputs are bounded by the thread's stack size.

use challenges_common::{Nested, Value};

use crate::error::Result;

// =============================================================================
// Strings
// =============================================================================

/// Reverses a string recursively: the reverse of the rest, followed by the first char.
///
/// Works on Unicode scalar values; combining sequences are not kept together.
///
/// # Examples
/// ```
/// use challenges::reverse_str;
/// assert_eq!(reverse_str("abc"), "cba");
/// assert_eq!(reverse_str(""), "");
/// ```
pub fn reverse_str(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut reversed = reverse_str(chars.as_str());
            reversed.push(first);
            reversed
        }
    }
}

/// Iterative reverse. Same output as [`reverse_str`] without the recursion depth.
pub fn reverse_str_iter(s: &str) -> String {
    s.chars().rev().collect()
}

// =============================================================================
// Key/value documents
// =============================================================================

/// True when every leaf in the document equals the first one.
///
/// Documents with zero or one leaf match vacuously. Leaves compare strictly:
/// `1` and `"1"` differ, and `NaN` never matches.
///
/// # Examples
/// ```
/// use challenges::{check_matching_leaves, Value};
///
/// let same = Value::from_json(r#"{"a": 1, "b": {"c": 1, "d": {"e": 1}}}"#).unwrap();
/// assert!(check_matching_leaves(&same));
///
/// let different = Value::from_json(r#"{"a": 1, "b": 2}"#).unwrap();
/// assert!(!check_matching_leaves(&different));
/// ```
pub fn check_matching_leaves(obj: &Value) -> bool {
    let leaves = obj.leaves();
    match leaves.split_first() {
        None => true,
        Some((first, rest)) => rest.iter().all(|leaf| leaf == first),
    }
}

/// Parses a JSON document and checks its leaves.
pub fn check_matching_leaves_json(input: &str) -> Result<bool> {
    let doc = Value::from_json(input)?;
    Ok(check_matching_leaves(&doc))
}

// =============================================================================
// Nested sequences
// =============================================================================

/// Flattens arbitrarily nested sequences into their items, depth-first and left to right.
///
/// Empty nested lists contribute nothing. The input is only borrowed.
///
/// # Examples
/// ```
/// use challenges::{flatten, nested, Nested};
///
/// let input: Nested<i32> = nested!([1, [2], [3, [[4]]]]);
/// assert_eq!(flatten(input.as_slice()), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(elements: &[Nested<T>]) -> Vec<T> {
    fn collect<T: Clone>(elements: &[Nested<T>], acc: &mut Vec<T>) {
        for element in elements {
            match element {
                Nested::Item(value) => acc.push(value.clone()),
                Nested::List(children) => collect(children, acc),
            }
        }
    }

    let mut acc = Vec::new();
    collect(elements, &mut acc);
    acc
}

/// Flattens by value, moving items out instead of cloning them.
pub fn flatten_owned<T>(elements: Vec<Nested<T>>) -> Vec<T> {
    fn collect<T>(elements: Vec<Nested<T>>, acc: &mut Vec<T>) {
        for element in elements {
            match element {
                Nested::Item(value) => acc.push(value),
                Nested::List(children) => collect(children, acc),
            }
        }
    }

    let mut acc = Vec::new();
    collect(elements, &mut acc);
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use challenges_common::{nested, Record};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reverse_str() {
        assert_eq!(reverse_str(""), "");
        assert_eq!(reverse_str("a"), "a");
        assert_eq!(reverse_str("abc"), "cba");
        assert_eq!(reverse_str("héllo wörld"), "dlröw olléh");
    }

    #[test]
    fn test_reverse_matches_iterative() {
        for s in ["", "racecar", "rust", "日本語"] {
            assert_eq!(reverse_str(s), reverse_str_iter(s));
            assert_eq!(reverse_str(&reverse_str(s)), s);
        }
    }

    #[test]
    fn test_matching_leaves() {
        let same = Value::from_json(r#"{"a": 1, "b": {"c": 1, "d": {"e": 1}}}"#).unwrap();
        assert!(check_matching_leaves(&same));

        let different = Value::from_json(r#"{"a": 1, "b": 2}"#).unwrap();
        assert!(!check_matching_leaves(&different));

        let deep_mismatch = Value::from_json(r#"{"a": "x", "b": {"c": {"d": "y"}}}"#).unwrap();
        assert!(!check_matching_leaves(&deep_mismatch));
    }

    #[test]
    fn test_matching_leaves_vacuous() {
        assert!(check_matching_leaves(&Value::Record(Record::new())));
        assert!(check_matching_leaves(&Value::from_json(r#"{"only": 7}"#).unwrap()));
        assert!(check_matching_leaves(&Value::from_json(r#"{"a": {}, "b": {"c": []}}"#).unwrap()));
        assert!(check_matching_leaves(&Value::from(42)));
    }

    #[test]
    fn test_matching_leaves_is_strict() {
        assert!(!check_matching_leaves(&Value::from_json(r#"{"a": 1, "b": "1"}"#).unwrap()));
        assert!(!check_matching_leaves(&Value::from_json(r#"{"a": 0, "b": false}"#).unwrap()));
        assert!(check_matching_leaves(&Value::from_json(r#"{"a": null, "b": [null]}"#).unwrap()));

        let nan: Value = [("a", f64::NAN), ("b", f64::NAN)].into_iter().collect();
        assert!(!check_matching_leaves(&nan));
    }

    #[test]
    fn test_wrapped_root_leaf_counts() {
        // Alone at the top a leaf has no entries, but inside a list it is compared
        assert!(check_matching_leaves(&Value::from(7)));
        let wrapped = Value::List(vec![Value::from(7), Value::from(8)]);
        assert!(!check_matching_leaves(&wrapped));
        let same = Value::List(vec![Value::from(7), Value::from(7)]);
        assert!(check_matching_leaves(&same));
    }

    #[test]
    fn test_matching_leaves_json() {
        assert!(check_matching_leaves_json(r#"{"a": true, "b": [true]}"#).unwrap());
        assert!(!check_matching_leaves_json(r#"[1, [1, 2]]"#).unwrap());
        assert!(check_matching_leaves_json("{broken").is_err());
    }

    #[test]
    fn test_flatten() {
        let input: Nested<i32> = nested!([1, [2], [3, [[4]]]]);
        assert_eq!(flatten(input.as_slice()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_empty() {
        let empty: &[Nested<i32>] = &[];
        assert!(flatten(empty).is_empty());

        let hollow: Nested<i32> = nested!([[], [[]]]);
        assert!(flatten(hollow.as_slice()).is_empty());
    }

    #[test]
    fn test_flatten_leaves_input_untouched() {
        let input = nested!([["a", "b"], "c", [[["d"]]]]);
        let before = input.clone();
        assert_eq!(flatten(input.as_slice()), vec!["a", "b", "c", "d"]);
        assert_eq!(input, before);
    }

    #[test]
    fn test_flatten_owned() {
        let elements = vec![
            Nested::list([Nested::item("x".to_string())]),
            Nested::item("y".to_string()),
            Nested::list([]),
        ];
        assert_eq!(flatten_owned(elements), vec!["x", "y"]);
    }
}
