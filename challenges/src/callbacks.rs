//! Callbacks: visiting and transforming a sequence element by element.
//!
//! Both helpers hand the callback the element together with its index,
//! starting at 0 and increasing by one.

/// Calls `callback(element, index)` for every element, in order.
///
/// # Example
/// ```
/// use challenges::each;
///
/// let mut seen = Vec::new();
/// each(&["a", "b"], |s, i| seen.push(format!("{i}:{s}")));
/// assert_eq!(seen, vec!["0:a", "1:b"]);
/// ```
pub fn each<T, F>(elements: &[T], mut callback: F)
where
    F: FnMut(&T, usize),
{
    for (index, element) in elements.iter().enumerate() {
        callback(element, index);
    }
}

/// Builds a new vector of `callback(element, index)` results.
///
/// The output has the same length and order as `elements`, which is left untouched.
///
/// # Example
/// ```
/// use challenges::map;
///
/// assert_eq!(map(&[1, 2, 3], |x, _| x * 2), vec![2, 4, 6]);
/// ```
pub fn map<T, U, F>(elements: &[T], mut callback: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| callback(element, index))
        .collect()
}
