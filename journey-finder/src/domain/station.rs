//! Station name matching.

/// Compare two station names, ignoring case.
///
/// Station names are free-form text typed by users, so matching folds
/// Unicode case rather than only ASCII.
///
/// # Examples
///
/// ```
/// use journey_finder::domain::names_match;
///
/// assert!(names_match("Chennai", "CHENNAI"));
/// assert!(names_match("chennai", "Chennai"));
/// assert!(!names_match("Chennai", "Chennai Central"));
/// ```
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
