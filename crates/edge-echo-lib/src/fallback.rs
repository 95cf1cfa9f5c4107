//! Ordered fallback resolution.

/// Return the first candidate that is present and non-empty, or `default`.
///
/// Candidates are evaluated left to right, so the iterator order is the
/// precedence order.
pub fn first_truthy<'a, I>(candidates: I, default: &'a str) -> &'a str
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_present_candidate_wins() {
        assert_eq!(first_truthy([Some("a"), Some("b")], "z"), "a");
        assert_eq!(first_truthy([None, Some("b")], "z"), "b");
    }

    #[test]
    fn empty_strings_are_skipped() {
        assert_eq!(first_truthy([Some(""), None, Some("c")], "z"), "c");
    }

    #[test]
    fn default_when_nothing_usable() {
        assert_eq!(first_truthy([None, Some("")], "z"), "z");
        assert_eq!(first_truthy(std::iter::empty(), "z"), "z");
    }
}
