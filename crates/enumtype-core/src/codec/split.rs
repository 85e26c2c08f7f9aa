///
/// Encoded form helpers
///
/// `<prefix><separator><value>`, split on the first separator only.
/// There is no escaping. A value may contain the separator; a prefix may not.
///

/// Split an encoded string into `(prefix, value)`.
/// Input without a separator is all prefix with an empty value.
pub(crate) fn split_encoded<'a>(raw: &'a str, separator: &str) -> (&'a str, &'a str) {
    raw.split_once(separator).unwrap_or((raw, ""))
}

/// Strict split used by the validation rule: both halves must be present.
pub(crate) fn split_complete<'a>(raw: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    raw.split_once(separator)
        .filter(|(prefix, value)| !prefix.is_empty() && !value.is_empty())
}

pub(crate) fn join(prefix: &str, separator: &str, value: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + separator.len() + value.len());
    out.push_str(prefix);
    out.push_str(separator);
    out.push_str(value);

    out
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_the_first_separator() {
        assert_eq!(split_encoded("a::b::c", "::"), ("a", "b::c"));
        assert_eq!(split_encoded("a|b", "|"), ("a", "b"));
    }

    #[test]
    fn missing_separator_is_all_prefix() {
        assert_eq!(split_encoded("status", "::"), ("status", ""));
        assert_eq!(split_encoded("", "::"), ("", ""));
    }

    #[test]
    fn complete_split_requires_both_halves() {
        assert_eq!(split_complete("a::b", "::"), Some(("a", "b")));
        assert_eq!(split_complete("::b", "::"), None);
        assert_eq!(split_complete("a::", "::"), None);
        assert_eq!(split_complete("ab", "::"), None);
    }
}
