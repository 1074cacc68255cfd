// Extension tokenizer suite.
// The trailing-token heuristic is locked here, including the cases where it
// knowingly misparses.

#[cfg(test)]
mod tests {
    use cef_core::codec::tokenize_extension;
    use cef_core::DecodeError;

    fn pairs(block: &str) -> Vec<(String, String)> {
        tokenize_extension(block).expect("tokenize ok")
    }

    fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

// ## 1️⃣ Well-formed blocks

    #[test]
    fn empty_and_blank_blocks() {
        assert!(pairs("").is_empty());
        assert!(pairs("   ").is_empty());
    }

    #[test]
    fn single_pair() {
        assert_eq!(pairs("src=10.0.0.1"), owned(&[("src", "10.0.0.1")]));
    }

    #[test]
    fn values_with_spaces() {
        assert_eq!(
            pairs("msg=hello big world src=1.2.3.4 act=drop it"),
            owned(&[("msg", "hello big world"), ("src", "1.2.3.4"), ("act", "drop it")])
        );
    }

    #[test]
    fn last_value_is_trimmed() {
        assert_eq!(pairs("a=1 b=  two  \n"), owned(&[("a", "1"), ("b", "two")]));
    }

    #[test]
    fn interior_value_is_trimmed() {
        assert_eq!(pairs("a=  one   b=2"), owned(&[("a", "one"), ("b", "2")]));
    }

    #[test]
    fn empty_values() {
        assert_eq!(pairs("a= b="), owned(&[("a", ""), ("b", "")]));
    }

    #[test]
    fn escaped_equals_stays_escaped() {
        assert_eq!(pairs(r"cs1=a\=b c\=d cs2=x"), owned(&[("cs1", r"a\=b c\=d"), ("cs2", "x")]));
    }

    #[test]
    fn escaped_backslash_is_not_an_escaped_equals() {
        // `\\` is a literal backslash; the value keeps it escaped.
        assert_eq!(pairs(r"p=C:\\ q=1"), owned(&[("p", r"C:\\"), ("q", "1")]));
    }

    #[test]
    fn duplicate_keys_are_all_returned() {
        assert_eq!(pairs("a=1 a=2"), owned(&[("a", "1"), ("a", "2")]));
    }

    #[test]
    fn tabs_count_as_whitespace() {
        assert_eq!(pairs("a=1\tb=2"), owned(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn unicode_values() {
        assert_eq!(pairs("msg=héllo wörld ü=ß"), owned(&[("msg", "héllo wörld"), ("ü", "ß")]));
    }

// ## 2️⃣ Inherent ambiguity (documented behavior)

    #[test]
    fn text_before_first_key_is_dropped() {
        assert_eq!(pairs("junk src=1"), owned(&[("src", "1")]));
    }

    #[test]
    fn block_without_equals_yields_nothing() {
        assert!(pairs("no pairs here").is_empty());
    }

    #[test]
    fn value_ending_in_key_like_token_misparses() {
        // Meant: msg="rule x=y", but `x` is taken as a key.
        assert_eq!(pairs("msg=rule x=y"), owned(&[("msg", "rule"), ("x", "y")]));
    }

// ## 3️⃣ Malformed blocks

    #[test]
    fn interior_fragment_without_space_is_rejected() {
        let err = tokenize_extension("a=b=c").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedExtension { fragment_index: 1, fragment: "b".into() }
        );
    }

    #[test]
    fn first_fragment_without_key_is_rejected() {
        let err = tokenize_extension("=value").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedExtension { fragment_index: 0, .. }));
    }

    #[test]
    fn key_followed_by_space_is_rejected() {
        // Fragment "1 b " ends in whitespace: no key token.
        let err = tokenize_extension("a=1 b =2").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedExtension { fragment_index: 1, .. }));
    }

    #[test]
    fn error_message_is_stable() {
        let err = tokenize_extension("a=b=c").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed CEF extension: no key/value boundary in fragment 1 (\"b\")"
        );
    }
}
