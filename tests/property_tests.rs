//! Properties that hold for any stylesheet text or token list.

use elementary::{categorize_tokens, extract_classes, extract_tokens, TokenCategory};
use proptest::prelude::*;

/// Stylesheet-ish text: selectors, custom properties, indentation, noise
fn stylesheet() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "\\.[a-z][a-z0-9-]{0,8}( \\{\\})?",
        "  \\.[a-z][a-z0-9-]{0,8}:hover \\{\\}",
        "\\.[a-zA-Z0-9-]{1,6} > \\.[a-z]{1,4} \\{\\}",
        "  -{1,3}[a-z][a-z0-9-]{0,8}: [0-9]{1,3}px;",
        "  color: var\\(--[a-z]{1,2}-[a-z]{1,5}\\);",
        "[ -~]{0,20}",
    ];
    (prop::collection::vec(line, 0..24), any::<bool>())
        .prop_map(|(lines, crlf)| lines.join(if crlf { "\r\n" } else { "\n" }))
}

fn token_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("--[a-z]{1,3}(-[a-z0-9]{1,4}){0,2}", 0..32)
}

fn is_sorted_unique(items: &[String]) -> bool {
    items.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn classes_are_sorted_and_unique(css in stylesheet()) {
        let classes = extract_classes(&css);
        prop_assert!(is_sorted_unique(&classes));
    }

    #[test]
    fn classes_start_some_line(css in stylesheet()) {
        for class in extract_classes(&css) {
            let bytes = class.as_bytes();
            prop_assert_eq!(bytes[0], b'.');
            prop_assert!(bytes[1].is_ascii_lowercase());
            prop_assert!(bytes[1..].iter().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-'));
            prop_assert!(css.lines().any(|line| line.starts_with(class.as_str())));
        }
    }

    #[test]
    fn tokens_are_sorted_unique_and_double_hyphenated(css in stylesheet()) {
        let tokens = extract_tokens(&css);
        prop_assert!(is_sorted_unique(&tokens));
        for token in &tokens {
            prop_assert!(token.starts_with("--"));
            prop_assert!(token.as_bytes()[2].is_ascii_lowercase());
        }
    }

    #[test]
    fn extraction_is_idempotent(css in stylesheet()) {
        prop_assert_eq!(extract_classes(&css), extract_classes(&css));
        prop_assert_eq!(extract_tokens(&css), extract_tokens(&css));
    }

    #[test]
    fn categorization_is_an_exact_partition(tokens in token_list()) {
        let buckets = categorize_tokens(&tokens);

        // Reassembled buckets are a permutation of the input
        let mut reassembled: Vec<String> = buckets
            .iter()
            .flat_map(|(_, bucket)| bucket.iter().cloned())
            .collect();
        let mut expected = tokens.clone();
        reassembled.sort();
        expected.sort();
        prop_assert_eq!(reassembled, expected);

        // Each bucket keeps the input's relative order
        for category in TokenCategory::ALL {
            let in_order: Vec<&String> = tokens
                .iter()
                .filter(|t| TokenCategory::of(t) == category)
                .collect();
            let bucket: Vec<&String> = buckets.get(category).iter().collect();
            prop_assert_eq!(bucket, in_order);
        }
    }
}
