// Property-based tests for data URL validation and decomposition.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;

use valid_data_url::{parse, validate, Error};

fn arb_token(chars: &'static str) -> impl Strategy<Value = String> {
    let pool: Vec<char> = chars.chars().collect();
    proptest::collection::vec(proptest::sample::select(pool), 1..12)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_type_subtype() -> impl Strategy<Value = String> {
    (
        arb_token("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        arb_token("abcxyzABCXYZ0123456789-+."),
    )
        .prop_map(|(ty, subtype)| format!("{}/{}", ty, subtype))
}

fn arb_attribute() -> impl Strategy<Value = String> {
    (
        arb_token("abcxyzABCXYZ0123456789-.!#$%*+{}|~`"),
        arb_token("abcxyzABCXYZ0123456789-.!#$%*+{}()_|~`"),
    )
        .prop_map(|(key, value)| format!(";{}={}", key, value))
}

fn arb_payload() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::sample::select("abcXYZ019!$&',()*+;=-._~:@/?% <>".chars().collect::<Vec<_>>()),
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

fn arb_data_url() -> impl Strategy<Value = String> {
    (
        proptest::option::of((arb_type_subtype(), proptest::collection::vec(arb_attribute(), 0..4))),
        any::<bool>(),
        arb_payload(),
    )
        .prop_map(|(media, base64, payload)| {
            let mut url = String::from("data:");
            if let Some((type_subtype, attributes)) = media {
                url.push_str(&type_subtype);
                for attribute in attributes {
                    url.push_str(&attribute);
                }
            }
            if base64 {
                url.push_str(";base64");
            }
            url.push(',');
            // Trailing whitespace would be trimmed off the payload.
            url.push_str(payload.trim_end());
            url
        })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn validate_is_pure(input in any::<String>()) {
        prop_assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn validate_and_parse_agree(input in any::<String>()) {
        match parse(&input) {
            Ok(_) => prop_assert!(validate(&input)),
            Err(e) => {
                prop_assert_eq!(e, Error::GrammarMismatch);
                prop_assert!(!validate(&input));
            }
        }
    }

    #[test]
    fn generated_urls_are_valid(url in arb_data_url()) {
        prop_assert!(validate(&url));
        let parsed = parse(&url).unwrap();
        prop_assert_eq!(parsed.content_type().is_some(), parsed.media_type().is_some());
        if parsed.media_type().is_none() {
            prop_assert!(parsed.attributes().is_empty());
        }
    }

    #[test]
    fn content_type_is_lowercase(url in arb_data_url()) {
        let parsed = parse(&url).unwrap();
        if let Some(content_type) = parsed.content_type() {
            prop_assert_eq!(content_type.to_string(), content_type.to_ascii_lowercase());
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored(url in arb_data_url(), left in "[ \t\n]{0,3}", right in "[ \t\n]{0,3}") {
        let padded = format!("{}{}{}", left, url, right);
        prop_assert_eq!(parse(&padded), parse(&url));
    }

    #[test]
    fn to_buffer_is_idempotent(url in arb_data_url()) {
        let parsed = parse(&url).unwrap();
        prop_assert_eq!(parsed.to_buffer(), parsed.to_buffer());
    }

    #[test]
    fn non_base64_payload_is_verbatim(payload in arb_payload()) {
        let url = format!("data:text/plain,{}", payload.trim_end());
        let parsed = parse(&url).unwrap();
        prop_assert!(!parsed.is_base64());
        prop_assert_eq!(parsed.to_buffer().unwrap(), payload.trim_end().as_bytes().to_vec());
    }
}
