//! Property-based tests for slug derivation

use hackpack::project::ProjectDraft;
use hackpack::slug::{is_valid_slug, slugify};
use proptest::prelude::*;

/// Output only ever contains lowercase ASCII letters, digits, and single hyphens
#[test]
fn test_slug_charset_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |name| {
            let slug = slugify(&name);

            prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));

            Ok(())
        })
        .unwrap();
}

/// Slugifying a slug changes nothing
#[test]
fn test_slug_idempotence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |name| {
            let once = slugify(&name);
            prop_assert_eq!(slugify(&once), once);
            Ok(())
        })
        .unwrap();
}

/// Words of lowercase letters joined by arbitrary separators keep their letters
#[test]
fn test_slug_preserves_words_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec("[a-z0-9]{1,8}", 1..5),
                "[ _.!-]{1,3}",
            ),
            |(words, separator)| {
                let name = words.join(&separator);
                let slug = slugify(&name);

                if separator.chars().any(|c| c == ' ' || c == '-') {
                    prop_assert_eq!(slug, words.join("-"));
                } else {
                    prop_assert_eq!(slug, words.concat());
                }

                Ok(())
            },
        )
        .unwrap();
}

/// The draft slug always tracks its name, and validity is a length check on it
#[test]
fn test_draft_slug_tracks_name_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<String>(), 1usize..8), |(name, min_len)| {
            let draft = ProjectDraft::new(name.clone());

            let expected = slugify(&name);
            prop_assert_eq!(draft.slug(), expected.as_str());
            prop_assert_eq!(
                draft.is_valid(min_len),
                is_valid_slug(draft.slug(), min_len)
            );
            prop_assert_eq!(draft.is_valid(min_len), draft.slug().len() >= min_len);

            Ok(())
        })
        .unwrap();
}
