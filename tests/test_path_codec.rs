//! Integration tests for the label path codec.

use form_label::path_codec::{decode, encode, join, split};
use proptest::prelude::*;

#[test]
fn test_known_vectors() {
    assert_eq!(encode("a/b~c"), "a~1b~0c");
    assert_eq!(decode("a~1b~0c"), "a/b~c");
}

#[test]
fn test_encode_is_identity_on_plain_segments() {
    assert_eq!(encode("VendorName"), "VendorName");
    assert_eq!(decode("VendorName"), "VendorName");
}

#[test]
fn test_escape_markers_survive_round_trip() {
    // segments that already look like escape sequences
    for s in ["~0", "~1", "~01", "~~", "/~/", "a~1b"] {
        assert_eq!(decode(&encode(s)), s);
    }
}

#[test]
fn test_join_packs_three_segments() {
    let path = join(&["Table/A", "row~1", "col"]);
    assert_eq!(path, "Table~1A/row~01/col");
    assert_eq!(split(&path), ["Table/A", "row~1", "col"]);
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(s in ".*") {
        prop_assert_eq!(decode(&encode(&s)), s);
    }

    #[test]
    fn prop_encoded_segment_has_no_separator(s in ".*") {
        prop_assert!(!encode(&s).contains('/'));
    }

    #[test]
    fn prop_join_split_round_trip(segments in proptest::collection::vec(".*", 1..4)) {
        prop_assert_eq!(split(&join(&segments)), segments);
    }
}
