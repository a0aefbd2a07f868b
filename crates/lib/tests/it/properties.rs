//! Property-based tests across get, set and unset

use std::str::FromStr;

use proptest::prelude::*;

use keypath::{Key, KeyPath, RawPath, Value, get, set, unset};

// ===== Test Strategies =====

/// Keys with no path syntax
fn plain_key() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,12}"
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::from),
    ]
}

/// A segment that is either a name or a small list index
#[derive(Debug, Clone)]
enum Step {
    Name(String),
    Index(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-z][a-z_]{0,5}".prop_map(Step::Name),
        (0usize..4).prop_map(Step::Index),
    ]
}

fn as_text(steps: &[Step]) -> String {
    let mut text = String::new();
    for (i, step) in steps.iter().enumerate() {
        match step {
            Step::Name(name) if i == 0 => text.push_str(name),
            Step::Name(name) => text.push_str(&format!(".{name}")),
            Step::Index(n) => text.push_str(&format!("[{n}]")),
        }
    }
    text
}

fn as_keys(steps: &[Step]) -> RawPath {
    RawPath::Keys(
        steps
            .iter()
            .map(|step| match step {
                Step::Name(name) => Key::from(name.as_str()),
                Step::Index(n) => Key::from(n.to_string()),
            })
            .collect(),
    )
}

/// Any string, including path syntax and escapes
fn any_segment() -> impl Strategy<Value = String> {
    r#"[a-z0-9.\[\]"'\\ _-]{0,6}"#
}

// ===== Properties =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// What set writes under a plain key, get reads back
    #[test]
    fn prop_set_then_get(key in plain_key(), value in scalar()) {
        let mut root = Value::map();
        set(&mut root, key.as_str(), value.clone()).unwrap();
        prop_assert_eq!(get(&root, key.as_str()), Some(&value));
    }

    /// Setting the same path twice gives the same result as once
    #[test]
    fn prop_set_is_idempotent(steps in prop::collection::vec(step(), 1..6), value in scalar()) {
        let path = as_text(&steps);
        let mut once = Value::map();
        set(&mut once, path.as_str(), value.clone()).unwrap();

        let mut twice = once.clone();
        set(&mut twice, path.as_str(), value).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// The string form and the sequence form of a path address the same slot
    #[test]
    fn prop_string_and_sequence_forms_agree(
        steps in prop::collection::vec(step(), 1..6),
        value in any::<i64>(),
    ) {
        let text = as_text(&steps);

        let mut by_text = Value::map();
        set(&mut by_text, text.as_str(), value).unwrap();
        let mut by_keys = Value::map();
        set(&mut by_keys, as_keys(&steps), value).unwrap();

        prop_assert_eq!(&by_text, &by_keys);
        prop_assert_eq!(get(&by_text, text.as_str()), Some(&Value::Int(value)));
        prop_assert_eq!(get(&by_text, as_keys(&steps)), Some(&Value::Int(value)));
    }

    /// After unset, get reports the path as missing
    #[test]
    fn prop_unset_then_get_is_missing(
        steps in prop::collection::vec(step(), 1..6),
        value in any::<i64>(),
    ) {
        let text = as_text(&steps);
        let mut root = Value::map();
        set(&mut root, text.as_str(), value).unwrap();

        prop_assert!(unset(&mut root, text.as_str()));
        prop_assert_eq!(get(&root, text.as_str()), None);
    }

    /// Unsetting a list element never shifts the others
    #[test]
    fn prop_unset_does_not_compact(
        items in prop::collection::vec(any::<i64>(), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pick.index(items.len());
        let mut root = Value::map();
        set(&mut root, "list", items.clone()).unwrap();

        let path = format!("list[{target}]");
        prop_assert!(unset(&mut root, path));

        let list = root.get_path("list").and_then(Value::as_list).unwrap();
        prop_assert_eq!(list.len(), items.len());
        for (i, item) in items.iter().enumerate() {
            let slot = list.get(i).unwrap();
            if i == target {
                prop_assert!(slot.is_null());
            } else {
                prop_assert_eq!(slot, &Value::Int(*item));
            }
        }
    }

    /// A key path's text form parses back to the same segments
    #[test]
    fn prop_keypath_display_parses_back(segments in prop::collection::vec(any_segment(), 1..5)) {
        let path: KeyPath = segments.iter().map(Key::from).collect();
        let text = path.to_string();

        prop_assert_eq!(KeyPath::from_str(&text).unwrap(), path, "text form: {}", text);
    }

    /// Operations on a null root do nothing and never fail
    #[test]
    fn prop_null_root_is_inert(steps in prop::collection::vec(step(), 0..4)) {
        let text = as_text(&steps);
        let mut root = Value::Null;

        prop_assert!(set(&mut root, text.as_str(), 1).unwrap().is_null());
        prop_assert_eq!(get(&root, text.as_str()), None);
        prop_assert!(unset(&mut root, text.as_str()));
        prop_assert!(root.is_null());
    }
}
