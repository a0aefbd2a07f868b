use keypath::{List, Map, Value};

// ===== MAP =====

#[test]
fn test_map_keeps_insertion_order() {
    let mut map = Map::new();
    map.insert("z", 1);
    map.insert("a", 2);
    map.insert("m", 3);

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_map_insert_replaces_in_place() {
    let mut map = Map::new().with("a", 1).with("b", 2);
    assert_eq!(map.insert("a", 10), Some(Value::Int(1)));

    let entries: Vec<(&str, &Value)> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    assert_eq!(entries, vec![("a", &Value::Int(10)), ("b", &Value::Int(2))]);
}

#[test]
fn test_map_remove_keeps_order_of_rest() {
    let mut map: Map = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    assert_eq!(map.remove("b"), Some(Value::Int(2)));
    assert_eq!(map.remove("b"), None);

    let keys: Vec<String> = map.into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn test_map_accessors() {
    let mut map = Map::new().with("n", 1);
    assert_eq!(map.len(), 1);
    assert!(!map.is_empty());
    assert!(map.contains_key("n"));

    if let Some(value) = map.get_mut("n") {
        *value = Value::from("changed");
    }
    assert_eq!(map.get("n"), Some(&Value::from("changed")));

    for (_, value) in map.iter_mut() {
        *value = Value::Null;
    }
    assert_eq!(map.values().filter(|v| v.is_null()).count(), 1);

    map.clear();
    assert!(map.is_empty());
}

#[test]
fn test_map_equality_ignores_order() {
    let left = Map::new().with("a", 1).with("b", 2);
    let right = Map::new().with("b", 2).with("a", 1);
    assert_eq!(left, right);
}

// ===== LIST =====

#[test]
fn test_list_push_and_get() {
    let mut list = List::new();
    assert!(list.is_empty());
    assert_eq!(list.push("a"), 0);
    assert_eq!(list.push(2), 1);
    assert_eq!(list.get(1), Some(&Value::Int(2)));
    assert_eq!(list.get(2), None);
}

#[test]
fn test_list_slot_pads_with_holes() {
    let mut list: List = vec![Value::from(1)].into();
    *list.slot(3) = Value::from(4);

    assert_eq!(list.len(), 4);
    assert_eq!(list.holes(), 2);
    assert_eq!(
        list.as_slice(),
        &[Value::Int(1), Value::Null, Value::Null, Value::Int(4)]
    );
}

#[test]
fn test_list_slot_in_range_does_not_grow() {
    let mut list: List = [1, 2].into_iter().collect();
    *list.slot(0) = Value::from(9);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some(&Value::Int(9)));
}

#[test]
fn test_list_punch() {
    let mut list: List = ["a", "b", "c"].into_iter().collect();

    assert_eq!(list.punch(1), Some(Value::from("b")));
    assert_eq!(list.len(), 3);
    assert!(list.get(1).unwrap().is_null());
    assert_eq!(list.get(2), Some(&Value::from("c")));

    assert_eq!(list.punch(10), None);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_list_iteration() {
    let mut list: List = [1, 2, 3].into_iter().collect();
    for value in list.iter_mut() {
        if let Value::Int(n) = value {
            *n *= 10;
        }
    }
    let collected: Vec<i64> = list.iter().filter_map(Value::as_int).collect();
    assert_eq!(collected, vec![10, 20, 30]);

    let owned: Vec<Value> = list.into_iter().collect();
    assert_eq!(owned.len(), 3);
}
