#![cfg(test)]

use super::*;
use crate::collections::hash::{NoSuchElement, StdHasher};

/// Returns the keys stored in each non-empty bucket, in bucket order.
fn bucket_keys<V>(table: &ChainedHashTable<&'static str, V>) -> Vec<(usize, Vec<&'static str>)> {
    table.buckets.iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(index, bucket)| (index, bucket.iter().map(|pair| *pair.key()).collect()))
        .collect()
}

#[test]
fn test_put_into_hashed_bucket() {
    let mut table = ChainedHashTable::with_cap(5);
    table.put("o", 1);

    assert_eq!(table.get("o"), Ok(&1));
    assert_eq!(
        bucket_keys(&table),
        [(1, vec!["o"])],
        "A key of length 1 should be stored in bucket 1."
    );
    assert_eq!(table.to_array(), [&1]);
}

#[test]
fn test_collisions_share_a_bucket() {
    let mut table = ChainedHashTable::with_cap(5);
    table.put("o", 1);
    table.put("c", 2);

    assert_eq!(table.get("o"), Ok(&1));
    assert_eq!(table.get("c"), Ok(&2));
    assert_eq!(
        bucket_keys(&table),
        [(1, vec!["o", "c"])],
        "Colliding keys should be kept in insertion order within their bucket."
    );
    assert_eq!(table.to_array(), [&1, &2]);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_to_array_order() {
    let mut table = ChainedHashTable::with_cap(5);
    table.put("ccc", 3);
    table.put("a", 1);
    table.put("bb", 2);
    table.put("z", 4);
    table.put("xxxxxx", 6);

    assert_eq!(
        table.to_array(),
        [&1, &4, &6, &2, &3],
        "Values should be ordered by bucket, then by insertion within a bucket."
    );
    assert_eq!(table.values().len(), 5);
}

#[test]
fn test_get() {
    let mut table = ChainedHashTable::with_cap(5);
    table.put("o", 1);
    table.put("oo", 2);
    assert_eq!(table.get("oo"), Ok(&2));

    let mut table = ChainedHashTable::with_cap(5);
    table.put("bb", 1);
    table.put("oo", 2);
    table.put("cc", 3);
    assert_eq!(table.get("oo"), Ok(&2), "The matching key should be found past a collision.");
    assert_eq!(table.get("dd"), Err(NoSuchElement), "A missing key in a full bucket is an error.");
    assert_eq!(table.get("ddd"), Err(NoSuchElement), "A missing key in an empty bucket is an error.");

    if let Ok(value) = table.get_mut("cc") {
        *value = 30;
    }
    assert_eq!(table.get("cc"), Ok(&30));
}

#[test]
fn test_remove() {
    let mut table = ChainedHashTable::with_cap(5);
    table.put("o", 1);
    table.put("oo", 2);
    assert_eq!(table.remove("oo"), Ok(2));

    let mut table = ChainedHashTable::with_cap(5);
    table.put("bb", 1);
    table.put("oo", 2);
    table.put("cc", 3);
    assert_eq!(table.remove("oo"), Ok(2), "The matching key should be removed past a collision.");
    assert_eq!(bucket_keys(&table), [(2, vec!["bb", "cc"])]);
    assert_eq!(table.len(), 2);

    assert_eq!(table.remove("oo"), Err(NoSuchElement), "A key can only be removed once.");
    assert_eq!(table.remove("z"), Err(NoSuchElement), "Removing from an empty bucket is an error.");
}

#[test]
fn test_repeated_keys_are_appended() {
    let mut table = ChainedHashTable::with_cap(5);
    table.put("k", 1);
    table.put("k", 2);

    assert_eq!(table.len(), 2, "Putting an existing key should append another entry.");
    assert_eq!(table.get("k"), Ok(&1), "The oldest entry for a key should shadow newer ones.");
    assert_eq!(table.to_array(), [&1, &2]);

    assert_eq!(table.remove("k"), Ok(1));
    assert_eq!(table.get("k"), Ok(&2), "Removing the oldest entry should expose the next one.");
    assert_eq!(table.remove("k"), Ok(2));
    assert!(table.is_empty());
}

#[test]
fn test_empty_table() {
    let mut table = ChainedHashTable::<String, u8>::new();

    assert_eq!(table.cap(), 10);
    assert_eq!(table.get("a"), Err(NoSuchElement));
    assert_eq!(table.remove("a"), Err(NoSuchElement));
    assert!(table.to_array().is_empty());
    assert!(!table.contains("a"));
}

#[test]
fn test_borrowed_and_integer_keys() {
    let mut table = ChainedHashTable::<String, u8>::with_cap(3);
    table.put(String::from("one"), 1);
    table.put(String::from("two"), 2);

    assert_eq!(table.get("one"), Ok(&1), "String keys should be queryable with a &str.");
    assert_eq!(table.get(&String::from("two")), Ok(&2));

    let mut table = ChainedHashTable::<i64, &str>::with_cap(4);
    table.put(-1, "minus one");
    table.put(3, "three");
    table.put(7, "seven");

    assert_eq!(table.buckets[3].len(), 3, "-1, 3 and 7 should all map to the last bucket.");
    assert_eq!(table.get(&-1_i64), Ok(&"minus one"));
    assert_eq!(table.get(&7_i64), Ok(&"seven"));
}

#[test]
fn test_zero_cap_and_clear() {
    let mut table = ChainedHashTable::<u32, u32>::with_cap(0);
    assert_eq!(table.cap(), 10, "A capacity of 0 should fall back to the default.");

    table.extend((0..25).map(|i| (i, i * 2)));
    assert_eq!(table.len(), 25);
    assert_eq!(table.cap(), 10, "Chained tables never change capacity.");
    assert_eq!(table.get(&24_u32), Ok(&48));

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.cap(), 10);
    assert_eq!(table.get(&24_u32), Err(NoSuchElement));
}

#[test]
fn test_std_hasher() {
    let mut table: ChainedHashTable<String, usize, StdHasher> =
        ChainedHashTable::with_cap_and_hasher(7, StdHasher::default());
    for i in 0..100 {
        table.put(i.to_string(), i);
    }

    for i in 0..100 {
        assert_eq!(table.get(i.to_string().as_str()), Ok(&i));
    }
    assert_eq!(table.remove("42"), Ok(42));
    assert!(!table.contains("42"));
    assert_eq!(table.len(), 99);
}

#[test]
fn test_formatting() {
    let table: ChainedHashTable<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();

    assert_eq!(format!("{table}"), r#"#{"a": 1, "b": 2}"#);
    assert!(format!("{table:?}").contains(r#"[("a": 1), ("b": 2)]"#));
}
