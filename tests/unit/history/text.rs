use super::*;

#[test]
fn newest_first_and_trimmed() {
    let mut h = TextHistory::new();
    assert!(h.record("  first  ", 1));
    assert!(h.record("second", 2));
    let texts: Vec<&str> = h.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["second", "first"]);
    assert_eq!(h.latest().unwrap().timestamp_ms, 2);
}

#[test]
fn ignores_short_text_and_repeated_head() {
    let mut h = TextHistory::new();
    assert!(!h.record("a", 1));
    assert!(!h.record("   ", 1));
    assert!(h.record("ab", 2));
    assert!(!h.record("ab", 3));
    assert_eq!(h.len(), 1);
    assert_eq!(h.latest().unwrap().timestamp_ms, 2);
}

#[test]
fn older_duplicates_move_to_the_front() {
    let mut h = TextHistory::new();
    h.record("one", 1);
    h.record("two", 2);
    h.record("one", 3);
    let texts: Vec<&str> = h.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["one", "two"]);
}

#[test]
fn capped_at_capacity() {
    let mut h = TextHistory::new();
    for i in 0..30u64 {
        h.record(&format!("title {i}"), i);
    }
    assert_eq!(h.len(), TextHistory::CAPACITY);
    assert_eq!(h.latest().unwrap().text, "title 29");
    assert_eq!(h.entries().last().unwrap().text, "title 10");
    h.clear();
    assert!(h.is_empty());
}

#[test]
fn serializes_round_trip() {
    let mut h = TextHistory::new();
    h.record("hello", 5);
    let json = serde_json::to_string(&h).unwrap();
    let back: TextHistory = serde_json::from_str(&json).unwrap();
    assert_eq!(back, h);
}
