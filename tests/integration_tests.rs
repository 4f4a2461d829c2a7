//! End-to-end checks over the library surface: resolve a set from a parsed
//! message file, build a pool from it, and verify rotation behavior across
//! many cycles.

use loading_screen::pool::MessagePool;
use loading_screen::testing_utils::TestDataBuilder;
use std::collections::HashMap;

#[test]
fn test_resolved_set_feeds_the_pool() {
    let file = TestDataBuilder::create_message_file();
    let set = file.resolve_set("foo").unwrap();

    let mut pool = MessagePool::new(set.messages.clone()).unwrap();
    let first = pool.draw();
    let second = pool.draw();

    assert_ne!(first.text, second.text);
    assert!(["foo1", "foo2"].contains(&first.text.as_str()));
    assert!(["foo1", "foo2"].contains(&second.text.as_str()));
}

#[test]
fn test_long_run_shows_every_message_equally_often() {
    let set = TestDataBuilder::create_set("rotation", &["a", "b", "c", "d"]);
    let mut pool = MessagePool::new(set.messages.clone()).unwrap();

    let cycles = 100;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..cycles * set.messages.len() {
        *counts.entry(pool.draw().text).or_default() += 1;
    }

    // Full-cycle rotation means exact equality, not just statistical balance.
    assert_eq!(counts.len(), set.messages.len());
    for (text, count) in counts {
        assert_eq!(count, cycles, "message {text:?} drawn {count} times");
    }
}

#[test]
fn test_single_message_set_degenerates_to_repetition() {
    let set = TestDataBuilder::create_set("solo", &["the only one"]);
    let mut pool = MessagePool::new(set.messages).unwrap();

    for _ in 0..10 {
        assert_eq!(pool.draw().text, "the only one");
        assert!(pool.cycle_start());
    }
}
