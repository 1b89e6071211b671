//! Sample keyspaces shared by engine and CLI tests.
//!
//! Keys are inserted out of order on purpose so that tests exercise the
//! tree's own sorting rather than the store's.

use crate::MemoryStore;

/// `tasks:a:1`, `tasks:a:2`, `tasks:b` as plain strings
pub fn tasks_keyspace() -> MemoryStore {
    MemoryStore::new()
        .with_string("tasks:b", "beta")
        .with_string("tasks:a:2", "two")
        .with_string("tasks:a:1", "one")
}

/// One key of every previewed type, plus TTLs and a binary value
pub fn mixed_keyspace() -> MemoryStore {
    MemoryStore::new()
        .with_hash("user:1", &[("name", "ada"), ("lang", "en")])
        .with_string("user:2:avatar", vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0x01])
        .with_list("queue:jobs", &["build", "test", "deploy"])
        .with_ttl("queue:jobs", 120)
        .with_set("tags", &["red", "blue"])
        .with_zset("board", &[("carol", 1.0), ("alice", 2.5)])
        .with_string("greeting", "hello")
        .with_ttl("greeting", 30)
        .with_other("events", "stream")
}
