use super::*;

#[test]
fn memory_storage_reads_back_written_values() {
    let storage = MemoryStorage::default();
    storage.write("token", "abc123");
    assert_eq!(storage.read("token"), Some("abc123".to_owned()));
}

#[test]
fn memory_storage_read_of_missing_key_is_none() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.read("token"), None);
}

#[test]
fn memory_storage_write_replaces_previous_value() {
    let storage = MemoryStorage::default();
    storage.write("username", "alice");
    storage.write("username", "bob");
    assert_eq!(storage.read("username"), Some("bob".to_owned()));
}

#[test]
fn memory_storage_remove_clears_the_key() {
    let storage = MemoryStorage::default();
    storage.write("userId", "7");
    storage.remove("userId");
    assert_eq!(storage.read("userId"), None);
}

#[test]
fn memory_storage_remove_of_missing_key_is_a_no_op() {
    let storage = MemoryStorage::default();
    storage.remove("userId");
    assert_eq!(storage.read("userId"), None);
}

#[test]
fn memory_storage_keys_are_independent() {
    let storage = MemoryStorage::default();
    storage.write("token", "abc123");
    storage.write("username", "alice");
    storage.remove("token");
    assert_eq!(storage.read("token"), None);
    assert_eq!(storage.read("username"), Some("alice".to_owned()));
}
