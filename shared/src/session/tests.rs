use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn alice() -> Session {
    Session::new("alice", Role::User).unwrap()
}

fn bob() -> Session {
    Session::new("bob", Role::Admin).unwrap()
}

/// 所有写操作都失败的存储
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            message: "quota exceeded".to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Remove {
            key: key.to_string(),
            message: "denied".to_string(),
        })
    }
}

/// 读取即失败的存储
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =========================================================
// Session 模型测试
// =========================================================

#[test]
fn test_session_rejects_blank_username() {
    assert_eq!(Session::new("", Role::User), Err(InvalidSession));
    assert_eq!(Session::new("   ", Role::Admin), Err(InvalidSession));
}

#[test]
fn test_session_serializes_lowercase_role() {
    let json = serde_json::to_string(&bob()).unwrap();
    assert_eq!(json, r#"{"username":"bob","role":"admin"}"#);
}

#[test]
fn test_session_deserialize_rejects_empty_username() {
    let parsed = serde_json::from_str::<Session>(r#"{"username":"","role":"user"}"#);
    assert!(parsed.is_err());
}

// =========================================================
// load 测试
// =========================================================

#[test]
fn test_load_without_slot_is_unauthenticated() {
    let store = SessionStore::load(MemoryStore::new());
    assert!(store.current().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn test_load_reads_persisted_session() {
    let backend = MemoryStore::new().with_entry(
        STORAGE_SESSION_KEY,
        r#"{"username":"alice","role":"user"}"#,
    );
    let store = SessionStore::load(backend);
    assert_eq!(store.current(), Some(&alice()));
}

#[test]
fn test_load_treats_malformed_content_as_absent() {
    let cases = [
        "not json",
        "",
        "null",
        r#"{"username":"alice"}"#,
        r#"{"username":"alice","role":"superuser"}"#,
        r#"{"username":"","role":"admin"}"#,
        r#"["alice","user"]"#,
    ];

    for raw in cases {
        let backend = MemoryStore::new().with_entry(STORAGE_SESSION_KEY, raw);
        let store = SessionStore::load(backend);
        assert!(store.current().is_none(), "expected no session for {raw:?}");
    }
}

#[test]
fn test_load_treats_storage_failure_as_absent() {
    let store = SessionStore::load(UnavailableStore);
    assert!(store.current().is_none());
}

// =========================================================
// set / clear 测试
// =========================================================

#[test]
fn test_set_then_reload_round_trip() {
    let mut store = SessionStore::load(MemoryStore::new());
    store.set(bob()).unwrap();

    // 模拟页面刷新：用同一存储重新加载
    let reloaded = SessionStore::load(store.into_backend());
    let session = reloaded.current().unwrap();
    assert_eq!(session.username(), "bob");
    assert_eq!(session.role(), Role::Admin);
}

#[test]
fn test_set_replaces_previous_session() {
    let mut store = SessionStore::load(MemoryStore::new());
    store.set(alice()).unwrap();
    store.set(bob()).unwrap();

    assert_eq!(store.current(), Some(&bob()));
    let reloaded = SessionStore::load(store.into_backend());
    assert_eq!(reloaded.current(), Some(&bob()));
}

#[test]
fn test_set_updates_memory_even_when_persist_fails() {
    let mut store = SessionStore::load(ReadOnlyStore);
    let result = store.set(alice());

    assert!(matches!(result, Err(SessionError::Storage(StorageError::Write { .. }))));
    assert_eq!(store.current(), Some(&alice()));
}

#[test]
fn test_clear_removes_memory_and_slot() {
    let mut store = SessionStore::load(MemoryStore::new());
    store.set(alice()).unwrap();
    assert!(store.backend().contains(STORAGE_SESSION_KEY));

    store.clear().unwrap();

    assert!(store.current().is_none());
    assert!(!store.backend().contains(STORAGE_SESSION_KEY));
}

#[test]
fn test_clear_is_idempotent() {
    // 有会话时清除
    let mut with_session = SessionStore::load(MemoryStore::new());
    with_session.set(alice()).unwrap();
    with_session.clear().unwrap();

    // 无会话时清除
    let mut without_session = SessionStore::load(MemoryStore::new());
    without_session.clear().unwrap();
    without_session.clear().unwrap();

    for store in [with_session, without_session] {
        assert!(store.current().is_none());
        assert!(!store.backend().contains(STORAGE_SESSION_KEY));
    }
}

#[test]
fn test_clear_updates_memory_even_when_remove_fails() {
    let mut store = SessionStore::load(ReadOnlyStore);
    let _ = store.set(alice());

    assert!(store.clear().is_err());
    assert!(store.current().is_none());
}
