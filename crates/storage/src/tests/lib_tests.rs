use super::*;

#[test]
fn saves_assign_sequential_ids() {
    let store = MemberStore::new();
    let alice = store.save("alice", 20).expect("alice");
    let bob = store.save("bob", 30).expect("bob");

    assert_eq!(
        alice,
        Member {
            id: MemberId(1),
            username: "alice".into(),
            age: 20
        }
    );
    assert_eq!(
        bob,
        Member {
            id: MemberId(2),
            username: "bob".into(),
            age: 30
        }
    );
}

#[test]
fn find_all_returns_insertion_order() {
    let store = MemberStore::new();
    store.save("alice", 20).expect("alice");
    store.save("bob", 30).expect("bob");

    let members = store.find_all().expect("members");
    let names: Vec<_> = members.iter().map(|m| m.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob"]);
    assert_eq!(store.len().expect("len"), 2);
}

#[test]
fn find_by_id_reports_missing_member() {
    let store = MemberStore::new();
    let saved = store.save("carol", 41).expect("carol");

    assert_eq!(store.find_by_id(saved.id).expect("found"), saved);
    let err = store.find_by_id(MemberId(99)).expect_err("missing");
    assert!(matches!(err, StoreError::NotFound(MemberId(99))));
}

#[test]
fn clear_store_keeps_id_sequence() {
    let store = MemberStore::new();
    store.save("alice", 20).expect("alice");
    store.save("bob", 30).expect("bob");
    store.clear_store().expect("clear");
    assert!(store.is_empty().expect("empty"));

    let dave = store.save("dave", 18).expect("dave");
    assert_eq!(dave.id, MemberId(3));
    assert!(store.find_by_id(MemberId(1)).is_err());
}

#[test]
fn clones_share_the_same_table() {
    let store = MemberStore::new();
    let handle = store.clone();
    handle.save("erin", 52).expect("erin");
    assert_eq!(store.find_all().expect("members").len(), 1);
}
