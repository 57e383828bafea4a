use std::{collections::HashSet, thread};

use storage::MemberStore;

#[test]
fn concurrent_saves_get_distinct_increasing_ids() {
    let store = MemberStore::new();

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|n| {
                        store
                            .save(&format!("user-{worker}-{n}"), n)
                            .expect("save")
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for worker in workers {
        let ids = worker.join().expect("worker");
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    let members = store.find_all().expect("members");
    assert_eq!(members.len(), 400);
    assert!(members.windows(2).all(|pair| pair[0].id < pair[1].id));
}
