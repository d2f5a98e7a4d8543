#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use trie_router::SharedRouter;

#[test]
fn test_registration_while_resolving() {
    let shared = Arc::new(SharedRouter::default());
    shared.add_route(Method::GET, "/health");
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut lookups = 0u64;
                while !done.load(Ordering::Acquire) {
                    assert!(shared.resolve(&Method::GET, "/health").is_some());
                    if let Some(m) = shared.resolve(&Method::GET, "/items/5/detail") {
                        assert_eq!(m.get_path_param("id"), Some("5"));
                    }
                    lookups += 1;
                }
                lookups
            })
        })
        .collect();

    for i in 0..200 {
        shared.add_route(Method::GET, &format!("/bulk/{i}/:id"));
    }
    shared.add_route(Method::GET, "/items/:id/detail");
    done.store(true, Ordering::Release);

    for reader in readers {
        reader.join().expect("reader thread");
    }

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.route_count(), 202);
    let m = shared.resolve(&Method::GET, "/bulk/17/abc").expect("match");
    assert_eq!(&*m.pattern, "/bulk/17/:id");
}

#[test]
fn test_concurrent_writers_do_not_lose_routes() {
    let shared = Arc::new(SharedRouter::default());
    let writers: Vec<_> = (0..4)
        .map(|w| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..50 {
                    shared.add_route(Method::POST, &format!("/w{w}/r{i}"));
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }
    assert_eq!(shared.snapshot().route_count(), 200);
    assert!(shared.resolve(&Method::POST, "/w3/r49").is_some());
}

#[test]
fn test_conflict_reported_without_panic() {
    let shared = SharedRouter::default();
    shared.add_route(Method::GET, "/user/:id");
    let err = shared
        .try_add_route(Method::GET, "/user/:name")
        .expect_err("conflict");
    assert_eq!(&*err.existing, "/user/:id");
    assert_eq!(
        shared.resolve(&Method::GET, "/user/1").unwrap().get_path_param("id"),
        Some("1")
    );
}
