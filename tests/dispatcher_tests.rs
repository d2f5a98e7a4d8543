#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;
use trie_router::router::RouteMatch;
use trie_router::Dispatcher;

type Handler = Box<dyn Fn(&RouteMatch) -> String + Send + Sync>;

fn app() -> Dispatcher<Handler> {
    let mut dispatcher: Dispatcher<Handler> = Dispatcher::new();
    dispatcher.get("/index", Box::new(|_: &RouteMatch| "index".to_string()));
    dispatcher.get(
        "/user/:name",
        Box::new(|m: &RouteMatch| format!("user {}", m.get_path_param("name").unwrap_or_default())),
    );
    dispatcher.post(
        "/user/:name",
        Box::new(|m: &RouteMatch| format!("saved {}", m.get_path_param("name").unwrap_or_default())),
    );
    dispatcher.delete("/user/:name", Box::new(|_: &RouteMatch| "deleted".to_string()));
    dispatcher.put("/user/:name", Box::new(|_: &RouteMatch| "replaced".to_string()));
    dispatcher.options("/user/:name", Box::new(|_: &RouteMatch| "GET, POST".to_string()));
    dispatcher.get(
        "/static/*file",
        Box::new(|m: &RouteMatch| format!("file {}", m.get_path_param("file").unwrap_or_default())),
    );
    dispatcher
}

fn call(dispatcher: &Dispatcher<Handler>, method: Method, path: &str) -> Option<String> {
    dispatcher
        .dispatch(&method, path)
        .map(|(handler, route_match)| handler(&route_match))
}

#[test]
fn test_dispatch_by_method_and_pattern() {
    let app = app();
    assert_eq!(call(&app, Method::GET, "/index").as_deref(), Some("index"));
    assert_eq!(
        call(&app, Method::GET, "/user/admin").as_deref(),
        Some("user admin")
    );
    assert_eq!(
        call(&app, Method::POST, "/user/admin").as_deref(),
        Some("saved admin")
    );
    assert_eq!(call(&app, Method::DELETE, "/user/x").as_deref(), Some("deleted"));
    assert_eq!(call(&app, Method::PUT, "/user/x").as_deref(), Some("replaced"));
    assert_eq!(
        call(&app, Method::OPTIONS, "/user/x").as_deref(),
        Some("GET, POST")
    );
    assert_eq!(
        call(&app, Method::GET, "/static/a/b/test.jpg").as_deref(),
        Some("file a/b/test.jpg")
    );
}

#[test]
fn test_unmatched_request_is_none() {
    let app = app();
    assert!(call(&app, Method::GET, "/nope").is_none());
    assert!(call(&app, Method::PATCH, "/user/admin").is_none());
    assert!(call(&app, Method::GET, "/static").is_none());
}

#[test]
#[should_panic(expected = "route conflict(/user/:name): /user/:id")]
fn test_conflicting_handler_registration_panics() {
    let mut app = app();
    app.get("/user/:id", Box::new(|_: &RouteMatch| String::new()));
}

#[test]
fn test_handler_count() {
    let app = app();
    assert_eq!(app.handler_count(), 7);
    assert_eq!(app.router().route_count(), 7);
    assert!(app.handler(&Method::GET, "/user/:name").is_some());
    assert!(app.handler(&Method::GET, "/user/admin").is_none());
}

#[test]
fn test_grouped_routes_share_the_dispatcher() {
    let mut app = app();
    {
        let mut api = app.group("/api");
        api.get(
            "/items/:id",
            Box::new(|m: &RouteMatch| format!("item {}", m.get_path_param("id").unwrap_or_default())),
        );
        api.group("admin/").patch("/items/:id", Box::new(|_: &RouteMatch| "patched".to_string()));
    }
    assert_eq!(call(&app, Method::GET, "/api/items/9").as_deref(), Some("item 9"));
    assert_eq!(
        call(&app, Method::PATCH, "/api/admin/items/9").as_deref(),
        Some("patched")
    );
    assert_eq!(app.handler_count(), 9);
}

#[test]
fn test_trailing_slash_variant_replaces_handler() {
    let mut app = app();
    app.get("/index/", Box::new(|_: &RouteMatch| "index again".to_string()));
    assert_eq!(app.handler_count(), app.router().route_count());
    assert_eq!(call(&app, Method::GET, "/index").as_deref(), Some("index again"));
}
