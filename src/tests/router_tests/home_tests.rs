// src/tests/router_tests/home_tests.rs

use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::router::{handle, App};
use crate::tests::utils::FixtureLauncher;
use astra::{Body, Request};
use http::Method;
use std::io::Read;

fn app() -> App<FixtureLauncher> {
    App {
        config: AppConfig::default(),
        launcher: FixtureLauncher::new(&[]),
    }
}

fn request(method: Method, path: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_has_the_url_form() {
    let mut resp = handle(request(Method::GET, "/"), &app()).unwrap();
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();

    assert!(body.contains(r#"action="/scrape""#));
    assert!(body.contains(r#"name="urls""#));
    assert!(body.contains("1/2 Duplex"), "listing styles should be listed");
}

#[test]
fn unknown_path_is_not_found() {
    let err = handle(request(Method::GET, "/admin"), &app()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn wrong_method_is_rejected() {
    let err = handle(request(Method::GET, "/scrape"), &app()).unwrap_err();
    assert!(matches!(err, ServerError::MethodNotAllowed));
    assert_eq!(err.status(), 405);
}
