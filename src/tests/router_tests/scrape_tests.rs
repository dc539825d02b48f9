// src/tests/router_tests/scrape_tests.rs

use crate::config::AppConfig;
use crate::domain::COLUMNS;
use crate::errors::ServerError;
use crate::router::{handle, App};
use crate::tests::utils::{FixtureLauncher, LISTING_HTML, LISTING_URL};
use astra::{Body, Request, Response};
use std::io::Read;

fn app(launcher: FixtureLauncher) -> App<FixtureLauncher> {
    App {
        config: AppConfig::default(),
        launcher,
    }
}

fn post_scrape(urls: &str, format: &str) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("urls", urls)
        .append_pair("format", format)
        .finish();

    http::Request::builder()
        .method("POST")
        .uri("/scrape")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn read_body(resp: &mut Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers().get(name).unwrap().to_str().unwrap()
}

#[test]
fn csv_download_has_one_row_per_url() {
    let app = app(FixtureLauncher::new(&[(LISTING_URL, LISTING_HTML)]));
    let urls = format!("\n  {LISTING_URL}  \n\nhttps://missing.example/\n");

    let mut resp = handle(post_scrape(&urls, "csv"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/csv; charset=utf-8");
    assert_eq!(
        header(&resp, "Content-Disposition"),
        "attachment; filename=\"scraped_data.csv\""
    );

    let body = String::from_utf8(read_body(&mut resp)).unwrap();
    let mut reader = csv::Reader::from_reader(body.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS);

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 2);

    assert_eq!(&records[0][0], "779000");
    assert_eq!(&records[0][1], "602-8188 FRASER STREET, Vancouver, BC");
    assert_eq!(&records[0][2], "Bright corner unit with views.\n\nWalk to shops.");
    assert_eq!(&records[0][8], "Corner Unit");
    assert_eq!(&records[0][11], "Pool; Garage");
    assert_eq!(&records[0][13], LISTING_URL);
    assert_eq!(&records[0][14], "");

    assert!(records[1].iter().take(13).all(str::is_empty));
    assert_eq!(&records[1][13], "https://missing.example/");
    assert!(records[1][14].starts_with("Navigation to https://missing.example/ failed"));
    assert_eq!(app.launcher.launches(), 1);
}

#[test]
fn html_results_show_failures_and_csv() {
    let app = app(FixtureLauncher::new(&[(LISTING_URL, LISTING_HTML)]));
    let urls = format!("{LISTING_URL}\nhttps://missing.example/");

    let mut resp = handle(post_scrape(&urls, "html"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = String::from_utf8(read_body(&mut resp)).unwrap();
    assert!(body.contains("Data scraped and aligned successfully!"));
    assert!(body.contains("https://missing.example/"));
    assert!(body.contains("HTTP 404 Not Found"));
    assert!(body.contains("data:text/csv;base64,"));
    assert!(body.contains("features_&amp;_amenities"));
}

#[test]
fn xlsx_download_is_a_workbook() {
    let app = app(FixtureLauncher::new(&[(LISTING_URL, LISTING_HTML)]));

    let mut resp = handle(post_scrape(LISTING_URL, "xlsx"), &app).unwrap();
    assert_eq!(
        header(&resp, "Content-Type"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(header(&resp, "Content-Disposition").contains("listings_"));
    assert_eq!(&read_body(&mut resp)[..2], b"PK");
}

#[test]
fn blank_input_is_a_bad_request() {
    let app = app(FixtureLauncher::new(&[]));

    let err = handle(post_scrape(" \n\t\n", "csv"), &app).unwrap_err();
    match err {
        ServerError::BadRequest(msg) => assert_eq!(msg, "Please enter at least one valid URL."),
        other => panic!("expected BadRequest, got {other:?}"),
    }
    assert_eq!(app.launcher.launches(), 0, "no session for an empty batch");
}

#[test]
fn unknown_format_is_a_bad_request() {
    let app = app(FixtureLauncher::new(&[]));
    let err = handle(post_scrape(LISTING_URL, "pdf"), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn session_launch_failure_is_a_server_error() {
    let app = app(FixtureLauncher::failing());
    let err = handle(post_scrape(LISTING_URL, "csv"), &app).unwrap_err();
    assert!(matches!(err, ServerError::Scrape(_)));
    assert_eq!(err.status(), 502);
}
