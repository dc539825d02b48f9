use crate::config::AppConfig;
use crate::domain::normalize;
use crate::errors::ServerError;
use crate::responses::{csv_response, html_response, xlsx_response, ResultResp};
use crate::scraper::{parse_url_list, scrape_all, SessionLauncher};
use crate::spreadsheets::{rows_to_csv, rows_to_xlsx};
use crate::templates::pages::{home_page, results::CSV_FILENAME, results_page, ResultsVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Everything a request handler needs: settings plus a way to open browsing sessions.
pub struct App<L> {
    pub config: AppConfig,
    pub launcher: L,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Csv,
    Xlsx,
}

impl OutputFormat {
    fn from_form(value: Option<&str>) -> Result<Self, ServerError> {
        match value.map(str::trim) {
            None | Some("") | Some("html") => Ok(OutputFormat::Html),
            Some("csv") => Ok(OutputFormat::Csv),
            Some("xlsx") => Ok(OutputFormat::Xlsx),
            Some(other) => Err(ServerError::BadRequest(format!(
                "Unknown output format '{other}'"
            ))),
        }
    }
}

pub fn handle<L: SessionLauncher>(mut req: Request, app: &App<L>) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(home_page()),
        ("POST", "/scrape") => scrape(&mut req, app),
        (_, "/") | (_, "/scrape") => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn scrape<L: SessionLauncher>(req: &mut Request, app: &App<L>) -> ResultResp {
    let form = read_form(req)?;

    let urls = parse_url_list(form.get("urls").map(String::as_str).unwrap_or_default());
    if urls.is_empty() {
        return Err(ServerError::BadRequest(
            "Please enter at least one valid URL.".into(),
        ));
    }
    let format = OutputFormat::from_form(form.get("format").map(String::as_str))?;

    let outcomes = scrape_all(&app.launcher, &urls, &app.config.extract_options())?;
    let rows = normalize(&outcomes);
    let now = chrono::Local::now();

    match format {
        OutputFormat::Csv => csv_response(rows_to_csv(&rows)?, CSV_FILENAME),
        OutputFormat::Xlsx => xlsx_response(
            rows_to_xlsx(&rows)?,
            &format!("listings_{}.xlsx", now.format("%Y%m%d_%H%M%S")),
        ),
        OutputFormat::Html => {
            let csv = rows_to_csv(&rows)?;
            let vm = ResultsVm::new(&rows, csv, now.format("%Y-%m-%d %H:%M:%S").to_string());
            html_response(results_page(&vm))
        }
    }
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
