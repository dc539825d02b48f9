use crate::domain::NormalizedRow;
use crate::templates::{card, desktop_layout};
use base64::Engine;
use maud::{html, Markup};

pub const CSV_FILENAME: &str = "scraped_data.csv";

pub struct ResultsVm {
    pub total: usize,
    pub failures: Vec<(String, String)>,
    pub csv: String,
    pub generated_at: String,
}

impl ResultsVm {
    pub fn new(rows: &[NormalizedRow], csv: String, generated_at: String) -> Self {
        Self {
            total: rows.len(),
            failures: rows
                .iter()
                .filter(|row| row.is_error())
                .map(|row| (row.url.clone(), row.error.clone()))
                .collect(),
            csv,
            generated_at,
        }
    }

    pub fn scraped(&self) -> usize {
        self.total - self.failures.len()
    }

    /// The CSV as a data URI, so the download needs no second request.
    pub fn download_href(&self) -> String {
        format!(
            "data:text/csv;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.csv)
        )
    }
}

pub fn results_page(vm: &ResultsVm) -> Markup {
    desktop_layout(
        "Scrape Results",
        html! {
            main {
                h1 { "Scrape Results" }

                @if vm.scraped() == 0 {
                    p class="warning" {
                        "No data was scraped. Please check the URLs and try again."
                    }
                } @else {
                    p class="success" {
                        "Data scraped and aligned successfully! "
                        strong { (vm.scraped()) } " of " strong { (vm.total) } " listings scraped."
                    }
                }
                p { small { "Generated " (vm.generated_at) } }

                @if !vm.failures.is_empty() {
                    (card("Failed URLs", html! {
                        table class="failures" {
                            @for (url, error) in &vm.failures {
                                tr {
                                    td { a href=(url) { (url) } }
                                    td { (error) }
                                }
                            }
                        }
                    }))
                }

                (card("CSV Output", html! {
                    p {
                        a href=(vm.download_href()) download=(CSV_FILENAME) { "Download Aggregated CSV" }
                    }
                    textarea readonly rows="16" { (vm.csv) }
                }))

                p { a href="/" { "← Scrape more listings" } }
            }
        },
    )
}
