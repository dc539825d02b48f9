// templates/pages/home.rs

use crate::domain::LISTING_SUBTYPES;
use crate::templates::{
    components::{button, card},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Real Estate Listings",
        html! {
            main {
                h1 { "Real Estate Listings" }
                p {
                    "Enter the URLs of the listings you want to scrape, each on a new line. "
                    "Every URL becomes one row of the export, including the ones that fail."
                }

                form method="post" action="/scrape" class="card" {
                    label for="urls" { "Enter URLs (one per line):" }
                    textarea
                        id="urls"
                        name="urls"
                        rows="10"
                        placeholder="https://www.zealty.ca/mls-R2712345/..."
                        required {}

                    p {
                        label for="format" { "Output: " }
                        select id="format" name="format" {
                            option value="html" selected { "Show CSV on the page" }
                            option value="csv" { "Download CSV" }
                            option value="xlsx" { "Download Excel workbook" }
                        }
                    }

                    (button("Scrape and Generate CSV"))
                }

                (card("Listing styles", html! {
                    p { "Only these styles are exported; any other style is left blank." }
                    ul {
                        @for label in LISTING_SUBTYPES.labels() {
                            li { (label) }
                        }
                    }
                }))
            }
        },
    )
}
