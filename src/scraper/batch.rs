// batch.rs
use crate::scraper::extract::{extract, ExtractOptions};
use crate::scraper::models::ScrapeOutcome;
use crate::scraper::page::SessionLauncher;
use crate::scraper::ScraperError;

/// One URL per line; surrounding whitespace trimmed, blank lines dropped.
pub fn parse_url_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract every URL in order through a single browsing session.
///
/// Per-URL failures land in the returned outcomes; only failing to start the session
/// is an error. The session is closed when this returns, whichever way it returns.
pub fn scrape_all<L: SessionLauncher>(
    launcher: &L,
    urls: &[String],
    options: &ExtractOptions,
) -> Result<Vec<ScrapeOutcome>, ScraperError> {
    let mut page = launcher.launch()?;
    let mut outcomes = Vec::with_capacity(urls.len());

    for (idx, url) in urls.iter().enumerate() {
        tracing::info!("📄 Scraping URL {}/{}: {url}", idx + 1, urls.len());
        outcomes.push(extract(&mut page, url, options));
    }

    let failed = outcomes.iter().filter(|o| o.error().is_some()).count();
    tracing::info!(
        total = outcomes.len(),
        failed,
        "✅ Scrape complete"
    );

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::{FixtureLauncher, LISTING_HTML, LISTING_URL, MINIMAL_HTML};

    #[test]
    fn url_list_skips_blank_lines_and_trims() {
        let input = "  https://a/1 \n\n\t\nhttps://a/2\r\n   ";
        assert_eq!(parse_url_list(input), vec!["https://a/1", "https://a/2"]);
        assert!(parse_url_list(" \n ").is_empty());
    }

    #[test]
    fn one_bad_url_does_not_stop_the_batch() {
        let launcher = FixtureLauncher::new(&[
            (LISTING_URL, LISTING_HTML),
            ("https://www.zealty.ca/ok/", MINIMAL_HTML),
        ]);
        let urls = vec![
            LISTING_URL.to_string(),
            "https://missing.example/".to_string(),
            "https://www.zealty.ca/ok/".to_string(),
        ];

        let outcomes = scrape_all(&launcher, &urls, &ExtractOptions::default()).unwrap();

        let got: Vec<_> = outcomes.iter().map(|o| (o.url(), o.error().is_some())).collect();
        assert_eq!(
            got,
            vec![
                (LISTING_URL, false),
                ("https://missing.example/", true),
                ("https://www.zealty.ca/ok/", false),
            ]
        );
        assert_eq!(launcher.launches(), 1);
    }

    #[test]
    fn launch_failure_is_a_batch_error() {
        let launcher = FixtureLauncher::failing();
        let result = scrape_all(&launcher, &["https://a/".to_string()], &ExtractOptions::default());
        assert!(matches!(result, Err(ScraperError::Launch(_))));
    }
}
