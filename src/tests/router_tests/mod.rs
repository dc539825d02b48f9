mod home_tests;
mod scrape_tests;
