use astra::Server;
use listing_scraper::config::AppConfig;
use listing_scraper::logging::init_logging;
use listing_scraper::router::{handle, App};
use listing_scraper::scraper::HttpLauncher;
use listing_scraper::templates;

fn main() {
    init_logging();

    // 1️⃣ Load settings
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ One launcher for the process; each request gets its own session
    let addr = config.bind_addr;
    let max_workers = config.max_workers;
    let app = App {
        launcher: HttpLauncher::new(config.user_agent.clone()),
        config,
    };

    // 3️⃣ Start the server
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
