#[tokio::main]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Load .env for local development; embedded build-time values cover
    // packaged builds.
    if dotenvy::dotenv().is_err() {
        log::debug!("No .env file found, relying on environment variables");
    }

    println!("=== CareerFinder: Personality Quiz & Career Discovery ===\n");

    if let Err(e) = careerfinder_lib::run().await {
        eprintln!("Error running application: {}", e);
        std::process::exit(1);
    }
}
