use std::env;

fn main() {
    // Load .env file during build for environment variables
    if let Err(e) = dotenvy::dotenv() {
        println!(
            "cargo:warning=BUILD.RS: Failed to load .env file: {}. Using system environment variables.",
            e
        );
    }

    // Export environment variables to be available at runtime using cargo:rustc-env
    // These will be embedded in the binary at compile time
    if let Ok(gemini_key) = env::var("GEMINI_API_KEY") {
        println!("cargo:rustc-env=GEMINI_API_KEY={}", gemini_key);
        println!("cargo:warning=Embedded GEMINI_API_KEY (length: {})", gemini_key.len());
    } else {
        println!("cargo:warning=GEMINI_API_KEY not found in environment during build");
    }

    if let Ok(measurement_id) = env::var("GA_MEASUREMENT_ID") {
        println!("cargo:rustc-env=GA_MEASUREMENT_ID={}", measurement_id);
    }
}
