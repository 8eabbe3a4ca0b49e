use std::env;
use std::fs;
use std::path::Path;

/// Settings forwarded to `option_env!` in `src/config.rs`
const FORWARDED_KEYS: &[&str] = &["FOOD_API_URL", "FOOD_DELETE_POLICY", "FOOD_NOTICE_TIMEOUT_MS"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found, using default settings. Copy .env.example to .env to configure.");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            // The real environment wins over .env
            if FORWARDED_KEYS.contains(&key) && env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
