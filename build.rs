use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load .env into rustc-env so config.rs can read it with option_env!
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env and set GOOGLE_MAPS_API_KEY.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "BACKEND_URL",
        "GOOGLE_MAPS_API_KEY",
        "DEFAULT_MAP_CENTER_LAT",
        "DEFAULT_MAP_CENTER_LNG",
        "DEFAULT_MAP_ZOOM",
        "TILE_URL",
        "TILE_ATTRIBUTION",
        "ROUTE_CORRIDOR_KM",
        "BOUNDED_REFRESH",
        "MIN_REFRESH_RADIUS_KM",
        "ENABLE_LOGGING",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
