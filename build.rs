use std::env;
use std::fs;
use std::path::Path;

// Claves que la app lee con option_env! (ver src/config.rs)
const FORWARDED_KEYS: &[&str] = &[
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "TOKEN_HEADER",
];

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    // Quitar comillas opcionales: KEY="valor"
    let value = value.trim().trim_matches('"');
    Some((key.trim(), value))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found, using default hotel API settings.");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !FORWARDED_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key {}", key);
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
