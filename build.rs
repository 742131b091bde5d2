use std::env;
use std::fs;
use std::path::Path;

// Variables que lee StorefrontConfig::from_env() con option_env!
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "TIME_SLOTS_PATH",
    "AUTH_COOKIE_NAME",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env no se pudo leer, usando valores por defecto");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        // El entorno del proceso tiene prioridad sobre .env
        if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
        }
    }
}
