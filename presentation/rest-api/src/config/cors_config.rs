use poem::middleware::Cors;

use super::env::read_var;

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: unset, any origin is accepted)
///
/// Configuration:
/// - Methods: GET, POST, PUT, DELETE, OPTIONS, PATCH
/// - Headers: any
/// - Credentials: Disabled
/// - Preflight cache: 3600 seconds
pub fn init_cors() -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"])
        .allow_credentials(false)
        .max_age(3600);

    match read_var("CORS_ALLOWED_ORIGINS") {
        Some(raw) => {
            let origins = parse_origins(&raw);
            if origins.is_empty() {
                cors
            } else {
                cors.allow_origins(origins)
            }
        }
        None => cors,
    }
}

/// Splits a comma-separated origin list; `*` means any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(str::to_string)
        .collect()
}
