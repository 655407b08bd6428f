//! Environment-driven configuration.
//!
//! # Responsibility
//! - Collect the token secret and upstream nutrition credentials from the
//!   process environment.
//! - Log fallbacks instead of failing; missing upstream credentials surface
//!   later as an unconfigured remote error, never a panic.

use log::{info, warn};
use std::env;

const JWT_SECRET_VAR: &str = "JWT_SECRET";
const DEFAULT_JWT_SECRET: &str = "your-secret-key";

const NUTRITIONIX_APP_ID_VAR: &str = "NUTRITIONIX_APP_ID";
const NUTRITIONIX_API_KEY_VAR: &str = "NUTRITIONIX_API_KEY";

/// Upstream nutrition API credential pair.
#[derive(Debug, Clone)]
pub struct NutritionixCredentials {
    pub app_id: String,
    pub api_key: String,
}

impl NutritionixCredentials {
    /// Reads both credential variables; `None` unless both are set.
    pub fn from_env() -> Option<Self> {
        let app_id = non_empty_var(NUTRITIONIX_APP_ID_VAR);
        let api_key = non_empty_var(NUTRITIONIX_API_KEY_VAR);

        match (app_id, api_key) {
            (Some(app_id), Some(api_key)) => Some(Self { app_id, api_key }),
            _ => {
                warn!(
                    "event=config_load module=config status=missing keys={NUTRITIONIX_APP_ID_VAR},{NUTRITIONIX_API_KEY_VAR}"
                );
                None
            }
        }
    }
}

/// Full process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub nutritionix: Option<NutritionixCredentials>,
}

impl Config {
    pub fn from_env() -> Self {
        let jwt_secret = non_empty_var(JWT_SECRET_VAR).unwrap_or_else(|| {
            info!("event=config_load module=config status=default key={JWT_SECRET_VAR}");
            DEFAULT_JWT_SECRET.to_string()
        });

        Self {
            jwt_secret,
            nutritionix: NutritionixCredentials::from_env(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
