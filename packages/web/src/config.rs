//! Resolves the client configuration for this build.

use model::CareerLogConfig;

/// Defaults, then `careerlog.toml` when running natively, then `CAREERLOG_*`
/// overrides.
pub fn load() -> CareerLogConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        from_file().with_overrides(|key| std::env::var(key).ok())
    }
    #[cfg(target_arch = "wasm32")]
    {
        CareerLogConfig::default().with_overrides(baked)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn from_file() -> CareerLogConfig {
    let path = CareerLogConfig::filename();
    match std::fs::read_to_string(path) {
        Ok(text) => match CareerLogConfig::from_toml(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", path, e);
                CareerLogConfig::default()
            }
        },
        Err(_) => CareerLogConfig::default(),
    }
}

/// Values captured from the environment when the wasm bundle was built.
#[cfg(target_arch = "wasm32")]
fn baked(key: &str) -> Option<String> {
    use model::config::*;

    let value = match key {
        ENV_CLIENT_ID => option_env!("CAREERLOG_CLIENT_ID"),
        ENV_AUTHORITY => option_env!("CAREERLOG_AUTHORITY"),
        ENV_REDIRECT_URI => option_env!("CAREERLOG_REDIRECT_URI"),
        ENV_POST_LOGOUT_REDIRECT_URI => option_env!("CAREERLOG_POST_LOGOUT_REDIRECT_URI"),
        ENV_API_SCOPE => option_env!("CAREERLOG_API_SCOPE"),
        ENV_API_BASE_URL => option_env!("CAREERLOG_API_BASE_URL"),
        _ => None,
    };
    value.map(str::to_string)
}
