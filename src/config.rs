use std::{env, fmt::Display, num::NonZeroU32, str::FromStr};

use tracing::warn;

/// Runtime configuration, loaded once at startup from the environment
/// (`.env` files are honored via dotenvy before this runs).
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub create_posts_per_minute: NonZeroU32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", "3000"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set!"),
            create_posts_per_minute: env_or("CREATE_POSTS_PER_MINUTE", "3"),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
