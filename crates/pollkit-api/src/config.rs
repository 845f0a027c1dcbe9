//! API configuration.

use std::time::Duration;

/// Tuning for one rate limiter instance.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Requests allowed per window.
    pub max_requests: u32,
    /// Fixed window length.
    pub window: Duration,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Admin allow-list (emails, matched case-insensitively)
    pub admin_emails: Vec<String>,
    /// Vote submission limiter
    pub vote_rate_limit: RateLimitConfig,
    /// Poll creation limiter
    pub create_rate_limit: RateLimitConfig,
    /// Interval between background limiter sweeps
    pub limiter_sweep_interval: Duration,
    /// Max identifiers tracked per limiter between sweeps
    pub limiter_max_entries: usize,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            admin_emails: vec!["admin@example.com".to_string()],
            vote_rate_limit: RateLimitConfig {
                max_requests: 5,
                window: Duration::from_secs(60),
            },
            create_rate_limit: RateLimitConfig {
                max_requests: 10,
                window: Duration::from_secs(300),
            },
            limiter_sweep_interval: Duration::from_secs(300),
            limiter_max_entries: 10_000,
            max_body_size: 64 * 1024, // 64 KB, poll payloads are small
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            admin_emails: std::env::var("ADMIN_EMAILS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.admin_emails),
            vote_rate_limit: RateLimitConfig {
                max_requests: env_u32("VOTE_RATE_LIMIT_MAX", defaults.vote_rate_limit.max_requests),
                window: Duration::from_secs(env_u64(
                    "VOTE_RATE_LIMIT_WINDOW_SECS",
                    defaults.vote_rate_limit.window.as_secs(),
                )),
            },
            create_rate_limit: RateLimitConfig {
                max_requests: env_u32(
                    "CREATE_RATE_LIMIT_MAX",
                    defaults.create_rate_limit.max_requests,
                ),
                window: Duration::from_secs(env_u64(
                    "CREATE_RATE_LIMIT_WINDOW_SECS",
                    defaults.create_rate_limit.window.as_secs(),
                )),
            },
            limiter_sweep_interval: Duration::from_secs(env_u64(
                "LIMITER_SWEEP_INTERVAL_SECS",
                defaults.limiter_sweep_interval.as_secs(),
            )),
            limiter_max_entries: env_u64("LIMITER_MAX_ENTRIES", defaults.limiter_max_entries as u64)
                as usize,
            max_body_size: env_u64("MAX_BODY_SIZE", defaults.max_body_size as u64) as usize,
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}
