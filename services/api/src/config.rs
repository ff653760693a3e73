use std::path::PathBuf;

/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct Config {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 4700). Env var: `PORT`.
    pub port: u16,
    /// HMAC secret for signing JWT bearer tokens.
    pub jwt_secret: String,
    /// Token lifetime in seconds (default 604800 = 7 days). Env var: `JWT_EXPIRY_SECS`.
    pub jwt_expiry_secs: u64,
    /// Payment gateway credentials. `None` disables gateway payments
    /// (order/verify endpoints answer 503).
    pub gateway: Option<GatewayConfig>,
    /// SMS gateway settings. `None` swaps in the no-op sender.
    pub sms: Option<SmsConfig>,
    /// Directory for uploaded gallery images (default `./uploads`). Env var: `UPLOAD_DIR`.
    pub upload_dir: PathBuf,
    /// Maximum accepted upload size (default 5 MiB). Env var: `MAX_UPLOAD_BYTES`.
    pub max_upload_bytes: usize,
    /// Local hour of the daily expiry sweep (default 10). Env var: `EXPIRY_REMINDER_HOUR`.
    pub expiry_reminder_hour: u32,
    /// How many days ahead the sweep looks (default 3). Env var: `EXPIRY_REMINDER_DAYS`.
    pub expiry_reminder_days: u32,
}

/// Payment gateway credentials. All three env vars must be present:
/// `GATEWAY_URL`, `GATEWAY_KEY_ID`, `GATEWAY_KEY_SECRET`.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub url: String,
    pub key_id: String,
    pub key_secret: String,
}

/// SMS gateway settings. Both env vars must be present:
/// `SMS_GATEWAY_URL`, `SMS_API_KEY`.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub url: String,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4700),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            jwt_expiry_secs: std::env::var("JWT_EXPIRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(604_800),
            gateway: gateway_from_env(),
            sms: sms_from_env(),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./uploads")),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5 * 1024 * 1024),
            expiry_reminder_hour: std::env::var("EXPIRY_REMINDER_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            expiry_reminder_days: std::env::var("EXPIRY_REMINDER_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
        }
    }
}

fn gateway_from_env() -> Option<GatewayConfig> {
    Some(GatewayConfig {
        url: std::env::var("GATEWAY_URL").ok()?,
        key_id: std::env::var("GATEWAY_KEY_ID").ok()?,
        key_secret: std::env::var("GATEWAY_KEY_SECRET").ok()?,
    })
}

fn sms_from_env() -> Option<SmsConfig> {
    Some(SmsConfig {
        url: std::env::var("SMS_GATEWAY_URL").ok()?,
        api_key: std::env::var("SMS_API_KEY").ok()?,
    })
}
