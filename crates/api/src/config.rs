/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Directory for transient script files (default: `/tmp/runcell`).
    pub scratch_dir: String,
    /// Python interpreter binary used for uploaded scripts (default: `python3`).
    pub python_bin: String,
    /// Optional wall-clock limit for script execution, in seconds.
    /// Unset means scripts run unbounded; automation scripts are expected
    /// to be long-lived, so no default limit is imposed.
    pub script_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `HOST`                | `0.0.0.0`               |
    /// | `PORT`                | `8080`                  |
    /// | `CORS_ORIGINS`        | `http://localhost:8080` |
    /// | `SCRATCH_DIR`         | `/tmp/runcell`          |
    /// | `PYTHON_BIN`          | `python3`               |
    /// | `SCRIPT_TIMEOUT_SECS` | unset (no timeout)      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8080".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let scratch_dir = std::env::var("SCRATCH_DIR").unwrap_or_else(|_| "/tmp/runcell".into());

        let python_bin = std::env::var("PYTHON_BIN").unwrap_or_else(|_| "python3".into());

        let script_timeout_secs: Option<u64> = std::env::var("SCRIPT_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse().expect("SCRIPT_TIMEOUT_SECS must be a valid u64"));

        Self {
            host,
            port,
            cors_origins,
            scratch_dir,
            python_bin,
            script_timeout_secs,
        }
    }
}
