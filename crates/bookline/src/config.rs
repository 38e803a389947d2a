use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "bookline.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// DynamoDB table name for appointments (default: "Appointments")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub appointments_table: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "bookline.db")
    /// - `APPOINTMENTS_TABLE` - DynamoDB table name (default: "Appointments")
    ///
    /// The AWS region is resolved by the SDK default chain (`AWS_REGION`),
    /// falling back to `us-east-1`.
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "bookline.db".to_string()),
            appointments_table: env::var("APPOINTMENTS_TABLE")
                .unwrap_or_else(|_| "Appointments".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("APPOINTMENTS_TABLE");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "bookline.db");
        assert_eq!(config.appointments_table, "Appointments");
    }
}
