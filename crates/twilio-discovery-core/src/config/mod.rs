//! Well-known environment variables and file locations

use std::path::PathBuf;

/// Account SID, also used as the client username
pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
/// Auth token, used as the client password
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
/// Selects a project from the credentials file
pub const ENV_PROJECT_ID: &str = "TWILIO_PROJECT_ID";
pub const ENV_REGION: &str = "TWILIO_REGION";
pub const ENV_EDGE: &str = "TWILIO_EDGE";
pub const ENV_LOG_LEVEL: &str = "TWILIO_LOG_LEVEL";

/// Credentials file location relative to the home directory
pub const CREDENTIALS_FILE_RELATIVE: &str = ".credentials/twilio.json";

/// Default credentials file (`~/.credentials/twilio.json`)
///
/// Falls back to the current directory when no home directory can be found.
pub fn default_credentials_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CREDENTIALS_FILE_RELATIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials_path() {
        let path = default_credentials_path();
        assert!(path.ends_with(".credentials/twilio.json"));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("twilio.json"));
    }
}
