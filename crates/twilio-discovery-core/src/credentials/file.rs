//! Multi-project credentials file (`~/.credentials/twilio.json`)
//!
//! ```json
//! {
//!   "projects": [
//!     { "id": "prod", "accountSid": "AC...", "authToken": "..." },
//!     { "id": "staging", "accountSid": "AC...", "authToken": "..." }
//!   ]
//! }
//! ```
//!
//! Parsing is lenient about individual entries: an entry that is not an
//! object, or whose fields are not strings, simply has those fields absent.
//! Only the shape of the root is enforced.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::types::Credentials;

/// Errors from reading or parsing a credentials file
#[derive(Error, Debug)]
pub enum CredentialsFileError {
    #[error("Failed to read credentials file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from '{}'", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Credentials file '{}' missing '.projects'", .path.display())]
    MissingProjects { path: PathBuf },

    #[error("Credentials file '{}' property 'projects' must be an array", .path.display())]
    ProjectsNotArray { path: PathBuf },
}

pub type CredentialsFileResult<T> = Result<T, CredentialsFileError>;

/// One entry of the `projects` array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: Option<String>,
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
}

impl ProjectEntry {
    fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            id: field("id"),
            account_sid: field("accountSid"),
            auth_token: field("authToken"),
        }
    }

    /// Credentials of this project, if both values are present and non-empty
    pub fn credentials(&self) -> Option<Credentials> {
        let account_sid = self.account_sid.as_deref().filter(|s| !s.is_empty())?;
        let auth_token = self.auth_token.as_deref().filter(|s| !s.is_empty())?;
        Some(Credentials::new(account_sid, auth_token))
    }
}

/// Parsed credentials file
#[derive(Debug, Clone, Default)]
pub struct CredentialsFile {
    path: PathBuf,
    projects: Vec<ProjectEntry>,
}

impl CredentialsFile {
    /// Read and parse the file at `path`
    pub fn load(path: impl AsRef<Path>) -> CredentialsFileResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CredentialsFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse file contents; `path` is only used for error messages
    pub fn parse(content: &str, path: impl AsRef<Path>) -> CredentialsFileResult<Self> {
        let path = path.as_ref().to_path_buf();
        let root: Value = serde_json::from_str(content).map_err(|source| {
            CredentialsFileError::InvalidJson {
                path: path.clone(),
                source,
            }
        })?;

        let projects = match root.get("projects") {
            None => return Err(CredentialsFileError::MissingProjects { path }),
            Some(value) if is_falsy(value) => {
                return Err(CredentialsFileError::MissingProjects { path })
            }
            Some(Value::Array(items)) => items.iter().map(ProjectEntry::from_value).collect(),
            Some(_) => return Err(CredentialsFileError::ProjectsNotArray { path }),
        };

        Ok(Self { path, projects })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    /// First project whose id matches exactly
    pub fn find_project(&self, project_id: &str) -> Option<&ProjectEntry> {
        self.projects
            .iter()
            .find(|p| p.id.as_deref() == Some(project_id))
    }
}

// `projects: null`, `false`, `0` and `""` are treated as if the key were absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PATH: &str = "/tmp/twilio.json";

    #[test]
    fn test_parse_projects() {
        let file = CredentialsFile::parse(
            r#"{
                "projects": [
                    { "id": "prod", "accountSid": "AC1", "authToken": "t1" },
                    { "id": "dev", "accountSid": "AC2", "authToken": "t2", "note": "extra" }
                ],
                "version": 2
            }"#,
            PATH,
        )
        .unwrap();

        assert_eq!(file.projects().len(), 2);
        assert_eq!(file.path(), Path::new(PATH));
        let dev = file.find_project("dev").unwrap();
        assert_eq!(dev.credentials(), Some(Credentials::new("AC2", "t2")));
        assert!(file.find_project("missing").is_none());
    }

    #[test]
    fn test_first_matching_project_wins() {
        let file = CredentialsFile::parse(
            r#"{"projects": [
                {"id": "prod", "accountSid": "AC1", "authToken": "first"},
                {"id": "prod", "accountSid": "AC2", "authToken": "second"}
            ]}"#,
            PATH,
        )
        .unwrap();

        let prod = file.find_project("prod").unwrap();
        assert_eq!(prod.auth_token.as_deref(), Some("first"));
    }

    #[test]
    fn test_project_id_match_is_exact() {
        let file =
            CredentialsFile::parse(r#"{"projects": [{"id": "Prod", "accountSid": "AC1", "authToken": "t"}]}"#, PATH)
                .unwrap();
        assert!(file.find_project("prod").is_none());
        assert!(file.find_project("Prod").is_some());
    }

    #[test]
    fn test_invalid_json() {
        let err = CredentialsFile::parse("{ not json", PATH).unwrap_err();
        assert!(matches!(err, CredentialsFileError::InvalidJson { .. }));
        assert_eq!(err.to_string(), "Failed to parse JSON from '/tmp/twilio.json'");
    }

    #[test]
    fn test_missing_projects() {
        for content in [r#"{}"#, r#"{"projects": null}"#, r#"{"projects": false}"#, r#"{"projects": ""}"#] {
            let err = CredentialsFile::parse(content, PATH).unwrap_err();
            assert!(
                matches!(err, CredentialsFileError::MissingProjects { .. }),
                "content: {}",
                content
            );
        }
        let err = CredentialsFile::parse("[]", PATH).unwrap_err();
        assert_eq!(err.to_string(), "Credentials file '/tmp/twilio.json' missing '.projects'");
    }

    #[test]
    fn test_projects_not_array() {
        for content in [r#"{"projects": {"id": "prod"}}"#, r#"{"projects": "prod"}"#, r#"{"projects": 3}"#] {
            let err = CredentialsFile::parse(content, PATH).unwrap_err();
            assert!(
                matches!(err, CredentialsFileError::ProjectsNotArray { .. }),
                "content: {}",
                content
            );
        }
    }

    #[test]
    fn test_lenient_entries() {
        let file = CredentialsFile::parse(
            r#"{"projects": [42, "prod", {"id": 7}, {"id": "prod", "accountSid": 1, "authToken": "t"}]}"#,
            PATH,
        )
        .unwrap();

        assert_eq!(file.projects().len(), 4);
        assert_eq!(file.projects()[0], ProjectEntry::default());
        let prod = file.find_project("prod").unwrap();
        assert_eq!(prod.account_sid, None);
        assert_eq!(prod.credentials(), None);
    }

    #[test]
    fn test_entry_with_empty_values_has_no_credentials() {
        let entry = ProjectEntry {
            id: Some("prod".to_string()),
            account_sid: Some("AC1".to_string()),
            auth_token: Some(String::new()),
        };
        assert_eq!(entry.credentials(), None);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twilio.json");
        fs::write(
            &path,
            r#"{"projects": [{"id": "prod", "accountSid": "AC1", "authToken": "t1"}]}"#,
        )
        .unwrap();

        let file = CredentialsFile::load(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert!(file.find_project("prod").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = CredentialsFile::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CredentialsFileError::Io { .. }));
    }
}
