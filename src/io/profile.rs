//! Person profile loading
//!
//! Reads a JSON profile from disk and produces a [`Person`] with a freshly
//! assigned identifier.

use crate::types::{BankError, Person};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Load a person profile from a JSON file
///
/// # Errors
///
/// - `ProfileNotFound` if nothing exists at `path`
/// - `Io` for any other failure to open or read the file
/// - `ProfileParse` if the contents are not a JSON person object
pub fn load_person(path: &Path) -> Result<Person, BankError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BankError::profile_not_found(&path.display().to_string()),
        _ => BankError::from(e),
    })?;

    read_person(BufReader::new(file))
}

/// Parse a person profile from any reader
pub fn read_person<R: Read>(reader: R) -> Result<Person, BankError> {
    let person = serde_json::from_reader(reader)?;
    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary profile file for testing
    fn create_temp_profile(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_person_reads_all_fields() {
        let file = create_temp_profile(
            r#"{"firstname": "John", "lastname": "Doe", "email": "john@example.com"}"#,
        );

        let person = load_person(file.path()).unwrap();

        assert_eq!(person.first_name, "John");
        assert_eq!(person.last_name, "Doe");
        assert_eq!(person.email, "john@example.com");
    }

    #[test]
    fn test_load_person_assigns_new_id_each_time() {
        let file = create_temp_profile(r#"{"firstname": "John"}"#);

        let first = load_person(file.path()).unwrap();
        let second = load_person(file.path()).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_load_person_missing_file() {
        let result = load_person(Path::new("nonexistent_profile.json"));

        assert_eq!(
            result,
            Err(BankError::profile_not_found("nonexistent_profile.json"))
        );
    }

    #[test]
    fn test_load_person_malformed_json() {
        let file = create_temp_profile("{ not json");

        let result = load_person(file.path());

        assert!(matches!(result, Err(BankError::ProfileParse { .. })));
    }

    #[test]
    fn test_read_person_rejects_non_object() {
        let result = read_person("[1, 2, 3]".as_bytes());
        assert!(matches!(result, Err(BankError::ProfileParse { .. })));
    }
}
