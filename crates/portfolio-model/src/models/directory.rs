//! Departments and personnel referenced by projects.

use serde::{Deserialize, Serialize};

/// An organizational unit that owns projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department {
    /// Unique department ID.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Accent color token (e.g. `#3b82f6`). Opaque to this crate.
    #[serde(default)]
    pub color: String,
}

impl Department {
    /// Creates a department.
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A person who can lead projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Personnel {
    /// Unique person ID.
    pub id: String,

    /// Full name.
    pub name: String,

    /// Role label (e.g. "Engineering Manager").
    #[serde(default)]
    pub role: String,
}

impl Personnel {
    /// Creates a person.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    /// Returns the first character of the name, uppercased, for avatar badges.
    ///
    /// Returns `None` for an empty name.
    pub fn initial(&self) -> Option<String> {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_color_defaults_to_empty() {
        let dept: Department = serde_json::from_str(r#"{"id": "d1", "name": "Eng"}"#).unwrap();
        assert_eq!(dept, Department::new("d1", "Eng", ""));
    }

    #[test]
    fn test_personnel_initial() {
        assert_eq!(
            Personnel::new("p1", "ana", "PM").initial(),
            Some("A".to_string())
        );
        assert_eq!(
            Personnel::new("p2", "Đức", "Dev").initial(),
            Some("Đ".to_string())
        );
        assert_eq!(Personnel::new("p3", "", "Dev").initial(), None);
    }

    #[test]
    fn test_personnel_role_defaults_to_empty() {
        let person: Personnel = serde_json::from_str(r#"{"id": "p1", "name": "Ana"}"#).unwrap();
        assert!(person.role.is_empty());
    }
}
