use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The in-memory aggregate of all user-entered career data.
///
/// Field names serialize as camelCase because the record is embedded verbatim
/// (pretty-printed JSON) in the generation prompt, and the prompt template was
/// tuned against that shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
    /// Free-text summary / headline ("Senior Software Engineer").
    pub summary: String,
    /// Comma-separated skills string. Not parsed server-side.
    pub skills: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}

/// One position in the experience list. Dates are free text ("Jan 2022", "Present").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

// Entries are born empty with a fresh opaque id. The id exists only so the
// list-editing endpoints can address an entry; it never appears in the
// generated document.

impl ExperienceEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            role: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl EducationEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            school: String::new(),
            degree: String::new(),
            graduation_date: String::new(),
        }
    }
}

impl ProjectEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            link: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ResumeRecord {
            full_name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert!(json.get("full_name").is_none());
        assert!(json["experience"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_empty_entries_get_distinct_ids() {
        let a = ExperienceEntry::empty();
        let b = ExperienceEntry::empty();
        assert_ne!(a.id, b.id);
        assert!(a.company.is_empty());
    }

    #[test]
    fn test_record_round_trips_entry_lists() {
        let mut record = ResumeRecord::default();
        record.education.push(EducationEntry::empty());
        record.projects.push(ProjectEntry {
            link: Some("https://example.com".to_string()),
            ..ProjectEntry::empty()
        });

        let json = serde_json::to_string(&record).unwrap();
        let recovered: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.education.len(), 1);
        assert_eq!(
            recovered.projects[0].link.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_project_link_omitted_when_none() {
        let entry = ProjectEntry::empty();
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("link").is_none());
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        // Partial payloads are fine; everything defaults to empty.
        let record: ResumeRecord = serde_json::from_str(r#"{"fullName": "Jane"}"#).unwrap();
        assert_eq!(record.full_name, "Jane");
        assert!(record.skills.is_empty());
    }
}
