//! The structured resume record.
//!
//! Loaded once at startup from a JSON source and read-only for the lifetime
//! of the process. Every field is `#[serde(default)]` so a partially
//! populated source deserializes to empty strings/sequences instead of
//! failing; a missing or malformed source falls back to the hardcoded
//! record from [`ResumeRecord::fallback`].

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Academic {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Personal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub father: String,
    #[serde(default)]
    pub mother: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub address: String,
}

/// The full resume: serialized field names are part of the `/api/resume`
/// contract, so renames here are breaking changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub academics: Vec<Academic>,
    #[serde(default)]
    pub skills: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub additional: Vec<String>,
    #[serde(default)]
    pub personal: Personal,
}

/// The default skills table. Single source of truth: referenced by the
/// fallback record and, through it, by the skills page.
pub fn default_skills() -> IndexMap<String, Vec<String>> {
    let mut skills = IndexMap::new();
    skills.insert(
        "Languages".to_string(),
        vec!["Java", "Python", "C", "SQL"]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    skills.insert(
        "Frontend".to_string(),
        vec!["HTML", "CSS"].into_iter().map(String::from).collect(),
    );
    skills.insert(
        "Database".to_string(),
        vec!["MySQL"].into_iter().map(String::from).collect(),
    );
    skills.insert(
        "CS Fundamentals".to_string(),
        vec![
            "Data Structures and Algorithms",
            "DSA",
            "Object Oriented Programming",
            "Computer Networks",
            "Machine Learning basics",
            "UiPath",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    );
    skills
}

impl ResumeRecord {
    /// The hardcoded record used when the structured source is missing or
    /// unparsable. Empty sequences here are tolerated by the generator.
    pub fn fallback() -> Self {
        ResumeRecord {
            name: "Ch. Krishna Kumar".to_string(),
            contact: Contact {
                location: "Sathupally, Telangana".to_string(),
                email: "chettimalakrishna@gmail.com".to_string(),
                phone: "9391454023".to_string(),
                github: "https://github.com/chettimalakrishna-504".to_string(),
            },
            objective: "Computer Science undergrad (GPA 8.35/10) passionate to apply strong \
                        fundamentals in algorithms, data structures, and object-oriented \
                        design, seeking to leverage academic knowledge and practical skills \
                        gained from coursework and online training."
                .to_string(),
            academics: vec![],
            skills: default_skills(),
            projects: vec![],
            certifications: vec![
                "Smart Coder (DSA) — Smart Interviews".to_string(),
                "Problem Solving (Basic) — HackerRank".to_string(),
                "NPTEL Certification in Big Data Computing".to_string(),
                "IIT Madras Certification (EV Vehicle)".to_string(),
                "Trained at SAK Informatics".to_string(),
                "Web Development Certification — Infosys Springboard (and Hackathon Certificate)"
                    .to_string(),
                "Cisco Networking Academy — Programming Essentials in C".to_string(),
            ],
            experience: vec![
                Experience {
                    year: "2023".to_string(),
                    title: "Intruder Detection Robots using Sensors".to_string(),
                    company: "MIST / Diploma Project".to_string(),
                    duration: "~6 months".to_string(),
                    details: vec![
                        "Worked on intruder detection robots using IR sensors and Arduino boards."
                            .to_string(),
                        "Implemented distance sensing, basic control logic, and prototype testing."
                            .to_string(),
                    ],
                },
                Experience {
                    year: "2024".to_string(),
                    title: "EMPLOY SALARY PREDICTION — Team Leader (ML)".to_string(),
                    company: "Project".to_string(),
                    duration: "6+ months".to_string(),
                    details: vec![
                        "Led team to implement a salary prediction system using foundational ML \
                         techniques."
                            .to_string(),
                        "Coordinated data collection, preprocessing, model training and \
                         evaluation."
                            .to_string(),
                    ],
                },
                Experience {
                    year: "2025".to_string(),
                    title: "EMPLOY SALARY PREDICTION — Team Leader (AI & ML)".to_string(),
                    company: "Project".to_string(),
                    duration: "Ongoing".to_string(),
                    details: vec![
                        "Continued leading enhancements to the salary prediction project, \
                         applying AI & ML techniques to improve performance."
                            .to_string(),
                        "Focused on feature engineering, model optimization, and deployment \
                         considerations."
                            .to_string(),
                    ],
                },
            ],
            additional: vec![],
            personal: Personal::default(),
        }
    }

    /// Loads the record from `path`, substituting the fallback on any
    /// failure. Never returns an error: a bad source only affects startup
    /// logging, never end users.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<ResumeRecord>(&raw) {
                Ok(record) => {
                    info!("Loaded resume data from {}", path.display());
                    record
                }
                Err(e) => {
                    warn!(
                        "Resume source {} is malformed ({e}); using built-in record",
                        path.display()
                    );
                    ResumeRecord::fallback()
                }
            },
            Err(e) => {
                warn!(
                    "Resume source {} not readable ({e}); using built-in record",
                    path.display()
                );
                ResumeRecord::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_default_name_and_skills() {
        let record = ResumeRecord::fallback();
        assert_eq!(record.name, "Ch. Krishna Kumar");
        assert_eq!(record.skills, default_skills());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let record = ResumeRecord::load(Path::new("does/not/exist.json"));
        assert_eq!(record.name, ResumeRecord::fallback().name);
        assert_eq!(record.skills, default_skills());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "{ not json").unwrap();
        let record = ResumeRecord::load(&path);
        assert_eq!(record.name, ResumeRecord::fallback().name);
    }

    #[test]
    fn test_partial_source_defaults_to_empty() {
        // Absent keys must yield empty strings/sequences, never an error.
        let record: ResumeRecord = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.contact.email, "");
        assert!(record.academics.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.projects.is_empty());
        assert_eq!(record.personal.address, "");
    }

    #[test]
    fn test_partial_nested_entries_default() {
        let record: ResumeRecord = serde_json::from_str(
            r#"{"academics": [{"title": "B.Tech"}], "projects": [{"title": "X"}]}"#,
        )
        .unwrap();
        assert_eq!(record.academics[0].title, "B.Tech");
        assert_eq!(record.academics[0].gpa, "");
        assert!(record.projects[0].tools.is_empty());
    }

    #[test]
    fn test_serialized_field_names_match_api_contract() {
        let json = serde_json::to_value(ResumeRecord::fallback()).unwrap();
        for key in [
            "name",
            "contact",
            "objective",
            "academics",
            "skills",
            "projects",
            "certifications",
            "experience",
            "additional",
            "personal",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
        assert!(json["contact"].get("github").is_some());
    }

    #[test]
    fn test_skills_preserve_insertion_order() {
        let skills = default_skills();
        let categories: Vec<&str> = skills.keys().map(|s| s.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Languages", "Frontend", "Database", "CS Fundamentals"]
        );
    }
}
