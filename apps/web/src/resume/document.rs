//! Plain-text resume document generator.
//!
//! Turns a [`ResumeRecord`] into the downloadable text document with a fixed
//! section order: header, Objective, Academics, Technical Skills, Projects,
//! Certifications, Experience, Additional, Personal Details, Declaration.
//!
//! The formatting rules are part of the download contract and must not
//! drift: contact segments stay in place even when empty, every section
//! title is underlined with dashes of the same length, and lines are joined
//! with a single `\n`. The generator never fails: missing fields degrade
//! to empty strings and empty sections keep their title skeleton.

use crate::resume::record::ResumeRecord;

const DECLARATION: &str =
    "I hereby declare that the information given above is true to the best of my knowledge.";

/// Renders the full plain-text document.
pub fn render_plain_text(r: &ResumeRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Header / contact
    lines.push(r.name.clone());
    let c = &r.contact;
    lines.push(format!(
        "{} | {} | {} | {}",
        c.location, c.email, c.phone, c.github
    ));
    lines.push(String::new());

    push_section_title(&mut lines, "Objective");
    lines.push(r.objective.clone());
    lines.push(String::new());

    push_section_title(&mut lines, "Academics");
    for a in &r.academics {
        lines.push(format!("{} — {} {}", a.title, a.institution, a.date));
        lines.push(format!("  - {}", a.gpa));
        if !a.notes.is_empty() {
            lines.push(format!("  - {}", a.notes));
        }
    }
    lines.push(String::new());

    push_section_title(&mut lines, "Technical Skills");
    for (category, items) in &r.skills {
        lines.push(format!("{}: {}", category, items.join(", ")));
    }
    lines.push(String::new());

    push_section_title(&mut lines, "Projects");
    for p in &r.projects {
        lines.push(p.title.clone());
        lines.push(format!("  {}", p.description));
        if !p.tools.is_empty() {
            lines.push(format!("  Tools Used: {}", p.tools.join(", ")));
        }
        // blank line between projects
        lines.push(String::new());
    }
    lines.push(String::new());

    push_section_title(&mut lines, "Certifications");
    for cert in &r.certifications {
        lines.push(format!("- {}", cert));
    }
    lines.push(String::new());

    push_section_title(&mut lines, "Experience");
    for e in &r.experience {
        lines.push(format!("{} — {}", e.title, e.company));
        for d in &e.details {
            lines.push(format!("  - {}", d));
        }
    }
    lines.push(String::new());

    push_section_title(&mut lines, "Additional");
    for note in &r.additional {
        lines.push(format!("- {}", note));
    }
    lines.push(String::new());

    push_section_title(&mut lines, "Personal Details");
    let p = &r.personal;
    lines.push(format!("Name: {}", p.name));
    lines.push(format!("Father: {}", p.father));
    lines.push(format!("Mother: {}", p.mother));
    lines.push(format!("DOB: {}", p.dob));
    lines.push(format!("Address: {}", p.address));
    lines.push(String::new());

    push_section_title(&mut lines, "Declaration");
    lines.push(DECLARATION.to_string());
    lines.push(p.name.clone());

    lines.join("\n")
}

/// Title line followed by a dash underline of equal length.
fn push_section_title(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(title.chars().count()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::record::{Academic, Contact, Personal, Project, ResumeRecord};

    const SECTION_TITLES: &[&str] = &[
        "Objective",
        "Academics",
        "Technical Skills",
        "Projects",
        "Certifications",
        "Experience",
        "Additional",
        "Personal Details",
        "Declaration",
    ];

    fn full_record() -> ResumeRecord {
        let mut record = ResumeRecord::fallback();
        record.academics = vec![Academic {
            title: "B.Tech CSE".to_string(),
            institution: "MIST".to_string(),
            date: "2022-2026".to_string(),
            gpa: "GPA 8.35/10".to_string(),
            notes: "Coursework in DSA and networks".to_string(),
        }];
        record.projects = vec![
            Project {
                title: "Salary Prediction".to_string(),
                description: "ML pipeline for salary estimates".to_string(),
                tools: vec!["Python".to_string(), "scikit-learn".to_string()],
            },
            Project {
                title: "Detection Robots".to_string(),
                description: "IR-sensor vehicles".to_string(),
                tools: vec![],
            },
        ];
        record.additional = vec!["Open to relocation".to_string()];
        record.personal = Personal {
            name: "Ch. Krishna Kumar".to_string(),
            father: "F".to_string(),
            mother: "M".to_string(),
            dob: "2004-01-01".to_string(),
            address: "Sathupally".to_string(),
        };
        record
    }

    /// A section title line immediately followed by its dash underline.
    fn count_sections(doc: &str, title: &str) -> usize {
        let lines: Vec<&str> = doc.lines().collect();
        lines
            .windows(2)
            .filter(|w| w[0] == title && w[1] == "-".repeat(title.chars().count()))
            .count()
    }

    #[test]
    fn test_every_section_title_appears_exactly_once() {
        let doc = render_plain_text(&full_record());
        for title in SECTION_TITLES {
            assert_eq!(count_sections(&doc, title), 1, "section {title}");
        }
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let doc = render_plain_text(&full_record());
        let mut last = 0;
        for title in SECTION_TITLES {
            let needle = format!("{}\n{}", title, "-".repeat(title.chars().count()));
            let pos = doc[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("section {title} missing or out of order"));
            last += pos + needle.len();
        }
    }

    #[test]
    fn test_header_lines() {
        let doc = render_plain_text(&ResumeRecord::fallback());
        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some("Ch. Krishna Kumar"));
        assert_eq!(
            lines.next(),
            Some(
                "Sathupally, Telangana | chettimalakrishna@gmail.com | 9391454023 | \
                 https://github.com/chettimalakrishna-504"
            )
        );
        assert_eq!(lines.next(), Some(""));
    }

    #[test]
    fn test_contact_line_keeps_empty_segments() {
        // Empty fields yield empty segments, not omitted ones.
        let record = ResumeRecord {
            name: "X".to_string(),
            contact: Contact {
                email: "x@example.com".to_string(),
                ..Contact::default()
            },
            ..ResumeRecord::default()
        };
        let doc = render_plain_text(&record);
        assert_eq!(doc.lines().nth(1), Some(" | x@example.com |  | "));
    }

    #[test]
    fn test_empty_sequences_keep_section_skeleton() {
        // Empty record: all titles present, no entry lines underneath.
        let doc = render_plain_text(&ResumeRecord::default());
        for title in SECTION_TITLES {
            assert_eq!(count_sections(&doc, title), 1, "section {title}");
        }
        let lines: Vec<&str> = doc.lines().collect();
        let academics = lines.iter().position(|l| *l == "Academics").unwrap();
        // title, underline, then straight to the separator blank line
        assert_eq!(lines[academics + 1], "---------");
        assert_eq!(lines[academics + 2], "");
    }

    #[test]
    fn test_academic_entry_lines() {
        let doc = render_plain_text(&full_record());
        assert!(doc.contains("B.Tech CSE — MIST 2022-2026\n  - GPA 8.35/10\n  - Coursework"));
    }

    #[test]
    fn test_academic_notes_line_omitted_when_empty() {
        let mut record = full_record();
        record.academics[0].notes = String::new();
        let doc = render_plain_text(&record);
        assert!(doc.contains("B.Tech CSE — MIST 2022-2026\n  - GPA 8.35/10\n"));
        assert!(!doc.contains("Coursework"));
    }

    #[test]
    fn test_skills_lines_are_comma_joined_per_category() {
        let doc = render_plain_text(&ResumeRecord::fallback());
        assert!(doc.contains("Languages: Java, Python, C, SQL"));
        assert!(doc.contains("Frontend: HTML, CSS"));
    }

    #[test]
    fn test_project_block_formatting() {
        let doc = render_plain_text(&full_record());
        assert!(doc.contains(
            "Salary Prediction\n  ML pipeline for salary estimates\n  Tools Used: Python, scikit-learn\n"
        ));
        // tools line omitted when the project has none
        assert!(doc.contains("Detection Robots\n  IR-sensor vehicles\n\n"));
    }

    #[test]
    fn test_projects_are_blank_line_separated() {
        let doc = render_plain_text(&full_record());
        let lines: Vec<&str> = doc.lines().collect();
        let first = lines.iter().position(|l| *l == "Salary Prediction").unwrap();
        // title, description, tools, separator blank
        assert_eq!(lines[first + 3], "");
        assert_eq!(lines[first + 4], "Detection Robots");
    }

    #[test]
    fn test_certifications_and_additional_are_dash_lists() {
        let doc = render_plain_text(&full_record());
        assert!(doc.contains("- Smart Coder (DSA) — Smart Interviews"));
        assert!(doc.contains("- Open to relocation"));
    }

    #[test]
    fn test_experience_entries() {
        let doc = render_plain_text(&ResumeRecord::fallback());
        assert!(doc.contains(
            "Intruder Detection Robots using Sensors — MIST / Diploma Project\n  - Worked on"
        ));
    }

    #[test]
    fn test_personal_details_fixed_labels() {
        let doc = render_plain_text(&full_record());
        assert!(doc.contains(
            "Personal Details\n----------------\nName: Ch. Krishna Kumar\nFather: F\nMother: M\nDOB: 2004-01-01\nAddress: Sathupally"
        ));
    }

    #[test]
    fn test_personal_details_empty_values() {
        let doc = render_plain_text(&ResumeRecord::default());
        assert!(doc.contains("Name: \nFather: \nMother: \nDOB: \nAddress: "));
    }

    #[test]
    fn test_declaration_closes_with_personal_name() {
        let doc = render_plain_text(&full_record());
        assert!(doc.ends_with(&format!("{}\nCh. Krishna Kumar", DECLARATION)));
    }

    #[test]
    fn test_lines_joined_with_single_newline() {
        let doc = render_plain_text(&full_record());
        assert!(!doc.contains("\r\n"));
        // the final line is the personal name, with no trailing newline
        assert!(!doc.ends_with('\n'));
    }
}
