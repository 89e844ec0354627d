use serde::{Deserialize, Serialize};

use crate::activity::models::ResumeData;
use crate::errors::AppError;
use crate::generation::non_blank;

pub const CUSTOM_TEMPLATE: &str = "Custom";
pub const GENERATED_TEMPLATE: &str = "AI Generated";

/// The resume maker form. Also the shape of a generated draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub job_title: String,
    pub company: String,
    pub work_desc: String,
    pub school: String,
    pub degree: String,
    pub edu_desc: String,
    pub skills: String,
}

/// Fills summary, work and education descriptions from the form.
/// Name, job title and skills are required.
pub fn generate_resume(form: &ResumeForm) -> Result<ResumeForm, AppError> {
    let (Some(_), Some(job_title), Some(skills)) = (
        non_blank(&form.name),
        non_blank(&form.job_title),
        non_blank(&form.skills),
    ) else {
        return Err(AppError::Validation(
            "Please fill in your name, job title, and skills before generating.".to_string(),
        ));
    };
    let company = non_blank(&form.company);
    let location = non_blank(&form.location).unwrap_or("your area");

    Ok(ResumeForm {
        summary: format!(
            "Experienced {job_title} with a passion for innovation and a proven track record \
             at {}. Skilled in {skills}. Based in {location}.",
            company.unwrap_or("top companies")
        ),
        work_desc: format!(
            "- Led successful projects as a {job_title} at {}\n\
             - Collaborated with cross-functional teams\n\
             - Achieved measurable results in key performance areas",
            company.unwrap_or("your company")
        ),
        edu_desc: "Graduated with honors. Relevant coursework and extracurriculars in your field."
            .to_string(),
        ..form.clone()
    })
}

/// Payload tracked for a generated draft.
pub fn generated_resume_activity(draft: &ResumeForm) -> ResumeData {
    ResumeData {
        title: Some(format!("{}'s AI Resume", draft.name.trim())),
        template: Some(GENERATED_TEMPLATE.to_string()),
    }
}

/// Payload tracked when the form is saved as written.
pub fn saved_resume_activity(form: &ResumeForm) -> ResumeData {
    let title = match non_blank(&form.name) {
        Some(name) => format!("{name}'s Resume"),
        None => "Untitled Resume".to_string(),
    };
    ResumeData {
        title: Some(title),
        template: Some(CUSTOM_TEMPLATE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ResumeForm {
        ResumeForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            job_title: "Backend Developer".to_string(),
            company: "CodeCraft".to_string(),
            location: "New York".to_string(),
            skills: "Rust, SQL".to_string(),
            summary: "to be replaced".to_string(),
            ..ResumeForm::default()
        }
    }

    #[test]
    fn test_generated_sections() {
        let draft = generate_resume(&form()).unwrap();
        assert_eq!(
            draft.summary,
            "Experienced Backend Developer with a passion for innovation and a proven track \
             record at CodeCraft. Skilled in Rust, SQL. Based in New York."
        );
        assert_eq!(
            draft.work_desc,
            "- Led successful projects as a Backend Developer at CodeCraft\n\
             - Collaborated with cross-functional teams\n\
             - Achieved measurable results in key performance areas"
        );
        assert_eq!(
            draft.edu_desc,
            "Graduated with honors. Relevant coursework and extracurriculars in your field."
        );
        assert_eq!(draft.email, "ada@example.com");
    }

    #[test]
    fn test_missing_company_and_location_use_placeholders() {
        let input = ResumeForm {
            company: String::new(),
            location: " ".to_string(),
            ..form()
        };
        let draft = generate_resume(&input).unwrap();
        assert!(draft.summary.contains("track record at top companies."));
        assert!(draft.summary.ends_with("Based in your area."));
        assert!(draft
            .work_desc
            .starts_with("- Led successful projects as a Backend Developer at your company\n"));
    }

    #[test]
    fn test_required_fields() {
        for input in [
            ResumeForm {
                name: String::new(),
                ..form()
            },
            ResumeForm {
                job_title: "  ".to_string(),
                ..form()
            },
            ResumeForm {
                skills: String::new(),
                ..form()
            },
        ] {
            assert!(matches!(generate_resume(&input), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_tracked_titles() {
        let generated = generated_resume_activity(&form());
        assert_eq!(generated.title.as_deref(), Some("Ada's AI Resume"));
        assert_eq!(generated.template.as_deref(), Some("AI Generated"));

        let saved = saved_resume_activity(&form());
        assert_eq!(saved.title.as_deref(), Some("Ada's Resume"));
        assert_eq!(saved.template.as_deref(), Some("Custom"));

        let untitled = saved_resume_activity(&ResumeForm::default());
        assert_eq!(untitled.title.as_deref(), Some("Untitled Resume"));
    }
}
