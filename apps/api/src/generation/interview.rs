use serde::{Deserialize, Serialize};

use crate::activity::models::InterviewData;
use crate::errors::AppError;
use crate::generation::non_blank;

pub const DEFAULT_INDUSTRY: &str = "General";
pub const DEFAULT_POSITION: &str = "General Role";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPrompt {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub industry: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InterviewQuestions {
    pub questions: Vec<String>,
}

/// Eight practice questions tailored to whichever of job title, company and
/// industry were given. At least one must be present.
pub fn interview_questions(prompt: &InterviewPrompt) -> Result<InterviewQuestions, AppError> {
    let job_title = non_blank(&prompt.job_title);
    let company = non_blank(&prompt.company);
    let industry = non_blank(&prompt.industry);

    if job_title.is_none() && company.is_none() && industry.is_none() {
        return Err(AppError::Validation(
            "Please enter a job title, select an industry, or choose a company.".to_string(),
        ));
    }

    let context = [
        job_title.map(|t| format!("for a {t}")),
        company.map(|c| format!("at {c}")),
        industry.map(|i| format!("in {i}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    let questions = vec![
        format!("Tell me about yourself and your background relevant to this role {context}."),
        match company {
            Some(c) => format!("Why are you interested in working at {c}?"),
            None => "Why are you interested in working in this field?".to_string(),
        },
        match job_title {
            Some(t) => format!("Describe a challenging project you worked on as a {t}."),
            None => "Describe a challenging project you worked on.".to_string(),
        },
        match industry {
            Some(i) => format!("How do you stay current with trends in {i}?"),
            None => "How do you stay current with trends?".to_string(),
        },
        format!("What is your greatest strength and how will it help you succeed {context}?"),
        "Describe a time you had to solve a difficult problem on the job.".to_string(),
        "How do you handle tight deadlines and pressure?".to_string(),
        format!(
            "What questions do you have for us about the {}?",
            job_title.or(industry).unwrap_or("role")
        ),
    ];

    Ok(InterviewQuestions { questions })
}

/// Payload tracked for a generated question set.
pub fn practice_activity(prompt: &InterviewPrompt) -> InterviewData {
    InterviewData {
        industry: Some(non_blank(&prompt.industry).unwrap_or(DEFAULT_INDUSTRY).to_string()),
        position: Some(non_blank(&prompt.job_title).unwrap_or(DEFAULT_POSITION).to_string()),
    }
}
