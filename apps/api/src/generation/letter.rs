use serde::Deserialize;

use crate::activity::models::LetterData;
use crate::generation::non_blank;

pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNKNOWN_POSITION: &str = "Unknown Position";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LetterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub recipient: String,
    pub company: String,
    pub job_title: String,
    pub letter_body: String,
}

/// Payload tracked when a letter is saved. Letters themselves are not stored.
pub fn saved_letter_activity(form: &LetterForm) -> LetterData {
    LetterData {
        company: Some(non_blank(&form.company).unwrap_or(UNKNOWN_COMPANY).to_string()),
        position: Some(non_blank(&form.job_title).unwrap_or(UNKNOWN_POSITION).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_letter_uses_form_values() {
        let form = LetterForm {
            company: "Innovatech".to_string(),
            job_title: "Product Manager".to_string(),
            ..LetterForm::default()
        };
        let tracked = saved_letter_activity(&form);
        assert_eq!(tracked.company.as_deref(), Some("Innovatech"));
        assert_eq!(tracked.position.as_deref(), Some("Product Manager"));
    }

    #[test]
    fn test_saved_letter_defaults() {
        let tracked = saved_letter_activity(&LetterForm::default());
        assert_eq!(tracked.company.as_deref(), Some("Unknown Company"));
        assert_eq!(tracked.position.as_deref(), Some("Unknown Position"));
    }
}
