use serde::Deserialize;
use validator::Validate;

const SUBJECT_FALLBACK: &str = "No Subject";

/// A contact form submission, built fresh per request and discarded
/// once the relay call resolves. Never persisted.
///
/// Only presence is validated server-side; the browser's native email
/// input is the sole format hint for the address.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    // Required fields default to empty on absence so that absent and
    // empty are rejected identically by the presence check.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactMessage {
    /// Subject line of the outbound email, with a fallback literal when
    /// the submitter left the field empty.
    pub fn subject_line(&self) -> String {
        let subject = if self.subject.is_empty() {
            SUBJECT_FALLBACK
        } else {
            self.subject.as_str()
        };

        format!("Portfolio Contact: {subject}")
    }

    /// Submitter's display name; no trailing space when the last name
    /// is absent.
    pub fn sender_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn html_body(&self) -> String {
        format!(
            "<p><strong>From:</strong> {} ({})</p><p>{}</p>",
            self.sender_name(),
            self.email,
            self.message
        )
    }

    pub fn text_body(&self) -> String {
        format!(
            "From: {} ({})\n\n{}\n",
            self.sender_name(),
            self.email,
            self.message
        )
    }
}
