//! Admin notification rendering.
//!
//! Turns a [`Submission`] into the subject line and HTML body shared by every
//! provider. Submitter-controlled values are HTML-escaped; line breaks in the
//! free-text fields become `<br>`.

use std::fmt::Write;

use formpost_common::Submission;

/// Provider-independent notification content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html: String,
}

impl From<&Submission> for Notification {
    fn from(submission: &Submission) -> Self {
        match submission {
            Submission::Subscription {
                email,
                name,
                timestamp,
            } => Self {
                subject: subject_line(&format!("New Subscription: {email}")),
                html: format!(
                    "<h2>New Email Subscription</h2>\n\
                     <p><strong>Email:</strong> {}</p>\n\
                     <p><strong>Name:</strong> {}</p>\n\
                     <p><strong>Timestamp:</strong> {}</p>\n",
                    escape(email),
                    escape(name),
                    escape(timestamp),
                ),
            },
            Submission::Feedback {
                name,
                email,
                message,
                topic_suggestions,
                feedback_type,
                timestamp,
            } => {
                let mut html = format!(
                    "<h2>New Feedback Submission</h2>\n\
                     <p><strong>Name:</strong> {}</p>\n\
                     <p><strong>Email:</strong> {}</p>\n\
                     <p><strong>Feedback Type:</strong> {}</p>\n\
                     <hr>\n\
                     <h3>Message:</h3>\n\
                     <p>{}</p>\n",
                    escape(name),
                    escape(email),
                    escape(feedback_type),
                    multiline(message),
                );

                if !topic_suggestions.is_empty() {
                    let _ = write!(
                        html,
                        "<hr>\n<h3>Topic Suggestions:</h3>\n<p>{}</p>\n",
                        multiline(topic_suggestions)
                    );
                }

                let _ = write!(
                    html,
                    "<hr>\n<p><small>Submitted: {}</small></p>\n",
                    escape(timestamp)
                );

                Self {
                    subject: subject_line(&format!("New Feedback from {name}")),
                    html,
                }
            }
        }
    }
}

/// Escape text for interpolation into HTML element content or attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape and convert line breaks (`\n` or `\r\n`) to `<br>`.
fn multiline(text: &str) -> String {
    escape(text).replace("\r\n", "<br>").replace('\n', "<br>")
}

/// Subjects are single-line header values.
fn subject_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
