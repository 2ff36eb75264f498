//! Email jobs and their delivery reports.

/// Signature line appended to every notification body.
const SIGNATURE: &str = "Atelier School of Design";

/// A queued notification email.
#[derive(Debug, Clone)]
pub enum EmailJob {
    /// Sent when an admission form transitions to approved.
    AdmissionApproved {
        to: String,
        name: String,
        course: String,
        state: String,
        district: String,
        city: String,
    },
    /// Sent when a contact request transitions to approved.
    ContactApproved { to: String, name: String },
}

impl EmailJob {
    /// Stable job kind for logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            EmailJob::AdmissionApproved { .. } => "admission_approved",
            EmailJob::ContactApproved { .. } => "contact_approved",
        }
    }

    /// Destination address.
    pub fn recipient(&self) -> &str {
        match self {
            EmailJob::AdmissionApproved { to, .. } => to,
            EmailJob::ContactApproved { to, .. } => to,
        }
    }

    pub fn subject(&self) -> &'static str {
        match self {
            EmailJob::AdmissionApproved { .. } => "Admission Approved",
            EmailJob::ContactApproved { .. } => "Contact Form Approved",
        }
    }

    /// HTML message body.
    pub fn html_body(&self) -> String {
        match self {
            EmailJob::AdmissionApproved {
                name,
                course,
                state,
                district,
                city,
                ..
            } => format!(
                "<h2>Admission Approved</h2>\
                 <p>Dear {name},</p>\
                 <p>Congratulations! Your admission form has been approved.</p>\
                 <p>Course: <strong>{course}</strong></p>\
                 <p>State: <strong>{state}</strong></p>\
                 <p>District: <strong>{district}</strong></p>\
                 <p>City: <strong>{city}</strong></p>\
                 <br/>\
                 <p>We will contact you soon with further details.</p>\
                 <br/>\
                 <p>Best regards,</p>\
                 <p>{SIGNATURE}</p>"
            ),
            EmailJob::ContactApproved { name, .. } => format!(
                "<h2>Contact Form Approved</h2>\
                 <p>Dear {name},</p>\
                 <p>Thank you for reaching out. We have received your message and \
                 will contact you soon.</p>\
                 <br/>\
                 <p>Best regards,</p>\
                 <p>{SIGNATURE}</p>"
            ),
        }
    }
}

/// What happened to one queued job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// Email is not configured; the job was consumed without sending.
    Skipped,
    Failed(String),
}

/// Per-job outcome published on the mailer's broadcast channel.
#[derive(Debug, Clone)]
pub struct DeliveryReport {
    pub kind: &'static str,
    pub recipient: String,
    pub outcome: DeliveryOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admission_body_includes_course_and_location() {
        let job = EmailJob::AdmissionApproved {
            to: "a@b.test".into(),
            name: "Asha".into(),
            course: "Interior Design".into(),
            state: "Kerala".into(),
            district: "Ernakulam".into(),
            city: "Kochi".into(),
        };
        let body = job.html_body();
        assert!(body.contains("Dear Asha"));
        assert!(body.contains("Interior Design"));
        assert!(body.contains("Ernakulam"));
        assert_eq!(job.subject(), "Admission Approved");
        assert_eq!(job.kind(), "admission_approved");
    }

    #[test]
    fn contact_body_addresses_the_sender() {
        let job = EmailJob::ContactApproved {
            to: "c@d.test".into(),
            name: "Ravi".into(),
        };
        assert!(job.html_body().contains("Dear Ravi"));
        assert_eq!(job.recipient(), "c@d.test");
    }
}
