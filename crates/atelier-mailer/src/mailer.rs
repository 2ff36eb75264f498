//! Background delivery worker and its handle.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::config::EmailConfig;
use crate::job::{DeliveryOutcome, DeliveryReport, EmailJob};

/// Pending-job buffer; enqueue fails (and is logged) when full.
const QUEUE_CAPACITY: usize = 128;

/// Delivery-report buffer. Slow subscribers observe `Lagged`, never block
/// the worker.
const REPORT_CAPACITY: usize = 256;

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Cheaply cloneable handle to the delivery worker.
#[derive(Clone)]
pub struct Mailer {
    queue: mpsc::Sender<EmailJob>,
    reports: broadcast::Sender<DeliveryReport>,
    enabled: bool,
}

impl Mailer {
    /// Start the delivery worker and return its handle plus the join handle
    /// used for shutdown draining.
    ///
    /// With `config: None` the worker consumes jobs without sending and
    /// reports them as [`DeliveryOutcome::Skipped`]. The worker exits once
    /// every `Mailer` clone has been dropped and the queue is drained.
    pub fn spawn(config: Option<EmailConfig>) -> (Self, JoinHandle<()>) {
        let (queue, queue_rx) = mpsc::channel(QUEUE_CAPACITY);
        let (reports, _) = broadcast::channel(REPORT_CAPACITY);
        let enabled = config.is_some();

        let worker = Worker {
            config,
            reports: reports.clone(),
        };
        let handle = tokio::spawn(worker.run(queue_rx));

        (
            Self {
                queue,
                reports,
                enabled,
            },
            handle,
        )
    }

    /// Whether SMTP delivery is configured.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queue a job for delivery. Returns `false` if the queue is full or the
    /// worker has stopped; the approval that triggered the job proceeds
    /// either way.
    pub fn enqueue(&self, job: EmailJob) -> bool {
        match self.queue.try_send(job) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Dropping email job; queue unavailable");
                false
            }
        }
    }

    /// Subscribe to per-job delivery reports.
    pub fn subscribe(&self) -> broadcast::Receiver<DeliveryReport> {
        self.reports.subscribe()
    }
}

struct Worker {
    config: Option<EmailConfig>,
    reports: broadcast::Sender<DeliveryReport>,
}

impl Worker {
    async fn run(self, mut queue: mpsc::Receiver<EmailJob>) {
        while let Some(job) = queue.recv().await {
            let report = self.process(job).await;
            // A send error only means there are zero subscribers.
            let _ = self.reports.send(report);
        }
        tracing::debug!("Email worker stopped");
    }

    async fn process(&self, job: EmailJob) -> DeliveryReport {
        let kind = job.kind();
        let recipient = job.recipient().to_string();

        let outcome = match &self.config {
            None => {
                tracing::debug!(kind, recipient = %recipient, "Email not configured; skipping job");
                DeliveryOutcome::Skipped
            }
            Some(config) => match send(config, &job).await {
                Ok(()) => {
                    tracing::info!(kind, recipient = %recipient, "Notification email sent");
                    DeliveryOutcome::Delivered
                }
                Err(err) => {
                    tracing::error!(kind, recipient = %recipient, error = %err, "Email delivery failed");
                    DeliveryOutcome::Failed(err.to_string())
                }
            },
        };

        DeliveryReport {
            kind,
            recipient,
            outcome,
        }
    }
}

/// Build and send one message over a fresh SMTP connection.
async fn send(config: &EmailConfig, job: &EmailJob) -> Result<(), EmailError> {
    use lettre::{
        message::header::ContentType, transport::smtp::authentication::Credentials,
        AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    };

    let email = Message::builder()
        .from(config.from_address.parse()?)
        .to(job.recipient().parse()?)
        .subject(job.subject())
        .header(ContentType::TEXT_HTML)
        .body(job.html_body())
        .map_err(|e| EmailError::Build(e.to_string()))?;

    let mut transport_builder =
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);

    if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
        transport_builder =
            transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
    }

    transport_builder.build().send(email).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_mailer_reports_skipped() {
        let (mailer, handle) = Mailer::spawn(None);
        assert!(!mailer.is_enabled());

        let mut reports = mailer.subscribe();
        assert!(mailer.enqueue(EmailJob::ContactApproved {
            to: "someone@example.test".into(),
            name: "Someone".into(),
        }));

        let report = reports.recv().await.unwrap();
        assert_eq!(report.kind, "contact_approved");
        assert_eq!(report.recipient, "someone@example.test");
        assert_eq!(report.outcome, DeliveryOutcome::Skipped);

        drop(mailer);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn worker_exits_when_all_handles_drop() {
        let (mailer, handle) = Mailer::spawn(None);
        let clone = mailer.clone();
        drop(mailer);
        drop(clone);
        handle.await.unwrap();
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn email_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = EmailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
