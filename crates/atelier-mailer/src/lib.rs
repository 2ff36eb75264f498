//! Transactional email for approval notifications.
//!
//! The mailer runs as a single background worker consuming an in-process job
//! queue. Handlers enqueue an [`EmailJob`] and move on; the worker publishes
//! a [`DeliveryReport`] per job on a broadcast channel so interested parties
//! (tests, future audit hooks) can observe outcomes. Delivery failures never
//! affect the state transition that triggered the email.
//!
//! Configuration is loaded from environment variables; when `SMTP_HOST` is
//! unset the worker still consumes jobs but reports them as skipped.

pub mod config;
pub mod job;
pub mod mailer;

pub use config::EmailConfig;
pub use job::{DeliveryOutcome, DeliveryReport, EmailJob};
pub use mailer::{EmailError, Mailer};
