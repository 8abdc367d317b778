//! Notification Recipient Resolver (Use Case)
//!
//! Recipients are the active students common to the given teachers plus
//! the active students @-mentioned in the notification text.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use roster::{StudentRepository, StudentStatus};

use super::{distinct_emails, ServiceError};

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+@\S+").expect("valid mention regex"));

/// Email-like tokens in `text`, in order of appearance
pub fn extract_mentions(text: &str) -> Vec<String> {
    MENTION_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Application service for notification delivery lists
pub struct NotificationService<S: StudentRepository + ?Sized> {
    repo: Arc<S>,
}

impl<S: StudentRepository + ?Sized> NotificationService<S> {
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    /// Deduplicated active recipients: teacher roster first, then mentions
    pub async fn resolve_recipients(
        &self,
        teachers: &[String],
        notification: &str,
    ) -> Result<Vec<String>, ServiceError> {
        let teachers = distinct_emails(teachers);
        if teachers.is_empty() || notification.is_empty() {
            return Err(
                ServiceError::NotificationResolution.reject("missing teacher or notification")
            );
        }

        let roster = self
            .repo
            .find_by_teachers(&teachers)
            .await
            .map_err(|e| ServiceError::NotificationResolution.wrap(e))?;

        // Queried even when nothing is mentioned; the store answers empty.
        let mentions = extract_mentions(notification);
        let mentioned = self
            .repo
            .filter_by_status(&mentions, StudentStatus::Active)
            .await
            .map_err(|e| ServiceError::NotificationResolution.wrap(e))?;

        let mut seen = HashSet::new();
        let recipients: Vec<String> = roster
            .into_iter()
            .filter(|entry| entry.is_active())
            .map(|entry| entry.email)
            .chain(mentioned)
            .filter(|email| seen.insert(email.clone()))
            .collect();

        tracing::debug!(
            "Resolved {} recipients ({} mentions) for {} teachers",
            recipients.len(),
            mentions.len(),
            teachers.len()
        );

        Ok(recipients)
    }
}
