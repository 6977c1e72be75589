//! Shared test helpers: router construction with mailer doubles
//! injected through the `Mailer` seam.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use portfolio::config::{Config, EmailConfig, ObservabilityConfig, ServerConfig};
use portfolio::email::Mailer;
use portfolio::routes::{self, AppState};

pub const TEST_INBOX: &str = "inbox@test.local";

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

/// Mailer double that records every send and always succeeds.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, html: &str, plain: &str) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
            plain: plain.to_string(),
        });
        Ok(())
    }
}

/// Mailer double that rejects every send, standing in for a provider
/// outage.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _html: &str, _plain: &str) -> anyhow::Result<()> {
        anyhow::bail!("smtp relay refused the connection")
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig::default(),
        email: EmailConfig {
            contact_address: TEST_INBOX.to_string(),
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(mailer: Arc<dyn Mailer>) -> Router {
    let state = AppState {
        config: test_config(),
        mailer,
    };

    routes::router(state)
}
