//! Stub generators for exercising the composer without a network.

use std::time::Duration;

use async_trait::async_trait;

use common::error::AppError;

use crate::generator::AnswerGenerator;

/// Returns a canned reply immediately.
pub struct StubGenerator {
    pub reply: String,
}

impl StubGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl AnswerGenerator for StubGenerator {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, AppError> {
        Ok(self.reply.clone())
    }
}

/// Always fails, simulating a provider outage.
pub struct FailingGenerator;

#[async_trait]
impl AnswerGenerator for FailingGenerator {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, AppError> {
        Err(AppError::Generation("stubbed generation failure".into()))
    }
}

/// Sleeps before replying, for exercising the timeout path.
pub struct SlowGenerator {
    pub delay: Duration,
    pub reply: String,
}

#[async_trait]
impl AnswerGenerator for SlowGenerator {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, AppError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.reply.clone())
    }
}
