// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock classifier providers for deterministic testing.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use nivaran_core::{ClassifierProvider, NivaranError};

/// A mock provider that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty, a
/// default two-field JSON verdict is returned. An optional artificial
/// delay lets deadline handling be tested without a slow network.
pub struct MockClassifierProvider {
    responses: Mutex<VecDeque<String>>,
    delay: Mutex<Option<Duration>>,
}

impl MockClassifierProvider {
    /// Create a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            delay: Mutex::new(None),
        }
    }

    /// Create a mock provider pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            delay: Mutex::new(None),
        }
    }

    /// Add a response to the end of the queue.
    pub fn queue_response(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(text.into());
    }

    /// Sleep this long before answering each call.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    fn next_response(&self) -> String {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| r#"{"priority": "low", "department": "Municipality"}"#.to_string())
    }
}

impl Default for MockClassifierProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassifierProvider for MockClassifierProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn analyze(&self, _prompt: &str) -> Result<String, NivaranError> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.next_response())
    }
}

/// A provider that always fails with the given message.
pub struct FailingClassifierProvider {
    message: String,
}

impl FailingClassifierProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ClassifierProvider for FailingClassifierProvider {
    fn name(&self) -> &str {
        "failing-provider"
    }

    async fn analyze(&self, _prompt: &str) -> Result<String, NivaranError> {
        Err(NivaranError::Provider {
            message: self.message.clone(),
            source: None,
        })
    }
}
