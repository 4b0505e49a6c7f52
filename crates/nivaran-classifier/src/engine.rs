// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification engine: model provider with deterministic fallback.
//!
//! The engine asks the configured [`ClassifierProvider`] for a verdict under
//! a deadline, parses its JSON output strictly, and on any failure (timeout,
//! transport error, malformed output, unknown department) degrades to the
//! keyword rule table. Classification therefore always yields a verdict.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use nivaran_core::{
    Classification, ClassificationSource, ClassifierProvider, Department, NivaranError, Priority,
};

use crate::{prompt, rules};

/// Classifies complaint text via a model provider, falling back to keyword
/// rules when the provider cannot deliver a usable verdict.
pub struct ComplaintClassifier {
    provider: Arc<dyn ClassifierProvider>,
    timeout: Duration,
}

/// The two-field verdict the model is contracted to return.
#[derive(Debug, Deserialize)]
struct ModelVerdict {
    priority: String,
    department: String,
}

impl ComplaintClassifier {
    pub fn new(provider: Arc<dyn ClassifierProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Classify complaint text. Infallible: provider failures degrade to the
    /// keyword fallback and are reported via [`ClassificationSource`].
    pub async fn classify(&self, text: &str) -> Classification {
        match self.classify_with_provider(text).await {
            Ok(classification) => {
                debug!(
                    provider = self.provider.name(),
                    priority = %classification.priority,
                    department = %classification.department,
                    "model classification succeeded"
                );
                classification
            }
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "model classification failed, using keyword fallback"
                );
                let (priority, department) = rules::classify(text);
                Classification {
                    priority,
                    department,
                    source: ClassificationSource::Fallback,
                }
            }
        }
    }

    async fn classify_with_provider(&self, text: &str) -> Result<Classification, NivaranError> {
        let prompt = prompt::build_prompt(text);
        let raw = tokio::time::timeout(self.timeout, self.provider.analyze(&prompt))
            .await
            .map_err(|_| NivaranError::Timeout {
                duration: self.timeout,
            })??;
        parse_verdict(&raw)
    }
}

/// Parse a raw model response into a typed classification.
///
/// Tolerates markdown code fences around the JSON but nothing else: both
/// fields must be present and spell a known priority and department.
fn parse_verdict(raw: &str) -> Result<Classification, NivaranError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(NivaranError::Provider {
            message: "empty model response".into(),
            source: None,
        });
    }

    let verdict: ModelVerdict =
        serde_json::from_str(&cleaned).map_err(|err| NivaranError::Provider {
            message: format!("unparsable model response: {err}"),
            source: Some(Box::new(err)),
        })?;

    let priority = Priority::from_str(verdict.priority.trim().to_lowercase().as_str()).map_err(
        |_| NivaranError::Provider {
            message: format!("unknown priority `{}`", verdict.priority),
            source: None,
        },
    )?;
    let department =
        Department::from_str(verdict.department.trim()).map_err(|_| NivaranError::Provider {
            message: format!("unknown department `{}`", verdict.department),
            source: None,
        })?;

    Ok(Classification {
        priority,
        department,
        source: ClassificationSource::Ai,
    })
}

/// Strip markdown code fence markers the model sometimes wraps JSON in.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
