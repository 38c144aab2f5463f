//! Comparison Enhancer Port - Optional narrative enrichment of a comparison.
//!
//! An enhancer receives the finished deterministic comparison and may return
//! richer wording plus a structured analysis block. The comparison never
//! depends on it: callers fall back to the deterministic text on any error.
//!
//! # Overwrite Rules
//!
//! Only these fields may be replaced:
//! - `explanation.summary`
//! - `explanation.optionAnalysis[].{strengths, weaknesses, fitReason}` (matched by option id)
//! - `pivot.statement`
//!
//! Scores, factors and option names in the pivot are never touched.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::analysis::{ComparisonResult, Constraints, PivotResult, TradeOffExplanation};
use crate::domain::foundation::{OptionId, Percentage};

/// Port for narrative enrichment of finished comparisons.
#[async_trait]
pub trait ComparisonEnhancer: Send + Sync {
    /// Produces enhanced content for a comparison.
    async fn enhance(&self, request: EnhancementRequest) -> Result<EnhancedContent, EnhancementError>;

    /// Name of the backing provider, used in logs.
    fn provider_name(&self) -> &str;
}

/// Everything an enhancer may look at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementRequest {
    /// Correlates enhancer calls with comparison logs.
    pub trace_id: Uuid,
    pub constraints: Constraints,
    pub comparison: ComparisonResult,
    pub explanation: TradeOffExplanation,
    pub pivot: PivotResult,
}

impl EnhancementRequest {
    /// Creates a request with a fresh trace id.
    pub fn new(
        constraints: Constraints,
        comparison: ComparisonResult,
        explanation: TradeOffExplanation,
        pivot: PivotResult,
    ) -> Self {
        Self {
            trace_id: Uuid::new_v4(),
            constraints,
            comparison,
            explanation,
            pivot,
        }
    }
}

/// Replacement wording for one option's analysis. `None` keeps the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionNarrative {
    pub option_id: OptionId,
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
    #[serde(default)]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default)]
    pub fit_reason: Option<String>,
}

/// Per-option qualitative notes in the analysis block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionInsight {
    pub option_id: OptionId,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub best_for: String,
}

/// Structured analysis reported alongside an enhanced comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub options: Vec<OptionInsight>,
    pub recommendation: String,
    pub decision_guidance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalized_insights: Option<String>,
    /// Enhancer's self-reported confidence (0-100).
    pub confidence: Percentage,
}

/// Content returned by an enhancer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedContent {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub option_narratives: Vec<OptionNarrative>,
    #[serde(default)]
    pub pivot_statement: Option<String>,
    pub analysis: AiAnalysis,
}

impl EnhancedContent {
    /// Creates content that only carries an analysis block.
    pub fn new(analysis: AiAnalysis) -> Self {
        Self {
            summary: None,
            option_narratives: Vec::new(),
            pivot_statement: None,
            analysis,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_narrative(mut self, narrative: OptionNarrative) -> Self {
        self.option_narratives.push(narrative);
        self
    }

    pub fn with_pivot_statement(mut self, statement: impl Into<String>) -> Self {
        self.pivot_statement = Some(statement.into());
        self
    }

    /// Overwrites the permitted fields in place.
    ///
    /// Narratives for options not present in the explanation are ignored.
    pub fn apply_to(&self, explanation: &mut TradeOffExplanation, pivot: &mut PivotResult) {
        if let Some(summary) = &self.summary {
            explanation.summary = summary.clone();
        }

        for narrative in &self.option_narratives {
            let Some(analysis) = explanation
                .option_analysis
                .iter_mut()
                .find(|a| a.id == narrative.option_id)
            else {
                continue;
            };

            if let Some(strengths) = &narrative.strengths {
                analysis.strengths = strengths.clone();
            }
            if let Some(weaknesses) = &narrative.weaknesses {
                analysis.weaknesses = weaknesses.clone();
            }
            if let Some(fit_reason) = &narrative.fit_reason {
                analysis.fit_reason = fit_reason.clone();
            }
        }

        if let Some(statement) = &self.pivot_statement {
            pivot.statement = statement.clone();
        }
    }
}

/// Errors from enhancement providers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnhancementError {
    /// Provider is unavailable.
    #[error("enhancer unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Request timed out.
    #[error("enhancement timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Provider response could not be understood.
    #[error("parse error: {0}")]
    Parse(String),

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },
}

impl EnhancementError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }
}
