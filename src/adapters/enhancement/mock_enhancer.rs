//! Mock Comparison Enhancer for testing and offline runs.
//!
//! Provides a configurable implementation of the ComparisonEnhancer port,
//! allowing comparisons to exercise the enhancement path without calling
//! a real generator.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order)
//! - Simulated delays for timeout testing
//! - Error injection for fallback testing
//! - Call tracking for verification
//!
//! When the queue is empty the mock derives content from the request itself:
//! strengths become pros, weaknesses become cons.
//!
//! # Example
//!
//! ```ignore
//! let enhancer = MockComparisonEnhancer::new()
//!     .with_error(MockEnhancementError::Unavailable { message: "down".into() })
//!     .with_delay(Duration::from_millis(50));
//!
//! let result = enhancer.enhance(request).await;
//! assert!(result.is_err());
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::Percentage;
use crate::ports::{
    AiAnalysis, ComparisonEnhancer, EnhancedContent, EnhancementError, EnhancementRequest,
    OptionInsight,
};

/// Confidence reported by derived (non-queued) responses.
const DERIVED_CONFIDENCE: u8 = 60;

/// Mock enhancer for testing.
#[derive(Debug, Clone, Default)]
pub struct MockComparisonEnhancer {
    responses: Arc<Mutex<VecDeque<MockEnhancement>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<EnhancementRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockEnhancement {
    /// Return this content.
    Content(EnhancedContent),
    /// Return an error.
    Error(MockEnhancementError),
}

/// Mock error types for testing fallback handling.
#[derive(Debug, Clone)]
pub enum MockEnhancementError {
    Unavailable { message: String },
    Timeout { timeout_secs: u64 },
    Parse { message: String },
    RateLimited { retry_after_secs: u32 },
}

impl From<MockEnhancementError> for EnhancementError {
    fn from(err: MockEnhancementError) -> Self {
        match err {
            MockEnhancementError::Unavailable { message } => EnhancementError::unavailable(message),
            MockEnhancementError::Timeout { timeout_secs } => EnhancementError::timeout(timeout_secs),
            MockEnhancementError::Parse { message } => EnhancementError::parse(message),
            MockEnhancementError::RateLimited { retry_after_secs } => {
                EnhancementError::rate_limited(retry_after_secs)
            }
        }
    }
}

impl MockComparisonEnhancer {
    /// Creates a new mock enhancer with no queued responses and no delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds content to the response queue.
    pub fn with_content(self, content: EnhancedContent) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockEnhancement::Content(content));
        self
    }

    /// Adds an error to the response queue.
    pub fn with_error(self, error: MockEnhancementError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockEnhancement::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this enhancer.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<EnhancementRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> Option<MockEnhancement> {
        self.responses.lock().unwrap().pop_front()
    }

    /// Builds content straight from the deterministic explanation.
    fn derive_content(request: &EnhancementRequest) -> EnhancedContent {
        let options = request
            .explanation
            .option_analysis
            .iter()
            .map(|analysis| OptionInsight {
                option_id: analysis.id.clone(),
                pros: analysis.strengths.clone(),
                cons: analysis.weaknesses.clone(),
                best_for: analysis.fit_reason.clone(),
            })
            .collect();

        EnhancedContent::new(AiAnalysis {
            options,
            recommendation: request.pivot.statement.clone(),
            decision_guidance: request.explanation.summary.clone(),
            personalized_insights: None,
            confidence: Percentage::new(DERIVED_CONFIDENCE),
        })
    }
}

#[async_trait]
impl ComparisonEnhancer for MockComparisonEnhancer {
    async fn enhance(&self, request: EnhancementRequest) -> Result<EnhancedContent, EnhancementError> {
        self.calls.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            Some(MockEnhancement::Content(content)) => Ok(content),
            Some(MockEnhancement::Error(err)) => Err(err.into()),
            None => Ok(Self::derive_content(&request)),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{
        ComparisonResult, Constraints, OptionAnalysis, PivotResult, TradeOffExplanation,
    };
    use crate::domain::foundation::{OptionId, ScalabilityPriority};

    fn request() -> EnhancementRequest {
        let analysis = OptionAnalysis {
            id: OptionId::new("pg").unwrap(),
            name: "PostgreSQL".to_string(),
            strengths: vec!["favorable cost model".to_string()],
            weaknesses: vec!["limited scalability".to_string()],
            fit_score: Percentage::new(64),
            fit_reason: "Good overall fit".to_string(),
        };

        EnhancementRequest::new(
            Constraints::new(0, 100, ScalabilityPriority::Low, vec![]).unwrap(),
            ComparisonResult {
                options: vec![],
                matrix: Default::default(),
            },
            TradeOffExplanation {
                summary: "summary".to_string(),
                option_analysis: vec![analysis],
                constraint_impact: vec![],
            },
            PivotResult::unavailable(),
        )
    }

    fn queued_content() -> EnhancedContent {
        EnhancedContent::new(AiAnalysis {
            options: vec![],
            recommendation: "queued".to_string(),
            decision_guidance: "g".to_string(),
            personalized_insights: Some("insight".to_string()),
            confidence: Percentage::new(90),
        })
        .with_summary("queued summary")
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let enhancer = MockComparisonEnhancer::new()
            .with_content(queued_content())
            .with_error(MockEnhancementError::Unavailable {
                message: "down".to_string(),
            });

        let first = enhancer.enhance(request()).await.unwrap();
        assert_eq!(first.summary.as_deref(), Some("queued summary"));

        let second = enhancer.enhance(request()).await;
        assert!(matches!(second, Err(EnhancementError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn empty_queue_derives_content_from_request() {
        let enhancer = MockComparisonEnhancer::new();
        let content = enhancer.enhance(request()).await.unwrap();

        assert!(content.summary.is_none());
        assert!(content.pivot_statement.is_none());
        assert_eq!(content.analysis.options[0].pros, vec!["favorable cost model"]);
        assert_eq!(content.analysis.options[0].cons, vec!["limited scalability"]);
        assert_eq!(content.analysis.decision_guidance, "summary");
        assert_eq!(content.analysis.confidence.value(), DERIVED_CONFIDENCE);
    }

    #[tokio::test]
    async fn tracks_calls() {
        let enhancer = MockComparisonEnhancer::new();
        let req = request();
        let trace_id = req.trace_id;

        enhancer.enhance(req).await.unwrap();

        assert_eq!(enhancer.call_count(), 1);
        assert_eq!(enhancer.get_calls()[0].trace_id, trace_id);
    }

    #[tokio::test]
    async fn mock_errors_convert_to_port_errors() {
        let enhancer = MockComparisonEnhancer::new()
            .with_error(MockEnhancementError::RateLimited { retry_after_secs: 30 })
            .with_error(MockEnhancementError::Parse {
                message: "bad json".to_string(),
            })
            .with_error(MockEnhancementError::Timeout { timeout_secs: 5 });

        assert_eq!(
            enhancer.enhance(request()).await.unwrap_err(),
            EnhancementError::rate_limited(30)
        );
        assert_eq!(
            enhancer.enhance(request()).await.unwrap_err(),
            EnhancementError::parse("bad json")
        );
        assert_eq!(
            enhancer.enhance(request()).await.unwrap_err(),
            EnhancementError::timeout(5)
        );
    }

    #[tokio::test]
    async fn delay_is_applied() {
        let enhancer = MockComparisonEnhancer::new().with_delay(Duration::from_millis(20));
        let started = std::time::Instant::now();

        enhancer.enhance(request()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn provider_name_is_mock() {
        assert_eq!(MockComparisonEnhancer::new().provider_name(), "mock");
    }
}
