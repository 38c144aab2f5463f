//! CompareOptionsHandler - Command handler for comparing two options.
//!
//! Fetches catalog rows, runs the scoring and explanation pipeline, and
//! optionally lets an enhancer rewrite the narrative. Enhancement failure
//! never fails the comparison.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::domain::analysis::{
    ComparisonResult, Constraints, ExplanationGenerator, PivotResult, ScoringEngine,
    TradeOffExplanation,
};
use crate::domain::foundation::{
    DomainError, ErrorCode, OptionId, Timestamp, ValidationError,
};
use crate::ports::{AiAnalysis, CatalogError, ComparisonEnhancer, EnhancementRequest, OptionCatalog};

/// Number of options a comparison takes.
pub const OPTIONS_PER_COMPARISON: usize = 2;

/// Command to compare two options under a set of constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareOptionsCommand {
    /// Exactly two distinct option ids.
    pub option_ids: Vec<OptionId>,
    pub constraints: Constraints,
}

impl CompareOptionsCommand {
    pub fn new(first: OptionId, second: OptionId, constraints: Constraints) -> Self {
        Self {
            option_ids: vec![first, second],
            constraints,
        }
    }
}

/// Full result of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub comparison: ComparisonResult,
    pub explanation: TradeOffExplanation,
    pub pivot: PivotResult,
    /// True when an enhancer's content was applied.
    pub ai_enhanced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
    /// Not part of the deterministic payload.
    pub generated_at: Timestamp,
}

/// Errors that can occur while comparing options
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComparisonError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Option not found: {0}")]
    OptionNotFound(OptionId),

    #[error("Insufficient options: {remaining} option(s) satisfy the constraints, 2 required")]
    InsufficientOptions { remaining: usize },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ComparisonError {
    /// Maps to the shared error code taxonomy.
    pub fn code(&self) -> ErrorCode {
        match self {
            ComparisonError::InvalidInput(_) => ErrorCode::ValidationFailed,
            ComparisonError::OptionNotFound(_) => ErrorCode::OptionNotFound,
            ComparisonError::InsufficientOptions { .. } => ErrorCode::InsufficientOptions,
            ComparisonError::Catalog(CatalogError::Unavailable(_)) => ErrorCode::CatalogUnavailable,
            ComparisonError::Catalog(CatalogError::Corrupt(_)) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for ComparisonError {
    fn from(err: ValidationError) -> Self {
        ComparisonError::InvalidInput(err.to_string())
    }
}

impl From<ComparisonError> for DomainError {
    fn from(err: ComparisonError) -> Self {
        let error = DomainError::new(err.code(), err.to_string());
        match err {
            ComparisonError::OptionNotFound(id) => error.with_detail("option_id", id.as_str()),
            ComparisonError::InsufficientOptions { remaining } => {
                error.with_detail("remaining", remaining.to_string())
            }
            _ => error,
        }
    }
}

/// Handler for comparing two options.
///
/// Validates the id pair, loads catalog rows, runs the pipeline, then
/// optionally enhances the narrative within a timeout.
pub struct CompareOptionsHandler {
    catalog: Arc<dyn OptionCatalog>,
    enhancer: Option<Arc<dyn ComparisonEnhancer>>,
    enhancement_timeout: Duration,
}

impl CompareOptionsHandler {
    /// Default time allowed for an enhancer call.
    pub const DEFAULT_ENHANCEMENT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(catalog: Arc<dyn OptionCatalog>) -> Self {
        Self {
            catalog,
            enhancer: None,
            enhancement_timeout: Self::DEFAULT_ENHANCEMENT_TIMEOUT,
        }
    }

    /// Enables the enhancement path.
    pub fn with_enhancer(mut self, enhancer: Arc<dyn ComparisonEnhancer>, timeout: Duration) -> Self {
        self.enhancer = Some(enhancer);
        self.enhancement_timeout = timeout;
        self
    }

    pub async fn handle(&self, cmd: CompareOptionsCommand) -> Result<ComparisonReport, ComparisonError> {
        Self::validate_ids(&cmd.option_ids)?;
        let ids = &cmd.option_ids;

        let options = self.catalog.find_options(ids).await?;
        if let Some(missing) = ids.iter().find(|id| !options.iter().any(|o| &o.id == *id)) {
            return Err(ComparisonError::OptionNotFound(missing.clone()));
        }

        let (attributes, weights, integration_support) = tokio::try_join!(
            self.catalog.attributes_for(ids),
            self.catalog.weights(),
            self.catalog.integration_support_for(ids),
        )?;

        debug!(
            options = options.len(),
            attributes = attributes.len(),
            weights = weights.len(),
            integration_rows = integration_support.len(),
            "Loaded catalog rows"
        );

        let comparison = ScoringEngine::compare(
            &options,
            &attributes,
            &weights,
            &integration_support,
            &cmd.constraints,
        );

        if comparison.options.len() < options.len() {
            let excluded: Vec<&str> = options
                .iter()
                .filter(|o| comparison.option(&o.id).is_none())
                .map(|o| o.id.as_str())
                .collect();
            warn!(
                excluded = ?excluded,
                required = cmd.constraints.required_integrations().len(),
                "Options excluded by required integrations"
            );
        }

        if !comparison.has_enough_options() {
            return Err(ComparisonError::InsufficientOptions {
                remaining: comparison.options.len(),
            });
        }

        let mut explanation = ExplanationGenerator::generate(&comparison, &cmd.constraints);
        let mut pivot = ExplanationGenerator::generate_pivot(&comparison, &cmd.constraints, &weights);

        debug!(
            primary_factor = %pivot.primary_factor,
            secondary_factor = %pivot.secondary_factor,
            "Generated pivot"
        );

        let ai_analysis = match &self.enhancer {
            Some(enhancer) => {
                self.enhance(enhancer.as_ref(), &cmd.constraints, &comparison, &mut explanation, &mut pivot)
                    .await
            }
            None => None,
        };

        info!(
            first = %ids[0],
            second = %ids[1],
            first_score = %comparison.options[0].score,
            second_score = %comparison.options[1].score,
            ai_enhanced = ai_analysis.is_some(),
            "Comparison completed"
        );

        Ok(ComparisonReport {
            comparison,
            explanation,
            pivot,
            ai_enhanced: ai_analysis.is_some(),
            ai_analysis,
            generated_at: Timestamp::now(),
        })
    }

    fn validate_ids(ids: &[OptionId]) -> Result<(), ComparisonError> {
        if ids.len() != OPTIONS_PER_COMPARISON {
            return Err(ComparisonError::InvalidInput(format!(
                "Exactly {} options required for comparison, got {}",
                OPTIONS_PER_COMPARISON,
                ids.len()
            )));
        }

        let unique: HashSet<&OptionId> = ids.iter().collect();
        if unique.len() != ids.len() {
            return Err(ComparisonError::InvalidInput(
                "Cannot compare an option with itself".to_string(),
            ));
        }

        Ok(())
    }

    /// Runs the enhancer and applies its content. Returns the analysis block
    /// on success; on failure the explanation and pivot are left untouched.
    async fn enhance(
        &self,
        enhancer: &dyn ComparisonEnhancer,
        constraints: &Constraints,
        comparison: &ComparisonResult,
        explanation: &mut TradeOffExplanation,
        pivot: &mut PivotResult,
    ) -> Option<AiAnalysis> {
        let request = EnhancementRequest::new(
            constraints.clone(),
            comparison.clone(),
            explanation.clone(),
            pivot.clone(),
        );
        let trace_id = request.trace_id;

        match timeout(self.enhancement_timeout, enhancer.enhance(request)).await {
            Ok(Ok(content)) => {
                content.apply_to(explanation, pivot);
                debug!(%trace_id, provider = enhancer.provider_name(), "Applied enhanced content");
                Some(content.analysis)
            }
            Ok(Err(err)) => {
                warn!(
                    %trace_id,
                    provider = enhancer.provider_name(),
                    code = %ErrorCode::EnhancementFailed,
                    error = %err,
                    "Enhancement failed, using deterministic explanation"
                );
                None
            }
            Err(_) => {
                warn!(
                    %trace_id,
                    provider = enhancer.provider_name(),
                    timeout_secs = self.enhancement_timeout.as_secs(),
                    "Enhancement timed out, using deterministic explanation"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryOptionCatalog, MockComparisonEnhancer, MockEnhancementError};
    use crate::domain::catalog::{Attribute, IntegrationSupport, TechOption, Weight};
    use crate::domain::foundation::{
        AttributeType, IntegrationId, Percentage, Rating, ScalabilityPriority,
    };
    use crate::ports::{EnhancedContent, OptionNarrative};
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Test Fixtures
    // ─────────────────────────────────────────────────────────────────────

    fn id(s: &str) -> OptionId {
        OptionId::new(s).unwrap()
    }

    fn integration(s: &str) -> IntegrationId {
        IntegrationId::new(s).unwrap()
    }

    fn constraints(priority: ScalabilityPriority, required: &[&str]) -> Constraints {
        Constraints::new(0, 5000, priority, required.iter().map(|s| integration(s))).unwrap()
    }

    /// "alpha": scalable but costly. "beta": cheap but limited.
    async fn catalog() -> Arc<InMemoryOptionCatalog> {
        let catalog = InMemoryOptionCatalog::new();
        catalog.add_option(TechOption::new(id("alpha"), "Alpha", "scales", "database")).await;
        catalog.add_option(TechOption::new(id("beta"), "Beta", "cheap", "database")).await;
        catalog.add_option(TechOption::new(id("gamma"), "Gamma", "unmapped", "database")).await;

        let rows = [
            ("alpha", AttributeType::Scalability, Rating::High),
            ("alpha", AttributeType::CostModel, Rating::Low),
            ("alpha", AttributeType::Complexity, Rating::Medium),
            ("alpha", AttributeType::Maintenance, Rating::Medium),
            ("beta", AttributeType::Scalability, Rating::Low),
            ("beta", AttributeType::CostModel, Rating::High),
            ("beta", AttributeType::Complexity, Rating::Medium),
            ("beta", AttributeType::Maintenance, Rating::Medium),
        ];
        for (option_id, attribute_type, rating) in rows {
            catalog
                .add_attribute(Attribute::new(id(option_id), attribute_type, "v", rating))
                .await;
        }

        catalog.add_weight(Weight::new(AttributeType::CostModel, 0.3, 1.2, 1.0, 0.8).unwrap()).await;
        catalog.add_weight(Weight::new(AttributeType::Scalability, 0.25, 0.6, 1.0, 1.5).unwrap()).await;
        catalog.add_weight(Weight::new(AttributeType::Complexity, 0.25, 1.0, 1.0, 0.9).unwrap()).await;
        catalog.add_weight(Weight::flat(AttributeType::Maintenance, 0.2).unwrap()).await;

        catalog
            .add_integration_support(IntegrationSupport::new(id("alpha"), integration("kafka"), "native"))
            .await;
        catalog
            .add_integration_support(IntegrationSupport::new(id("beta"), integration("s3"), "native"))
            .await;

        Arc::new(catalog)
    }

    fn command(first: &str, second: &str, c: Constraints) -> CompareOptionsCommand {
        CompareOptionsCommand::new(id(first), id(second), c)
    }

    /// Catalog whose every call fails.
    struct FailingCatalog;

    #[async_trait]
    impl OptionCatalog for FailingCatalog {
        async fn list_options(&self) -> Result<Vec<TechOption>, CatalogError> {
            Err(CatalogError::unavailable("offline"))
        }
        async fn find_options(&self, _ids: &[OptionId]) -> Result<Vec<TechOption>, CatalogError> {
            Err(CatalogError::unavailable("offline"))
        }
        async fn attributes_for(&self, _ids: &[OptionId]) -> Result<Vec<Attribute>, CatalogError> {
            Err(CatalogError::unavailable("offline"))
        }
        async fn weights(&self) -> Result<Vec<Weight>, CatalogError> {
            Err(CatalogError::unavailable("offline"))
        }
        async fn integration_support_for(
            &self,
            _ids: &[OptionId],
        ) -> Result<Vec<IntegrationSupport>, CatalogError> {
            Err(CatalogError::unavailable("offline"))
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Success Cases
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn compares_two_options_end_to_end() {
        let handler = CompareOptionsHandler::new(catalog().await);
        let report = handler
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::High, &[])))
            .await
            .unwrap();

        assert_eq!(report.comparison.options.len(), 2);
        assert!(report.comparison.options[0].score > report.comparison.options[1].score);
        assert_eq!(report.explanation.option_analysis.len(), 2);
        assert_eq!(
            report.pivot.statement,
            "If scalability matters more than cost efficiency, choose Alpha; otherwise choose Beta"
        );
        assert!(!report.ai_enhanced);
        assert!(report.ai_analysis.is_none());
    }

    #[tokio::test]
    async fn unmapped_option_survives_required_integrations() {
        let handler = CompareOptionsHandler::new(catalog().await);
        let report = handler
            .handle(command("alpha", "gamma", constraints(ScalabilityPriority::Medium, &["kafka"])))
            .await
            .unwrap();

        assert_eq!(report.comparison.options.len(), 2);
        // Gamma has no attribute rows at all.
        assert_eq!(report.comparison.options[1].score, Percentage::ZERO);
        assert_eq!(report.comparison.options[1].attributes.cost_model.value, "N/A");
    }

    #[tokio::test]
    async fn report_serializes_camel_case_without_ai_block() {
        let handler = CompareOptionsHandler::new(catalog().await);
        let report = handler
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::Low, &[])))
            .await
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["aiEnhanced"], false);
        assert!(json.get("aiAnalysis").is_none());
        assert!(json["explanation"].get("constraintImpact").is_some());
        assert!(json["pivot"].get("primaryFactor").is_some());
        assert!(json.get("generatedAt").is_some());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Validation & Error Cases
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn rejects_wrong_number_of_ids() {
        let handler = CompareOptionsHandler::new(catalog().await);
        let cmd = CompareOptionsCommand {
            option_ids: vec![id("alpha")],
            constraints: constraints(ScalabilityPriority::Medium, &[]),
        };

        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, ComparisonError::InvalidInput(_)));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn rejects_duplicate_ids() {
        let handler = CompareOptionsHandler::new(catalog().await);
        let err = handler
            .handle(command("alpha", "alpha", constraints(ScalabilityPriority::Medium, &[])))
            .await
            .unwrap_err();

        assert!(matches!(err, ComparisonError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unknown_option_is_not_found() {
        let handler = CompareOptionsHandler::new(catalog().await);
        let err = handler
            .handle(command("alpha", "zeta", constraints(ScalabilityPriority::Medium, &[])))
            .await
            .unwrap_err();

        assert_eq!(err, ComparisonError::OptionNotFound(id("zeta")));
        assert_eq!(err.code(), ErrorCode::OptionNotFound);
    }

    #[tokio::test]
    async fn filtering_below_two_options_is_insufficient() {
        let handler = CompareOptionsHandler::new(catalog().await);
        let err = handler
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::Medium, &["kafka"])))
            .await
            .unwrap_err();

        assert_eq!(err, ComparisonError::InsufficientOptions { remaining: 1 });
        assert_eq!(err.code(), ErrorCode::InsufficientOptions);
    }

    #[tokio::test]
    async fn catalog_failure_propagates() {
        let handler = CompareOptionsHandler::new(Arc::new(FailingCatalog));
        let err = handler
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::Medium, &[])))
            .await
            .unwrap_err();

        assert!(matches!(err, ComparisonError::Catalog(CatalogError::Unavailable(_))));
        assert_eq!(err.code(), ErrorCode::CatalogUnavailable);
    }

    #[test]
    fn converts_to_domain_error_with_details() {
        let err: DomainError = ComparisonError::OptionNotFound(id("zeta")).into();
        assert_eq!(err.code, ErrorCode::OptionNotFound);
        assert_eq!(err.details.get("option_id").map(String::as_str), Some("zeta"));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Enhancement
    // ─────────────────────────────────────────────────────────────────────

    fn enhanced_content() -> EnhancedContent {
        EnhancedContent::new(AiAnalysis {
            options: vec![],
            recommendation: "Pick by growth plans".to_string(),
            decision_guidance: "Estimate traffic first".to_string(),
            personalized_insights: None,
            confidence: Percentage::new(85),
        })
        .with_summary("Enhanced summary")
        .with_pivot_statement("Enhanced pivot")
        .with_narrative(OptionNarrative {
            option_id: id("beta"),
            strengths: None,
            weaknesses: None,
            fit_reason: Some("Enhanced reason".to_string()),
        })
    }

    #[tokio::test]
    async fn applies_enhanced_content() {
        let enhancer = Arc::new(MockComparisonEnhancer::new().with_content(enhanced_content()));
        let handler = CompareOptionsHandler::new(catalog().await)
            .with_enhancer(enhancer.clone(), Duration::from_secs(1));

        let report = handler
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::High, &[])))
            .await
            .unwrap();

        assert!(report.ai_enhanced);
        assert_eq!(report.ai_analysis.unwrap().confidence.value(), 85);
        assert_eq!(report.explanation.summary, "Enhanced summary");
        assert_eq!(report.explanation.option_analysis[1].fit_reason, "Enhanced reason");
        assert_eq!(report.pivot.statement, "Enhanced pivot");
        assert_eq!(report.pivot.option_a, "Alpha");
        assert_eq!(enhancer.call_count(), 1);
    }

    #[tokio::test]
    async fn enhancer_error_falls_back_to_deterministic_output() {
        let enhancer = Arc::new(MockComparisonEnhancer::new().with_error(
            MockEnhancementError::Unavailable {
                message: "down".to_string(),
            },
        ));
        let baseline = CompareOptionsHandler::new(catalog().await)
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::High, &[])))
            .await
            .unwrap();

        let report = CompareOptionsHandler::new(catalog().await)
            .with_enhancer(enhancer, Duration::from_secs(1))
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::High, &[])))
            .await
            .unwrap();

        assert!(!report.ai_enhanced);
        assert!(report.ai_analysis.is_none());
        assert_eq!(report.explanation, baseline.explanation);
        assert_eq!(report.pivot, baseline.pivot);
    }

    #[tokio::test]
    async fn enhancer_timeout_falls_back_to_deterministic_output() {
        let enhancer = Arc::new(
            MockComparisonEnhancer::new()
                .with_content(enhanced_content())
                .with_delay(Duration::from_millis(200)),
        );
        let handler = CompareOptionsHandler::new(catalog().await)
            .with_enhancer(enhancer, Duration::from_millis(20));

        let report = handler
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::High, &[])))
            .await
            .unwrap();

        assert!(!report.ai_enhanced);
        assert_ne!(report.pivot.statement, "Enhanced pivot");
    }

    #[tokio::test]
    async fn enhancer_not_called_when_comparison_fails() {
        let enhancer = Arc::new(MockComparisonEnhancer::new());
        let handler = CompareOptionsHandler::new(catalog().await)
            .with_enhancer(enhancer.clone(), Duration::from_secs(1));

        let _ = handler
            .handle(command("alpha", "beta", constraints(ScalabilityPriority::Medium, &["kafka"])))
            .await;

        assert_eq!(enhancer.call_count(), 0);
    }
}
