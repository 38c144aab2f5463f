//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the option comparison domain.

mod attribute_type;
mod errors;
mod ids;
mod percentage;
mod rating;
mod scalability_priority;
mod timestamp;

pub use attribute_type::AttributeType;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{IntegrationId, OptionId};
pub use percentage::Percentage;
pub use rating::Rating;
pub use scalability_priority::ScalabilityPriority;
pub use timestamp::Timestamp;
