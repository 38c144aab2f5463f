//! Comparison enhancer adapters.

mod mock_enhancer;

pub use mock_enhancer::{MockComparisonEnhancer, MockEnhancement, MockEnhancementError};
