//! IntegrationSupport - which integrations an option is known to support.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IntegrationId, OptionId};

/// One (option, integration) support row.
///
/// Only the existence of the row matters for filtering; `support_level` is
/// carried for display ("native", "plugin", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSupport {
    pub option_id: OptionId,
    pub integration_id: IntegrationId,
    pub support_level: String,
}

impl IntegrationSupport {
    pub fn new(
        option_id: OptionId,
        integration_id: IntegrationId,
        support_level: impl Into<String>,
    ) -> Self {
        Self {
            option_id,
            integration_id,
            support_level: support_level.into(),
        }
    }
}
