//! Embed Configuration
//!
//! Raw construction input and its validated form. Validation runs once, at
//! widget construction, and has no side effects.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Raw construction input, as received from the host page
///
/// Field names follow the original wire shape (`projectID`, `paymentMethod`)
/// so a JSON options object deserializes directly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedParams {
    /// Merchant project identifier (required)
    #[serde(rename = "projectID")]
    pub project_id: Option<String>,

    /// Processing region hint
    pub region: Option<String>,

    /// Prefilled customer email
    pub email: Option<String>,

    /// Preselected payment method identifier (opaque)
    pub payment_method: Option<String>,

    /// Merchant-side account reference (opaque)
    pub account: Option<String>,
}

/// Validated embed configuration
///
/// Immutable once constructed; owned by the widget handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedConfig {
    pub project_id: String,
    pub region: Option<String>,
    pub email: Option<String>,
    pub payment_method: Option<String>,
    pub account: Option<String>,
}

impl EmbedConfig {
    /// Validate raw params into a usable configuration
    ///
    /// Fails iff `project_id` is absent or empty. Every other field passes
    /// through unmodified, including absent ones.
    pub fn validate(params: EmbedParams) -> Result<Self, ConfigError> {
        let project_id = params
            .project_id
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingProjectId)?;

        Ok(Self {
            project_id,
            region: params.region,
            email: params.email,
            payment_method: params.payment_method,
            account: params.account,
        })
    }
}
