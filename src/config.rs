use crate::error::{CrmLensError, Result};

/// Immutable Zoho connection settings.
///
/// Built once at startup from CLI arguments (with environment-variable
/// fallbacks) and passed by reference into the provider. Pipeline code
/// never reads ambient global state.
#[derive(Debug, Clone)]
pub struct ZohoConfig {
    /// OAuth client ID of the registered server application
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// Tenant identifier used in the `soid` scope parameter
    pub org_id: String,

    /// Accounts (OAuth) base URL for the tenant's datacenter
    pub accounts_url: String,

    /// CRM API base URL, including the API version segment
    pub api_url: String,
}

impl ZohoConfig {
    /// Validates field presence. Credential absence is normally caught
    /// by argument parsing; this guards programmatic construction.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("client ID", &self.client_id),
            ("client secret", &self.client_secret),
            ("organization ID", &self.org_id),
            ("accounts URL", &self.accounts_url),
            ("API URL", &self.api_url),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CrmLensError::Config(format!("Missing Zoho {name}")));
            }
        }

        Ok(())
    }

    /// `soid` value for the client-credentials token request.
    pub fn soid(&self) -> String {
        format!("ZohoCRM.{}", self.org_id)
    }
}
