use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::auth::Token;
use crate::config::ZohoConfig;
use crate::error::{CrmLensError, Result};

use super::types::{DealsResponse, RawDeal, TokenResponse};

/// Field projection requested from the Deals module.
const DEAL_FIELDS: &str = "Deal_Name,Amount,Stage,Closing_Date";

/// HTTP client for the Zoho accounts (OAuth) and CRM API endpoints.
pub struct ZohoClient {
    client: Client,
    config: ZohoConfig,
}

impl ZohoClient {
    pub fn new(config: ZohoConfig) -> Result<Self> {
        config.validate()?;

        // Catch malformed base URLs at construction time rather than
        // on the first request.
        for base in [&config.accounts_url, &config.api_url] {
            Url::parse(base)
                .map_err(|e| CrmLensError::Config(format!("Invalid base URL {base}: {e}")))?;
        }

        let client = Client::builder()
            .user_agent(concat!("crmlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CrmLensError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Exchanges the client credentials for a fresh short-lived bearer
    /// token. Called once per pipeline run; tokens are never reused
    /// across runs.
    pub async fn acquire_token(&self) -> Result<Token> {
        let url = format!(
            "{}/oauth/v2/token",
            self.config.accounts_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .query(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("grant_type", "client_credentials"),
                ("scope", "ZohoCRM.modules.ALL"),
                ("soid", &self.config.soid()),
            ])
            .send()
            .await
            .map_err(|e| CrmLensError::Auth(format!("Token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(CrmLensError::Auth(format!(
                "Token endpoint returned status {status}: {body}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| CrmLensError::Auth(format!("Malformed token response: {e}")))?;

        let access_token = body.access_token.ok_or_else(|| {
            CrmLensError::Auth("Token response contained no access_token".to_string())
        })?;

        info!("Acquired access token");
        Ok(Token::from(access_token))
    }

    /// Fetches the Deals collection with the fixed field projection.
    ///
    /// Only the first page the API returns natively is consumed.
    /// Returns an empty vec when the module has no records (the API
    /// omits the `data` key or answers 204 with an empty body).
    pub async fn fetch_deals(&self, token: &Token) -> Result<Vec<RawDeal>> {
        let url = format!("{}/Deals", self.config.api_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Zoho-oauthtoken {}", token.as_str()),
            )
            .query(&[("fields", DEAL_FIELDS)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(CrmLensError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        debug!("Raw Deals response: {body}");

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let parsed: DealsResponse = serde_json::from_str(&body)?;
        Ok(parsed.data.unwrap_or_default())
    }
}
