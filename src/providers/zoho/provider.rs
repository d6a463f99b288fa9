use log::info;

use crate::config::ZohoConfig;
use crate::error::Result;
use crate::insights::{normalize, DealInsights};

use super::client::ZohoClient;

/// One refresh pipeline over the Zoho CRM Deals module:
/// token exchange, fetch, normalize, summarize.
pub struct ZohoProvider {
    client: ZohoClient,
}

impl ZohoProvider {
    pub fn new(config: ZohoConfig) -> Result<Self> {
        let client = ZohoClient::new(config)?;
        Ok(Self { client })
    }

    /// Runs one full refresh. A fresh token is exchanged every time;
    /// an auth failure short-circuits before the Deals fetch.
    pub async fn collect_insights(&self) -> Result<DealInsights> {
        let token = self.client.acquire_token().await?;
        let raw_deals = self.client.fetch_deals(&token).await?;

        info!("Fetched {} deal record(s)", raw_deals.len());

        let deals = normalize(raw_deals);
        Ok(DealInsights::summarize(deals))
    }
}
