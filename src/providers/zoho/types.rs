use serde::{Deserialize, Serialize};

/// A deal record exactly as the CRM API returns it.
///
/// Every field is nullable: the API omits fields that were never set
/// on the record, and `Amount` in particular is null for deals without
/// a negotiated value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDeal {
    #[serde(rename = "Deal_Name")]
    pub deal_name: Option<String>,

    #[serde(rename = "Amount")]
    pub amount: Option<f64>,

    #[serde(rename = "Stage")]
    pub stage: Option<String>,

    #[serde(rename = "Closing_Date")]
    pub closing_date: Option<String>,
}

/// Envelope of the `GET /Deals` response.
///
/// The `data` key is absent when the module has no records.
#[derive(Debug, Deserialize)]
pub struct DealsResponse {
    #[serde(default)]
    pub data: Option<Vec<RawDeal>>,
}

/// Body of a successful token-endpoint response. Error responses carry
/// an `error` field instead, which deserializes to `access_token: None`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_deserializes_with_null_amount() {
        let json = r#"{"Deal_Name": "Acme", "Amount": null, "Stage": "Negotiation", "Closing_Date": "2026-09-30"}"#;
        let deal: RawDeal = serde_json::from_str(json).unwrap();

        assert_eq!(deal.deal_name.as_deref(), Some("Acme"));
        assert!(deal.amount.is_none());
    }

    #[test]
    fn test_deals_response_without_data_key() {
        let response: DealsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn test_token_response_with_error_body() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"error": "invalid_client"}"#).unwrap();
        assert!(response.access_token.is_none());
    }
}
