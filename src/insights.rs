use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::providers::zoho::RawDeal;

/// A deal record after normalization: no nullable fields remain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub deal_name: String,
    pub amount: f64,
    pub stage: String,
    pub closing_date: String,
}

/// Per-stage sum of deal amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageAggregate {
    pub stage: String,
    pub total_amount: f64,
}

/// Summary of one refresh of the Deals collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealInsights {
    pub collected_at: DateTime<Utc>,
    pub total_deals: usize,
    pub pipeline_value: f64,
    /// Mean amount. `None` when there are no deals: the mean is
    /// undefined on an empty collection and rendered as "N/A".
    pub avg_deal_size: Option<f64>,
    pub stages: Vec<StageAggregate>,
    pub deals: Vec<Deal>,
}

/// Converts raw API records into the normalized tabular form.
///
/// Missing or null amounts become 0 so the aggregation math works;
/// missing strings become empty. No currency or date parsing happens
/// here. Idempotent: a record that is already fully populated passes
/// through unchanged.
pub fn normalize(raw_deals: Vec<RawDeal>) -> Vec<Deal> {
    raw_deals
        .into_iter()
        .map(|raw| Deal {
            deal_name: raw.deal_name.unwrap_or_default(),
            amount: raw.amount.unwrap_or(0.0),
            stage: raw.stage.unwrap_or_default(),
            closing_date: raw.closing_date.unwrap_or_default(),
        })
        .collect()
}

impl DealInsights {
    /// Derives the metrics triple and the stage aggregates from a
    /// normalized deal list, stamping the current wall-clock time.
    ///
    /// Every deal lands in exactly one stage bucket, so the aggregate
    /// totals always sum back to `pipeline_value`. Stage order is
    /// first-seen order.
    pub fn summarize(deals: Vec<Deal>) -> Self {
        let total_deals = deals.len();
        let pipeline_value: f64 = deals.iter().map(|deal| deal.amount).sum();

        #[allow(clippy::cast_precision_loss)]
        let avg_deal_size = if total_deals > 0 {
            Some(pipeline_value / total_deals as f64)
        } else {
            None
        };

        let mut buckets: IndexMap<String, f64> = IndexMap::new();
        for deal in &deals {
            *buckets.entry(deal.stage.clone()).or_insert(0.0) += deal.amount;
        }

        let stages = buckets
            .into_iter()
            .map(|(stage, total_amount)| StageAggregate {
                stage,
                total_amount,
            })
            .collect();

        Self {
            collected_at: Utc::now(),
            total_deals,
            pipeline_value,
            avg_deal_size,
            stages,
            deals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, amount: Option<f64>, stage: &str) -> RawDeal {
        RawDeal {
            deal_name: Some(name.to_string()),
            amount,
            stage: Some(stage.to_string()),
            closing_date: Some("2026-09-30".to_string()),
        }
    }

    #[test]
    fn test_normalize_fills_null_amounts_with_zero() {
        let deals = normalize(vec![
            raw("Acme renewal", None, "Negotiation"),
            raw("Globex upsell", Some(100.0), "Negotiation"),
            raw("Initech pilot", Some(50.0), "Qualification"),
        ]);

        let amounts: Vec<f64> = deals.iter().map(|d| d.amount).collect();
        assert_eq!(amounts, vec![0.0, 100.0, 50.0]);
    }

    #[test]
    fn test_normalize_fills_missing_strings() {
        let deals = normalize(vec![RawDeal {
            deal_name: None,
            amount: Some(10.0),
            stage: None,
            closing_date: None,
        }]);

        assert_eq!(deals[0].deal_name, "");
        assert_eq!(deals[0].stage, "");
        assert_eq!(deals[0].closing_date, "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(vec![
            raw("Acme renewal", None, "Negotiation"),
            raw("Globex upsell", Some(100.0), "Negotiation"),
        ]);

        let again = normalize(
            once.iter()
                .map(|deal| RawDeal {
                    deal_name: Some(deal.deal_name.clone()),
                    amount: Some(deal.amount),
                    stage: Some(deal.stage.clone()),
                    closing_date: Some(deal.closing_date.clone()),
                })
                .collect(),
        );

        assert_eq!(once, again);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize(vec![]).is_empty());
    }

    #[test]
    fn test_summarize_example_from_fixture() {
        let insights = DealInsights::summarize(normalize(vec![
            raw("a", None, "A"),
            raw("b", Some(100.0), "A"),
            raw("c", Some(50.0), "B"),
        ]));

        assert_eq!(insights.total_deals, 3);
        assert!((insights.pipeline_value - 150.0).abs() < f64::EPSILON);
        assert!((insights.avg_deal_size.unwrap() - 50.0).abs() < f64::EPSILON);

        assert_eq!(insights.stages.len(), 2);
        let a = insights.stages.iter().find(|s| s.stage == "A").unwrap();
        let b = insights.stages.iter().find(|s| s.stage == "B").unwrap();
        assert!((a.total_amount - 100.0).abs() < f64::EPSILON);
        assert!((b.total_amount - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summarize_empty_table() {
        let insights = DealInsights::summarize(vec![]);

        assert_eq!(insights.total_deals, 0);
        assert!(insights.stages.is_empty());
        assert!((insights.pipeline_value).abs() < f64::EPSILON);
        assert!(insights.avg_deal_size.is_none());
    }

    #[test]
    fn test_stage_totals_partition_pipeline_value() {
        let insights = DealInsights::summarize(normalize(vec![
            raw("a", Some(12.5), "Negotiation"),
            raw("b", Some(87.5), "Closed Won"),
            raw("c", None, "Closed Won"),
            raw("d", Some(300.0), "Qualification"),
        ]));

        let stage_sum: f64 = insights.stages.iter().map(|s| s.total_amount).sum();
        assert!((stage_sum - insights.pipeline_value).abs() < f64::EPSILON);
    }

    #[test]
    fn test_insights_serialize_roundtrip() {
        let insights = DealInsights::summarize(normalize(vec![raw("a", Some(1.0), "A")]));

        let json = serde_json::to_string(&insights).unwrap();
        let parsed: DealInsights = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_deals, 1);
        assert_eq!(parsed.stages, insights.stages);
    }
}
