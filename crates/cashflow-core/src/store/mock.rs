//! Mock record store for local development
//!
//! Fabricates a batch of random transactions for any report query so the
//! API can be exercised without a document store. Batches are random by
//! default; a seed can be injected for reproducible output in tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::Transaction;

use super::RecordStore;

/// Number of transactions fabricated per query
const BATCH_SIZE: usize = 20;

/// Categories for accounts-payable reports
const AP_CATEGORIES: [&str; 5] = ["Vendor Payment", "Utilities", "Rent", "Services", "Equipment"];

/// Categories for general-ledger reports (also the fallback for
/// unrecognized report types)
const GL_CATEGORIES: [&str; 5] = ["Revenue", "Expenses", "Investments", "Taxes", "Operations"];

/// Mock record store
///
/// Pure function of its random source: no state is retained between
/// queries, so concurrent use needs no locking.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    /// When set, every query draws from a generator seeded with this value
    seed: Option<u64>,
}

impl MockStore {
    /// Create a mock store drawing from OS entropy
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create a mock store with a fixed seed (reproducible batches)
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Fabricate a sorted batch of transactions for the query
    pub fn generate(&self, report_type: &str, year: i32, month: u32) -> Result<Vec<Transaction>> {
        let mut rng = self.rng();
        let days = days_in_month(year, month);
        let categories = if report_type == "AP" {
            &AP_CATEGORIES
        } else {
            &GL_CATEGORIES
        };

        let mut records = Vec::with_capacity(BATCH_SIZE);
        for i in 1..=BATCH_SIZE {
            let day = rng.gen_range(1..=days);
            let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                Error::InvalidData(format!("Invalid calendar date {}-{}-{}", year, month, day))
            })?;

            // AP models payables: always an outflow. Everything else mixes
            // inflows and outflows.
            let amount = if report_type == "AP" {
                -rng.gen_range(1000.0..10000.0)
            } else {
                rng.gen_range(-5000.0..15000.0)
            };

            records.push(Transaction {
                id: Uuid::new_v4().to_string(),
                account_number: rng.gen_range(100_000..=999_999).to_string(),
                description: format!("{} Transaction {}", report_type, i),
                amount: round_cents(amount),
                date: date.format("%Y-%m-%dT00:00:00").to_string(),
                category: categories[rng.gen_range(0..categories.len())].to_string(),
            });
        }

        records.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(records)
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn query(&self, report_type: &str, year: i32, month: u32) -> Result<Vec<Transaction>> {
        self.generate(report_type, year, month)
    }

    fn describe(&self) -> &str {
        "mock"
    }
}

/// Days in the given month under the simplified leap rule
///
/// February has 29 days whenever the year is divisible by 4; the
/// century exception is intentionally not applied, for compatibility
/// with the data this service fronts. Months outside 1-12 fall through
/// to the 31-day default; the resulting out-of-range date fails later
/// at calendar construction.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if year % 4 == 0 {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
