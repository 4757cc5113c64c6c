use std::sync::Arc;

use axum::{extract::State, Json};
use pipeline_common::types::ProducedValue;
use rand::Rng;
use tracing::info;

/// Where the producer gets its values from.
pub trait ValueSource {
    fn next_value(&self) -> i64;
}

/// Uniformly distributed values in 1..=100.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomValues;

impl ValueSource for RandomValues {
    fn next_value(&self) -> i64 {
        rand::thread_rng().gen_range(1..=100)
    }
}

/// Always the same value, handy to make the pipeline deterministic.
#[derive(Clone, Copy, Debug)]
pub struct FixedValue(pub i64);

impl ValueSource for FixedValue {
    fn next_value(&self) -> i64 {
        self.0
    }
}

pub type SharedValueSource = Arc<dyn ValueSource + Send + Sync>;

pub async fn get(State(values): State<SharedValueSource>) -> Json<ProducedValue> {
    let value = values.next_value();

    metrics::counter!("producer_values_generated_total").increment(1);
    info!("Generated: {}", value);

    Json(ProducedValue { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_stay_in_range() {
        for _ in 0..1000 {
            let value = RandomValues.next_value();
            assert!((1..=100).contains(&value), "{value} out of range");
        }
    }
}
