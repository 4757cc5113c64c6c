use serde::{Deserialize, Serialize};

/// Body of the producer's `/data` response.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct ProducedValue {
    pub value: i64,
}

/// Body of the processor's `/process` response, and of the consumer's `/consume` response.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct ProcessedValue {
    pub original: i64,
    pub processed: i64,
}

/// Body returned alongside any 5XX status.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
