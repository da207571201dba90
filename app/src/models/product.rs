use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    // PATTERN ISSUE: percent is never range checked (intentional)
    pub fn apply_discount(&mut self, percent: f64) -> f64 {
        self.price *= 1.0 - percent / 100.0;
        self.price
    }
}
