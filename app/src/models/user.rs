use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Simple user record, not backed by any ORM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    // BUG: plaintext password storage (intentional, CWE-256)
    pub password: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn check_password(&self, password: &str) -> bool {
        // BUG: plaintext comparison (intentional)
        self.password == password
    }

    pub fn to_dict(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("name".to_string(), Value::String(self.name.clone()));
        data.insert("email".to_string(), Value::String(self.email.clone()));
        // BUG: password leaks into serialized output (intentional)
        data.insert("password".to_string(), Value::String(self.password.clone()));
        data
    }
}
