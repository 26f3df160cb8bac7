use serde::{Deserialize, Serialize};

use crate::utils::AppError;

fn default_active() -> bool {
    true
}

/// Users collection schema (collection: "user").
/// Declared for validation only — no route in this service consumes it yet.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Address
    pub address: String,

    /// Age in years
    #[serde(default)]
    pub age: Option<i64>,

    /// Whether user is active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl User {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(age) = self.age {
            if !(0..=120).contains(&age) {
                return Err(AppError::InvalidRequest(format!(
                    "age must be between 0 and 120, got {}",
                    age
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_bounds_enforced() {
        let user: User = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "address": "Rua 1"
        }))
        .unwrap();
        assert!(user.is_active);
        assert!(user.validate().is_ok());

        let old: User = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "address": "Rua 1",
            "age": 130
        }))
        .unwrap();
        assert!(old.validate().is_err());
    }
}
