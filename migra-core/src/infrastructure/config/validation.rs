use crate::domain::Address;
use crate::infrastructure::config::types::AppConfig;

impl AppConfig {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.app.operator_address.trim().is_empty() {
            errors.push("app.operator_address must be set".to_string());
        } else if self.app.operator_address.parse::<Address>().is_err() {
            errors.push(format!("invalid app.operator_address: {}", self.app.operator_address));
        }

        if self.app.asset_id == 0 {
            errors.push("app.asset_id must be set".to_string());
        }

        if self.programs.approval_path.trim().is_empty() {
            errors.push("programs.approval_path must be set".to_string());
        }
        if self.programs.clear_path.trim().is_empty() {
            errors.push("programs.clear_path must be set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
