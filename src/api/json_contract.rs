use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListResult};

use super::ShoppingListConfig;

pub const CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ShoppingListConfig,
}

impl ShoppingListConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ListResult<String> {
        let payload = ShoppingListConfigJsonContractV1 {
            schema_version: CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ListError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a versioned contract payload or a bare config object.
    pub fn from_json_compat_str(input: &str) -> ListResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ListError::InvalidConfig(format!("failed to parse config json: {e}")))?;

        if value.get("schema_version").is_none() {
            if value.get("config").is_some() {
                return Err(ListError::InvalidConfig(
                    "config contract payload is missing schema_version".to_owned(),
                ));
            }
            return serde_json::from_value(value).map_err(|e| {
                ListError::InvalidConfig(format!("failed to parse config json payload: {e}"))
            });
        }

        let payload: ShoppingListConfigJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                ListError::InvalidConfig(format!("failed to parse config contract payload: {e}"))
            })?;
        if payload.schema_version != CONFIG_JSON_SCHEMA_V1 {
            return Err(ListError::InvalidConfig(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
