use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Account;

use super::ConfigError;

pub const DEFAULT_FALLBACK_CATEGORY_LABEL: &str = "Sem categoria";
pub const DEFAULT_TREND_WINDOW_MONTHS: u32 = 12;

/// How Tertiary-categorized outflow is attributed in expense breakdowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseRollup {
    /// Only movements pointing straight at a Secondary category count toward it.
    #[default]
    Direct,
    /// Tertiary movements are credited to their Secondary ancestor as well.
    IncludeTertiary,
}

/// Engine-wide reporting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    pub locale: String,
    pub currency: String,
    #[serde(default = "EngineConfig::default_fallback_category_label")]
    pub fallback_category_label: String,
    #[serde(default = "EngineConfig::default_trend_window_months")]
    pub trend_window_months: u32,
    #[serde(default)]
    pub expense_rollup: ExpenseRollup,
    /// Presentation numbering for statement rows, e.g. `1.1 Bradesco`.
    #[serde(default = "EngineConfig::default_account_labels")]
    pub account_labels: BTreeMap<Account, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            fallback_category_label: Self::default_fallback_category_label(),
            trend_window_months: Self::default_trend_window_months(),
            expense_rollup: ExpenseRollup::default(),
            account_labels: Self::default_account_labels(),
        }
    }
}

impl EngineConfig {
    pub fn default_fallback_category_label() -> String {
        DEFAULT_FALLBACK_CATEGORY_LABEL.into()
    }

    pub fn default_trend_window_months() -> u32 {
        DEFAULT_TREND_WINDOW_MONTHS
    }

    pub fn default_account_labels() -> BTreeMap<Account, String> {
        BTreeMap::from([
            (Account::Bradesco, "1.1 Bradesco".to_string()),
            (Account::Cora, "1.2 Cora".to_string()),
            (Account::Dinheiro, "1.3 Dinheiro".to_string()),
        ])
    }

    /// Statement label for an account, falling back to its bare name.
    pub fn account_label(&self, account: Account) -> String {
        self.account_labels
            .get(&account)
            .cloned()
            .unwrap_or_else(|| account.to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_category_label.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "fallback_category_label",
                message: "must not be blank".into(),
            });
        }
        if self.trend_window_months == 0 {
            return Err(ConfigError::Invalid {
                field: "trend_window_months",
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
