use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{domain::common::*, errors::EngineError};

/// Cash and bank destinations a transaction can be posted against.
///
/// The set is closed: reports always carry one entry per variant, in the
/// declaration order below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Account {
    Dinheiro,
    Bradesco,
    Cora,
}

impl Account {
    pub const ALL: [Account; 3] = [Account::Dinheiro, Account::Bradesco, Account::Cora];

    pub fn as_str(&self) -> &'static str {
        match self {
            Account::Dinheiro => "Dinheiro",
            Account::Bradesco => "Bradesco",
            Account::Cora => "Cora",
        }
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Account {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dinheiro" => Ok(Account::Dinheiro),
            "bradesco" => Ok(Account::Bradesco),
            "cora" => Ok(Account::Cora),
            other => Err(EngineError::InvalidInput(format!("unknown account `{other}`"))),
        }
    }
}
