//! JSON bill files.
//!
//! ```json
//! {
//!   "participants": [
//!     { "id": 1, "label": "Ann", "amount": "60" },
//!     { "label": "Ben", "amount": 40 }
//!   ],
//!   "surcharge": 10,
//!   "discount": null
//! }
//! ```
//!
//! Every field is optional. Participants without an `id` are numbered after
//! the largest explicit id, in file order. A file that already uses
//! `u64::MAX` can only be loaded when every record carries its own id.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use fairsplit_calculator::{
    Adjustments, AmountInput, Bill, ParticipantId, ParticipantInput, SplitError, SplitResult,
};

use crate::error::{CliError, CliResult};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ParticipantRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ParticipantId>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub amount: AmountInput,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BillFile {
    #[serde(default)]
    pub participants: Vec<ParticipantRecord>,
    #[serde(default)]
    pub surcharge: AmountInput,
    #[serde(default)]
    pub discount: AmountInput,
}

impl BillFile {
    pub fn read(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path)?;
        let file = Self::from_json(&text)
            .map_err(|source| CliError::BillFile { path: path.display().to_string(), source })?;
        debug!(path = %path.display(), participants = file.participants.len(), "bill file loaded");
        Ok(file)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// A small bill used by `fairsplit example`.
    pub fn example() -> Self {
        Self {
            participants: vec![
                ParticipantRecord { id: None, label: "Ann".to_string(), amount: "180".into() },
                ParticipantRecord { id: None, label: "Ben".to_string(), amount: 95.0.into() },
                ParticipantRecord { id: None, label: String::new(), amount: "120".into() },
            ],
            surcharge: "39".into(),
            discount: "50".into(),
        }
    }

    pub fn to_json_pretty(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Participant records with every id filled in.
    pub fn participants(&self) -> SplitResult<Vec<ParticipantInput>> {
        let mut next =
            self.participants.iter().filter_map(|r| r.id).map(|id| id.0).max().unwrap_or(0).checked_add(1);

        self.participants
            .iter()
            .map(|record| {
                let id = match record.id {
                    Some(id) => id,
                    None => {
                        let id = next.ok_or(SplitError::IdSpaceExhausted)?;
                        next = id.checked_add(1);
                        ParticipantId(id)
                    }
                };
                Ok(ParticipantInput::new(id, record.label.clone(), record.amount.clone()))
            })
            .collect()
    }

    pub fn adjustments(&self) -> Adjustments {
        Adjustments { surcharge: self.surcharge.clone(), discount: self.discount.clone() }
    }

    pub fn into_bill(self) -> CliResult<Bill> {
        Ok(Bill::from_parts(self.participants()?, self.adjustments())?)
    }
}
