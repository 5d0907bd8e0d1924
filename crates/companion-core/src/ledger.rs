//! Daily-Action Ledger
//!
//! Prevents the same bounded-reward task from being credited twice in
//! one calendar day. The ledger is replaced wholesale whenever its
//! stored date differs from today.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::actions::DailyAction;

/// Per-calendar-day record of completed daily actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActionLedger {
    pub date: NaiveDate,
    #[serde(default, alias = "actions")]
    pub completed: Vec<DailyAction>,
}

impl DailyActionLedger {
    /// An empty ledger for the given date.
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            date,
            completed: Vec::new(),
        }
    }

    /// Replaces the ledger with an empty one when the stored date is
    /// not `today`. Same-day rolls are identity.
    pub fn roll_to(&mut self, today: NaiveDate) {
        if self.date != today {
            *self = Self::fresh(today);
        }
    }

    pub fn is_completed(&self, action: DailyAction) -> bool {
        self.completed.contains(&action)
    }

    pub fn mark_completed(&mut self, action: DailyAction) {
        if !self.is_completed(action) {
            self.completed.push(action);
        }
    }
}
