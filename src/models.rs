//! Frontend Models
//!
//! Data structures exchanged with the server.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon identifier as it appears in `/icon/{id}/...` paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub u32);

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Candle state reported after a veneration toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleAction {
    Lit,
    Unlit,
}

impl CandleAction {
    pub fn is_lit(self) -> bool {
        matches!(self, CandleAction::Lit)
    }
}

/// Response body of `POST /icon/{id}/venerate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResult {
    pub action: CandleAction,
    pub count: u32,
}
