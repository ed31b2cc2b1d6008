//! Match setup payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dao::models::MatchTypeEntity,
    dto::validation::validate_display_name,
    state::scoring::{MatchMode, MatchSetup},
};

/// Ruleset selected by the client, using the same names as stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MatchModeDto {
    /// `"1v1"`
    #[serde(rename = "1v1")]
    OneVOne,
    /// `"2v2"`
    #[serde(rename = "2v2")]
    TwoVTwo,
    /// `"century"`
    #[serde(rename = "century")]
    Century,
}

impl From<MatchModeDto> for MatchMode {
    fn from(value: MatchModeDto) -> Self {
        match value {
            MatchModeDto::OneVOne => MatchMode::OneVOne,
            MatchModeDto::TwoVTwo => MatchMode::TwoVTwo,
            MatchModeDto::Century => MatchMode::Century,
        }
    }
}

impl From<MatchMode> for MatchModeDto {
    fn from(value: MatchMode) -> Self {
        match value {
            MatchMode::OneVOne => MatchModeDto::OneVOne,
            MatchMode::TwoVTwo => MatchModeDto::TwoVTwo,
            MatchMode::Century => MatchModeDto::Century,
        }
    }
}

impl From<MatchTypeEntity> for MatchModeDto {
    fn from(value: MatchTypeEntity) -> Self {
        match value {
            MatchTypeEntity::OneVOne => MatchModeDto::OneVOne,
            MatchTypeEntity::TwoVTwo => MatchModeDto::TwoVTwo,
            MatchTypeEntity::Century => MatchModeDto::Century,
        }
    }
}

/// Payload sent once the scorer has picked a mode and entered names.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MatchSetupRequest {
    /// Ruleset to play.
    pub mode: MatchModeDto,
    /// Number of Century players. Ignored by 1v1 and 2v2.
    #[serde(default)]
    pub participant_count: Option<usize>,
    /// Names keyed by position: `"0"`, `"1"`, ... for Century, `"player1"`..`"player4"` otherwise.
    /// Missing or blank entries are replaced with placeholders such as `"Player 2"`.
    #[serde(default)]
    pub names: HashMap<String, String>,
}

impl Validate for MatchSetupRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for name in self.names.values() {
            if let Err(e) = validate_display_name(name) {
                errors.add("names", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<MatchSetupRequest> for MatchSetup {
    fn from(value: MatchSetupRequest) -> Self {
        Self {
            mode: value.mode.into(),
            participant_count: value.participant_count,
            names: value.names,
        }
    }
}
