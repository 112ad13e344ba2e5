//! Wire DTOs for the assessment backend.
//!
//! Bodies are deserialized into these types at the boundary and converted
//! to domain types; malformed payloads become `ClientError::Parse` here so
//! downstream code never needs ad-hoc null checks.

use serde::Deserialize;

use crate::domain::assessment::{AnswerOption, AssessmentProgress, Question};
use crate::domain::foundation::QuestionId;
use crate::ports::ClientError;

#[derive(Debug, Deserialize)]
pub(super) struct OptionDto {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ScenarioDto {
    pub scenario_id: String,
    pub situation: String,
    pub question: String,
    pub options: Vec<OptionDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProgressDto {
    pub items_completed: u32,
    pub estimated_remaining: u32,
    pub percentage: u8,
}

#[derive(Debug, Deserialize)]
pub(super) struct StartResponseDto {
    pub session_id: String,
    pub scenario: ScenarioDto,
    #[serde(default)]
    pub progress: Option<ProgressDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RespondResponseDto {
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub scenario: Option<ScenarioDto>,
    #[serde(default)]
    pub progress: Option<ProgressDto>,
}

impl TryFrom<ScenarioDto> for Question {
    type Error = ClientError;

    fn try_from(dto: ScenarioDto) -> Result<Self, Self::Error> {
        let id = QuestionId::new(dto.scenario_id)
            .map_err(|e| ClientError::parse(format!("scenario_id: {}", e)))?;
        Ok(Question {
            id,
            situation: dto.situation,
            prompt: dto.question,
            options: dto
                .options
                .into_iter()
                .map(|o| AnswerOption {
                    id: o.id,
                    text: o.text,
                })
                .collect(),
        })
    }
}

impl From<ProgressDto> for AssessmentProgress {
    fn from(dto: ProgressDto) -> Self {
        Self {
            items_completed: dto.items_completed,
            estimated_remaining: dto.estimated_remaining,
            percentage: dto.percentage.min(100),
        }
    }
}
