//! Scenario questions, progress, and the micro-insights shown between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// One selectable answer in a scenario question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

/// A situational question posed during the assessment. The dimension the
/// question measures stays server-side and is never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub situation: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Looks up an option by its id.
    pub fn option(&self, id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// How far the assessment has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentProgress {
    pub items_completed: u32,
    pub estimated_remaining: u32,
    pub percentage: u8,
}

impl AssessmentProgress {
    /// Progress shown before the first question is answered.
    pub fn initial(estimated_total: u32) -> Self {
        Self {
            items_completed: 0,
            estimated_remaining: estimated_total,
            percentage: 0,
        }
    }

    /// True once the progression reports all items done.
    pub fn is_complete(&self) -> bool {
        self.percentage >= 100
    }
}

impl Default for AssessmentProgress {
    fn default() -> Self {
        Self::initial(10)
    }
}

/// Short encouragement shown after every third answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicroInsight {
    pub title: &'static str,
    pub message: &'static str,
    pub icon: &'static str,
}

const MICRO_INSIGHTS: [MicroInsight; 4] = [
    MicroInsight {
        title: "Starke Tendenz erkannt!",
        message: "Deine bisherigen Antworten zeigen ein klares Muster.",
        icon: "🎯",
    },
    MicroInsight {
        title: "Interessante Kombination",
        message: "Diese Eigenschaften sind bei erfolgreichen Gründern selten.",
        icon: "💎",
    },
    MicroInsight {
        title: "Typisch für deine Branche",
        message: "Dein Profil passt gut zu deinem Geschäftsbereich.",
        icon: "📊",
    },
    MicroInsight {
        title: "Fast geschafft!",
        message: "Nur noch wenige Fragen bis zu deinem Ergebnis.",
        icon: "🏁",
    },
];

impl MicroInsight {
    /// Insight to show after the given number of answered questions, if
    /// any. One appears after every third answer, cycling through the
    /// fixed set.
    pub fn after_answer(answered: u32) -> Option<MicroInsight> {
        if answered == 0 || answered % 3 != 0 {
            return None;
        }
        let index = (answered / 3 - 1) as usize % MICRO_INSIGHTS.len();
        Some(MICRO_INSIGHTS[index])
    }
}
