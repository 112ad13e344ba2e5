//! In-memory demo implementation of the assessment port.
//!
//! Serves the canned scenario set used when the backend is unreachable,
//! with a fixed ten-item progression and a deterministic results payload.
//! Doubles as a test fake; every call is recorded for assertions.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::assessment::{
    AnswerOption, AssessmentProgress, GapAnalysis, PersonalityProfile, Question, ResultsPayload,
};
use crate::domain::foundation::{AssessmentSessionId, QuestionId};
use crate::ports::{
    AssessmentClient, ClientError, IntakeRecord, ResponseOutcome, SessionStarted,
    StartSessionRequest, SubmitResponseRequest,
};

const ESTIMATED_TOTAL: u32 = 10;

#[derive(Default)]
struct DemoState {
    answered: u32,
    intakes_saved: u32,
    sessions_started: u32,
    submits: Vec<SubmitResponseRequest>,
    results_fetched: u32,
}

/// Demo client serving canned German scenarios entirely in memory.
#[derive(Default)]
pub struct DemoAssessmentClient {
    state: Mutex<DemoState>,
}

impl DemoAssessmentClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DemoState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of intake records saved.
    pub fn intakes_saved(&self) -> u32 {
        self.lock().intakes_saved
    }

    /// Number of sessions started.
    pub fn sessions_started(&self) -> u32 {
        self.lock().sessions_started
    }

    /// All submitted responses, in order.
    pub fn submitted(&self) -> Vec<SubmitResponseRequest> {
        self.lock().submits.clone()
    }

    /// Number of results fetches.
    pub fn results_fetched(&self) -> u32 {
        self.lock().results_fetched
    }

    /// Aligns the progression with answers already given elsewhere, so a
    /// mid-assessment switch to demo mode keeps the founder's progress.
    pub fn resume_at(&self, answered: u32) {
        self.lock().answered = answered.min(ESTIMATED_TOTAL);
    }

    fn question_id(n: u32) -> QuestionId {
        QuestionId::new(format!("DEMO_{:03}", n)).expect("demo id is non-empty")
    }

    /// Opening scenario, templated with the founder's category.
    fn first_question(category_label: &str) -> Question {
        Question {
            id: Self::question_id(1),
            situation: format!(
                "Dein {} startet in einem Markt mit etablierten Wettbewerbern. \
                 Du musst dein Angebot positionieren.",
                category_label
            ),
            prompt: "Wie gehst du vor?".to_string(),
            options: vec![
                option("A", "Ich kopiere das bewährte Konzept der Marktführer - warum das Rad neu erfinden?"),
                option("B", "Ich mache das Gleiche, aber günstiger - Preis schlägt alles."),
                option("C", "Ich kombiniere bewährte Elemente neu und füge eigene Ideen hinzu."),
                option("D", "Ich entwickle etwas völlig Neues - echte Innovation oder nichts!"),
            ],
        }
    }

    /// Follow-up scenarios cycle through a fixed pair.
    fn next_question(answered: u32) -> Question {
        let id = Self::question_id(answered + 1);
        if answered % 2 == 1 {
            Question {
                id,
                situation: "Ein wichtiger Kunde beschwert sich öffentlich über deine \
                            Dienstleistung. Die Kritik ist teilweise berechtigt."
                    .to_string(),
                prompt: "Wie reagierst du?".to_string(),
                options: vec![
                    option("A", "Ich ignoriere es - nicht jeder Kunde ist zufriedenstellbar."),
                    option("B", "Ich antworte defensiv und erkläre meine Sicht der Dinge."),
                    option("C", "Ich entschuldige mich öffentlich und biete eine Lösung an."),
                    option("D", "Ich kontaktiere den Kunden privat, um das Problem zu verstehen."),
                ],
            }
        } else {
            Question {
                id,
                situation: "Du hast die Möglichkeit, einen großen Auftrag anzunehmen, aber er \
                            würde deine Kapazitäten stark belasten."
                    .to_string(),
                prompt: "Was tust du?".to_string(),
                options: vec![
                    option("A", "Ablehnen - Qualität geht vor Quantität."),
                    option("B", "Annehmen und hoffen, dass es klappt."),
                    option("C", "Annehmen mit klaren Bedingungen und Timeline."),
                    option("D", "Teilweise annehmen und den Rest an Partner delegieren."),
                ],
            }
        }
    }

    fn progress_after(answered: u32) -> AssessmentProgress {
        AssessmentProgress {
            items_completed: answered,
            estimated_remaining: ESTIMATED_TOTAL.saturating_sub(answered),
            percentage: (answered * 100 / ESTIMATED_TOTAL).min(100) as u8,
        }
    }

    fn results() -> ResultsPayload {
        ResultsPayload {
            personality_profile: PersonalityProfile {
                archetype_id: "innovator".to_string(),
                archetype_name: "Der Visionäre Innovator".to_string(),
                tagline: "Zukunft gestalten, nicht verwalten".to_string(),
                description: "Du denkst in Möglichkeiten, nicht in Grenzen. Deine Stärke liegt \
                              darin, neue Wege zu finden wo andere nur Sackgassen sehen."
                    .to_string(),
                primary_strengths: vec![
                    "Kreatives Denken".to_string(),
                    "Risikobereitschaft".to_string(),
                    "Zukunftsorientierung".to_string(),
                ],
                primary_challenges: vec![
                    "Detailarbeit kann ungeduldig machen".to_string(),
                    "Manchmal zu viele Ideen gleichzeitig".to_string(),
                ],
                gz_success_prediction: 78,
            },
            dimension_scores: Default::default(),
            gap_analysis: GapAnalysis {
                priority_gaps: vec![],
                overall_readiness: 75,
            },
        }
    }
}

fn option(id: &str, text: &str) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: text.to_string(),
    }
}

#[async_trait]
impl AssessmentClient for DemoAssessmentClient {
    async fn save_intake(&self, _record: &IntakeRecord) -> Result<(), ClientError> {
        self.lock().intakes_saved += 1;
        Ok(())
    }

    async fn start_session(
        &self,
        request: &StartSessionRequest,
    ) -> Result<SessionStarted, ClientError> {
        let mut state = self.lock();
        state.sessions_started += 1;
        state.answered = 0;
        drop(state);

        Ok(SessionStarted {
            session_id: AssessmentSessionId::new("demo-session")
                .expect("demo session id is non-empty"),
            question: Self::first_question(&request.business_context.category_label),
            progress: AssessmentProgress::initial(ESTIMATED_TOTAL),
        })
    }

    async fn submit_response(
        &self,
        request: &SubmitResponseRequest,
    ) -> Result<ResponseOutcome, ClientError> {
        let mut state = self.lock();
        state.submits.push(request.clone());
        state.answered += 1;
        let answered = state.answered;
        drop(state);

        let progress = Self::progress_after(answered);
        let question = if answered >= ESTIMATED_TOTAL {
            None
        } else {
            Some(Self::next_question(answered))
        };

        Ok(ResponseOutcome { question, progress })
    }

    async fn fetch_results(
        &self,
        _session_id: &AssessmentSessionId,
    ) -> Result<ResultsPayload, ClientError> {
        self.lock().results_fetched += 1;
        Ok(Self::results())
    }
}
