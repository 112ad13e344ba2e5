//! Orchestrates the assessment sub-flow against the client port.
//!
//! Guarantees at most one in-flight mutating request, discards responses
//! that arrive after a reset, and degrades to the demo client when the
//! backend cannot be reached so the founder is never fully blocked.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use tracing::{info, warn};

use crate::adapters::demo::DemoAssessmentClient;
use crate::domain::assessment::{
    AssessmentProgress, AssessmentStage, MicroInsight, Question, ResultsPayload,
};
use crate::domain::foundation::{
    AssessmentSessionId, DomainError, ErrorCode, StateMachine,
};
use crate::domain::intake::BusinessContext;
use crate::ports::{
    AssessmentClient, ClientError, IntakeRecord, StartSessionRequest, SubmitResponseRequest,
};

const START_FAILED_DE: &str = "Fehler beim Starten der Analyse. Bitte versuche es erneut.";
const SUBMIT_FAILED_DE: &str = "Fehler beim Senden der Antwort. Bitte versuche es erneut.";
const RESULTS_FAILED_DE: &str = "Fehler beim Laden der Ergebnisse. Bitte versuche es erneut.";

/// Result of `start`.
#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    /// Session opened; the first question is ready.
    Started {
        question: Question,
        progress: AssessmentProgress,
    },
    /// Another request is pending; nothing was sent.
    AlreadyInFlight,
    /// The runner was reset while the request was in flight; the response
    /// was discarded.
    Superseded,
}

/// Result of `submit`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Answer recorded; the next question is ready.
    Next {
        question: Question,
        progress: AssessmentProgress,
        insight: Option<MicroInsight>,
    },
    /// That was the last question; results can be fetched.
    Complete { progress: AssessmentProgress },
    /// Another request is pending; nothing was sent.
    AlreadyInFlight,
    /// The runner was reset while the request was in flight; the response
    /// was discarded.
    Superseded,
}

struct RunnerState {
    stage: AssessmentStage,
    session_id: Option<AssessmentSessionId>,
    question: Option<Question>,
    question_shown_at: Option<Instant>,
    progress: AssessmentProgress,
    answered: u32,
    results: Option<ResultsPayload>,
    in_flight: bool,
    degraded: bool,
    generation: u64,
}

impl RunnerState {
    fn fresh(generation: u64) -> Self {
        Self {
            stage: AssessmentStage::NotStarted,
            session_id: None,
            question: None,
            question_shown_at: None,
            progress: AssessmentProgress::default(),
            answered: 0,
            results: None,
            in_flight: false,
            degraded: false,
            generation,
        }
    }
}

/// Drives one assessment session. All methods take `&self`; the state sits
/// behind a mutex that is never held across an await.
pub struct AssessmentRunner {
    backend: Arc<dyn AssessmentClient>,
    demo: Arc<DemoAssessmentClient>,
    state: Mutex<RunnerState>,
}

impl AssessmentRunner {
    pub fn new(backend: Arc<dyn AssessmentClient>) -> Self {
        Self {
            backend,
            demo: Arc::new(DemoAssessmentClient::new()),
            state: Mutex::new(RunnerState::fresh(0)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RunnerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn active_client(&self, degraded: bool) -> Arc<dyn AssessmentClient> {
        if degraded {
            self.demo.clone()
        } else {
            self.backend.clone()
        }
    }

    /// Clears the in-flight flag unless a reset already invalidated the
    /// operation.
    fn finish(&self, generation: u64) {
        let mut state = self.lock();
        if state.generation == generation {
            state.in_flight = false;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Observers
    // ─────────────────────────────────────────────────────────────────────

    pub fn stage(&self) -> AssessmentStage {
        self.lock().stage
    }

    /// True once the runner fell back to the demo question set.
    pub fn is_degraded(&self) -> bool {
        self.lock().degraded
    }

    pub fn current_question(&self) -> Option<Question> {
        self.lock().question.clone()
    }

    pub fn progress(&self) -> AssessmentProgress {
        self.lock().progress
    }

    // ─────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Persists the intake and opens a session.
    ///
    /// On connection failure the runner switches to demo mode instead of
    /// failing, so starting only errors on an explicit backend rejection.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the assessment already started
    /// - `BackendRejected` with the backend's message (or a generic German
    ///   fallback) on a 4xx response
    pub async fn start(
        &self,
        intake: IntakeRecord,
        context: BusinessContext,
    ) -> Result<StartOutcome, DomainError> {
        let generation = {
            let mut state = self.lock();
            if state.in_flight {
                return Ok(StartOutcome::AlreadyInFlight);
            }
            if state.stage != AssessmentStage::NotStarted {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "Die Analyse wurde bereits gestartet",
                ));
            }
            state.in_flight = true;
            state.generation
        };

        let mut degraded = false;

        match self.backend.save_intake(&intake).await {
            Ok(()) => {}
            Err(e) if e.is_connection_failure() => {
                warn!(error = %e, "backend unreachable while saving intake; switching to demo mode");
                degraded = true;
                let _ = self.demo.save_intake(&intake).await;
            }
            Err(e) => {
                self.finish(generation);
                return Err(surface_error(&e, START_FAILED_DE));
            }
        }

        let request = StartSessionRequest {
            user_email: Some(intake.email.clone()),
            business_context: context,
        };

        let started = match self.active_client(degraded).start_session(&request).await {
            Ok(started) => started,
            Err(e) if e.is_connection_failure() => {
                warn!(error = %e, "backend unreachable while starting session; switching to demo mode");
                degraded = true;
                self.demo
                    .start_session(&request)
                    .await
                    .map_err(|e| surface_error(&e, START_FAILED_DE))?
            }
            Err(e) => {
                self.finish(generation);
                return Err(surface_error(&e, START_FAILED_DE));
            }
        };

        let mut state = self.lock();
        if state.generation != generation {
            return Ok(StartOutcome::Superseded);
        }
        state.in_flight = false;
        state.degraded = degraded;
        state.stage = state
            .stage
            .transition_to(AssessmentStage::InProgress)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        state.session_id = Some(started.session_id);
        state.question = Some(started.question.clone());
        state.question_shown_at = Some(Instant::now());
        state.progress = started.progress;
        state.answered = 0;

        info!(degraded, "assessment session started");
        Ok(StartOutcome::Started {
            question: started.question,
            progress: started.progress,
        })
    }

    /// Submits the answer to the current question.
    ///
    /// At most one request is in flight: a second call while one is
    /// pending returns `AlreadyInFlight` without touching the client.
    /// Response time is measured from the moment the question was shown.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if no assessment is in progress
    /// - `BackendRejected` on a 4xx response; answered progress is kept
    pub async fn submit(&self, option_id: &str) -> Result<SubmitOutcome, DomainError> {
        let (request, generation, degraded_before) = {
            let mut state = self.lock();
            if state.stage != AssessmentStage::InProgress {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "Keine laufende Analyse",
                ));
            }
            if state.in_flight {
                return Ok(SubmitOutcome::AlreadyInFlight);
            }
            let question = state.question.as_ref().ok_or_else(|| {
                DomainError::new(ErrorCode::QuestionNotFound, "Keine aktuelle Frage")
            })?;
            let session_id = state.session_id.clone().ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Keine aktive Sitzung")
            })?;
            let response_time_ms = state
                .question_shown_at
                .map(|t| t.elapsed().as_millis() as u64)
                .unwrap_or(0);
            let request = SubmitResponseRequest {
                session_id,
                question_id: question.id.clone(),
                response_value: option_id.to_string(),
                response_time_ms,
            };
            state.in_flight = true;
            (request, state.generation, state.degraded)
        };

        let mut degraded = degraded_before;

        let outcome = match self
            .active_client(degraded)
            .submit_response(&request)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) if e.is_connection_failure() => {
                warn!(error = %e, "backend unreachable mid-assessment; switching to demo mode");
                degraded = true;
                self.demo.resume_at(self.lock().answered);
                self.demo
                    .submit_response(&request)
                    .await
                    .map_err(|e| surface_error(&e, SUBMIT_FAILED_DE))?
            }
            Err(e) => {
                self.finish(generation);
                return Err(surface_error(&e, SUBMIT_FAILED_DE));
            }
        };

        let mut state = self.lock();
        if state.generation != generation {
            return Ok(SubmitOutcome::Superseded);
        }
        state.in_flight = false;
        state.degraded = degraded;
        state.answered += 1;
        state.progress = outcome.progress;

        match outcome.question {
            Some(question) => {
                state.question = Some(question.clone());
                state.question_shown_at = Some(Instant::now());
                let insight = MicroInsight::after_answer(state.answered);
                Ok(SubmitOutcome::Next {
                    question,
                    progress: outcome.progress,
                    insight,
                })
            }
            None => {
                state.stage = state
                    .stage
                    .transition_to(AssessmentStage::Complete)
                    .map_err(|e| {
                        DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                    })?;
                state.question = None;
                state.question_shown_at = None;
                info!(answered = state.answered, "assessment complete");
                Ok(SubmitOutcome::Complete {
                    progress: outcome.progress,
                })
            }
        }
    }

    /// Fetches the results document for the completed assessment.
    ///
    /// A failed fetch leaves the stage at `Complete` so it can be retried.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotComplete` before the last question is answered
    /// - `SubmissionInFlight` while another request is pending
    /// - `BackendRejected` on a 4xx response
    pub async fn results(&self) -> Result<ResultsPayload, DomainError> {
        let (session_id, generation, degraded_before) = {
            let mut state = self.lock();
            if state.stage == AssessmentStage::ResultsLoaded {
                if let Some(results) = state.results.clone() {
                    return Ok(results);
                }
            }
            if state.stage != AssessmentStage::Complete {
                return Err(DomainError::new(
                    ErrorCode::AssessmentNotComplete,
                    "Die Analyse ist noch nicht abgeschlossen",
                ));
            }
            if state.in_flight {
                return Err(DomainError::new(
                    ErrorCode::SubmissionInFlight,
                    "Eine Anfrage läuft bereits",
                ));
            }
            let session_id = state.session_id.clone().ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Keine aktive Sitzung")
            })?;
            state.in_flight = true;
            (session_id, state.generation, state.degraded)
        };

        let mut degraded = degraded_before;

        let results = match self
            .active_client(degraded)
            .fetch_results(&session_id)
            .await
        {
            Ok(results) => results,
            Err(e) if e.is_connection_failure() => {
                warn!(error = %e, "backend unreachable fetching results; switching to demo mode");
                degraded = true;
                self.demo
                    .fetch_results(&session_id)
                    .await
                    .map_err(|e| surface_error(&e, RESULTS_FAILED_DE))?
            }
            Err(e) => {
                self.finish(generation);
                return Err(surface_error(&e, RESULTS_FAILED_DE));
            }
        };

        let mut state = self.lock();
        if state.generation != generation {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Die Sitzung wurde zurückgesetzt",
            ));
        }
        state.in_flight = false;
        state.degraded = degraded;
        state.stage = state
            .stage
            .transition_to(AssessmentStage::ResultsLoaded)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        state.results = Some(results.clone());

        Ok(results)
    }

    /// Explicit "try again": clears all state back to `NotStarted` and
    /// invalidates any in-flight response.
    pub fn reset(&self) {
        let mut state = self.lock();
        let generation = state.generation + 1;
        *state = RunnerState::fresh(generation);
    }
}

fn surface_error(e: &ClientError, fallback: &str) -> DomainError {
    let code = match e {
        ClientError::Backend { .. } => ErrorCode::BackendRejected,
        ClientError::Parse { .. } => ErrorCode::InternalError,
        _ => ErrorCode::ConnectionFailed,
    };
    let message = e.backend_message().unwrap_or(fallback);
    DomainError::new(code, message).with_detail("cause", e.to_string())
}
