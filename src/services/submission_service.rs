//! Submission service
//!
//! Drives one submission view through validate → submit → render. Each
//! controller owns its input, language selection and lifecycle state; the
//! only suspension point is the call to the grading backend.
//!
//! Every request is tagged with an attempt number. A response is applied only
//! if its attempt is still the current one and the view is still submitting,
//! so a response that arrives after `cancel` never touches the state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use tracing::{debug, info, warn};

use crate::{
    api::GradingBackend,
    error::SubmitError,
    models::{
        LanguageOption, LifecycleState, SubmissionInput, SubmissionOutcome, SubmissionRequest,
        UploadedFile,
    },
    views::result::{render_outcome, RenderedOutcome},
};

use super::InputResolver;

/// What a call to [`SubmissionController::submit`] ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Another submission was already in flight; nothing was sent
    Ignored,
    /// The attempt was cancelled or superseded; its response was dropped
    Discarded,
    /// The attempt ran to completion (or failed validation)
    Finished(Result<SubmissionOutcome, SubmitError>),
}

/// Mutable view state, guarded by the controller's lock
#[derive(Debug, Default)]
struct ViewState {
    resolver: InputResolver,
    language: Option<LanguageOption>,
    lifecycle: LifecycleState,
    /// Monotonic counter; bumped per request and on cancel
    attempt: u64,
    /// Wakes the in-flight request when cancelled
    cancel: Option<Arc<Notify>>,
}

/// Returns the view to idle if a submit future is dropped mid-request
struct InFlightGuard<'a> {
    view: &'a Mutex<ViewState>,
    problem_id: &'a str,
    attempt: u64,
    armed: bool,
}

impl InFlightGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        if view.attempt == self.attempt && view.lifecycle.is_submitting() {
            view.attempt += 1;
            view.lifecycle = LifecycleState::Idle;
            view.cancel = None;
            warn!(
                problem_id = %self.problem_id,
                attempt = self.attempt,
                "Submission abandoned before a response arrived"
            );
        }
    }
}

/// Submission lifecycle controller for one problem
pub struct SubmissionController<B> {
    problem_id: String,
    backend: B,
    view: Mutex<ViewState>,
}

impl<B: GradingBackend> SubmissionController<B> {
    pub fn new(problem_id: impl Into<String>, backend: B) -> Self {
        Self {
            problem_id: problem_id.into(),
            backend,
            view: Mutex::new(ViewState::default()),
        }
    }

    // The lock is never held across an await, so a poisoned guard still
    // holds consistent state.
    fn view(&self) -> MutexGuard<'_, ViewState> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Edit the typed code; rejected while a file is selected
    pub fn set_typed_code(&self, text: impl Into<String>) -> bool {
        self.view().resolver.set_typed_code(text)
    }

    /// Pick a file (clears typed code) or clear the picked file
    pub fn set_uploaded_file(&self, file: Option<UploadedFile>) {
        self.view().resolver.set_uploaded_file(file);
    }

    pub fn select_language(&self, language: Option<LanguageOption>) {
        self.view().language = language;
    }

    pub fn input(&self) -> SubmissionInput {
        self.view().resolver.input().clone()
    }

    pub fn is_typing_enabled(&self) -> bool {
        self.view().resolver.is_typing_enabled()
    }

    pub fn language(&self) -> Option<LanguageOption> {
        self.view().language
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    pub fn state(&self) -> LifecycleState {
        self.view().lifecycle.clone()
    }

    /// The submit trigger must be disabled while this is true
    pub fn is_submitting(&self) -> bool {
        self.view().lifecycle.is_submitting()
    }

    /// Rendered result of the most recent successful submission
    pub fn rendered_outcome(&self) -> Option<RenderedOutcome> {
        render_outcome(self.view().lifecycle.outcome())
    }

    /// Validate the current input and, if it passes, send it for grading
    ///
    /// A trigger while a request is in flight is ignored, not queued.
    pub async fn submit(&self) -> SubmitAttempt {
        let (attempt, request, cancel) = {
            let mut view = self.view();

            if view.lifecycle.is_submitting() {
                debug!(problem_id = %self.problem_id, "Submit ignored: submission already in flight");
                return SubmitAttempt::Ignored;
            }

            view.lifecycle = LifecycleState::Validating;

            let built = SubmissionRequest::build(&self.problem_id, view.language, view.resolver.input());
            let request = match built {
                Ok(request) => request,
                Err(err) => {
                    info!(
                        problem_id = %self.problem_id,
                        reason = %err,
                        "Submission rejected before sending"
                    );
                    view.lifecycle = LifecycleState::Failed(err.to_string());
                    return SubmitAttempt::Finished(Err(err.into()));
                }
            };

            view.attempt += 1;
            let cancel = Arc::new(Notify::new());
            view.cancel = Some(Arc::clone(&cancel));
            view.lifecycle = LifecycleState::Submitting;

            (view.attempt, request, cancel)
        };

        let guard = InFlightGuard {
            view: &self.view,
            problem_id: &self.problem_id,
            attempt,
            armed: true,
        };

        info!(
            problem_id = %self.problem_id,
            attempt,
            language_id = request.language_id,
            "Submitting solution"
        );

        let result = tokio::select! {
            result = self.backend.submit(request) => result,
            _ = cancel.notified() => {
                info!(problem_id = %self.problem_id, attempt, "Submission cancelled");
                return SubmitAttempt::Discarded;
            }
        };
        guard.disarm();

        let mut view = self.view();

        if view.attempt != attempt || !view.lifecycle.is_submitting() {
            debug!(
                problem_id = %self.problem_id,
                attempt,
                current = view.attempt,
                "Discarding stale submission response"
            );
            return SubmitAttempt::Discarded;
        }

        view.cancel = None;

        match &result {
            Ok(outcome) => {
                info!(
                    problem_id = %self.problem_id,
                    attempt,
                    summary = %outcome.summary,
                    passed = outcome.passed_count(),
                    total = outcome.test_cases.len(),
                    "Submission graded"
                );
                view.lifecycle = LifecycleState::Succeeded(outcome.clone());
                view.resolver.reset();
                view.language = None;
            }
            Err(err) => {
                warn!(
                    problem_id = %self.problem_id,
                    attempt,
                    code = err.error_code(),
                    error = %err,
                    "Submission failed"
                );
                // Input and language stay as they were so the user can retry.
                view.lifecycle = LifecycleState::Failed(err.to_string());
            }
        }

        SubmitAttempt::Finished(result)
    }

    /// Abort the in-flight submission, if any, and return to idle
    ///
    /// Input and language are kept. Returns `false` when nothing was in flight.
    pub fn cancel(&self) -> bool {
        let mut view = self.view();

        if !view.lifecycle.is_submitting() {
            return false;
        }

        view.attempt += 1;
        view.lifecycle = LifecycleState::Idle;
        if let Some(cancel) = view.cancel.take() {
            cancel.notify_one();
        }

        info!(problem_id = %self.problem_id, "Cancelling in-flight submission");
        true
    }
}
