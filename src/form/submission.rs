use crate::config::PageConfig;
use crate::form::field_validator::{FieldValidator, FormReport};
use crate::schedule::TimerManager;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::Mutex;

/// Lifecycle of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    /// Waiting for user input
    Idle,
    /// A whole-form validation pass is in progress
    Validating,
    /// Accepted; the simulated send is running
    Submitting,
    /// Send finished; waiting for the reset delay
    Submitted,
}

/// Status of one tracked submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

/// What the host should render on the submit button for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPresentation {
    /// Button label text
    pub label: &'static str,
    /// Icon class to render before the label, if any
    pub icon: Option<&'static str>,
    /// Whether the button accepts clicks
    pub disabled: bool,
    /// Style class for the button
    pub style_class: &'static str,
}

/// Tracks one accepted submission attempt.
///
/// Hides the internal UUID from hosts that only care about status.
#[derive(Debug, Clone)]
pub struct SubmissionHandle {
    internal_id: String,
    created_at: SystemTime,
    status: Arc<std::sync::Mutex<AttemptStatus>>,
}

impl SubmissionHandle {
    fn new() -> Self {
        Self {
            internal_id: uuid::Uuid::new_v4().to_string(),
            created_at: SystemTime::now(),
            status: Arc::new(std::sync::Mutex::new(AttemptStatus::Pending)),
        }
    }

    /// Get when this attempt was accepted
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Current status of the attempt
    pub fn status(&self) -> AttemptStatus {
        *self.status.lock().expect("status lock poisoned")
    }

    /// Get the internal UUID (for internal use only)
    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }

    fn mark(&self, status: AttemptStatus) {
        *self.status.lock().expect("status lock poisoned") = status;
    }
}

/// Result of asking the controller to submit
#[derive(Debug, Clone)]
pub enum SubmissionTicket {
    /// All fields valid; the timed send/reset sequence is running
    Accepted {
        handle: SubmissionHandle,
        report: FormReport,
    },
    /// At least one field failed; no submission side effect occurred
    Rejected { report: FormReport },
    /// A submission was already in flight; the request was dropped
    Ignored { state: SubmissionState },
}

/// Pure submission state machine.
///
/// Transition methods return whether the transition applied; an out-of-order
/// call is logged and ignored rather than panicking, since host event
/// ordering is outside this crate's control.
#[derive(Debug)]
pub struct SubmissionMachine {
    state: SubmissionState,
}

impl SubmissionMachine {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Idle -> Validating
    pub fn begin_validation(&mut self) -> bool {
        self.transition(SubmissionState::Idle, SubmissionState::Validating)
    }

    /// Validating -> Idle (a field failed)
    pub fn reject(&mut self) -> bool {
        self.transition(SubmissionState::Validating, SubmissionState::Idle)
    }

    /// Validating -> Submitting (all fields valid)
    pub fn accept(&mut self) -> bool {
        self.transition(SubmissionState::Validating, SubmissionState::Submitting)
    }

    /// Submitting -> Submitted (simulated send finished)
    pub fn mark_sent(&mut self) -> bool {
        self.transition(SubmissionState::Submitting, SubmissionState::Submitted)
    }

    /// Submitted -> Idle (reset delay elapsed)
    pub fn reset(&mut self) -> bool {
        self.transition(SubmissionState::Submitted, SubmissionState::Idle)
    }

    /// Return to Idle from any state (cancellation / navigation away)
    pub fn force_idle(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// What the host should render on the submit button right now
    pub fn button(&self) -> ButtonPresentation {
        match self.state {
            SubmissionState::Idle | SubmissionState::Validating => ButtonPresentation {
                label: "Send Message",
                icon: None,
                disabled: false,
                style_class: "btn-primary",
            },
            SubmissionState::Submitting => ButtonPresentation {
                label: "Sending...",
                icon: Some("bi bi-hourglass-split"),
                disabled: true,
                style_class: "btn-primary",
            },
            SubmissionState::Submitted => ButtonPresentation {
                label: "Message Sent!",
                icon: Some("bi bi-check-circle"),
                disabled: true,
                style_class: "btn-success",
            },
        }
    }

    fn transition(&mut self, from: SubmissionState, to: SubmissionState) -> bool {
        if self.state == from {
            self.state = to;
            true
        } else {
            warn!(
                "Ignoring submission transition {:?} -> {:?} while in {:?}",
                from, to, self.state
            );
            false
        }
    }
}

impl Default for SubmissionMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the submission machine through its timed transitions.
///
/// An accepted submission stays in `Submitting` for the configured sending
/// delay, moves to `Submitted`, and after the reset delay returns to `Idle`
/// with the last report cleared, so no error markers survive a successful
/// send.
pub struct SubmissionController {
    validator: Arc<FieldValidator>,
    machine: Arc<Mutex<SubmissionMachine>>,
    last_report: Arc<Mutex<Option<FormReport>>>,
    timers: TimerManager,
    config: PageConfig,
}

impl SubmissionController {
    pub fn new(validator: FieldValidator, config: PageConfig) -> Self {
        Self {
            validator: Arc::new(validator),
            machine: Arc::new(Mutex::new(SubmissionMachine::new())),
            last_report: Arc::new(Mutex::new(None)),
            timers: TimerManager::new(),
            config,
        }
    }

    /// Current lifecycle state
    pub async fn state(&self) -> SubmissionState {
        self.machine.lock().await.state()
    }

    /// Button presentation for the current state
    pub async fn button(&self) -> ButtonPresentation {
        self.machine.lock().await.button()
    }

    /// The report from the most recent validation pass, if one is being shown
    pub async fn last_report(&self) -> Option<FormReport> {
        self.last_report.lock().await.clone()
    }

    /// Validate a single field, for blur/input events
    pub fn validate_field(
        &self,
        field: &str,
        value: &str,
    ) -> crate::error::Result<crate::form::ValidationResult> {
        self.validator.validate(field, value)
    }

    /// Validate every field and, when all pass, run the timed send sequence.
    ///
    /// When any field fails, no submission side effect occurs and the report
    /// carries the per-field error states.
    pub async fn submit(&self, values: &HashMap<String, String>) -> SubmissionTicket {
        {
            let mut machine = self.machine.lock().await;
            if machine.state() != SubmissionState::Idle {
                let state = machine.state();
                warn!("Submit ignored: submission already in flight ({:?})", state);
                return SubmissionTicket::Ignored { state };
            }
            machine.begin_validation();
        }

        let report = self.validator.validate_form(values);

        let mut machine = self.machine.lock().await;
        *self.last_report.lock().await = Some(report.clone());

        if !report.valid {
            machine.reject();
            debug!(
                "Submission rejected; invalid fields: {:?}",
                report.invalid_fields()
            );
            return SubmissionTicket::Rejected { report };
        }

        machine.accept();
        drop(machine);

        let handle = SubmissionHandle::new();
        debug!("Submission {} accepted", handle.internal_id());
        self.schedule_send(&handle).await;

        SubmissionTicket::Accepted { handle, report }
    }

    /// Cancel an in-flight attempt (the navigate-away hook)
    pub async fn cancel(&self, handle: &SubmissionHandle) {
        self.timers
            .cancel(&Self::sent_timer_key(handle.internal_id()))
            .await;
        self.timers
            .cancel(&Self::reset_timer_key(handle.internal_id()))
            .await;
        handle.mark(AttemptStatus::Cancelled);
        self.machine.lock().await.force_idle();
        *self.last_report.lock().await = None;
    }

    /// Cancel every outstanding timer
    pub async fn shutdown(&self) {
        self.timers.cancel_all().await;
    }

    async fn schedule_send(&self, handle: &SubmissionHandle) {
        let machine = Arc::clone(&self.machine);
        let last_report = Arc::clone(&self.last_report);
        let timers = self.timers.clone();
        let handle = handle.clone();
        let reset_delay = self.config.reset_delay;
        let sent_key = Self::sent_timer_key(handle.internal_id());

        self.timers
            .schedule(
                sent_key,
                self.config.sending_delay,
                Box::new(move || {
                    tokio::spawn(async move {
                        let sent = machine.lock().await.mark_sent();
                        handle.mark(if sent {
                            AttemptStatus::Completed
                        } else {
                            AttemptStatus::Failed
                        });

                        let reset_key =
                            SubmissionController::reset_timer_key(handle.internal_id());
                        timers
                            .schedule(
                                reset_key,
                                reset_delay,
                                Box::new(move || {
                                    tokio::spawn(async move {
                                        machine.lock().await.reset();
                                        *last_report.lock().await = None;
                                    });
                                }),
                            )
                            .await;
                    });
                }),
            )
            .await;
    }

    fn sent_timer_key(id: &str) -> String {
        format!("submission:sent:{}", id)
    }

    fn reset_timer_key(id: &str) -> String {
        format!("submission:reset:{}", id)
    }
}
