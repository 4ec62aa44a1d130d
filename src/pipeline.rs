//! Orchestration of one content generation run: adapt the inputs, select
//! style and narrative, assemble the specification, and fall back to the
//! static template when any stage fails. Callers always receive usable
//! content; no stage error crosses this boundary.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::adapt;
use crate::analytics::{
    AnalyticsSink, ContentGeneratedRecord, FallbackServedRecord, NullSink, SessionEvent,
    SessionStartedRecord,
};
use crate::config::EngineConfig;
use crate::device;
use crate::error::EngineError;
use crate::prompt;
use crate::style::{self, Subject};
use crate::types::{
    AdaptedContent, ContentSpecification, DeviceProfile, DifficultyLevel, KnowledgeContext,
    Student,
};

/// Lifecycle of a generation run. Every run moves Idle → Running and then to
/// exactly one terminal state: Completed when assembly succeeds,
/// FailedFallback when any stage fails and the static template is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
    FailedFallback,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::FailedFallback => "failedFallback",
        }
    }
}

/// Result of one generation run: the content to render, the terminal state,
/// and the converted failure when the fallback was served.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub specification: ContentSpecification,
    pub state: RunState,
    pub failure: Option<EngineError>,
}

impl PipelineOutcome {
    pub fn is_fallback(&self) -> bool {
        self.state == RunState::FailedFallback
    }
}

/// The personalization pipeline. Holds the immutable engine configuration
/// and an analytics sink; all per-run values are constructed fresh inside
/// `generate`, so one pipeline instance serves any number of concurrent
/// runs.
pub struct PersonalizationPipeline {
    config: EngineConfig,
    sink: Arc<dyn AnalyticsSink>,
}

impl PersonalizationPipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_sink(config, Arc::new(NullSink))
    }

    pub fn with_sink(config: EngineConfig, sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates personalized content for one request. Infallible at this
    /// boundary: stage failures are logged, recorded to analytics, and
    /// converted into the fallback specification.
    pub async fn generate(
        &self,
        knowledge: &KnowledgeContext,
        student: &Student,
        difficulty: DifficultyLevel,
        device: &DeviceProfile,
    ) -> ContentSpecification {
        self.generate_detailed(knowledge, student, difficulty, device)
            .await
            .specification
    }

    /// Like `generate`, but also reports the terminal run state and the
    /// converted failure for callers that surface degradation to users.
    pub async fn generate_detailed(
        &self,
        knowledge: &KnowledgeContext,
        student: &Student,
        difficulty: DifficultyLevel,
        device: &DeviceProfile,
    ) -> PipelineOutcome {
        let run_id = Uuid::new_v4().to_string();

        debug!(
            run = %run_id,
            student = %student.id,
            subject = %knowledge.subject,
            concept = %knowledge.target_concept,
            difficulty = difficulty.as_str(),
            state = RunState::Running.as_str(),
            "generation run started"
        );

        self.sink
            .record(SessionEvent::SessionStarted(SessionStartedRecord {
                student_id: student.id.clone(),
                session_id: run_id.clone(),
                subject: knowledge.subject.clone(),
                concept: knowledge.target_concept.clone(),
            }));

        match self.run_stages(knowledge, student, difficulty, device) {
            Ok((specification, adapted)) => {
                info!(
                    run = %run_id,
                    student = %student.id,
                    duration = adapted.estimated_duration_minutes,
                    state = RunState::Completed.as_str(),
                    "content specification generated"
                );
                self.sink
                    .record(SessionEvent::ContentGenerated(ContentGeneratedRecord {
                        student_id: student.id.clone(),
                        session_id: run_id,
                        subject: knowledge.subject.clone(),
                        concept: knowledge.target_concept.clone(),
                        difficulty,
                        duration_minutes: adapted.estimated_duration_minutes,
                    }));
                PipelineOutcome {
                    specification,
                    state: RunState::Completed,
                    failure: None,
                }
            }
            Err(err) => {
                warn!(
                    run = %run_id,
                    student = %student.id,
                    error = %err,
                    kind = err.kind(),
                    state = RunState::FailedFallback.as_str(),
                    "generation failed, serving fallback content"
                );
                self.sink
                    .record(SessionEvent::FallbackServed(FallbackServedRecord {
                        student_id: student.id.clone(),
                        session_id: run_id,
                        subject: knowledge.subject.clone(),
                        concept: knowledge.target_concept.clone(),
                        failure_kind: err.kind().to_string(),
                    }));
                PipelineOutcome {
                    specification: prompt::fallback(&knowledge.subject, &knowledge.target_concept),
                    state: RunState::FailedFallback,
                    failure: Some(err),
                }
            }
        }
    }

    fn run_stages(
        &self,
        knowledge: &KnowledgeContext,
        student: &Student,
        difficulty: DifficultyLevel,
        device: &DeviceProfile,
    ) -> Result<(ContentSpecification, AdaptedContent), EngineError> {
        let adapted = adapt::adapt(knowledge, student, difficulty, &self.config)?;

        let subject = Subject::parse(&knowledge.subject);
        let visual_style = style::subject_style(subject, &self.config.styles);
        let narrative = style::narrative_elements(student.age, &self.config.narrative);
        let optimization = device::select_optimization(device.device_type, &self.config.devices);

        let specification = prompt::assemble(
            knowledge,
            student,
            &adapted,
            visual_style,
            &narrative,
            &optimization,
            difficulty,
            &self.config.assembler,
        )?;

        Ok((specification, adapted))
    }
}
