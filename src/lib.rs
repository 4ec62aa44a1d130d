//! Adaptive content personalization engine for the StarWhisper AR learning
//! platform. Takes a student profile, retrieved knowledge, a difficulty
//! level, and a device profile, and produces a renderer-ready content
//! specification; when any stage fails the caller still receives a usable
//! fallback specification.

pub mod adapt;
pub mod analytics;
pub mod collaborators;
pub mod config;
pub mod device;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod style;
pub mod types;

pub use config::EngineConfig;
pub use error::{AdaptationError, AssemblyError, EngineError, RetrievalError, StoreError};
pub use logging::{init_tracing, LoggingOptions};
pub use pipeline::{PersonalizationPipeline, PipelineOutcome, RunState};
pub use types::{
    AdaptedContent, ContentSpecification, DeviceProfile, DeviceType, DifficultyLevel,
    KnowledgeContext, LearningStyle, SectionKind, Student,
};
