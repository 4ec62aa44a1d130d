use thiserror::Error;

/// Failure while building `AdaptedContent` from the request inputs. Unknown
/// subjects, devices, and age bands are not errors anywhere in the engine;
/// they resolve to documented defaults.
#[derive(Debug, Error)]
pub enum AdaptationError {
    #[error("invalid student profile: {0}")]
    InvalidStudent(String),
    #[error("invalid knowledge context: {0}")]
    InvalidKnowledge(String),
}

/// Failure while composing the final specification from already-adapted
/// values.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("adapted content has an empty vocabulary level")]
    EmptyVocabularyLevel,
    #[error("estimated duration must be positive")]
    ZeroDuration,
}

/// Top-level failure of one generation run. Only the pipeline sees this
/// type; it converts every variant into the fallback specification instead
/// of surfacing it to callers.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("content adaptation failed: {0}")]
    Adaptation(#[from] AdaptationError),
    #[error("prompt assembly failed: {0}")]
    Assembly(#[from] AssemblyError),
}

impl EngineError {
    /// Short label used in logs and analytics records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Adaptation(_) => "adaptation",
            Self::Assembly(_) => "assembly",
        }
    }
}

/// Failure reported by a knowledge-retrieval collaborator.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("knowledge source unavailable: {0}")]
    Unavailable(String),
    #[error("no knowledge found for subject {subject} concept {concept}")]
    NotFound { subject: String, concept: String },
}

/// Failure reported by a student-profile store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("student store unavailable: {0}")]
    Unavailable(String),
    #[error("student {0} not found")]
    NotFound(String),
}
