//! Contracts for the collaborators around the engine: knowledge retrieval
//! and student-profile persistence. The pipeline itself never calls these;
//! the embedding application retrieves and loads first, then hands the
//! results to `PersonalizationPipeline::generate`.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{RetrievalError, StoreError};
use crate::types::{KnowledgeContext, LearningStyle, Student, StudentCapabilities};

/// Produces the topic data for one learning request. Implementations own
/// retrieval entirely; the engine only consumes the returned context.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    async fn retrieve(
        &self,
        student: &Student,
        subject: &str,
        concept: &str,
    ) -> Result<KnowledgeContext, RetrievalError>;
}

/// Loads and saves student profiles. `load_or_create` must hand back a
/// usable profile for any id, creating a starter profile when none exists.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn load_or_create(&self, student_id: &str) -> Result<Student, StoreError>;
    async fn save(&self, student: &Student) -> Result<(), StoreError>;
}

/// Process-local profile store. Profiles created here start from the same
/// starter values the mobile platform seeds for a first-time learner.
pub struct InMemoryStudentStore {
    students: RwLock<HashMap<String, Student>>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self {
            students: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.students.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.read().is_empty()
    }

    fn starter_profile(student_id: &str) -> Student {
        Student {
            id: student_id.to_string(),
            name: "小探索者".to_string(),
            age: 8,
            grade_level: 2,
            learning_style: LearningStyle::Visual,
            current_level: 1,
            attention_span_minutes: 15,
            mastered_concepts: Vec::new(),
            capabilities: StudentCapabilities::default(),
        }
    }
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn load_or_create(&self, student_id: &str) -> Result<Student, StoreError> {
        if student_id.trim().is_empty() {
            return Err(StoreError::Unavailable("empty student id".to_string()));
        }

        if let Some(existing) = self.students.read().get(student_id) {
            return Ok(existing.clone());
        }

        let created = Self::starter_profile(student_id);
        self.students
            .write()
            .insert(student_id.to_string(), created.clone());
        debug!(student = %student_id, "starter profile created");
        Ok(created)
    }

    async fn save(&self, student: &Student) -> Result<(), StoreError> {
        if student.id.trim().is_empty() {
            return Err(StoreError::Unavailable("empty student id".to_string()));
        }
        self.students
            .write()
            .insert(student.id.clone(), student.clone());
        Ok(())
    }
}
