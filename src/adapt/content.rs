use tracing::debug;

use crate::config::EngineConfig;
use crate::error::AdaptationError;
use crate::types::{AdaptedContent, DifficultyLevel, KnowledgeContext, Student};

use super::{activity, assessment, duration, vocabulary};

/// Builds the per-request adaptation bundle. The vocabulary tier is resolved
/// first because concept adaptation depends on the student's age band; the
/// remaining steps are order-independent. Adapted concepts keep the order
/// and cardinality of `knowledge.key_concepts`.
pub fn adapt(
    knowledge: &KnowledgeContext,
    student: &Student,
    difficulty: DifficultyLevel,
    config: &EngineConfig,
) -> Result<AdaptedContent, AdaptationError> {
    student.validate()?;
    knowledge.validate()?;

    let tier = vocabulary::select_vocabulary(student.age);

    let adapted_concepts: Vec<String> = knowledge
        .key_concepts
        .iter()
        .map(|concept| vocabulary::adapt_concept(concept, student.age, &config.vocabulary))
        .collect();

    let learning_activities = activity::plan_activities(
        &knowledge.target_concept,
        student.learning_style,
        difficulty,
    );

    let assessment_points =
        assessment::plan_assessments(&knowledge.target_concept, student.current_level);

    let estimated_duration_minutes =
        duration::estimate(student.attention_span_minutes, difficulty, &config.duration);

    debug!(
        student = %student.id,
        age_group = student.age_group().as_str(),
        vocabulary = %tier.level,
        concepts = adapted_concepts.len(),
        activities = learning_activities.len(),
        duration = estimated_duration_minutes,
        "content adapted"
    );

    Ok(AdaptedContent {
        adapted_concepts,
        learning_activities,
        assessment_points,
        vocabulary_level: tier.level,
        estimated_duration_minutes,
    })
}
