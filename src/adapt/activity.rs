use crate::types::{DifficultyLevel, LearningActivity, LearningStyle};

/// Plans the learning activities for one concept, keyed by learning style.
/// Each style maps to a single activity archetype with a fixed time budget.
/// `ReadWrite` has no archetype yet and yields an empty plan. The difficulty
/// parameter is reserved for future budget scaling and does not change the
/// plan today.
pub fn plan_activities(
    concept: &str,
    style: LearningStyle,
    _difficulty: DifficultyLevel,
) -> Vec<LearningActivity> {
    match style {
        LearningStyle::Visual => vec![LearningActivity {
            activity_type: "可视化探索".to_string(),
            description: format!("通过3D模型和图表理解{}", concept),
            duration_minutes: 5,
        }],
        LearningStyle::Kinesthetic => vec![LearningActivity {
            activity_type: "动手操作".to_string(),
            description: format!("通过触摸和移动AR对象学习{}", concept),
            duration_minutes: 7,
        }],
        LearningStyle::Auditory => vec![LearningActivity {
            activity_type: "语音交互".to_string(),
            description: format!("通过对话和声音效果理解{}", concept),
            duration_minutes: 6,
        }],
        // no archetype defined for read/write learners yet
        LearningStyle::ReadWrite => Vec::new(),
    }
}
