/// Derives the four assessment checkpoints for one concept: feature
/// recognition, mechanism explanation, transfer to new situations, and
/// connection to prior knowledge. The mastery level parameter is reserved
/// for future checkpoint tiering and does not vary the content today.
pub fn plan_assessments(concept: &str, _current_level: i32) -> Vec<String> {
    vec![
        format!("能否识别{}的基本特征", concept),
        format!("能否解释{}的工作原理", concept),
        format!("能否将{}应用到新情境", concept),
        format!("能否将{}与已学知识建立联系", concept),
    ]
}
