use crate::config::AssemblerConfig;
use crate::error::AssemblyError;
use crate::types::{
    AdaptedContent, ContentSpecification, DifficultyLevel, KnowledgeContext, NarrativeElements,
    OptimizationProfile, Section, SectionKind, Student, SubjectVisualStyle,
};

fn join_cn(items: &[String]) -> String {
    items.join("、")
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Composes the final specification from the adapted content and the
/// style/narrative/device selections. Sections are emitted strictly in
/// `SectionKind::ALL` order and every section is present even when its
/// source list is empty, so header-keyed consumers can always split the
/// text.
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    knowledge: &KnowledgeContext,
    student: &Student,
    adapted: &AdaptedContent,
    style: &SubjectVisualStyle,
    narrative: &NarrativeElements,
    device_opt: &OptimizationProfile,
    difficulty: DifficultyLevel,
    config: &AssemblerConfig,
) -> Result<ContentSpecification, AssemblyError> {
    if adapted.vocabulary_level.trim().is_empty() {
        return Err(AssemblyError::EmptyVocabularyLevel);
    }
    if adapted.estimated_duration_minutes == 0 {
        return Err(AssemblyError::ZeroDuration);
    }

    let mut sections = Vec::with_capacity(SectionKind::ALL.len());

    sections.push(Section::new(
        SectionKind::SceneSetup,
        format!(
            "创建一个基于《星语低语》世界观的{}学习场景：",
            knowledge.subject
        ),
    ));

    sections.push(Section::new(
        SectionKind::EducationalBackground,
        [
            format!("- 学习目标：{}", knowledge.learning_objective),
            format!("- 核心概念：{}", join_cn(&adapted.adapted_concepts)),
            format!("- 学生年龄：{}岁", student.age),
            format!("- 难度等级：{}", difficulty.as_str()),
            format!("- 学习风格：{}", student.learning_style.as_str()),
            format!("- 预计时长：{}分钟", adapted.estimated_duration_minutes),
        ]
        .join("\n"),
    ));

    sections.push(Section::new(
        SectionKind::NarrativeFraming,
        [
            format!("学生扮演：{}", narrative.role),
            format!("AI伙伴：{}", narrative.companion),
            format!("学习环境：{}", narrative.environment),
            format!("探索主题：{}", narrative.discovery_motif),
            format!("成就系统：{}", narrative.achievement_system),
        ]
        .join("\n"),
    ));

    sections.push(Section::new(
        SectionKind::VisualStyle,
        [
            format!("- 主色调：{}", join_cn(&style.primary_colors)),
            format!("- 环境风格：{}", style.environment_style),
            format!("- 交互方式：{}", style.interaction_style),
            format!("- 视觉隐喻：{}", join_cn(&style.visual_metaphors)),
            format!("- 年龄元素：{}", join_cn(&narrative.age_motifs)),
        ]
        .join("\n"),
    ));

    sections.push(Section::new(
        SectionKind::InteractionRequirements,
        format!(
            "创建AR元素，要求：\n{}",
            bullets(&config.interaction_requirements)
        ),
    ));

    let activity_lines = adapted
        .learning_activities
        .iter()
        .map(|activity| {
            format!(
                "- {}：{}（{}分钟）",
                activity.activity_type, activity.description, activity.duration_minutes
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(Section::new(SectionKind::ActivityPlan, activity_lines));

    sections.push(Section::new(
        SectionKind::DeviceConstraints,
        [
            format!("- 最大对象数：{}个", device_opt.max_objects),
            format!("- 交互复杂度：{}", device_opt.interaction_complexity),
            format!("- 视觉复杂度：{}", device_opt.visual_complexity),
            format!("- 推荐观看距离：{}", device_opt.recommended_view_distance),
        ]
        .join("\n"),
    ));

    sections.push(Section::new(
        SectionKind::AssessmentCheckpoints,
        bullets(&adapted.assessment_points),
    ));

    sections.push(Section::new(
        SectionKind::TechnicalConstraints,
        bullets(&config.technical_constraints),
    ));

    sections.push(Section::new(
        SectionKind::CallToAction,
        format!(
            "请创建一个让学生感觉像在《星语低语》宇宙中\n探索{}奥秘的沉浸式AR学习体验！",
            knowledge.subject
        ),
    ));

    Ok(ContentSpecification::from_sections(sections))
}
