use serde::{Deserialize, Serialize};

use crate::error::AdaptationError;

/// Difficulty tiers ordered from Easy (1) to Expert (4). The ordinal feeds
/// linear scaling such as the session duration estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl DifficultyLevel {
    pub fn ordinal(&self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Expert => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            "expert" => Self::Expert,
            _ => Self::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    #[default]
    Visual,
    Kinesthetic,
    Auditory,
    ReadWrite,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Kinesthetic => "kinesthetic",
            Self::Auditory => "auditory",
            Self::ReadWrite => "readwrite",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "kinesthetic" => Self::Kinesthetic,
            "auditory" => Self::Auditory,
            "readwrite" | "read_write" | "read-write" => Self::ReadWrite,
            _ => Self::Visual,
        }
    }
}

/// Age bands driving vocabulary, narrative, and activity selection. Always
/// derived from `Student::age`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgeGroup {
    EarlyChildhood,
    ElementaryEarly,
    ElementaryLate,
    MiddleSchool,
}

impl AgeGroup {
    pub fn from_age(age: u8) -> Self {
        match age {
            0..=6 => Self::EarlyChildhood,
            7..=9 => Self::ElementaryEarly,
            10..=12 => Self::ElementaryLate,
            _ => Self::MiddleSchool,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EarlyChildhood => "earlyChildhood",
            Self::ElementaryEarly => "elementaryEarly",
            Self::ElementaryLate => "elementaryLate",
            Self::MiddleSchool => "middleSchool",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    Phone,
    Tablet,
    Unknown,
}

impl DeviceType {
    /// Classifies a physical screen diagonal the same way the device probe
    /// does: 7" and up is a tablet, 4"-7" is a phone, anything else
    /// (including non-finite readings) is unknown.
    pub fn from_screen_inches(inches: f64) -> Self {
        if !inches.is_finite() {
            return Self::Unknown;
        }
        if inches >= 7.0 {
            Self::Tablet
        } else if inches >= 4.0 {
            Self::Phone
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "phone" => Self::Phone,
            "tablet" => Self::Tablet,
            _ => Self::Unknown,
        }
    }
}

/// Device snapshot reported by the platform's capability probe. The pipeline
/// only reads `device_type`; the remaining fields describe the probe output
/// shape for callers that construct profiles from raw measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub device_type: DeviceType,
    pub screen_size_inches: f64,
    pub screen_width: u32,
    pub screen_height: u32,
    pub supports_ar: bool,
}

impl DeviceProfile {
    pub fn of(device_type: DeviceType) -> Self {
        Self {
            device_type,
            ..Self::default()
        }
    }

    pub fn from_screen(inches: f64, width: u32, height: u32, supports_ar: bool) -> Self {
        Self {
            device_type: DeviceType::from_screen_inches(inches),
            screen_size_inches: inches,
            screen_width: width,
            screen_height: height,
            supports_ar,
        }
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            device_type: DeviceType::Phone,
            screen_size_inches: 6.1,
            screen_width: 1170,
            screen_height: 2532,
            supports_ar: true,
        }
    }
}

/// Numeric ability scores carried on the student profile. Scores are in
/// [0, 1]. The current adaptation rules do not consume them; they are part
/// of the profile contract with the student store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCapabilities {
    pub cognitive_capacity: f64,
    pub processing_speed: f64,
    pub memory_retention: f64,
    pub spatial_ability: f64,
    pub logical_reasoning: f64,
    pub available_time_minutes: u32,
}

impl Default for StudentCapabilities {
    fn default() -> Self {
        Self {
            cognitive_capacity: 0.5,
            processing_speed: 0.5,
            memory_retention: 0.5,
            spatial_ability: 0.5,
            logical_reasoning: 0.5,
            available_time_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub grade_level: u8,
    pub learning_style: LearningStyle,
    pub current_level: i32,
    pub attention_span_minutes: u32,
    #[serde(default)]
    pub mastered_concepts: Vec<String>,
    #[serde(default)]
    pub capabilities: StudentCapabilities,
}

impl Student {
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }

    pub fn validate(&self) -> Result<(), AdaptationError> {
        if self.id.trim().is_empty() {
            return Err(AdaptationError::InvalidStudent("id is empty".into()));
        }
        if self.attention_span_minutes == 0 {
            return Err(AdaptationError::InvalidStudent(
                "attention span must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Topic data for one learning request, produced by the knowledge-retrieval
/// collaborator and consumed read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeContext {
    pub subject: String,
    pub target_concept: String,
    pub learning_objective: String,
    #[serde(default)]
    pub key_concepts: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub real_world_applications: Vec<String>,
}

impl KnowledgeContext {
    pub fn validate(&self) -> Result<(), AdaptationError> {
        if self.subject.trim().is_empty() {
            return Err(AdaptationError::InvalidKnowledge("subject is empty".into()));
        }
        if self.target_concept.trim().is_empty() {
            return Err(AdaptationError::InvalidKnowledge(
                "target concept is empty".into(),
            ));
        }
        if self.learning_objective.trim().is_empty() {
            return Err(AdaptationError::InvalidKnowledge(
                "learning objective is empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub duration_minutes: u32,
}

/// Per-request adaptation bundle. Built fresh for every generation run and
/// never cached or shared across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedContent {
    pub adapted_concepts: Vec<String>,
    pub learning_activities: Vec<LearningActivity>,
    pub assessment_points: Vec<String>,
    pub vocabulary_level: String,
    pub estimated_duration_minutes: u32,
}

/// Visual style descriptor for one subject: palette, metaphors, environment
/// and interaction treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectVisualStyle {
    pub primary_colors: Vec<String>,
    pub visual_metaphors: Vec<String>,
    pub environment_style: String,
    pub interaction_style: String,
}

/// Story framing for a generation run: fixed cast and theme strings plus the
/// motifs selected for the student's age band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeElements {
    pub role: String,
    pub companion: String,
    pub environment: String,
    pub discovery_motif: String,
    pub achievement_system: String,
    pub age_motifs: Vec<String>,
}

/// Content-density and interaction limits for one device class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationProfile {
    pub max_objects: u32,
    pub interaction_complexity: String,
    pub visual_complexity: String,
    pub recommended_view_distance: String,
}

/// The ten sections of a composed content specification, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    SceneSetup,
    EducationalBackground,
    NarrativeFraming,
    VisualStyle,
    InteractionRequirements,
    ActivityPlan,
    DeviceConstraints,
    AssessmentCheckpoints,
    TechnicalConstraints,
    CallToAction,
}

impl SectionKind {
    pub const ALL: [SectionKind; 10] = [
        Self::SceneSetup,
        Self::EducationalBackground,
        Self::NarrativeFraming,
        Self::VisualStyle,
        Self::InteractionRequirements,
        Self::ActivityPlan,
        Self::DeviceConstraints,
        Self::AssessmentCheckpoints,
        Self::TechnicalConstraints,
        Self::CallToAction,
    ];

    /// Stable header label rendered into the specification text. Downstream
    /// consumers parse by these labels, so they must never change per
    /// content.
    pub fn header(&self) -> &'static str {
        match self {
            Self::SceneSetup => "场景设定",
            Self::EducationalBackground => "教育背景",
            Self::NarrativeFraming => "《星语低语》叙事框架",
            Self::VisualStyle => "视觉风格要求",
            Self::InteractionRequirements => "互动学习要求",
            Self::ActivityPlan => "学习活动设计",
            Self::DeviceConstraints => "设备优化要求",
            Self::AssessmentCheckpoints => "学习评估检查点",
            Self::TechnicalConstraints => "技术规格要求",
            Self::CallToAction => "最终要求",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SceneSetup => "sceneSetup",
            Self::EducationalBackground => "educationalBackground",
            Self::NarrativeFraming => "narrativeFraming",
            Self::VisualStyle => "visualStyle",
            Self::InteractionRequirements => "interactionRequirements",
            Self::ActivityPlan => "activityPlan",
            Self::DeviceConstraints => "deviceConstraints",
            Self::AssessmentCheckpoints => "assessmentCheckpoints",
            Self::TechnicalConstraints => "technicalConstraints",
            Self::CallToAction => "callToAction",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub kind: SectionKind,
    pub body: String,
}

impl Section {
    pub fn new(kind: SectionKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }
}

/// Final personalized output handed to the rendering collaborator. Either a
/// fully sectioned specification or a single fallback block; immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSpecification {
    sections: Vec<Section>,
    text: String,
}

impl ContentSpecification {
    /// Builds a sectioned specification and renders its text eagerly. Every
    /// section renders its header line even when the body is empty, so
    /// header-keyed consumers always find all sections.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let mut text = String::new();
        for section in &sections {
            text.push_str("## ");
            text.push_str(section.kind.header());
            text.push('\n');
            if !section.body.is_empty() {
                text.push_str(&section.body);
                text.push('\n');
            }
            text.push('\n');
        }
        Self { sections, text }
    }

    /// Builds an unsectioned specification from a single block of text.
    /// Used by the fallback path.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            sections: Vec::new(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn is_fallback(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_group_band_boundaries() {
        assert_eq!(AgeGroup::from_age(0), AgeGroup::EarlyChildhood);
        assert_eq!(AgeGroup::from_age(6), AgeGroup::EarlyChildhood);
        assert_eq!(AgeGroup::from_age(7), AgeGroup::ElementaryEarly);
        assert_eq!(AgeGroup::from_age(9), AgeGroup::ElementaryEarly);
        assert_eq!(AgeGroup::from_age(10), AgeGroup::ElementaryLate);
        assert_eq!(AgeGroup::from_age(12), AgeGroup::ElementaryLate);
        assert_eq!(AgeGroup::from_age(13), AgeGroup::MiddleSchool);
        assert_eq!(AgeGroup::from_age(18), AgeGroup::MiddleSchool);
    }

    #[test]
    fn difficulty_ordinals_are_one_based() {
        assert_eq!(DifficultyLevel::Easy.ordinal(), 1);
        assert_eq!(DifficultyLevel::Medium.ordinal(), 2);
        assert_eq!(DifficultyLevel::Hard.ordinal(), 3);
        assert_eq!(DifficultyLevel::Expert.ordinal(), 4);
    }

    #[test]
    fn device_type_from_screen_inches() {
        assert_eq!(DeviceType::from_screen_inches(10.2), DeviceType::Tablet);
        assert_eq!(DeviceType::from_screen_inches(7.0), DeviceType::Tablet);
        assert_eq!(DeviceType::from_screen_inches(6.1), DeviceType::Phone);
        assert_eq!(DeviceType::from_screen_inches(4.0), DeviceType::Phone);
        assert_eq!(DeviceType::from_screen_inches(3.5), DeviceType::Unknown);
        assert_eq!(DeviceType::from_screen_inches(f64::NAN), DeviceType::Unknown);
    }

    #[test]
    fn specification_renders_empty_sections_with_header() {
        let spec = ContentSpecification::from_sections(vec![
            Section::new(SectionKind::ActivityPlan, ""),
            Section::new(SectionKind::CallToAction, "完成任务"),
        ]);

        assert!(spec.text().contains("## 学习活动设计"));
        assert!(spec.text().contains("## 最终要求"));
        assert!(spec.section(SectionKind::ActivityPlan).is_some());
        assert!(!spec.is_fallback());
    }

    #[test]
    fn student_validation_rejects_zero_attention_span() {
        let student = Student {
            id: "s1".to_string(),
            name: "小明".to_string(),
            age: 8,
            grade_level: 2,
            learning_style: LearningStyle::Visual,
            current_level: 1,
            attention_span_minutes: 0,
            mastered_concepts: vec![],
            capabilities: StudentCapabilities::default(),
        };
        assert!(student.validate().is_err());
    }
}
