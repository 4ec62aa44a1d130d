use serde::{Deserialize, Serialize};

use crate::config::{NarrativeConfig, StyleConfig};
use crate::types::{AgeGroup, NarrativeElements, SubjectVisualStyle};

/// Subjects with a dedicated visual style. Anything the platform cannot
/// classify maps to `Unknown` and renders in the math style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Science,
    History,
    Language,
    #[default]
    Unknown,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Science => "science",
            Self::History => "history",
            Self::Language => "language",
            Self::Unknown => "unknown",
        }
    }

    /// Accepts both the platform's Chinese subject names and their English
    /// identifiers. Never fails; unrecognized names become `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "数学" => Self::Math,
            "科学" => Self::Science,
            "历史" => Self::History,
            "语文" => Self::Language,
            other => match other.to_lowercase().as_str() {
                "math" | "mathematics" => Self::Math,
                "science" => Self::Science,
                "history" => Self::History,
                "language" => Self::Language,
                _ => Self::Unknown,
            },
        }
    }
}

/// Looks up the visual style for a subject. Unknown subjects use the math
/// style; that default is part of the contract, not an error.
pub fn subject_style<'a>(subject: Subject, config: &'a StyleConfig) -> &'a SubjectVisualStyle {
    match subject {
        Subject::Math => &config.math,
        Subject::Science => &config.science,
        Subject::History => &config.history,
        Subject::Language => &config.language,
        Subject::Unknown => &config.math,
    }
}

/// Builds the narrative framing for a student: the fixed story cast plus
/// the motif list of the student's age band. Returns an owned value so each
/// run gets an independent copy.
pub fn narrative_elements(age: u8, config: &NarrativeConfig) -> NarrativeElements {
    let group = AgeGroup::from_age(age);
    NarrativeElements {
        role: config.role.clone(),
        companion: config.companion.clone(),
        environment: config.environment.clone(),
        discovery_motif: config.discovery_motif.clone(),
        achievement_system: config.achievement_system.clone(),
        age_motifs: config.motifs_for(group).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chinese_and_english_subject_names() {
        assert_eq!(Subject::parse("数学"), Subject::Math);
        assert_eq!(Subject::parse("科学"), Subject::Science);
        assert_eq!(Subject::parse("历史"), Subject::History);
        assert_eq!(Subject::parse("语文"), Subject::Language);
        assert_eq!(Subject::parse("Math"), Subject::Math);
        assert_eq!(Subject::parse("SCIENCE"), Subject::Science);
        assert_eq!(Subject::parse("天文"), Subject::Unknown);
        assert_eq!(Subject::parse(""), Subject::Unknown);
    }

    #[test]
    fn unknown_subject_renders_in_math_style() {
        let config = StyleConfig::default();
        let style = subject_style(Subject::Unknown, &config);
        assert_eq!(style, &config.math);
        assert_eq!(style.primary_colors[0], "#4CAF50");
    }

    #[test]
    fn each_subject_has_its_own_palette() {
        let config = StyleConfig::default();
        assert_eq!(
            subject_style(Subject::Science, &config).environment_style,
            "高科技实验室环境"
        );
        assert_eq!(
            subject_style(Subject::History, &config).interaction_style,
            "沉浸式历史体验"
        );
        assert_eq!(
            subject_style(Subject::Language, &config).visual_metaphors[0],
            "文字花园"
        );
    }

    #[test]
    fn narrative_motifs_follow_the_age_band() {
        let config = NarrativeConfig::default();

        let young = narrative_elements(5, &config);
        assert_eq!(young.age_motifs[0], "可爱的外星小动物");

        let older = narrative_elements(13, &config);
        assert_eq!(older.age_motifs[0], "前沿科技实验室");

        // the cast is the same for every age
        assert_eq!(young.role, older.role);
        assert_eq!(young.companion, "智慧的AI学习伙伴小星");
    }
}
