use serde::{Deserialize, Serialize};

use crate::types::{AgeGroup, OptimizationProfile, SubjectVisualStyle};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// One literal term replacement. Rules are applied in table order and each
/// rule replaces every occurrence of its term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub term: String,
    pub replacement: String,
}

impl SubstitutionRule {
    pub fn new(term: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            replacement: replacement.into(),
        }
    }
}

/// Versioned term-substitution tables, one per age band. Substitution is
/// lexical only; the table contents are the contract, so changes must bump
/// `version`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyTables {
    pub version: String,
    pub early_childhood: Vec<SubstitutionRule>,
    pub elementary_early: Vec<SubstitutionRule>,
    pub elementary_late: Vec<SubstitutionRule>,
    pub middle_school: Vec<SubstitutionRule>,
}

impl VocabularyTables {
    pub fn rules_for(&self, group: AgeGroup) -> &[SubstitutionRule] {
        match group {
            AgeGroup::EarlyChildhood => &self.early_childhood,
            AgeGroup::ElementaryEarly => &self.elementary_early,
            AgeGroup::ElementaryLate => &self.elementary_late,
            AgeGroup::MiddleSchool => &self.middle_school,
        }
    }
}

impl Default for VocabularyTables {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            early_childhood: vec![
                SubstitutionRule::new("几何体", "形状"),
                SubstitutionRule::new("坐标", "位置"),
                SubstitutionRule::new("函数", "规律"),
                SubstitutionRule::new("变量", "会变的数"),
            ],
            elementary_early: vec![
                SubstitutionRule::new("算法", "解题方法"),
                SubstitutionRule::new("数据结构", "信息整理方式"),
                SubstitutionRule::new("概率", "可能性"),
            ],
            // from age 10 up the original terminology is kept
            elementary_late: vec![],
            middle_school: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationConfig {
    /// Share of the attention span budgeted for focused learning.
    pub focus_ratio: f64,
    /// Additional duration per difficulty ordinal above Easy.
    pub difficulty_step: f64,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            focus_ratio: 0.8,
            difficulty_step: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub math: SubjectVisualStyle,
    pub science: SubjectVisualStyle,
    pub history: SubjectVisualStyle,
    pub language: SubjectVisualStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            math: SubjectVisualStyle {
                primary_colors: strings(&["#4CAF50", "#2196F3", "#FF9800"]),
                visual_metaphors: strings(&["几何星座", "数字宇宙", "计算星云"]),
                environment_style: "简洁现代的数学实验室".to_string(),
                interaction_style: "精准的几何操作".to_string(),
            },
            science: SubjectVisualStyle {
                primary_colors: strings(&["#9C27B0", "#3F51B5", "#00BCD4"]),
                visual_metaphors: strings(&["科学实验站", "分子世界", "物理定律可视化"]),
                environment_style: "高科技实验室环境".to_string(),
                interaction_style: "实验式探索互动".to_string(),
            },
            history: SubjectVisualStyle {
                primary_colors: strings(&["#795548", "#FF5722", "#FFC107"]),
                visual_metaphors: strings(&["时空隧道", "历史场景重现", "文明遗迹"]),
                environment_style: "历史时期真实场景".to_string(),
                interaction_style: "沉浸式历史体验".to_string(),
            },
            language: SubjectVisualStyle {
                primary_colors: strings(&["#E91E63", "#9C27B0", "#673AB7"]),
                visual_metaphors: strings(&["文字花园", "诗词星河", "故事世界"]),
                environment_style: "诗意的文学空间".to_string(),
                interaction_style: "创作型文字互动".to_string(),
            },
        }
    }
}

/// Fixed story cast and theme of the learning universe, plus the motif list
/// for each age band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub role: String,
    pub companion: String,
    pub environment: String,
    pub discovery_motif: String,
    pub achievement_system: String,
    pub early_childhood_motifs: Vec<String>,
    pub elementary_early_motifs: Vec<String>,
    pub elementary_late_motifs: Vec<String>,
    pub middle_school_motifs: Vec<String>,
}

impl NarrativeConfig {
    pub fn motifs_for(&self, group: AgeGroup) -> &[String] {
        match group {
            AgeGroup::EarlyChildhood => &self.early_childhood_motifs,
            AgeGroup::ElementaryEarly => &self.elementary_early_motifs,
            AgeGroup::ElementaryLate => &self.elementary_late_motifs,
            AgeGroup::MiddleSchool => &self.middle_school_motifs,
        }
    }
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            role: "年轻的太空探索者".to_string(),
            companion: "智慧的AI学习伙伴小星".to_string(),
            environment: "神秘的外星学习基地".to_string(),
            discovery_motif: "解锁宇宙知识密码".to_string(),
            achievement_system: "星际学者徽章系统".to_string(),
            early_childhood_motifs: strings(&["可爱的外星小动物", "彩色的能量水晶", "简单的星际工具"]),
            elementary_early_motifs: strings(&["神奇的科技装置", "发光的知识符文", "智能机器人助手"]),
            elementary_late_motifs: strings(&["复杂的星际设备", "古老的文明遗迹", "高级AI分析系统"]),
            middle_school_motifs: strings(&["前沿科技实验室", "多维度知识网络", "自主研究系统"]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub phone: OptimizationProfile,
    pub tablet: OptimizationProfile,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            phone: OptimizationProfile {
                max_objects: 5,
                interaction_complexity: "simple".to_string(),
                visual_complexity: "medium".to_string(),
                recommended_view_distance: "30-50cm".to_string(),
            },
            tablet: OptimizationProfile {
                max_objects: 10,
                interaction_complexity: "complex".to_string(),
                visual_complexity: "high".to_string(),
                recommended_view_distance: "40-70cm".to_string(),
            },
        }
    }
}

/// Boilerplate statement lists rendered verbatim by the assembler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    pub interaction_requirements: Vec<String>,
    pub technical_constraints: Vec<String>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            interaction_requirements: strings(&[
                "让抽象概念变得具体可操作",
                "触摸时提供即时视觉反馈",
                "鼓励主动探索和发现",
                "连接到真实世界应用",
                "支持多种学习方式",
            ]),
            technical_constraints: strings(&[
                "优化移动端AR性能（30-60fps）",
                "支持触摸和语音交互",
                "最小化动晕风险",
                "节能高效渲染",
            ]),
        }
    }
}

/// Immutable engine configuration. Constructed by the embedding application
/// and handed to `PersonalizationPipeline::new`; the engine holds no other
/// table or template state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub duration: DurationConfig,
    pub vocabulary: VocabularyTables,
    pub styles: StyleConfig,
    pub narrative: NarrativeConfig,
    pub devices: DeviceConfig,
    pub assembler: AssemblerConfig,
}

impl EngineConfig {
    /// Parses a configuration document. Omitted sections and fields keep
    /// their default values, so the platform can ship partial overrides
    /// (for example only a newer vocabulary table).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
