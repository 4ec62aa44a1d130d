//! Property-based tests for the adaptation stages.
//!
//! Invariants under test:
//! - Duration: matches the closed-form estimate, stays positive, grows with difficulty
//! - Vocabulary: every age resolves to a tier; replaced terms never survive for the youngest band
//! - Content adaptation: concept order and cardinality are preserved
//! - Assembly: arbitrary valid requests always render all ten sections in order
//! - Fallback: never fails and always references the request

use proptest::prelude::*;

use xingyu_engine::adapt::{self, vocabulary};
use xingyu_engine::config::VocabularyTables;
use xingyu_engine::device::select_optimization;
use xingyu_engine::prompt::{assemble, fallback};
use xingyu_engine::style::{narrative_elements, subject_style, Subject};
use xingyu_engine::types::{AgeGroup, SectionKind, StudentCapabilities};
use xingyu_engine::{
    DeviceType, DifficultyLevel, EngineConfig, KnowledgeContext, LearningStyle, Student,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_difficulty() -> impl Strategy<Value = DifficultyLevel> {
    prop_oneof![
        Just(DifficultyLevel::Easy),
        Just(DifficultyLevel::Medium),
        Just(DifficultyLevel::Hard),
        Just(DifficultyLevel::Expert),
    ]
}

fn arb_learning_style() -> impl Strategy<Value = LearningStyle> {
    prop_oneof![
        Just(LearningStyle::Visual),
        Just(LearningStyle::Kinesthetic),
        Just(LearningStyle::Auditory),
        Just(LearningStyle::ReadWrite),
    ]
}

fn arb_device_type() -> impl Strategy<Value = DeviceType> {
    prop_oneof![
        Just(DeviceType::Phone),
        Just(DeviceType::Tablet),
        Just(DeviceType::Unknown),
    ]
}

fn arb_concept() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("几何体的坐标".to_string()),
        Just("函数与变量".to_string()),
        Just("数据结构".to_string()),
        Just("概率统计".to_string()),
        Just("光合作用".to_string()),
        "[a-zA-Z0-9][a-zA-Z0-9 ]{0,15}",
    ]
}

fn arb_student() -> impl Strategy<Value = Student> {
    (
        "[a-z0-9]{4,12}",        // id
        any::<u8>(),             // age
        (1u32..=120u32),         // attention span
        arb_learning_style(),
        (0i32..=10i32),          // current level
    )
        .prop_map(|(id, age, attention_span_minutes, learning_style, current_level)| Student {
            id,
            name: "测试学生".to_string(),
            age,
            grade_level: 1,
            learning_style,
            current_level,
            attention_span_minutes,
            mastered_concepts: vec![],
            capabilities: StudentCapabilities::default(),
        })
}

fn arb_knowledge() -> impl Strategy<Value = KnowledgeContext> {
    (
        prop_oneof![
            Just("数学".to_string()),
            Just("科学".to_string()),
            Just("历史".to_string()),
            Just("语文".to_string()),
            Just("天文".to_string()),
        ],
        arb_concept(),
        prop::collection::vec(arb_concept(), 0..6),
    )
        .prop_map(|(subject, target_concept, key_concepts)| KnowledgeContext {
            subject,
            target_concept,
            learning_objective: "理解目标概念".to_string(),
            key_concepts,
            prerequisites: vec![],
            real_world_applications: vec![],
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Duration equals the closed-form estimate and never rounds to zero.
    #[test]
    fn duration_matches_closed_form(
        span in 1u32..=600u32,
        difficulty in arb_difficulty(),
    ) {
        let config = EngineConfig::default();
        let estimated = adapt::duration::estimate(span, difficulty, &config.duration);

        let expected = (span as f64
            * 0.8
            * (1.0 + (difficulty.ordinal() - 1) as f64 * 0.3))
            .round() as u32;
        prop_assert_eq!(estimated, expected);
        prop_assert!(estimated > 0, "span {} at {:?} gave zero", span, difficulty);
    }

    /// Harder content never takes less time for the same attention span.
    #[test]
    fn duration_is_monotone_in_difficulty(span in 1u32..=600u32) {
        let config = EngineConfig::default();
        let levels = [
            DifficultyLevel::Easy,
            DifficultyLevel::Medium,
            DifficultyLevel::Hard,
            DifficultyLevel::Expert,
        ];
        for pair in levels.windows(2) {
            let lower = adapt::duration::estimate(span, pair[0], &config.duration);
            let higher = adapt::duration::estimate(span, pair[1], &config.duration);
            prop_assert!(lower <= higher);
        }
    }

    /// Every possible age resolves to a tier that agrees with its age band.
    #[test]
    fn vocabulary_tier_is_total_over_ages(age in any::<u8>()) {
        let tier = vocabulary::select_vocabulary(age);
        prop_assert!(!tier.level.is_empty());
        prop_assert!((1..=4).contains(&tier.complexity));

        let expected = match AgeGroup::from_age(age) {
            AgeGroup::EarlyChildhood => ("Simple", 1),
            AgeGroup::ElementaryEarly => ("Basic", 2),
            AgeGroup::ElementaryLate => ("Intermediate", 3),
            AgeGroup::MiddleSchool => ("Advanced", 4),
        };
        prop_assert_eq!(tier.level.as_str(), expected.0);
        prop_assert_eq!(tier.complexity, expected.1);
    }

    /// For the youngest band no replaced term survives adaptation, wherever
    /// it appears in the concept.
    #[test]
    fn youngest_band_never_sees_replaced_terms(
        prefix in "[a-zA-Z0-9]{0,6}",
        term in prop::sample::select(vec!["几何体", "坐标", "函数", "变量"]),
        suffix in "[a-zA-Z0-9]{0,6}",
        age in 0u8..=6u8,
    ) {
        let tables = VocabularyTables::default();
        let concept = format!("{prefix}{term}{suffix}");
        let adapted = vocabulary::adapt_concept(&concept, age, &tables);

        for rule_term in ["几何体", "坐标", "函数", "变量"] {
            prop_assert!(
                !adapted.contains(rule_term),
                "term {} survived in {}",
                rule_term,
                adapted
            );
        }
    }

    /// Ages ten and up keep the concept text unchanged.
    #[test]
    fn older_bands_keep_concepts_verbatim(
        concept in arb_concept(),
        age in 10u8..=255u8,
    ) {
        let tables = VocabularyTables::default();
        prop_assert_eq!(vocabulary::adapt_concept(&concept, age, &tables), concept);
    }

    /// Adaptation preserves concept order and cardinality for any request.
    #[test]
    fn adaptation_preserves_concept_order(
        knowledge in arb_knowledge(),
        student in arb_student(),
        difficulty in arb_difficulty(),
    ) {
        let config = EngineConfig::default();
        let adapted = adapt::adapt(&knowledge, &student, difficulty, &config)
            .expect("generated inputs are valid");

        prop_assert_eq!(adapted.adapted_concepts.len(), knowledge.key_concepts.len());
        // order check: unmapped concepts appear at the same index
        for (index, original) in knowledge.key_concepts.iter().enumerate() {
            if student.age >= 10 {
                prop_assert_eq!(&adapted.adapted_concepts[index], original);
            }
        }
    }

    /// Any valid request assembles into all ten sections, in order.
    #[test]
    fn assembly_renders_all_sections_for_valid_requests(
        knowledge in arb_knowledge(),
        student in arb_student(),
        difficulty in arb_difficulty(),
        device_type in arb_device_type(),
    ) {
        let config = EngineConfig::default();
        let adapted = adapt::adapt(&knowledge, &student, difficulty, &config)
            .expect("generated inputs are valid");

        let subject = Subject::parse(&knowledge.subject);
        let narrative = narrative_elements(student.age, &config.narrative);
        let optimization = select_optimization(device_type, &config.devices);
        let specification = assemble(
            &knowledge,
            &student,
            &adapted,
            subject_style(subject, &config.styles),
            &narrative,
            &optimization,
            difficulty,
            &config.assembler,
        )
        .expect("assembly of adapted content succeeds");

        prop_assert_eq!(specification.sections().len(), SectionKind::ALL.len());
        let text = specification.text();
        let mut last = 0usize;
        for kind in SectionKind::ALL {
            let header = format!("## {}", kind.header());
            let position = text.find(&header);
            prop_assert!(position.is_some(), "missing {}", header);
            let position = position.unwrap_or_default();
            prop_assert!(position >= last);
            last = position;
        }
    }

    /// The fallback template accepts any printable subject and concept.
    #[test]
    fn fallback_always_references_the_request(
        subject in "\\PC{1,24}",
        concept in "\\PC{1,24}",
    ) {
        let specification = fallback(&subject, &concept);
        prop_assert!(specification.is_fallback());
        prop_assert!(!specification.text().is_empty());
        prop_assert!(specification.text().contains(&subject));
        prop_assert!(specification.text().contains(&concept));
    }
}
