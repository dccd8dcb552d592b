use crate::core::classify::PerformanceTier;
use crate::record::SkillCategory;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type FeedbackKey = (SkillCategory, PerformanceTier);

// Fixed narrative table: one sentence per (category, tier) pair. Static
// configuration data, built once at first use.
static FEEDBACK: Lazy<HashMap<FeedbackKey, &'static str>> = Lazy::new(|| {
    use PerformanceTier::*;
    use SkillCategory::*;

    HashMap::from([
        (
            (Overall, Excellent),
            "An expert speaker who communicates with full flexibility and precision in any context.",
        ),
        (
            (Overall, VeryGood),
            "A capable speaker who handles complex language well with only occasional inaccuracies.",
        ),
        (
            (Overall, Good),
            "A competent speaker who communicates effectively despite noticeable lapses in accuracy.",
        ),
        (
            (Overall, Moderate),
            "A modest speaker who conveys basic meaning but struggles in complex exchanges.",
        ),
        (
            (Overall, NeedsImprovement),
            "A limited speaker whose communication breaks down outside familiar situations.",
        ),
        (
            (Pronunciation, Excellent),
            "Uses the full range of pronunciation features with precision and is effortless to understand.",
        ),
        (
            (Pronunciation, VeryGood),
            "Easy to understand throughout; accent has minimal effect on clarity.",
        ),
        (
            (Pronunciation, Good),
            "Generally clear, though mispronunciations occasionally demand listener effort.",
        ),
        (
            (Pronunciation, Moderate),
            "Frequent mispronunciations reduce clarity and individual words are often unclear.",
        ),
        (
            (Pronunciation, NeedsImprovement),
            "Pronunciation problems cause severe strain for the listener.",
        ),
        (
            (Fluency, Excellent),
            "Speaks at length with natural flow, pausing only to gather ideas rather than words.",
        ),
        (
            (Fluency, VeryGood),
            "Maintains extended speech with ease; hesitation is rare and barely noticeable.",
        ),
        (
            (Fluency, Good),
            "Keeps going at length, though repetition and self-correction interrupt the flow.",
        ),
        (
            (Fluency, Moderate),
            "Relies on pauses and repetition, and flow breaks down in longer turns.",
        ),
        (
            (Fluency, NeedsImprovement),
            "Speech is slow and fragmented, with long pauses between simple utterances.",
        ),
        (
            (Vocabulary, Excellent),
            "Uses vocabulary with full flexibility, including idiomatic language, across all topics.",
        ),
        (
            (Vocabulary, VeryGood),
            "A wide resource used flexibly; less common items appear with only occasional slips.",
        ),
        (
            (Vocabulary, Good),
            "Sufficient range for familiar topics, but word choice is sometimes imprecise.",
        ),
        (
            (Vocabulary, Moderate),
            "A limited range forces frequent circumlocution on unfamiliar topics.",
        ),
        (
            (Vocabulary, NeedsImprovement),
            "Vocabulary covers only isolated words and memorized phrases.",
        ),
        (
            (Grammar, Excellent),
            "Uses the full range of structures accurately and naturally in all contexts.",
        ),
        (
            (Grammar, VeryGood),
            "A wide range of structures with most sentences error-free.",
        ),
        (
            (Grammar, Good),
            "Mixes simple and complex forms, with errors that rarely obscure meaning.",
        ),
        (
            (Grammar, Moderate),
            "Basic forms are reliable, but attempts at complex structures usually break down.",
        ),
        (
            (Grammar, NeedsImprovement),
            "Produces mainly memorized patterns, and grammatical errors are constant.",
        ),
    ])
});

/// Narrative line for a score in the given category.
pub fn feedback_for(category: SkillCategory, score: f64) -> &'static str {
    let tier = PerformanceTier::from_score(score);
    FEEDBACK
        .get(&(category, tier))
        .copied()
        .expect("feedback table covers every category and tier")
}
