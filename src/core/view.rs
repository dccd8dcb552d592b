use crate::core::classify::{PerformanceTier, StyleTier};
use crate::core::feedback;
use crate::record::{AssessmentRecord, MAX_SCORE, SkillCategory};
use serde::Serialize;

/// Display-ready values for one metric (overall or a single skill).
#[derive(Debug, Clone, Serialize)]
pub struct MetricView {
    pub label: &'static str,
    pub score: f64,
    pub formatted_score: String,
    pub performance_tier: PerformanceTier,
    pub style_tier: StyleTier,
    pub feedback: &'static str,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Everything the rendering sink needs; building it has no side effects.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub student_id: String,
    pub student_name: String,
    pub test_date: String,
    pub overall: MetricView,
    pub skills: Vec<MetricView>,
    pub chart_series: Vec<ChartPoint>,
}

impl ViewModel {
    pub fn build(record: &AssessmentRecord) -> Self {
        let skills = SkillCategory::SKILLS
            .iter()
            .map(|&category| MetricView::build(category, record.score_for(category)))
            .collect();

        let chart_series = SkillCategory::SKILLS
            .iter()
            .map(|&category| ChartPoint {
                label: category.label(),
                value: record.score_for(category),
            })
            .collect();

        Self {
            student_id: record.student_id.clone(),
            student_name: record.student_name.clone(),
            test_date: record.test_date.clone(),
            overall: MetricView::build(SkillCategory::Overall, record.overall_score),
            skills,
            chart_series,
        }
    }
}

impl MetricView {
    fn build(category: SkillCategory, score: f64) -> Self {
        Self {
            label: category.label(),
            score,
            formatted_score: format_score(score),
            performance_tier: PerformanceTier::from_score(score),
            style_tier: StyleTier::from_score(score),
            feedback: feedback::feedback_for(category, score),
            progress: progress_fraction(score),
        }
    }
}

pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

pub fn progress_fraction(score: f64) -> f64 {
    (score / MAX_SCORE).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_view_for_the_sample_record() {
        let view = ViewModel::build(&AssessmentRecord::sample());

        assert_eq!(view.overall.formatted_score, "7.5");
        assert_eq!(view.overall.style_tier, StyleTier::Good);
        assert_eq!(view.overall.performance_tier, PerformanceTier::VeryGood);

        let pronunciation = &view.skills[0];
        assert_eq!(pronunciation.label, "Pronunciation");
        assert_eq!(pronunciation.style_tier, StyleTier::Excellent);
        assert!((pronunciation.progress - 8.0 / 9.0).abs() < 1e-9);

        let grammar = &view.skills[3];
        assert_eq!(grammar.label, "Grammar");
        assert_eq!(grammar.style_tier, StyleTier::Good);
    }

    #[test]
    fn chart_series_keeps_the_fixed_skill_order() {
        let view = ViewModel::build(&AssessmentRecord::sample());
        let labels: Vec<&str> = view.chart_series.iter().map(|point| point.label).collect();
        assert_eq!(
            labels,
            vec!["Pronunciation", "Fluency", "Vocabulary", "Grammar"]
        );
        assert_eq!(view.chart_series[2].value, 7.0);
    }

    #[test]
    fn formatting_round_trips_within_tolerance() {
        for &score in &[0.0, 4.999, 5.0, 6.45, 7.123, 8.88, 9.0] {
            let reparsed: f64 = format_score(score).parse().unwrap();
            assert!((reparsed - score).abs() < 0.05, "score {score}");
        }
    }

    #[test]
    fn progress_is_clamped_to_the_unit_interval() {
        assert_eq!(progress_fraction(9.0), 1.0);
        assert_eq!(progress_fraction(0.0), 0.0);
        assert_eq!(progress_fraction(12.0), 1.0);
        assert_eq!(progress_fraction(-2.0), 0.0);
        assert!((progress_fraction(4.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn metric_feedback_matches_its_category_and_tier() {
        let view = ViewModel::build(&AssessmentRecord::sample());
        assert_eq!(
            view.overall.feedback,
            crate::core::feedback::feedback_for(SkillCategory::Overall, 7.5)
        );
        assert_eq!(
            view.skills[1].feedback,
            crate::core::feedback::feedback_for(SkillCategory::Fluency, 7.5)
        );
    }
}
