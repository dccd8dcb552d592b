use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 9.0;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("score {value} for {field} is outside the {MIN_SCORE:.1}-{MAX_SCORE:.1} band range")]
    ScoreOutOfRange { field: &'static str, value: f64 },
    #[error("unknown skill category: {0}")]
    UnknownCategory(String),
}

/// One student's speaking assessment, as delivered by the record feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub student_id: String,
    pub student_name: String,
    pub test_date: String,
    pub overall_score: f64,
    pub skills: SkillScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScores {
    pub pronunciation: f64,
    pub fluency: f64,
    pub vocabulary: f64,
    pub grammar: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Overall,
    Pronunciation,
    Fluency,
    Vocabulary,
    Grammar,
}

impl SkillCategory {
    /// The four charted skills, in display order.
    pub const SKILLS: [SkillCategory; 4] = [
        Self::Pronunciation,
        Self::Fluency,
        Self::Vocabulary,
        Self::Grammar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Pronunciation => "pronunciation",
            Self::Fluency => "fluency",
            Self::Vocabulary => "vocabulary",
            Self::Grammar => "grammar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Pronunciation => "Pronunciation",
            Self::Fluency => "Fluency",
            Self::Vocabulary => "Vocabulary",
            Self::Grammar => "Grammar",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = RecordError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "overall" => Ok(Self::Overall),
            "pronunciation" => Ok(Self::Pronunciation),
            "fluency" => Ok(Self::Fluency),
            "vocabulary" => Ok(Self::Vocabulary),
            "grammar" => Ok(Self::Grammar),
            other => Err(RecordError::UnknownCategory(other.to_string())),
        }
    }
}

impl AssessmentRecord {
    pub fn score_for(&self, category: SkillCategory) -> f64 {
        match category {
            SkillCategory::Overall => self.overall_score,
            SkillCategory::Pronunciation => self.skills.pronunciation,
            SkillCategory::Fluency => self.skills.fluency,
            SkillCategory::Vocabulary => self.skills.vocabulary,
            SkillCategory::Grammar => self.skills.grammar,
        }
    }

    /// Rejects any of the five scores falling outside the band range.
    pub fn validate(&self) -> Result<(), RecordError> {
        let fields = [
            ("overallScore", self.overall_score),
            ("skills.pronunciation", self.skills.pronunciation),
            ("skills.fluency", self.skills.fluency),
            ("skills.vocabulary", self.skills.vocabulary),
            ("skills.grammar", self.skills.grammar),
        ];

        for (field, value) in fields {
            // NaN fails the range check as well.
            if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(RecordError::ScoreOutOfRange { field, value });
            }
        }

        Ok(())
    }

    pub fn sample() -> Self {
        Self {
            student_id: "ST-2026-0147".to_string(),
            student_name: "Mina Okafor".to_string(),
            test_date: "2026-05-14".to_string(),
            overall_score: 7.5,
            skills: SkillScores {
                pronunciation: 8.0,
                fluency: 7.5,
                vocabulary: 7.0,
                grammar: 7.5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_json_shape() {
        let input = r#"{
            "studentId": "ST-001",
            "studentName": "Avery Lee",
            "testDate": "2026-03-02",
            "overallScore": 6.5,
            "skills": {
                "pronunciation": 6.0,
                "fluency": 6.5,
                "vocabulary": 7.0,
                "grammar": 6.5
            }
        }"#;
        let record: AssessmentRecord = serde_json::from_str(input).unwrap();
        assert_eq!(record.student_id, "ST-001");
        assert_eq!(record.overall_score, 6.5);
        assert_eq!(record.skills.vocabulary, 7.0);
    }

    #[test]
    fn sample_round_trips_through_json() {
        let sample = AssessmentRecord::sample();
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains("\"studentName\""));
        assert!(json.contains("\"overallScore\""));
        let parsed: AssessmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample);
    }

    #[test]
    fn validation_accepts_band_boundaries() {
        let mut record = AssessmentRecord::sample();
        record.overall_score = 0.0;
        record.skills.grammar = 9.0;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn validation_rejects_out_of_range_scores() {
        let mut record = AssessmentRecord::sample();
        record.skills.fluency = 9.5;
        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            RecordError::ScoreOutOfRange {
                field: "skills.fluency",
                ..
            }
        ));

        record.skills.fluency = -0.5;
        assert!(record.validate().is_err());
    }

    #[test]
    fn category_parses_known_names() {
        assert_eq!(
            "pronunciation".parse::<SkillCategory>().unwrap(),
            SkillCategory::Pronunciation
        );
        assert_eq!(
            "Overall".parse::<SkillCategory>().unwrap(),
            SkillCategory::Overall
        );
    }

    #[test]
    fn category_rejects_unknown_names() {
        let err = "listening".parse::<SkillCategory>().unwrap_err();
        assert!(matches!(err, RecordError::UnknownCategory(name) if name == "listening"));
    }
}
