//! Recommendation tiers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationLevel {
    /// score >= 50
    StronglyRecommended,
    /// 25 <= score < 50
    Recommended,
    /// 0 <= score < 25
    Neutral,
    /// score < 0
    NotRecommended,
}

impl RecommendationLevel {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 50 => RecommendationLevel::StronglyRecommended,
            s if s >= 25 => RecommendationLevel::Recommended,
            s if s >= 0 => RecommendationLevel::Neutral,
            _ => RecommendationLevel::NotRecommended,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationLevel::StronglyRecommended => "STRONGLY RECOMMENDED",
            RecommendationLevel::Recommended => "RECOMMENDED",
            RecommendationLevel::Neutral => "NEUTRAL",
            RecommendationLevel::NotRecommended => "NOT RECOMMENDED",
        }
    }

    /// Style hook used by the dashboard front end
    pub fn css_class(&self) -> &'static str {
        match self {
            RecommendationLevel::StronglyRecommended | RecommendationLevel::Recommended => {
                "recommended"
            }
            RecommendationLevel::Neutral => "neutral",
            RecommendationLevel::NotRecommended => "not-recommended",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            RecommendationLevel::StronglyRecommended => {
                "Apply this fleet configuration immediately"
            }
            RecommendationLevel::Recommended => "Consider applying after further analysis",
            RecommendationLevel::Neutral => "Marginal benefit; optional",
            RecommendationLevel::NotRecommended => {
                "Do not apply; current fleet performs better"
            }
        }
    }
}

impl std::fmt::Display for RecommendationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Scored adoption recommendation for a fleet change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub level: RecommendationLevel,
    pub css_class: String,
    pub action: String,
    pub score: i32,
    /// Triggered scoring rules, in evaluation order
    pub reasons: Vec<String>,
}

impl Recommendation {
    pub fn from_score(score: i32, reasons: Vec<String>) -> Self {
        let level = RecommendationLevel::from_score(score);
        Self {
            level,
            css_class: level.css_class().to_string(),
            action: level.action().to_string(),
            score,
            reasons,
        }
    }
}
