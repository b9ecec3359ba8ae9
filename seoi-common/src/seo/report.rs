//! Derived report views
//!
//! Pure functions of an [`AnalysisResult`]: score rating, per-category tag
//! coverage, per-tag status and social preview cards.

use serde::{Deserialize, Serialize};

use super::checklist::percent_rounded;
use super::rules::{analyze_description, analyze_title, TagAnalysis};
use super::target::display_domain;
use super::types::{AnalysisResult, MetaTagSet, RecommendationType};

/// Overall score band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreRating::Excellent
        } else if score >= 60 {
            ScoreRating::Good
        } else {
            ScoreRating::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// A named group of tags reported together
#[derive(Debug, Clone, Copy)]
pub struct TagCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const TAG_CATEGORIES: [TagCategory; 3] = [
    TagCategory {
        key: "essential",
        name: "Essential Tags",
        description: "Core tags required for basic SEO",
        tags: &["title", "description", "canonical", "viewport"],
    },
    TagCategory {
        key: "social",
        name: "Social Media",
        description: "Tags for social media platforms",
        tags: &[
            "og:title",
            "og:description",
            "og:image",
            "og:url",
            "og:type",
            "twitter:card",
            "twitter:title",
            "twitter:description",
            "twitter:image",
        ],
    },
    TagCategory {
        key: "technical",
        name: "Technical",
        description: "Technical SEO settings",
        tags: &["robots", "language", "charset", "viewport", "revisit-after"],
    },
];

/// Coverage of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub key: String,
    pub name: String,
    pub description: String,
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub percentage: u8,
    pub status: RecommendationType,
}

fn coverage_status(percentage: u8) -> RecommendationType {
    if percentage >= 80 {
        RecommendationType::Success
    } else if percentage >= 50 {
        RecommendationType::Warning
    } else {
        RecommendationType::Error
    }
}

/// Coverage for every category in [`TAG_CATEGORIES`]
pub fn category_breakdown(tags: &MetaTagSet) -> Vec<CategoryBreakdown> {
    TAG_CATEGORIES
        .iter()
        .map(|category| {
            let (found, missing): (Vec<&str>, Vec<&str>) =
                category.tags.iter().copied().partition(|tag| tags.has(tag));
            let percentage = percent_rounded(found.len(), category.tags.len());
            CategoryBreakdown {
                key: category.key.to_string(),
                name: category.name.to_string(),
                description: category.description.to_string(),
                found: found.into_iter().map(str::to_string).collect(),
                missing: missing.into_iter().map(str::to_string).collect(),
                percentage,
                status: coverage_status(percentage),
            }
        })
        .collect()
}

/// Open Graph share card as a consumer would render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphCard {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Twitter share card as a consumer would render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPreview {
    pub domain: String,
    pub open_graph: OpenGraphCard,
    pub twitter: TwitterCard,
}

fn first_present(tags: &MetaTagSet, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| tags.present(name))
        .map(str::to_string)
}

/// Build share cards, falling back from platform tags to generic ones
///
/// Open Graph falls back to `title`/`description`; Twitter falls back to the
/// resolved Open Graph values.
pub fn social_preview(url: &str, tags: &MetaTagSet) -> SocialPreview {
    let open_graph = OpenGraphCard {
        title: first_present(tags, &["og:title", "title"]).unwrap_or_default(),
        description: first_present(tags, &["og:description", "description"])
            .unwrap_or_default(),
        image: first_present(tags, &["og:image"]),
    };

    let twitter = TwitterCard {
        card: first_present(tags, &["twitter:card"]),
        title: first_present(tags, &["twitter:title"])
            .unwrap_or_else(|| open_graph.title.clone()),
        description: first_present(tags, &["twitter:description"])
            .unwrap_or_else(|| open_graph.description.clone()),
        image: first_present(tags, &["twitter:image"]).or_else(|| open_graph.image.clone()),
    };

    SocialPreview {
        domain: display_domain(url).to_string(),
        open_graph,
        twitter,
    }
}

/// Everything a client needs to render an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub url: String,
    pub score: u8,
    pub rating: ScoreRating,
    pub tags: Vec<TagAnalysis>,
    pub categories: Vec<CategoryBreakdown>,
    pub social_preview: SocialPreview,
}

/// Build the full report for a result
pub fn build_report(result: &AnalysisResult) -> AnalysisReport {
    let tags = &result.meta_tags;
    AnalysisReport {
        url: result.url.clone(),
        score: result.score,
        rating: ScoreRating::from_score(result.score),
        tags: vec![analyze_title(tags), analyze_description(tags)],
        categories: category_breakdown(tags),
        social_preview: social_preview(&result.url, tags),
    }
}
