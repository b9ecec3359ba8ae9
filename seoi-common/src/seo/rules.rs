//! Canonical recommendation rule set
//!
//! The length thresholds here are the only ones in the system. Both the
//! recommendation list and the per-tag status view classify lengths through
//! [`classify_title`] and [`classify_description`].
//!
//! # Rule table (evaluated in order, rules are independent)
//! | Condition                          | Type    | Priority |
//! |------------------------------------|---------|----------|
//! | title absent or shorter than 10    | error   | 1        |
//! | title longer than 70               | warning | 2        |
//! | description absent                 | error   | 1        |
//! | description shorter than 100       | warning | 2        |
//! | description longer than 160        | warning | 2        |
//! | `og:image` absent                  | error   | 3        |
//! | `twitter:card` absent              | warning | 3        |
//! | `canonical` absent                 | warning | 2        |

use serde::{Deserialize, Serialize};

use super::types::{MetaTagSet, Recommendation, RecommendationType};

pub const TITLE_MIN_LEN: usize = 10;
pub const TITLE_MAX_LEN: usize = 70;
pub const DESCRIPTION_MIN_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 160;

/// Length classification of a text tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthVerdict {
    Missing,
    TooShort,
    TooLong,
    Ok,
}

fn classify(content: Option<&str>, min: usize, max: usize) -> LengthVerdict {
    match content {
        None => LengthVerdict::Missing,
        Some(text) => {
            let len = text.chars().count();
            if len < min {
                LengthVerdict::TooShort
            } else if len > max {
                LengthVerdict::TooLong
            } else {
                LengthVerdict::Ok
            }
        }
    }
}

/// Classify the `title` tag
pub fn classify_title(tags: &MetaTagSet) -> LengthVerdict {
    classify(tags.present("title"), TITLE_MIN_LEN, TITLE_MAX_LEN)
}

/// Classify the `description` tag
pub fn classify_description(tags: &MetaTagSet) -> LengthVerdict {
    classify(
        tags.present("description"),
        DESCRIPTION_MIN_LEN,
        DESCRIPTION_MAX_LEN,
    )
}

fn rec(
    kind: RecommendationType,
    priority: u8,
    title: &str,
    description: &str,
    steps: &[&str],
) -> Recommendation {
    Recommendation {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        steps: Some(steps.iter().map(|s| s.to_string()).collect()),
        priority: Some(priority),
    }
}

/// Evaluate the rule table against a tag set
///
/// Output is in rule order. Use [`sort_by_priority`] for priority order.
pub fn recommend(tags: &MetaTagSet) -> Vec<Recommendation> {
    use RecommendationType::{Error, Warning};

    let mut out = Vec::new();

    match classify_title(tags) {
        LengthVerdict::Missing | LengthVerdict::TooShort => out.push(rec(
            Error,
            1,
            "Missing or Short Title Tag",
            "Add a descriptive title tag between 50-60 characters.",
            &[
                "Open the HTML template that renders the page <head>.",
                "Add or edit the <title> element so it names the page topic first.",
                "Keep the title between 50 and 60 characters.",
            ],
        )),
        LengthVerdict::TooLong => out.push(rec(
            Warning,
            2,
            "Title Tag Too Long",
            "Your title exceeds 70 characters. Search engines may truncate titles longer than 60 characters. Consider making it more concise.",
            &[
                "Move the most important keywords to the start of the title.",
                "Drop filler words and repeated brand names.",
                "Trim the title to 60 characters or fewer.",
            ],
        )),
        LengthVerdict::Ok => {}
    }

    match classify_description(tags) {
        LengthVerdict::Missing => out.push(rec(
            Error,
            1,
            "Missing Meta Description",
            "Add a meta description between 140-160 characters to improve click-through rates from search results.",
            &[
                "Add <meta name=\"description\" content=\"...\"> inside <head>.",
                "Summarize the page in one or two sentences.",
                "Aim for 140 to 160 characters.",
            ],
        )),
        LengthVerdict::TooShort => out.push(rec(
            Warning,
            2,
            "Meta Description Too Short",
            "Your meta description is too short. Aim for 140-160 characters for optimal visibility in search results.",
            &[
                "Expand the description with what a visitor will find on the page.",
                "Include a call to action.",
                "Aim for 140 to 160 characters.",
            ],
        )),
        LengthVerdict::TooLong => out.push(rec(
            Warning,
            2,
            "Meta Description Too Long",
            "Your meta description exceeds 160 characters. Search engines may truncate it. Consider making it more concise.",
            &[
                "Put the key message in the first 120 characters.",
                "Trim the description to 160 characters or fewer.",
            ],
        )),
        LengthVerdict::Ok => {}
    }

    if !tags.has("og:image") {
        out.push(rec(
            Error,
            3,
            "Missing Open Graph Image",
            "Add an og:image tag. Images significantly increase engagement when content is shared on social media. Recommended size is 1200×630 pixels.",
            &[
                "Create a 1200×630 pixel preview image for the page.",
                "Host it at a public absolute URL.",
                "Add <meta property=\"og:image\" content=\"https://...\"> inside <head>.",
            ],
        ));
    }

    if !tags.has("twitter:card") {
        out.push(rec(
            Warning,
            3,
            "Missing Twitter Card",
            "Add Twitter Card meta tags to improve how your content appears when shared on Twitter.",
            &[
                "Add <meta name=\"twitter:card\" content=\"summary_large_image\">.",
                "Add twitter:title, twitter:description and twitter:image tags.",
            ],
        ));
    }

    if !tags.has("canonical") {
        out.push(rec(
            Warning,
            2,
            "Missing Canonical Tag",
            "Add a canonical tag to prevent duplicate content issues and consolidate link equity.",
            &[
                "Decide on the preferred URL for this content.",
                "Add <link rel=\"canonical\" href=\"https://...\"> inside <head>.",
            ],
        ));
    }

    out
}

/// Stable sort by priority ascending; entries without a priority go last
pub fn sort_by_priority(recommendations: &mut [Recommendation]) {
    recommendations.sort_by_key(|r| r.priority.unwrap_or(u8::MAX));
}

/// Display status of a single tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAnalysis {
    pub name: String,
    pub content: String,
    pub status: RecommendationType,
    pub message: String,
}

fn tag_analysis(
    name: &str,
    tags: &MetaTagSet,
    status: RecommendationType,
    message: &str,
) -> TagAnalysis {
    TagAnalysis {
        name: name.to_string(),
        content: tags.present(name).unwrap_or_default().to_string(),
        status,
        message: message.to_string(),
    }
}

/// Status of the `title` tag for display
pub fn analyze_title(tags: &MetaTagSet) -> TagAnalysis {
    use RecommendationType::*;
    let (status, message) = match classify_title(tags) {
        LengthVerdict::Missing => (
            Error,
            "Missing title tag. Add a descriptive title between 50-60 characters.",
        ),
        LengthVerdict::TooShort => (
            Error,
            "Title is too short. Aim for 50-60 characters for better visibility in search results.",
        ),
        LengthVerdict::TooLong => (
            Warning,
            "Title is too long. Search engines may truncate titles longer than 60 characters. Consider making it more concise.",
        ),
        LengthVerdict::Ok => (
            Success,
            "Your title tag is within the recommended length. Good job!",
        ),
    };
    tag_analysis("title", tags, status, message)
}

/// Status of the `description` tag for display
pub fn analyze_description(tags: &MetaTagSet) -> TagAnalysis {
    use RecommendationType::*;
    let (status, message) = match classify_description(tags) {
        LengthVerdict::Missing => (
            Error,
            "Missing meta description. Add a description between 140-160 characters to improve click-through rates.",
        ),
        LengthVerdict::TooShort => (
            Warning,
            "Description is too short. Aim for 140-160 characters for optimal visibility in search results.",
        ),
        LengthVerdict::TooLong => (
            Warning,
            "Description is too long. Search engines may truncate descriptions longer than 160 characters. Consider making it more concise.",
        ),
        LengthVerdict::Ok => (
            Success,
            "Your meta description is within the recommended length. Good job!",
        ),
    };
    tag_analysis("description", tags, status, message)
}
