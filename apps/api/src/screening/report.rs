//! Screening pipeline: lowercases extracted text, scores it, matches roles and
//! packages the result for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::screening::keyword_scorer::{keyword_hits, score, CategoryCounts, KeywordHit};
use crate::screening::roles::{match_roles, BreakdownEntry, Role, RoleMatch};
use crate::screening::taxonomy::Category;

/// Scores at or above this render as a full progress bar.
pub const FULL_FIT_SCORE: f64 = 10.0;

pub const NO_MATCH_HEADLINE: &str = "Resume does not meet requirements for any targeted roles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    Pdf,
    Text,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch {
    pub rank: usize,
    pub role: Role,
    pub score: f64,
    /// `min(score / 10, 1)`, for progress display.
    pub fit_ratio: f64,
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTally {
    pub category: Category,
    pub title: String,
    pub count: u32,
    /// Terms that occurred at least once, in taxonomy order.
    pub hits: Vec<KeywordHit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub report_id: Uuid,
    pub screened_at: DateTime<Utc>,
    pub source: DocumentSource,
    pub headline: String,
    pub matches: Vec<RankedMatch>,
    pub categories: Vec<CategoryTally>,
    pub counts: CategoryCounts,
    pub total: u32,
}

/// Runs the full screening pass over raw extracted text.
pub fn screen_text(raw_text: &str, source: DocumentSource) -> ScreeningReport {
    let text = raw_text.to_lowercase();
    let counts = score(&text);
    let matches = match_roles(&counts);

    info!(
        source = ?source,
        total = counts.total(),
        match_count = matches.len(),
        top_role = matches.first().map(|m| m.role.name()).unwrap_or("none"),
        "Screened document"
    );

    build_report(&text, counts, matches, source)
}

fn build_report(
    text: &str,
    counts: CategoryCounts,
    matches: Vec<RoleMatch>,
    source: DocumentSource,
) -> ScreeningReport {
    let headline = build_headline(matches.len());

    let matches = matches
        .into_iter()
        .enumerate()
        .map(|(i, m)| RankedMatch {
            rank: i + 1,
            role: m.role,
            fit_ratio: fit_ratio(m.score),
            score: m.score,
            breakdown: m.breakdown,
        })
        .collect();

    let categories = counts
        .iter()
        .map(|(category, count)| CategoryTally {
            category,
            title: category.title(),
            count,
            hits: if count == 0 {
                Vec::new()
            } else {
                keyword_hits(text, category)
                    .into_iter()
                    .filter(|h| h.count > 0)
                    .collect()
            },
        })
        .collect();

    ScreeningReport {
        report_id: Uuid::new_v4(),
        screened_at: Utc::now(),
        source,
        headline,
        matches,
        categories,
        total: counts.total(),
        counts,
    }
}

fn build_headline(match_count: usize) -> String {
    if match_count == 0 {
        NO_MATCH_HEADLINE.to_string()
    } else {
        format!("Found {match_count} matching role(s)")
    }
}

fn fit_ratio(score: f64) -> f64 {
    (score / FULL_FIT_SCORE).clamp(0.0, 1.0)
}
