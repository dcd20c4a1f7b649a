//! Role Matcher: a declarative table of nine role rules evaluated in one loop.
//!
//! Each rule is eligible when any of its threshold groups is fully satisfied
//! (OR of ANDs, all `>=`). Every score is a weighted mean of category counts.

use serde::Serialize;

use crate::screening::keyword_scorer::CategoryCounts;
use crate::screening::taxonomy::Category;
use Category::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "Junior Data Scientist")]
    JuniorDataScientist,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Web & Graphic Designer")]
    WebGraphicDesigner,
    #[serde(rename = "Account Executive")]
    AccountExecutive,
    #[serde(rename = "Sales Representative")]
    SalesRepresentative,
    #[serde(rename = "Content Creator")]
    ContentCreator,
    #[serde(rename = "Senior Accountant")]
    SeniorAccountant,
    #[serde(rename = "General Surgeon")]
    GeneralSurgeon,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::JuniorDataScientist => "Junior Data Scientist",
            Role::DataAnalyst => "Data Analyst",
            Role::SoftwareEngineer => "Software Engineer",
            Role::WebGraphicDesigner => "Web & Graphic Designer",
            Role::AccountExecutive => "Account Executive",
            Role::SalesRepresentative => "Sales Representative",
            Role::ContentCreator => "Content Creator",
            Role::SeniorAccountant => "Senior Accountant",
            Role::GeneralSurgeon => "General Surgeon",
        }
    }
}

/// Quantity a threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum Metric {
    Total,
    Category(Category),
}

impl Metric {
    fn read(self, counts: &CategoryCounts) -> u32 {
        match self {
            Metric::Total => counts.total(),
            Metric::Category(c) => counts.get(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Threshold {
    pub metric: Metric,
    pub min: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreTerm {
    pub category: Category,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownField {
    pub label: &'static str,
    pub category: Category,
}

/// One hard-coded role: eligibility, score formula and display breakdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoleRule {
    pub role: Role,
    /// Alternatives; the rule holds if every threshold in any one group holds.
    pub eligibility: &'static [&'static [Threshold]],
    pub score_terms: &'static [ScoreTerm],
    pub breakdown: &'static [BreakdownField],
}

impl RoleRule {
    pub fn is_satisfied(&self, counts: &CategoryCounts) -> bool {
        self.eligibility
            .iter()
            .any(|group| group.iter().all(|t| t.metric.read(counts) >= t.min))
    }

    /// Weighted mean of the score terms: Σ wᵢ·cᵢ / Σ wᵢ.
    pub fn score(&self, counts: &CategoryCounts) -> f64 {
        let weighted: u64 = self
            .score_terms
            .iter()
            .map(|t| u64::from(t.weight) * u64::from(counts.get(t.category)))
            .sum();
        let weights: u64 = self.score_terms.iter().map(|t| u64::from(t.weight)).sum();
        if weights == 0 {
            return 0.0;
        }
        weighted as f64 / weights as f64
    }

    fn breakdown_for(&self, counts: &CategoryCounts) -> Vec<BreakdownEntry> {
        self.breakdown
            .iter()
            .map(|f| BreakdownEntry {
                label: f.label,
                count: counts.get(f.category),
            })
            .collect()
    }
}

/// A role whose rule held for the current document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleMatch {
    pub role: Role,
    pub score: f64,
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub label: &'static str,
    pub count: u32,
}

const fn total(min: u32) -> Threshold {
    Threshold {
        metric: Metric::Total,
        min,
    }
}

const fn at_least(category: Category, min: u32) -> Threshold {
    Threshold {
        metric: Metric::Category(category),
        min,
    }
}

const fn term(category: Category, weight: u32) -> ScoreTerm {
    ScoreTerm { category, weight }
}

const fn field(label: &'static str, category: Category) -> BreakdownField {
    BreakdownField { label, category }
}

/// The nine role rules in declaration order. Ties in score keep this order.
pub static ROLE_RULES: [RoleRule; 9] = [
    RoleRule {
        role: Role::JuniorDataScientist,
        eligibility: &[
            &[total(50), at_least(PersonalSkills, 2), at_least(Statistics, 9)],
            &[total(40), at_least(PersonalSkills, 2), at_least(DataScience, 10)],
            &[total(60), at_least(DataAnalytics, 8)],
        ],
        score_terms: &[term(DataScience, 2), term(Statistics, 2), term(DataAnalytics, 1)],
        breakdown: &[
            field("Data Science", DataScience),
            field("Statistics", Statistics),
            field("Data Analytics", DataAnalytics),
        ],
    },
    RoleRule {
        role: Role::DataAnalyst,
        eligibility: &[&[
            total(30),
            at_least(Statistics, 2),
            at_least(Programming, 3),
            at_least(PersonalSkills, 2),
            at_least(DataAnalytics, 5),
        ]],
        score_terms: &[term(DataAnalytics, 2), term(Statistics, 1), term(Programming, 1)],
        breakdown: &[
            field("Data Analytics", DataAnalytics),
            field("Statistics", Statistics),
            field("Programming", Programming),
        ],
    },
    RoleRule {
        role: Role::SoftwareEngineer,
        eligibility: &[&[total(20), at_least(Software, 10)]],
        score_terms: &[term(Software, 2), term(Programming, 1)],
        breakdown: &[field("Software", Software), field("Programming", Programming)],
    },
    RoleRule {
        role: Role::WebGraphicDesigner,
        eligibility: &[&[
            total(18),
            at_least(PersonalSkills, 2),
            at_least(Graphic, 5),
            at_least(Web, 10),
        ]],
        score_terms: &[term(Web, 1), term(Graphic, 1)],
        breakdown: &[field("Web Skills", Web), field("Graphic Skills", Graphic)],
    },
    RoleRule {
        role: Role::AccountExecutive,
        eligibility: &[&[total(50), at_least(PersonalSkills, 2), at_least(Accounting, 10)]],
        score_terms: &[term(Accounting, 1)],
        breakdown: &[field("Accounting", Accounting)],
    },
    RoleRule {
        role: Role::SalesRepresentative,
        eligibility: &[&[
            total(20),
            at_least(Management, 2),
            at_least(PersonalSkills, 2),
            at_least(SalesMarketing, 10),
        ]],
        score_terms: &[term(SalesMarketing, 1)],
        breakdown: &[field("Sales & Marketing", SalesMarketing)],
    },
    RoleRule {
        role: Role::ContentCreator,
        eligibility: &[&[
            total(25),
            at_least(PersonalSkills, 2),
            at_least(Content, 8),
            at_least(GraphicalContent, 10),
        ]],
        score_terms: &[term(Content, 1), term(GraphicalContent, 1)],
        breakdown: &[
            field("Content Skills", Content),
            field("Graphical Content", GraphicalContent),
        ],
    },
    RoleRule {
        role: Role::SeniorAccountant,
        eligibility: &[&[
            total(30),
            at_least(Management, 4),
            at_least(PersonalSkills, 2),
            at_least(Finance, 10),
        ]],
        score_terms: &[term(Finance, 1)],
        breakdown: &[field("Finance", Finance)],
    },
    RoleRule {
        role: Role::GeneralSurgeon,
        eligibility: &[&[total(20), at_least(PersonalSkills, 2), at_least(HealthMedical, 10)]],
        score_terms: &[term(HealthMedical, 1)],
        breakdown: &[field("Health/Medical", HealthMedical)],
    },
];

/// Evaluates every role rule and returns the satisfied ones, best score first.
pub fn match_roles(counts: &CategoryCounts) -> Vec<RoleMatch> {
    let mut matches: Vec<RoleMatch> = ROLE_RULES
        .iter()
        .filter(|rule| rule.is_satisfied(counts))
        .map(|rule| RoleMatch {
            role: rule.role,
            score: rule.score(counts),
            breakdown: rule.breakdown_for(counts),
        })
        .collect();

    // sort_by is stable: equal scores keep declaration order
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}
