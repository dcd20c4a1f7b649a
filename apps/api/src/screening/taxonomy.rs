//! Taxonomy: the fixed mapping of skill categories to keyword phrases.
//!
//! Terms are lowercase and matched whole-word against already-lowercased text.
//! A term may appear under more than one category (`sql`, `seo`, `javascript`,
//! `data visualization`); each category counts it independently.

use serde::{Deserialize, Serialize};

pub const CATEGORY_COUNT: usize = 16;

/// One of the sixteen fixed skill domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DataScience,
    Statistics,
    DataAnalytics,
    Programming,
    Software,
    Graphic,
    Web,
    Accounting,
    Management,
    SalesMarketing,
    Content,
    GraphicalContent,
    Finance,
    HealthMedical,
    PersonalSkills,
    Languages,
}

impl Category {
    /// All categories in declaration order. `Category as usize` indexes into this.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::DataScience,
        Category::Statistics,
        Category::DataAnalytics,
        Category::Programming,
        Category::Software,
        Category::Graphic,
        Category::Web,
        Category::Accounting,
        Category::Management,
        Category::SalesMarketing,
        Category::Content,
        Category::GraphicalContent,
        Category::Finance,
        Category::HealthMedical,
        Category::PersonalSkills,
        Category::Languages,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::DataScience => "data_science",
            Category::Statistics => "statistics",
            Category::DataAnalytics => "data_analytics",
            Category::Programming => "programming",
            Category::Software => "software",
            Category::Graphic => "graphic",
            Category::Web => "web",
            Category::Accounting => "accounting",
            Category::Management => "management",
            Category::SalesMarketing => "sales_marketing",
            Category::Content => "content",
            Category::GraphicalContent => "graphical_content",
            Category::Finance => "finance",
            Category::HealthMedical => "health_medical",
            Category::PersonalSkills => "personal_skills",
            Category::Languages => "languages",
        }
    }

    /// Display title: underscores become spaces and each word is capitalized.
    pub fn title(self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::DataScience => &[
                "machine learning",
                "deep learning",
                "neural network",
                "data mining",
                "predictive modeling",
                "natural language processing",
                "computer vision",
                "supervised learning",
                "unsupervised learning",
                "reinforcement learning",
            ],
            Category::Statistics => &[
                "statistics",
                "regression",
                "hypothesis testing",
                "anova",
                "bayesian",
                "probability",
                "statistical modeling",
                "ab testing",
                "experimental design",
            ],
            Category::DataAnalytics => &[
                "data analysis",
                "sql",
                "power bi",
                "tableau",
                "excel",
                "etl",
                "data visualization",
                "business intelligence",
                "kpi",
                "metrics",
            ],
            Category::Programming => &[
                "python",
                "java",
                "javascript",
                "c++",
                "r",
                "sql",
                "git",
                "github",
                "debugging",
                "software development",
                "api",
                "rest",
            ],
            Category::Software => &[
                "software engineering",
                "react",
                "angular",
                "django",
                "flask",
                "aws",
                "azure",
                "docker",
                "kubernetes",
                "microservices",
                "agile",
                "scrum",
            ],
            Category::Graphic => &[
                "photoshop",
                "illustrator",
                "indesign",
                "figma",
                "adobe xd",
                "ui/ux",
                "typography",
                "color theory",
                "logo design",
                "branding",
            ],
            Category::Web => &[
                "html",
                "css",
                "javascript",
                "responsive design",
                "wordpress",
                "seo",
                "frontend",
                "backend",
                "full stack",
                "web development",
            ],
            Category::Accounting => &[
                "accounting",
                "bookkeeping",
                "financial statements",
                "gaap",
                "ifrs",
                "taxation",
                "auditing",
                "accounts payable",
                "accounts receivable",
            ],
            Category::Management => &[
                "project management",
                "team leadership",
                "strategic planning",
                "budgeting",
                "performance evaluation",
                "operations management",
                "supply chain",
            ],
            Category::SalesMarketing => &[
                "sales",
                "marketing",
                "digital marketing",
                "social media",
                "seo",
                "ppc",
                "content marketing",
                "brand management",
                "market research",
            ],
            Category::Content => &[
                "content writing",
                "copywriting",
                "blogging",
                "technical writing",
                "seo",
                "social media content",
                "editing",
                "proofreading",
                "creative writing",
            ],
            Category::GraphicalContent => &[
                "infographics",
                "data visualization",
                "presentation design",
                "video editing",
                "motion graphics",
                "photography",
                "illustration",
            ],
            Category::Finance => &[
                "financial analysis",
                "financial modeling",
                "valuation",
                "investment",
                "portfolio management",
                "risk management",
                "corporate finance",
            ],
            Category::HealthMedical => &[
                "surgery",
                "patient care",
                "medical diagnosis",
                "treatment planning",
                "clinical skills",
                "healthcare",
                "medicine",
                "anatomy",
            ],
            Category::PersonalSkills => &[
                "communication",
                "teamwork",
                "leadership",
                "problem solving",
                "critical thinking",
                "adaptability",
                "time management",
                "creativity",
            ],
            Category::Languages => &[
                "english", "malay", "mandarin", "tamil", "spanish", "french", "german",
            ],
        }
    }
}

/// Serializable view of one taxonomy entry, for the read-only API.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTerms {
    pub category: Category,
    pub title: String,
    pub keywords: &'static [&'static str],
}

pub fn describe_taxonomy() -> Vec<CategoryTerms> {
    Category::ALL
        .iter()
        .map(|&category| CategoryTerms {
            category,
            title: category.title(),
            keywords: category.keywords(),
        })
        .collect()
}
