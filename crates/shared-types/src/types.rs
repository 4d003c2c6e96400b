use chrono::{DateTime, Utc};

/// What kind of defect an issue describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Structure,
    Metadata,
    Content,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Structure => write!(f, "Structure"),
            Category::Metadata => write!(f, "Metadata"),
            Category::Content => write!(f, "Content"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl Severity {
    /// Deduction weight used by the compliance score
    pub fn weight(self) -> u32 {
        match self {
            Severity::Critical => 3,
            Severity::Major => 2,
            Severity::Minor => 1,
        }
    }

    /// Remediation guidance shown next to issues of this severity
    pub fn recommendation(self) -> &'static str {
        match self {
            Severity::Critical => {
                "Must be resolved before document approval. This issue prevents compliance certification."
            }
            Severity::Major => {
                "Should be resolved promptly. This issue may impact audit outcomes."
            }
            Severity::Minor => {
                "Consider addressing during next revision. This issue represents a best practice opportunity."
            }
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::Major => write!(f, "Major"),
            Severity::Minor => write!(f, "Minor"),
        }
    }
}

/// A single rule violation found in a document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    pub id: String, // e.g., "missing-purpose"
    pub category: Category,
    pub severity: Severity,
    pub description: String,
    pub location: String, // Section name or "Document header"
    pub rule: String,
}

/// Outcome of one evaluation, immutable once produced
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub document_id: String,
    pub score: u8,
    pub issues: Vec<Issue>,
    pub timestamp: DateTime<Utc>,
    pub process_time: f64, // Seconds
}

impl ValidationResult {
    pub fn summary(&self) -> IssueSummary {
        IssueSummary::from_issues(&self.issues)
    }

    pub fn status(&self) -> ScoreStatus {
        ScoreStatus::from_score(self.score)
    }

    /// Issues of one severity, in evaluation order
    pub fn issues_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// Issues of one category, in evaluation order
    pub fn issues_in_category(&self, category: Category) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.category == category)
    }

    /// Remediation advice for every issue, in evaluation order
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.issues.iter().map(Recommendation::for_issue).collect()
    }
}

/// Remediation advice attached to one reported issue
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub issue_id: String,
    pub severity: Severity,
    pub text: &'static str,
}

impl Recommendation {
    pub fn for_issue(issue: &Issue) -> Self {
        Self {
            issue_id: issue.id.clone(),
            severity: issue.severity,
            text: issue.severity.recommendation(),
        }
    }
}

/// Issue counts per severity and category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IssueSummary {
    pub total: usize,
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub structure: usize,
    pub metadata: usize,
    pub content: usize,
}

impl IssueSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut summary = Self {
            total: issues.len(),
            ..Self::default()
        };

        for issue in issues {
            match issue.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Major => summary.major += 1,
                Severity::Minor => summary.minor += 1,
            }
            match issue.category {
                Category::Structure => summary.structure += 1,
                Category::Metadata => summary.metadata += 1,
                Category::Content => summary.content += 1,
            }
        }

        summary
    }
}

/// Audit readiness band derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    AuditReady,
    MinorIssues,
    NeedsImprovement,
}

impl ScoreStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreStatus::AuditReady,
            70..=89 => ScoreStatus::MinorIssues,
            _ => ScoreStatus::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreStatus::AuditReady => "Audit Ready",
            ScoreStatus::MinorIssues => "Minor Issues",
            ScoreStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}
