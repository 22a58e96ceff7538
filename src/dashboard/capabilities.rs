//! Built-in agent capability catalog.
//!
//! Lists the kinds of work a swarm agent can be asked to do, grouped by
//! category. Transcripts carry no proficiency data, so the catalog is
//! descriptive only.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityCategory {
    Development,
    Testing,
    Analysis,
    Documentation,
    Security,
    Design,
}

impl std::fmt::Display for CapabilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CapabilityCategory::Development => "development",
            CapabilityCategory::Testing => "testing",
            CapabilityCategory::Analysis => "analysis",
            CapabilityCategory::Documentation => "documentation",
            CapabilityCategory::Security => "security",
            CapabilityCategory::Design => "design",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentCapability {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: CapabilityCategory,
}

const fn capability(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: CapabilityCategory,
) -> AgentCapability {
    AgentCapability {
        id,
        name,
        description,
        category,
    }
}

static CAPABILITIES: &[AgentCapability] = &[
    capability(
        "backend",
        "Backend Development",
        "API design, database integration, business logic",
        CapabilityCategory::Development,
    ),
    capability(
        "frontend",
        "Frontend Development",
        "UI components, state management, user experience",
        CapabilityCategory::Development,
    ),
    capability(
        "database",
        "Database Management",
        "Schema design, queries, optimization",
        CapabilityCategory::Development,
    ),
    capability(
        "testing",
        "Testing & QA",
        "Unit tests, integration tests, e2e tests",
        CapabilityCategory::Testing,
    ),
    capability(
        "documentation",
        "Documentation",
        "API docs, guides, README files",
        CapabilityCategory::Documentation,
    ),
    capability(
        "security",
        "Security Analysis",
        "Vulnerability scanning, security best practices",
        CapabilityCategory::Security,
    ),
    capability(
        "code-review",
        "Code Review",
        "Code quality, best practices, optimization",
        CapabilityCategory::Analysis,
    ),
];

/// All built-in capabilities, in display order.
pub fn catalog() -> &'static [AgentCapability] {
    CAPABILITIES
}

pub fn find(id: &str) -> Option<&'static AgentCapability> {
    CAPABILITIES.iter().find(|c| c.id == id)
}

/// Capabilities in `category`, in catalog order. May be empty.
pub fn by_category(category: CapabilityCategory) -> Vec<&'static AgentCapability> {
    CAPABILITIES
        .iter()
        .filter(|c| c.category == category)
        .collect()
}
