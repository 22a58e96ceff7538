//! Built-in swarm templates.
//!
//! A template is a predefined set of agents (type, role, task) for a common
//! kind of job. Picking one produces a launch prompt that asks the assistant
//! to initialize the swarm; nothing here spawns anything itself.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(label)
    }
}

/// One agent slot of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateAgent {
    #[serde(rename = "type")]
    pub agent_type: &'static str,
    pub role: &'static str,
    pub task: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwarmTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub agents: &'static [TemplateAgent],
    pub estimated_duration: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
}

impl SwarmTemplate {
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

const fn agent(agent_type: &'static str, role: &'static str, task: &'static str) -> TemplateAgent {
    TemplateAgent {
        agent_type,
        role,
        task,
    }
}

static TEMPLATES: &[SwarmTemplate] = &[
    SwarmTemplate {
        id: "full-stack",
        name: "Full-Stack Development",
        description: "Complete feature development with backend, frontend, testing, and documentation",
        agents: &[
            agent("backend-developer", "Backend Developer", "Implement API endpoints and business logic"),
            agent("frontend-developer", "Frontend Developer", "Build UI components and user experience"),
            agent("test-engineer", "Test Engineer", "Write unit and integration tests"),
            agent("tech-writer", "Technical Writer", "Create API documentation and user guides"),
        ],
        estimated_duration: "15-30 min",
        difficulty: Difficulty::Intermediate,
        tags: &["development", "full-stack", "testing", "documentation"],
    },
    SwarmTemplate {
        id: "code-review",
        name: "Code Review Swarm",
        description: "Comprehensive code analysis for security, performance, and best practices",
        agents: &[
            agent("security-analyst", "Security Analyst", "Identify security vulnerabilities and risks"),
            agent("performance-engineer", "Performance Engineer", "Find performance bottlenecks and optimizations"),
            agent("code-quality-reviewer", "Code Quality Reviewer", "Check code style and best practices"),
        ],
        estimated_duration: "10-20 min",
        difficulty: Difficulty::Beginner,
        tags: &["review", "security", "performance", "quality"],
    },
    SwarmTemplate {
        id: "migration",
        name: "Migration & Refactor",
        description: "Systematic code migration or refactoring with analysis and testing",
        agents: &[
            agent("code-analyzer", "Code Analyzer", "Analyze existing codebase and dependencies"),
            agent("refactor-engineer", "Refactor Engineer", "Migrate and refactor code systematically"),
            agent("test-engineer", "Test Engineer", "Ensure functionality preserved"),
            agent("migration-validator", "Migration Validator", "Validate migration completeness"),
        ],
        estimated_duration: "20-40 min",
        difficulty: Difficulty::Advanced,
        tags: &["migration", "refactoring", "testing", "analysis"],
    },
    SwarmTemplate {
        id: "documentation",
        name: "Documentation Suite",
        description: "Generate comprehensive documentation: API docs, README, examples",
        agents: &[
            agent("api-documenter", "API Documenter", "Generate API reference documentation"),
            agent("readme-writer", "README Writer", "Create comprehensive README with examples"),
            agent("example-creator", "Example Creator", "Build code examples and tutorials"),
        ],
        estimated_duration: "10-15 min",
        difficulty: Difficulty::Beginner,
        tags: &["documentation", "examples", "readme"],
    },
    SwarmTemplate {
        id: "security-audit",
        name: "Security Audit",
        description: "Deep security analysis with vulnerability scanning and remediation",
        agents: &[
            agent("vulnerability-scanner", "Vulnerability Scanner", "Scan for known vulnerabilities"),
            agent("security-architect", "Security Architect", "Review security architecture and design"),
            agent("penetration-tester", "Penetration Tester", "Test for security weaknesses"),
        ],
        estimated_duration: "15-25 min",
        difficulty: Difficulty::Advanced,
        tags: &["security", "audit", "vulnerabilities"],
    },
    SwarmTemplate {
        id: "bug-fix",
        name: "Bug Investigation",
        description: "Systematic bug investigation, diagnosis, fix, and testing",
        agents: &[
            agent("bug-investigator", "Bug Investigator", "Analyze and reproduce the bug"),
            agent("fix-engineer", "Fix Engineer", "Implement the bug fix"),
            agent("regression-tester", "Regression Tester", "Test fix and check for regressions"),
        ],
        estimated_duration: "10-20 min",
        difficulty: Difficulty::Intermediate,
        tags: &["debugging", "testing", "bug-fix"],
    },
];

/// All built-in templates, in display order.
pub fn catalog() -> &'static [SwarmTemplate] {
    TEMPLATES
}

pub fn find(id: &str) -> Option<&'static SwarmTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Templates carrying `tag` (case-insensitive).
pub fn with_tag(tag: &str) -> Vec<&'static SwarmTemplate> {
    TEMPLATES.iter().filter(|t| t.has_tag(tag)).collect()
}

/// Compose the swarm initialization prompt for a template.
///
/// Blank custom instructions are treated as absent.
pub fn launch_prompt(template: &SwarmTemplate, custom_instructions: Option<&str>) -> String {
    let mut prompt = format!(
        "Initialize a swarm using the \"{}\" template.\n\n{}.\n\nSpawn the following {} agents:\n",
        template.name,
        template.description,
        template.agent_count()
    );

    for (i, agent) in template.agents.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {} ({}): {}\n",
            i + 1,
            agent.role,
            agent.agent_type,
            agent.task
        ));
    }

    if let Some(custom) = custom_instructions.map(str::trim).filter(|s| !s.is_empty()) {
        prompt.push_str("\nAdditional instructions:\n");
        prompt.push_str(custom);
        prompt.push('\n');
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_six_unique_templates() {
        let ids: HashSet<_> = catalog().iter().map(|t| t.id).collect();
        assert_eq!(catalog().len(), 6);
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn agent_counts_match_definitions() {
        assert_eq!(find("full-stack").unwrap().agent_count(), 4);
        assert_eq!(find("code-review").unwrap().agent_count(), 3);
        assert_eq!(find("migration").unwrap().agent_count(), 4);
    }

    #[test]
    fn find_unknown_is_none() {
        assert!(find("nope").is_none());
    }

    #[test]
    fn tag_filter_is_case_insensitive() {
        let ids: Vec<_> = with_tag("TESTING").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["full-stack", "migration", "bug-fix"]);
        assert!(with_tag("nonexistent").is_empty());
    }

    #[test]
    fn launch_prompt_lists_agents() {
        let template = find("bug-fix").unwrap();
        let prompt = launch_prompt(template, None);
        assert!(prompt.starts_with("Initialize a swarm using the \"Bug Investigation\" template."));
        assert!(prompt.contains("Spawn the following 3 agents:"));
        assert!(prompt.contains("1. Bug Investigator (bug-investigator): Analyze and reproduce the bug"));
        assert!(prompt.contains("3. Regression Tester (regression-tester)"));
        assert!(!prompt.contains("Additional instructions"));
    }

    #[test]
    fn launch_prompt_appends_custom_instructions() {
        let template = find("documentation").unwrap();
        let prompt = launch_prompt(template, Some("  Focus on the CLI  "));
        assert!(prompt.ends_with("Additional instructions:\nFocus on the CLI\n"));

        let blank = launch_prompt(template, Some("   "));
        assert!(!blank.contains("Additional instructions"));
    }

    #[test]
    fn serializes_agent_type_as_type() {
        let value = serde_json::to_value(find("code-review").unwrap()).unwrap();
        assert_eq!(value["agents"][0]["type"], "security-analyst");
        assert_eq!(value["estimatedDuration"], "10-20 min");
        assert_eq!(value["difficulty"], "beginner");
    }
}
