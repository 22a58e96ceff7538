//! Orchestration tool-name classification and display labels.

/// Namespace prefix used by the MCP bridge for orchestration tools.
pub const BRIDGE_PREFIX: &str = "mcp__claude-flow__";

const SWARM_TOOLS: &[&str] = &[
    "swarm_init",
    "agent_spawn",
    "task_orchestrate",
    "swarm_coordinate",
    "hive_mind_spawn",
];

const AGENT_TOOLS: &[&str] = &["agent_spawn", "agent_status", "agent_assign"];

const MEMORY_TOOLS: &[&str] = &[
    "memory_store",
    "memory_search",
    "memory_retrieve",
    "memory_query",
];

/// Namespaces whose every member counts as an orchestration tool.
const TOOL_PREFIXES: &[&str] = &["swarm_", "agent_", "memory_", "neural_", "github_"];

/// Report whether a tool name belongs to the orchestration domain.
pub fn is_orchestration_tool(name: &str) -> bool {
    SWARM_TOOLS.contains(&name)
        || AGENT_TOOLS.contains(&name)
        || MEMORY_TOOLS.contains(&name)
        || TOOL_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
        || name.starts_with(BRIDGE_PREFIX)
}

/// Human-readable label for a tool name.
///
/// Drops the bridge namespace, then turns `snake_case` into `Title Case`:
/// `mcp__claude-flow__swarm_init` becomes `Swarm Init`.
pub fn tool_label(name: &str) -> String {
    let clean = name.replacen(BRIDGE_PREFIX, "", 1);

    clean
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
