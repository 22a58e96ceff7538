use serde_json::{json, Value};
use swarmscope::swarm::{is_orchestration_tool, reduce, AgentStatus, SwarmState};
use swarmscope::transcript::{ChatMessage, Role};

// ─── Helpers ──────────────────────────────────────────────────────────

fn tool_use(id: &str, name: &str, input: Value) -> Value {
    json!({"type": "tool_use", "id": id, "name": name, "input": input})
}

fn assistant(blocks: Vec<Value>) -> ChatMessage {
    ChatMessage::assistant(Value::Array(blocks))
}

fn assert_counts_consistent(state: &SwarmState) {
    assert_eq!(state.total_agents, state.agents.len());
    assert_eq!(
        state.active_agents,
        state
            .agents
            .iter()
            .filter(|a| a.status == AgentStatus::Active)
            .count()
    );
}

/// A transcript touching every recognized action.
fn busy_transcript() -> Vec<ChatMessage> {
    vec![
        ChatMessage::user(json!("Please refactor the parser")),
        assistant(vec![
            json!({"type": "text", "text": "Starting a swarm"}),
            tool_use("t1", "swarm_init", json!({"task": "refactor parser"})),
        ]),
        assistant(vec![
            tool_use("a1", "agent_spawn", json!({"agent_type": "analyst", "task": "map code"})),
            tool_use("a2", "agent_spawn", json!({"agent_type": "coder", "role": "Implementer"})),
        ]),
        assistant(vec![tool_use(
            "o1",
            "task_orchestrate",
            json!({"task": "split lexer", "agents": [{"agent_id": "a2", "task": "extract lexer"}]}),
        )]),
        assistant(vec![tool_use("c1", "task_complete", json!({}))]),
        assistant(vec![tool_use("a3", "agent_spawn", json!({"agent_type": "tester"}))]),
    ]
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn empty_transcript_is_inactive_and_empty() {
    let state = reduce(&[]);
    assert!(!state.is_active);
    assert_eq!(state.total_agents, 0);
    assert_eq!(state.active_agents, 0);
    assert!(state.agents.is_empty());
    assert!(state.current_operation.is_none());

    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(
        value,
        json!({"isActive": false, "totalAgents": 0, "activeAgents": 0, "agents": []})
    );
}

#[test]
fn spawn_without_init_tracks_agent_but_stays_inactive() {
    let state = reduce(&[assistant(vec![tool_use(
        "a1",
        "agent_spawn",
        json!({"agent_type": "backend-developer", "task": "build API"}),
    )])]);

    assert!(!state.is_active);
    assert_eq!(state.total_agents, 1);
    assert_eq!(state.active_agents, 1);

    let agent = &state.agents[0];
    assert_eq!(agent.id, "a1");
    assert_eq!(agent.name, "backend-developer");
    assert_eq!(agent.role, "backend-developer");
    assert_eq!(agent.status, AgentStatus::Active);
    assert_eq!(agent.current_task.as_deref(), Some("build API"));
}

#[test]
fn init_spawn_complete_leaves_completed_agent() {
    let state = reduce(&[
        assistant(vec![tool_use("t1", "swarm_init", json!({"task": "refactor module"}))]),
        assistant(vec![tool_use("a1", "agent_spawn", json!({}))]),
        assistant(vec![tool_use("c1", "swarm_complete", json!({}))]),
    ]);

    assert!(state.is_active);
    assert_eq!(state.current_operation.as_deref(), Some("refactor module"));
    assert_eq!(state.total_agents, 1);
    assert_eq!(state.active_agents, 0);
    assert_eq!(state.agents[0].status, AgentStatus::Completed);
    assert_eq!(state.agents[0].name, "Agent");
    assert_eq!(state.agents[0].role, "Worker");
}

#[test]
fn orchestrate_reassigns_known_agents_and_drops_unknown() {
    let state = reduce(&[
        assistant(vec![tool_use("a1", "agent_spawn", json!({"agent_type": "coder"}))]),
        assistant(vec![tool_use(
            "o1",
            "task_orchestrate",
            json!({"agents": [
                {"agent_id": "a1", "task": "new task"},
                {"agent_id": "unknown", "task": "x"}
            ]}),
        )]),
    ]);

    assert_eq!(state.total_agents, 1);
    assert_eq!(state.agents[0].id, "a1");
    assert_eq!(state.agents[0].current_task.as_deref(), Some("new task"));
    assert_eq!(state.agents[0].status, AgentStatus::Active);
    assert_eq!(
        state.current_operation.as_deref(),
        Some("Orchestrating: multiple tasks")
    );
}

#[test]
fn orchestrate_reactivates_completed_agent() {
    let state = reduce(&[
        assistant(vec![tool_use("a1", "agent_spawn", json!({}))]),
        assistant(vec![tool_use("c1", "swarm_complete", json!({}))]),
        assistant(vec![tool_use(
            "o1",
            "task_orchestrate",
            json!({"task": "round two", "agents": [{"id": "a1", "task": "again"}]}),
        )]),
    ]);

    assert_eq!(state.agents[0].status, AgentStatus::Active);
    assert_eq!(state.active_agents, 1);
    assert_eq!(state.current_operation.as_deref(), Some("Orchestrating: round two"));
}

#[test]
fn classifier_recognizes_orchestration_names() {
    assert!(is_orchestration_tool("swarm_init"));
    assert!(is_orchestration_tool("agent_spawn"));
    assert!(is_orchestration_tool("memory_store"));
    assert!(is_orchestration_tool("mcp__claude-flow__anything"));
    assert!(!is_orchestration_tool("unrelated_tool"));
}

// ============================================================
// Properties
// ============================================================

#[test]
fn reduce_is_deterministic() {
    let transcript = busy_transcript();
    let first = reduce(&transcript);
    for _ in 0..5 {
        assert_eq!(reduce(&transcript), first);
    }
    assert_eq!(
        serde_json::to_string(&reduce(&transcript)).unwrap(),
        serde_json::to_string(&first).unwrap()
    );
}

#[test]
fn rescanning_does_not_accumulate() {
    let transcript = busy_transcript();
    let once = reduce(&transcript);
    let _ = reduce(&transcript);
    let twice = reduce(&transcript);
    assert_eq!(once, twice);
    assert_eq!(twice.total_agents, 3);
}

#[test]
fn activation_is_monotonic() {
    let mut transcript = vec![assistant(vec![tool_use("h1", "hive_mind_spawn", json!({}))])];
    assert!(reduce(&transcript).is_active);

    transcript.push(assistant(vec![tool_use("c1", "swarm_complete", json!({}))]));
    transcript.push(assistant(vec![tool_use("x", "unrelated_tool", json!({}))]));
    transcript.push(ChatMessage::user(json!("stop")));
    assert!(reduce(&transcript).is_active);
}

#[test]
fn counts_match_roster_after_every_prefix() {
    let transcript = busy_transcript();
    for end in 0..=transcript.len() {
        assert_counts_consistent(&reduce(&transcript[..end]));
    }

    let state = reduce(&transcript);
    assert_eq!(state.total_agents, 3);
    assert_eq!(state.active_agents, 1);
    let ids: Vec<_> = state.agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
}

#[test]
fn non_assistant_messages_never_count() {
    let lookalike = json!([
        {"type": "tool_use", "id": "t1", "name": "swarm_init", "input": {"task": "fake"}},
        {"type": "tool_use", "id": "a1", "name": "agent_spawn", "input": {}},
    ]);

    for role in [Role::User, Role::System, Role::Tool, Role::Other("developer".into())] {
        let state = reduce(&[ChatMessage::new(role, lookalike.clone())]);
        assert_eq!(state, SwarmState::default());
    }

    let mut transcript = busy_transcript();
    let baseline = reduce(&transcript);
    transcript.insert(2, ChatMessage::new(Role::User, lookalike));
    assert_eq!(reduce(&transcript), baseline);
}

#[test]
fn malformed_content_is_ignored() {
    let state = reduce(&[
        ChatMessage::assistant(json!(42)),
        ChatMessage::assistant(json!({"not": "an array"})),
        ChatMessage::assistant(json!([null, "text", {"type": "tool_use"}])),
        assistant(vec![tool_use("a1", "agent_spawn", json!("not an object"))]),
    ]);
    assert_counts_consistent(&state);
    assert!(!state.is_active);
}
