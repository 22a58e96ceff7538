pub mod notifications_tab;
pub mod swarm_tab;
pub mod templates_tab;
