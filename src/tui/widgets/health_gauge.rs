//! Health score gauge.
//!
//! Renders a small inline bar for a [`SwarmHealth`] score with the score
//! text beside it. Green while healthy, yellow on warning, red when
//! critical, and gray for an offline swarm.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::dashboard::health::{HealthStatus, SwarmHealth};

/// Width of the bar portion of the gauge (number of block characters).
const BAR_WIDTH: usize = 10;

const FILLED: &str = "\u{2588}"; // "█"
const EMPTY: &str = "\u{2591}"; // "░"

/// Render a health gauge as a vector of styled spans.
///
/// Returns something like: `[████████░░] 85`
pub fn render_health_gauge(health: &SwarmHealth) -> Vec<Span<'static>> {
    let score = health.score.clamp(0.0, 100.0);
    let filled_count = ((score / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let empty_count = BAR_WIDTH - filled_count;

    let bar_style = Style::default().fg(status_color(health.status));
    let dim_style = Style::default().fg(Color::DarkGray);

    vec![
        Span::raw("["),
        Span::styled(FILLED.repeat(filled_count), bar_style),
        Span::styled(EMPTY.repeat(empty_count), dim_style),
        Span::raw(format!("] {score:.0}")),
    ]
}

/// Color used for a health status everywhere in the dashboard.
pub fn status_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Healthy => Color::Green,
        HealthStatus::Warning => Color::Yellow,
        HealthStatus::Critical => Color::Red,
        HealthStatus::Offline => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::health::{HealthMetrics, Trend};

    fn health(score: f64, status: HealthStatus) -> SwarmHealth {
        SwarmHealth {
            score,
            status,
            metrics: HealthMetrics::default(),
            issues: Vec::new(),
            trend: Trend::Stable,
        }
    }

    #[test]
    fn offline_is_gray_and_empty() {
        let spans = render_health_gauge(&health(0.0, HealthStatus::Offline));
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[1].content, "");
        assert_eq!(spans[2].content.chars().count(), BAR_WIDTH);
        assert_eq!(spans[3].content, "] 0");
        assert_eq!(spans[1].style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn full_score_is_green_and_full() {
        let spans = render_health_gauge(&health(100.0, HealthStatus::Healthy));
        assert_eq!(spans[1].content.chars().count(), BAR_WIDTH);
        assert_eq!(spans[2].content, "");
        assert_eq!(spans[3].content, "] 100");
        assert_eq!(spans[1].style.fg, Some(Color::Green));
    }

    #[test]
    fn warning_is_yellow() {
        let spans = render_health_gauge(&health(70.0, HealthStatus::Warning));
        assert_eq!(spans[1].content.chars().count(), 7);
        assert_eq!(spans[1].style.fg, Some(Color::Yellow));
    }

    #[test]
    fn critical_is_red() {
        let spans = render_health_gauge(&health(50.0, HealthStatus::Critical));
        assert_eq!(spans[1].style.fg, Some(Color::Red));
    }

    #[test]
    fn clamps_out_of_range_scores() {
        let spans = render_health_gauge(&health(130.0, HealthStatus::Healthy));
        assert_eq!(spans[3].content, "] 100");
        let spans = render_health_gauge(&health(-5.0, HealthStatus::Critical));
        assert_eq!(spans[3].content, "] 0");
    }
}
