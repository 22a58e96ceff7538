pub mod health_gauge;
pub mod status_bar;
