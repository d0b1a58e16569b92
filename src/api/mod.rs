pub mod client;

pub use client::{render_url, MetricsClient, MetricsSource};
