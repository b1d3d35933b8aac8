use anyhow::Result;
use client::{load_dashboard, render_text, DashboardOptions, FredClient};
use common::default_indicators;
use tracing::{debug, info};

pub async fn dashboard(proxy_url: &str, limit: u32, months: usize, json: bool) -> Result<()> {
    info!("Loading dashboard through {}", proxy_url);
    let client = FredClient::new(proxy_url);
    let options = DashboardOptions { limit, month_count: months };
    debug!("Dashboard options: {:?}", options);

    let dashboard = load_dashboard(&client, &default_indicators(), options).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render_text(&dashboard));
    }
    Ok(())
}
