//! Dashboard Example for the AQI engine
//!
//! Feeds canned air pollution responses through a dashboard session, the way
//! a host would after fetching them, and prints what would be rendered.
//!
//! Run with: cargo run --example dashboard

use std::time::{SystemTime, UNIX_EPOCH};

use aqi_engine::{
    AcquiredData, AirPollutionResponse, City, Dashboard, DashboardUpdate, EngineConfig,
    PollutantBreakdown,
};

const CURRENT: &str = r#"{
    "coord": { "lon": 77.209, "lat": 28.6139 },
    "list": [
        {
            "main": { "aqi": 5 },
            "components": {
                "co": 1842.5, "no": 3.1, "no2": 48.3, "o3": 22.7,
                "so2": 15.2, "pm2_5": 182.6, "pm10": 243.9, "nh3": 21.4
            },
            "dt": 1760860800
        }
    ]
}"#;

fn forecast_json(start: i64) -> String {
    let entries: Vec<String> = (0..30)
        .map(|hour| {
            let pm2_5 = 150.0 - f64::from(hour) * 4.0;
            format!(
                r#"{{ "dt": {}, "components": {{ "pm2_5": {pm2_5:.1}, "pm10": {:.1} }} }}"#,
                start + i64::from(hour) * 3600,
                pm2_5 * 1.3
            )
        })
        .collect();
    format!(r#"{{ "list": [{}] }}"#, entries.join(","))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("🌫️  AQI Engine - Dashboard Example\n");

    let mut dashboard = Dashboard::new(EngineConfig::default())?;
    dashboard.select_city("delhi".parse::<City>()?);

    let now = i64::try_from(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())?;
    let air: AirPollutionResponse = serde_json::from_str(CURRENT)?;
    let forecast: AirPollutionResponse = serde_json::from_str(&forecast_json(now))?;
    let data = AcquiredData {
        air,
        forecast: forecast.into_series(),
    };

    // A refresh superseded by a newer one is discarded
    let stale = dashboard.begin_cycle();
    let ticket = dashboard.begin_cycle();
    if let Err(e) = dashboard.complete_cycle(stale, &data, now) {
        println!("⏭️  Skipped superseded cycle: {e}\n");
    }

    let update = dashboard.complete_cycle(ticket, &data, now)?;
    print_update(&update);

    Ok(())
}

fn print_update(update: &DashboardUpdate) {
    let coords = update.city.coordinates();
    println!("📍 {} ({:.4}, {:.4})", update.city, coords.lat, coords.lon);
    println!("==============================");

    let current = &update.current;
    println!(
        "AQI: {} - {} [{}]",
        current.aqi,
        current.category,
        current.category.color()
    );
    if let Some(alert) = current.alert {
        println!("{} {}", alert.icon(), alert.message());
    }

    println!("\n🧪 Pollutants");
    print_breakdown(&update.pollutants);

    println!("\n🔮 Predictions");
    match update.forecast.tomorrow {
        Some(aqi) => println!("   Tomorrow: {aqi}"),
        None => println!("   Tomorrow: --"),
    }
    match update.forecast.avg_24h {
        Some(aqi) => println!("   24h average: {aqi}"),
        None => println!("   24h average: --"),
    }

    println!("\n📊 Next hours");
    for point in update.forecast_points.iter().step_by(4) {
        println!(
            "   {:>5}  {:>3}  {}",
            point.hour_label,
            point.aqi,
            point.category.translucent_color()
        );
    }

    println!("\n📈 Trend");
    for point in &update.trend {
        println!("   {}: {}", point.label, point.aqi);
    }
}

fn print_breakdown(breakdown: &PollutantBreakdown) {
    for (label, cell) in PollutantBreakdown::LABELS.iter().zip(breakdown.formatted()) {
        println!("   {label:<6} {cell}");
    }
}
