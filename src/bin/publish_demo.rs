//! Demo that runs one publication cycle end to end (log-only transports unless
//! SMTP_HOST / DASHBOARD_WEBHOOK_URL are set).

use anyhow::Result;
use chrono::{Days, Local};
use newsroom_publisher::config::PublishingConfig;
use newsroom_publisher::notify::observers_from_env;
use newsroom_publisher::{Criterion, Journalist, News, NewsKind, Preference, PublicationManager};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("newsroom_publisher=info,publish_demo=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .init();

    let cfg = PublishingConfig::load_default()?;

    let mut manager = PublicationManager::new();
    manager.set_criterion(
        cfg.selection
            .criterion
            .clone()
            .unwrap_or(Criterion::Sensationalist),
    );
    for observer in observers_from_env(&cfg)? {
        manager.add_observer(observer);
    }

    let today = Local::now().date_naive();
    let hired = today.checked_sub_days(Days::new(400)).unwrap_or(today);
    let ana = Journalist::new(hired, "Ana Lopez", Preference::Sensationalist).into_ref();
    let tomas = Journalist::new(hired, "Tomas Ruiz", Preference::StartsWithT).into_ref();

    let candidates = vec![
        News::new(cfg.scoop.kind(3_000_000.0), ana.clone(), today)
            .with_importance(9)
            .with_title("Espectacular fichaje de verano")
            .with_body("club closes record deal after weeks of talks")
            .with_contact_email("ana@newsroom.local"),
        News::new(NewsKind::article(["https://a.example", "https://b.example"]), tomas.clone(), today)
            .with_importance(6)
            .with_title("Transit fares rise again")
            .with_body("city council approves the new fare table")
            .with_contact_email("tomas@newsroom.local"),
        News::new(NewsKind::interview("Dibu Martinez", false), tomas.clone(), today)
            .with_importance(3)
            .with_title("Una charla increible")
            .with_body("the goalkeeper talks about the final")
            .with_contact_email("tomas@newsroom.local"),
    ];

    let queued = manager.generate(candidates).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    tracing::info!(queued, "candidates queued");

    let publication = manager.confirm().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!(
        "published {} news on {}; balances: {} = {:.0}, {} = {:.0}",
        publication.len(),
        publication.date(),
        ana.borrow().name(),
        ana.borrow().balance(),
        tomas.borrow().name(),
        tomas.borrow().balance(),
    );

    Ok(())
}
