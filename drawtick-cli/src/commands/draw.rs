use super::print_record;
use crate::App;
use anyhow::{bail, Result};
use chrono::Utc;
use drawtick_lottery::{BroadcastPublisher, TickCoordinator, TickOutcome};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

fn coordinator(app: &App, publisher: Arc<BroadcastPublisher>) -> Result<TickCoordinator> {
    Ok(TickCoordinator::new(
        app.store.clone(),
        app.registry.clone(),
        publisher,
        app.config.coordinator.clone(),
    )?)
}

/// Draw every tick until Ctrl-C, printing each committed record.
pub async fn run(app: &App) -> Result<()> {
    let publisher = Arc::new(BroadcastPublisher::default());
    let mut draws = publisher.subscribe();
    let coordinator = coordinator(app, publisher.clone())?;

    let printer = tokio::spawn(async move {
        loop {
            match draws.recv().await {
                Ok(record) => print_record(&record),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Display fell behind, skipped {} draws", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("Stopping after the current tick...");
            let _ = shutdown_tx.send(true);
        }
    });

    println!(
        "Drawing every {:?} (worker {}). Press Ctrl-C to stop.",
        app.config.coordinator.tick_interval,
        coordinator.worker_id()
    );
    coordinator.run(shutdown_rx).await;

    // closes the channel so the printer drains and exits
    drop(coordinator);
    drop(publisher);
    printer.await?;

    Ok(())
}

/// Attempt a single tick for the current time.
pub async fn draw_once(app: &App) -> Result<()> {
    let publisher = Arc::new(BroadcastPublisher::default());
    let coordinator = coordinator(app, publisher)?;

    match coordinator.tick_at(Utc::now()).await {
        TickOutcome::Committed(records) => {
            for record in &records {
                print_record(record);
            }
            if records.iter().any(|r| r.score.is_jackpot()) {
                println!("JACKPOT! Draws pause for {:?}.", app.config.coordinator.jackpot_pause);
            }
        }
        TickOutcome::ClaimConflict => {
            println!("This tick was already drawn. Try again in a moment.");
        }
        TickOutcome::CoolingDown { until } => {
            println!("Cooling down after a jackpot until {}", until.format("%Y-%m-%d %H:%M:%S"));
        }
        TickOutcome::Maintenance => {
            println!("The draw store is being reset. Try again shortly.");
        }
        TickOutcome::Failed(reason) => bail!("Draw failed: {}", reason),
    }

    Ok(())
}
