use super::describe;
use crate::App;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use drawtick_core::PrizeTier;
use drawtick_lottery::{DrawHistory, PAGE_SIZE};

pub async fn show_history(app: &App, lottery_type: &str, page: usize, json: bool) -> Result<()> {
    let history = DrawHistory::new(app.store.clone(), app.registry.clone());
    let result = history.page(lottery_type, page).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.data.is_empty() {
        println!("No {} draws on page {} ({} total)", lottery_type, page, result.total);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Time", "Draw", "Guess", "Score"]);

    for record in &result.data {
        let guess = record
            .guesses
            .first()
            .map(describe)
            .unwrap_or_default();
        table.add_row(vec![
            record.id.to_string(),
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            describe(&record.draw),
            guess,
            record.score.to_string(),
        ]);
    }

    let pages = (result.total as usize).div_ceil(PAGE_SIZE);
    println!("{}", table);
    println!("Page {} of {} ({} draws)", page + 1, pages, result.total);

    Ok(())
}

pub async fn show_wins(app: &App, json: bool) -> Result<()> {
    let history = DrawHistory::new(app.store.clone(), app.registry.clone());
    let summary = history.wins().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Tier", "Score", "Prize", "Wins"]);

    for tier in PrizeTier::WINNING {
        let wins = history.wins_in_tier(tier).await?;
        table.add_row(vec![
            tier.key().to_string(),
            tier.to_string(),
            tier.prize_amount().to_string(),
            wins.to_string(),
        ]);
    }

    println!("{}", table);
    println!("Wins: {}", summary.wins);
    println!("Total prizes: {}", summary.total_prizes);

    Ok(())
}
