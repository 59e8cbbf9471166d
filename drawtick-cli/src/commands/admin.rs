use crate::App;
use anyhow::Result;
use dialoguer::Confirm;

/// Wipe every draw and counter. Running workers skip their ticks until the
/// reset finishes.
pub async fn reset(app: &App, yes: bool) -> Result<()> {
    if !yes {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "This deletes every draw in {}. Continue?",
                app.config.database_path().display()
            ))
            .default(false)
            .interact()?;

        if !confirm {
            println!("Reset cancelled");
            return Ok(());
        }
    }

    println!("Resetting draw store...");
    let removed = app.store.reset().await?;
    println!("Removed {} draws, counters back to zero", removed);

    Ok(())
}
