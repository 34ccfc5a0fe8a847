use std::io::Write;

use crate::app::{Result, RunContext, SweepError};
use crate::matcher::{match_assets, MatchOutcome};
use crate::report::write_report;
use crate::source;

/// Collect asset ids, load the user's inventory and match the two.
pub async fn check_inventory(ctx: &RunContext) -> Result<MatchOutcome> {
    let ids = source::aggregate(ctx).await?;

    tracing::info!("Getting inventory of user with steamid64 {}", ctx.steam_id);
    let inventory = ctx.inventory.load(&ctx.steam_id, &ctx.scope).await?;
    if !inventory.success {
        return Err(SweepError::InventoryUnavailable(format!(
            "inventory of {} could not be loaded",
            ctx.steam_id
        )));
    }

    let outcome = match_assets(&ids, &inventory, &ctx.link_base);
    match &outcome {
        MatchOutcome::Found(matches) => {
            for m in matches {
                tracing::warn!("Found match for asset id {}: {}", m.asset_id, m.display_name());
            }
        }
        MatchOutcome::NoMatches => tracing::info!("No matches found"),
    }

    Ok(outcome)
}

/// Run a full check and write the report to `out`.
pub async fn run<W: Write>(ctx: &RunContext, out: &mut W) -> Result<MatchOutcome> {
    let outcome = check_inventory(ctx).await?;
    write_report(out, ctx.format, &ctx.steam_id, &outcome)?;
    Ok(outcome)
}
