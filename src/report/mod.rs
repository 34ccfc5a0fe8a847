use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::app::Result;
use crate::domain::SteamId;
use crate::matcher::MatchOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    steamid: &'a str,
    matches: Vec<JsonMatch<'a>>,
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    assetid: &'a str,
    name: &'a str,
    link: &'a str,
}

pub fn write_report<W: Write>(
    out: &mut W,
    format: ReportFormat,
    user: &SteamId,
    outcome: &MatchOutcome,
) -> Result<()> {
    match format {
        ReportFormat::Plain => write_plain(out, user, outcome),
        ReportFormat::Json => write_json(out, user, outcome),
    }
}

fn write_plain<W: Write>(out: &mut W, user: &SteamId, outcome: &MatchOutcome) -> Result<()> {
    match outcome {
        MatchOutcome::NoMatches => {
            writeln!(out, "No tainted items found for {}", user)?;
        }
        MatchOutcome::Found(matches) => {
            for m in matches {
                writeln!(out, "found match for assetid {}", m.asset_id)?;
                writeln!(out, "  item name: {}", m.display_name())?;
                writeln!(out, "  {}", m.link)?;
            }
            writeln!(out, "{} tainted items found for {}", matches.len(), user)?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, user: &SteamId, outcome: &MatchOutcome) -> Result<()> {
    let report = JsonReport {
        steamid: user.as_str(),
        matches: outcome
            .matches()
            .iter()
            .map(|m| JsonMatch {
                assetid: m.asset_id.as_str(),
                name: m.display_name(),
                link: &m.link,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &report).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
