use std::collections::HashSet;

use url::Url;

use crate::domain::{AssetId, Inventory, Match};

/// Result of checking asset ids against an inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Found(Vec<Match>),
    NoMatches,
}

impl MatchOutcome {
    pub fn matches(&self) -> &[Match] {
        match self {
            MatchOutcome::Found(matches) => matches,
            MatchOutcome::NoMatches => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MatchOutcome::NoMatches)
    }
}

/// Find the asset ids that are keys of the inventory, in input order.
///
/// Each inventory entry is reported once even if its asset id appears
/// several times in the input.
pub fn match_assets(ids: &[AssetId], inventory: &Inventory, link_base: &Url) -> MatchOutcome {
    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for id in ids {
        let Some(item) = inventory.get(id.as_str()) else {
            continue;
        };
        if !seen.insert(id.as_str()) {
            continue;
        }

        tracing::debug!("Found match for asset id {}", id);
        matches.push(Match::new(id.clone(), item.clone(), link_base));
    }

    if matches.is_empty() {
        MatchOutcome::NoMatches
    } else {
        MatchOutcome::Found(matches)
    }
}
