use crate::domain::AssetId;

/// Item URL prefixes stripped from asset id lists by default.
pub const DEFAULT_PREFIXES: &[&str] = &["https://backpack.tf/item/", "http://backpack.tf/item/"];

/// Turns raw asset id lists into canonical [`AssetId`]s.
///
/// Input is one asset id per line, optionally written as a full item link
/// (`https://backpack.tf/item/<id>`). Blank lines are dropped.
#[derive(Debug, Clone)]
pub struct Normalizer {
    prefixes: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::with_prefixes(DEFAULT_PREFIXES.iter().map(|p| p.to_string()))
    }

    pub fn with_prefixes<I>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let prefixes = prefixes.into_iter().filter(|p| !p.is_empty()).collect();
        Self { prefixes }
    }

    pub fn normalize(&self, text: &str) -> Vec<AssetId> {
        let ids: Vec<AssetId> = text
            .lines()
            .filter_map(|line| self.normalize_line(line))
            .collect();

        tracing::debug!("Normalized {} asset ids", ids.len());
        ids
    }

    /// Normalize one line, returning `None` when nothing is left.
    pub fn normalize_line(&self, line: &str) -> Option<AssetId> {
        let mut id = line.trim();
        // Repeated prefixes are all stripped so the result is a fixed point
        while let Some(rest) = self
            .prefixes
            .iter()
            .find_map(|prefix| id.strip_prefix(prefix.as_str()))
        {
            id = rest.trim();
        }

        if id.is_empty() {
            None
        } else {
            Some(AssetId::new(id))
        }
    }
}
