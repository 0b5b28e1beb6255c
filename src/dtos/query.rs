//! Query DTOs - Data Transfer Objects per query di ricerca

use serde::{Deserialize, Serialize};

/// DTO per query parameters di ricerca profili (/profile/?search=...)
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ProfileSearchQuery {
    #[serde(default)]
    pub search: Option<String>,
}

impl ProfileSearchQuery {
    /// Termini di ricerca separati da spazi o virgole, ignorando quelli vuoti
    pub fn terms(&self) -> Vec<String> {
        self.search
            .as_deref()
            .unwrap_or_default()
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect()
    }
}
