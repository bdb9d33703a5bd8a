//! Experience panels shown when a billboard is destroyed
//!
//! Reference data only: embedded at compile time, never mutated during play.

use serde::{Deserialize, Serialize};

/// Embedded panel catalog
const BUILTIN_PANELS: &str = include_str!("../assets/panels.json");

/// A single experience entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPanel {
    /// Billboard id this panel belongs to
    pub id: String,
    /// Short category line shown above the title
    pub tag: String,
    pub title: String,
    /// Body markup, inserted into the panel as-is
    pub body_html: String,
}

/// Panels keyed by billboard id
#[derive(Debug, Clone, Default)]
pub struct PanelCatalog {
    panels: Vec<ContentPanel>,
}

impl PanelCatalog {
    /// Build a catalog from a JSON array of panels
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let panels: Vec<ContentPanel> = serde_json::from_str(json)?;
        Ok(Self { panels })
    }

    /// The catalog shipped with the game. Falls back to empty on a bad asset.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_PANELS) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to parse built-in panels: {}", e);
                Self::default()
            }
        }
    }

    /// Look up the panel for a billboard
    pub fn get(&self, id: &str) -> Option<&ContentPanel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_every_billboard() {
        let catalog = PanelCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        for id in ["TCS", "V2", "CIGNA"] {
            let panel = catalog.get(id).expect("panel present");
            assert_eq!(panel.id, id);
            assert!(!panel.title.is_empty());
            assert!(!panel.body_html.is_empty());
        }
        assert_eq!(catalog.get("CIGNA").map(|p| p.title.as_str()), Some("Cigna — EDI Developer"));
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = PanelCatalog::builtin();
        assert!(catalog.get("ANTHEM").is_none());
        assert!(PanelCatalog::default().get("TCS").is_none());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(PanelCatalog::from_json("{not json").is_err());
        let empty = PanelCatalog::from_json("[]").unwrap();
        assert!(empty.is_empty());
    }
}
