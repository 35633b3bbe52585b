//! Faction/role to shape lookup

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SymbolError;
use crate::shapes::ShapeKind;

/// Maps each faction's roles to the shape drawn for them.
///
/// Read-only once built; deserializes from nested tables such as
///
/// ```toml
/// [human]
/// Lineman = "circle"
/// Thrower = "rising"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeCatalog {
    factions: BTreeMap<String, BTreeMap<String, ShapeKind>>,
}

impl ShapeCatalog {
    pub fn new(factions: BTreeMap<String, BTreeMap<String, ShapeKind>>) -> Self {
        Self { factions }
    }

    /// The reference catalog for human, ogre and orc teams
    pub fn reference() -> Self {
        let entries: [(&str, &[(&str, ShapeKind)]); 3] = [
            (
                "human",
                &[
                    ("Lineman", ShapeKind::Circle),
                    ("Thrower", ShapeKind::Rising),
                    ("Catcher", ShapeKind::Diamond),
                    ("Blitzer", ShapeKind::Chevron),
                ],
            ),
            ("ogre", &[("Ogre", ShapeKind::Square)]),
            (
                "orc",
                &[
                    ("Lineman", ShapeKind::Circle),
                    ("Thrower", ShapeKind::Rising),
                    ("Black Orc Blocker", ShapeKind::RectangleHorizontal),
                    ("Blitzer", ShapeKind::Chevron),
                ],
            ),
        ];

        let factions = entries
            .iter()
            .map(|(faction, roles)| {
                let roles = roles.iter().map(|(role, kind)| (role.to_string(), *kind)).collect();
                (faction.to_string(), roles)
            })
            .collect();
        Self { factions }
    }

    /// Shape for a faction's role.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphboard::catalog::ShapeCatalog;
    /// use glyphboard::shapes::ShapeKind;
    ///
    /// let catalog = ShapeCatalog::reference();
    /// assert_eq!(catalog.shape_for("ogre", "Ogre").unwrap(), ShapeKind::Square);
    /// assert!(catalog.shape_for("human", "Referee").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`SymbolError::UnknownPieceRole`] when either the faction or the role
    /// has no entry.
    pub fn shape_for(&self, faction: &str, role: &str) -> Result<ShapeKind, SymbolError> {
        self.factions.get(faction).and_then(|roles| roles.get(role)).copied().ok_or_else(|| {
            SymbolError::UnknownPieceRole { faction: faction.to_string(), role: role.to_string() }
        })
    }

    pub fn factions(&self) -> impl Iterator<Item = &str> {
        self.factions.keys().map(String::as_str)
    }

    /// Roles of one faction with their shapes, sorted by role name
    pub fn roles(&self, faction: &str) -> impl Iterator<Item = (&str, ShapeKind)> {
        self.factions
            .get(faction)
            .into_iter()
            .flat_map(|roles| roles.iter().map(|(role, kind)| (role.as_str(), *kind)))
    }

    pub fn is_empty(&self) -> bool {
        self.factions.values().all(|roles| roles.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_lookups() {
        let catalog = ShapeCatalog::reference();
        assert_eq!(catalog.shape_for("orc", "Black Orc Blocker").unwrap(), ShapeKind::RectangleHorizontal);
        assert_eq!(catalog.shape_for("ogre", "Ogre").unwrap(), ShapeKind::Square);
        assert_eq!(catalog.shape_for("human", "Catcher").unwrap(), ShapeKind::Diamond);
        assert_eq!(catalog.shape_for("orc", "Blitzer").unwrap(), ShapeKind::Chevron);
    }

    #[test]
    fn test_unlisted_role() {
        let catalog = ShapeCatalog::reference();
        assert_eq!(
            catalog.shape_for("human", "Referee"),
            Err(SymbolError::UnknownPieceRole { faction: "human".to_string(), role: "Referee".to_string() })
        );
    }

    #[test]
    fn test_unlisted_faction() {
        let catalog = ShapeCatalog::reference();
        assert!(matches!(
            catalog.shape_for("elf", "Lineman"),
            Err(SymbolError::UnknownPieceRole { .. })
        ));
    }

    #[test]
    fn test_reference_shape() {
        let catalog = ShapeCatalog::reference();
        assert_eq!(catalog.factions().collect::<Vec<_>>(), vec!["human", "ogre", "orc"]);
        assert_eq!(catalog.roles("human").count(), 4);
        assert_eq!(catalog.roles("ogre").count(), 1);
        assert_eq!(catalog.roles("nobody").count(), 0);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let catalog: ShapeCatalog = toml::from_str(
            r#"
            [human]
            Lineman = "circle"
            Thrower = "rising"

            [orc]
            "Black Orc Blocker" = "rectangleHorizontal"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.shape_for("human", "Thrower").unwrap(), ShapeKind::Rising);
        assert_eq!(catalog.shape_for("orc", "Black Orc Blocker").unwrap(), ShapeKind::RectangleHorizontal);
    }

    #[test]
    fn test_deserialize_rejects_unknown_shape() {
        let result: Result<ShapeCatalog, _> = toml::from_str("[human]\nLineman = \"hexagon\"\n");
        assert!(result.is_err());
    }
}
