//! Which reference curve(s) the operator is comparing against.

use std::fmt;

use crate::catalog::ProfileCatalog;
use crate::error::ProfileResult;
use crate::profile::Profile;

/// Sentinel id for the "overlay every curve" selection.
pub const ALL_PROFILES: &str = "all";
/// Short form of [`ALL_PROFILES`] accepted on the command line.
pub const ALL_ALIAS: &str = "a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveSelection {
    /// A single catalog entry, by id.
    Profile(String),
    /// Every catalog entry overlaid.
    All,
}

impl ActiveSelection {
    /// Parse a selector against `catalog`.
    ///
    /// Accepts any catalog id, `"all"`, or `"a"`. Anything else is
    /// `UnknownProfile`.
    pub fn parse(input: &str, catalog: &ProfileCatalog) -> ProfileResult<Self> {
        let input = input.trim();
        if input == ALL_PROFILES || input == ALL_ALIAS {
            return Ok(Self::All);
        }
        catalog
            .lookup(input)
            .map(|profile| Self::Profile(profile.id().to_string()))
    }

    /// Profiles to draw for this selection, in catalog order.
    pub fn resolve<'a>(&self, catalog: &'a ProfileCatalog) -> ProfileResult<Vec<&'a Profile>> {
        match self {
            Self::Profile(id) => catalog.lookup(id).map(|p| vec![p]),
            Self::All => Ok(catalog.all().iter().collect()),
        }
    }

    /// Selector string that parses back to this selection.
    pub fn id(&self) -> &str {
        match self {
            Self::Profile(id) => id,
            Self::All => ALL_PROFILES,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for ActiveSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    #[test]
    fn parse_accepts_ids_and_sentinels() {
        let catalog = ProfileCatalog::builtin().unwrap();
        assert_eq!(
            ActiveSelection::parse("kr", &catalog).unwrap(),
            ActiveSelection::Profile("kr".into())
        );
        assert_eq!(ActiveSelection::parse("all", &catalog).unwrap(), ActiveSelection::All);
        assert_eq!(ActiveSelection::parse("a", &catalog).unwrap(), ActiveSelection::All);
    }

    #[test]
    fn parse_rejects_unknown() {
        let catalog = ProfileCatalog::builtin().unwrap();
        assert!(matches!(
            ActiveSelection::parse("bogus-id", &catalog),
            Err(ProfileError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn resolve_all_returns_every_curve() {
        let catalog = ProfileCatalog::builtin().unwrap();
        let curves = ActiveSelection::All.resolve(&catalog).unwrap();
        assert_eq!(curves.len(), catalog.len());

        let single = ActiveSelection::Profile("s".into()).resolve(&catalog).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].longname(), "Sidamo");
    }

    #[test]
    fn id_round_trips() {
        let catalog = ProfileCatalog::builtin().unwrap();
        for sel in [ActiveSelection::All, ActiveSelection::Profile("tr".into())] {
            assert_eq!(ActiveSelection::parse(sel.id(), &catalog).unwrap(), sel);
        }
    }
}
