use std::collections::HashSet;

use crate::builtin::BUILTIN_PROFILES;
use crate::error::{ProfileError, ProfileResult};
use crate::profile::{Profile, ProfilePoint};
use crate::selection::ActiveSelection;

/// Read-only set of reference curves, in insertion order.
///
/// Always non-empty with unique ids; both are checked at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCatalog {
    profiles: Vec<Profile>,
}

impl ProfileCatalog {
    /// Load the curves shipped with the application.
    pub fn builtin() -> ProfileResult<Self> {
        let profiles = BUILTIN_PROFILES
            .iter()
            .map(|entry| {
                Profile::new(
                    entry.id,
                    entry.longname,
                    entry.points.iter().copied().map(ProfilePoint::from),
                )
            })
            .collect::<ProfileResult<Vec<_>>>()?;
        Self::from_profiles(profiles)
    }

    /// Build a catalog from already-constructed profiles.
    pub fn from_profiles(profiles: Vec<Profile>) -> ProfileResult<Self> {
        if profiles.is_empty() {
            return Err(ProfileError::invalid("", "catalog has no profiles"));
        }
        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id()) {
                return Err(ProfileError::invalid(profile.id(), "duplicate profile id"));
            }
        }
        Ok(Self { profiles })
    }

    /// Look up a single profile by id.
    pub fn lookup(&self, id: &str) -> ProfileResult<&Profile> {
        self.get(id).ok_or_else(|| ProfileError::UnknownProfile { id: id.to_string() })
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All profiles in catalog order.
    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.id())
    }

    pub fn first(&self) -> &Profile {
        &self.profiles[0]
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Curve the demo synthesizer follows for `selection`.
    ///
    /// The "all" overlay has no single curve, so the first entry stands in.
    pub fn synthesis_profile(&self, selection: &ActiveSelection) -> &Profile {
        match selection {
            ActiveSelection::Profile(id) => self.get(id).unwrap_or_else(|| self.first()),
            ActiveSelection::All => self.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(id: &str, points: &[(f64, f64)]) -> Profile {
        Profile::new(id, id.to_uppercase(), points.iter().copied().map(ProfilePoint::from)).unwrap()
    }

    #[test]
    fn builtin_loads_in_table_order() {
        let catalog = ProfileCatalog::builtin().unwrap();
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, ["nsr", "bs", "brm", "mm", "s", "kr", "ou", "cpe", "tr"]);
        assert_eq!(catalog.first().id(), "nsr");
    }

    #[test]
    fn lookup_unknown_fails() {
        let catalog = ProfileCatalog::builtin().unwrap();
        let err = catalog.lookup("bogus-id").unwrap_err();
        assert_eq!(
            err,
            ProfileError::UnknownProfile {
                id: "bogus-id".to_string()
            }
        );
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = ProfileCatalog::from_profiles(vec![
            curve("a1", &[(0.0, 1.0)]),
            curve("a1", &[(0.0, 2.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, ProfileError::InvalidProfileData { .. }));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(ProfileCatalog::from_profiles(Vec::new()).is_err());
    }

    #[test]
    fn synthesis_profile_for_all_is_first() {
        let catalog = ProfileCatalog::from_profiles(vec![
            curve("x", &[(0.0, 1.0)]),
            curve("y", &[(0.0, 2.0)]),
        ])
        .unwrap();
        assert_eq!(catalog.synthesis_profile(&ActiveSelection::All).id(), "x");
        assert_eq!(
            catalog
                .synthesis_profile(&ActiveSelection::Profile("y".into()))
                .id(),
            "y"
        );
    }
}
