use std::collections::{HashMap, HashSet};

use crate::server::model::import::EntityClass;

/// Result of looking up a parent's source id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The parent exists in the target guild under this id.
    Mapped(i32),
    /// The parent is in the archive but was not created: it failed or was itself skipped.
    Unavailable,
    /// The parent is neither in the archive nor recorded by a previous import.
    Unknown,
}

/// A nullable reference points at a record that could not be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnavailableParent;

/// Source-id to target-id map of one entity class for one run.
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    mapped: HashMap<i32, i32>,
    unavailable: HashSet<i32>,
}

impl IdMap {
    pub fn from_existing(mapped: HashMap<i32, i32>) -> Self {
        Self {
            mapped,
            unavailable: HashSet::new(),
        }
    }

    /// Whether the source id already has a target, from this run or an earlier one.
    pub fn is_mapped(&self, source_id: i32) -> bool {
        self.mapped.contains_key(&source_id)
    }

    pub fn insert(&mut self, source_id: i32, target_id: i32) {
        self.unavailable.remove(&source_id);
        self.mapped.insert(source_id, target_id);
    }

    /// Marks a source id whose record could not be created in this run.
    pub fn mark_unavailable(&mut self, source_id: i32) {
        if !self.mapped.contains_key(&source_id) {
            self.unavailable.insert(source_id);
        }
    }

    pub fn resolve(&self, source_id: i32) -> Resolution {
        if let Some(target_id) = self.mapped.get(&source_id) {
            Resolution::Mapped(*target_id)
        } else if self.unavailable.contains(&source_id) {
            Resolution::Unavailable
        } else {
            Resolution::Unknown
        }
    }

    /// Resolves a reference the dependent cannot exist without.
    pub fn resolve_required(&self, source_id: i32) -> Option<i32> {
        match self.resolve(source_id) {
            Resolution::Mapped(target_id) => Some(target_id),
            Resolution::Unavailable | Resolution::Unknown => None,
        }
    }

    /// Resolves a nullable reference.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Reference mapped to a target
    /// - `Ok(None)` - No reference, or the referenced record is unknown and is dropped
    /// - `Err(UnavailableParent)` - Referenced record is unavailable; skip the dependent
    pub fn resolve_optional(
        &self,
        source_id: Option<i32>,
    ) -> Result<Option<i32>, UnavailableParent> {
        match source_id.map(|id| self.resolve(id)) {
            None | Some(Resolution::Unknown) => Ok(None),
            Some(Resolution::Mapped(target_id)) => Ok(Some(target_id)),
            Some(Resolution::Unavailable) => Err(UnavailableParent),
        }
    }

    /// Resolves a nullable reference, dropping it unless it is mapped.
    pub fn resolve_lenient(&self, source_id: Option<i32>) -> Option<i32> {
        source_id.and_then(|id| self.resolve_required(id))
    }
}

/// Id maps of every remapped class, seeded from the mapping store.
#[derive(Debug, Clone, Default)]
pub struct RunMappings {
    maps: HashMap<EntityClass, IdMap>,
}

impl RunMappings {
    pub fn from_stored(stored: HashMap<EntityClass, HashMap<i32, i32>>) -> Self {
        Self {
            maps: stored
                .into_iter()
                .map(|(class, mapped)| (class, IdMap::from_existing(mapped)))
                .collect(),
        }
    }

    pub fn get(&self, class: EntityClass) -> &IdMap {
        static EMPTY: std::sync::LazyLock<IdMap> = std::sync::LazyLock::new(IdMap::default);

        self.maps.get(&class).unwrap_or(&EMPTY)
    }

    pub fn get_mut(&mut self, class: EntityClass) -> &mut IdMap {
        self.maps.entry(class).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_failed_parents_from_unknown_ones() {
        let mut map = IdMap::from_existing(HashMap::from([(1, 101)]));
        map.mark_unavailable(2);

        assert_eq!(map.resolve(1), Resolution::Mapped(101));
        assert_eq!(map.resolve(2), Resolution::Unavailable);
        assert_eq!(map.resolve(3), Resolution::Unknown);

        assert_eq!(map.resolve_optional(Some(1)), Ok(Some(101)));
        assert_eq!(map.resolve_optional(Some(2)), Err(UnavailableParent));
        assert_eq!(map.resolve_optional(Some(3)), Ok(None));
        assert_eq!(map.resolve_optional(None), Ok(None));
        assert_eq!(map.resolve_lenient(Some(2)), None);
    }

    #[test]
    fn existing_mapping_is_never_marked_unavailable() {
        let mut map = IdMap::from_existing(HashMap::from([(1, 101)]));
        map.mark_unavailable(1);

        assert_eq!(map.resolve(1), Resolution::Mapped(101));
    }

    #[test]
    fn unseeded_class_resolves_nothing() {
        let mappings = RunMappings::default();

        assert_eq!(mappings.get(EntityClass::Panel).resolve(5), Resolution::Unknown);
    }
}
