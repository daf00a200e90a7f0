//! Order-preserving grouping over case hierarchies.
//!
//! Every grouping the engine performs (by next-hearing id, by seeding
//! hearing, by listing) is a [`group_by_key`] over a derived key. Groups come
//! back in first-encounter order so identical input always yields identical
//! output.

use std::collections::HashMap;
use std::hash::Hash;

use hearing_model::{Defendant, Offence, ProsecutionCase};
use uuid::Uuid;

/// Keyed groups that remember the order keys were first seen in
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    positions: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedGroups<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, inserting `make()` at the end when the key is new
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let position = match self.positions.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.positions.insert(key.clone(), position);
                self.entries.push((key, make()));
                position
            }
        };
        &mut self.entries[position].1
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> IntoIterator for OrderedGroups<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Group `items` by `key_of`, skipping items without a key.
///
/// Groups and the items inside each group keep input order.
pub fn group_by_key<T, K, I, F>(items: I, mut key_of: F) -> OrderedGroups<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> Option<K>,
{
    let mut groups = OrderedGroups::new();
    for item in items {
        if let Some(key) = key_of(&item) {
            groups.get_or_insert_with(key, Vec::new).push(item);
        }
    }
    groups
}

/// One offence together with the defendant and case it sits under
#[derive(Debug, Clone, Copy)]
pub struct OffencePath<'a> {
    pub case: &'a ProsecutionCase,
    pub defendant: &'a Defendant,
    pub offence: &'a Offence,
}

/// Every offence of `cases`, depth-first
pub fn offence_paths(cases: &[ProsecutionCase]) -> impl Iterator<Item = OffencePath<'_>> {
    cases.iter().flat_map(|case| {
        case.defendants.iter().flat_map(move |defendant| {
            defendant.offences.iter().map(move |offence| OffencePath {
                case,
                defendant,
                offence,
            })
        })
    })
}

struct DefendantDraft<'a> {
    defendant: &'a Defendant,
    offences: Vec<Offence>,
}

struct CaseDraft<'a> {
    case: &'a ProsecutionCase,
    defendants: OrderedGroups<Uuid, DefendantDraft<'a>>,
}

/// Reassembles selected offence paths into nested prosecution cases.
///
/// Cases and defendants keep their metadata and appear in the order their
/// first offence was pushed; only pushed offences are carried.
#[derive(Default)]
pub struct CaseTreeBuilder<'a> {
    cases: OrderedGroups<Uuid, CaseDraft<'a>>,
}

impl<'a> CaseTreeBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: OffencePath<'a>) {
        self.push_with(path, path.offence.clone());
    }

    /// Push `offence`, usually an enriched copy of `path.offence`, under the
    /// path's case and defendant
    pub fn push_with(&mut self, path: OffencePath<'a>, offence: Offence) {
        let case = self.cases.get_or_insert_with(path.case.id, || CaseDraft {
            case: path.case,
            defendants: OrderedGroups::new(),
        });
        case.defendants
            .get_or_insert_with(path.defendant.id, || DefendantDraft {
                defendant: path.defendant,
                offences: Vec::new(),
            })
            .offences
            .push(offence);
    }

    #[must_use]
    pub fn contains_case(&self, case_id: Uuid) -> bool {
        self.cases.contains_key(&case_id)
    }

    pub fn build(self) -> Vec<ProsecutionCase> {
        self.cases
            .into_iter()
            .map(|(_, draft)| {
                let mut case = draft.case.without_defendants();
                case.defendants = draft
                    .defendants
                    .into_iter()
                    .map(|(_, draft)| {
                        let mut defendant = draft.defendant.without_offences();
                        defendant.offences = draft.offences;
                        defendant
                    })
                    .collect();
                case
            })
            .collect()
    }
}

impl<'a> FromIterator<OffencePath<'a>> for CaseTreeBuilder<'a> {
    fn from_iter<I: IntoIterator<Item = OffencePath<'a>>>(paths: I) -> Self {
        let mut builder = Self::new();
        for path in paths {
            builder.push(path);
        }
        builder
    }
}
