use std::collections::HashSet;

use thiserror::Error;

use crate::registry::{find_method, find_type, GeoType, Method};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error("duplicate implementation of {0} for ({1}, {2})")]
    DuplicateImpl(&'static str, &'static str, &'static str),

    #[error("catalog entry references unknown geometry type {0:?}")]
    UnknownType(&'static str),

    #[error("catalog entry references unknown relation method {0:?}")]
    UnknownMethod(&'static str),
}

/// Where a table entry came from. Explicit entries are hand-authored;
/// Symmetric and Default entries only ever fill keys nothing else
/// claimed, so Explicit > Symmetric > Default holds by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Explicit,
    Symmetric,
    Default,
}

/// An implementation body, treated as opaque text. Whether the text
/// mentions the second operand is recorded here, once, so the renderer
/// never has to probe the body to decide parameter naming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    text: String,
    references_other: bool,
}

impl Body {
    pub fn new<S: Into<String>>(text: S) -> Body {
        let text = text.into();
        let references_other = text.contains("other");
        Body {
            text,
            references_other,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn references_other(&self) -> bool {
        self.references_other
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImplEntry {
    pub method: Method,
    pub self_t: &'static str,
    pub other_t: &'static str,
    pub body: Body,
    pub origin: Origin,
}

pub(crate) type Key = (&'static str, &'static str, &'static str);

impl ImplEntry {
    pub fn explicit(
        method: Method,
        self_t: &'static str,
        other_t: &'static str,
        body: &str,
    ) -> ImplEntry {
        ImplEntry {
            method,
            self_t,
            other_t,
            body: Body::new(body),
            origin: Origin::Explicit,
        }
    }

    pub(crate) fn key(&self) -> Key {
        (self.method.name, self.self_t, self.other_t)
    }
}

/// The relation table: entries in insertion order plus a key set over
/// `(method, self type, other type)`. Insertion order is what makes
/// repeated generation runs byte-identical, so it is part of the
/// contract, not an accident of representation.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RelationTable {
    entries: Vec<ImplEntry>,
    keys: HashSet<Key>,
}

impl RelationTable {
    /// Build a table from hand-authored catalog entries, validating
    /// every referenced method and type against the registry. A
    /// duplicate key is ambiguous intent and fails construction;
    /// last-write-wins would hide the mistake.
    pub fn from_catalog(catalog: Vec<ImplEntry>, types: &[GeoType]) -> Result<RelationTable, Error> {
        let mut table = RelationTable::default();
        for entry in catalog {
            if find_method(entry.method.name).is_none() {
                return Err(Error::UnknownMethod(entry.method.name));
            }
            if find_type(types, entry.self_t).is_none() {
                return Err(Error::UnknownType(entry.self_t));
            }
            if find_type(types, entry.other_t).is_none() {
                return Err(Error::UnknownType(entry.other_t));
            }
            table.insert(entry)?;
        }
        Ok(table)
    }

    fn insert(&mut self, entry: ImplEntry) -> Result<(), Error> {
        if self.keys.contains(&entry.key()) {
            return Err(Error::DuplicateImpl(
                entry.method.name,
                entry.self_t,
                entry.other_t,
            ));
        }
        self.keys.insert(entry.key());
        self.entries.push(entry);
        Ok(())
    }

    /// Append unless the key is already claimed. The derivation passes
    /// go through here, which is what keeps them from displacing an
    /// Explicit entry.
    pub(crate) fn insert_if_absent(&mut self, entry: ImplEntry) -> bool {
        if self.keys.contains(&entry.key()) {
            return false;
        }
        self.keys.insert(entry.key());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, method: &str, self_t: &str, other_t: &str) -> Option<&ImplEntry> {
        self.entries
            .iter()
            .find(|e| e.method.name == method && e.self_t == self_t && e.other_t == other_t)
    }

    pub fn entries(&self) -> &[ImplEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenate two completed tables, preserving entry order. The
    /// per-method families are disjoint by key, but a collision is
    /// still the same ambiguity as a catalog duplicate, so it gets the
    /// same error.
    pub fn merge(mut self, other: RelationTable) -> Result<RelationTable, Error> {
        for entry in other.entries {
            self.insert(entry)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{CONTAINS, INTERSECTS, TYPES};

    #[test]
    fn body_records_operand_use() {
        assert!(Body::new("self.contains(other)").references_other());
        assert!(!Body::new("false").references_other());
        assert!(Body::new("other.Intersects(self)").references_other());
    }

    #[test]
    fn duplicate_keys_fail_construction() {
        let catalog = vec![
            ImplEntry::explicit(CONTAINS, "Rect", "Point", "self.contains(other)"),
            ImplEntry::explicit(CONTAINS, "Rect", "Point", "false"),
        ];
        assert_eq!(
            RelationTable::from_catalog(catalog, &TYPES),
            Err(Error::DuplicateImpl("Contains", "Rect", "Point"))
        );
    }

    #[test]
    fn unknown_registry_references_fail_construction() {
        let catalog = vec![ImplEntry::explicit(
            CONTAINS,
            "Circle",
            "Point",
            "self.contains(other)",
        )];
        assert_eq!(
            RelationTable::from_catalog(catalog, &TYPES),
            Err(Error::UnknownType("Circle"))
        );

        let bogus = Method {
            name: "Overlaps",
            ..INTERSECTS
        };
        let catalog = vec![ImplEntry::explicit(bogus, "Rect", "Point", "false")];
        assert_eq!(
            RelationTable::from_catalog(catalog, &TYPES),
            Err(Error::UnknownMethod("Overlaps"))
        );
    }

    #[test]
    fn insert_if_absent_never_displaces() {
        let explicit = ImplEntry::explicit(CONTAINS, "Rect", "Point", "self.contains(other)");
        let mut table = RelationTable::from_catalog(vec![explicit.clone()], &TYPES).unwrap();
        let inserted = table.insert_if_absent(ImplEntry {
            origin: Origin::Default,
            body: Body::new("self.contains(other)"),
            ..explicit.clone()
        });
        assert!(!inserted);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("Contains", "Rect", "Point").unwrap().origin,
            Origin::Explicit
        );
    }

    #[test]
    fn merge_rejects_key_collisions() {
        let a = RelationTable::from_catalog(
            vec![ImplEntry::explicit(CONTAINS, "Rect", "Point", "false")],
            &TYPES,
        )
        .unwrap();
        let b = a.clone();
        assert_eq!(
            a.merge(b),
            Err(Error::DuplicateImpl("Contains", "Rect", "Point"))
        );
    }
}
