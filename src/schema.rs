//! Field declarations and alias resolution.
//!
//! A destination describes itself as a list of [`Field`]s, each pairing a
//! pipe-separated alias list with a typed mutable slot into the caller's
//! aggregate. A [`FieldTable`] is the registration table one option run
//! resolves aliases against; building it validates the destination shape.

use std::collections::HashSet;
use std::time::Duration;

use crate::error::{BindError, Result};

/// A typed mutable destination for one option value.
///
/// The set of kinds is closed: every kind the binder can write appears here,
/// so a field of an unsupported type is a compile error at the declaration
/// site rather than a run-time failure.
#[derive(Debug)]
pub enum Slot<'a> {
    /// Verbatim text, assigned without quoting or escaping
    Text(&'a mut String),
    /// Compound mixed-unit duration such as `5h20m1s`
    Duration(&'a mut Duration),
    /// Boolean flag; set to `true` when its option appears
    Switch(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
}

impl Slot<'_> {
    /// Whether this slot is a boolean flag. Every other kind is multipart:
    /// its option claims the following token as a value.
    pub fn is_switch(&self) -> bool {
        matches!(self, Slot::Switch(_))
    }

    /// Kind name used in conversion error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Text(_) => "string",
            Slot::Duration(_) => "duration",
            Slot::Switch(_) => "bool",
            Slot::I8(_) => "i8",
            Slot::I16(_) => "i16",
            Slot::I32(_) => "i32",
            Slot::I64(_) => "i64",
            Slot::Isize(_) => "isize",
            Slot::U8(_) => "u8",
            Slot::U16(_) => "u16",
            Slot::U32(_) => "u32",
            Slot::U64(_) => "u64",
            Slot::Usize(_) => "usize",
            Slot::F32(_) => "f32",
            Slot::F64(_) => "f64",
        }
    }
}

/// One bindable field of a destination: an alias list plus the slot its
/// value is written through.
#[derive(Debug)]
pub struct Field<'a> {
    aliases: &'static str,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Declare a field.
    ///
    /// `aliases` is a pipe-separated, case-sensitive list. Single-character
    /// aliases are reachable in short form and may be bundled; longer
    /// aliases are only reachable through the `--` form.
    pub fn new(aliases: &'static str, slot: Slot<'a>) -> Self {
        Self { aliases, slot }
    }

    fn matches(&self, alias: &str) -> bool {
        self.aliases.split('|').any(|a| !a.is_empty() && a == alias)
    }
}

/// Implemented by caller-owned option aggregates.
///
/// `fields` is called once per option run and returns a fresh field list
/// borrowing the aggregate mutably; values parsed during the run are
/// written through those borrows in place.
pub trait OptionSet {
    /// Describe the bindable fields of this aggregate.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Registration table for one option run.
///
/// Construction rejects destination shapes in which two fields share an
/// alias, so a resolved alias always identifies exactly one field.
#[derive(Debug)]
pub struct FieldTable<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> FieldTable<'a> {
    /// Build the table, validating alias uniqueness across fields.
    pub fn new(fields: Vec<Field<'a>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            for alias in field.aliases.split('|').filter(|a| !a.is_empty()) {
                if !seen.insert(alias) {
                    return Err(BindError::DuplicateAlias(alias.to_string()));
                }
            }
        }
        Ok(Self { fields })
    }

    /// Resolve an alias to its field index.
    pub fn resolve(&self, alias: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f.matches(alias))
            .ok_or_else(|| BindError::UnknownAlias(alias.to_string()))
    }

    /// Whether the field at `index` is a boolean flag.
    pub fn is_switch(&self, index: usize) -> bool {
        self.fields[index].slot.is_switch()
    }

    /// Mutable access to the slot at `index` for assignment.
    pub fn slot_mut(&mut self, index: usize) -> &mut Slot<'a> {
        &mut self.fields[index].slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_short_and_long_aliases_to_the_same_field() {
        let mut cache_loc = String::new();
        let mut ram = 0u64;
        let table = FieldTable::new(vec![
            Field::new("c|cache-loc", Slot::Text(&mut cache_loc)),
            Field::new("r|ram", Slot::U64(&mut ram)),
        ])
        .unwrap();

        assert_eq!(table.resolve("c").unwrap(), table.resolve("cache-loc").unwrap());
        assert_eq!(table.resolve("r").unwrap(), table.resolve("ram").unwrap());
        assert_ne!(table.resolve("c").unwrap(), table.resolve("ram").unwrap());
    }

    #[test]
    fn unknown_alias_is_an_error() {
        let mut silent = false;
        let table = FieldTable::new(vec![Field::new("s", Slot::Switch(&mut silent))]).unwrap();

        match table.resolve("verbose") {
            Err(BindError::UnknownAlias(alias)) => assert_eq!(alias, "verbose"),
            other => panic!("expected UnknownAlias, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_alias_across_fields_is_rejected() {
        let mut silent = false;
        let mut fast = false;
        let err = FieldTable::new(vec![
            Field::new("s|silent", Slot::Switch(&mut silent)),
            Field::new("f|s", Slot::Switch(&mut fast)),
        ])
        .unwrap_err();

        match err {
            BindError::DuplicateAlias(alias) => assert_eq!(alias, "s"),
            other => panic!("expected DuplicateAlias, got {other:?}"),
        }
    }

    #[test]
    fn empty_alias_segments_never_match() {
        let mut name = String::new();
        let table = FieldTable::new(vec![Field::new("", Slot::Text(&mut name))]).unwrap();

        assert!(matches!(table.resolve(""), Err(BindError::UnknownAlias(_))));
    }

    #[test]
    fn switch_test_follows_the_slot_kind() {
        let mut silent = false;
        let mut ram = 0u32;
        let table = FieldTable::new(vec![
            Field::new("s", Slot::Switch(&mut silent)),
            Field::new("r", Slot::U32(&mut ram)),
        ])
        .unwrap();

        assert!(table.is_switch(table.resolve("s").unwrap()));
        assert!(!table.is_switch(table.resolve("r").unwrap()));
    }
}
