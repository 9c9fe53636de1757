//! Symbol tables populated by the checker and handed to code generation.
//!
//! All tables are Vec-backed, insertion-ordered maps: declaration order is
//! what the debug renderer and the code generator both rely on. Entries are
//! created exactly once during the traversal and read-only afterward.

use serde::{Deserialize, Serialize};

use super::types::Type;

/// Per-slot storage size. Every field, parameter and local occupies one
/// 4-byte slot.
pub const SLOT_SIZE: i32 = 4;

/// First parameter offset; the activation-record header occupies 0..12.
pub const PARAM_BASE_OFFSET: i32 = 12;

/// One field, parameter, or local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableInfo {
    pub ty: Type,
    pub offset: i32,
    pub size: i32,
}

/// Insertion-ordered map from variable name to [`VariableInfo`]. One per
/// class (members) and one per method (parameters and locals share it,
/// in disjoint offset ranges).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableTable {
    entries: Vec<(String, VariableInfo)>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any existing entry of the same name so names stay
    /// unique within the table.
    pub fn insert(&mut self, name: String, info: VariableInfo) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = info,
            None => self.entries.push((name, info)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&VariableInfo> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, i)| i)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableInfo)> {
        self.entries.iter().map(|(n, i)| (n.as_str(), i))
    }
}

/// One method: declared return type, positional parameter types, the
/// parameter-and-local table, and the locals frame size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub return_type: Type,
    pub parameters: Vec<Type>,
    pub variables: VariableTable,
    pub locals_size: i32,
}

/// Insertion-ordered map from method name to [`MethodInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodTable {
    entries: Vec<(String, MethodInfo)>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, info: MethodInfo) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = info,
            None => self.entries.push((name, info)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&MethodInfo> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, i)| i)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MethodInfo)> {
        self.entries.iter().map(|(n, i)| (n.as_str(), i))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub superclass: Option<String>,
    pub members: VariableTable,
    pub methods: MethodTable,
    /// 4 bytes per own field; inherited fields live in the ancestor's
    /// offset space.
    pub members_size: i32,
}

impl ClassInfo {
    pub fn new(superclass: Option<String>) -> Self {
        Self {
            superclass,
            members: VariableTable::new(),
            methods: MethodTable::new(),
            members_size: 0,
        }
    }
}

/// The whole-program class table, in declaration order. Populated
/// monotonically during the single traversal; never mutated afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassTable {
    entries: Vec<(String, ClassInfo)>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, info: ClassInfo) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = info,
            None => self.entries.push((name, info)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ClassInfo> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, i)| i)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassInfo)> {
        self.entries.iter().map(|(n, i)| (n.as_str(), i))
    }
}
