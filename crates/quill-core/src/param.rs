use crate::stmt::Value;

use std::collections::HashMap;

/// One named parameter binding, consumed by the execution collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: Value,
}

/// A sink for parameter bindings.
///
/// `base` is the preferred name (the referenced property's name); the sink
/// returns the unique name actually registered.
pub trait Params {
    fn bind(&mut self, base: &str, value: Value) -> String;
}

/// The ordered parameter set of one compiled statement.
///
/// Names are deduplicated with a single per-statement counter: the first use
/// of a base name binds it as-is, and each further use suffixes the number of
/// times the base has already been bound. The comparison path and `IN`-list
/// expansion share this counter, so a statement never registers the same
/// name twice.
#[derive(Debug, Default)]
pub struct ParamSet {
    params: Vec<Param>,
    used: HashMap<String, usize>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Param> {
        self.params.iter()
    }

    /// The bound value for a registered name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| &param.value)
    }

    pub fn into_vec(self) -> Vec<Param> {
        self.params
    }
}

impl Params for ParamSet {
    fn bind(&mut self, base: &str, value: Value) -> String {
        let count = self.used.entry(base.to_string()).or_insert(0);
        let name = if *count == 0 {
            base.to_string()
        } else {
            format!("{base}{count}")
        };
        *count += 1;

        self.params.push(Param {
            name: name.clone(),
            value,
        });
        name
    }
}

impl<'a> IntoIterator for &'a ParamSet {
    type IntoIter = std::slice::Iter<'a, Param>;
    type Item = &'a Param;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
