//! The declared variable namespace and enum tables.
//!
//! A template engine declares every variable and enum table once at
//! startup, caches the ids, and from then on resolves leaves by id. The
//! namespace is the single place that maps between dotted names, ids, and
//! the typed variable enums the resolver matches on.

mod variables;

use std::collections::HashMap;

pub use variables::{
    BooleanVariable, EnumVariable, IntegerVariable, NumberVariable, StringVariable, Variable,
};

use crate::error::{DeclareError, compute_suggestions};
use crate::types::{DeclaredEnum, DescriptionOrder, HeadingType, InputMode, Role, VariableId};

/// One enum table: its name and `(ordinal, label)` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTable {
    pub name: &'static str,
    pub entries: Vec<(i32, &'static str)>,
}

impl EnumTable {
    fn of<E: DeclaredEnum>() -> Self {
        EnumTable {
            name: E::TABLE,
            entries: E::table(),
        }
    }

    /// The ordinal for `label`, if the table has it.
    pub fn ordinal(&self, label: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(ordinal, _)| *ordinal)
    }
}

/// Declared variables indexed by id and by name.
///
/// ```
/// use compositor::VariableId;
/// use compositor::namespace::{StringVariable, Variable, VariableNamespace};
///
/// let namespace = VariableNamespace::declare().unwrap();
/// let id = namespace.id_of("collection.name").unwrap();
/// assert_eq!(id, VariableId::from_name("collection.name"));
/// assert_eq!(namespace.lookup(id), Some(Variable::String(StringVariable::CollectionName)));
/// ```
#[derive(Debug, Clone)]
pub struct VariableNamespace {
    by_id: HashMap<VariableId, Variable>,
    tables: Vec<EnumTable>,
}

impl VariableNamespace {
    /// Declares every variable and enum table.
    pub fn declare() -> Result<Self, DeclareError> {
        Self::declare_from(Variable::all())
    }

    fn declare_from(variables: impl IntoIterator<Item = Variable>) -> Result<Self, DeclareError> {
        let mut by_id: HashMap<VariableId, Variable> = HashMap::new();
        for variable in variables {
            if let Some(existing) = by_id.insert(variable.id(), variable) {
                let error = if existing.name() == variable.name() {
                    DeclareError::DuplicateName {
                        name: variable.name().to_string(),
                    }
                } else {
                    DeclareError::HashCollision {
                        first: existing.name().to_string(),
                        second: variable.name().to_string(),
                    }
                };
                tracing::warn!(%error, "variable declaration rejected");
                return Err(error);
            }
        }

        let tables = vec![
            EnumTable::of::<HeadingType>(),
            EnumTable::of::<InputMode>(),
            EnumTable::of::<Role>(),
            EnumTable::of::<DescriptionOrder>(),
        ];

        tracing::debug!(
            variables = by_id.len(),
            tables = tables.len(),
            "declared variable namespace"
        );
        Ok(Self { by_id, tables })
    }

    /// The variable declared under `id`.
    pub fn lookup(&self, id: VariableId) -> Option<Variable> {
        self.by_id.get(&id).copied()
    }

    /// The id for a dotted name, if declared.
    pub fn id_of(&self, name: &str) -> Option<VariableId> {
        let id = VariableId::from_name(name);
        self.by_id.contains_key(&id).then_some(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Declared variables in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        Variable::all().filter(|v| self.by_id.contains_key(&v.id()))
    }

    /// Names close to `name`, for reporting typos in templates.
    pub fn suggestions(&self, name: &str) -> Vec<String> {
        compute_suggestions(name, self.variables().map(Variable::name))
    }

    pub fn enum_tables(&self) -> &[EnumTable] {
        &self.tables
    }

    pub fn enum_table(&self, name: &str) -> Option<&EnumTable> {
        self.tables.iter().find(|table| table.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variable_is_declared_once() {
        let namespace = VariableNamespace::declare().unwrap();
        assert_eq!(namespace.len(), Variable::all().count());
        for variable in Variable::all() {
            assert_eq!(namespace.lookup(variable.id()), Some(variable));
        }
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let variable = Variable::Number(NumberVariable::SpeechRate);
        let err = VariableNamespace::declare_from([variable, variable]).unwrap_err();
        assert_eq!(
            err,
            DeclareError::DuplicateName {
                name: "global.speechRate".to_string()
            }
        );
    }

    #[test]
    fn unknown_name_has_no_id() {
        let namespace = VariableNamespace::declare().unwrap();
        assert_eq!(namespace.id_of("collection.nmae"), None);
        assert_eq!(namespace.suggestions("collection.nmae"), vec!["collection.name"]);
    }

    #[test]
    fn enum_tables_map_labels_to_ordinals() {
        let namespace = VariableNamespace::declare().unwrap();
        let role = namespace.enum_table("role").unwrap();
        assert_eq!(role.ordinal("pager"), Some(16));
        assert_eq!(role.ordinal("carousel"), None);

        let input_mode = namespace.enum_table("input_mode").unwrap();
        assert_eq!(input_mode.ordinal("unknown"), Some(-1));

        for variable in EnumVariable::ALL {
            assert!(namespace.enum_table(variable.table()).is_some());
        }
    }

    #[test]
    fn categories_follow_the_dotted_prefix() {
        assert_eq!(Variable::Boolean(BooleanVariable::HasKeyForClick).category(), "keyCombo");
        assert_eq!(Variable::Enum(EnumVariable::DescriptionOrder).category(), "verbosity");
    }
}
