//! Route access policy: which item operations require which scope.

use std::fmt;
use std::str::FromStr;

/// The five item operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    GetOne,
    GetAll,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::GetOne,
        Operation::GetAll,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::GetOne => "get_one",
            Operation::GetAll => "get_all",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown operation '{}'", s.trim()))
    }
}

/// Maps each operation to the scope it requires, if any.
///
/// The baseline gates only [`Operation::Create`]. Reads, updates and deletes
/// stay open unless an operator explicitly adds them; see
/// [`AccessPolicy::gating`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    scope: String,
    gated: Vec<Operation>,
}

impl AccessPolicy {
    /// Gates only item creation behind `scope`.
    pub fn baseline(scope: impl Into<String>) -> Self {
        Self::gating(scope, [Operation::Create])
    }

    /// Gates exactly the given operations behind `scope`.
    pub fn gating(scope: impl Into<String>, operations: impl IntoIterator<Item = Operation>) -> Self {
        let mut gated: Vec<Operation> = Vec::new();
        for op in operations {
            if !gated.contains(&op) {
                gated.push(op);
            }
        }
        Self {
            scope: scope.into(),
            gated,
        }
    }

    /// Scope the operation requires, or `None` if it is open.
    pub fn required_scope(&self, operation: Operation) -> Option<&str> {
        self.gated
            .contains(&operation)
            .then_some(self.scope.as_str())
    }

    pub fn gated_operations(&self) -> &[Operation] {
        &self.gated
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}
