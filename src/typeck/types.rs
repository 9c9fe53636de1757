use crate::ast::TypeNode;
use serde::{Deserialize, Serialize};

/// The value-type model. Derived equality is exact: `Object` types are
/// equal only when the class names match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Int,
    Boolean,
    Object(String),
    None,
}

impl Type {
    /// Language compatibility rule: assignment, return and argument
    /// matching compare base kinds only. Two `Object` types are compatible
    /// regardless of class name.
    pub fn base_kind_matches(&self, other: &Type) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Type::Object(_))
    }

    pub fn from_node(node: &TypeNode) -> Type {
        match node {
            TypeNode::Integer => Type::Int,
            TypeNode::Boolean => Type::Boolean,
            TypeNode::Object(name) => Type::Object(name.clone()),
            TypeNode::None => Type::None,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "Integer"),
            Type::Boolean => write!(f, "Boolean"),
            Type::Object(name) => write!(f, "Object({name})"),
            Type::None => write!(f, "None"),
        }
    }
}
