//! Name & member resolution. These three lookups are the single source of
//! truth for inheritance-chain search; no checking rule re-implements the
//! walk itself.

use std::collections::HashSet;

use crate::diagnostics::TypeError;
use crate::span::Span;

use super::tables::{ClassInfo, ClassTable, MethodInfo, VariableTable};
use super::types::Type;

/// Walk the superclass chain starting at `start`, nearest class first,
/// applying `probe` to each [`ClassInfo`] until it yields a hit. A repeated
/// class name means the hierarchy is cyclic.
fn walk_chain<'t, T>(
    start: &str,
    span: Span,
    table: &'t ClassTable,
    mut probe: impl FnMut(&'t ClassInfo) -> Option<T>,
) -> Result<Option<T>, TypeError> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = table.get(start).map(|info| (start, info));
    if current.is_none() {
        return Err(TypeError::UndefinedClass { name: start.to_string(), span });
    }
    while let Some((name, info)) = current {
        if !visited.insert(name) {
            return Err(TypeError::InheritanceCycle { class: name.to_string(), span });
        }
        if let Some(hit) = probe(info) {
            return Ok(Some(hit));
        }
        current = match info.superclass.as_deref() {
            Some(sup) => match table.get(sup) {
                Some(sup_info) => Some((sup, sup_info)),
                None => {
                    return Err(TypeError::UndefinedClass { name: sup.to_string(), span });
                }
            },
            None => None,
        };
    }
    Ok(None)
}

/// Resolve an identifier from a method body: the method's own
/// parameter-and-local table first, then the current class's members, then
/// the superclass chain.
pub(crate) fn resolve_variable(
    name: &str,
    span: Span,
    locals: &VariableTable,
    class_name: &str,
    table: &ClassTable,
) -> Result<Type, TypeError> {
    if let Some(info) = locals.get(name) {
        return Ok(info.ty.clone());
    }
    let found = walk_chain(class_name, span, table, |info| info.members.get(name))?;
    match found {
        Some(info) => Ok(info.ty.clone()),
        None => Err(TypeError::UndefinedVariable { name: name.to_string(), span }),
    }
}

/// Resolve a field of an explicitly named class (`obj.field` access),
/// searching the class and then its ancestors.
pub(crate) fn resolve_member(
    class_name: &str,
    member: &str,
    span: Span,
    table: &ClassTable,
) -> Result<Type, TypeError> {
    let found = walk_chain(class_name, span, table, |info| info.members.get(member))?;
    match found {
        Some(info) => Ok(info.ty.clone()),
        None => Err(TypeError::UndefinedMember { name: member.to_string(), span }),
    }
}

/// Resolve a method of a named class by the same walk over method tables.
pub(crate) fn resolve_method<'t>(
    class_name: &str,
    method: &str,
    span: Span,
    table: &'t ClassTable,
) -> Result<&'t MethodInfo, TypeError> {
    let found = walk_chain(class_name, span, table, |info| info.methods.get(method))?;
    found.ok_or_else(|| TypeError::UndefinedMethod { name: method.to_string(), span })
}
