//! Symbol Table Builder: per class, validate the superclass, lay out
//! fields, and record every method signature (parameters, locals, return
//! type) before any body of that class is checked. This is what lets a
//! method call its siblings and recurse.

use crate::ast::{ClassDecl, Declaration, MethodDecl, TypeNode};
use crate::diagnostics::TypeError;
use crate::span::Spanned;

use super::tables::{
    ClassInfo, ClassTable, MethodInfo, VariableInfo, VariableTable, PARAM_BASE_OFFSET, SLOT_SIZE,
};
use super::types::Type;

/// Where a declaration line lives. Class members count upward from 0;
/// method locals count downward from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeclScope {
    Class,
    Method,
}

pub(crate) fn register_class(
    class: &mut ClassDecl,
    table: &mut ClassTable,
) -> Result<(), TypeError> {
    let class_name = class.name.node.clone();

    // Declare-before-use is a language rule: the superclass must already
    // be registered.
    let superclass = match &class.superclass {
        Some(sup) => {
            if !table.contains(&sup.node) {
                return Err(TypeError::UndefinedClass {
                    name: sup.node.clone(),
                    span: sup.span,
                });
            }
            Some(sup.node.clone())
        }
        None => None,
    };

    let mut info = ClassInfo::new(superclass);

    let mut member_offset = 0;
    register_declarations(
        &mut class.fields,
        DeclScope::Class,
        &mut info.members,
        &mut member_offset,
        table,
        &class_name,
    )?;
    info.members_size = member_offset;

    for method in &mut class.methods {
        let method_info = register_method(&class_name, &mut method.node, table)?;
        info.methods.insert(method.node.name.node.clone(), method_info);
    }

    table.insert(class_name, info);
    Ok(())
}

fn register_method(
    class_name: &str,
    method: &mut MethodDecl,
    table: &ClassTable,
) -> Result<MethodInfo, TypeError> {
    let return_type = declared_type(&method.return_type, table, class_name)?;

    // A method named like its class is a constructor.
    if method.name.node == class_name && return_type != Type::None {
        return Err(TypeError::ConstructorReturnsValue {
            class: class_name.to_string(),
            span: method.name.span,
        });
    }

    let mut variables = VariableTable::new();
    let mut parameters = Vec::new();
    let mut param_offset = PARAM_BASE_OFFSET;
    for param in &mut method.params {
        let ty = declared_type(&param.ty, table, class_name)?;
        variables.insert(
            param.name.node.clone(),
            VariableInfo { ty: ty.clone(), offset: param_offset, size: SLOT_SIZE },
        );
        param_offset += SLOT_SIZE;
        parameters.push(ty.clone());
        param.resolved = Some(ty);
    }

    let mut local_offset = 0;
    register_declarations(
        &mut method.body.decls,
        DeclScope::Method,
        &mut variables,
        &mut local_offset,
        table,
        class_name,
    )?;

    method.resolved_return = Some(return_type.clone());
    Ok(MethodInfo {
        return_type,
        parameters,
        variables,
        locals_size: local_offset.abs(),
    })
}

fn register_declarations(
    decls: &mut [Declaration],
    scope: DeclScope,
    variables: &mut VariableTable,
    offset: &mut i32,
    table: &ClassTable,
    class_name: &str,
) -> Result<(), TypeError> {
    for decl in decls {
        let ty = declared_type(&decl.ty, table, class_name)?;
        for name in &decl.names {
            let slot = match scope {
                DeclScope::Class => {
                    let slot = *offset;
                    *offset += SLOT_SIZE;
                    slot
                }
                DeclScope::Method => {
                    *offset -= SLOT_SIZE;
                    *offset
                }
            };
            variables.insert(
                name.node.clone(),
                VariableInfo { ty: ty.clone(), offset: slot, size: SLOT_SIZE },
            );
        }
        decl.resolved = Some(ty);
    }
    Ok(())
}

/// Turn a declared-type node into a [`Type`], checking that object types
/// name a known class. The class currently being registered counts as
/// known, so self-referential fields and returns work.
fn declared_type(
    node: &Spanned<TypeNode>,
    table: &ClassTable,
    class_name: &str,
) -> Result<Type, TypeError> {
    if let TypeNode::Object(name) = &node.node {
        if name != class_name && !table.contains(name) {
            return Err(TypeError::UndefinedClass { name: name.clone(), span: node.span });
        }
    }
    Ok(Type::from_node(&node.node))
}
