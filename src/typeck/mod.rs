//! The semantic-analysis pass: one top-to-bottom traversal of the program
//! that builds the class table, annotates every expression and declaration
//! node with its resolved type, and enforces the language's static rules.
//! Fail-fast: the first violation aborts the whole check.

pub mod tables;
pub mod types;

mod check;
mod infer;
mod register;
mod resolve;

use crate::ast::Program;
use crate::diagnostics::TypeError;

pub use tables::{ClassInfo, ClassTable, MethodInfo, MethodTable, VariableInfo, VariableTable};
use types::Type;

/// Check the whole program. Classes are processed in declaration order:
/// each class's table entry is fully registered (fields and all method
/// signatures) before its method bodies are checked, and a class must be
/// declared before anything references it. On success the tree is
/// annotated in place and the populated class table is returned.
pub fn type_check(program: &mut Program) -> Result<ClassTable, TypeError> {
    let mut table = ClassTable::new();

    for class in &mut program.classes {
        register::register_class(&mut class.node, &mut table)?;
        let class_name = class.node.name.node.clone();
        for method in &mut class.node.methods {
            check::check_method(&class_name, &mut method.node, &table)?;
        }
    }

    check_main_contract(&table)?;
    Ok(table)
}

/// The whole-program `Main` contract, checked after the traversal in
/// priority order: the class exists, has no members, declares a `main`
/// method, and that method takes nothing and returns nothing. Both `main`
/// checks look at `Main`'s own method table, not inherited ones.
fn check_main_contract(table: &ClassTable) -> Result<(), TypeError> {
    let Some(main_class) = table.get("Main") else {
        return Err(TypeError::NoMainClass);
    };
    if !main_class.members.is_empty() {
        return Err(TypeError::MainClassMembersPresent);
    }
    let Some(main_method) = main_class.methods.get("main") else {
        return Err(TypeError::NoMainMethod);
    };
    if main_method.return_type != Type::None || !main_method.parameters.is_empty() {
        return Err(TypeError::MainMethodIncorrectSignature);
    }
    Ok(())
}
