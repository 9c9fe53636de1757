//! Statement checking and the per-method return rule.

use crate::ast::{MethodDecl, Stmt};
use crate::diagnostics::TypeError;

use super::infer::{infer_call, infer_expr, Ctx};
use super::resolve::{resolve_member, resolve_method, resolve_variable};
use super::tables::ClassTable;
use super::types::Type;

/// Check one method body against the signatures already registered for
/// its class. Registration is complete for the whole class by the time
/// this runs, so sibling calls and recursion resolve.
pub(crate) fn check_method(
    class_name: &str,
    method: &mut MethodDecl,
    table: &ClassTable,
) -> Result<(), TypeError> {
    let info = resolve_method(class_name, &method.name.node, method.name.span, table)?;
    let declared = info.return_type.clone();
    let ctx = Ctx { table, class_name, locals: &info.variables };

    for stmt in &mut method.body.stmts {
        check_stmt(stmt, &ctx)?;
    }

    let returned = match &mut method.body.ret {
        Some(ret) => Some((infer_expr(&mut ret.expr, &ctx)?, ret.span)),
        None => None,
    };
    match (&declared, returned) {
        // A None-returning method must not return a value.
        (Type::None, Some((_, span))) => Err(TypeError::ReturnTypeMismatch { span }),
        (Type::None, None) => Ok(()),
        // Any other declared kind requires a return of the same base kind.
        (_, None) => Err(TypeError::ReturnTypeMismatch { span: method.name.span }),
        (_, Some((ty, span))) => {
            if ty.base_kind_matches(&declared) {
                Ok(())
            } else {
                Err(TypeError::ReturnTypeMismatch { span })
            }
        }
    }
}

fn check_stmt(stmt: &mut Stmt, ctx: &Ctx<'_>) -> Result<(), TypeError> {
    match stmt {
        Stmt::Assign { target, member, value, span, resolved } => {
            let value_ty = infer_expr(value, ctx)?;
            let target_ty = resolve_variable(
                &target.node,
                target.span,
                ctx.locals,
                ctx.class_name,
                ctx.table,
            )?;
            let target_ty = match member {
                Some(m) => {
                    let Type::Object(class) = target_ty else {
                        return Err(TypeError::NotAnObject {
                            name: target.node.clone(),
                            span: target.span,
                        });
                    };
                    resolve_member(&class, &m.node, m.span, ctx.table)?
                }
                None => target_ty,
            };
            if !value_ty.base_kind_matches(&target_ty) {
                return Err(TypeError::AssignmentTypeMismatch { span: *span });
            }
            // The assignment takes on the right-hand type.
            *resolved = Some(value_ty);
            Ok(())
        }
        Stmt::IfElse { condition, then_stmts, else_stmts, span } => {
            let cond_ty = infer_expr(condition, ctx)?;
            for s in then_stmts.iter_mut().chain(else_stmts.iter_mut()) {
                check_stmt(s, ctx)?;
            }
            if cond_ty != Type::Boolean {
                return Err(TypeError::IfPredicateTypeMismatch { span: *span });
            }
            Ok(())
        }
        Stmt::While { condition, body, span } => {
            let cond_ty = infer_expr(condition, ctx)?;
            for s in body.iter_mut() {
                check_stmt(s, ctx)?;
            }
            if cond_ty != Type::Boolean {
                return Err(TypeError::WhilePredicateTypeMismatch { span: *span });
            }
            Ok(())
        }
        Stmt::DoWhile { body, condition, span } => {
            for s in body.iter_mut() {
                check_stmt(s, ctx)?;
            }
            let cond_ty = infer_expr(condition, ctx)?;
            if cond_ty != Type::Boolean {
                return Err(TypeError::DoWhilePredicateTypeMismatch { span: *span });
            }
            Ok(())
        }
        Stmt::Print { expr, .. } => {
            // No type constraint; the expression is still checked.
            infer_expr(expr, ctx)?;
            Ok(())
        }
        Stmt::Call(call) => {
            infer_call(call, ctx)?;
            Ok(())
        }
    }
}
