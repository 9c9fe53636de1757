//! Expression checking and annotation. One exhaustive match over the
//! expression variants, children visited before the parent's rule, every
//! node annotated exactly once.

use crate::ast::{BinOp, Expr, ExprKind, MethodCall, UnaryOp};
use crate::diagnostics::TypeError;
use crate::span::Span;

use super::resolve::{resolve_member, resolve_method, resolve_variable};
use super::tables::{ClassTable, VariableTable};
use super::types::Type;

/// Traversal context for one method body: the whole-program table, the
/// enclosing class, and that method's parameter-and-local table.
pub(crate) struct Ctx<'a> {
    pub table: &'a ClassTable,
    pub class_name: &'a str,
    pub locals: &'a VariableTable,
}

pub(crate) fn infer_expr(expr: &mut Expr, ctx: &Ctx<'_>) -> Result<Type, TypeError> {
    let span = expr.span;
    let ty = match &mut expr.kind {
        ExprKind::IntLit(_) => Type::Int,
        ExprKind::BoolLit(_) => Type::Boolean,
        ExprKind::BinOp { op, lhs, rhs } => {
            let lhs_ty = infer_expr(lhs, ctx)?;
            let rhs_ty = infer_expr(rhs, ctx)?;
            infer_binop(*op, &lhs_ty, &rhs_ty, span)?
        }
        ExprKind::UnaryOp { op, operand } => {
            let operand_ty = infer_expr(operand, ctx)?;
            match op {
                UnaryOp::Neg => {
                    if operand_ty != Type::Int {
                        return Err(TypeError::ExpressionTypeMismatch { span });
                    }
                    Type::Int
                }
                UnaryOp::Not => {
                    if operand_ty != Type::Boolean {
                        return Err(TypeError::ExpressionTypeMismatch { span });
                    }
                    Type::Boolean
                }
            }
        }
        ExprKind::Variable(name) => {
            resolve_variable(name, span, ctx.locals, ctx.class_name, ctx.table)?
        }
        ExprKind::MemberAccess { object, member } => {
            let object_ty =
                resolve_variable(&object.node, object.span, ctx.locals, ctx.class_name, ctx.table)?;
            let Type::Object(class) = object_ty else {
                return Err(TypeError::NotAnObject {
                    name: object.node.clone(),
                    span: object.span,
                });
            };
            resolve_member(&class, &member.node, member.span, ctx.table)?
        }
        ExprKind::Call(call) => infer_call(call, ctx)?,
        ExprKind::New { class, args } => {
            let mut arg_types = Vec::with_capacity(args.len());
            for arg in args.iter_mut() {
                arg_types.push(infer_expr(arg, ctx)?);
            }

            let Some(info) = ctx.table.get(&class.node) else {
                return Err(TypeError::UndefinedClass {
                    name: class.node.clone(),
                    span: class.span,
                });
            };
            // A constructor is a method named like its class. Without one,
            // only an empty argument list is allowed.
            match info.methods.get(&class.node) {
                Some(ctor) => {
                    check_arguments(args, &arg_types, &ctor.parameters, span)?;
                }
                None => {
                    if !args.is_empty() {
                        return Err(TypeError::UndefinedMethod {
                            name: class.node.clone(),
                            span: class.span,
                        });
                    }
                }
            }
            Type::Object(class.node.clone())
        }
    };
    expr.ty = Some(ty.clone());
    Ok(ty)
}

fn infer_binop(op: BinOp, lhs: &Type, rhs: &Type, span: Span) -> Result<Type, TypeError> {
    match op {
        BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div => {
            if *lhs != Type::Int || *rhs != Type::Int {
                return Err(TypeError::ExpressionTypeMismatch { span });
            }
            Ok(Type::Int)
        }
        BinOp::Greater | BinOp::GreaterEq => {
            if *lhs != Type::Int || *rhs != Type::Int {
                return Err(TypeError::ExpressionTypeMismatch { span });
            }
            Ok(Type::Boolean)
        }
        BinOp::Eq => {
            // Both Integer or both Boolean; objects never compare.
            let both_int = *lhs == Type::Int && *rhs == Type::Int;
            let both_bool = *lhs == Type::Boolean && *rhs == Type::Boolean;
            if !both_int && !both_bool {
                return Err(TypeError::ExpressionTypeMismatch { span });
            }
            Ok(Type::Boolean)
        }
        BinOp::And | BinOp::Or => {
            if *lhs != Type::Boolean || *rhs != Type::Boolean {
                return Err(TypeError::ExpressionTypeMismatch { span });
            }
            Ok(Type::Boolean)
        }
    }
}

/// Check a bare `m(args)` or qualified `recv.m(args)` call and return the
/// method's declared return type. Bare calls resolve starting at the
/// current class.
pub(crate) fn infer_call(call: &mut MethodCall, ctx: &Ctx<'_>) -> Result<Type, TypeError> {
    let mut arg_types = Vec::with_capacity(call.args.len());
    for arg in &mut call.args {
        arg_types.push(infer_expr(arg, ctx)?);
    }

    let method = match &call.receiver {
        Some(receiver) => {
            let receiver_ty = resolve_variable(
                &receiver.node,
                receiver.span,
                ctx.locals,
                ctx.class_name,
                ctx.table,
            )?;
            let Type::Object(class) = receiver_ty else {
                return Err(TypeError::NotAnObject {
                    name: receiver.node.clone(),
                    span: receiver.span,
                });
            };
            resolve_method(&class, &call.method.node, call.method.span, ctx.table)?
        }
        None => resolve_method(ctx.class_name, &call.method.node, call.method.span, ctx.table)?,
    };

    check_arguments(&call.args, &arg_types, &method.parameters, call.span)?;
    Ok(method.return_type.clone())
}

/// The call-matching rule: pairwise base-kind comparison over the
/// overlapping prefix, then a length check.
fn check_arguments(
    args: &[Expr],
    arg_types: &[Type],
    params: &[Type],
    call_span: Span,
) -> Result<(), TypeError> {
    for ((arg, arg_ty), param_ty) in args.iter().zip(arg_types).zip(params) {
        if !arg_ty.base_kind_matches(param_ty) {
            return Err(TypeError::ArgumentTypeMismatch { span: arg.span });
        }
    }
    if arg_types.len() != params.len() {
        return Err(TypeError::ArgumentNumberMismatch {
            expected: params.len(),
            found: arg_types.len(),
            span: call_span,
        });
    }
    Ok(())
}
