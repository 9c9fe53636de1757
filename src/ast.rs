//! The fixed node grammar handed to the checker by an external parser.
//!
//! Expression and declaration nodes carry a write-once annotation slot
//! (`ty` / `resolved`) that the checker fills during its single traversal;
//! the annotated tree plus the populated class table are what code
//! generation consumes.

use crate::span::{Span, Spanned};
use crate::typeck::types::Type;

#[derive(Debug)]
pub struct Program {
    pub classes: Vec<Spanned<ClassDecl>>,
}

#[derive(Debug)]
pub struct ClassDecl {
    pub name: Spanned<String>,
    pub superclass: Option<Spanned<String>>,
    pub fields: Vec<Declaration>,
    pub methods: Vec<Spanned<MethodDecl>>,
}

/// One declaration line, possibly introducing several names (`int a, b;`).
#[derive(Debug)]
pub struct Declaration {
    pub ty: Spanned<TypeNode>,
    pub names: Vec<Spanned<String>>,
    pub resolved: Option<Type>,
}

#[derive(Debug)]
pub struct MethodDecl {
    pub name: Spanned<String>,
    pub return_type: Spanned<TypeNode>,
    pub params: Vec<Param>,
    pub body: MethodBody,
    pub resolved_return: Option<Type>,
}

#[derive(Debug)]
pub struct Param {
    pub name: Spanned<String>,
    pub ty: Spanned<TypeNode>,
    pub resolved: Option<Type>,
}

/// Local declarations come first, then statements, then the optional
/// trailing return. The grammar allows at most one return per method.
#[derive(Debug)]
pub struct MethodBody {
    pub decls: Vec<Declaration>,
    pub stmts: Vec<Stmt>,
    pub ret: Option<ReturnStmt>,
}

#[derive(Debug)]
pub struct ReturnStmt {
    pub expr: Expr,
    pub span: Span,
}

/// Declared-type annotation as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Integer,
    Boolean,
    Object(String),
    None,
}

#[derive(Debug)]
pub enum Stmt {
    Assign {
        target: Spanned<String>,
        /// `Some` for the `obj.field = expr` form.
        member: Option<Spanned<String>>,
        value: Expr,
        span: Span,
        resolved: Option<Type>,
    },
    IfElse {
        condition: Expr,
        then_stmts: Vec<Stmt>,
        else_stmts: Vec<Stmt>,
        span: Span,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
        span: Span,
    },
    DoWhile {
        body: Vec<Stmt>,
        condition: Expr,
        span: Span,
    },
    Print {
        expr: Expr,
        span: Span,
    },
    Call(MethodCall),
}

/// Bare `m(args)` or qualified `recv.m(args)`; receivers are identifiers.
#[derive(Debug)]
pub struct MethodCall {
    pub receiver: Option<Spanned<String>>,
    pub method: Spanned<String>,
    pub args: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    /// Filled exactly once by the checker.
    pub ty: Option<Type>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span, ty: None }
    }
}

#[derive(Debug)]
pub enum ExprKind {
    IntLit(i32),
    BoolLit(bool),
    BinOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Variable(String),
    MemberAccess {
        object: Spanned<String>,
        member: Spanned<String>,
    },
    Call(MethodCall),
    New {
        class: Spanned<String>,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Greater,
    GreaterEq,
    Eq,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Neg,
    Not,
}
