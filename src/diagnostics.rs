use crate::span::Span;
use thiserror::Error;

/// One fatal kind per static rule. The first violation aborts the whole
/// check; there is no recovery or aggregation.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String, span: Span },

    #[error("method '{name}' does not exist")]
    UndefinedMethod { name: String, span: Span },

    #[error("class '{name}' does not exist")]
    UndefinedClass { name: String, span: Span },

    #[error("class member '{name}' does not exist")]
    UndefinedMember { name: String, span: Span },

    #[error("'{name}' is not an object")]
    NotAnObject { name: String, span: Span },

    #[error("expression types do not match")]
    ExpressionTypeMismatch { span: Span },

    #[error("method called with incorrect number of arguments: expected {expected}, found {found}")]
    ArgumentNumberMismatch { expected: usize, found: usize, span: Span },

    #[error("method called with argument of incorrect type")]
    ArgumentTypeMismatch { span: Span },

    #[error("predicate of while loop is not boolean")]
    WhilePredicateTypeMismatch { span: Span },

    #[error("predicate of do-while loop is not boolean")]
    DoWhilePredicateTypeMismatch { span: Span },

    #[error("predicate of if statement is not boolean")]
    IfPredicateTypeMismatch { span: Span },

    #[error("left and right hand sides of assignment do not match")]
    AssignmentTypeMismatch { span: Span },

    #[error("return statement type does not match declared return type")]
    ReturnTypeMismatch { span: Span },

    #[error("constructor of class '{class}' returns a value")]
    ConstructorReturnsValue { class: String, span: Span },

    #[error("inheritance cycle detected at class '{class}'")]
    InheritanceCycle { class: String, span: Span },

    #[error("the \"Main\" class was not found")]
    NoMainClass,

    #[error("the \"Main\" class has members")]
    MainClassMembersPresent,

    #[error("the \"Main\" class does not have a \"main\" method")]
    NoMainMethod,

    #[error("the \"main\" method of the \"Main\" class has an incorrect signature")]
    MainMethodIncorrectSignature,
}

impl TypeError {
    /// Span of the offending node, if the error points at one. The
    /// program-level `Main` contract errors have no span.
    pub fn span(&self) -> Option<Span> {
        match self {
            TypeError::UndefinedVariable { span, .. }
            | TypeError::UndefinedMethod { span, .. }
            | TypeError::UndefinedClass { span, .. }
            | TypeError::UndefinedMember { span, .. }
            | TypeError::NotAnObject { span, .. }
            | TypeError::ExpressionTypeMismatch { span }
            | TypeError::ArgumentNumberMismatch { span, .. }
            | TypeError::ArgumentTypeMismatch { span }
            | TypeError::WhilePredicateTypeMismatch { span }
            | TypeError::DoWhilePredicateTypeMismatch { span }
            | TypeError::IfPredicateTypeMismatch { span }
            | TypeError::AssignmentTypeMismatch { span }
            | TypeError::ReturnTypeMismatch { span }
            | TypeError::ConstructorReturnsValue { span, .. }
            | TypeError::InheritanceCycle { span, .. } => Some(*span),
            TypeError::NoMainClass
            | TypeError::MainClassMembersPresent
            | TypeError::NoMainMethod
            | TypeError::MainMethodIncorrectSignature => None,
        }
    }
}

/// Render a TypeError with ariadne for nice terminal output.
pub fn render_error(source: &str, err: &TypeError) {
    use ariadne::{Label, Report, ReportKind, Source};

    match err.span() {
        Some(span) => {
            Report::build(ReportKind::Error, (), span.start)
                .with_message("type error")
                .with_label(Label::new(span.start..span.end).with_message(err.to_string()))
                .finish()
                .eprint(Source::from(source))
                .unwrap();
        }
        None => {
            eprintln!("error: {err}");
        }
    }
}
