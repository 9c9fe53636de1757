pub mod ast;
pub mod diagnostics;
pub mod pretty;
pub mod span;
pub mod typeck;

pub use diagnostics::{render_error, TypeError};
pub use typeck::{type_check, ClassTable};
