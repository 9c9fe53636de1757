//! Debug rendering of the class table as nested, indented text blocks.
//! Purely diagnostic; nothing downstream consumes this.

use crate::typeck::{ClassTable, MethodTable, VariableTable};

/// Render the whole table as `ClassTable { name -> { … } }` blocks, in
/// declaration order.
pub fn render_class_table(table: &ClassTable) -> String {
    let mut r = Renderer { buf: String::new() };
    r.class_table(table);
    r.buf
}

struct Renderer {
    buf: String,
}

impl Renderer {
    fn write(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buf.push(' ');
        }
    }

    fn class_table(&mut self, table: &ClassTable) {
        self.write("ClassTable {");
        self.newline();
        let count = table.len();
        for (i, (name, info)) in table.iter().enumerate() {
            self.indent(2);
            self.write(name);
            self.write(" -> {");
            self.newline();
            if let Some(superclass) = &info.superclass {
                self.indent(4);
                self.write(superclass);
                self.write(",");
                self.newline();
            }
            self.variable_table(&info.members, 4);
            self.write(",");
            self.newline();
            self.method_table(&info.methods, 4);
            self.newline();
            self.indent(2);
            self.write("}");
            if i + 1 < count {
                self.write(",");
            }
            self.newline();
        }
        self.write("}");
        self.newline();
    }

    fn variable_table(&mut self, table: &VariableTable, depth: usize) {
        self.indent(depth);
        self.write("VariableTable {");
        if table.is_empty() {
            self.write("}");
            return;
        }
        self.newline();
        let count = table.len();
        for (i, (name, info)) in table.iter().enumerate() {
            self.indent(depth + 2);
            self.write(&format!("{name} -> {{{}, {}, {}}}", info.ty, info.offset, info.size));
            if i + 1 < count {
                self.write(",");
            }
            self.newline();
        }
        self.indent(depth);
        self.write("}");
    }

    fn method_table(&mut self, table: &MethodTable, depth: usize) {
        self.indent(depth);
        self.write("MethodTable {");
        if table.is_empty() {
            self.write("}");
            return;
        }
        self.newline();
        let count = table.len();
        for (i, (name, info)) in table.iter().enumerate() {
            self.indent(depth + 2);
            self.write(name);
            self.write(" -> {");
            self.newline();
            self.indent(depth + 4);
            self.write(&format!("{},", info.return_type));
            self.newline();
            self.indent(depth + 4);
            self.write(&format!("{},", info.locals_size));
            self.newline();
            self.variable_table(&info.variables, depth + 4);
            self.newline();
            self.indent(depth + 2);
            self.write("}");
            if i + 1 < count {
                self.write(",");
            }
            self.newline();
        }
        self.indent(depth);
        self.write("}");
    }
}
