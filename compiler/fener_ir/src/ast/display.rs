//! Canonical rendering.
//!
//! Binary, prefix, index and field nodes are wrapped in parentheses so the
//! grouping the parser chose is visible in the output. Blocks put every
//! statement on its own line; the parser never lets a `(` or `[` that opens
//! a line continue the statement above, so the output reparses statement
//! for statement.

use std::fmt;

use super::{
    ArrayLiteral, AssignTarget, AssignmentExpression, Block, CallExpression, ClassStatement, Expr,
    FieldExpression, FunctionLiteral, FunctionStatement, IfExpression, IndexExpression,
    InfixExpression, Lambda, PrefixExpression, Program, Stmt, TestStatement, WhileStatement,
};

/// Write `items` separated by `", "`.
fn comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(s) => write!(f, "{}", s.expression),
            Stmt::Return(s) => write!(f, "return {}", s.value),
            Stmt::While(s) => write!(f, "{s}"),
            Stmt::Function(s) => write!(f, "{s}"),
            Stmt::Class(s) => write!(f, "{s}"),
            Stmt::Test(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while {} then\n{}end", self.condition, self.body)
    }
}

impl fmt::Display for FunctionLiteral {
    /// Parameter list and body, without the leading `fn` or name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        comma_separated(f, &self.parameters)?;
        write!(f, ")\n{}end", self.body)
    }
}

impl fmt::Display for FunctionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}{}", self.name, self.literal)
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn{}", self.literal)
    }
}

impl fmt::Display for ClassStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class {}", self.name)?;
        for method in &self.methods {
            writeln!(f, "{method}")?;
        }
        f.write_str("end")
    }
}

impl fmt::Display for TestStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test \"{}\"\n{}end", self.label, self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(e) => write!(f, "{}", e.value),
            Expr::String(e) => write!(f, "\"{}\"", e.value),
            Expr::Boolean(e) => write!(f, "{}", e.value),
            Expr::Identifier(e) => write!(f, "{e}"),
            Expr::Assignment(e) => write!(f, "{e}"),
            Expr::Infix(e) => write!(f, "{e}"),
            Expr::Prefix(e) => write!(f, "{e}"),
            Expr::Call(e) => write!(f, "{e}"),
            Expr::Index(e) => write!(f, "{e}"),
            Expr::Field(e) => write!(f, "{e}"),
            Expr::Array(e) => write!(f, "{e}"),
            Expr::If(e) => write!(f, "{e}"),
            Expr::Lambda(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for super::Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for AssignTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignTarget::Identifier(ident) => write!(f, "{ident}"),
            AssignTarget::Field(field) => write!(f, "{field}"),
        }
    }
}

impl fmt::Display for AssignmentExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op.as_symbol(), self.right)
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.op.as_symbol(), self.right)
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        comma_separated(f, &self.arguments)?;
        f.write_str(")")
    }
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

impl fmt::Display for FieldExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}.{})", self.target, self.field)
    }
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        comma_separated(f, &self.elements)?;
        f.write_str("]")
    }
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {} then\n{}", self.condition, self.consequence)?;
        for clause in &self.elifs {
            write!(f, "elif {} then\n{}", clause.condition, clause.block)?;
        }
        if let Some(alternative) = &self.alternative {
            write!(f, "else\n{alternative}")?;
        }
        f.write_str("end")
    }
}
