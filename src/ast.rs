/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions evaluate to a single `f32`. Boolean and relational operators
/// also produce numbers: `1.0` for true and `0.0` for false. Any non-zero
/// value is treated as true when used as a condition.
///
/// Every node owns its operands exclusively, so the tree never shares or
/// aliases a subexpression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a variable by name, resolved when evaluated.
    Variable(String),
    /// A numeric literal.
    Constant(f32),
    /// A unary operation (arithmetic negation or logical NOT).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (arithmetic, logical or relational).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::Unary { op,
                      expr: Box::new(expr) }
    }

    /// Builds a binary node.
    ///
    /// ## Example
    /// ```
    /// use turtlec::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::Constant(1.0), BinaryOperator::Add, Expr::variable("x"));
    ///
    /// assert_eq!(sum.to_string(), "(1 + x)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }
}

/// A statement of the turtle language.
///
/// Statements are executed for their effect: they either update the
/// environment or emit turtle commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `name := value`
    Assign {
        /// The variable being bound (the l-value).
        name:  String,
        /// The expression whose result is stored (the r-value).
        value: Expr,
    },
    /// A run of adjacent statements executed in order.
    Block(Vec<Self>),
    /// `WHILE condition DO body OD`
    While {
        /// Evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
    /// `IF condition THEN body [ELSIF ...] [ELSE ...] FI`
    ///
    /// An `ELSIF` arm is stored as another `If` inside `else_branch`.
    If {
        /// Evaluated exactly once.
        condition:   Expr,
        /// Executed when the condition is non-zero.
        body:        Box<Self>,
        /// Executed when the condition is zero, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `HOME`
    Home,
    /// `PENUP`
    PenUp,
    /// `PENDOWN`
    PenDown,
    /// `PUSHSTATE`
    PushState,
    /// `POPSTATE`
    PopState,
    /// `FORWARD distance`
    Forward(Expr),
    /// `LEFT angle`
    Left(Expr),
    /// `RIGHT angle`
    Right(Expr),
}

/// A parsed program: the ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Stmt>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, logical connectives and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Logical and (`AND`)
    And,
    /// Logical or (`OR`)
    Or,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `NOT x < 1`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            And => "AND",
            Or => "OR",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "NOT "),
        }
    }
}

/// Renders the expression fully parenthesized, so the tree shape is visible.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Constant(value) => write!(f, "{value}"),
            Self::Unary { op, expr } => write!(f, "({op}{expr})"),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

impl Stmt {
    fn fmt_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            Self::Assign { name, value } => writeln!(f, "{pad}{name} := {value}"),
            Self::Block(statements) => {
                for statement in statements {
                    statement.fmt_indented(f, depth)?;
                }
                Ok(())
            },
            Self::While { condition, body } => {
                writeln!(f, "{pad}WHILE {condition} DO")?;
                body.fmt_indented(f, depth + 1)?;
                writeln!(f, "{pad}OD")
            },
            Self::If { condition,
                       body,
                       else_branch, } => {
                writeln!(f, "{pad}IF {condition} THEN")?;
                body.fmt_indented(f, depth + 1)?;
                if let Some(else_branch) = else_branch {
                    writeln!(f, "{pad}ELSE")?;
                    else_branch.fmt_indented(f, depth + 1)?;
                }
                writeln!(f, "{pad}FI")
            },
            Self::Home => writeln!(f, "{pad}HOME"),
            Self::PenUp => writeln!(f, "{pad}PENUP"),
            Self::PenDown => writeln!(f, "{pad}PENDOWN"),
            Self::PushState => writeln!(f, "{pad}PUSHSTATE"),
            Self::PopState => writeln!(f, "{pad}POPSTATE"),
            Self::Forward(distance) => writeln!(f, "{pad}FORWARD {distance}"),
            Self::Left(angle) => writeln!(f, "{pad}LEFT {angle}"),
            Self::Right(angle) => writeln!(f, "{pad}RIGHT {angle}"),
        }
    }
}

/// Pretty-prints the statement tree, one statement per line.
impl std::fmt::Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
