//! Statements: the leaves of a pattern tree.
//!
//! A statement asserts a list of constraints about one head variable:
//!
//! ```text
//! $x isa person, has name $n;
//! $m (spouse: $x, spouse: $y) isa marriage;
//! ?age > 18;
//! ```

use std::fmt;
use tql_core::{Value, Variable};

/// Comparison operators for predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    Like,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Neq => "!=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::Contains => "contains",
            Comparator::Like => "like",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Variable(Variable),
    Value(Value),
}

impl From<Variable> for Operand {
    fn from(variable: Variable) -> Self {
        Operand::Variable(variable)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Variable(v) => write!(f, "{}", v),
            Operand::Value(v) => write!(f, "{}", v),
        }
    }
}

/// One role player of a relation: `role: $player` or just `$player`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RolePlayer {
    pub role: Option<Variable>,
    pub player: Variable,
}

impl RolePlayer {
    pub fn new(role: Option<Variable>, player: Variable) -> Self {
        Self { role, player }
    }
}

impl fmt::Display for RolePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.role {
            Some(role) => write!(f, "{}: {}", role, self.player),
            None => write!(f, "{}", self.player),
        }
    }
}

/// A constraint on a statement's head variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// `isa type` (or `isa! type` when explicit).
    Isa { type_: Variable, explicit: bool },
    /// `sub supertype` (or `sub! supertype` when explicit).
    Sub { supertype: Variable, explicit: bool },
    /// `has attribute_type $attribute`.
    Has {
        attribute_type: Option<Variable>,
        attribute: Variable,
    },
    /// `(role: $player, ...)`.
    Relation(Vec<RolePlayer>),
    /// `comparator operand`, e.g. `> 18` or `== $y`.
    Predicate {
        comparator: Comparator,
        operand: Operand,
    },
}

impl Constraint {
    /// Variables referenced by this constraint, in declaration order.
    pub fn variables(&self) -> Vec<&Variable> {
        match self {
            Constraint::Isa { type_, .. } => vec![type_],
            Constraint::Sub { supertype, .. } => vec![supertype],
            Constraint::Has {
                attribute_type,
                attribute,
            } => attribute_type.iter().chain(std::iter::once(attribute)).collect(),
            Constraint::Relation(players) => players
                .iter()
                .flat_map(|rp| rp.role.iter().chain(std::iter::once(&rp.player)))
                .collect(),
            Constraint::Predicate { operand, .. } => match operand {
                Operand::Variable(v) => vec![v],
                Operand::Value(_) => Vec::new(),
            },
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Isa { type_, explicit } => {
                write!(f, "{} {}", if *explicit { "isa!" } else { "isa" }, type_)
            }
            Constraint::Sub { supertype, explicit } => {
                write!(f, "{} {}", if *explicit { "sub!" } else { "sub" }, supertype)
            }
            Constraint::Has {
                attribute_type: Some(attribute_type),
                attribute,
            } => write!(f, "has {} {}", attribute_type, attribute),
            Constraint::Has {
                attribute_type: None,
                attribute,
            } => write!(f, "has {}", attribute),
            Constraint::Relation(players) => {
                write!(f, "(")?;
                for (i, player) in players.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", player)?;
                }
                write!(f, ")")
            }
            Constraint::Predicate {
                comparator,
                operand,
            } => write!(f, "{} {}", comparator, operand),
        }
    }
}

/// An atomic pattern: a head variable and its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    head: Variable,
    constraints: Vec<Constraint>,
}

impl Statement {
    pub fn new(head: Variable, constraints: Vec<Constraint>) -> Self {
        Self { head, constraints }
    }

    /// Start building a statement about `head`.
    pub fn builder(head: Variable) -> StatementBuilder {
        StatementBuilder::new(head)
    }

    pub fn head(&self) -> &Variable {
        &self.head
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The head variable followed by every variable of every constraint, in
    /// declaration order. Repeated variables are yielded once per occurrence.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> + '_ {
        std::iter::once(&self.head).chain(self.constraints.iter().flat_map(Constraint::variables))
    }

    /// The named variables of [`Statement::variables`].
    pub fn named_variables(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.variables().filter(|v| v.is_named())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head_visible = self.head.is_visible();
        if head_visible {
            write!(f, "{}", self.head)?;
        }
        let mut previous: Option<&Constraint> = None;
        for constraint in &self.constraints {
            match previous {
                // Relation tuples read as part of the head: `$m (a: $x) isa t`.
                Some(Constraint::Relation(_)) => write!(f, " ")?,
                Some(_) => write!(f, ", ")?,
                None if head_visible => write!(f, " ")?,
                None => {}
            }
            write!(f, "{}", constraint)?;
            previous = Some(constraint);
        }
        write!(f, ";")
    }
}

/// Accumulates constraints (and relation role players) before sealing a
/// [`Statement`].
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    head: Variable,
    constraints: Vec<Constraint>,
}

impl StatementBuilder {
    pub fn new(head: Variable) -> Self {
        Self {
            head,
            constraints: Vec::new(),
        }
    }

    pub fn isa(mut self, type_: Variable) -> Self {
        self.constraints.push(Constraint::Isa {
            type_,
            explicit: false,
        });
        self
    }

    pub fn isa_explicit(mut self, type_: Variable) -> Self {
        self.constraints.push(Constraint::Isa {
            type_,
            explicit: true,
        });
        self
    }

    pub fn sub(mut self, supertype: Variable) -> Self {
        self.constraints.push(Constraint::Sub {
            supertype,
            explicit: false,
        });
        self
    }

    pub fn sub_explicit(mut self, supertype: Variable) -> Self {
        self.constraints.push(Constraint::Sub {
            supertype,
            explicit: true,
        });
        self
    }

    pub fn has(mut self, attribute_type: Variable, attribute: Variable) -> Self {
        self.constraints.push(Constraint::Has {
            attribute_type: Some(attribute_type),
            attribute,
        });
        self
    }

    pub fn has_attribute(mut self, attribute: Variable) -> Self {
        self.constraints.push(Constraint::Has {
            attribute_type: None,
            attribute,
        });
        self
    }

    /// Add a role player. All role players of a statement share one relation
    /// constraint, which is kept first.
    pub fn rel(mut self, role: Option<Variable>, player: Variable) -> Self {
        let role_player = RolePlayer::new(role, player);
        match self.constraints.first_mut() {
            Some(Constraint::Relation(players)) => players.push(role_player),
            _ => self
                .constraints
                .insert(0, Constraint::Relation(vec![role_player])),
        }
        self
    }

    pub fn predicate(mut self, comparator: Comparator, operand: impl Into<Operand>) -> Self {
        self.constraints.push(Constraint::Predicate {
            comparator,
            operand: operand.into(),
        });
        self
    }

    pub fn build(self) -> Statement {
        Statement::new(self.head, self.constraints)
    }
}
