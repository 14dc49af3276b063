//! Dialect-specific type rendering.
//!
//! Each dialect owns a rule table keyed by [`CanonicalType`]. Most entries
//! are declarative (target name, default arguments, suffix policy); the
//! irregular ones are plain functions over the full [`ParsedType`].

mod mysql;
mod oracle;
mod postgres;
mod sqlserver;

use tracing::trace;

use crate::dialect::Dialect;
use crate::types::{CanonicalType, ParsedType, canonicalize};

/// What follows the rendered type and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixPolicy {
    /// Nothing.
    None,
    /// ` UNSIGNED` on MySQL when the parsed type carried `unsigned`.
    UnsignedConditional,
    /// A fixed keyword, always appended.
    Literal(&'static str),
}

/// How one canonical type renders under one dialect.
#[derive(Clone, Copy)]
pub enum MappingRule {
    /// `TARGET(args...) [SUFFIX]`, falling back to `default_args` when the
    /// parsed type has no arguments.
    Declarative {
        /// Target type name.
        target: &'static str,
        /// Arguments used when none were supplied.
        default_args: &'static [&'static str],
        /// Suffix policy.
        suffix: SuffixPolicy,
    },
    /// A constant rendering that ignores any supplied arguments.
    Fixed(&'static str),
    /// Full override; its output is used verbatim.
    Transform(fn(&ParsedType) -> String),
}

impl MappingRule {
    /// A target with no defaults and no suffix.
    #[must_use]
    pub const fn plain(target: &'static str) -> Self {
        Self::sized(target, &[])
    }

    /// A target with default arguments.
    #[must_use]
    pub const fn sized(target: &'static str, default_args: &'static [&'static str]) -> Self {
        Self::Declarative {
            target,
            default_args,
            suffix: SuffixPolicy::None,
        }
    }

    /// A numeric target that honours `unsigned` where the dialect has it.
    #[must_use]
    pub const fn unsigned(target: &'static str, default_args: &'static [&'static str]) -> Self {
        Self::Declarative {
            target,
            default_args,
            suffix: SuffixPolicy::UnsignedConditional,
        }
    }

    /// A target followed by a fixed keyword.
    #[must_use]
    pub const fn suffixed(target: &'static str, keyword: &'static str) -> Self {
        Self::Declarative {
            target,
            default_args: &[],
            suffix: SuffixPolicy::Literal(keyword),
        }
    }

    /// Renders a parsed type under this rule.
    #[must_use]
    pub fn render(&self, parsed: &ParsedType, dialect: Dialect) -> String {
        match self {
            Self::Fixed(sql) => (*sql).to_string(),
            Self::Transform(transform) => transform(parsed),
            Self::Declarative {
                target,
                default_args,
                suffix,
            } => {
                let args: Vec<&str> = if parsed.has_args() {
                    parsed.args.iter().map(String::as_str).collect()
                } else {
                    default_args.to_vec()
                };

                let mut sql = render_with_args(target, &args);
                match suffix {
                    SuffixPolicy::None => {}
                    SuffixPolicy::UnsignedConditional => {
                        if dialect == Dialect::MySql && parsed.unsigned {
                            sql.push_str(" UNSIGNED");
                        }
                    }
                    SuffixPolicy::Literal(keyword) => {
                        sql.push(' ');
                        sql.push_str(keyword);
                    }
                }
                sql
            }
        }
    }
}

/// Returns the rule for a canonical type, or `None` for custom types.
#[must_use]
pub fn rule_for(dialect: Dialect, canonical: &CanonicalType) -> Option<MappingRule> {
    match dialect {
        Dialect::MySql => mysql::rule(canonical),
        Dialect::PostgreSql => postgres::rule(canonical),
        Dialect::SqlServer => sqlserver::rule(canonical),
        Dialect::Oracle => oracle::rule(canonical),
    }
}

/// Renders a parsed type for a dialect.
///
/// Types without a rule render as their own base name, uppercased, with the
/// original arguments, so custom types survive unchanged.
#[must_use]
pub fn map_type(parsed: &ParsedType, dialect: Dialect) -> String {
    let canonical = canonicalize(&parsed.base_type);
    if let Some(rule) = rule_for(dialect, &canonical) {
        return rule.render(parsed, dialect);
    }

    trace!(dialect = %dialect, base_type = %parsed.base_type, "no mapping rule, passing type through");
    let args: Vec<&str> = parsed.args.iter().map(String::as_str).collect();
    let mut sql = render_with_args(&parsed.base_type, &args);
    if dialect == Dialect::MySql && parsed.unsigned {
        sql.push_str(" UNSIGNED");
    }
    sql
}

/// Parses and renders a raw type string.
#[must_use]
pub fn field_type_for(dialect: Dialect, raw_type: &str) -> String {
    map_type(&ParsedType::parse(raw_type), dialect)
}

/// `NAME(a, b)`, or just `NAME` without arguments. `max` becomes `MAX`.
fn render_with_args(target: &str, args: &[&str]) -> String {
    let mut sql = target.to_uppercase();
    if !args.is_empty() {
        let rendered: Vec<String> = args
            .iter()
            .map(|arg| {
                if arg.eq_ignore_ascii_case("max") {
                    "MAX".to_string()
                } else {
                    (*arg).to_string()
                }
            })
            .collect();
        sql.push('(');
        sql.push_str(&rendered.join(", "));
        sql.push(')');
    }
    sql
}

/// `TARGET[(p)] QUALIFIER`, using the first argument as fractional precision.
fn with_precision(target: &str, parsed: &ParsedType, qualifier: &str) -> String {
    match parsed.args.first() {
        Some(precision) => format!("{target}({precision}) {qualifier}"),
        None => format!("{target} {qualifier}"),
    }
}
