//! The closed set of SQL dialects the synthesizer targets.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DdlError;

/// A supported SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MySQL / MariaDB.
    #[serde(alias = "mariadb")]
    MySql,
    /// PostgreSQL.
    #[serde(alias = "postgres", alias = "pg")]
    PostgreSql,
    /// Microsoft SQL Server.
    #[serde(alias = "mssql")]
    SqlServer,
    /// Oracle Database.
    Oracle,
}

impl Dialect {
    /// All dialects, in registration order.
    pub const ALL: [Self; 4] = [Self::MySql, Self::PostgreSql, Self::SqlServer, Self::Oracle];

    /// Returns the dialect identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::SqlServer => "sqlserver",
            Self::Oracle => "oracle",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Dialect {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "oracle" => Ok(Self::Oracle),
            _ => Err(DdlError::UnsupportedDialect(s.to_string())),
        }
    }
}
