//! Table descriptions consumed by the synthesizer.
//!
//! These are the values a UI or state layer hands over: already trimmed,
//! with rows lacking a name or type filtered out. They deserialize from
//! the camelCase JSON such a layer produces.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{CanonicalType, ParsedType, canonicalize};

/// How a column obtains its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultKind {
    /// No default.
    #[default]
    None,
    /// Auto-increment / identity column.
    AutoIncrement,
    /// A constant taken from `default_value`.
    Constant,
    /// The current timestamp.
    CurrentTimestamp,
    /// A generated UUID.
    Uuid,
}

/// Action applied when a row is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnUpdate {
    /// No action.
    #[default]
    None,
    /// Refresh the column with the current timestamp.
    CurrentTimestamp,
}

/// A column as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedField {
    /// Column name.
    pub name: String,
    /// Raw type string, e.g. `"decimal(10,2) unsigned"`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Column comment.
    #[serde(default)]
    pub comment: String,
    /// Whether the column accepts NULL.
    #[serde(default = "nullable_by_default")]
    pub nullable: bool,
    /// How the default value is produced.
    #[serde(default)]
    pub default_kind: DefaultKind,
    /// Constant default, used with [`DefaultKind::Constant`].
    #[serde(default)]
    pub default_value: String,
    /// Action on update.
    #[serde(default)]
    pub on_update: OnUpdate,
}

const fn nullable_by_default() -> bool {
    true
}

impl NormalizedField {
    /// Creates a nullable column with no default and no comment.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            comment: String::new(),
            nullable: true,
            default_kind: DefaultKind::None,
            default_value: String::new(),
            on_update: OnUpdate::None,
        }
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the column comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Marks the column as auto-increment.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.default_kind = DefaultKind::AutoIncrement;
        self
    }

    /// Sets a constant default.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_kind = DefaultKind::Constant;
        self.default_value = value.into();
        self
    }

    /// Defaults the column to the current timestamp.
    #[must_use]
    pub fn default_current_timestamp(mut self) -> Self {
        self.default_kind = DefaultKind::CurrentTimestamp;
        self
    }

    /// Defaults the column to a generated UUID.
    #[must_use]
    pub fn default_uuid(mut self) -> Self {
        self.default_kind = DefaultKind::Uuid;
        self
    }

    /// Refreshes the column with the current timestamp on update.
    #[must_use]
    pub fn on_update_current_timestamp(mut self) -> Self {
        self.on_update = OnUpdate::CurrentTimestamp;
        self
    }

    /// Parses the raw type string.
    #[must_use]
    pub fn parsed_type(&self) -> ParsedType {
        ParsedType::parse(&self.field_type)
    }

    /// Returns the canonical type of the column.
    #[must_use]
    pub fn canonical_type(&self) -> CanonicalType {
        canonicalize(&self.parsed_type().base_type)
    }
}

/// Index column ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A column reference inside an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexField {
    /// Column name.
    pub name: String,
    /// Ordering.
    #[serde(default)]
    pub direction: SortDirection,
}

impl IndexField {
    /// An ascending index column.
    #[must_use]
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: SortDirection::Asc,
        }
    }

    /// A descending index column.
    #[must_use]
    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// An index or primary key.
///
/// At most one primary key per table is meaningful; the synthesizer renders
/// whatever it is given and leaves enforcement to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDefinition {
    /// Caller-side identifier.
    #[serde(default)]
    pub id: String,
    /// Index name (unused for primary keys).
    #[serde(default)]
    pub name: String,
    /// Indexed columns, in order.
    pub fields: Vec<IndexField>,
    /// Whether the index is unique.
    #[serde(default)]
    pub unique: bool,
    /// Whether this is the primary key.
    #[serde(default)]
    pub is_primary: bool,
}

impl IndexDefinition {
    /// Creates a non-unique index.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<IndexField>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            fields,
            unique: false,
            is_primary: false,
        }
    }

    /// Creates a primary key.
    #[must_use]
    pub fn primary(fields: Vec<IndexField>) -> Self {
        Self {
            id: String::from("primary"),
            name: String::from("PRIMARY"),
            fields,
            unique: true,
            is_primary: true,
        }
    }

    /// Makes the index unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A complete table description, including grant targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    /// Table name, possibly `schema.table` qualified.
    pub name: String,
    /// Table comment.
    #[serde(default)]
    pub comment: String,
    /// Columns.
    #[serde(default)]
    pub fields: Vec<NormalizedField>,
    /// Indexes and primary key.
    #[serde(default)]
    pub indexes: Vec<IndexDefinition>,
    /// Principals granted SELECT.
    #[serde(default)]
    pub principals: Vec<String>,
}

impl TableDefinition {
    /// Creates an empty definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the table comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Adds a column.
    #[must_use]
    pub fn field(mut self, field: NormalizedField) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an index.
    #[must_use]
    pub fn index(mut self, index: IndexDefinition) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds a grant target.
    #[must_use]
    pub fn principal(mut self, principal: impl Into<String>) -> Self {
        self.principals.push(principal.into());
        self
    }

    /// Parses a definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Serialization`](crate::DdlError::Serialization)
    /// if the document does not describe a table.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON definition from a reader.
    ///
    /// # Errors
    ///
    /// Returns an IO or serialization error.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Serializes the definition as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
