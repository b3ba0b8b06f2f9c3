//! Tag catalog: scalar and table tag descriptions.

use serde::{Deserialize, Serialize};

/// Value kind of a scalar field or a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Free-form text
    String,
    /// Numeric value
    Number,
    /// Date value
    Date,
    /// Time value
    Time,
    /// Integer value
    Integer,
    /// Checkbox / selection mark
    SelectionMark,
    /// Signature field
    Signature,
}

/// How a table's row axis is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableKind {
    /// Rows enumerated up front by the schema's own fields
    FixedSchema,
    /// Rows added dynamically, addressed by numeric index
    DynamicRows,
}

/// Which axis the table's own fields run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Own fields are rows; definition fields are columns
    Vertical,
    /// Own fields are columns; definition fields are rows
    Horizontal,
}

/// One addressable field on a table axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Key the field is addressed by in label paths
    #[serde(rename = "fieldKey")]
    pub key: String,
    /// Value kind, when the schema declares one
    #[serde(
        rename = "fieldType",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub kind: Option<FieldKind>,
}

impl FieldDef {
    /// Create a field definition with no declared value kind.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: None,
        }
    }
}

/// A scalar (single-value) tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarTag {
    /// Tag name, unique within the catalog
    pub name: String,
    /// Value kind of the field
    #[serde(rename = "fieldKind")]
    pub kind: FieldKind,
}

/// A two-axis table tag.
///
/// Label paths address a cell with exactly three segments:
/// the table name plus one key per axis. [`Orientation`] decides which
/// segment is the row and which is the column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableTag {
    /// Tag name, unique within the catalog
    pub name: String,
    /// Row axis style
    pub kind: TableKind,
    /// Axis the own fields run along
    pub orientation: Orientation,
    /// Fields defined directly on the table (second path segment)
    #[serde(rename = "ownFields", default)]
    pub own_fields: Vec<FieldDef>,
    /// Fields from the table's shared definition (third path segment)
    #[serde(rename = "definitionFields", default)]
    pub definition_fields: Vec<FieldDef>,
}

impl TableTag {
    /// Look up a key among the table's own fields.
    pub fn own_field(&self, key: &str) -> Option<&FieldDef> {
        self.own_fields.iter().find(|f| f.key == key)
    }

    /// Look up a key among the table's definition fields.
    pub fn definition_field(&self, key: &str) -> Option<&FieldDef> {
        self.definition_fields.iter().find(|f| f.key == key)
    }
}

/// One entry of the tag catalog.
///
/// Closed sum: a tag is either a scalar field or a two-axis table, nothing
/// else; matches on it are exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    /// Two-axis table tag
    Table(TableTag),
    /// Scalar tag
    Scalar(ScalarTag),
}

impl Tag {
    /// The tag's name.
    pub fn name(&self) -> &str {
        match self {
            Tag::Table(t) => &t.name,
            Tag::Scalar(s) => &s.name,
        }
    }

    /// The table description, if this is a table tag.
    pub fn as_table(&self) -> Option<&TableTag> {
        match self {
            Tag::Table(t) => Some(t),
            Tag::Scalar(_) => None,
        }
    }

    /// Whether this tag labels checkbox-style selection marks.
    pub fn is_selection_mark(&self) -> bool {
        match self {
            Tag::Scalar(s) => s.kind == FieldKind::SelectionMark,
            Tag::Table(_) => false,
        }
    }
}

/// The set of tags a document's labels are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    /// Create a catalog from a list of tags.
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// Find a tag by name.
    pub fn find(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name() == name)
    }

    /// All tags in catalog order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}
