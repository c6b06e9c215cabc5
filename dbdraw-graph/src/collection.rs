//! Normalized collections, the unit every emitter works on.

use std::fmt;

/// The identity field every record already has; never emitted.
pub const IDENTITY_FIELD: &str = "_id";

/// Abstract field type tag.
///
/// Parsing is case-insensitive. Tags the generator does not know are kept in
/// [`FieldKind::Other`] so emitters can fall back to a permissive type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Date,
    Ref,
    Primary,
    Other(String),
}

impl FieldKind {
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "string" => FieldKind::String,
            "number" => FieldKind::Number,
            "boolean" => FieldKind::Boolean,
            "date" => FieldKind::Date,
            "ref" => FieldKind::Ref,
            "primary" => FieldKind::Primary,
            _ => FieldKind::Other(tag.to_string()),
        }
    }

    /// Whether values of this kind are datastore object ids.
    pub fn is_object_id(&self) -> bool {
        matches!(self, FieldKind::Ref | FieldKind::Primary)
    }
}

/// A single field of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// The type tag as it appeared in the input.
    pub type_name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
    pub default: Option<serde_json::Value>,
    pub list: bool,
    /// Display name of the referenced collection, for resolved `ref` fields.
    pub reference: Option<String>,
    /// Designer-side field id, informational.
    pub id: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            name: name.into(),
            kind: FieldKind::parse(&type_name),
            type_name,
            required: false,
            unique: false,
            default: None,
            list: false,
            reference: None,
            id: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn list(mut self) -> Self {
        self.list = true;
        self
    }

    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn references(mut self, target: impl Into<String>) -> Self {
        self.reference = Some(target.into());
        self
    }

    /// True iff the type tag is `primary`.
    pub fn is_primary(&self) -> bool {
        self.kind == FieldKind::Primary
    }

    pub fn is_identity(&self) -> bool {
        self.name == IDENTITY_FIELD
    }

    /// The resolved reference target, only for `ref` fields.
    pub fn ref_target(&self) -> Option<&str> {
        match self.kind {
            FieldKind::Ref => self.reference.as_deref(),
            _ => None,
        }
    }

    /// The default value encoded as a JSON literal.
    pub fn default_literal(&self) -> Option<String> {
        self.default.as_ref().map(|value| value.to_string())
    }
}

/// A named set of fields derived from one graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// The node's display label, verbatim.
    pub name: String,
    pub fields: Vec<Field>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Fields that end up in generated code, in source order.
    pub fn emittable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_identity())
    }

    /// Whether nothing but the identity field is declared.
    pub fn has_emittable_fields(&self) -> bool {
        self.emittable_fields().next().is_some()
    }

    /// Names of emittable fields holding object ids.
    pub fn object_id_fields(&self) -> Vec<&str> {
        self.emittable_fields()
            .filter(|f| f.kind.is_object_id())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Lower-cased label used as the storage/model registration name.
    pub fn storage_name(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(FieldKind::parse("String"), FieldKind::String);
        assert_eq!(FieldKind::parse("REF"), FieldKind::Ref);
        assert_eq!(FieldKind::parse("date"), FieldKind::Date);
        assert_eq!(
            FieldKind::parse("Decimal128"),
            FieldKind::Other("Decimal128".to_string())
        );
    }

    #[test]
    fn test_field_preserves_type_tag() {
        let field = Field::new("title", "String");
        assert_eq!(field.type_name, "String");
        assert_eq!(field.kind, FieldKind::String);
    }

    #[test]
    fn test_primary_and_ref_target() {
        assert!(Field::new("_id", "primary").is_primary());
        assert_eq!(
            Field::new("author", "ref").references("User").ref_target(),
            Some("User")
        );
        // A stray reference on a non-ref field is ignored
        assert_eq!(
            Field::new("title", "string").references("User").ref_target(),
            None
        );
    }

    #[test]
    fn test_default_literal_keeps_json_type() {
        assert_eq!(
            Field::new("count", "number")
                .with_default(json!(0))
                .default_literal()
                .as_deref(),
            Some("0")
        );
        assert_eq!(
            Field::new("status", "string")
                .with_default(json!("draft"))
                .default_literal()
                .as_deref(),
            Some("\"draft\"")
        );
    }

    #[test]
    fn test_emittable_fields_skip_identity() {
        let collection = Collection::new("User")
            .field(Field::new("_id", "primary"))
            .field(Field::new("email", "string"))
            .field(Field::new("team", "ref"));

        let names: Vec<_> = collection.emittable_fields().map(|f| &f.name).collect();
        assert_eq!(names, ["email", "team"]);
        assert_eq!(collection.object_id_fields(), ["team"]);
        assert!(collection.has_emittable_fields());

        let only_id = Collection::new("Empty").field(Field::new("_id", "primary"));
        assert!(!only_id.has_emittable_fields());
    }

    #[test]
    fn test_storage_name() {
        assert_eq!(Collection::new("Blog_Post").storage_name(), "blog_post");
    }
}
