//! Field type mappers for interface declarations and Mongoose schema types.

use dbdraw_codegen::language::TypeMapper;
use dbdraw_core::{Language, to_pascal_case};
use dbdraw_graph::{Field, FieldKind};

const OBJECT_ID_TYPE: &str = "Types.ObjectId";

/// Maps fields to TypeScript interface member types.
///
/// A resolved `ref` becomes `Types.ObjectId | <Target>` so populated
/// documents type-check. References back to the owning collection use
/// `own_type`, since the bare name is taken by the model value.
#[derive(Debug, Clone, Default)]
pub struct InterfaceTypeMapper {
    own_name: String,
    own_type: String,
}

impl InterfaceTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapper for the interface of the collection named `own_name` (capitalized).
    pub fn for_collection(own_name: impl Into<String>, own_type: impl Into<String>) -> Self {
        Self {
            own_name: own_name.into(),
            own_type: own_type.into(),
        }
    }

    /// Whether `target` refers back to the owning collection.
    pub fn is_self_reference(&self, target: &str) -> bool {
        !self.own_name.is_empty() && to_pascal_case(target) == self.own_name
    }
}

impl TypeMapper for InterfaceTypeMapper {
    fn map_base(&self, field: &Field) -> String {
        match &field.kind {
            FieldKind::String => "string".to_string(),
            FieldKind::Number => "number".to_string(),
            FieldKind::Boolean => "boolean".to_string(),
            FieldKind::Date => "Date".to_string(),
            FieldKind::Ref => match field.ref_target() {
                Some(target) if self.is_self_reference(target) => {
                    format!("{} | {}", OBJECT_ID_TYPE, self.own_type)
                }
                Some(target) => format!("{} | {}", OBJECT_ID_TYPE, to_pascal_case(target)),
                None => OBJECT_ID_TYPE.to_string(),
            },
            FieldKind::Primary => OBJECT_ID_TYPE.to_string(),
            FieldKind::Other(_) => "any".to_string(),
        }
    }

    fn wrap_list(&self, base: &str) -> String {
        // `A | B[]` would only make B an array
        if base.contains(" | ") {
            format!("({base})[]")
        } else {
            format!("{base}[]")
        }
    }
}

/// Maps fields to Mongoose schema type expressions.
///
/// Reference fields use an ObjectId token whose spelling depends on what the
/// emitting file imports, see the constructors.
#[derive(Debug, Clone)]
pub struct SchemaTypeMapper {
    object_id: &'static str,
}

impl SchemaTypeMapper {
    /// Token for files that `import { Schema, Types }` (TypeScript models).
    pub const TYPES_OBJECT_ID: &'static str = "Types.ObjectId";
    /// Token for files with `Schema` in scope.
    pub const SCHEMA_OBJECT_ID: &'static str = "Schema.Types.ObjectId";
    /// Token for files with only `mongoose` in scope.
    pub const MONGOOSE_OBJECT_ID: &'static str = "mongoose.Schema.Types.ObjectId";

    pub fn new(object_id: &'static str) -> Self {
        Self { object_id }
    }

    /// Mapper for `<name>.model.<ext>` files.
    pub fn for_model(language: Language) -> Self {
        match language {
            Language::TypeScript => Self::new(Self::TYPES_OBJECT_ID),
            Language::JavaScript => Self::new(Self::SCHEMA_OBJECT_ID),
        }
    }

    /// Mapper for single-file inline schemas.
    pub fn for_inline(language: Language) -> Self {
        match language {
            Language::TypeScript => Self::new(Self::SCHEMA_OBJECT_ID),
            Language::JavaScript => Self::new(Self::MONGOOSE_OBJECT_ID),
        }
    }
}

impl TypeMapper for SchemaTypeMapper {
    fn map_base(&self, field: &Field) -> String {
        match &field.kind {
            FieldKind::String => "String".to_string(),
            FieldKind::Number => "Number".to_string(),
            FieldKind::Boolean => "Boolean".to_string(),
            FieldKind::Date => "Date".to_string(),
            FieldKind::Ref | FieldKind::Primary => self.object_id.to_string(),
            FieldKind::Other(_) => "String".to_string(),
        }
    }

    fn wrap_list(&self, base: &str) -> String {
        format!("[{base}]")
    }
}
