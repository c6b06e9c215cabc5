//! TypeScript document interfaces.

use dbdraw_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// One `name: type;` member. Optional members render as `name?: type;`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Member {
    name: String,
    ty: String,
    required: bool,
}

impl Member {
    fn render(&self) -> String {
        let mark = if self.required { "" } else { "?" };
        format!("{}{mark}: {};", self.name, self.ty)
    }
}

/// An exported interface, usually `I<Model> extends Document`.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    extends: Option<String>,
    members: Vec<Member>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            members: Vec::new(),
        }
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn member(mut self, name: impl Into<String>, ty: impl Into<String>, required: bool) -> Self {
        self.members.push(Member {
            name: name.into(),
            ty: ty.into(),
            required,
        });
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = match &self.extends {
            Some(parent) => format!("export interface {} extends {parent} {{", self.name),
            None => format!("export interface {} {{", self.name),
        };
        if self.members.is_empty() {
            return vec![CodeFragment::line(format!("{header}}}"))];
        }
        let body = self
            .members
            .iter()
            .map(|member| CodeFragment::line(member.render()))
            .collect();
        vec![CodeFragment::block(header, body, Some("}".to_string()))]
    }
}
