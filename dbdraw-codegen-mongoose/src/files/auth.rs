//! src/middleware/auth generator, present with the `auth` feature.

use std::path::{Path, PathBuf};

use dbdraw_codegen::builder::CodeBuilder;
use dbdraw_core::{GeneratedFile, Language};

use crate::{
    ast::{ArrowFn, Const, Import, Param},
    code_file::CodeFile,
};

pub const UNAUTHORIZED_MESSAGE: &str = "Not authorized to access this route";

/// `protect`, the bearer-token gate placed in front of every route.
///
/// A request passes only when its token verifies against `JWT_SECRET` and
/// carries an `id` claim; anything else gets a 401.
pub struct AuthMiddleware {
    language: Language,
}

impl AuthMiddleware {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl GeneratedFile for AuthMiddleware {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src")
            .join("middleware")
            .join(format!("auth.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let typed = self.language.is_typed();
        let (verify, attach) = if typed {
            (
                "const decoded = jwt.verify(header.slice(7), process.env.JWT_SECRET as string) as jwt.JwtPayload;",
                "(req as any).user = { id: decoded.id };",
            )
        } else {
            (
                "const decoded = jwt.verify(header.slice(7), process.env.JWT_SECRET);",
                "req.user = { id: decoded.id };",
            )
        };
        let reject = "return res.status(401).json(unauthorized);";

        let body = CodeBuilder::js()
            .line("const header = req.headers.authorization;")
            .block_with_close("if (!header || !header.startsWith(\"Bearer \")) {", "}", |b| {
                b.line(reject)
            })
            .blank()
            .line("try {")
            .indent()
            .line(verify)
            .block_with_close("if (!decoded.id) {", "}", |b| b.line(reject))
            .line(attach)
            .line("next();")
            .dedent()
            .line("} catch (error) {")
            .indent()
            .line(reject)
            .dedent()
            .line("}")
            .build();

        CodeFile::new()
            .import_if(typed, || {
                Import::new("express").named_all(["NextFunction", "Request", "Response"])
            })
            .import(Import::new("jsonwebtoken").default("jwt"))
            .add(Const::new(
                "unauthorized",
                format!("{{ success: false, error: \"{}\" }}", UNAUTHORIZED_MESSAGE),
            ))
            .add(
                ArrowFn::new("protect")
                    .doc("Requires `Authorization: Bearer <token>` with an `id` claim")
                    .param(Param::new("req").ty_if(typed, "Request"))
                    .param(Param::new("res").ty_if(typed, "Response"))
                    .param(Param::new("next").ty_if(typed, "NextFunction"))
                    .body(&body),
            )
            .render()
    }
}
