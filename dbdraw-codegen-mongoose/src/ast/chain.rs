//! Fluent call chains such as `router.route("/").get(...).post(...)`.

use dbdraw_codegen::builder::{CodeFragment, Renderable};

/// A call followed by chained method calls, one per line.
///
/// ```text
/// router.route("/:id")
///   .get(getUser)
///   .delete(protect, deleteUser);
/// ```
#[derive(Debug, Clone)]
pub struct MethodChain {
    head: String,
    head_args: Vec<String>,
    calls: Vec<(String, Vec<String>)>,
}

impl MethodChain {
    pub fn new(head: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            head_args: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Argument of the leading call.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.head_args.push(arg.into());
        self
    }

    pub fn call<I, S>(mut self, method: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.calls
            .push((method.into(), args.into_iter().map(Into::into).collect()));
        self
    }
}

impl Renderable for MethodChain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let head = format!("{}({})", self.head, self.head_args.join(", "));
        let Some(last) = self.calls.len().checked_sub(1) else {
            return vec![CodeFragment::line(format!("{head};"))];
        };

        let calls = self
            .calls
            .iter()
            .enumerate()
            .map(|(i, (method, args))| {
                let end = if i == last { ";" } else { "" };
                CodeFragment::line(format!(".{method}({}){end}", args.join(", ")))
            })
            .collect();
        vec![CodeFragment::line(head), CodeFragment::indent(calls)]
    }
}

#[cfg(test)]
mod tests {
    use dbdraw_codegen::builder::CodeBuilder;

    use super::*;

    fn render(chain: &MethodChain) -> String {
        CodeBuilder::js().node(chain).build()
    }

    #[test]
    fn test_route_chain() {
        let chain = MethodChain::new("router.route")
            .arg("\"/\"")
            .call("get", ["getAllUsers"])
            .call("post", ["protect", "createUser"]);
        assert_eq!(
            render(&chain),
            "router.route(\"/\")\n  .get(getAllUsers)\n  .post(protect, createUser);\n"
        );
    }

    #[test]
    fn test_chain_without_calls() {
        assert_eq!(render(&MethodChain::new("connectDB")), "connectDB();\n");
    }
}
