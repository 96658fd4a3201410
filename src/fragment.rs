//! Structured fragment definitions. Renderers don't concatenate template
//! source by hand; they assemble a [`Fragment`] — a tree of [`Node`]s — and
//! [`Fragment::source`] emits the template text that the rendering service
//! parses exactly once per render. This keeps the shape of a fragment
//! (which parts are literal, which are interpolated, where the branches and
//! loops sit) visible to the compiler instead of buried in string pasting.

/// A single node of a fragment definition.
#[derive(Clone, Debug)]
pub enum Node {
    /// Literal text, emitted verbatim.
    Text(String),

    /// An interpolated expression, e.g. `.post.title` or a helper pipeline
    /// such as `short_date .post.date`. The expression's value is inserted
    /// as-is; callers that need HTML escaping wrap the expression in the
    /// `escape` helper.
    Interp(String),

    /// A conditional. `then` renders when `expr` is truthy, `otherwise` (which
    /// may be empty) when it is not.
    Cond {
        expr: String,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },

    /// A loop over `expr`; within `body` the dot is bound to the current
    /// element.
    Each { expr: String, body: Vec<Node> },
}

impl Node {
    /// Literal text node.
    pub fn text(text: &str) -> Node {
        Node::Text(text.to_owned())
    }

    /// Interpolation node.
    pub fn interp(expr: &str) -> Node {
        Node::Interp(expr.to_owned())
    }

    /// Conditional node without an else branch.
    pub fn cond(expr: &str, then: Vec<Node>) -> Node {
        Node::Cond {
            expr: expr.to_owned(),
            then,
            otherwise: Vec::new(),
        }
    }

    /// Conditional node with an else branch.
    pub fn cond_else(expr: &str, then: Vec<Node>, otherwise: Vec<Node>) -> Node {
        Node::Cond {
            expr: expr.to_owned(),
            then,
            otherwise,
        }
    }

    /// Loop node.
    pub fn each(expr: &str, body: Vec<Node>) -> Node {
        Node::Each {
            expr: expr.to_owned(),
            body,
        }
    }

    fn emit(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Interp(expr) => {
                out.push_str("{{");
                out.push_str(expr);
                out.push_str("}}");
            }
            Node::Cond {
                expr,
                then,
                otherwise,
            } => {
                out.push_str("{{if ");
                out.push_str(expr);
                out.push_str("}}");
                emit_all(then, out);
                if !otherwise.is_empty() {
                    out.push_str("{{else}}");
                    emit_all(otherwise, out);
                }
                out.push_str("{{end}}");
            }
            Node::Each { expr, body } => {
                out.push_str("{{range ");
                out.push_str(expr);
                out.push_str("}}");
                emit_all(body, out);
                out.push_str("{{end}}");
            }
        }
    }
}

fn emit_all(nodes: &[Node], out: &mut String) {
    for node in nodes {
        node.emit(out);
    }
}

/// A complete fragment definition: an ordered sequence of [`Node`]s.
#[derive(Clone, Debug)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new(nodes: Vec<Node>) -> Fragment {
        Fragment { nodes }
    }

    /// Emits the template source for this fragment.
    pub fn source(&self) -> String {
        let mut out = String::new();
        emit_all(&self.nodes, &mut out);
        out
    }
}
