//! Layout tree types shared by components, the grid and the renderer

use serde::Serialize;

/// Input field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
}

/// Button size variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

/// Button color variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

/// A node in a rendered layout tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Row {
        children: Vec<Node>,
    },
    Col {
        /// Span out of 12 at the large breakpoint, `None` for an auto column
        lg: Option<u8>,
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        text: String,
        class: Option<String>,
    },
    Label {
        html_for: String,
        text: String,
    },
    Input {
        kind: InputKind,
        id: String,
        class: String,
        placeholder: String,
    },
    Button {
        text: String,
        size: ButtonSize,
        color: ButtonColor,
    },
}

impl Node {
    pub fn row(children: Vec<Node>) -> Self {
        Node::Row { children }
    }

    pub fn col(children: Vec<Node>) -> Self {
        Node::Col { lg: None, children }
    }

    pub fn col_lg(lg: u8, children: Vec<Node>) -> Self {
        Node::Col { lg: Some(lg), children }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Row { children } | Node::Col { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first, pre-order visit of this node and all descendants
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    fn collect(&self, pred: impl Fn(&Node) -> bool) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |n| {
            if pred(n) {
                found.push(n);
            }
        });
        found
    }

    pub fn inputs(&self) -> Vec<&Node> {
        self.collect(|n| matches!(n, Node::Input { .. }))
    }

    pub fn buttons(&self) -> Vec<&Node> {
        self.collect(|n| matches!(n, Node::Button { .. }))
    }

    pub fn labels(&self) -> Vec<&Node> {
        self.collect(|n| matches!(n, Node::Label { .. }))
    }

    /// Total number of nodes below this one
    pub fn count_descendants(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::row(vec![
            Node::col(vec![Node::Label {
                html_for: "a".into(),
                text: "A".into(),
            }]),
            Node::col_lg(6, vec![Node::Button {
                text: "Go".into(),
                size: ButtonSize::Md,
                color: ButtonColor::Primary,
            }]),
        ])
    }

    #[test]
    fn walk_is_pre_order() {
        let tree = sample();
        let mut kinds = Vec::new();
        tree.walk(&mut |n| {
            kinds.push(match n {
                Node::Row { .. } => "row",
                Node::Col { .. } => "col",
                Node::Label { .. } => "label",
                Node::Button { .. } => "button",
                _ => "other",
            })
        });
        assert_eq!(kinds, ["row", "col", "label", "col", "button"]);
    }

    #[test]
    fn leaves_have_no_children() {
        let label = Node::Label {
            html_for: "a".into(),
            text: "A".into(),
        };
        assert!(label.children().is_empty());
        assert_eq!(label.count_descendants(), 0);
        assert_eq!(sample().count_descendants(), 4);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "row");
        assert_eq!(json["children"][1]["lg"], 6);
        assert_eq!(json["children"][1]["children"][0]["color"], "primary");
    }
}
