//! Personal details form

use crate::types::{ButtonColor, ButtonSize, InputKind, Node};

pub const FIRST_NAME_ID: &str = "firstName";
pub const LAST_NAME_ID: &str = "lastName";

fn label(html_for: &str, text: &str) -> Node {
    Node::Label {
        html_for: html_for.to_string(),
        text: text.to_string(),
    }
}

fn text_input(id: &str, placeholder: &str) -> Node {
    Node::Input {
        kind: InputKind::Text,
        id: id.to_string(),
        class: "form-control".to_string(),
        placeholder: placeholder.to_string(),
    }
}

fn action_button(text: &str) -> Node {
    Node::Button {
        text: text.to_string(),
        size: ButtonSize::Lg,
        color: ButtonColor::Success,
    }
}

/// Build the personal details layout.
///
/// Pure: every call returns a structurally equal tree. The inputs are
/// uncontrolled and the buttons carry no handlers.
pub fn personal_details() -> Node {
    Node::row(vec![Node::col_lg(
        8,
        vec![
            Node::row(vec![Node::col(vec![Node::Heading {
                level: 4,
                text: "Personal details".to_string(),
                class: Some("mb-3".to_string()),
            }])]),
            Node::row(vec![
                Node::col(vec![label(FIRST_NAME_ID, "First Name")]),
                Node::col(vec![label(LAST_NAME_ID, "Last Name")]),
            ]),
            Node::row(vec![
                Node::col(vec![text_input(FIRST_NAME_ID, "First name")]),
                Node::col(vec![text_input(LAST_NAME_ID, "Last name")]),
            ]),
            Node::col(vec![Node::col(vec![Node::row(vec![
                Node::col_lg(6, vec![action_button("Load")]),
                Node::col_lg(6, vec![action_button("Info")]),
            ])])]),
        ],
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[&Node]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|n| match n {
                Node::Input { id, .. } => Some(id.clone()),
                Node::Label { html_for, .. } => Some(html_for.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn has_two_inputs_and_two_buttons_every_call() {
        for _ in 0..3 {
            let form = personal_details();
            assert_eq!(form.inputs().len(), 2);
            assert_eq!(form.buttons().len(), 2);
        }
    }

    #[test]
    fn successive_calls_are_structurally_equal() {
        assert_eq!(personal_details(), personal_details());
    }

    #[test]
    fn input_ids_are_stable_and_distinct() {
        let form = personal_details();
        assert_eq!(ids(&form.inputs()), [FIRST_NAME_ID, LAST_NAME_ID]);
    }

    #[test]
    fn each_label_targets_the_input_below_it() {
        let form = personal_details();
        let Node::Col { children, .. } = &form.children()[0] else {
            panic!("expected outer column");
        };
        let label_row = &children[1];
        let input_row = &children[2];
        assert_eq!(label_row.children().len(), input_row.children().len());
        for (label_col, input_col) in label_row.children().iter().zip(input_row.children()) {
            let label_target = ids(&label_col.labels());
            let input_id = ids(&input_col.inputs());
            assert_eq!(label_target, input_id);
        }
    }

    #[test]
    fn buttons_are_large_success_placeholders() {
        let form = personal_details();
        let texts: Vec<_> = form
            .buttons()
            .into_iter()
            .map(|b| match b {
                Node::Button { text, size, color } => {
                    assert_eq!(*size, ButtonSize::Lg);
                    assert_eq!(*color, ButtonColor::Success);
                    text.as_str()
                }
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(texts, ["Load", "Info"]);
    }

    #[test]
    fn form_takes_eight_of_twelve_columns() {
        let form = personal_details();
        assert!(matches!(form.children()[0], Node::Col { lg: Some(8), .. }));
    }
}
