//! Application bootstrap: mount the root component into the host document

use crate::host::Document;
use crate::types::Node;
use crate::vitals::{self, Metric, MetricName, ReportHook};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("mount container `{0}` not found in host document")]
    MissingContainer(String),
}

pub struct BootstrapOptions<'a> {
    pub container_id: &'a str,
    /// Render twice and check the two trees match
    pub strict: bool,
    pub report: Option<&'a ReportHook<'a>>,
    /// Reference point for the mount metric
    pub started: Instant,
}

impl Default for BootstrapOptions<'_> {
    fn default() -> Self {
        Self {
            container_id: crate::constants::ROOT_CONTAINER_ID,
            strict: cfg!(debug_assertions),
            report: None,
            started: Instant::now(),
        }
    }
}

/// Result of a successful mount
#[derive(Debug, Clone, PartialEq)]
pub struct Mounted {
    pub container_id: String,
    /// False when strict mode saw two renders disagree
    pub pure: bool,
    pub mount_ms: f64,
}

/// Render `component` into the container named by `options.container_id`.
///
/// A missing container is fatal and nothing is rendered. The report hook runs
/// after the mount and cannot make bootstrap fail.
pub fn bootstrap(
    document: &mut Document,
    component: impl Fn() -> Node,
    options: BootstrapOptions<'_>,
) -> Result<Mounted, BootstrapError> {
    let id = options.container_id;
    let Some(container) = document.get_element_by_id_mut(id) else {
        error!(container = id, "Mount container missing, cannot start");
        return Err(BootstrapError::MissingContainer(id.to_string()));
    };

    let tree = component();
    let mut pure = true;
    if options.strict {
        let again = component();
        if again != tree {
            pure = false;
            warn!(container = id, "Component rendered different trees on repeated calls");
        } else {
            debug!(container = id, "Strict render check passed");
        }
    }

    let nodes = tree.count_descendants() + 1;
    container.replace_children(vec![tree]);

    let metric = Metric::since(MetricName::Mount, options.started);
    debug!(container = id, nodes, mount_ms = metric.value_ms, "Application mounted");
    vitals::report(options.report, &metric);

    Ok(Mounted {
        container_id: id.to_string(),
        pure,
        mount_ms: metric.value_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::personal_details::personal_details;
    use std::cell::Cell;

    #[test]
    fn mounts_into_existing_container() {
        let mut doc = Document::with_container("root");
        let mounted = bootstrap(&mut doc, personal_details, BootstrapOptions::default()).unwrap();
        assert_eq!(mounted.container_id, "root");
        assert!(mounted.pure);
        let root = doc.get_element_by_id("root").unwrap();
        assert!(root.child_count() > 0);
        assert_eq!(root.children()[0], personal_details());
    }

    #[test]
    fn missing_container_is_fatal() {
        let mut doc = Document::with_container("app");
        let err = bootstrap(&mut doc, personal_details, BootstrapOptions::default()).unwrap_err();
        assert_eq!(err, BootstrapError::MissingContainer("root".into()));
        assert_eq!(doc.get_element_by_id("app").unwrap().child_count(), 0);
    }

    #[test]
    fn missing_container_skips_render_and_report() {
        let mut doc = Document::new();
        let rendered = Cell::new(0);
        let reported = Cell::new(0);
        let hook: &ReportHook<'_> = &|_| reported.set(reported.get() + 1);
        let result = bootstrap(
            &mut doc,
            || {
                rendered.set(rendered.get() + 1);
                personal_details()
            },
            BootstrapOptions {
                report: Some(hook),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(rendered.get(), 0);
        assert_eq!(reported.get(), 0);
    }

    #[test]
    fn panicking_report_hook_does_not_escape() {
        let mut doc = Document::with_container("root");
        let hook: &ReportHook<'_> = &|_| panic!("performance observer unsupported");
        let options = BootstrapOptions {
            report: Some(hook),
            ..Default::default()
        };
        assert!(bootstrap(&mut doc, personal_details, options).is_ok());
        assert!(doc.get_element_by_id("root").unwrap().child_count() > 0);
    }

    #[test]
    fn report_hook_receives_mount_metric() {
        let mut doc = Document::with_container("root");
        let seen = Cell::new(None);
        let hook: &ReportHook<'_> = &|m| seen.set(Some(m.name));
        let options = BootstrapOptions {
            report: Some(hook),
            ..Default::default()
        };
        bootstrap(&mut doc, personal_details, options).unwrap();
        assert_eq!(seen.get(), Some(MetricName::Mount));
    }

    #[test]
    fn strict_mode_flags_impure_component() {
        let mut doc = Document::with_container("root");
        let calls = Cell::new(0u32);
        let counter = || {
            calls.set(calls.get() + 1);
            Node::Heading {
                level: 1,
                text: calls.get().to_string(),
                class: None,
            }
        };
        let options = BootstrapOptions {
            strict: true,
            ..Default::default()
        };
        let mounted = bootstrap(&mut doc, counter, options).unwrap();
        assert!(!mounted.pure);
        assert_eq!(calls.get(), 2);
        let first = Node::Heading {
            level: 1,
            text: "1".into(),
            class: None,
        };
        assert_eq!(doc.get_element_by_id("root").unwrap().children(), &[first]);
    }

    #[test]
    fn non_strict_renders_once() {
        let mut doc = Document::with_container("root");
        let calls = Cell::new(0u32);
        let options = BootstrapOptions {
            strict: false,
            ..Default::default()
        };
        bootstrap(
            &mut doc,
            || {
                calls.set(calls.get() + 1);
                personal_details()
            },
            options,
        )
        .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn remount_replaces_previous_tree() {
        let mut doc = Document::with_container("root");
        bootstrap(&mut doc, personal_details, BootstrapOptions::default()).unwrap();
        bootstrap(&mut doc, personal_details, BootstrapOptions::default()).unwrap();
        assert_eq!(doc.get_element_by_id("root").unwrap().child_count(), 1);
    }
}
