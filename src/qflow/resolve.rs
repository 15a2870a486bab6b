//! Node-Marker Resolver
//!
//! Pure mapping from a visual node's structural identity to the node marker
//! expected in the script text, and from node type to a workflow step number.
//! Both tables are static data declared in source, checked top to bottom with
//! first match winning - the rules are data, not code.
//!
//! The two resolutions are independent and may disagree: `pythonNode`
//! resolves a marker (from its label) but no step, and a future type could
//! map to a step without a marker. Callers must tolerate either side being
//! `None` without the other.

use serde::{Deserialize, Serialize};

/// The tuple a visual node is identified by when looking up its section.
///
/// Supplied by the editor; used only as a lookup key, carries no behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeIdentity {
    pub node_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl NodeIdentity {
    pub fn new(node_type: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            category: None,
            label: None,
        }
    }

    pub fn with_category(node_type: &str, category: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            category: Some(category.to_string()),
            label: None,
        }
    }

    pub fn with_label(node_type: &str, label: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            category: None,
            label: Some(label.to_string()),
        }
    }
}

/// The resolved marker and step for a node identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerBinding {
    pub node_marker: String,
    pub step: Option<u32>,
}

/// Refinement applied after the node type matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Refine {
    Any,
    Category(&'static str),
}

/// Where the marker string comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Fixed(&'static str),
    /// The identity's own label is the marker; no label, no marker.
    FromLabel,
}

struct MarkerRule {
    node_type: &'static str,
    refine: Refine,
    marker: Marker,
}

/// Marker rules, tried in declaration order; first match wins.
///
/// Ambiguous types are refined: `runtimeNode` splits into Estimator and
/// Sampler primitives by category, `pythonNode` snippets share one type and
/// are disambiguated by label.
const MARKER_RULES: &[MarkerRule] = &[
    MarkerRule {
        node_type: "graphNode",
        refine: Refine::Any,
        marker: Marker::Fixed("Graph to Hamiltonian"),
    },
    MarkerRule {
        node_type: "hamiltonianNode",
        refine: Refine::Any,
        marker: Marker::Fixed("Hamiltonian"),
    },
    MarkerRule {
        node_type: "observableNode",
        refine: Refine::Any,
        marker: Marker::Fixed("Observables"),
    },
    MarkerRule {
        node_type: "circuitNode",
        refine: Refine::Category("QAOA"),
        marker: Marker::Fixed("QAOA Circuit"),
    },
    MarkerRule {
        node_type: "circuitNode",
        refine: Refine::Any,
        marker: Marker::Fixed("Circuit"),
    },
    MarkerRule {
        node_type: "transpilerNode",
        refine: Refine::Any,
        marker: Marker::Fixed("Transpiler"),
    },
    MarkerRule {
        node_type: "runtimeNode",
        refine: Refine::Category("Estimator"),
        marker: Marker::Fixed("Estimator"),
    },
    MarkerRule {
        node_type: "runtimeNode",
        refine: Refine::Category("Sampler"),
        marker: Marker::Fixed("Sampler"),
    },
    MarkerRule {
        node_type: "runtimeNode",
        refine: Refine::Any,
        marker: Marker::Fixed("Estimator"),
    },
    MarkerRule {
        node_type: "jobNode",
        refine: Refine::Any,
        marker: Marker::Fixed("Execute Job"),
    },
    MarkerRule {
        node_type: "visualizationNode",
        refine: Refine::Any,
        marker: Marker::Fixed("RAW"),
    },
    MarkerRule {
        node_type: "pythonNode",
        refine: Refine::Any,
        marker: Marker::FromLabel,
    },
];

/// Node type to workflow step: 1 problem mapping, 2 optimization and
/// transpilation, 3 execution, 4 post-processing and visualization.
const STEP_RULES: &[(&str, u32)] = &[
    ("graphNode", 1),
    ("hamiltonianNode", 1),
    ("observableNode", 1),
    ("circuitNode", 1),
    ("transpilerNode", 2),
    ("runtimeNode", 3),
    ("jobNode", 3),
    ("visualizationNode", 4),
];

fn rule_matches(rule: &MarkerRule, identity: &NodeIdentity) -> bool {
    if rule.node_type != identity.node_type {
        return false;
    }
    match rule.refine {
        Refine::Any => true,
        Refine::Category(category) => identity.category.as_deref() == Some(category),
    }
}

/// Resolve the node marker expected in the text for an identity.
///
/// Unrecognized types resolve to `None`; so does a label-keyed type without
/// a label.
pub fn resolve_marker(identity: &NodeIdentity) -> Option<String> {
    let rule = MARKER_RULES.iter().find(|rule| rule_matches(rule, identity))?;
    match rule.marker {
        Marker::Fixed(marker) => Some(marker.to_string()),
        Marker::FromLabel => identity.label.clone(),
    }
}

/// Resolve the workflow step for an identity, by node type alone.
pub fn resolve_step(identity: &NodeIdentity) -> Option<u32> {
    STEP_RULES
        .iter()
        .find(|(node_type, _)| *node_type == identity.node_type)
        .map(|(_, step)| *step)
}

/// Resolve both sides at once. `None` when no marker resolves; the step side
/// stays optional inside the binding.
pub fn resolve_binding(identity: &NodeIdentity) -> Option<MarkerBinding> {
    Some(MarkerBinding {
        node_marker: resolve_marker(identity)?,
        step: resolve_step(identity),
    })
}
