//! NavGate - Route Table
//!
//! Declarative mapping from path pattern to view and, for protected
//! paths, to a gate configuration. Plain data on purpose: matching is
//! ordered first-match over normalized segments, independent of any
//! particular navigation framework, so the gate stays testable on its
//! own. First matching pattern wins; the `*` catch-all matches any path
//! not otherwise matched.

use serde::{Deserialize, Serialize};

use crate::gate::{GateConfig, Role, RouteName};

/// One entry in the route table. Children match relative to the parent
/// pattern and inherit the parent's gate unless they carry their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub pattern: String,
    pub view: String,
    pub name: Option<RouteName>,
    pub gate: Option<GateConfig>,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn view(pattern: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            view: view.into(),
            name: None,
            gate: None,
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: RouteName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn gated(mut self, gate: GateConfig) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_children(mut self, children: Vec<RouteEntry>) -> Self {
        self.children = children;
        self
    }

    fn is_catch_all(&self) -> bool {
        self.pattern == "*"
    }

    fn segments(&self) -> Vec<&str> {
        split_path(&self.pattern)
    }
}

/// A successful lookup: the view to render and the gate to run first,
/// if the matched entry (or an ancestor) carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub view: &'a str,
    pub name: Option<RouteName>,
    pub gate: Option<&'a GateConfig>,
}

/// Ordered set of route entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteTable {
    pub entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// Resolve a path to a view. Returns `None` only for tables without
    /// a catch-all entry.
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_>> {
        let target = split_path(path);
        Self::resolve_in(&self.entries, &target, None)
    }

    fn resolve_in<'a>(
        entries: &'a [RouteEntry],
        target: &[&str],
        inherited_gate: Option<&'a GateConfig>,
    ) -> Option<Resolved<'a>> {
        for entry in entries {
            if entry.is_catch_all() {
                return Some(Resolved {
                    view: &entry.view,
                    name: entry.name,
                    gate: entry.gate.as_ref().or(inherited_gate),
                });
            }

            let own = entry.segments();
            let gate = entry.gate.as_ref().or(inherited_gate);

            if entry.children.is_empty() {
                if own == target {
                    return Some(Resolved {
                        view: &entry.view,
                        name: entry.name,
                        gate,
                    });
                }
                continue;
            }

            // Entry with children: its own segments must be a prefix of
            // the target, the remainder is matched against the children.
            if target.len() >= own.len() && target[..own.len()] == own[..] {
                if let Some(found) = Self::resolve_in(&entry.children, &target[own.len()..], gate)
                {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Find the entry carrying a given route name, for redirect targets.
    pub fn by_name(&self, name: RouteName) -> Option<&RouteEntry> {
        Self::by_name_in(&self.entries, name)
    }

    fn by_name_in(entries: &[RouteEntry], name: RouteName) -> Option<&RouteEntry> {
        for entry in entries {
            if entry.name == Some(name) {
                return Some(entry);
            }
            if let Some(found) = Self::by_name_in(&entry.children, name) {
                return Some(found);
            }
        }
        None
    }

    /// The route set of the demo application: public home and login, an
    /// authenticated dashboard, a privileged admin area with nested
    /// views, and an ungated catch-all.
    pub fn demo_app() -> Self {
        Self::new(vec![
            RouteEntry::view("/", "home"),
            RouteEntry::view("/login", "login").named(RouteName::Login),
            RouteEntry::view("/dashboard", "dashboard").gated(GateConfig::authenticated()),
            RouteEntry::view("/admin", "admin")
                .gated(GateConfig::privileged(Role::Admin))
                .with_children(vec![
                    RouteEntry::view("", "admin_grid"),
                    RouteEntry::view("presets", "admin_presets"),
                    RouteEntry::view("sessions", "admin_sessions"),
                ]),
            RouteEntry::view("*", "not_found").named(RouteName::NotFound),
        ])
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
