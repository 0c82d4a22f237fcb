//! Logger handles and record emission.

use dd_logging_types::LogLevel;
use parking_lot::Mutex;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use crate::format::Record;
use crate::registry::Registry;
use crate::sink::{Sink, SinkKind};

/// Display name of the hierarchy root.
pub const ROOT_NAME: &str = "root";

/// Threshold the root starts with.
pub const ROOT_LEVEL: LogLevel = LogLevel::Warning;

/// One node of the hierarchy.
pub(crate) struct Node {
    name: String,
    parent: Option<Arc<Node>>,
    state: Mutex<NodeState>,
}

struct NodeState {
    level: Option<LogLevel>,
    sinks: Vec<Arc<Sink>>,
    propagate: bool,
}

impl NodeState {
    fn pristine(level: Option<LogLevel>) -> Self {
        Self {
            level,
            sinks: Vec::new(),
            propagate: true,
        }
    }
}

impl Node {
    pub(crate) fn root() -> Arc<Self> {
        Arc::new(Self {
            name: String::new(),
            parent: None,
            state: Mutex::new(NodeState::pristine(Some(ROOT_LEVEL))),
        })
    }

    pub(crate) fn child_of(parent: Arc<Node>, name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            parent: Some(parent),
            state: Mutex::new(NodeState::pristine(None)),
        })
    }

    fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn reset(&self) {
        let level = if self.is_root() { Some(ROOT_LEVEL) } else { None };
        *self.state.lock() = NodeState::pristine(level);
    }
}

/// Handle to a named node in a [`Registry`].
///
/// Handles are cheap to clone; every handle for a given name refers to
/// the same node, so configuration made through one is seen by all.
#[derive(Clone)]
pub struct Logger {
    registry: Registry,
    node: Arc<Node>,
}

impl Logger {
    pub(crate) fn new(registry: Registry, node: Arc<Node>) -> Self {
        Self { registry, node }
    }

    /// Dotted name, or `root` for the hierarchy root.
    pub fn name(&self) -> &str {
        if self.node.is_root() {
            ROOT_NAME
        } else {
            &self.node.name
        }
    }

    /// Whether both handles refer to the same node.
    pub fn same_node(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<Logger> {
        self.node
            .parent
            .as_ref()
            .map(|parent| Logger::new(self.registry.clone(), parent.clone()))
    }

    /// The logger named `<self>.<suffix>`.
    pub fn child(&self, suffix: &str) -> Logger {
        if self.node.is_root() {
            self.registry.logger(suffix)
        } else {
            self.registry.logger(&format!("{}.{}", self.node.name, suffix))
        }
    }

    /// This node's own threshold, if set.
    pub fn level(&self) -> Option<LogLevel> {
        self.node.state.lock().level
    }

    /// Set this node's own threshold.
    pub fn set_level(&self, level: LogLevel) {
        self.node.state.lock().level = Some(level);
    }

    /// The threshold of the nearest node (self first) that has one.
    pub fn effective_level(&self) -> LogLevel {
        let mut current = Some(&self.node);
        while let Some(node) = current {
            if let Some(level) = node.state.lock().level {
                return level;
            }
            current = node.parent.as_ref();
        }
        ROOT_LEVEL
    }

    /// Whether a record at `level` would get past this logger.
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.effective_level()
    }

    /// Whether records continue to the parent after this node's sinks.
    pub fn propagate(&self) -> bool {
        self.node.state.lock().propagate
    }

    /// Turn propagation to the parent on or off.
    pub fn set_propagate(&self, propagate: bool) {
        self.node.state.lock().propagate = propagate;
    }

    /// Attach a sink.
    pub fn add_sink(&self, sink: Sink) {
        self.node.state.lock().sinks.push(Arc::new(sink));
    }

    /// Detach every sink of `kind`, returning how many were removed.
    pub fn remove_sinks(&self, kind: SinkKind) -> usize {
        let mut state = self.node.state.lock();
        let before = state.sinks.len();
        state.sinks.retain(|sink| sink.kind() != kind);
        before - state.sinks.len()
    }

    /// Detach every sink.
    pub fn clear_sinks(&self) {
        self.node.state.lock().sinks.clear();
    }

    /// Kinds of the attached sinks, in attachment order.
    pub fn sink_kinds(&self) -> Vec<SinkKind> {
        self.node.state.lock().sinks.iter().map(|s| s.kind()).collect()
    }

    /// Paths of the attached file sinks.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.node
            .state
            .lock()
            .sinks
            .iter()
            .filter_map(|s| s.path().map(PathBuf::from))
            .collect()
    }

    /// Swap in a fresh file sink (and optional console sink) in one step.
    ///
    /// Capture is opened fully and propagation is cut, so the sinks'
    /// own thresholds decide what is written.
    pub(crate) fn install(&self, file: Sink, console: Option<Sink>) {
        let mut state = self.node.state.lock();
        state.level = Some(LogLevel::Debug);
        state.sinks.retain(|sink| sink.kind() != SinkKind::File);
        state.sinks.push(Arc::new(file));
        if let Some(console) = console {
            state.sinks.push(Arc::new(console));
        }
        state.propagate = false;
    }

    /// Detach every sink and stop propagation.
    pub(crate) fn silence(&self) {
        let mut state = self.node.state.lock();
        state.sinks.clear();
        state.propagate = false;
    }

    /// Emit `message` at `level`.
    ///
    /// The record goes to every sink on this node that accepts it, then
    /// up the ancestor chain until a node with propagation off. Write
    /// failures are reported through `tracing` and otherwise ignored.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.is_enabled_for(level) {
            return;
        }
        let record = Record::new(level, self.name(), message.to_string());

        let mut current = Some(&self.node);
        while let Some(node) = current {
            // snapshot so writes happen without the node lock held
            let (sinks, propagate) = {
                let state = node.state.lock();
                (state.sinks.clone(), state.propagate)
            };
            for sink in sinks.iter().filter(|s| s.accepts(level)) {
                if let Err(e) = sink.emit(&record) {
                    tracing::error!(
                        logger = %record.logger,
                        sink = ?sink.kind(),
                        error = %e,
                        "failed to write log record"
                    );
                }
            }
            if !propagate {
                break;
            }
            current = node.parent.as_ref();
        }
    }

    /// Emit at debug.
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    /// Emit at info.
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    /// Emit at warning.
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warning, message);
    }

    /// Emit at error.
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.effective_level())
            .finish()
    }
}
