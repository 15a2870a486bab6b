//! # qflow
//!
//! A segmentation and synchronization engine for marked quantum workflow scripts.
//!
//! A workflow script is one generated Python source text carrying textual markers:
//! step marker lines (`## STEP <n> : <title>`), node marker lines (`###[<Name>]`)
//! and editable-region pairs (`#### INPUT PYTHON` .. `#### END INPUT PYTHON`).
//! The engine slices such a document into per-node sections, locates and replaces
//! the user-editable region inside a section, maps a visual node identity back to
//! its section for highlighting, and imports a whole marked document into
//! node descriptors for bootstrapping a graph.
//!
//! Every operation is a pure function of the text passed in: the engine retains
//! no state between calls and never raises on missing structure. Absence of
//! markers degrades to "nothing found" (`None`, empty lists, unchanged strings).

pub mod qflow;
