use crate::geometry::Width;
use crate::measure::Measure;
use std::fmt;
use std::ops::Add;

/// A document: a tree describing text together with its line break options.
///
/// Build documents with the constructors in
/// [`doc_constructors`](crate::doc_constructors), compose them with `+`, and
/// render them with [`print`](crate::print) or
/// [`print_to_string`](crate::print_to_string).
///
/// Every composite node caches the measures the layout engine needs, computed
/// once at construction from its children's cached measures. This is what
/// makes concatenation and group fit checks O(1). `Doc` is opaque so those
/// caches cannot be invalidated after the fact.
#[derive(Debug, Clone)]
pub struct Doc {
    pub(crate) node: DocNode,
}

/// How a group decides whether its break hints become line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// If the group's flat width fits on the current line, take no break
    /// hints; otherwise take all of them.
    Auto,
    /// At each break hint, break iff the hint plus the *flat* width of the
    /// next node would overflow the line.
    FitGroups,
    /// At each break hint, break iff the hint plus the *breaking* width of
    /// the next node would overflow the line.
    FitAll,
}

#[derive(Debug, Clone)]
pub(crate) enum DocNode {
    /// No output, zero width.
    Empty,
    /// No output, but forces the enclosing group into breaking mode.
    GroupBreaker,
    /// Literal text. Must not contain a newline; `width` is its column count.
    Text { value: String, width: Width },
    /// `count` spaces.
    Blank { count: Width },
    /// A candidate break location. If the enclosing group does not break
    /// here, `fallback` is rendered instead.
    BreakHint { fallback: Box<Doc>, flat: Measure },
    /// An unconditional newline. A phantom hardline still emits a newline but
    /// measures as zero width instead of terminating its line's measure.
    Hardline { phantom: bool },
    /// Renders `flat` or `breaking` depending on whether the enclosing group
    /// has broken.
    IfBroken {
        flat: Box<Doc>,
        breaking: Box<Doc>,
        flat_measure: Measure,
        breaking_measure: Measure,
    },
    /// Increase pending indentation by `count` columns for line breaks taken
    /// while rendering `doc`.
    Indent {
        count: Width,
        doc: Box<Doc>,
        has_group_breaker: bool,
        flat_measure: Measure,
        breaking_measure: Measure,
    },
    /// A layout scope with its own break mode.
    Group {
        kind: GroupKind,
        doc: Box<Doc>,
        flat_measure: Measure,
        breaking_measure: Measure,
    },
    /// Sequential composition.
    Concat {
        left: Box<Doc>,
        right: Box<Doc>,
        has_group_breaker: bool,
        flat_measure: Measure,
        breaking_measure: Measure,
    },
}

impl Doc {
    /// The width this document takes up when its enclosing group renders
    /// flat (no break hints taken).
    pub fn flat_measure(&self) -> Measure {
        match &self.node {
            DocNode::Empty | DocNode::GroupBreaker => Measure::WithoutBreak(0),
            DocNode::Text { width, .. } => Measure::WithoutBreak(*width),
            DocNode::Blank { count } => Measure::WithoutBreak(*count),
            DocNode::BreakHint { flat, .. } => *flat,
            DocNode::Hardline { phantom: false } => Measure::WithBreak(0),
            DocNode::Hardline { phantom: true } => Measure::WithoutBreak(0),
            DocNode::IfBroken { flat_measure, .. }
            | DocNode::Indent { flat_measure, .. }
            | DocNode::Group { flat_measure, .. }
            | DocNode::Concat { flat_measure, .. } => *flat_measure,
        }
    }

    /// The width this document takes up when rendered with its break hints
    /// taken.
    pub fn breaking_measure(&self) -> Measure {
        match &self.node {
            DocNode::Empty | DocNode::GroupBreaker => Measure::WithoutBreak(0),
            DocNode::Text { width, .. } => Measure::WithoutBreak(*width),
            DocNode::Blank { count } => Measure::WithoutBreak(*count),
            DocNode::BreakHint { .. } => Measure::WithBreak(0),
            DocNode::Hardline { phantom: false } => Measure::WithBreak(0),
            DocNode::Hardline { phantom: true } => Measure::WithoutBreak(0),
            DocNode::IfBroken {
                breaking_measure, ..
            }
            | DocNode::Indent {
                breaking_measure, ..
            }
            | DocNode::Group {
                breaking_measure, ..
            }
            | DocNode::Concat {
                breaking_measure, ..
            } => *breaking_measure,
        }
    }

    /// Whether this subtree contains a group breaker not enclosed by a
    /// nested group. Only `Concat` and `Indent` propagate the flag upward; a
    /// `Group` absorbs breakers within itself.
    pub fn has_group_breaker(&self) -> bool {
        match &self.node {
            DocNode::GroupBreaker => true,
            DocNode::Indent {
                has_group_breaker, ..
            }
            | DocNode::Concat {
                has_group_breaker, ..
            } => *has_group_breaker,
            _ => false,
        }
    }
}

impl Add<Doc> for Doc {
    type Output = Doc;

    /// Shorthand for [`concat`](crate::doc_constructors::concat).
    fn add(self, other: Doc) -> Doc {
        crate::doc_constructors::concat(self, other)
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DocNode::*;

        match &self.node {
            Empty => write!(f, "ε"),
            GroupBreaker => write!(f, "!"),
            Text { value, .. } => write!(f, "'{}'", value),
            Blank { count } => write!(f, "␣{}", count),
            BreakHint { fallback, .. } => write!(f, "({})?", fallback),
            Hardline { phantom: false } => write!(f, "↵"),
            Hardline { phantom: true } => write!(f, "~↵"),
            IfBroken { flat, breaking, .. } => write!(f, "({} ? {})", breaking, flat),
            Indent { count, doc, .. } => write!(f, "{}⇒({})", count, doc),
            Group { kind, doc, .. } => {
                let name = match kind {
                    GroupKind::Auto => "group",
                    GroupKind::FitGroups => "fit_groups",
                    GroupKind::FitAll => "fit_all",
                };
                write!(f, "{}({})", name, doc)
            }
            Concat { left, right, .. } => write!(f, "{} + {}", left, right),
        }
    }
}
