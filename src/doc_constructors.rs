//! Constructors for [`Doc`]s.
//!
//! The primitives at the top each build one node, caching its measures from
//! the measures of its children. The combinators further down are spellings
//! of common shapes (separators, brackets, comma lists) in terms of the
//! primitives.

use crate::doc::{Doc, DocNode, GroupKind};
use crate::geometry::{str_width, Width};
use crate::measure::Measure;
use itertools::Itertools;

/// A document with no output and zero width.
pub fn empty() -> Doc {
    Doc {
        node: DocNode::Empty,
    }
}

/// Literal text, measured with [`str_width`]. Must not contain a newline;
/// use [`hardline`] for line breaks.
pub fn string(s: impl Into<String>) -> Doc {
    let value = s.into();
    debug_assert!(
        !value.contains('\n'),
        "string() must not contain a newline"
    );
    let width = str_width(&value);
    Doc {
        node: DocNode::Text { value, width },
    }
}

/// Literal text with a caller-supplied column count, for text that
/// [`str_width`] would measure wrongly.
pub fn string_with_width(s: impl Into<String>, width: Width) -> Doc {
    Doc {
        node: DocNode::Text {
            value: s.into(),
            width,
        },
    }
}

/// `count` spaces.
pub fn blank(count: Width) -> Doc {
    Doc {
        node: DocNode::Blank { count },
    }
}

/// A single space.
pub fn space() -> Doc {
    blank(1)
}

/// A candidate break location. Renders as a line break if the enclosing
/// group breaks here, and as `fallback` otherwise.
pub fn break_hint(fallback: Doc) -> Doc {
    Doc {
        node: DocNode::BreakHint {
            flat: fallback.flat_measure(),
            fallback: Box::new(fallback),
        },
    }
}

/// A candidate break location that renders as nothing when not taken.
pub fn break_() -> Doc {
    break_hint(empty())
}

/// A candidate break location that renders as a single space when not taken.
pub fn breakable_space() -> Doc {
    break_hint(space())
}

/// An unconditional newline.
pub fn hardline() -> Doc {
    Doc {
        node: DocNode::Hardline { phantom: false },
    }
}

/// An unconditional newline that measures as zero width.
///
/// A regular [`hardline`] terminates its subdocument's measure, so a group
/// containing one measures only the content leading up to it. A phantom
/// hardline is invisible to measurement while still emitting a newline.
pub fn phantom_hardline() -> Doc {
    Doc {
        node: DocNode::Hardline { phantom: true },
    }
}

/// Forces the enclosing group into breaking mode. Produces no output itself.
pub fn group_breaker() -> Doc {
    Doc {
        node: DocNode::GroupBreaker,
    }
}

/// Renders `breaking` if the enclosing group has broken at this point, and
/// `flat` otherwise.
pub fn if_broken(breaking: Doc, flat: Doc) -> Doc {
    Doc {
        node: DocNode::IfBroken {
            flat_measure: flat.flat_measure(),
            breaking_measure: breaking.breaking_measure(),
            flat: Box::new(flat),
            breaking: Box::new(breaking),
        },
    }
}

/// Increase indentation by `count` columns for line breaks taken inside
/// `doc`. The indentation only materialises if a break is actually taken
/// while still inside `doc`.
pub fn indent(count: Width, doc: Doc) -> Doc {
    Doc {
        node: DocNode::Indent {
            count,
            has_group_breaker: doc.has_group_breaker(),
            flat_measure: doc.flat_measure(),
            breaking_measure: doc.breaking_measure(),
            doc: Box::new(doc),
        },
    }
}

/// [`indent`] by the conventional two columns.
pub fn indent_default(doc: Doc) -> Doc {
    indent(2, doc)
}

/// A layout scope: break hints inside `doc` (and outside any nested group)
/// are decided together, per `kind`.
///
/// If `print_width` is supplied it overrides the group's natural
/// measurement: both cached measures become `WithoutBreak(print_width)`.
/// This matters when `doc` contains hardlines, since a group is otherwise
/// only as wide as the content leading up to its first hardline.
pub fn group_full(print_width: Option<Width>, kind: GroupKind, doc: Doc) -> Doc {
    let (flat_measure, breaking_measure) = match print_width {
        Some(width) => (Measure::WithoutBreak(width), Measure::WithoutBreak(width)),
        None => (doc.flat_measure(), doc.breaking_measure()),
    };
    Doc {
        node: DocNode::Group {
            kind,
            doc: Box::new(doc),
            flat_measure,
            breaking_measure,
        },
    }
}

/// An [`Auto`](GroupKind::Auto) group with its natural measurement.
pub fn group(doc: Doc) -> Doc {
    group_full(None, GroupKind::Auto, doc)
}

/// A group of the given kind with its natural measurement.
pub fn group_kind(kind: GroupKind, doc: Doc) -> Doc {
    group_full(None, kind, doc)
}

/// An [`Auto`](GroupKind::Auto) group measured as `print_width` columns.
pub fn group_with_width(print_width: Width, doc: Doc) -> Doc {
    group_full(Some(print_width), GroupKind::Auto, doc)
}

/// Sequential composition. Also available as the `+` operator.
pub fn concat(left: Doc, right: Doc) -> Doc {
    let has_group_breaker = left.has_group_breaker() || right.has_group_breaker();
    let breaking_measure = left.breaking_measure().concat(right.breaking_measure());
    // A breaker means the group will certainly break, so the flat measure is
    // irrelevant and must agree with the breaking one.
    let flat_measure = if has_group_breaker {
        breaking_measure
    } else {
        left.flat_measure().concat(right.flat_measure())
    };
    Doc {
        node: DocNode::Concat {
            left: Box::new(left),
            right: Box::new(right),
            has_group_breaker,
            flat_measure,
            breaking_measure,
        },
    }
}

pub fn comma() -> Doc {
    string(",")
}

pub fn comma_breakable_space() -> Doc {
    comma() + breakable_space()
}

/// A comma that only appears when the enclosing group has broken.
pub fn trailing_comma() -> Doc {
    if_broken(comma(), empty())
}

fn bracketed(
    open: &'static str,
    close: &'static str,
    wrap: impl FnOnce(Doc) -> Doc,
    doc: Doc,
) -> Doc {
    wrap(string(open) + doc + string(close))
}

/// `(doc)`, wrapped in a [`group`].
pub fn parens(doc: Doc) -> Doc {
    parens_with(group, doc)
}

/// `(doc)`, wrapped by `wrap` instead of the default [`group`].
pub fn parens_with(wrap: impl FnOnce(Doc) -> Doc, doc: Doc) -> Doc {
    bracketed("(", ")", wrap, doc)
}

/// `{doc}`, wrapped in a [`group`].
pub fn braces(doc: Doc) -> Doc {
    braces_with(group, doc)
}

/// `{doc}`, wrapped by `wrap` instead of the default [`group`].
pub fn braces_with(wrap: impl FnOnce(Doc) -> Doc, doc: Doc) -> Doc {
    bracketed("{", "}", wrap, doc)
}

/// `[doc]`, wrapped in a [`group`].
pub fn list_brackets(doc: Doc) -> Doc {
    list_brackets_with(group, doc)
}

/// `[doc]`, wrapped by `wrap` instead of the default [`group`].
pub fn list_brackets_with(wrap: impl FnOnce(Doc) -> Doc, doc: Doc) -> Doc {
    bracketed("[", "]", wrap, doc)
}

/// `[|doc|]`, wrapped in a [`group`].
pub fn array_brackets(doc: Doc) -> Doc {
    array_brackets_with(group, doc)
}

/// `[|doc|]`, wrapped by `wrap` instead of the default [`group`].
pub fn array_brackets_with(wrap: impl FnOnce(Doc) -> Doc, doc: Doc) -> Doc {
    bracketed("[|", "|]", wrap, doc)
}

/// `<doc>`, wrapped in a [`group`].
pub fn angle_brackets(doc: Doc) -> Doc {
    angle_brackets_with(group, doc)
}

/// `<doc>`, wrapped by `wrap` instead of the default [`group`].
pub fn angle_brackets_with(wrap: impl FnOnce(Doc) -> Doc, doc: Doc) -> Doc {
    bracketed("<", ">", wrap, doc)
}

/// `"doc"`. Quoting is not a break scope, so there is no group wrap.
pub fn double_quotes(doc: Doc) -> Doc {
    string("\"") + doc + string("\"")
}

/// Compose a document over a list, with distinct first/middle/last
/// treatment.
///
/// The first element is preceded by `lead(first)`. Each element except the
/// last is rendered as `f(false, a)` followed by `sep(a, b)` where `b` is
/// its successor. The last element is rendered as `f(true, last)` followed
/// by `trail(last)`. An empty list yields [`empty`].
pub fn concat_map<T>(
    sep: impl Fn(&T, &T) -> Doc,
    lead: impl Fn(&T) -> Doc,
    trail: impl Fn(&T) -> Doc,
    f: impl Fn(bool, &T) -> Doc,
    items: &[T],
) -> Doc {
    match items {
        [] => empty(),
        [only] => lead(only) + f(true, only) + trail(only),
        [first, .., last] => {
            let mut doc = lead(first);
            for (a, b) in items.iter().tuple_windows() {
                doc = doc + f(false, a) + sep(a, b);
            }
            doc + f(true, last) + trail(last)
        }
    }
}
