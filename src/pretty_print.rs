use crate::doc::{Doc, DocNode, GroupKind};
use crate::geometry::Width;
use crate::infra::span;
use crate::measure::Measure;
use std::convert::Infallible;

/// The end-of-line sequence used for every emitted newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eol {
    /// `"\n"`
    Lf,
    /// `"\r\n"`
    Crlf,
}

impl Eol {
    pub fn as_str(self) -> &'static str {
        match self {
            Eol::Lf => "\n",
            Eol::Crlf => "\r\n",
        }
    }
}

/// Render `doc`, calling `write` with successive chunks of output.
///
/// `line_width` is the desired line width. The algorithm will attempt to,
/// but is not guaranteed to, find a layout that fits within that width.
/// Layout decisions are greedy and committed in one pass: once a chunk has
/// been written it is never revisited.
///
/// The concatenation of the chunks, in order, is the output. If `write`
/// fails, its error is returned and the traversal stops; the document itself
/// is never modified by printing.
pub fn print<E>(
    mut write: impl FnMut(&str) -> Result<(), E>,
    eol: Eol,
    line_width: Width,
    doc: &Doc,
) -> Result<(), E> {
    span!("print");

    let mut printer = Printer {
        write: &mut write,
        eol,
        line_width,
        column: 0,
        queued_spaces: None,
    };
    // The document renders as if wrapped in one implicit Auto group.
    let mut scope = printer.enter_group(
        GroupKind::Auto,
        doc.flat_measure(),
        doc.has_group_breaker(),
        0,
    );
    printer.print_doc(doc, &mut scope, None)
    // Indentation still queued here was established by a final newline that
    // has already been written; it is dropped rather than flushed.
}

/// Render `doc` to a `String`.
pub fn print_to_string(eol: Eol, line_width: Width, doc: &Doc) -> String {
    span!("print_to_string");

    let mut buffer = String::new();
    let result: Result<(), Infallible> = print(
        |chunk| {
            buffer.push_str(chunk);
            Ok(())
        },
        eol,
        line_width,
        doc,
    );
    match result {
        Ok(()) => buffer,
        Err(never) => match never {},
    }
}

/// How break hints are handled in the current group scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Render every break hint as its fallback.
    Flat,
    /// Render every break hint as a line break.
    Breaking,
    /// Break iff the hint plus the next node's flat width would overflow.
    FitFlat,
    /// Break iff the hint plus the next node's breaking width would overflow.
    FitBreaking,
}

/// The state of the group currently being rendered. Nested groups each get a
/// fresh scope; mutations are visible within the scope and discarded on
/// exit, except that `Indent` restores the two indent fields itself.
struct GroupScope {
    mode: Mode,
    /// Indentation committed by breaks taken so far in this group, inherited
    /// from the enclosing group on entry.
    global_indent: Width,
    /// Indentation accumulated from `Indent` nodes entered but not yet
    /// claimed by a break. Folded into `global_indent` by the next break.
    local_indent: Width,
    /// Whether a break has been emitted in this scope. Drives `IfBroken`.
    broken: bool,
}

struct Printer<'a, E> {
    write: &'a mut dyn FnMut(&str) -> Result<(), E>,
    eol: Eol,
    line_width: Width,
    /// Current output column.
    column: Width,
    /// At most one pending run of indentation spaces, written only once
    /// non-whitespace output follows it. Keeps blank lines truly empty.
    queued_spaces: Option<Width>,
}

impl<E> Printer<'_, E> {
    /// Renders one node. `next` is the node the engine will see immediately
    /// after this one, if any; fit-mode break hints read its cached width as
    /// one-node lookahead.
    fn print_doc(
        &mut self,
        doc: &Doc,
        scope: &mut GroupScope,
        next: Option<&Doc>,
    ) -> Result<(), E> {
        use DocNode::*;

        match &doc.node {
            Empty | GroupBreaker => Ok(()),
            Text { value, width } => {
                self.flush_queued()?;
                (self.write)(value)?;
                self.column = self.column.saturating_add(*width);
                Ok(())
            }
            Blank { count } => {
                self.flush_queued()?;
                self.write_spaces(*count)?;
                self.column = self.column.saturating_add(*count);
                Ok(())
            }
            Concat { left, right, .. } => {
                self.print_doc(left, scope, Some(right.as_ref()))?;
                self.print_doc(right, scope, next)
            }
            Indent { count, doc, .. } => {
                // Indentation contributes only to breaks taken while still
                // inside this subtree.
                let saved_global = scope.global_indent;
                let saved_local = scope.local_indent;
                scope.local_indent += *count;
                self.print_doc(doc, scope, next)?;
                scope.global_indent = saved_global;
                scope.local_indent = saved_local;
                Ok(())
            }
            Hardline { .. } => self.emit_break(scope),
            IfBroken { flat, breaking, .. } => {
                let chosen = if scope.broken { breaking } else { flat };
                self.print_doc(chosen, scope, next)
            }
            BreakHint { fallback, flat } => match scope.mode {
                Mode::Flat => self.print_doc(fallback, scope, next),
                Mode::Breaking => self.emit_break(scope),
                Mode::FitFlat | Mode::FitBreaking => {
                    let next_width = match next {
                        None => 0,
                        Some(next) if scope.mode == Mode::FitFlat => next.flat_measure().value(),
                        Some(next) => next.breaking_measure().value(),
                    };
                    let used = self
                        .column
                        .saturating_add(flat.value())
                        .saturating_add(next_width);
                    if used > self.line_width {
                        self.emit_break(scope)
                    } else {
                        self.print_doc(fallback, scope, next)
                    }
                }
            },
            Group {
                kind,
                doc,
                flat_measure,
                ..
            } => {
                let mut inner = self.enter_group(
                    *kind,
                    *flat_measure,
                    doc.has_group_breaker(),
                    scope.global_indent,
                );
                self.print_doc(doc, &mut inner, next)
            }
        }
    }

    /// Computes the scope for a group starting at the current column.
    /// `flat` is the group node's own cached measure, so a `print_width`
    /// override participates in the Auto decision.
    fn enter_group(
        &self,
        kind: GroupKind,
        flat: Measure,
        has_group_breaker: bool,
        global_indent: Width,
    ) -> GroupScope {
        let mode = if has_group_breaker {
            Mode::Breaking
        } else {
            match kind {
                GroupKind::Auto => {
                    if self.column.saturating_add(flat.value()) > self.line_width {
                        Mode::Breaking
                    } else {
                        Mode::Flat
                    }
                }
                GroupKind::FitGroups => Mode::FitFlat,
                GroupKind::FitAll => Mode::FitBreaking,
            }
        };
        GroupScope {
            mode,
            global_indent,
            local_indent: 0,
            // In breaking mode every IfBroken in the scope must agree,
            // including ones ahead of the first break hint.
            broken: mode == Mode::Breaking,
        }
    }

    /// Emits a line break: commits pending indentation, writes the EOL
    /// sequence, and queues the new line's indentation.
    fn emit_break(&mut self, scope: &mut GroupScope) -> Result<(), E> {
        scope.broken = true;
        scope.global_indent += scope.local_indent;
        scope.local_indent = 0;
        // Indentation queued for the line just ended is discarded, not
        // flushed: a line that held nothing must not end in whitespace.
        self.queued_spaces = None;
        (self.write)(self.eol.as_str())?;
        self.queued_spaces = Some(scope.global_indent);
        self.column = scope.global_indent;
        Ok(())
    }

    fn flush_queued(&mut self) -> Result<(), E> {
        match self.queued_spaces.take() {
            None => Ok(()),
            Some(len) => self.write_spaces(len),
        }
    }

    fn write_spaces(&mut self, len: Width) -> Result<(), E> {
        const SPACES: &str = "                                ";

        let mut len = len as usize;
        if len == 0 {
            return Ok(());
        }
        while len > SPACES.len() {
            (self.write)(SPACES)?;
            len -= SPACES.len();
        }
        (self.write)(&SPACES[..len])
    }
}
