//! Sample documents, built with the public constructor surface.
//!
//! These exist to exercise the library the way a real formatter would, and
//! the integration tests print them at various widths. They are not meant
//! for production use.

pub mod json {
    //! A JSON layout: flat while it fits, otherwise one element per line
    //! with two-space indentation and a trailing comma.
    //!
    //! Strings are emitted as-is (no escaping); this is a sample document
    //! builder, not a JSON serializer.

    use crate::doc_constructors::{
        braces, break_, comma_breakable_space, concat_map, double_quotes, empty, indent,
        list_brackets, space, string, trailing_comma,
    };
    use crate::Doc;

    #[derive(Debug, Clone)]
    pub enum Json {
        Null,
        Bool(bool),
        Number(f64),
        String(String),
        List(Vec<Json>),
        Object(Vec<(String, Json)>),
    }

    pub fn json_doc(value: &Json) -> Doc {
        match value {
            Json::Null => string("null"),
            Json::Bool(true) => string("true"),
            Json::Bool(false) => string("false"),
            Json::Number(n) => string(n.to_string()),
            Json::String(s) => double_quotes(string(s.clone())),
            Json::List(items) if items.is_empty() => string("[]"),
            Json::List(items) => list_brackets(sequence(items, json_doc)),
            Json::Object(entries) if entries.is_empty() => string("{}"),
            Json::Object(entries) => braces(sequence(entries, |(key, value)| {
                double_quotes(string(key.clone())) + string(":") + space() + json_doc(value)
            })),
        }
    }

    /// A comma-separated sequence for use between brackets: nothing extra
    /// when flat, one element per indented line (plus a trailing comma) when
    /// broken.
    fn sequence<T>(items: &[T], element: impl Fn(&T) -> Doc) -> Doc {
        indent(
            2,
            break_()
                + concat_map(
                    |_, _| comma_breakable_space(),
                    |_| empty(),
                    |_| trailing_comma(),
                    |_, item| element(item),
                    items,
                ),
        ) + break_()
    }
}
