#[allow(unused)] // Not actually unused
mod common;

use common::assert_pp;
use one_pass_pretty_printer::doc_constructors::{
    blank, breakable_space, concat, empty, group, hardline, indent, phantom_hardline, space,
    string, string_with_width,
};
use one_pass_pretty_printer::{print_to_string, Doc, Eol, Measure, Width};

fn sample_docs() -> Vec<Doc> {
    vec![
        empty(),
        string("hello"),
        group(string("foo") + breakable_space() + string("bar")),
        group(indent(2, string("foo") + breakable_space() + string("bar"))),
        string("a") + hardline() + string("b"),
    ]
}

#[test]
fn basics_empty() {
    assert_pp(&empty(), 80, &[""]);
}

#[test]
fn basics_string() {
    assert_pp(&string("Hello world!"), 80, &["Hello world!"]);
}

#[test]
fn basics_concat() {
    assert_pp(&(string("Hello") + string(" world!")), 80, &["Hello world!"]);
}

#[test]
fn basics_blank() {
    assert_pp(&(string("a") + blank(3) + string("b")), 80, &["a   b"]);
    assert_pp(&(string("a") + space() + string("b")), 80, &["a b"]);
}

#[test]
fn basics_hardline() {
    let doc = string("Hello") + hardline() + string("world!");
    assert_pp(&doc, 80, &["Hello", "world!"]);
}

#[test]
fn phantom_hardline_emits_but_measures_zero() {
    let doc = string("ab") + phantom_hardline() + string("cd");
    assert_eq!(doc.flat_measure(), Measure::WithoutBreak(4));
    assert_pp(&doc, 80, &["ab", "cd"]);

    let real = string("ab") + hardline() + string("cd");
    assert_eq!(real.flat_measure(), Measure::WithBreak(2));
}

#[test]
fn string_widths_are_unicode_aware() {
    assert_eq!(string("héllo").flat_measure(), Measure::WithoutBreak(5));
    assert_eq!(string("日本").flat_measure(), Measure::WithoutBreak(4));
}

#[test]
fn string_with_width_overrides_measurement() {
    let doc = string_with_width("\u{1b}[1mbold\u{1b}[0m", 4);
    assert_eq!(doc.flat_measure(), Measure::WithoutBreak(4));
}

#[test]
fn measure_addition() {
    use Measure::{WithBreak, WithoutBreak};

    assert_eq!(WithoutBreak(2).concat(WithoutBreak(3)), WithoutBreak(5));
    assert_eq!(WithoutBreak(2).concat(WithBreak(1)), WithBreak(3));
    // A break-terminated left operand absorbs the right entirely.
    assert_eq!(WithBreak(3).concat(WithoutBreak(9)), WithBreak(3));
    assert_eq!(WithBreak(3).concat(WithBreak(7)), WithBreak(3));
}

#[test]
fn empty_is_neutral_for_concat() {
    for doc in sample_docs() {
        for width in [3, 80] {
            let plain = print_to_string(Eol::Lf, width, &doc);
            let left = print_to_string(Eol::Lf, width, &concat(empty(), doc.clone()));
            let right = print_to_string(Eol::Lf, width, &concat(doc.clone(), empty()));
            assert_eq!(left, plain);
            assert_eq!(right, plain);
        }
    }
}

#[test]
fn concat_is_associative() {
    let a = || group(string("aa") + breakable_space() + string("bb"));
    let b = || string("cc");
    let c = || group(indent(2, string("dd") + breakable_space() + string("ee")));

    let left_nested = concat(concat(a(), b()), c());
    let right_nested = concat(a(), concat(b(), c()));
    assert_eq!(left_nested.flat_measure(), right_nested.flat_measure());
    for width in [2, 4, 6, 8, 10, 80] {
        assert_eq!(
            print_to_string(Eol::Lf, width, &left_nested),
            print_to_string(Eol::Lf, width, &right_nested),
        );
    }
}

#[test]
fn flat_width_is_additive() {
    let a = string("foo") + breakable_space();
    let b = string("bar") + blank(2);
    assert_eq!(
        concat(a.clone(), b.clone()).flat_measure(),
        a.flat_measure().concat(b.flat_measure()),
    );

    let broken = string("foo") + hardline();
    assert_eq!(
        concat(broken.clone(), b.clone()).flat_measure(),
        broken.flat_measure().concat(b.flat_measure()),
    );
    let absorbed = concat(broken, b).flat_measure();
    assert!(absorbed.is_with_break());
    assert_eq!(absorbed, Measure::WithBreak(3));
}

#[test]
fn flat_fit_produces_no_breaks() {
    let doc = group(string("aaa") + breakable_space() + string("bbb"));
    let out = print_to_string(Eol::Lf, 7, &doc);
    assert!(!out.contains('\n'));
    assert_eq!(out, "aaa bbb");
}

#[test]
fn extra_grouping_is_idempotent_at_infinite_width() {
    for doc in sample_docs() {
        assert_eq!(
            print_to_string(Eol::Lf, Width::MAX, &group(doc.clone())),
            print_to_string(Eol::Lf, Width::MAX, &doc),
        );
    }
}
