use one_pass_pretty_printer::{print_to_string, Doc, Eol, Width};

#[track_caller]
pub fn assert_pp(doc: &Doc, width: Width, expected_lines: &[&str]) {
    let expected = expected_lines.join("\n");
    let actual = print_to_string(Eol::Lf, width, doc);
    if actual != expected {
        eprintln!(
            "IN PRETTY PRINTING WITH WIDTH {}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            width, expected, actual,
        );
        assert_eq!(actual, expected);
    }
}
