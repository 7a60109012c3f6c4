//! Whole-pipeline scenarios: spec.md §8.2's literal inputs and their exact
//! canonical-emit outputs, plus its four named error cases.

use drip_parser::emit::emit;
use drip_parser::parse;
use pretty_assertions::assert_eq;

fn emitted(source: &str) -> String {
    emit(&parse(source).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}")))
}

#[test]
fn scenario_1_arithmetic_precedence() {
    assert_eq!(emitted("1 + 2 * 3"), "1 + 2 * 3");
}

#[test]
fn scenario_2_parenthesized_group() {
    assert_eq!(emitted("(1 + 2) * 3"), "(1 + 2) * 3");
}

#[test]
fn scenario_3_implicit_call_chain() {
    assert_eq!(emitted("foo +2, b +3 | 0"), "foo(+2,b(+3 | 0))");
}

#[test]
fn scenario_4_function_literal_and_call_statement() {
    assert_eq!(
        emitted("foo = () ->\n  hello()\nhi()"),
        "foo = () -> {hello()};hi()"
    );
}

#[test]
fn scenario_5_nested_unbracketed_object_literal() {
    assert_eq!(
        emitted("a =\n  hello :\n    world : 2\n  hi:\n    welt: 3"),
        "a = {hello: {world: 2}, hi: {welt: 3}}"
    );
}

#[test]
fn scenario_6_chained_postfix_comprehension() {
    assert_eq!(
        emitted("x for x in xs for xs in list"),
        "x for x in xs for xs in list"
    );
}

#[test]
fn scenario_7_if_then_else() {
    assert_eq!(
        emitted("if friday then jack else jill"),
        "if (friday) { jack } else { jill }"
    );
}

#[test]
fn scenario_8a_deindent_before_end_of_input_is_an_error() {
    assert!(parse("foo\n  20").is_err());
}

#[test]
fn scenario_8b_second_else_is_an_error() {
    assert!(parse("if friday then sue else joy else huh").is_err());
}

#[test]
fn scenario_8c_non_lvalue_for_target_is_an_error() {
    assert!(parse("for 2*x,y in arr then x").is_err());
}

#[test]
fn scenario_8d_leading_semicolon_in_a_block_is_an_error() {
    assert!(parse("foo = ->\n ;a()").is_err());
}
