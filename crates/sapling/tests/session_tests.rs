//! Session tests: the scan, parse, interpret pipeline as a runner drives it

use pretty_assertions::assert_eq;
use sapling::*;

fn session() -> Session<Vec<u8>> {
    Session::with_output(Vec::new(), SessionConfig::default())
}

fn output(session: &Session<Vec<u8>>) -> String {
    String::from_utf8(session.output().clone()).unwrap()
}

#[test]
fn test_run_program() {
    let mut session = session();
    session
        .run(
            r#"
            var greeting = "hello";
            var target = "world";
            {
                var greeting = "goodbye";
                print greeting + " " + target;
            }
            print greeting + " " + target;
            "#,
        )
        .unwrap();
    assert_eq!(output(&session), "goodbye world\nhello world\n");
}

#[test]
fn test_lines_persist_like_a_prompt() {
    let mut session = session();
    session.run("var total = 0;").unwrap();
    session.run("total = total + 5;").unwrap();
    session.run("print total;").unwrap();
    assert_eq!(output(&session), "5\n");
}

#[test]
fn test_failed_line_keeps_earlier_bindings() {
    let mut session = session();
    session.run("var a = 1;").unwrap();
    assert!(session.run("a = a + nil;").is_err());
    assert!(session.run("print;").is_err());
    session.run("print a;").unwrap();
    assert_eq!(output(&session), "1\n");
}

#[test]
fn test_runtime_fault_keeps_partial_effects() {
    let mut session = session();
    let err = session.run("var a = 1; print a; b = 2; print 3;").unwrap_err();
    assert!(matches!(err, Error::Runtime(_)));
    assert_eq!(output(&session), "1\n");
    assert!(session.interpreter().environment().contains("a"));
}

#[test]
fn test_static_error_runs_nothing() {
    let mut session = session();
    let err = session.run("var a = 1; print a; print (;").unwrap_err();
    assert!(err.is_static());
    assert_eq!(output(&session), "");
    assert!(!session.interpreter().environment().contains("a"));
}

#[test]
fn test_echo_ast_for_each_statement() {
    let mut session = Session::with_output(Vec::new(), SessionConfig::new().with_echo_ast(true));
    session.run("var a = 2; print a * 3;").unwrap();
    assert_eq!(output(&session), "(var a 2)\n(print (* a 3))\n6\n");
}

#[test]
fn test_predefined_globals_are_visible() {
    let mut session = session();
    assert_eq!(session.config(), &SessionConfig::default());

    session
        .interpreter_mut()
        .environment_mut()
        .define("limit", Value::Number(3.0));
    session.run("print limit * 2;").unwrap();
    assert_eq!(output(&session), "6\n");
}

#[test]
fn test_token_dump_precedes_lex_errors() {
    let mut session =
        Session::with_output(Vec::new(), SessionConfig::new().with_dump_tokens(true));
    let err = session.run("@").unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert_eq!(output(&session), "{\"kind\":\"EOF\",\"lexeme\":\"\",\"line\":1}\n");
}

#[test]
fn test_check_collects_static_errors() {
    let errors = check("print ;\nvar x = 1;\nvar = 2;\n$");
    let lines: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "[line 4] Error: Unexpected character '$'.",
            "[line 1] Error at ';': Expect expression.",
            "[line 3] Error at '=': Expect variable name.",
        ]
    );
}

#[test]
fn test_check_does_not_execute() {
    assert!(check("print undefined_name;").is_empty());
}
