use sexpc::{CompileError, compile};

#[test]
fn assignment_of_a_literal() {
  assert_eq!(compile("(set x 10)").unwrap(), "x = 10");
}

#[test]
fn assignment_of_a_nested_expression() {
  assert_eq!(compile("(set result (+ x y))").unwrap(), "result = (x + y)");
}

#[test]
fn one_line_per_top_level_form() {
  let source = "(print result)\n(print (+ result 5))";
  assert_eq!(
    compile(source).unwrap(),
    "print(result)\nprint((result + 5))"
  );
}

#[test]
fn print_with_several_arguments() {
  assert_eq!(compile("(print 1 2 3)").unwrap(), "print(1, 2, 3)");
}

#[test]
fn whole_program_in_source_order() {
  let source = "
(set x 10)
(set y 20)
(set result (+ x y))
(print result)
(print (+ result 5))
";
  let expected = "\
x = 10
y = 20
result = (x + y)
print(result)
print((result + 5))";
  assert_eq!(compile(source).unwrap(), expected);
}

#[test]
fn empty_source_compiles_to_an_empty_program() {
  assert_eq!(compile("").unwrap(), "");
  assert_eq!(compile("  \n ").unwrap(), "");
}

#[test]
fn stray_close_paren_aborts_the_whole_compile() {
  assert_eq!(compile(")"), Err(CompileError::UnmatchedCloseParen));
  // Forms before the offending one are not emitted either.
  assert_eq!(compile("(print a) )"), Err(CompileError::UnmatchedCloseParen));
}

#[test]
fn truncated_form_aborts_the_whole_compile() {
  assert_eq!(compile("(set x"), Err(CompileError::UnexpectedEndOfInput));
  assert_eq!(
    compile("(print a) (set x"),
    Err(CompileError::UnexpectedEndOfInput)
  );
}

#[test]
fn balanced_sources_never_fail() {
  for source in [
    "x",
    "10.5",
    "()",
    "(set x (+ 1 (* 2 (- 3 (/ 4 5)))))",
    "(print) (print x) (some unknown form)",
  ] {
    assert!(compile(source).is_ok(), "{source:?} should compile");
  }
}

#[test]
fn deeply_nested_source_fails_cleanly() {
  let depth = 4096;
  let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
  assert!(matches!(
    compile(&source),
    Err(CompileError::NestingTooDeep { .. })
  ));
}
