use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use dragon::{
    ast::{BasicType, Block, Decl, Decls, Position, Program, Type},
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::core::Context,
        value::{core::ValueType, variable::MAX_ARRAY_SIZE},
    },
    run,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "dragon"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_output(path);

        count += 1;
        let mut out = Vec::new();
        if let Err(e) = run(&source, &mut out) {
            panic!("Program {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(String::from_utf8(out).unwrap(), expected, "output of {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn expected_output(program: &Path) -> String {
    let path = program.with_extension("out");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

fn output(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).unwrap()
}

fn failure(src: &str) -> (Error, String) {
    let mut out = Vec::new();
    match run(src, &mut out) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => (e, String::from_utf8(out).unwrap()),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    let (error, _) = failure(src);
    assert_eq!(error.kind(), kind, "unexpected error: {error}");
}

#[test]
fn print_literal() {
    assert_eq!(output("{ print(42); }"), "42\n");
}

#[test]
fn arithmetic_on_variables() {
    assert_eq!(output("{ int x; int y; x = 5; y = x * 2 + 1; print(y); }"), "11\n");
}

#[test]
fn while_loop_counts() {
    assert_eq!(output("{ int i; i = 0; while (i < 3) { print(i); i = i + 1; } }"),
               "0\n1\n2\n");
}

#[test]
fn array_store_and_load() {
    assert_eq!(output("{int a[3]; a[0] = 5; print(a[0]);}"), "5\n");
    assert_failure("{int a[3]; a[0] = 5; print(a[1]);}", ErrorKind::UninitializedAccess);
    assert_eq!(output("{int[3] a; a[0] = 5; print(a[0]);}"), "5\n");
}

#[test]
fn array_sum() {
    let src = "{
        int a[3];
        int s;
        a[0] = 1; a[1] = 2; a[2] = 3;
        s = a[0] + a[1] + a[2];
        print(s);
    }";
    assert_eq!(output(src), "6\n");
}

#[test]
fn break_leaves_loop_immediately() {
    let src = "{
        int i;
        i = 0;
        while (true) {
            if (i == 2) break;
            print(i);
            i = i + 1;
        }
    }";
    assert_eq!(output(src), "0\n1\n");
}

#[test]
fn if_else_chooses_branch() {
    assert_eq!(output("{ boolean b; b = 1 < 2; if (b) print(1); else print(0); }"), "1\n");
    assert_eq!(output("{ if (2 < 1) print(1); else print(0); }"), "0\n");
    assert_eq!(output("{ if (false) print(1); print(2); }"), "2\n");
}

#[test]
fn booleans_print_as_words() {
    assert_eq!(output("{ print(true); print(false); print(1 == 1); }"), "true\nfalse\ntrue\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(output("{}"), "");
    assert_eq!(output("{ int x; boolean b; }"), "");
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(output("{ print(1 + 2 * 3); }"), "7\n");
    assert_eq!(output("{ print((1 + 2) * 3); }"), "9\n");
    assert_eq!(output("{ print(2 - 3 - 4); }"), "-5\n");
    assert_eq!(output("{ print(100 / 10 / 5); }"), "2\n");
    assert_eq!(output("{ print(1 == 2 == false); }"), "true\n");
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(output("{ print(7 / 2); }"), "3\n");
    assert_eq!(output("{ print(-7 / 2); }"), "-3\n");
    assert_eq!(output("{ print(7 / -2); }"), "-3\n");
}

#[test]
fn unary_operators() {
    assert_eq!(output("{ print(-5); print(--5); }"), "-5\n5\n");
    assert_eq!(output("{ print(!true); print(!!true); }"), "false\ntrue\n");
    assert_eq!(output("{ int x; x = 3; print(-x * 2); }"), "-6\n");
}

#[test]
fn boolean_arithmetic() {
    assert_eq!(output("{ print(true + false); print(false + false); }"), "true\nfalse\n");
    assert_eq!(output("{ print(true * false); print(true * true); }"), "false\ntrue\n");
    // Subtraction and division yield the left operand.
    assert_eq!(output("{ print(true - true); print(false - true); }"), "true\nfalse\n");
    assert_eq!(output("{ print(true / true); print(false / true); }"), "true\nfalse\n");
}

#[test]
fn relational_operators_accept_mixed_types() {
    assert_eq!(output("{ print(true > 0); print(false < true); print(1 >= true); }"),
               "true\ntrue\ntrue\n");
    assert_eq!(output("{ print(3 <= 2); print(2 <= 2); }"), "false\ntrue\n");
}

#[test]
fn equality_requires_matching_types() {
    assert_eq!(output("{ print(true != false); print(3 != 3); }"), "true\nfalse\n");
    assert_failure("{ print(1 == true); }", ErrorKind::TypeMismatch);
    assert_failure("{ print(false != 0); }", ErrorKind::TypeMismatch);
}

#[test]
fn logical_operators() {
    assert_eq!(output("{ print(true && false); print(false || true); }"), "false\ntrue\n");
    assert_failure("{ print(true && 1); }", ErrorKind::TypeMismatch);
    assert_failure("{ print(0 || false); }", ErrorKind::TypeMismatch);
    // Integers are never converted to booleans, even where the result would
    // be unambiguous.
    assert_failure("{ print(1 || 0); }", ErrorKind::TypeMismatch);
    assert_failure("{ print(1 && 1); }", ErrorKind::TypeMismatch);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_failure("{ boolean b; b = true || (1 / 0 == 0); }", ErrorKind::DivisionByZero);
    assert_failure("{ boolean b; b = false && (1 / 0 == 0); }", ErrorKind::DivisionByZero);

    let (error, out) = failure("{ int x; print(1); if (true || x == 0) print(2); }");
    assert_eq!(error.kind(), ErrorKind::UninitializedAccess);
    assert_eq!(out, "1\n");
}

#[test]
fn type_mismatches() {
    assert_failure("{ print(1 + true); }", ErrorKind::TypeMismatch);
    assert_failure("{ int x; x = true; }", ErrorKind::TypeMismatch);
    assert_failure("{ boolean b; b = 1; }", ErrorKind::TypeMismatch);
    assert_failure("{ print(!1); }", ErrorKind::TypeMismatch);
    assert_failure("{ print(-true); }", ErrorKind::TypeMismatch);
    assert_failure("{ int a[2]; a[0] = false; }", ErrorKind::TypeMismatch);
}

#[test]
fn conditions_must_be_boolean() {
    assert_failure("{ if (1) print(1); }", ErrorKind::TypeMismatch);
    assert_failure("{ while (0) print(1); }", ErrorKind::TypeMismatch);
    assert_failure("{ do print(1); while (1);}", ErrorKind::TypeMismatch);
}

#[test]
fn uninitialized_reads() {
    assert_failure("{ int x; print(x); }", ErrorKind::UninitializedAccess);
    assert_failure("{ int a[3]; a[0] = 1; print(a[1]); }", ErrorKind::UninitializedAccess);
}

#[test]
fn undeclared_names() {
    assert_failure("{ print(y); }", ErrorKind::UndeclaredVariable);
    assert_failure("{ y = 1; }", ErrorKind::UndeclaredVariable);
    assert_failure("{ y[0] = 1; }", ErrorKind::UndeclaredVariable);
}

#[test]
fn array_elements_round_trip() {
    let src = "{
        int a[4];
        int i;
        i = 0;
        while (i < 4) { a[i] = i * i; i = i + 1; }
        i = 3;
        while (i >= 0) { print(a[i]); i = i - 1; }
    }";
    assert_eq!(output(src), "9\n4\n1\n0\n");

    assert_eq!(output("{ boolean f[2]; f[0] = true; f[1] = !f[0]; print(f[1]); }"),
               "false\n");
}

#[test]
fn array_bounds() {
    // Reads are bounds-checked exactly like writes.
    assert_failure("{ int a[3]; a[3] = 1; }", ErrorKind::OutOfBounds);
    assert_failure("{ int a[3]; a[-1] = 1; }", ErrorKind::OutOfBounds);
    assert_failure("{ int a[3]; print(a[5]); }", ErrorKind::OutOfBounds);
    assert_failure("{ int a[0]; a[0] = 1; }", ErrorKind::OutOfBounds);
    assert_eq!(output("{ int a[3]; a[2] = 7; print(a[2]); }"), "7\n");
}

#[test]
fn array_misuse() {
    assert_failure("{ int a[2]; a[true] = 1; }", ErrorKind::TypeMismatch);
    assert_failure("{ int a[2]; print(a); }", ErrorKind::TypeMismatch);
    assert_failure("{ int a[2]; a = 1; }", ErrorKind::TypeMismatch);
    assert_failure("{ int x; x = 1; print(x[0]); }", ErrorKind::TypeMismatch);
}

#[test]
fn negative_array_size_is_rejected() {
    // The grammar only admits digit sizes, so build the declaration directly.
    assert!(dragon::parse("{ int a[-1]; }").is_err());

    let position = Position::new(1, 1);
    let decl = Decl { ty: Type::Array { element: BasicType { name: "integer".to_string(),
                                                             position },
                                        size: -1,
                                        position },
                      name: "a".to_string(),
                      position };
    let program = Program { block: Block { decls: Some(Box::new(Decls { decl,
                                                                        next: None,
                                                                        position })),
                                           stmts: None,
                                           position },
                            position };

    let error = Context::new(Vec::new()).interpret(&program).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Declaration);
}

#[test]
fn oversized_arrays_are_declaration_errors() {
    let (error, out) = failure("{ int[9223372036854775807] a; print(1); }");
    assert_eq!(error.kind(), ErrorKind::Declaration);
    assert!(out.is_empty());

    assert_failure("{ boolean big[1000000000000]; }", ErrorKind::Declaration);
    assert_failure(&format!("{{ int a[{}]; }}", MAX_ARRAY_SIZE + 1), ErrorKind::Declaration);
}

#[test]
fn division_by_zero() {
    assert_failure("{ int x; x = 1 / 0; }", ErrorKind::DivisionByZero);
    assert_failure("{ print(0 / 0); }", ErrorKind::DivisionByZero);
    assert_failure("{ print(true / false); }", ErrorKind::DivisionByZero);
    // The divisor is checked before the operand types.
    assert_failure("{ print(true / 0); }", ErrorKind::DivisionByZero);
}

#[test]
fn integer_overflow() {
    assert_failure("{ print(9223372036854775807 + 1); }", ErrorKind::Overflow);
    assert_failure("{ print(-9223372036854775807 - 2); }", ErrorKind::Overflow);
    assert_failure("{ print(4611686018427387904 * 2); }", ErrorKind::Overflow);
    assert_eq!(output("{ print(-9223372036854775807 - 1); }"), "-9223372036854775808\n");
}

#[test]
fn oversized_literal_is_lexical_error() {
    assert_failure("{ print(9223372036854775808); }", ErrorKind::Lexical);
}

#[test]
fn do_while_runs_body_first() {
    assert_eq!(output("{ int i; i = 10; do { print(i); i = i + 1; } while (i < 3); }"),
               "10\n");
    assert_eq!(output("{ int i; i = 0; do { print(i); i = i + 1; } while (i < 3); }"),
               "0\n1\n2\n");
}

#[test]
fn break_in_do_while() {
    let src = "{
        int i;
        i = 0;
        do {
            if (i == 2) break;
            print(i);
            i = i + 1;
        } while (true);
        print(99);
    }";
    assert_eq!(output(src), "0\n1\n99\n");
}

#[test]
fn break_only_leaves_innermost_loop() {
    let src = "{
        int i;
        int j;
        i = 0;
        while (i < 2) {
            j = 0;
            while (true) {
                if (j == 2) break;
                print(i * 10 + j);
                j = j + 1;
            }
            i = i + 1;
        }
    }";
    assert_eq!(output(src), "0\n1\n10\n11\n");
}

#[test]
fn break_from_nested_block_inside_loop() {
    let src = "{ int i; i = 0; while (true) { { i = i + 1; if (i > 2) break; } print(i); } }";
    assert_eq!(output(src), "1\n2\n");
}

#[test]
fn break_outside_loop() {
    assert_failure("{ break; }", ErrorKind::BreakOutsideLoop);

    let (error, out) = failure("{ print(1); if (true) break; print(2); }");
    assert_eq!(error.kind(), ErrorKind::BreakOutsideLoop);
    assert_eq!(out, "1\n");
    assert!(error.to_string().contains("line 1, column 23"), "{error}");
}

#[test]
fn nested_declarations_share_one_namespace() {
    assert_eq!(output("{ int x; x = 1; { int y; y = 2; } print(y); }"), "2\n");
    assert_eq!(output("{ int x; x = 5; { boolean x; x = true; } print(x); }"), "true\n");
}

#[test]
fn redeclaration_resets_variable() {
    assert_failure("{ int x; x = 5; { int x; print(x); } }", ErrorKind::UninitializedAccess);
    assert_eq!(output("{ int x; int x; x = 1; print(x); }"), "1\n");
    assert_failure("{ int x; x = 1; { boolean x; x = 2; } }", ErrorKind::TypeMismatch);
}

#[test]
fn redeclaring_an_array_resets_it() {
    assert_failure("{ int a[2]; a[0] = 1; { int a[2]; print(a[0]); } }",
                   ErrorKind::UninitializedAccess);
    assert_failure("{ int a[2]; a[1] = 1; { int a[1]; a[1] = 2; } }", ErrorKind::OutOfBounds);
    assert_eq!(output("{ int a[1]; { int a[3]; a[2] = 4; print(a[2]); } }"), "4\n");

    let program = dragon::parse("{ int a[2]; { boolean a[5]; } }").unwrap();
    let mut context = Context::new(Vec::new());
    assert!(context.symbols().is_empty());
    context.interpret(&program).unwrap();
    assert_eq!(context.symbols().len(), 1);

    let array = context.symbols().get("a").unwrap();
    assert_eq!(array.size(), Some(5));
    assert_eq!(array.ty, ValueType::Bool);
}

#[test]
fn output_before_runtime_error_is_kept() {
    let (error, out) = failure("{ int x; x = 1; print(x); print(x + 1); print(x / 0); print(3); }");

    assert_eq!(error.kind(), ErrorKind::DivisionByZero);
    assert_eq!(out, "1\n2\n");
}

#[test]
fn syntax_error_produces_no_output() {
    let (error, out) = failure("{ print(1); print(2) }");

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert!(out.is_empty());
}

#[test]
fn error_messages_name_the_position() {
    let (error, _) = failure("{\n  int x;\n  print(x);\n}");
    assert!(error.to_string().starts_with("Error on line 3, column 9"), "{error}");

    let (error, _) = failure("{int x x;}");
    assert!(error.to_string().contains("line 1, column 8"), "{error}");
}

#[test]
fn runs_are_deterministic() {
    let src = "{ int i; i = 0; while (i < 5) { print(i * i); i = i + 1; } }";
    assert_eq!(output(src), output(src));
}

/// Accepts every write but fails to flush.
struct UnflushableSink(Vec<u8>);

impl Write for UnflushableSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("device full"))
    }
}

#[test]
fn failed_flush_is_an_output_error() {
    let mut sink = UnflushableSink(Vec::new());
    let error = run("{ print(1); }", &mut sink).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Output);
    assert!(error.to_string().contains("device full"), "{error}");
    assert_eq!(sink.0, b"1\n");

    // A runtime error takes precedence over the flush failure.
    let error = run("{ print(1 / 0); }", &mut UnflushableSink(Vec::new())).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn nesting_limit_applies_to_runs() {
    let src = format!("{{ print({}1{}); }}", "(".repeat(20_000), ")".repeat(20_000));
    assert_failure(&src, ErrorKind::Syntax);

    let src = format!("{{ print(0{}); }}", " + 1".repeat(100));
    assert_eq!(output(&src), "100\n");
}
