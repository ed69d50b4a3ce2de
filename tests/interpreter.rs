#[cfg(test)]
mod interpreter_tests {
    use pretty_assertions::assert_eq;

    use rox::lox::EXIT_RUNTIME;
    use rox::{Failure, Lox, Output, Value};

    fn run(source: &str) -> (String, Result<(), Failure>) {
        let output = Output::buffer();
        let mut lox = Lox::with_output(output.clone());

        let result = lox.run(source);

        (output.contents(), result)
    }

    fn run_ok(source: &str) -> String {
        let (output, result) = run(source);

        if let Err(failure) = result {
            panic!("program failed: {}\noutput so far:\n{}", failure, output);
        }

        output
    }

    /// Output printed before the halt, and the rendered runtime error.
    fn run_err(source: &str) -> (String, String) {
        let (output, result) = run(source);

        match result {
            Err(failure @ Failure::Runtime(_)) => {
                assert_eq!(failure.exit_code(), EXIT_RUNTIME);
                (output, failure.to_string())
            }
            Err(other) => panic!("expected a runtime error, got: {}", other),
            Ok(()) => panic!("program should have failed; printed:\n{}", output),
        }
    }

    fn evaluate(source: &str) -> Value {
        Lox::with_output(Output::buffer())
            .evaluate(source)
            .unwrap_or_else(|failure| panic!("evaluation failed: {}", failure))
    }

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(evaluate("(1 + 2) * 3"), Value::Number(9.0));
        assert_eq!(evaluate("10 - 4 / 2"), Value::Number(8.0));
        assert_eq!(evaluate("-(3)"), Value::Number(-3.0));
    }

    #[test]
    fn test_evaluate_strings_and_comparisons() {
        assert_eq!(evaluate("\"foo\" + \"bar\""), Value::String("foobar".into()));
        assert_eq!(evaluate("2 >= 2"), Value::Bool(true));
        assert_eq!(evaluate("1 > 2"), Value::Bool(false));
        assert_eq!(evaluate("!nil"), Value::Bool(true));
    }

    #[test]
    fn test_evaluate_reports_runtime_failure() {
        let failure = Lox::with_output(Output::buffer())
            .evaluate("\"a\" + 1")
            .unwrap_err();

        assert_eq!(failure.exit_code(), EXIT_RUNTIME);
        assert_eq!(
            failure.to_string(),
            "Operands must be two numbers or two strings.\n[line 1]"
        );
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(
            run_ok("print 3.0; print 2.5; print -0.5; print 1000000;"),
            "3\n2.5\n-0.5\n1000000\n"
        );
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        assert_eq!(
            run_ok("print 1 / 0; print -1 / 0; print 0 / 0;"),
            "Infinity\n-Infinity\nNaN\n"
        );
    }

    #[test]
    fn test_truthiness() {
        let source = r#"
            if (0) print "zero is truthy";
            if ("") print "empty string is truthy";
            if (nil) print "unreachable"; else print "nil is falsey";
            if (false) print "unreachable"; else print "false is falsey";
        "#;

        assert_eq!(
            run_ok(source),
            "zero is truthy\nempty string is truthy\nnil is falsey\nfalse is falsey\n"
        );
    }

    #[test]
    fn test_equality() {
        let source = r#"
            print nil == nil;
            print nil == false;
            print 1 == 1;
            print "a" == "a";
            print 1 == "1";
            print "a" != "b";
        "#;

        assert_eq!(run_ok(source), "true\nfalse\ntrue\ntrue\nfalse\ntrue\n");
    }

    #[test]
    fn test_logical_operators_short_circuit() {
        // `boom` is undefined: evaluating it would be a runtime error.
        let source = r#"
            print nil or "yes";
            print "first" or boom;
            print false and boom;
            print 1 and 2;
        "#;

        assert_eq!(run_ok(source), "yes\nfirst\nfalse\n2\n");
    }

    #[test]
    fn test_block_shadowing() {
        assert_eq!(
            run_ok("{ var a = 1; { var a = 2; print a; } print a; }"),
            "2\n1\n"
        );
    }

    #[test]
    fn test_assignment_updates_enclosing_scope() {
        let source = r#"
            var a = "outer";
            {
                a = "assigned";
                var b = a = "chained";
                print b;
            }
            print a;
        "#;

        assert_eq!(run_ok(source), "chained\nchained\n");
    }

    #[test]
    fn test_uninitialized_variable_is_nil() {
        assert_eq!(run_ok("var a; print a;"), "nil\n");
    }

    #[test]
    fn test_loops() {
        let source = r#"
            var sum = 0;
            for (var i = 1; i <= 4; i = i + 1) sum = sum + i;
            print sum;

            var n = 3;
            while (n > 0) { print n; n = n - 1; }
        "#;

        assert_eq!(run_ok(source), "10\n3\n2\n1\n");
    }

    #[test]
    fn test_type_errors() {
        assert_eq!(
            run_err("print \"a\" + 1;").1,
            "Operands must be two numbers or two strings.\n[line 1]"
        );
        assert_eq!(
            run_err("print -\"x\";").1,
            "Operand must be a number.\n[line 1]"
        );
        assert_eq!(
            run_err("print 1 < \"x\";").1,
            "Operands must be numbers.\n[line 1]"
        );
    }

    #[test]
    fn test_undefined_variable() {
        assert_eq!(run_err("print x;").1, "Undefined variable 'x'.\n[line 1]");
        assert_eq!(run_err("x = 1;").1, "Undefined variable 'x'.\n[line 1]");
    }

    #[test]
    fn test_runtime_error_halts_execution() {
        let (output, error) = run_err("print 1;\n\nprint nil + 1;\nprint 2;");

        assert_eq!(output, "1\n");
        assert_eq!(error, "Operands must be two numbers or two strings.\n[line 3]");
    }

    #[test]
    fn test_globals_persist_across_runs() {
        let output = Output::buffer();
        let mut lox = Lox::with_output(output.clone());

        lox.run("var a = 1; fun inc() { a = a + 1; }").unwrap();
        lox.run("inc(); print a;").unwrap();

        assert_eq!(output.contents(), "2\n");
    }

    #[test]
    fn test_later_runs_read_globals_after_nested_scopes() {
        let output = Output::buffer();
        let mut lox = Lox::with_output(output.clone());

        lox.run("{ var a = 1; { print a; } }").unwrap();
        lox.run("var b = 2; print b;").unwrap();

        assert_eq!(output.contents(), "1\n2\n");
    }

    #[test]
    fn test_later_runs_resolve_independently() {
        let output = Output::buffer();
        let mut lox = Lox::with_output(output.clone());

        lox.run("fun f(x) { return x; } print f(5);").unwrap();
        lox.run("var y = 1; var z = 7; { var y = 9; print z; print y; }")
            .unwrap();
        lox.run("print y;").unwrap();

        assert_eq!(output.contents(), "5\n7\n9\n1\n");
    }

    #[test]
    fn test_closure_from_earlier_run_keeps_working() {
        let output = Output::buffer();
        let mut lox = Lox::with_output(output.clone());

        lox.run("fun make() { var n = 0; fun inc() { n = n + 1; return n; } return inc; } var c = make();")
            .unwrap();
        lox.run("{ var n = 100; { print n; } }").unwrap();
        lox.run("print c(); print c();").unwrap();

        assert_eq!(output.contents(), "100\n1\n2\n");
    }

    #[test]
    fn test_evaluate_after_run_reads_globals() {
        let mut lox = Lox::with_output(Output::buffer());

        lox.run("var g = 3; { var l = 1; { print l; } }").unwrap();

        assert_eq!(lox.evaluate("g * 2").unwrap(), Value::Number(6.0));
    }

    #[test]
    fn test_extreme_numbers_print_in_exponent_form() {
        assert_eq!(
            run_ok("print 100000000000000000000000; print 0.00001;"),
            "1E+23\n1E-05\n"
        );
    }

    #[test]
    fn test_session_survives_a_runtime_error() {
        let output = Output::buffer();
        let mut lox = Lox::with_output(output.clone());

        assert!(lox.run("var a = 1; print a; a + nil;").is_err());

        output.clear();
        lox.run("print a;").unwrap();

        assert_eq!(output.contents(), "1\n");
    }
}
