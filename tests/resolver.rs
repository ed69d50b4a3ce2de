#[cfg(test)]
mod resolver_tests {
    use pretty_assertions::assert_eq;

    use rox::lox::EXIT_STATIC;
    use rox::{Failure, Lox, Output};

    /// Run `source` and return the static errors it was rejected with,
    /// checking that nothing executed.
    fn static_errors(source: &str) -> Vec<String> {
        let output = Output::buffer();
        let mut lox = Lox::with_output(output.clone());

        let failure = lox.run(source).expect_err("program should be rejected");

        assert!(
            matches!(failure, Failure::Static(_)),
            "expected static errors, got {:?}",
            failure
        );
        assert_eq!(failure.exit_code(), EXIT_STATIC);
        assert_eq!(output.contents(), "", "nothing may run after a static error");

        failure.errors().iter().map(ToString::to_string).collect()
    }

    fn run_ok(source: &str) -> String {
        let output = Output::buffer();
        let mut lox = Lox::with_output(output.clone());

        if let Err(failure) = lox.run(source) {
            panic!("program failed: {}", failure);
        }

        output.contents()
    }

    #[test]
    fn test_read_in_own_initializer() {
        assert_eq!(
            static_errors("{ var a = 1; { var a = a; } }"),
            vec!["[line 1] Error at 'a': Can't read local variable in its own initializer."]
        );
    }

    #[test]
    fn test_global_may_mention_itself() {
        assert_eq!(run_ok("var a = 1; var a = a + 1; print a;"), "2\n");
    }

    #[test]
    fn test_top_level_return() {
        assert_eq!(
            static_errors("print 1;\nreturn 2;"),
            vec!["[line 2] Error at 'return': Can't return from top-level code."]
        );
    }

    #[test]
    fn test_return_value_from_initializer() {
        assert_eq!(
            static_errors("class A { init() { return 1; } }"),
            vec!["[line 1] Error at 'return': Can't return a value from an initializer."]
        );
    }

    #[test]
    fn test_bare_return_from_initializer_is_allowed() {
        assert_eq!(
            run_ok("class A { init() { return; } } print A();"),
            "A instance\n"
        );
    }

    #[test]
    fn test_this_outside_class() {
        assert_eq!(
            static_errors("print this;"),
            vec!["[line 1] Error at 'this': Can't use 'this' outside of a class."]
        );
        assert_eq!(
            static_errors("fun f() { return this; }"),
            vec!["[line 1] Error at 'this': Can't use 'this' outside of a class."]
        );
    }

    #[test]
    fn test_super_misuse() {
        assert_eq!(
            static_errors("fun f() { super.g(); }"),
            vec!["[line 1] Error at 'super': Can't use 'super' outside of a class."]
        );
        assert_eq!(
            static_errors("class A { f() { super.f(); } }"),
            vec!["[line 1] Error at 'super': Can't use 'super' in a class with no superclass."]
        );
    }

    #[test]
    fn test_class_inheriting_from_itself() {
        assert_eq!(
            static_errors("class A < A {}"),
            vec!["[line 1] Error at 'A': A class can't inherit from itself."]
        );
    }

    #[test]
    fn test_duplicate_local() {
        assert_eq!(
            static_errors("{\n  var a = 1;\n  var a = 2;\n}"),
            vec!["[line 3] Error at 'a': Already a variable with this name in this scope."]
        );
        assert_eq!(
            static_errors("fun f(a, a) {}"),
            vec!["[line 1] Error at 'a': Already a variable with this name in this scope."]
        );
    }

    #[test]
    fn test_every_error_is_reported() {
        let errors = static_errors("return 1;\nprint this;\n{ var b = b; }");

        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("[line 1]"));
        assert!(errors[1].starts_with("[line 2]"));
        assert!(errors[2].starts_with("[line 3]"));
    }

    #[test]
    fn test_closure_binds_at_declaration() {
        let source = r#"
            var a = "global";
            {
                fun showA() { print a; }
                showA();
                var a = "block";
                showA();
            }
        "#;

        assert_eq!(run_ok(source), "global\nglobal\n");
    }

    #[test]
    fn test_parse_errors_stop_before_resolution() {
        let errors = static_errors("print ;\nreturn 1;");

        // The parse error is reported; the misplaced return is never looked at.
        assert_eq!(errors, vec!["[line 1] Error at ';': Expect expression."]);
    }
}
