#[cfg(test)]
mod parser_tests {
    use pretty_assertions::assert_eq;

    use rox::ast::{Expr, ExprId, LiteralValue, Stmt};
    use rox::ast_printer::AstPrinter;
    use rox::error::LoxError;
    use rox::parser::Parser;
    use rox::scanner::scan;

    fn parse_program(source: &str) -> Result<Vec<Stmt>, Vec<LoxError>> {
        let (tokens, errors) = scan(source);
        assert!(errors.is_empty(), "unexpected lex errors: {:?}", errors);

        Parser::new(tokens).parse()
    }

    fn print_expr(source: &str) -> String {
        let (tokens, _) = scan(source);
        let expr = Parser::new(tokens)
            .parse_expression()
            .expect("expression should parse");

        AstPrinter::print(&expr)
    }

    fn parse_errors(source: &str) -> Vec<String> {
        parse_program(source)
            .expect_err("program should not parse")
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_grouping_and_precedence() {
        assert_eq!(print_expr("(1 + 2) * 3"), "(* (group (+ 1.0 2.0)) 3.0)");
        assert_eq!(
            print_expr("1 + 2 * 3 - 4 / 2"),
            "(- (+ 1.0 (* 2.0 3.0)) (/ 4.0 2.0))"
        );
        assert_eq!(print_expr("1 < 2 == true"), "(== (< 1.0 2.0) true)");
    }

    #[test]
    fn test_unary_is_right_recursive() {
        assert_eq!(print_expr("!-x"), "(! (- x))");
        assert_eq!(print_expr("--2.5"), "(- (- 2.5))");
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(print_expr("a or b and c"), "(or a (and b c))");
    }

    #[test]
    fn test_assignment_is_right_associative() {
        assert_eq!(print_expr("a = b = 3"), "(= a (= b 3.0))");
        assert_eq!(print_expr("obj.field = 1"), "(=. obj field 1.0)");
    }

    #[test]
    fn test_calls_and_property_chains() {
        assert_eq!(print_expr("f(1)(2).g"), "(. (call (call f 1.0) 2.0) g)");
        assert_eq!(print_expr("f()"), "(call f)");
        assert_eq!(print_expr("super.m"), "(super m)");
        assert_eq!(print_expr("this.x"), "(. this x)");
    }

    #[test]
    fn test_expression_must_consume_all_input() {
        let (tokens, _) = scan("1 2");
        let errors = Parser::new(tokens).parse_expression().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "[line 1] Error at '2': Expect end of expression."
        );
    }

    #[test]
    fn test_for_is_desugared_into_while() {
        let statements = parse_program("for (var i = 0; i < 3; i = i + 1) print i;").unwrap();
        assert_eq!(statements.len(), 1);

        let Stmt::Block(outer) = &statements[0] else {
            panic!("expected block, got {:?}", statements[0]);
        };

        assert!(matches!(outer[0], Stmt::Var { .. }));

        let Stmt::While { body, .. } = &outer[1] else {
            panic!("expected while, got {:?}", outer[1]);
        };

        let Stmt::Block(inner) = body.as_ref() else {
            panic!("expected block body, got {:?}", body);
        };

        assert!(matches!(inner[0], Stmt::Print(_)));
        assert!(matches!(inner[1], Stmt::Expression(Expr::Assign { .. })));
    }

    #[test]
    fn test_for_without_clauses_loops_on_true() {
        let statements = parse_program("for (;;) print 1;").unwrap();

        let Stmt::While { condition, body } = &statements[0] else {
            panic!("expected while, got {:?}", statements[0]);
        };

        assert_eq!(*condition, Expr::Literal(LiteralValue::True));
        assert!(matches!(body.as_ref(), Stmt::Print(_)));
    }

    #[test]
    fn test_class_declaration() {
        let statements = parse_program(
            "class B < A { init(x) { this.x = x; } get() { return this.x; } }",
        )
        .unwrap();

        let Stmt::Class {
            name,
            superclass,
            methods,
        } = &statements[0]
        else {
            panic!("expected class, got {:?}", statements[0]);
        };

        assert_eq!(name.lexeme, "B");
        assert!(matches!(superclass, Some(Expr::Variable { name, .. }) if name.lexeme == "A"));

        let names: Vec<&str> = methods.iter().map(|m| m.name.lexeme.as_str()).collect();
        assert_eq!(names, vec!["init", "get"]);
        assert_eq!(methods[0].params.len(), 1);
    }

    #[test]
    fn test_each_variable_occurrence_gets_its_own_id() {
        let statements = parse_program("a; a;").unwrap();

        let ids: Vec<_> = statements
            .iter()
            .map(|stmt| match stmt {
                Stmt::Expression(Expr::Variable { id, .. }) => *id,
                other => panic!("expected variable, got {:?}", other),
            })
            .collect();

        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_ids_continue_from_the_first_id() {
        let (tokens, _) = scan("a = b;");
        let mut parser = Parser::with_first_id(tokens, ExprId(10));

        let statements = parser.parse().unwrap();

        let Stmt::Expression(Expr::Assign { id, value, .. }) = &statements[0] else {
            panic!("expected assignment, got {:?}", statements[0]);
        };
        let Expr::Variable { id: read_id, .. } = value.as_ref() else {
            panic!("expected variable, got {:?}", value);
        };

        // `a` is read as a variable (10) before `=` turns it into a target.
        assert_eq!(*read_id, ExprId(11));
        assert_eq!(*id, ExprId(12));
        assert_eq!(parser.next_id(), ExprId(13));
    }

    #[test]
    fn test_invalid_assignment_target() {
        assert_eq!(
            parse_errors("1 = 2;"),
            vec!["[line 1] Error at '=': Invalid assignment target."]
        );
    }

    #[test]
    fn test_errors_are_collected_after_synchronizing() {
        assert_eq!(
            parse_errors("var = 1;\nprint 2;\nvar x = ;\n"),
            vec![
                "[line 1] Error at '=': Expect variable name.",
                "[line 3] Error at ';': Expect expression.",
            ]
        );
    }

    #[test]
    fn test_error_at_end() {
        assert_eq!(
            parse_errors("print 1"),
            vec!["[line 1] Error at end: Expect ';' after value."]
        );
    }

    #[test]
    fn test_too_many_arguments() {
        let arguments = vec!["0"; 256].join(", ");
        let errors = parse_errors(&format!("f({});", arguments));

        assert_eq!(errors.len(), 1);
        assert!(errors[0].ends_with("Can't have more than 255 arguments."));
    }

    #[test]
    fn test_too_many_parameters() {
        let params: Vec<String> = (0..256).map(|i| format!("p{}", i)).collect();
        let errors = parse_errors(&format!("fun f({}) {{}}", params.join(", ")));

        assert_eq!(errors.len(), 1);
        assert!(errors[0].ends_with("Can't have more than 255 parameters."));
    }
}
