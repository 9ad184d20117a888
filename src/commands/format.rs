use crate::areas::toolbox::Toolbox;
use crate::artifacts::formatting::Syntax;

impl Toolbox {
    pub fn format(&self, syntax: Syntax, text: &str) -> anyhow::Result<()> {
        self.report(syntax.format(text))
    }

    /// Prints `valid` or `invalid`; invalid input fails the run.
    pub fn check(&self, syntax: Syntax, text: &str) -> anyhow::Result<()> {
        if syntax.validate(text) {
            writeln!(self.writer(), "valid")?;
        } else {
            self.mark_failed();
            writeln!(self.writer(), "invalid")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::toolbox::tests::toolbox;
    use crate::artifacts::formatting::Syntax;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn pretty_prints_json() {
        let (toolbox, output) = toolbox();

        toolbox.format(Syntax::Json, r#"{"b":1,"a":[true]}"#).unwrap();

        assert_eq!(
            output.contents(),
            "{\n  \"b\": 1,\n  \"a\": [\n    true\n  ]\n}\n"
        );
    }

    #[rstest]
    #[case(Syntax::Json, "{\"a\": }", "error: json-format failed: Invalid JSON")]
    #[case(Syntax::Yaml, "name value", "error: yaml-format failed: Invalid YAML format")]
    fn reports_unformattable_input(
        #[case] syntax: Syntax,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        let (toolbox, output) = toolbox();

        toolbox.format(syntax, input).unwrap();

        assert!(toolbox.failed());
        assert!(output.contents().starts_with(expected));
    }

    #[rstest]
    #[case(Syntax::Json, "[1, 2]", "valid\n", false)]
    #[case(Syntax::Json, "[1, 2", "invalid\n", true)]
    #[case(Syntax::Yaml, "key: value", "valid\n", false)]
    #[case(Syntax::Yaml, "-item", "invalid\n", true)]
    fn checks_syntax(
        #[case] syntax: Syntax,
        #[case] input: &str,
        #[case] expected: &str,
        #[case] failed: bool,
    ) {
        let (toolbox, output) = toolbox();

        toolbox.check(syntax, input).unwrap();

        assert_eq!(output.contents(), expected);
        assert_eq!(toolbox.failed(), failed);
    }
}
