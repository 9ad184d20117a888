use crate::areas::toolbox::Toolbox;
use crate::artifacts::validation::NationalId;

impl Toolbox {
    /// Checks a CPF or CNPJ. The kind is detected from the digit count
    /// unless given.
    pub fn validate_id(&self, id: &str, kind: Option<NationalId>) -> anyhow::Result<()> {
        let id = id.trim();

        let Some(kind) = kind.or_else(|| NationalId::detect(id)) else {
            self.mark_failed();
            writeln!(
                self.writer(),
                "invalid: {id} is neither a CPF (11 digits) nor a CNPJ (14 digits)"
            )?;
            return Ok(());
        };

        let shown = kind.mask(id).unwrap_or_else(|| id.to_string());
        if kind.validate(id) {
            writeln!(self.writer(), "valid {kind}: {shown}")?;
        } else {
            self.mark_failed();
            writeln!(self.writer(), "invalid {kind}: {shown}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::toolbox::tests::toolbox;
    use crate::artifacts::validation::NationalId;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("52998224725", None, "valid CPF: 529.982.247-25\n", false)]
    #[case("11.222.333/0001-81", None, "valid CNPJ: 11.222.333/0001-81\n", false)]
    #[case("111.444.777-36", None, "invalid CPF: 111.444.777-36\n", true)]
    #[case("52998224725", Some(NationalId::Cnpj), "invalid CNPJ: 52998224725\n", true)]
    fn reports_validity(
        #[case] id: &str,
        #[case] kind: Option<NationalId>,
        #[case] expected: &str,
        #[case] failed: bool,
    ) {
        let (toolbox, output) = toolbox();

        toolbox.validate_id(id, kind).unwrap();

        assert_eq!(output.contents(), expected);
        assert_eq!(toolbox.failed(), failed);
    }

    #[test]
    fn rejects_unknown_lengths() {
        let (toolbox, output) = toolbox();

        toolbox.validate_id("12345", None).unwrap();

        assert!(toolbox.failed());
        assert!(output.contents().starts_with("invalid: 12345 is neither"));
    }
}
