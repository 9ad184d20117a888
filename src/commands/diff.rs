use crate::areas::toolbox::Toolbox;
use crate::artifacts::diff::{
    Change, ChangeFilter, ChangeTag, DiffOptions, EditScript, diff_lines, diff_trimmed_lines,
};
use colored::Colorize;

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

#[derive(Debug, Clone, Copy, Default)]
pub struct DiffCommandOptions {
    pub options: DiffOptions,
    pub trimmed: bool,
    pub filter: ChangeFilter,
    pub stat: bool,
}

impl Toolbox {
    pub fn diff(&self, old: &str, new: &str, opts: &DiffCommandOptions) -> anyhow::Result<()> {
        let script = if opts.trimmed {
            diff_trimmed_lines(old, new, opts.options)
        } else {
            diff_lines(old, new, opts.options)
        }
        .unwrap_or_default();

        let changes = script.changes();
        for (i, change) in changes.iter().enumerate() {
            if !opts.filter.matches(change) {
                continue;
            }

            // the last run touching a side holds that side's final line
            let ends_side = !changes[i + 1..]
                .iter()
                .any(|later| later.is_unchanged() || later.tag == change.tag);
            self.print_change(change, ends_side)?;
        }

        if opts.stat {
            self.print_stat(&script)?;
        }

        Ok(())
    }

    fn print_change(&self, change: &Change, ends_side: bool) -> anyhow::Result<()> {
        for line in change.value.split_inclusive('\n') {
            let (content, terminated) = match line.strip_suffix('\n') {
                Some(content) => (content.strip_suffix('\r').unwrap_or(content), true),
                None => (line, false),
            };

            let rendered = format!("{} {}", change.tag.prefix(), content);
            let rendered = match change.tag {
                ChangeTag::Added => rendered.green(),
                ChangeTag::Removed => rendered.red(),
                ChangeTag::Unchanged => rendered.normal(),
            };
            writeln!(self.writer(), "{rendered}")?;

            if !terminated && ends_side {
                writeln!(self.writer(), "{NO_NEWLINE_MARKER}")?;
            }
        }

        Ok(())
    }

    fn print_stat(&self, script: &EditScript) -> anyhow::Result<()> {
        let (added, removed) = script.stats();

        writeln!(
            self.writer(),
            "{} line(s) added, {} line(s) removed",
            added.to_string().green(),
            removed.to_string().red()
        )?;

        Ok(())
    }
}
