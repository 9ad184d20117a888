use crate::artifacts::core::error::ToolError;
use std::cell::{Cell, RefCell, RefMut};
use std::io::Write;

/// Entry point of every command.
///
/// Commands write their results to the injected writer. A tool failure is
/// reported on the same writer and marks the run as failed, so the caller
/// can pick the exit status once the command returns.
pub struct Toolbox {
    writer: RefCell<Box<dyn Write>>,
    failed: Cell<bool>,
}

impl Toolbox {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Toolbox {
            writer: RefCell::new(writer),
            failed: Cell::new(false),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn failed(&self) -> bool {
        self.failed.get()
    }

    pub(crate) fn mark_failed(&self) {
        self.failed.set(true);
    }

    /// Writes a tool result, or `error: <message>` when the tool failed.
    pub(crate) fn report(&self, result: Result<String, ToolError>) -> anyhow::Result<()> {
        match result {
            Ok(output) => writeln!(self.writer(), "{output}")?,
            Err(e) => {
                tracing::debug!(operation = e.operation(), "tool failed");
                self.mark_failed();
                writeln!(self.writer(), "error: {e}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::Toolbox;
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    /// Writer whose contents stay readable after the toolbox takes ownership.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn toolbox() -> (Toolbox, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Toolbox::new(Box::new(buffer.clone())), buffer)
    }

    #[test]
    fn reports_errors_inline_and_marks_failure() {
        let (toolbox, output) = toolbox();

        toolbox
            .report(crate::artifacts::encoding::base64::decode("%%%"))
            .unwrap();

        assert!(toolbox.failed());
        assert!(output.contents().starts_with("error: base64-decode failed"));
    }

    #[test]
    fn successful_results_leave_status_untouched() {
        let (toolbox, output) = toolbox();

        toolbox.report(Ok("done".to_string())).unwrap();

        assert!(!toolbox.failed());
        assert_eq!(output.contents(), "done\n");
    }
}
