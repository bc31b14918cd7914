// Line input shared by the command loop and confirmation prompts

use std::cell::RefCell;
use std::io::{self, BufRead};
use std::rc::Rc;

/// One reader handed out to several consumers
///
/// The session reads commands through it as an iterator while the delete
/// prompt reads its answer from the same stream, so a `y`/`n` typed after
/// `delete` is never mistaken for a command.
#[derive(Debug)]
pub struct SharedInput<R> {
    inner: Rc<RefCell<R>>,
}

impl<R> Clone for SharedInput<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: BufRead> SharedInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: Rc::new(RefCell::new(reader)),
        }
    }

    /// Read one line including its terminator; `Ok(0)` at end of input
    pub fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        self.inner.borrow_mut().read_line(buf)
    }
}

impl<R: BufRead> Iterator for SharedInput<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}
