/// Output peripheral for the two print instructions. PRN lands in
/// `print_num`, PRA in `print_char`; both are ordered, synchronous side
/// effects with no return value.
pub trait Ls8Console {
    fn print_num(&mut self, value: u8);
    fn print_char(&mut self, value: u8);
}

/// Console that captures output into a string instead of a terminal. The
/// test suites run programs against it; embedders can too.
pub struct BufferConsole {
    out: String,
}

impl BufferConsole {
    pub fn new() -> BufferConsole {
        BufferConsole { out: String::new() }
    }

    pub fn contents(&self) -> &str {
        &self.out
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

impl Ls8Console for BufferConsole {
    fn print_num(&mut self, value: u8) {
        self.out.push_str(&value.to_string());
    }

    fn print_char(&mut self, value: u8) {
        self.out.push(value as char);
    }
}
