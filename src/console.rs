use std::io::{self, Write};

use colored::*;

/// Line-oriented sink that animals print through.
///
/// Plain by default so the bytes written are exactly the text given.
/// With color on, names and sounds get styled the way a terminal
/// listing would show them.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    color: bool,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Console { out, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write an animal's name on its own line
    pub fn name(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.cyan().bold())
        } else {
            writeln!(self.out, "{}", text)
        }
    }

    /// Write a sound sentence on its own line
    pub fn sound(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.yellow())
        } else {
            writeln!(self.out, "{}", text)
        }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
