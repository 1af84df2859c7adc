//! Move chime.
//!
//! The chime is best effort: callers log failures and carry on.

use std::io::{self, Stdout, Write};

/// Something that can make a short sound.
pub trait Chime {
    /// Plays the chime once.
    fn play(&mut self) -> io::Result<()>;
}

/// Rings the terminal bell by writing BEL to the output.
#[derive(Debug)]
pub struct TerminalBell<W: Write = Stdout> {
    out: W,
}

impl TerminalBell<Stdout> {
    /// Creates a bell that rings on stdout.
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalBell<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell that writes to `out`.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Consumes the bell, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Chime for TerminalBell<W> {
    fn play(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

/// A chime that makes no sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Chime for Silent {
    fn play(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Picks the chime for the `sound` setting.
pub fn chime_for(sound: bool) -> Box<dyn Chime> {
    if sound {
        Box::new(TerminalBell::new())
    } else {
        Box::new(Silent)
    }
}
