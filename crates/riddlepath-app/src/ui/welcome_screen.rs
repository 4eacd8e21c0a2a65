use std::io::{self, Write};

pub fn show<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Solve every riddle to collect the letters of the hidden word.")?;
    writeln!(out, "Press Enter (or type :start) to begin, :quit to leave.")
}
