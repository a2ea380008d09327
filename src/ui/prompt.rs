use std::io::{self, BufRead, Write};

use super::mode::PlayMode;

/// Ask which sides are human. Reads one line; end of input picks the default.
pub fn prompt_play_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PlayMode> {
    writeln!(output, "1: Black. human , White. CPU")?;
    writeln!(output, "2: Black. CPU , White. human")?;
    writeln!(output, "3: Black. human , White. human")?;
    write!(output, "select : ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PlayMode::from_choice(&line))
}
