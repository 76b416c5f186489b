use crate::cli::ComplementArgs;
use crate::screen::reverse_complement;
use crate::utils::{read_sequence, Result};

pub fn complement(args: ComplementArgs) -> Result<()> {
    let sequence = read_sequence(&args.sequence_path)?;
    println!("{}", reverse_complement(&sequence));
    Ok(())
}
