use std::io::{self, Write};
use std::path::PathBuf;
use crate::error::{Error, Result};

/// Ask for a font file or folder when none was given on the command line
pub fn get_user_input() -> Result<PathBuf> {
    print!("Enter the path to a font file or a folder of fonts: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::Config("no font path given".to_string()));
    }

    Ok(PathBuf::from(input))
}
