use std::{fs, path::Path};

use stringlift::arb::validate_append_target;

use crate::validation::validate_input_file;

pub fn run_check_command(input: String) -> Result<(), String> {
    validate_input_file(&input)?;

    let content =
        fs::read_to_string(&input).map_err(|e| format!("Failed to read input: {}", e))?;
    validate_append_target(Path::new(&input), &content).map_err(|e| e.to_string())?;

    println!("✅ {} accepts appends", input);
    Ok(())
}
