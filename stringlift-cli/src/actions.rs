use std::fs;

use serde::Serialize;
use stringlift::{CodeAction, actions_for_line};

use crate::validation::validate_input_file;

#[derive(Debug, Serialize)]
struct ActionsReport {
    file: String,
    actions: Vec<CodeAction>,
}

fn collect_actions(content: &str) -> Vec<CodeAction> {
    content
        .split('\n')
        .enumerate()
        .flat_map(|(index, line)| actions_for_line(line, index))
        .collect()
}

pub fn run_actions_command(input: String, json_output: bool) -> Result<(), String> {
    validate_input_file(&input)?;

    let content =
        fs::read_to_string(&input).map_err(|e| format!("Failed to read input: {}", e))?;
    let actions = collect_actions(&content);

    if json_output {
        let report = ActionsReport {
            file: input,
            actions,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    if actions.is_empty() {
        println!("No localizable lines found in {}", input);
        return Ok(());
    }

    println!("=== Actions for {} ===", input);
    for action in &actions {
        println!("line {}: {}", action.line, action.title);
    }
    Ok(())
}
