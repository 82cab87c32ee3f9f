mod actions;
mod check;
mod console;
mod localize;
mod validation;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract the string literal on one line into the ARB resource files.
    Localize {
        /// The source file to edit in place
        #[arg(short, long)]
        input: String,

        /// 0-based index of the line holding the literal
        #[arg(short, long)]
        line: usize,

        /// Workspace root; inferred from the input path when omitted
        #[arg(short, long)]
        root: Option<String>,

        /// Foreign-language translation (prompted for when omitted)
        #[arg(long)]
        foreign: Option<String>,

        /// Base-language translation (prompted for when omitted)
        #[arg(long)]
        base: Option<String>,

        /// Localization key name (prompted for when omitted)
        #[arg(long)]
        key: Option<String>,

        /// Foreign-language locale code
        #[arg(long, default_value = "de")]
        foreign_lang: String,

        /// Base-language locale code
        #[arg(long, default_value = "en")]
        base_lang: String,
    },

    /// List the lines of a source file that offer a localize action.
    Actions {
        /// The source file to scan
        #[arg(short, long)]
        input: String,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Verify that a resource file accepts appends (ends with `}`).
    Check {
        /// The resource file to verify
        #[arg(short, long)]
        input: String,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Localize {
            input,
            line,
            root,
            foreign,
            base,
            key,
            foreign_lang,
            base_lang,
        } => localize::run_localize_command(
            input,
            line,
            root,
            foreign,
            base,
            key,
            foreign_lang,
            base_lang,
        ),
        Commands::Actions { input, json } => actions::run_actions_command(input, json),
        Commands::Check { input } => check::run_check_command(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
