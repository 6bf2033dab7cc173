//! tri-state CLI
//!
//! Cycle, parse, and display yes/no/unknown checkbox values, or edit a
//! form of them interactively.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tri_state_checkbox::adapter::{
    TemplateOptions, render_checkbox_template, resolve_from_binary_event,
};
use tri_state_checkbox::config::Config;
use tri_state_checkbox::cycle::cycle_tri_state;
use tri_state_checkbox::form::TriStateForm;
use tri_state_checkbox::logging::init_tracing;
use tri_state_checkbox::report::{describe, format_form, format_state};
use tri_state_checkbox::tui;
use tri_state_checkbox::types::{IconSet, OutputFormat, ParsePolicy, TriState};

#[derive(Parser)]
#[command(name = "tri-state")]
#[command(about = "Yes/no/unknown checkbox values: cycle, parse, display")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value that follows VALUE in the cycle null → true → false
    Cycle {
        /// Current value: true, false or null
        value: String,

        /// Number of steps to advance
        #[arg(long, default_value_t = 1)]
        times: u32,
    },

    /// Parse text into a tri-state value
    Parse {
        /// Text to parse
        text: String,

        /// Reject anything other than true, false, null or empty
        #[arg(long)]
        strict: bool,
    },

    /// Show label, style, icon and widget attributes for a value
    Show {
        /// Value: true, false or null
        value: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Icon set prefix (pi, fa, or a custom prefix)
        #[arg(long)]
        icon_set: Option<String>,
    },

    /// Resolve the next value after a binary checkbox emitted a boolean
    Resolve {
        /// Current value: true, false or null
        current: String,

        /// Boolean emitted by the checkbox
        #[arg(action = clap::ArgAction::Set)]
        emitted: bool,
    },

    /// Print checkbox markup bound to a form field
    Template {
        /// Form control name
        field: String,

        /// Label text (default: "Has <field>?")
        #[arg(long)]
        label: Option<String>,

        /// Input id (default: field name)
        #[arg(long)]
        input_id: Option<String>,

        /// Input name (default: field name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Edit a form of tri-state checkboxes interactively
    Form {
        /// Field keys (default: fields from the config file)
        fields: Vec<String>,

        /// Format of the final form state printed on exit
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = dispatch(cli.command);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Commands that read presentation or parse settings from the config file.
fn needs_config(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Parse { .. } | Commands::Show { .. } | Commands::Form { .. }
    )
}

fn dispatch(command: Commands) -> Result<(), String> {
    let config = if needs_config(&command) {
        Config::load().map_err(|e| e.to_string())?
    } else {
        Config::default()
    };

    match command {
        Commands::Cycle { value, times } => cmd_cycle(&value, times),
        Commands::Parse { text, strict } => cmd_parse(&config, &text, strict),
        Commands::Show { value, format, icon_set } => {
            cmd_show(&config, &value, format.into(), icon_set.as_deref())
        }
        Commands::Resolve { current, emitted } => cmd_resolve(&current, emitted),
        Commands::Template { field, label, input_id, name } => {
            cmd_template(&field, label, input_id, name)
        }
        Commands::Form { fields, format } => cmd_form(&config, fields, format.into()),
    }
}

// ============================================================================
// ARGUMENT PARSING
// ============================================================================

/// Values given on the command line are always parsed strictly.
fn parse_value(text: &str) -> Result<TriState, String> {
    text.parse::<TriState>().map_err(|e| e.to_string())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_cycle(value: &str, times: u32) -> Result<(), String> {
    let mut value = parse_value(value)?;
    for _ in 0..times {
        value = cycle_tri_state(value);
    }
    println!("{}", value);
    Ok(())
}

fn cmd_parse(config: &Config, text: &str, strict: bool) -> Result<(), String> {
    let policy = if strict { ParsePolicy::Strict } else { config.parse_policy };
    let value = TriState::parse_with(text, policy).map_err(|e| e.to_string())?;
    println!("{}", value);
    Ok(())
}

fn cmd_show(
    config: &Config,
    value: &str,
    format: OutputFormat,
    icon_set: Option<&str>,
) -> Result<(), String> {
    let value = parse_value(value)?;
    let mut presentation = config.presentation();
    if let Some(name) = icon_set {
        presentation.icon_set =
            IconSet::from_name(name).ok_or_else(|| "Icon set must not be empty".to_string())?;
    }

    let report = describe(value, &presentation);
    println!("{}", format_state(&report, format).trim_end());
    Ok(())
}

fn cmd_resolve(current: &str, emitted: bool) -> Result<(), String> {
    let current = parse_value(current)?;
    println!("{}", resolve_from_binary_event(current, emitted));
    Ok(())
}

fn cmd_template(
    field: &str,
    label: Option<String>,
    input_id: Option<String>,
    name: Option<String>,
) -> Result<(), String> {
    if field.trim().is_empty() {
        return Err("Field name must not be empty".to_string());
    }
    let options = TemplateOptions {
        label,
        input_id,
        name,
        ..Default::default()
    };
    println!("{}", render_checkbox_template(field, &options));
    Ok(())
}

fn cmd_form(config: &Config, fields: Vec<String>, format: OutputFormat) -> Result<(), String> {
    let form = if fields.is_empty() {
        config.form()
    } else {
        TriStateForm::from_keys(fields)
    };

    let form = tui::run(form, config.presentation()).map_err(|e| e.to_string())?;
    println!("{}", format_form(&form.snapshot(), format).trim_end());
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Commands {
        let argv = std::iter::once("tri-state").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn value_only_commands_skip_the_config_file() {
        assert!(!needs_config(&command(&["cycle", "null"])));
        assert!(!needs_config(&command(&["resolve", "true", "false"])));
        assert!(!needs_config(&command(&["template", "warranty"])));
    }

    #[test]
    fn presentation_commands_read_the_config_file() {
        assert!(needs_config(&command(&["parse", "maybe"])));
        assert!(needs_config(&command(&["show", "true"])));
        assert!(needs_config(&command(&["form", "isActive"])));
    }

    #[test]
    fn value_only_commands_run_without_config() {
        assert_eq!(dispatch(command(&["cycle", "null", "--times", "2"])), Ok(()));
        assert_eq!(dispatch(command(&["resolve", "null", "true"])), Ok(()));
        assert!(dispatch(command(&["cycle", "maybe"])).is_err());
    }
}
