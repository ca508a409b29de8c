use clap::Parser;
use dynaform::prelude::*;
use std::fs;
use std::io::{self, Write};

/// A declarative form evaluation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the form schema JSON file
    schema_path: Option<String>,
    /// Optional path to the initial values JSON file
    values_path: Option<String>,

    /// Print the compiled validation rule set
    #[arg(short, long)]
    rules: bool,

    /// Print the structured, null-defaulted output
    #[arg(short, long)]
    structured: bool,

    /// Run in interactive mode: `path=value` edits, `:q` to quit
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    let schema_path = cli.schema_path.clone().unwrap_or_else(|| {
        exit_with_error("Schema path is required.");
    });

    let schema_json = fs::read_to_string(&schema_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read schema file '{}': {}",
            &schema_path, e
        ))
    });
    let fields: Vec<SchemaNode> = serde_json::from_str(&schema_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse schema JSON: {}", e)));

    if let Err(error) = validate_declaration(&fields) {
        eprintln!("Warning: {}", error);
    }

    let values: ValueTree = match &cli.values_path {
        Some(path) => {
            let values_json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read values file '{}': {}", path, e))
            });
            serde_json::from_str(&values_json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse values JSON: {}", e)))
        }
        None => ValueTree::new(),
    };

    let mut session = FormSession::builder(fields).values(values).build();

    if cli.human {
        run_interactive(&mut session);
        return;
    }

    print_visible(&session);

    if cli.rules {
        println!("\n--- Compiled Rule Set ---");
        let rendered = serde_json::to_string_pretty(session.rules())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render rule set: {}", e)));
        println!("{}", rendered);
    }

    if cli.structured {
        println!("\n--- Structured Output ---");
        let rendered = serde_json::to_string_pretty(&session.structured_values())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render output: {}", e)));
        println!("{}", rendered);
    }
}

/// Prints the currently visible tree with values and errors.
fn print_visible(session: &FormSession) {
    println!("--- Visible Fields ---");
    let mut printer = TreePrinter { indent: 0 };
    session.render(&mut printer);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(session: &mut FormSession) {
    println!("--- Dynaform Interactive Mode ---");
    println!("Type `path=value` to edit a field, `:out` for structured output, `:q` to quit.");

    loop {
        print_visible(session);

        let line = prompt_for_input("edit");
        match line.trim() {
            ":q" => break,
            ":out" => {
                match serde_json::to_string_pretty(&session.structured_values()) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => eprintln!("Failed to render output: {}", e),
                }
                continue;
            }
            "" => continue,
            edit => match edit.split_once('=') {
                Some((path, raw)) => session.set_field(path.trim(), parse_value(raw)),
                None => println!("Invalid input. Use `path=value`."),
            },
        }
    }
}

/// Interprets a raw CLI token as a form value: empty clears to null, booleans
/// and numbers are recognized, anything else stays text.
fn parse_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(flag) = trimmed.parse::<bool>() {
        return Value::Bool(flag);
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        return Value::Number(number);
    }
    Value::Text(trimmed.to_string())
}

struct TreePrinter {
    indent: usize,
}

impl FormRenderer for TreePrinter {
    fn field(&mut self, field: &FieldNode, context: FieldContext<'_>) {
        let pad = "  ".repeat(self.indent);
        let value = context
            .value
            .map_or("<unset>".to_string(), |value| value.to_string());
        match context.error {
            Some(error) => println!(
                "{}{} ({:?}) = {}  !! {}",
                pad, context.path, field.kind, value, error
            ),
            None => println!("{}{} ({:?}) = {}", pad, context.path, field.kind, value),
        }
    }

    fn group_start(&mut self, group: &GroupNode) {
        let pad = "  ".repeat(self.indent);
        match &group.name {
            Some(name) => println!("{}[{}]", pad, name),
            None => println!("{}[group]", pad),
        }
        self.indent += 1;
    }

    fn group_end(&mut self, _group: &GroupNode) {
        self.indent -= 1;
    }

    fn separator(&mut self, _separator: &SeparatorNode) {
        println!("{}--------", "  ".repeat(self.indent));
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    if io::stdin().read_line(&mut line).is_err() {
        return ":q".to_string();
    }
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
