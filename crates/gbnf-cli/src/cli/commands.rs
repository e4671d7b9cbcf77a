//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gbnf")
        .about("Compile extended-BNF grammars into binary sampling rules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(print_command())
        .subcommand(compile_command())
        .subcommand(dump_command())
}

/// Validate a grammar.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a grammar")
        .override_usage(
            "\
  gbnf check <GRAMMAR>
  gbnf check -g <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  gbnf check json.gbnf                # validate a grammar file
  gbnf check -g 'root ::= [0-9]+'    # validate inline text
  cat json.gbnf | gbnf check -       # validate stdin"#,
        )
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(color_arg())
}

/// Compile and print the round-tripped grammar text.
pub fn print_command() -> Command {
    Command::new("print")
        .about("Compile a grammar and print its desugared form")
        .after_help(
            r#"EXAMPLES:
  gbnf print json.gbnf                # show synthesized repetition rules
  gbnf print -g 'root ::= "a"+'"#,
        )
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(color_arg())
}

/// Compile a grammar to the binary container.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile a grammar to a binary rule file")
        .after_help(
            r#"EXAMPLES:
  gbnf compile json.gbnf              # writes json.gbc
  gbnf compile json.gbnf -o out.gbc"#,
        )
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(output_arg())
        .arg(color_arg())
}

/// Inspect a compiled grammar.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print the rules of a compiled grammar file")
        .after_help(
            r#"EXAMPLES:
  gbnf dump json.gbc                  # grammar text
  gbnf dump json.gbc --json           # raw (kind, value) elements"#,
        )
        .arg(module_path_arg())
        .arg(json_arg())
}
