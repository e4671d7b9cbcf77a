use std::fs;
use std::path::PathBuf;

use gbnf_grammar::{Grammar, GrammarElement, dump};

pub struct DumpArgs {
    pub module_path: PathBuf,
    pub json: bool,
}

#[derive(serde::Serialize)]
struct RuleJson<'a> {
    id: u32,
    name: Option<&'a str>,
    elements: &'a [GrammarElement],
}

pub fn run(args: DumpArgs) {
    let bytes = match fs::read(&args.module_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: failed to read {}: {}", args.module_path.display(), e);
            std::process::exit(1);
        }
    };

    let grammar = match Grammar::from_bytes(&bytes) {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("error: {}: {}", args.module_path.display(), e);
            std::process::exit(1);
        }
    };

    if args.json {
        let rules: Vec<RuleJson> = grammar
            .rules()
            .iter()
            .enumerate()
            .map(|(id, elements)| RuleJson {
                id: id as u32,
                name: grammar.name_of(id as u32),
                elements,
            })
            .collect();
        let json = serde_json::to_string_pretty(&rules).expect("rule tables serialize cleanly");
        println!("{}", json);
    } else {
        print!("{}", dump(&grammar));
    }
}
