//! Command-line interface for qflow
//! This binary inspects marked workflow scripts outside the editor.
//!
//! Usage:
//!   qflow sections `<path>`                         - Print extracted sections as JSON
//!   qflow import `<path>` [--prefix `<p>`]            - Print imported node descriptors as JSON
//!   qflow highlight `<path>` --node-type `<t>` [...]  - Print the highlight range for a node as JSON
//!   qflow localize `<path>`                         - Rewrite STEP 0 for local simulation

use clap::{Arg, Command};

use qflow::qflow::config::use_local_simulator;
use qflow::qflow::document::highlight_for_node;
use qflow::qflow::import::import_document;
use qflow::qflow::resolve::NodeIdentity;
use qflow::qflow::section::extract_sections;

fn main() {
    let matches = Command::new("qflow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting marked quantum workflow scripts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("sections")
                .about("Print the document's node sections as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the marked script")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import the document into node descriptors, printed as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the marked script")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .short('p')
                        .help("Prefix for generated node ids")
                        .default_value("node-"),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Print the highlight range for a node identity as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the marked script")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("node-type")
                        .long("node-type")
                        .help("The node's type, e.g. 'runtimeNode'")
                        .required(true),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("Optional category refining the type"),
                )
                .arg(
                    Arg::new("label")
                        .long("label")
                        .help("Optional label refining the type"),
                ),
        )
        .subcommand(
            Command::new("localize")
                .about("Rewrite the STEP 0 config for local simulation and print the script")
                .arg(
                    Arg::new("path")
                        .help("Path to the marked script")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("sections", sub)) => {
            let document = read_document(sub.get_one::<String>("path").unwrap());
            print_json(&extract_sections(&document));
        }
        Some(("import", sub)) => {
            let document = read_document(sub.get_one::<String>("path").unwrap());
            let prefix = sub.get_one::<String>("prefix").unwrap();
            print_json(&import_document(&document, prefix));
        }
        Some(("highlight", sub)) => {
            let document = read_document(sub.get_one::<String>("path").unwrap());
            let identity = NodeIdentity {
                node_type: sub.get_one::<String>("node-type").unwrap().clone(),
                category: sub.get_one::<String>("category").cloned(),
                label: sub.get_one::<String>("label").cloned(),
            };
            // "nothing matched" serializes as null; it is not an error
            print_json(&highlight_for_node(&document, &identity));
        }
        Some(("localize", sub)) => {
            let document = read_document(sub.get_one::<String>("path").unwrap());
            print!("{}", use_local_simulator(&document));
        }
        _ => unreachable!(),
    }
}

fn read_document(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}
