use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered in recital-core's FormatRegistry.
// Build scripts can't reach the library, so the list is duplicated here.
const AVAILABLE_FORMATS: &[&str] = &["bookmarks", "fragment", "html"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Lesson file")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("recital")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lesson-plan markdown into standalone HTML")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        )),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("bookmarks").arg(input()))
        .subcommand(Command::new("generate-template"));

    generate_to(Bash, &mut cmd, "recital", &outdir)?;
    generate_to(Zsh, &mut cmd, "recital", &outdir)?;
    generate_to(Fish, &mut cmd, "recital", &outdir)?;

    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
