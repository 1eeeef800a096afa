use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::collections::HashMap;
use vario_core::{explain, Checker, GenericDecl, Hierarchy, Slot, Variance};
use vario_lessons::{menagerie, standard_declarations};

#[derive(Parser, Debug)]
#[command(name = ":")]
struct Shell {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Register a nominal type with its direct supertypes.
    Type {
        name: String,
        supers: Vec<String>,
    },

    /// Declare a generic entity; each slot is one of co, contra, inv.
    Decl {
        name: String,
        slots: Vec<String>,
    },

    /// Declare a function shape with the given number of parameters.
    Fn {
        name: String,
        params: usize,
    },

    /// Ask whether the offered instantiation fits where the required one
    /// is expected, e.g. `:check Consumer[Cat] Consumer[Animal]`. No
    /// spaces inside the brackets.
    Check {
        required: String,
        offered: String,
    },

    /// Show the registered types and declarations.
    List,

    /// Exit the application.
    Exit,
}

struct Session {
    hierarchy: Hierarchy,
    decls: HashMap<String, GenericDecl>,
}

impl Session {
    fn preloaded() -> Self {
        let decls = standard_declarations()
            .into_iter()
            .map(|decl| (decl.name().to_string(), decl))
            .collect();

        Session {
            hierarchy: menagerie(),
            decls,
        }
    }

    fn register_type(&mut self, name: String, supers: Vec<String>) -> eyre::Result<()> {
        self.hierarchy.register(&name, supers)?;
        println!("type {} registered", name);

        Ok(())
    }

    fn declare(&mut self, name: String, slots: Vec<String>) -> eyre::Result<()> {
        let mut parsed = Vec::with_capacity(slots.len());

        for spec in &slots {
            let variance = match spec.as_str() {
                "co" => Variance::Covariant,
                "contra" => Variance::Contravariant,
                "inv" => Variance::Invariant,
                other => eyre::bail!("unknown slot spec '{}', expected co, contra or inv", other),
            };

            parsed.push(Slot::data(variance));
        }

        let decl = GenericDecl::declare(&name, parsed, false)?;

        for warning in decl.warnings() {
            println!("warning: {}", warning);
        }

        println!("declared {} with {} slot(s)", name, decl.slots().len());
        self.decls.insert(name, decl);

        Ok(())
    }

    fn declare_fn(&mut self, name: String, params: usize) {
        let decl = GenericDecl::function(&name, params);

        println!(
            "declared function shape {} with {} parameter(s)",
            name, params
        );
        self.decls.insert(name, decl);
    }

    fn check(&self, required: String, offered: String) -> eyre::Result<()> {
        let (req_name, req_args) = parse_instance(required.as_str())?;
        let (off_name, off_args) = parse_instance(offered.as_str())?;

        let Some(decl) = self.decls.get(req_name.as_str()) else {
            eyre::bail!("'{}' has not been declared", req_name);
        };

        let Some(off_decl) = self.decls.get(off_name.as_str()) else {
            eyre::bail!("'{}' has not been declared", off_name);
        };

        let required = decl.instantiate(req_args)?;
        let offered = off_decl.instantiate(off_args)?;
        let checker = Checker::new(&self.hierarchy);
        let verdict = checker.check(decl, &required, &offered)?;

        println!("{}", explain(&verdict));

        Ok(())
    }

    fn list(&self) {
        println!("types:");
        for name in self.hierarchy.names() {
            println!("  {}", name);
        }

        println!("declarations:");
        let mut names = self.decls.keys().collect::<Vec<_>>();
        names.sort();

        for name in names {
            let decl = &self.decls[name];
            let shape = if decl.is_function_like() {
                "function"
            } else {
                "container"
            };

            println!("  {} ({}, {} slot(s))", name, shape, decl.slots().len());
        }
    }
}

/// Splits `Name[A, B]` into the declaration name and its type arguments.
/// A bare `Name` is a zero-argument instantiation.
fn parse_instance(input: &str) -> eyre::Result<(String, Vec<String>)> {
    let input = input.trim();

    let Some(open) = input.find('[') else {
        return Ok((input.to_string(), Vec::new()));
    };

    if !input.ends_with(']') {
        eyre::bail!("malformed instantiation '{}', expected Name[A, B]", input);
    }

    let name = input[..open].trim();
    let inner = &input[open + 1..input.len() - 1];

    if name.is_empty() {
        eyre::bail!("malformed instantiation '{}', missing declaration name", input);
    }

    let args = inner
        .split(',')
        .map(|arg| arg.trim().to_string())
        .filter(|arg| !arg.is_empty())
        .collect();

    Ok((name.to_string(), args))
}

fn main() -> eyre::Result<()> {
    simple_logging::log_to_stderr(log::LevelFilter::Warn);

    let mut session = Session::preloaded();
    let mut editor = Editor::<()>::new();

    println!("vario repl, :help for commands, :exit to leave");

    loop {
        let line = match editor.readline("vario> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        editor.add_history_entry(line);

        let Some(command) = line.strip_prefix(':') else {
            println!("commands start with ':', try :help");
            continue;
        };

        let mut argv = vec![":".to_string()];
        argv.extend(command.split_whitespace().map(str::to_string));

        match Shell::try_parse_from(&argv) {
            Err(e) => {
                println!("{}", e);
            }

            Ok(shell) => match shell.cmd {
                Cmd::Type { name, supers } => {
                    if let Err(e) = session.register_type(name, supers) {
                        println!("ERR: {}", e);
                    }
                }

                Cmd::Decl { name, slots } => {
                    if let Err(e) = session.declare(name, slots) {
                        println!("ERR: {}", e);
                    }
                }

                Cmd::Fn { name, params } => {
                    session.declare_fn(name, params);
                }

                Cmd::Check { required, offered } => {
                    if let Err(e) = session.check(required, offered) {
                        println!("ERR: {}", e);
                    }
                }

                Cmd::List => {
                    session.list();
                }

                Cmd::Exit => {
                    break;
                }
            },
        }
    }

    Ok(())
}
