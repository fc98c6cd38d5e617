use std::{
    collections::HashSet,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;
use fnscript::{
    Error,
    interpreter::{
        lexer::tokenize,
        parser::parse,
        session::{ModuleResolver, Session, evaluate_program},
        value::environment::Environment,
    },
};
use log::{debug, warn};

/// fnscript is a small scripting language where blocks are scopes, objects and
/// functions at once.
///
/// Without a file or `--eval`, an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run.
    file: Option<PathBuf>,

    /// Runs the given code instead of a file.
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    eval: Option<String>,

    /// Prints the last value the script produced.
    #[arg(short, long)]
    result: bool,

    /// Prints the tokens instead of running.
    #[arg(long)]
    tokens: bool,

    /// Prints the parsed tree instead of running.
    #[arg(long, conflicts_with = "tokens")]
    tree: bool,

    /// Adds a directory to search for `use`d modules.
    #[arg(short = 'I', long = "module-path", value_name = "DIR")]
    module_path: Vec<PathBuf>,

    /// Increases log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = match (&args.file, &args.eval) {
        (Some(path), _) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        (None, Some(code)) => code.clone(),
        (None, None) => {
            let resolver = FileResolver::new(search_path(None, &args.module_path));
            return repl(Session::with_resolver(resolver));
        },
    };

    let outcome = if args.tokens {
        dump_tokens(&source)
    } else if args.tree {
        dump_tree(&source)
    } else {
        let dirs = search_path(args.file.as_deref(), &args.module_path);
        let mut session = Session::with_resolver(FileResolver::new(dirs));
        session.run(&source).map(|value| {
                                if args.result
                                   && let Some(value) = value
                                {
                                    println!("{value}");
                                }
                            })
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs the logger. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

/// Module directories: the script's own directory first, then every `-I`.
fn search_path(script: Option<&Path>, extra: &[PathBuf]) -> Vec<PathBuf> {
    let own = script.map_or_else(|| PathBuf::from("."), |path| {
                        path.parent()
                            .filter(|dir| !dir.as_os_str().is_empty())
                            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
                    });
    std::iter::once(own).chain(extra.iter().cloned()).collect()
}

fn dump_tokens(source: &str) -> Result<(), Error> {
    for token in tokenize(source)? {
        println!("{token}");
    }
    Ok(())
}

fn dump_tree(source: &str) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    for node in parse(&tokens)? {
        println!("{node}");
    }
    Ok(())
}

/// Runs the interactive prompt until end of input.
///
/// Lines are accumulated while the buffer fails to lex or parse, since more
/// input may complete it. An empty line abandons the buffer and reports why
/// it did not parse.
fn repl<R: ModuleResolver>(mut session: Session<R>) -> ExitCode {
    let stdin = io::stdin();
    let mut buffer = String::new();
    let mut pending: Option<Error> = None;

    loop {
        print!("{}", if buffer.is_empty() { "> " } else { ". " });
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!();
                if let Some(e) = pending {
                    eprintln!("{e}");
                }
                return ExitCode::SUCCESS;
            },
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }

        if line.trim().is_empty() {
            if let Some(e) = pending.take() {
                eprintln!("{e}");
            }
            buffer.clear();
            continue;
        }

        buffer.push_str(&line);

        let nodes = match tokenize(&buffer).map_err(Error::from)
                                           .and_then(|tokens| parse(&tokens).map_err(Error::from))
        {
            Ok(nodes) => nodes,
            Err(e) => {
                debug!("buffer does not parse yet: {e}");
                pending = Some(e);
                continue;
            },
        };

        buffer.clear();
        pending = None;

        match session.evaluate(&nodes) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Loads `use name` from `name.fn` in the first directory that has it.
///
/// Each module runs in its own fresh root, so modules cannot see the script
/// that uses them. A module that is still loading when it is requested again
/// is a cycle and fails.
struct FileResolver {
    dirs:    Vec<PathBuf>,
    loading: HashSet<String>,
}

impl FileResolver {
    fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs,
               loading: HashSet::new() }
    }

    fn find(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| dir.join(format!("{name}.fn")))
            .find(|path| path.is_file())
    }

    fn load(&mut self, name: &str, path: &Path) -> Result<Environment, Error> {
        let failure = |reason: String| Error::Module { name: name.to_string(),
                                                       reason };

        let source = fs::read_to_string(path).map_err(|e| failure(e.to_string()))?;
        let tokens = tokenize(&source)?;
        let nodes = parse(&tokens)?;

        let module = Environment::root().child();
        evaluate_program(&module, &nodes, self)?;
        Ok(module)
    }
}

impl ModuleResolver for FileResolver {
    fn resolve(&mut self, name: &str) -> Result<Option<Environment>, Error> {
        let Some(path) = self.find(name) else {
            warn!("module '{name}' not found in {:?}", self.dirs);
            return Ok(None);
        };

        if !self.loading.insert(name.to_string()) {
            return Err(Error::Module { name:   name.to_string(),
                                       reason: "circular use".to_string(), });
        }
        debug!("loading module '{name}' from {}", path.display());

        let result = self.load(name, &path);
        self.loading.remove(name);
        result.map(Some)
    }
}
