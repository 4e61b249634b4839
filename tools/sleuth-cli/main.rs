use clap::Parser;
use sleuth::prelude::*;
use sleuth::validation::{flowchart_feedback, pseudocode_feedback};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Play the Rookie Detective level in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a catalog JSON file. Uses the built-in Rookie Detective cases when omitted
    catalog_path: Option<PathBuf>,

    /// Override the share of cases needed to finish the level (0 < R <= 1)
    #[arg(short, long)]
    ratio: Option<f64>,

    /// Print the case board and exit
    #[arg(short, long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

const LEVEL_BANNER: &str = "*** Level complete! You're ready to advance to Junior Detective. ***";

/// Prints progression events as they arrive.
struct Announcer;

impl SessionObserver for Announcer {
    fn on_case_complete(&mut self, case_id: &str) {
        println!("\n*** Case '{}' closed. Returning to case selection. ***", case_id);
    }

    fn on_level_complete(&mut self) {
        println!("\n*** Congratulations! You've completed the Rookie Detective level! ***");
        println!("*** You're ready to advance to Junior Detective. ***");
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let catalog = load_catalog(&cli).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let mut session = Session::new(catalog, Announcer);

    print_board(&session);
    if cli.list {
        return;
    }

    println!("\nType 'help' for a list of commands.");
    if let Err(e) = run_interactive(&mut session) {
        exit_with_error(&format!("Failed to read input: {}", e));
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let catalog = match &cli.catalog_path {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::rookie()?,
    };
    let catalog = match cli.ratio {
        Some(ratio) => {
            let level = catalog.level().with_completion_ratio(ratio);
            catalog.with_level(level)?
        }
        None => catalog,
    };
    Ok(catalog)
}

/// The commands understood by the interactive prompt.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    List,
    Open(String),
    Next,
    Evidence,
    Add(NodeRole),
    Clear,
    Code,
    Hint(HintMove),
    Example,
    Back,
    Quit,
}

#[derive(Debug, PartialEq)]
enum HintMove {
    Toggle,
    Forward,
    Back,
}

fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or("").to_ascii_lowercase();
    let arg = words.next();
    match (verb.as_str(), arg) {
        ("help" | "?", _) => Ok(Command::Help),
        ("list" | "ls", _) => Ok(Command::List),
        ("open", Some(target)) => Ok(Command::Open(target.to_string())),
        ("open", None) => Err("Usage: open <number|case-id>".to_string()),
        ("next" | "continue" | "submit", _) => Ok(Command::Next),
        ("evidence", _) => Ok(Command::Evidence),
        ("add", Some(role)) => NodeRole::parse(role)
            .map(Command::Add)
            .ok_or_else(|| format!("Unknown node type '{}'. Use start, process, decision or end.", role)),
        ("add", None) => Err("Usage: add <start|process|decision|end>".to_string()),
        ("clear", _) => Ok(Command::Clear),
        ("code", _) => Ok(Command::Code),
        ("hint", None) => Ok(Command::Hint(HintMove::Toggle)),
        ("hint", Some("next")) => Ok(Command::Hint(HintMove::Forward)),
        ("hint", Some("prev")) => Ok(Command::Hint(HintMove::Back)),
        ("example", _) => Ok(Command::Example),
        ("back", _) => Ok(Command::Back),
        ("quit" | "exit", _) => Ok(Command::Quit),
        ("", _) => Err(String::new()),
        (other, _) => Err(format!("Unknown command '{}'. Type 'help'.", other)),
    }
}

fn run_interactive<O: SessionObserver>(session: &mut Session<O>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        session.poll_now();
        print!("{}", prompt(session));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match parse_command(&line?) {
            Ok(command) => command,
            Err(message) => {
                if !message.is_empty() {
                    println!("{}", message);
                }
                continue;
            }
        };
        debug!(?command, "command received");

        match command {
            Command::Help => print_help(),
            Command::List => print_board(session),
            Command::Open(target) => open_case(session, &target),
            Command::Next => advance(session),
            Command::Evidence => match session.current_case() {
                Some(case) => print_evidence(case),
                None => println!("Open a case first."),
            },
            Command::Add(role) => with_investigation(session, |inv| {
                let node = inv.add_node(role);
                println!("Added {} node '{}'", node.role, node.label);
                print_flowchart(inv);
            }),
            Command::Clear => with_investigation(session, |inv| {
                inv.clear_flowchart();
                println!("Flowchart cleared.");
            }),
            Command::Code => {
                let text = read_block(&mut lines)?;
                with_investigation(session, |inv| {
                    inv.set_pseudocode(text);
                    println!("{}", pseudocode_feedback(inv.is_pseudocode_valid()));
                });
            }
            Command::Hint(movement) => show_hint(session, movement),
            Command::Example => show_example(session),
            Command::Back => {
                if session.abandon().is_some() {
                    println!("Back to cases. Your work on that case was discarded.");
                }
                print_board(session);
            }
            Command::Quit => {
                session.abandon();
                break;
            }
        }
    }
    Ok(())
}

fn prompt<O: SessionObserver>(session: &Session<O>) -> String {
    match session.active() {
        Some(inv) => format!("[{} | {}] > ", inv.case_id(), inv.step()),
        None => "[cases] > ".to_string(),
    }
}

fn with_investigation<O: SessionObserver>(session: &mut Session<O>, f: impl FnOnce(&mut Investigation)) {
    match session.investigation_mut() {
        Ok(inv) => f(inv),
        Err(e) => println!("{}", e),
    }
}

fn open_case<O: SessionObserver>(session: &mut Session<O>, target: &str) {
    // Accept either a 1-based board number or a case id.
    let case_id = match target.parse::<usize>() {
        Ok(n) if n >= 1 => match session.catalog().cases().get(n - 1) {
            Some(case) => case.id.clone(),
            None => {
                println!("There is no case number {}.", n);
                return;
            }
        },
        _ => target.to_string(),
    };

    match session.select_case(&case_id) {
        Ok(_) => {
            if let Some(case) = session.current_case() {
                println!("\n=== {} ===", case.title);
                println!("{}", case.description);
                println!("\n--- Case Briefing ---");
                println!("{}", case.scenario);
                println!("\nRead the briefing carefully, then type 'next' to examine the evidence.");
            }
        }
        Err(e) => println!("{}", e),
    }
}

fn advance<O: SessionObserver>(session: &mut Session<O>) {
    match session.advance() {
        Ok(step) => describe_step(session, step),
        Err(SessionError::Step(StepError::GateNotSatisfied(Step::FlowchartAuthoring))) => {
            println!("{}", flowchart_feedback(false));
        }
        Err(SessionError::Step(StepError::GateNotSatisfied(Step::PseudocodeAuthoring))) => {
            println!("{}", pseudocode_feedback(false));
        }
        Err(e) => println!("{}", e),
    }
}

fn describe_step<O: SessionObserver>(session: &mut Session<O>, step: Step) {
    match step {
        Step::Briefing => {}
        Step::EvidenceReview => {
            if let Some(case) = session.current_case() {
                print_evidence(case);
            }
            println!("\nReview all evidence carefully. You'll use it to build your flowchart.");
        }
        Step::FlowchartAuthoring => {
            println!("\n--- Build Your Flowchart ---");
            println!("Use 'add <start|process|decision|end>' and 'clear'. Type 'next' when done.");
        }
        Step::PseudocodeAuthoring => {
            println!("\n--- Write Your Pseudocode ---");
            println!("Type 'code', then your pseudocode, then a line with a single '.'.");
            println!("Start with BEGIN and end with END. Use IF/THEN for decisions.");
        }
        Step::Completion => {
            if let Some(case) = session.current_case() {
                println!("\nCase Solved! Excellent detective work on \"{}\"", case.title);
            }
            println!("Returning to case selection in a moment...");
            wait_for_completion(session);
            print_board(session);
        }
    }
}

/// Sleeps out the completion delay, then delivers the completion.
fn wait_for_completion<O: SessionObserver>(session: &mut Session<O>) -> Option<String> {
    if let Some(pending) = session.pending() {
        thread::sleep(pending.remaining(Instant::now()));
    }
    session.flush()
}

fn show_hint<O: SessionObserver>(session: &mut Session<O>, movement: HintMove) {
    let visible = match session.investigation_mut() {
        Ok(inv) => {
            let hints = inv.hints_mut();
            match movement {
                HintMove::Toggle => hints.toggle(),
                HintMove::Forward => {
                    hints.next_hint();
                    true
                }
                HintMove::Back => {
                    hints.previous_hint();
                    true
                }
            }
        }
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    if !visible {
        println!("Hints hidden.");
        return;
    }
    let index = session.active().map_or(0, |inv| inv.hints().index());
    match session.current_hint() {
        Some(hint) => println!("Hint {}: {}", index + 1, hint),
        None => println!("This case has no hints."),
    }
}

fn show_example<O: SessionObserver>(session: &mut Session<O>) {
    let visible = match session.investigation_mut() {
        Ok(inv) => inv.toggle_example(),
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    match session.target_solution() {
        Some(solution) if visible => {
            println!("\n--- Example Solution ---");
            println!("  {}", solution.labels().collect::<Vec<_>>().join(" -> "));
            println!("{}", solution.pseudocode);
        }
        _ => println!("Example hidden."),
    }
}

fn read_block<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<String> {
    let mut text = Vec::new();
    for line in lines.by_ref() {
        let line = line?;
        if line.trim() == "." {
            break;
        }
        text.push(line);
    }
    Ok(text.join("\n"))
}

fn print_board<O: SessionObserver>(session: &Session<O>) {
    for line in board_lines(session) {
        println!("{}", line);
    }
}

fn board_lines<O: SessionObserver>(session: &Session<O>) -> Vec<String> {
    let mut lines = vec![String::new(), "--- Rookie Detective Level ---".to_string()];
    for state in session.case_states() {
        let case = state.definition;
        lines.push(format!(
            "  {}. {:<32} {:<10} ~{} min, {} clues",
            state.position + 1,
            case.title,
            state.status().to_string(),
            case.estimated_minutes,
            case.evidence.len()
        ));
    }
    lines.push(format!("Progress: {}", session.summary()));
    if session.is_level_complete() {
        lines.push(LEVEL_BANNER.to_string());
    }
    lines
}

fn print_evidence(case: &CaseDefinition) {
    println!("\n--- Evidence Collection ---");
    for item in case.evidence_by_importance() {
        println!("  [{} | {} importance] {}", item.kind, item.importance, item.description);
    }
}

fn print_flowchart(inv: &Investigation) {
    let labels: Vec<_> = inv.flowchart_nodes().iter().map(|n| n.label.as_str()).collect();
    println!("  {}", labels.join(" -> "));
    println!("  {}", flowchart_feedback(inv.is_flowchart_valid()));
}

fn print_help() {
    println!("Commands:");
    println!("  list                 show the case board");
    println!("  open <n|id>          open an unlocked case");
    println!("  next                 continue to the next step (or submit)");
    println!("  evidence             show the evidence for the open case");
    println!("  add <type>           add a start, process, decision or end node");
    println!("  clear                clear your flowchart");
    println!("  code                 enter pseudocode, finish with a line containing '.'");
    println!("  hint [next|prev]     show, hide or browse hints");
    println!("  example              show or hide the example solution");
    println!("  back                 return to the case list (discards work)");
    println!("  quit                 leave");
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
