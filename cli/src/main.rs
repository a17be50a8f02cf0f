//! Garud CLI: command-line front end for the graph session engine
//!
//! Every invocation opens a fresh in-process session; `shell` keeps one
//! session alive across commands.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use garud::{
    Catalog, Document, DossierGenerator, EntityKind, ExpansionGenerator, GraphSnapshot, MergeReport,
    Node, RngChoice, SessionConfig, SessionController,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garud", version, about = "Garud graph session CLI")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Seed for reproducible synthesis
    #[arg(long, global = true, env = "GARUD_SEED")]
    seed: Option<u64>,

    /// YAML session configuration
    #[arg(long, global = true, env = "GARUD_CONFIG")]
    config: Option<PathBuf>,

    /// JSON catalog to use instead of the built-in corpus
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a query and print the resulting subgraph
    Search {
        /// Free-text query; empty returns the whole catalog
        #[arg(default_value = "")]
        query: String,
    },
    /// Show one catalog node with its dossier
    Show {
        /// Node id
        id: String,
    },
    /// Expand a node of the full catalog
    Expand {
        /// Node id
        id: String,

        /// Number of successive expansions
        #[arg(long, default_value_t = 1)]
        rounds: u32,
    },
    /// Start an interactive REPL
    Shell,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result = open_session(&cli).and_then(|mut session| match &cli.command {
        Commands::Search { query } => run_search(&mut session, query, &cli.format),
        Commands::Show { id } => run_show(&session, id, &cli.format),
        Commands::Expand { id, rounds } => run_expand(&mut session, id, *rounds, &cli.format),
        Commands::Shell => run_shell(&mut session, &cli.format),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn open_session(cli: &Cli) -> CliResult<SessionController> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_path(path)?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let Some(path) = &cli.catalog else {
        return Ok(SessionController::new(&config)?);
    };
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => RngChoice::from_seed(seed),
        None => RngChoice::from_entropy(),
    };
    let dossiers = DossierGenerator::new(config.dossier.clone());
    let catalog = Catalog::from_path(path, &dossiers, &mut rng)?;
    let expander = ExpansionGenerator::new(config.expansion.clone());
    Ok(SessionController::with_parts(catalog, dossiers, expander, rng))
}

fn run_search(session: &mut SessionController, query: &str, format: &OutputFormat) -> CliResult<()> {
    session.start_search(query);

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "search": session.last_search(),
                "graph": session.active(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            print_snapshot(session.active());
            println!("{} match(es) for '{}'", session.last_search().match_count, session.last_search().query);
        }
    }
    Ok(())
}

fn run_show(session: &SessionController, id: &str, format: &OutputFormat) -> CliResult<()> {
    let node = session
        .catalog()
        .node(id)
        .ok_or_else(|| format!("no node with id {}", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(node)?),
        OutputFormat::Table => print_node(node),
    }
    Ok(())
}

fn run_expand(
    session: &mut SessionController,
    id: &str,
    rounds: u32,
    format: &OutputFormat,
) -> CliResult<()> {
    let mut reports = Vec::new();
    for _ in 0..rounds {
        let report = session
            .expand_selected(id)
            .ok_or_else(|| format!("node {} is not in the active graph", id))?;
        reports.push(report);
    }

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "expansions": reports,
                "graph": session.active(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            for report in &reports {
                print_report(session.active(), report);
            }
            println!(
                "Active graph: {} nodes, {} edges",
                session.active().node_count(),
                session.active().edge_count()
            );
        }
    }
    Ok(())
}

fn run_shell(session: &mut SessionController, format: &OutputFormat) -> CliResult<()> {
    println!("Garud Interactive Shell");
    println!("Type help for commands, quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("garud> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (command, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (trimmed, ""),
        };

        match command {
            "quit" | "exit" | "q" => break,
            "help" | "h" => {
                println!("Commands:");
                println!("  search <query>  Replace the graph with a search result");
                println!("  select <id>     Select a node of the graph");
                println!("  deselect        Clear the selection");
                println!("  expand [id]     Expand a node (default: the selection)");
                println!("  nodes [type]    List nodes of the graph, optionally of one type");
                println!("  edges           List edges of the graph");
                println!("  docs [tag]      Show the selected node's dossier, optionally by tag");
                println!("  stats           Graph and search summary");
                println!("  quit            Exit shell");
            }
            "search" => {
                if let Err(e) = run_search(session, arg, format) {
                    eprintln!("Error: {}", e);
                }
            }
            "select" => match session.select(Some(arg)) {
                Some(node) => println!("Selected {} ({})", node.id, node.label),
                None => println!("No node {} in the graph", arg),
            },
            "deselect" => {
                session.select(None);
                println!("Selection cleared");
            }
            "expand" => {
                let report = if arg.is_empty() {
                    session.expand_selection()
                } else {
                    session.expand_selected(arg)
                };
                match report {
                    Some(report) => print_report(session.active(), &report),
                    None => println!("Nothing to expand"),
                }
            }
            "nodes" if arg.is_empty() => print_snapshot(session.active()),
            "nodes" => match arg.parse::<EntityKind>() {
                Ok(kind) => print_nodes(session.active().nodes().filter(|n| n.kind == kind)),
                Err(e) => println!("{}", e),
            },
            "edges" => print_edges(session.active()),
            "docs" => match session.selected() {
                Some(node) if arg.is_empty() => print_node(node),
                Some(node) => print_documents(node.dossier.iter().filter(|d| d.has_tag(arg))),
                None => println!("No node selected"),
            },
            "stats" => {
                let search = session.last_search();
                println!("Query:    '{}'", search.query);
                println!("Matches:  {}", search.match_count);
                println!("Nodes:    {}", session.active().node_count());
                println!("Edges:    {}", session.active().edge_count());
                if let Some(node) = session.selected() {
                    println!("Selected: {}", node.id);
                }
            }
            other => println!("Unknown command '{}', try help", other),
        }
    }

    println!("Bye!");
    Ok(())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn print_snapshot(snapshot: &GraphSnapshot) {
    if snapshot.is_empty() {
        println!("(no results)");
        return;
    }
    print_nodes(snapshot.nodes());
    print_edges(snapshot);
}

fn print_nodes<'a>(nodes: impl Iterator<Item = &'a Node>) {
    let mut table = new_table();
    table.set_header(vec!["ID", "Type", "Label", "Threat", "Docs"]);
    for node in nodes {
        table.add_row(vec![
            node.id.to_string(),
            node.kind.to_string(),
            node.label.clone(),
            node.threat.map(|t| t.to_string()).unwrap_or_default(),
            node.document_count().to_string(),
        ]);
    }
    println!("{}", table);
}

fn print_edges(snapshot: &GraphSnapshot) {
    if snapshot.edge_count() == 0 {
        println!("(no edges)");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["ID", "Source", "Label", "Target", "Relation"]);
    for edge in snapshot.edges() {
        table.add_row(vec![
            edge.id.to_string(),
            edge.source.to_string(),
            edge.label.clone(),
            edge.target.to_string(),
            edge.relation().to_string(),
        ]);
    }
    println!("{}", table);
}

fn print_node(node: &Node) {
    println!("{} [{}] {}", node.id, node.kind, node.label);
    if let Some(role) = &node.role {
        println!("Role:   {}", role);
    }
    if let Some(threat) = node.threat {
        println!("Threat: {}", threat);
    }
    if let Some(description) = &node.description {
        println!("{}", description);
    }
    for (name, value) in &node.details {
        println!("  {}: {}", name, value);
    }

    if !node.dossier.is_empty() {
        print_documents(node.dossier.iter());
    }
}

fn print_documents<'a>(documents: impl Iterator<Item = &'a Document>) {
    let mut table = new_table();
    table.set_header(vec!["ID", "Type", "Date", "Classification", "Title", "File"]);
    for doc in documents {
        table.add_row(vec![
            doc.id.clone(),
            doc.kind.to_string(),
            doc.date.to_string(),
            doc.classification.clone(),
            doc.title.clone(),
            doc.file_name.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table);
}

fn print_report(snapshot: &GraphSnapshot, report: &MergeReport) {
    let source = report.source.as_ref().map(|s| s.to_string()).unwrap_or_default();
    println!("Expanded {}: +{} nodes, +{} edges", source, report.added_nodes.len(), report.added_edges.len());
    for id in &report.added_nodes {
        if let Some(node) = snapshot.node(id.as_str()) {
            println!("  {:<16} {:<8} {}", node.id, node.kind, node.label);
        }
    }
    if !report.is_clean() {
        println!(
            "  rejected: {} nodes, {} edges",
            report.rejected_nodes.len(),
            report.rejected_edges.len()
        );
    }
}
