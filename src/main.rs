use anyhow::Context;
use garud::{SessionConfig, SessionController};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Garud Graph Session Engine v{}", garud::version());
    println!("==========================================");
    println!();

    let config = match std::env::var("GARUD_CONFIG") {
        Ok(path) => SessionConfig::from_path(&path)
            .with_context(|| format!("loading config from {}", path))?,
        Err(_) => SessionConfig::default(),
    };
    let mut session = SessionController::new(&config).context("invalid configuration")?;

    // Drain redraw notifications the way a renderer would
    let mut redraws = session.subscribe();
    let renderer = tokio::spawn(async move {
        let mut frames = 0usize;
        while let Some(event) = redraws.recv().await {
            frames += 1;
            println!("  [render] {}", event);
        }
        frames
    });

    demo_search(&mut session);
    demo_expansion(&mut session)?;

    println!("\n=== Active snapshot ===");
    println!("{}", serde_json::to_string_pretty(session.active())?);

    drop(session);
    let frames = renderer.await.context("renderer task failed")?;
    info!("Renderer drew {} frames", frames);
    Ok(())
}

fn demo_search(session: &mut SessionController) {
    println!("=== Demo 1: Topic search ===");
    let snapshot = session.start_search("MOFA");
    println!(
        "✓ 'MOFA' matched {} nodes, {} edges",
        snapshot.node_count(),
        snapshot.edge_count()
    );
    for node in snapshot.nodes() {
        println!("  {:<18} {:<8} {}", node.id, node.kind, node.label);
    }

    let snapshot = session.start_search("commander");
    println!(
        "✓ 'commander' (substring) matched {} nodes, {} edges",
        snapshot.node_count(),
        snapshot.edge_count()
    );
}

fn demo_expansion(session: &mut SessionController) -> anyhow::Result<()> {
    println!("\n=== Demo 2: Expansion ===");
    session.start_search("mofa");

    let selected = session
        .select(Some("ORG-MOFA-001"))
        .context("ORG-MOFA-001 missing from search result")?;
    println!("✓ Selected {} ({} documents)", selected.label, selected.document_count());

    for round in 1..=2 {
        let before = session.active().node_count();
        if let Some(report) = session.expand_selection() {
            println!(
                "✓ Round {}: {} -> {} nodes (+{} edges)",
                round,
                before,
                session.active().node_count(),
                report.added_edges.len()
            );
            for id in &report.added_nodes {
                if let Some(node) = session.active().node(id.as_str()) {
                    println!("  {:<14} {:<8} {}", node.id, node.kind, node.label);
                }
            }
        }
    }

    if session.expand_selected("NOT-A-NODE").is_none() {
        println!("✓ Expanding an unknown node is a no-op");
    }
    Ok(())
}
