//! CLI entry point for table-narrator
//!
//! Runs the webhook server, or narrates / answers a single request offline.

use std::path::PathBuf;
use std::process;

use anyhow::Context as _;
use table_narrator::{
    GameId, NarrationRequest, RenderMode, RoleSet, build_script,
    config::Config,
    logging,
    render,
    server::NarratorServer,
    webhook,
};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    let result = match command.as_str() {
        "serve" => run_serve(&args[2..]).await,
        "narrate" => run_narrate(&args[2..]),
        "respond" => {
            let Some(path) = args.get(2) else {
                eprintln!("Error: Missing request file path");
                eprintln!();
                print_usage();
                process::exit(1);
            };
            run_respond(PathBuf::from(path)).await
        }
        "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("Reason: {}", cause);
        }
        process::exit(1);
    }
}

fn print_usage() {
    println!("table-narrator - Night phase narration for social deduction games");
    println!();
    println!("USAGE:");
    println!("    table-narrator <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    serve [--config <file.json>]                 Run the webhook HTTP server");
    println!("    narrate <game> <players> [roles...] [MODE]   Print a narration script");
    println!("    respond <request.json>                       Answer a saved webhook request");
    println!("    --help, -h                                   Show this help message");
    println!();
    println!("MODE:");
    println!("    --plain    Plain text instead of SSML markup");
    println!("    --json     Segment list as JSON");
    println!();
    println!("ENVIRONMENT:");
    println!("    NARRATOR_HOST, NARRATOR_PORT, NARRATOR_LOG");
    println!();
    println!("EXAMPLES:");
    println!("    table-narrator narrate \"The Resistance: Avalon\" 8 Percival Morgana");
    println!("    table-narrator narrate \"Secret Hitler\" 9 --plain");
    println!("    table-narrator serve --config narrator.json");
}

async fn run_serve(args: &[String]) -> anyhow::Result<()> {
    let config = match args {
        [] => Config::default(),
        [flag, path] if flag == "--config" => Config::load(path).await?,
        _ => anyhow::bail!("serve accepts only --config <file.json>"),
    };
    let config = config.apply_env()?;

    logging::init(config.logging.level);
    NarratorServer::new(config).start().await
}

enum Output {
    Markup,
    Plain,
    Json,
}

fn run_narrate(args: &[String]) -> anyhow::Result<()> {
    let mut output = Output::Markup;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--plain" => output = Output::Plain,
            "--json" => output = Output::Json,
            _ => positional.push(arg.as_str()),
        }
    }

    let [title, players, roles @ ..] = positional.as_slice() else {
        anyhow::bail!("narrate needs <game> and <players>");
    };
    let game = GameId::from_title(title);
    if game.is_none() {
        eprintln!(
            "Warning: unknown game '{}', expected one of: {}",
            title,
            GameId::ALL.map(GameId::title).join(", ")
        );
    }
    let players: u32 = players
        .parse()
        .with_context(|| format!("invalid player count '{}'", players))?;

    let request = NarrationRequest::new(game, players, RoleSet::from_tokens(roles.iter()));
    let segments = build_script(&request);

    match output {
        Output::Markup => println!("{}", render(&segments, RenderMode::RichMarkup)),
        Output::Plain => println!("{}", render(&segments, RenderMode::PlainText)),
        Output::Json => println!("{}", serde_json::to_string_pretty(&segments)?),
    }
    Ok(())
}

async fn run_respond(path: PathBuf) -> anyhow::Result<()> {
    let config = Config::default().apply_env()?;
    logging::init(config.logging.level);

    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read file '{}'", path.display()))?;
    let body: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("'{}' is not valid JSON", path.display()))?;

    let response = webhook::fulfill(&body, &config.fulfillment)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
