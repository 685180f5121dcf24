//! Lectern CLI binary entry point.

use std::sync::Arc;

use lectern::analysis::{AnalysisOptions, Analyzer};
use lectern::cli::{AnalyzeArgs, Cli, Commands, PodcastArgs, ReviewArgs};
use lectern::config::LecternConfig;
use lectern::export::export_html;
use lectern::provider::GeminiClient;
use lectern::source::read_source;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let result = match cli.command {
        Commands::Analyze(args) => handle_analyze(args).await,
        Commands::Podcast(args) => handle_podcast(args).await,
        Commands::Review(args) => handle_review(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn analyzer_from_env() -> Result<Analyzer, Box<dyn std::error::Error>> {
    let config = LecternConfig::from_env();
    let client = GeminiClient::from_config(&config)?;
    Ok(Analyzer::new(Arc::new(client)))
}

async fn handle_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(&args.input)?;
    let analyzer = analyzer_from_env()?;

    let options = AnalysisOptions::builder().language(args.lang).build();
    let data = analyzer
        .run_analysis(&source.text, &options, |phase| eprintln!("{phase}"))
        .await?;

    match &args.export {
        Some(path) => {
            let title = if source.file_name.is_empty() {
                "Lectern".to_string()
            } else {
                source.file_name.clone()
            };
            std::fs::write(path, export_html(&data, &title, args.theme))?;
            eprintln!("Exported to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&data)?),
    }

    Ok(())
}

async fn handle_podcast(args: PodcastArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(&args.input)?;
    let analyzer = analyzer_from_env()?;

    let script = analyzer.podcast_script(&source.text, args.lang).await?;
    for line in &script {
        println!("{}: {}", line.speaker, line.text);
    }

    if args.play {
        play_script(script).await?;
    }

    Ok(())
}

#[cfg(feature = "playback")]
async fn play_script(
    script: Vec<lectern::types::PodcastLine>,
) -> Result<(), Box<dyn std::error::Error>> {
    use lectern::audio::{CpalOutput, Player, PodcastSequencer};

    let config = LecternConfig::from_env();
    let synth = Arc::new(GeminiClient::from_config(&config)?);
    let player = Arc::new(Player::new(Arc::new(CpalOutput::new())));

    let sequencer = PodcastSequencer::new(synth, player, script);
    sequencer.play().await;
    Ok(())
}

#[cfg(not(feature = "playback"))]
async fn play_script(
    _script: Vec<lectern::types::PodcastLine>,
) -> Result<(), Box<dyn std::error::Error>> {
    Err("playback support is not compiled in; rebuild with --features playback".into())
}

async fn handle_review(args: ReviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(&args.input)?;
    let analyzer = analyzer_from_env()?;

    let review = analyzer
        .review(&source.text, args.style, args.lang)
        .await?;
    println!("{review}");

    Ok(())
}
