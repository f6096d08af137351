//! Headless battle client.
//!
//! Loads content, assembles a [`BattleSession`] and plays a few scripted
//! rounds while logging every turn and movement event.
mod config;
mod script;

use anyhow::{Context, Result};
use battle_content::{ConfigLoader, ContentFactory};
use battle_core::{StaticTile, TerrainOracle};
use battle_runtime::{
    BattleInput, BattleSession, Event, HexMapOracle, InputOutcome, RuntimeConfig, Side,
    TimedAnimator, Topic,
};
use config::CliConfig;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    let mut session = build_session(&config)?;

    let listeners: Vec<JoinHandle<()>> = [Topic::Turn, Topic::Movement]
        .into_iter()
        .map(|topic| tokio::spawn(log_events(topic, session.subscribe(topic))))
        .collect();

    session.start()?;
    play(&mut session, config.rounds).await?;

    // Dropping the session closes the bus so the listeners drain and exit.
    drop(session);
    for listener in listeners {
        listener.await?;
    }
    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_session(config: &CliConfig) -> Result<BattleSession> {
    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    info!("Loading content from {}", factory.data_dir().display());

    let mut battle = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config()?,
    };
    if let Some(range) = config.move_range {
        battle.move_range = range;
    }
    if let Some(step_ms) = config.step_ms {
        battle.step_duration_ms = step_ms;
    }
    info!(
        move_range = battle.move_range,
        step_ms = battle.step_duration_ms,
        "Battle rules loaded"
    );

    let skills = factory.load_skills()?;
    info!("Loaded {} skills", skills.len());

    let (dimensions, tiles) = factory.load_map(&config.map_name)?;
    let placements = factory.load_placements(&config.map_name)?;
    info!(
        map = %config.map_name,
        width = dimensions.width,
        height = dimensions.height,
        party = placements.party.len(),
        enemies = placements.enemies.len(),
        "Map loaded"
    );

    let session = BattleSession::builder()
        .config(RuntimeConfig {
            battle,
            ..RuntimeConfig::default()
        })
        .terrain(HexMapOracle::new(dimensions, tiles))
        .placements(placements)
        .animator(TimedAnimator)
        .build()
        .with_context(|| format!("failed to set up map '{}'", config.map_name))?;
    Ok(session)
}

async fn play(session: &mut BattleSession, rounds: usize) -> Result<()> {
    let turns = rounds * session.turns().roster().len();
    for _ in 0..turns {
        let Some(actor) = session.active_actor() else {
            break;
        };
        let enemies: Vec<_> = session
            .field()
            .members(Side::Enemy)
            .map(|(_, cell)| cell)
            .collect();

        let input = match script::approach(session.destinations(), &enemies) {
            Some(cell) => BattleInput::SelectTile(cell),
            None => BattleInput::SkipTurn,
        };
        debug!(%actor, ?input, "scripted input");

        match session.handle_input(input).await? {
            InputOutcome::Moved(report) => info!(
                %actor,
                from = %report.from,
                to = %report.to,
                steps = report.steps.len(),
                "moved"
            ),
            InputOutcome::Skipped { actor, .. } => info!(%actor, "skipped"),
            InputOutcome::Rejected(err) => {
                warn!(%actor, "move rejected: {err}");
                session.handle_input(BattleInput::SkipTurn).await?;
            }
            InputOutcome::SelectionCleared | InputOutcome::Ignored { .. } => {}
        }
    }

    let field = session.field();
    for (actor, cell) in field.members(Side::Party) {
        let terrain = field.terrain().tile(cell).map(StaticTile::terrain);
        info!(%actor, %cell, ?terrain, "final position");
    }
    Ok(())
}

async fn log_events(topic: Topic, mut rx: broadcast::Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(Event::Turn(notice)) => debug!(?notice, "turn event"),
            Ok(Event::Movement(event)) => info!(?event, "movement event"),
            Err(RecvError::Lagged(skipped)) => {
                warn!(?topic, skipped, "event listener lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
