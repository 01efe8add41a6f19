//! Entity map viewer (default binary).
//!
//! Usage: `tui-entity-dot [scene.json]`. Without a scene file a built-in demo
//! map is shown. Press `q`, `Esc` or `Ctrl-C` to quit.

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_entity_dot::core::Scene;
use tui_entity_dot::term::{FrameBuffer, MapView, TerminalRenderer, ViewConfig, Viewport};

const FRAME_TIMEOUT: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let cfg = ViewConfig::from_env();
    init_logging(&cfg)?;

    let scene = load_scene(std::env::args().nth(1).as_deref())?;
    log::info!(
        "viewer starting: {}x{} map, {} entities, overlay {:?}",
        scene.width,
        scene.height,
        scene.entities.len(),
        cfg.overlay
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &scene, &cfg);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::warn!("failed to restore terminal: {e:#}");
    }
    result
}

fn init_logging(cfg: &ViewConfig) -> Result<()> {
    let Some(path) = cfg.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {path}"))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)
        .context("install logger")?;
    Ok(())
}

fn load_scene(path: Option<&str>) -> Result<Scene> {
    let Some(path) = path else {
        return Ok(Scene::demo());
    };
    let raw = std::fs::read_to_string(path).with_context(|| format!("read scene {path}"))?;
    Scene::from_json(&raw).with_context(|| format!("load scene {path}"))
}

fn run(term: &mut TerminalRenderer, scene: &Scene, cfg: &ViewConfig) -> Result<()> {
    let view = MapView::from_config(cfg);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(scene, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        if !event::poll(FRAME_TIMEOUT)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                log::info!("quit requested");
                return Ok(());
            }
            Event::Resize(w, h) => {
                log::debug!("terminal resized to {w}x{h}");
                term.invalidate();
            }
            _ => {}
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
