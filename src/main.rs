//! Interactive scene viewer (default binary).
//!
//! Orbits a small demo scene in the terminal. It uses crossterm for input and
//! the framebuffer-based renderer. `--config <file.json>` (or the
//! `TUI_RENDER3D_CONFIG` environment variable) overrides the defaults.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_render3d::input::{handle_key_event, should_quit};
use tui_render3d::term::{FrameBuffer, HudStatus, SceneView, TerminalRenderer, Viewport};
use tui_render3d::viewer::{Args, Viewer, ViewerConfig};

/// Log file used when `RUST_LOG` is set; stderr belongs to the terminal UI.
const LOG_FILE: &str = "tui-render3d.log";

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;
    let config = args.load_config()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &ViewerConfig) -> Result<()> {
    let mut viewer = Viewer::new(config);
    let view = SceneView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(config.frame_ms.max(1));
    let mut last_tick = Instant::now();
    let mut fps: Option<f64> = None;

    log::info!(
        "viewer started: mode={} frame_ms={}",
        config.render.mode.as_str(),
        config.frame_ms
    );

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let status = HudStatus {
            paused: viewer.paused,
            fps,
        };
        view.render_into(&viewer.scene, &status, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        viewer.apply(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let dt = elapsed.as_secs_f64();
            viewer.tick(dt);

            let current = 1.0 / dt;
            fps = Some(match fps {
                Some(prev) => prev * 0.9 + current * 0.1,
                None => current,
            });
        }
    }
}
