use anyhow::Result;
use log::{error, info};
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetManager;
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::renderer::{DrawQueue, Renderer};
use game::{Game, GameAssets, GameConfig};

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = GameConfig::default();
    info!("Starting {}...", config.title);

    let mut assets = AssetManager::new(config.asset_dir);
    info!(
        "Loading assets from {}",
        assets.loader().base_path().display()
    );
    let game_assets = match GameAssets::load(&mut assets, &config) {
        Ok(game_assets) => game_assets,
        Err(e) => {
            error!("Failed to load assets: {}", e);
            std::process::exit(1);
        }
    };

    info!("Loaded {} textures", assets.stats().texture_count);

    let mut game = Game::new(&game_assets, &config)?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title)
            .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        config.screen_width,
        config.screen_height,
        &assets,
    ))?;

    let mut input = InputManager::default();
    let mut game_loop = GameLoop::new();
    let mut draw_queue = DrawQueue::new();
    let mut shown_tps = None;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!(
                        "Close requested after {} frames / {} ticks, shutting down...",
                        game_loop.frame_count(),
                        game_loop.tick_count()
                    );
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::Focused(false) => {
                    // Releases are not delivered while unfocused
                    input.reset();
                }
                WindowEvent::RedrawRequested => {
                    for _ in 0..game_loop.begin_frame() {
                        game.update(input.player());
                        input.update();
                    }

                    draw_queue.clear();
                    game.draw(&mut draw_queue);
                    if let Err(e) = renderer.render(&draw_queue) {
                        error!("Render failed: {:#}", e);
                        elwt.exit();
                    }

                    let tps = game_loop.tps();
                    if shown_tps != Some(tps) {
                        window.set_title(&format!(
                            "{} - TPS: {:.2} - Press space to jump",
                            config.title, tps
                        ));
                        shown_tps = Some(tps);
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
