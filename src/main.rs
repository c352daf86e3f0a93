use clap::Parser;
use macroquad::prelude::*;
use tic_tac_toe::{
    application::{LOGICAL_HEIGHT, LOGICAL_WIDTH},
    input, rendering, ui, Config, FileStore, FrameLoop, GameSession, Layout, MemoryStore, Store,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Tic-Tac-Toe".to_owned(),
        window_width: LOGICAL_WIDTH as i32,
        window_height: LOGICAL_HEIGHT as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Pick the store backend; an unusable data file falls back to memory
fn open_store(config: &Config) -> Box<dyn Store> {
    if config.no_persist {
        log::info!("Persistence disabled, scores last for this run only");
        return Box::new(MemoryStore::new());
    }
    match FileStore::open(&config.data_file) {
        Ok(store) => {
            log::info!("Saving scores to {}", store.path().display());
            Box::new(store)
        }
        Err(err) => {
            log::warn!(
                "Cannot use {} ({}), scores last for this run only",
                config.data_file.display(),
                err
            );
            Box::new(MemoryStore::new())
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = Config::parse();
    log::info!("Tic-Tac-Toe starting...");

    let mut session = GameSession::open(open_store(&config));
    let buttons = ui::create_buttons();
    let mut frame_loop = FrameLoop::new();
    let mut screen = (screen_width(), screen_height());
    let mut layout = Layout::fit(screen.0, screen.1, config.max_scale);

    frame_loop.start();
    while frame_loop.is_running() {
        // Recompute the display size when the window changes
        let current = (screen_width(), screen_height());
        if current != screen {
            screen = current;
            layout = Layout::fit(screen.0, screen.1, config.max_scale);
            log::debug!(
                "Window {}x{}, surface scale {:.2}",
                screen.0,
                screen.1,
                layout.scale
            );
        }

        let frame_input = input::poll();
        let commands = input::process_input(&frame_input, &layout, &buttons);
        frame_loop.step(&mut session, &commands);

        let (mx, my) = mouse_position();
        rendering::draw_frame(&session, &layout, &buttons, layout.to_logical(mx, my));

        next_frame().await;
    }
}
