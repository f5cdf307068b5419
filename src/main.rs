use clap::{ArgAction, Parser};
use std::path::PathBuf;

use sketchboard::config::Config;
use sketchboard::draw::color;
use sketchboard::export;
use sketchboard::input::{CanvasState, Command, MouseButton, Tool};

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(version, about = "Interactive vector-drawing engine with deterministic undo/redo")]
struct Cli {
    /// Draw the demonstration scene and export a PNG snapshot
    #[arg(long, short = 'd', action = ArgAction::SetTrue)]
    demo: bool,

    /// Surface width in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Surface height in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Snapshot output path (defaults to the configured export directory)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.demo {
        let config = Config::load()?;

        let mut state = CanvasState::from_config(&config);
        if cli.width.is_some() || cli.height.is_some() {
            let width = cli.width.unwrap_or(state.surface().width());
            let height = cli.height.unwrap_or(state.surface().height());
            state.resize(width, height);
        }

        log::info!(
            "Drawing demonstration scene on a {}x{} surface",
            state.surface().width(),
            state.surface().height()
        );
        draw_demo_scene(&mut state);

        match &cli.output {
            Some(path) => {
                export::save_to_path(state.surface(), path)?;
                println!("Snapshot saved to {}", path.display());
            }
            None => {
                let path = export::save_drawing(state.surface(), &config.export.to_export_config())?;
                println!("Snapshot saved to {}", path.display());
            }
        }
    } else {
        // No flags: show usage
        println!("sketchboard: Interactive vector-drawing engine");
        println!();
        println!("Usage:");
        println!("  sketchboard --demo              Draw the demo scene and export it");
        println!("  sketchboard --demo -o out.png   Export the demo snapshot to a path");
        println!("  sketchboard --help              Show help");
        println!();
        println!("The engine itself is a library; see the sketchboard crate docs for");
        println!("driving gestures, undo/redo, and export from your own front end.");
    }

    Ok(())
}

/// Exercises every tool and command through the public gesture API.
fn draw_demo_scene(state: &mut CanvasState) {
    let w = state.surface().width();
    let h = state.surface().height();

    // Freehand squiggle across the upper third
    state.style_mut().set_tool(Tool::Pen);
    state.style_mut().set_color(color::YELLOW);
    state.on_mouse_press(MouseButton::Left, w / 10, h / 4);
    for step in 1..=40 {
        let x = w / 10 + (w * 8 / 10) * step / 40;
        let y = h / 4 + ((step as f64 * 0.5).sin() * (h as f64 / 12.0)) as i32;
        state.on_mouse_motion(x, y);
    }
    state.on_mouse_release(MouseButton::Left, w * 9 / 10, h / 4);

    // One of each shape tool
    state.style_mut().set_tool(Tool::Circle);
    state.style_mut().set_color(color::BLUE);
    state.on_mouse_press(MouseButton::Left, w / 4, h / 2);
    state.on_mouse_motion(w / 4 + w / 10, h / 2 + h / 10);
    state.on_mouse_release(MouseButton::Left, w / 4 + w / 10, h / 2 + h / 10);

    state.style_mut().set_tool(Tool::Rect);
    state.style_mut().set_color(color::GREEN);
    state.on_mouse_press(MouseButton::Left, w / 2, h * 2 / 5);
    state.on_mouse_motion(w / 2 + w / 6, h * 2 / 5 + h / 5);
    state.on_mouse_release(MouseButton::Left, w / 2 + w / 6, h * 2 / 5 + h / 5);

    state.style_mut().set_tool(Tool::Triangle);
    state.style_mut().set_color(color::PINK);
    state.on_mouse_press(MouseButton::Left, w * 3 / 4, h * 3 / 4);
    state.on_mouse_motion(w * 3 / 4 - w / 8, h * 3 / 4 - h / 6);
    state.on_mouse_release(MouseButton::Left, w * 3 / 4 - w / 8, h * 3 / 4 - h / 6);

    // Erase a band through the squiggle
    state.style_mut().set_tool(Tool::Eraser);
    state.on_mouse_press(MouseButton::Left, w / 2, h / 5);
    state.on_mouse_motion(w / 2, h / 3);
    state.on_mouse_release(MouseButton::Left, w / 2, h / 3);

    // A stray stroke, removed again via the history controller
    state.style_mut().set_tool(Tool::Pen);
    state.style_mut().set_color(color::RED);
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(w, h);
    state.on_mouse_release(MouseButton::Left, w, h);
    state.handle_command(Command::Undo);

    // Undo/redo round trip, net no change
    state.handle_command(Command::Undo);
    state.handle_command(Command::Redo);

    log::info!(
        "Demo scene committed {} actions",
        state.history().committed().len()
    );
}
