#![windows_subsystem = "windows"]

use anyhow::Result;
use log::{LevelFilter, info};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

mod sketch;
mod surface;

use sketch::Sketch;
use surface::{HEIGHT, Surface, WIDTH};

fn init_logging() {
    env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init()
}

fn main() -> Result<()> {
    init_logging();

    let mut window = Window::new(
        "rsketch",
        WIDTH,
        HEIGHT,
        WindowOptions { resize: false, ..WindowOptions::default() },
    )?;
    window.set_target_fps(60);
    info!("画布 {}x{},按 Esc 退出", WIDTH, HEIGHT);

    let mut sketch = Sketch::new(Surface::new(WIDTH, HEIGHT));
    let mut was_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let down = window.get_mouse_down(MouseButton::Left);
        // Pass 模式:坐标不做夹取,窗口外、负值都原样上报
        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Pass) {
            let x = mx as i32;
            let y = my as i32;
            if down && !was_down {
                sketch.pointer_down(x, y);
            } else if down {
                sketch.pointer_move(x, y);
            }
        }
        if !down && was_down {
            sketch.pointer_up();
        }
        was_down = down;

        window.update_with_buffer(sketch.surface().data(), WIDTH, HEIGHT)?;
    }

    info!("退出,共画了 {} 个矩形", sketch.rects().len());
    Ok(())
}
