use std::error::Error;
use std::io;

use log::info;

use mirror_trace::picture::{Color, Picture};
use mirror_trace::render::render_frame;
use mirror_trace::terminal::write_picture;
use mirror_trace::{RenderConfig, Scene};

const WIDTH: u32 = 80;
const HEIGHT: u32 = 50;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene = Scene::reference()?;
    let config = RenderConfig::default();

    let mut picture = Picture::filled(Color::BLACK, (WIDTH, HEIGHT));
    render_frame(picture.view_mut(), &scene, &config);

    let stdout = io::stdout();
    write_picture(&mut stdout.lock(), &picture.view())?;
    info!(target: "app", "Wrote {}x{} picture", WIDTH, HEIGHT);
    Ok(())
}
