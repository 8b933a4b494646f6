use env_logger::Env;
use std::error::Error;
use typeball::prelude::*;

/// usage: print_batch <font path stem> [text]
fn main() -> std::result::Result<(), Box<dyn Error>> {
    let env = Env::default()
        .filter_or("LOG_LVL", "debug")
        .write_style_or("LOG_STYLE", "always");
    env_logger::init_from_env(env);

    let mut args = std::env::args().skip(1);
    let stem = args.next().ok_or("missing font path stem")?;
    let text = args.next().unwrap_or_else(|| "Hello\nTypeball".to_string());

    let mut engine = EngineAttributes::new()
        .with_canvas_size(800.0, 450.0)
        .build_engine();
    engine.set_render_sink(|batch: BatchSnapshot| {
        for (i, (corner, uv)) in batch.points().zip(batch.uvs()).enumerate() {
            println!("{i:>5}: pos ({:>8.2}, {:>8.2}) uv ({:.4}, {:.4})", corner.x, corner.y, uv.x, uv.y);
        }
        println!("{} glyphs, {} triangles", batch.glyph_count(), batch.triangles().count());
    })?;
    engine.create_font(&stem, Some("demo"), true, 1.0, 4.0)?;
    engine.select_font("demo")?;

    let size = engine.get_text_size(32.0, &text)?;
    log::info!("text size: {}x{}", size.width, size.height);

    engine.switch_colors(Color32::YELLOW);
    engine.enable_shadows();
    engine.render_to_canvas(400.0 - size.width / 2.0, 225.0, 32.0, &text, true)?;
    engine.rotate_char(0, 15.0, true);
    engine.render()?;
    Ok(())
}
