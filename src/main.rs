//! Chat Fonts - Preview Entry Point
//!
//! Prints how every font role resolves with the persisted settings.
//!
//! ```text
//! chat-fonts [SCALE...]
//! ```

use chat_fonts::fonts::OpenTypeScale;
use chat_fonts::layout::LayoutGeneration;
use chat_fonts::toolkit::HeadlessToolkit;
use chat_fonts::{FontContext, FontSettings, FontStyle, Platform};
use gpui::{App, Application};
use std::rc::Rc;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let platform = Platform::current();
    let settings = FontSettings::load(platform).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load settings, using defaults");
        FontSettings::new(platform)
    });
    let scales = parse_scales(std::env::args().skip(1));

    Application::headless().run(move |cx: &mut App| {
        let context = FontContext::new(
            HeadlessToolkit::<OpenTypeScale>::new(),
            platform,
            settings,
            Rc::new(LayoutGeneration::new()),
            cx,
        );
        for scale in scales {
            print_scale(&context, scale, cx);
        }
        cx.quit();
    });
}

/// Scales given on the command line, `1.0` when none is valid
fn parse_scales(args: impl Iterator<Item = String>) -> Vec<f32> {
    let mut scales = Vec::new();
    for arg in args {
        match arg.parse::<f32>() {
            Ok(scale) if scale.is_finite() && scale > 0.0 => scales.push(scale),
            _ => tracing::warn!(argument = %arg, "Skipping invalid scale"),
        }
    }
    if scales.is_empty() {
        scales.push(1.0);
    }
    scales
}

fn print_scale(context: &FontContext<HeadlessToolkit<OpenTypeScale>>, scale: f32, cx: &mut App) {
    println!("scale {scale}");
    println!(
        "  {:<20} {:<18} {:>4} {:>6} {:<6} {:>11}",
        "style", "family", "size", "weight", "italic", "line height"
    );

    for style in FontStyle::ALL {
        let data = context
            .fonts()
            .update(cx, |fonts, cx| fonts.font_data(style, scale, cx));
        println!(
            "  {:<20} {:<18} {:>4} {:>6} {:<6} {:>11.1}",
            style.name(),
            data.descriptor.family.as_str(),
            data.descriptor.size,
            data.descriptor.weight.0,
            data.descriptor.italic,
            data.metrics.line_height()
        );
    }
}
