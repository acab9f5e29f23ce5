//! Curva GUI - standalone equalizer control surface.

use clap::Parser;
use curva_gui::CurvaApp;
use eframe::egui;

/// Curva equalizer GUI application.
#[derive(Parser, Debug)]
#[command(name = "curva-gui")]
#[command(about = "Three-band equalizer with a live frequency-response display")]
#[command(version)]
struct Args {
    /// Design sample rate in Hz (default: 48000)
    #[arg(long, default_value = "48000")]
    sample_rate: f32,

    /// Display refresh rate in frames per second (default: 60)
    #[arg(long, default_value = "60")]
    refresh: f32,

    /// Fixed sweep resolution in points; defaults to one per pixel
    #[arg(long)]
    curve_width: Option<usize>,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting Curva GUI");
    tracing::info!(sample_rate = args.sample_rate, refresh = args.refresh, "display config");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([600.0, 450.0])
            .with_title("Curva"),
        ..Default::default()
    };

    let sample_rate = args.sample_rate;
    let refresh = args.refresh;
    let curve_width = args.curve_width;
    eframe::run_native(
        "Curva",
        options,
        Box::new(move |cc| {
            Ok(Box::new(
                CurvaApp::new(cc, sample_rate, refresh).with_curve_width(curve_width),
            ))
        }),
    )
}
