use globenet_rs::{GlobeError, GlobeLayout, GlobeNet, build_panel};
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

fn main() -> Result<(), GlobeError> {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("Logger unavailable: {}", e);
    }

    // Optional layout file as the only argument.
    let layout = match std::env::args().nth(1) {
        Some(path) => GlobeLayout::from_json_file(path)?,
        None => GlobeLayout::default(),
    };

    let panel = build_panel(&layout, 0, 0)?;
    info!("Panel {}: lon_mid {}", panel.index, panel.lon_mid);
    info!("Latitude span: {:?}", panel.lat_range());
    info!("Transform: {:?}", panel.transform);

    let net = GlobeNet::build(&layout);
    if let Some((width, height)) = net.pixel_extent() {
        info!("Net of {} panels prints at {} x {} px", net.len(), width, height);
    }

    Ok(())
}
