use tracing::{Level, info};
use voxlink_core::{CoordinateRange, Order, Vector};

/// Builds the commands needed to read every block of `range`, using a single region query when
/// the range is a plain box walked in the server's own order.
fn read_commands(range: &CoordinateRange) -> Vec<String> {
    match range.cuboid_corners() {
        Some((first, last)) if range.order() == Order::Zxy => {
            vec![format!("world.getBlocks({first},{last})")]
        }
        _ => range
            .iter()
            .map(|v| format!("world.getBlockWithData({v})"))
            .collect(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .try_init();

    let origin = "-2,64,5".parse::<Vector>()?;
    let house = CoordinateRange::new(origin, origin + Vector::new(4, 3, 4))?;

    for command in read_commands(&house) {
        info!("{command}");
    }

    let pillars = CoordinateRange::with_step(origin, origin + 4, Vector::new(3, 1, 3), Order::Yxz)?;
    for command in read_commands(&pillars) {
        info!("{command}");
    }

    let top_layer = house.slice(Some(-16), None, None)?;
    info!("Top layer has {} blocks: {top_layer}", top_layer.len());
    for command in read_commands(&top_layer).iter().take(4) {
        info!("{command}");
    }

    Ok(())
}
