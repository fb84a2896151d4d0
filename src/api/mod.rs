pub mod cell;
pub mod grid;
pub mod viewport;

pub use cell::{GzdLocator, ZoneCell};
pub use grid::{
    GridAxis, GridEngine, GridFrame, GridGenerator, GridInterval, GridLabel, GridLine, GridMode,
    GridOutput,
};
pub use viewport::ViewportBounds;
