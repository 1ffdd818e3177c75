// Application layer: reading input lines and rendering batch results for the CLI.

pub mod input;
pub mod render;

pub use input::InputSource;
pub use render::{render_results, render_zone_list};
