/// UI widgets for DirBurst.

pub mod status_bar;
pub mod sunburst;
pub mod toolbar;
