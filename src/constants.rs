use std::time::Duration;

pub const DEFAULT_AUTO_SLIDE_DELAY: Duration = Duration::from_millis(5000); // Time between automatic advances
pub const DEFAULT_SLIDE_SELECTOR: &str = ".carousel-slide";                 // Class carried by every slide
pub const DEFAULT_DOT_SELECTOR: &str = ".dot";                              // Class carried by every indicator dot
pub const ACTIVE_CLASS: &str = "active";                                    // Marker for the shown slide and its dot
