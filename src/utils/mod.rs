pub mod file;
pub mod naming;
pub mod logging;

pub use file::{collect_font_paths, find_font_files, is_font_file};
pub use naming::{normalize_name, truncate_for_display};
pub use logging::init_logging;
