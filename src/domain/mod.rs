pub mod format;
pub mod keys;
pub mod state;
pub mod task;

pub use format::{format_duration, ColorBand};
pub use keys::{archive_key, day_key, date_part, display_key, sort_bucket_keys, today_key};
pub use state::{AppData, TimeRecord};
pub use task::{completion_ratio, generate_id, Task, NOTE_MAX_CHARS};
