//! Page Handlers
//!
//! One handler per interactive widget. Each takes its elements and
//! collaborators explicitly; `bindings` resolves them from the live page.

mod candle;
mod comment_counter;
mod display_name_editor;
mod icon_delete;
mod sidebar;

pub use candle::CandleToggle;
pub use comment_counter::CommentCounter;
pub use display_name_editor::{DisplayNameEditor, ORIGINAL_ATTR};
pub use icon_delete::{DeleteOutcome, DeleteSettings, IconDeleter};
pub use sidebar::SidebarToggle;
