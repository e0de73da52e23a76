// navdash controllers and engines
// Services implement the reactive behavior: backend access, search, the
// context menu, the edit modal, reordering, and the frequent section.

pub mod backend_client;
pub mod context_menu;
pub mod edit_modal;
pub mod frequent_section;
pub mod reorder_controller;
pub mod search_controller;
