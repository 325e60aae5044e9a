//! Browser bindings for the egg tools: page-scoped localStorage and
//! persisted UI state.

pub mod hooks;
pub mod storage;

pub use hooks::use_persisted;
pub use storage::{
    current_page_path, get_local_storage, page_scope, page_storage, set_local_storage,
    BrowserStorage,
};
