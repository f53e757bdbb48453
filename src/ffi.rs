//! C FFI layer for the ASCIIboard core library.
//!
//! The host app and the keyboard extension each create their own handle with
//! `asciiboard_new()`; both end up reading and writing the same shared
//! storage domain.
//!
//! All complex data types are returned as JSON strings that the caller must
//! release with `asciiboard_string_free()`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::Path;
use std::ptr;

use serde::Serialize;

use crate::board::{Board, FavoriteSort};
use crate::config::Config;
use crate::logging::init_logging;

/// Opaque handle to a process's board.
///
/// Created by `asciiboard_new()` and freed with `asciiboard_free()`.
pub struct BoardHandle {
    board: Board,
}

/// Convert a C string argument, `None` for null or invalid UTF-8
unsafe fn arg<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

/// Serialize a value into a caller-owned C string
fn to_json<T: Serialize + ?Sized>(value: &T) -> *mut c_char {
    let json = match serde_json::to_string(value) {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Create a board for this process.
///
/// `config_path` may be null to use the default config location. Returns
/// null only if the path is not valid UTF-8; storage problems fall back to
/// process-local storage instead of failing.
///
/// # Safety
/// `config_path` must be null or a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_new(config_path: *const c_char) -> *mut BoardHandle {
    let config = if config_path.is_null() {
        Config::load()
    } else {
        match arg(config_path) {
            Some(path) => Config::load_from(Path::new(path)),
            None => return ptr::null_mut(),
        }
    };

    init_logging(&config.logging.filter);

    let handle = Box::new(BoardHandle {
        board: Board::open(&config),
    });
    Box::into_raw(handle)
}

/// Free a board.
///
/// # Safety
/// The handle must be a valid pointer returned by `asciiboard_new()`.
/// After calling this function, the handle is no longer valid.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_free(handle: *mut BoardHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Free a string returned by any other function in this module.
///
/// # Safety
/// The pointer must come from this library and not have been freed yet.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Library
// ============================================================================

/// Search the built-in library. Returns a JSON array of items.
///
/// # Safety
/// The handle must be valid and the query must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_search(
    handle: *mut BoardHandle,
    query: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let Some(query) = arg(query) else {
        return ptr::null_mut();
    };

    to_json(&(*handle).board.search(query))
}

/// Every built-in item. Returns a JSON array of items.
///
/// # Safety
/// The handle must be valid.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_all_items(handle: *mut BoardHandle) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    to_json(&(*handle).board.all_items())
}

/// A built-in category as a JSON object, or JSON `null` if there is none.
///
/// # Safety
/// The handle must be valid and the id must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_category(
    handle: *mut BoardHandle,
    id: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let Some(id) = arg(id) else {
        return ptr::null_mut();
    };

    to_json(&(*handle).board.category(id))
}

/// The categories a frontend should show, "Custom" first when non-empty.
///
/// # Safety
/// The handle must be valid.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_visible_categories(handle: *mut BoardHandle) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    to_json(&(*handle).board.visible_categories())
}

// ============================================================================
// Favorites
// ============================================================================

/// # Safety
/// The handle must be valid and the id must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_is_favorite(
    handle: *mut BoardHandle,
    id: *const c_char,
) -> bool {
    if handle.is_null() {
        return false;
    }
    match arg(id) {
        Some(id) => (*handle).board.is_favorite(id),
        None => false,
    }
}

/// Toggle a favorite. Returns whether the item is a favorite afterwards.
///
/// # Safety
/// The handle must be valid and the id must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_toggle_favorite(
    handle: *mut BoardHandle,
    id: *const c_char,
) -> bool {
    if handle.is_null() {
        return false;
    }
    match arg(id) {
        Some(id) => (*handle).board.toggle(id),
        None => false,
    }
}

/// Favorite items as a JSON array.
///
/// `sort` is 0 for oldest-first, 1 for newest-first, 2 by name and 3 by
/// category. `query` may be null for no filter.
///
/// # Safety
/// The handle must be valid and `query` null or a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_favorite_items(
    handle: *mut BoardHandle,
    query: *const c_char,
    sort: u32,
) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let board = &(*handle).board;
    let query = arg(query).unwrap_or("");

    let items = match sort {
        1 => board.sorted_favorites(query, FavoriteSort::DateAdded),
        2 => board.sorted_favorites(query, FavoriteSort::Name),
        3 => board.sorted_favorites(query, FavoriteSort::Category),
        _ => {
            let mut items = board.sorted_favorites(query, FavoriteSort::DateAdded);
            items.reverse();
            items
        }
    };
    to_json(&items)
}

// ============================================================================
// Custom items
// ============================================================================

/// Add a custom item. Returns the created item as a JSON object.
///
/// Inputs are stored as given; trim and validate before calling.
///
/// # Safety
/// The handle must be valid and all strings valid C strings.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_add_custom(
    handle: *mut BoardHandle,
    name: *const c_char,
    art: *const c_char,
    category_id: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let (Some(name), Some(art), Some(category_id)) = (arg(name), arg(art), arg(category_id))
    else {
        return ptr::null_mut();
    };

    to_json(&(*handle).board.add(name, art, category_id))
}

/// Remove a custom item. Returns whether anything was removed.
///
/// # Safety
/// The handle must be valid and the id must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_remove_custom(
    handle: *mut BoardHandle,
    id: *const c_char,
) -> bool {
    if handle.is_null() {
        return false;
    }
    match arg(id) {
        Some(id) => (*handle).board.remove(id),
        None => false,
    }
}

/// Custom items filed under a category as a JSON array, in creation order.
///
/// # Safety
/// The handle must be valid and the id must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_items_for_category(
    handle: *mut BoardHandle,
    category_id: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let Some(category_id) = arg(category_id) else {
        return ptr::null_mut();
    };

    to_json(&(*handle).board.items_for_category(category_id))
}

// ============================================================================
// Combined views
// ============================================================================

/// Items for a category tab as a JSON array: built-in items followed by
/// custom items filed under the category, or every custom item for `custom`.
///
/// # Safety
/// The handle must be valid and the id must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_category_items(
    handle: *mut BoardHandle,
    category_id: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let Some(category_id) = arg(category_id) else {
        return ptr::null_mut();
    };

    to_json(&(*handle).board.category_items(category_id))
}

/// Search custom items and the built-in library. Returns a JSON array of
/// items, custom items first.
///
/// # Safety
/// The handle must be valid and the query must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_search_all(
    handle: *mut BoardHandle,
    query: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let Some(query) = arg(query) else {
        return ptr::null_mut();
    };

    to_json(&(*handle).board.search_all(query))
}

/// Where this board's storage lives, as a JSON string: `"shared"`,
/// `"processLocal"` or `"memory"`.
///
/// # Safety
/// The handle must be valid.
#[no_mangle]
pub unsafe extern "C" fn asciiboard_storage_scope(handle: *mut BoardHandle) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    to_json(&(*handle).board.scope())
}
