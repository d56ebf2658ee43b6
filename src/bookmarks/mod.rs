//! Bookmarks Module
//!
//! CRUD over the single `bookmarks` table.
//!
//! - [`BookmarkStore`] talks to the database through a borrowed connection
//! - the HTTP handlers validate input, call the store and escape free text on the way out
//! - [`routes`] wires both onto a router that is nested under a collection path
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookmarks::bookmarks;
//!
//! let app = Router::new()
//!     .nest("/api/bookmarks", bookmarks::routes())
//!     .with_state(app_state);
//!
//! let store = bookmarks::BookmarkStore::new(db.connection());
//! let all = store.list_all().await?;
//! ```

mod handler;
mod routes;
mod store;

pub use handler::FoundBookmark;
pub use routes::routes;
pub use store::BookmarkStore;

/// Returns the migrations for the bookmarks table.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[("bookmarks_001_schema.sql", include_str!("migrations/001_schema.sql"))]
}
