//! Site navigation menus.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │                          Menu Lifecycle                               │
//! ├───────────────────────────────────────────────────────────────────────┤
//! │                                                                       │
//! │  Assembly (single-threaded)                                           │
//! │  ┌──────────────┐     ┌──────────────┐     ┌──────────────────────┐   │
//! │  │ open maps    │ ──► │ marshall_map │ ──► │ assemble() ─► Menus  │   │
//! │  │ (config)     │     │ (MenuEntry)  │     │ (sorted forests)     │   │
//! │  └──────────────┘     └──────────────┘     └──────────────────────┘   │
//! │                                                                       │
//! │  Rendering (many workers)                                             │
//! │  ┌──────────────┐     ┌──────────────┐     ┌──────────────────────┐   │
//! │  │ by_weight()  │ ──► │ MenuCache    │ ──► │ MenuSort::apply      │   │
//! │  │ by_name()    │     │ (per build)  │     │ (first request only) │   │
//! │  │ reverse()    │     └──────────────┘     └──────────────────────┘   │
//! │  └──────────────┘                                                     │
//! │                                                                       │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are read-only once a menu is shared with renderers; `add` and
//! `marshall_map` belong to the assembly phase.

mod assemble;
mod cache;
mod entry;
mod error;
mod menu;
mod params;
mod sort;

pub use assemble::assemble;
pub use cache::MenuCache;
pub use entry::{MenuEntry, Page};
pub use error::{NavError, ParamsError};
pub use menu::{Menu, Menus, PageMenus};
pub use params::{Params, to_params_and_prepare};
pub use serde_json::Value;
pub use sort::{MenuSort, default_order, name_order};

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use super::{Page, Params};

    /// Minimal page for tests.
    #[derive(Debug, Default)]
    pub struct TestPage {
        pub title: String,
        pub permalink: String,
        pub params: Params,
    }

    impl TestPage {
        pub fn shared(title: &str, permalink: &str) -> Arc<dyn Page> {
            Arc::new(Self {
                title: title.to_owned(),
                permalink: permalink.to_owned(),
                params: Params::new(),
            })
        }
    }

    impl Page for TestPage {
        fn link_title(&self) -> &str {
            &self.title
        }

        fn rel_permalink(&self) -> &str {
            &self.permalink
        }

        fn path(&self) -> &str {
            self.permalink.trim_end_matches('/')
        }

        fn section(&self) -> &str {
            self.path().trim_start_matches('/').split('/').next().unwrap_or("")
        }

        fn weight(&self) -> i32 {
            0
        }

        fn is_page(&self) -> bool {
            true
        }

        fn is_section(&self) -> bool {
            false
        }

        fn is_ancestor(&self, other: &dyn Page) -> bool {
            other.path().starts_with(self.path()) && other.path() != self.path()
        }

        fn params(&self) -> &Params {
            &self.params
        }
    }

    #[test]
    fn test_page_helpers() {
        let posts = TestPage::shared("Posts", "/posts/");
        let hello = TestPage::shared("Hello", "/posts/hello/");
        assert_eq!(hello.section(), "posts");
        assert!(posts.is_ancestor(hello.as_ref()));
        assert!(!hello.is_ancestor(posts.as_ref()));
        assert!(hello.params().is_empty());
    }
}
