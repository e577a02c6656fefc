//! Tola navigation - site menus with stable, build-wide memoized orderings.
//!
//! # Overview
//!
//! ```text
//! tola.toml [menus.*] ──► NavConfig::entries() ──► MenuEntry::marshall_map()
//!                                                         │
//!                                                         ▼
//!                                                   assemble() ──► Menus
//!                                                                    │
//!                 templates / CLI ──► menu.by_weight(&cache) ◄───────┘
//!                                            │
//!                                            ▼
//!                                  MenuCache (one per build)
//!                                            │
//!                                 first request per key only
//!                                            ▼
//!                                     stable sort engine
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod navigation;
pub mod utils;

pub use navigation::{
    Menu, MenuCache, MenuEntry, MenuSort, Menus, NavError, Page, PageMenus, Params, ParamsError,
    Value, assemble,
};
