//! Menu entries and the narrow page view they link to.

use std::{fmt, sync::Arc};

use serde_json::{Map, Value};

use super::{
    error::NavError,
    menu::Menu,
    params::{Params, to_params_and_prepare},
};
use crate::utils::cast;

// ============================================================================
// Page
// ============================================================================

/// The part of a content page a menu entry needs to read.
///
/// Pages are owned by the content layer and shared with menus through
/// `Arc`; this crate never constructs them.
pub trait Page: fmt::Debug + Send + Sync {
    /// Title used for links (short title if set, else the full title).
    fn link_title(&self) -> &str;

    /// Permalink relative to the site root, e.g. `/posts/hello/`.
    fn rel_permalink(&self) -> &str;

    /// Logical path of the page's source, e.g. `/posts/hello`.
    fn path(&self) -> &str;

    /// First path segment, empty for the home page.
    fn section(&self) -> &str;

    fn weight(&self) -> i32;

    /// Regular (leaf) page.
    fn is_page(&self) -> bool;

    fn is_section(&self) -> bool;

    /// Whether this page is an ancestor of `other` in the content tree.
    fn is_ancestor(&self, other: &dyn Page) -> bool;

    fn params(&self) -> &Params;
}

// ============================================================================
// MenuEntry
// ============================================================================

/// One navigation item, from site config or page front matter.
///
/// # Fields
///
/// | Field | Example | Notes |
/// |-------|---------|-------|
/// | `configured_url` | `https://github.com/kawayww` | used when no page is linked |
/// | `page_ref` | `/about` | resolved to `page` outside this crate |
/// | `identifier` | `blog` | unique key, falls back to `name` |
/// | `parent` | `blog` | key of the parent entry, empty at top level |
/// | `weight` | `10` | `0` means "not set" and sorts last |
#[derive(Debug, Clone, Default)]
pub struct MenuEntry {
    /// The URL value from front matter or config.
    pub configured_url: String,

    /// The page this entry links to, if resolved.
    pub page: Option<Arc<dyn Page>>,

    /// Path to the page, only relevant for menus defined in site config.
    pub page_ref: String,

    pub name: String,

    /// Name of the menu containing this entry.
    pub menu: String,

    pub identifier: String,

    title: String,

    /// Rendered before this entry. Passed through verbatim.
    pub pre: String,

    /// Rendered after this entry. Passed through verbatim.
    pub post: String,

    /// Sort weight, negative or positive. Zero is "unset".
    pub weight: i32,

    /// Identifier of the parent entry.
    pub parent: String,

    /// Child entries. `None` and an empty menu are different things,
    /// see [`MenuEntry::has_children`].
    pub children: Option<Menu>,

    pub params: Params,
}

impl MenuEntry {
    /// Create an entry with a name and a configured URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configured_url: url.into(),
            ..Self::default()
        }
    }

    /// Build an entry from an open map, see [`MenuEntry::marshall_map`].
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, NavError> {
        let mut entry = Self::default();
        entry.marshall_map(map)?;
        Ok(entry)
    }

    pub fn with_page(mut self, page: Arc<dyn Page>) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = parent.into();
        self
    }

    pub fn with_menu(mut self, menu: impl Into<String>) -> Self {
        self.menu = menu.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_children(mut self, children: Menu) -> Self {
        self.children = Some(children);
        self
    }

    /// Resolved target URL.
    ///
    /// A linked page wins over the configured URL, so an entry added with
    /// both `pageRef` and `url` keeps pointing at the page, and the URL only
    /// serves as fallback when the page doesn't exist (e.g. in one language).
    pub fn url(&self) -> &str {
        match &self.page {
            Some(page) => page.rel_permalink(),
            None => &self.configured_url,
        }
    }

    /// Display title: explicit title, else the linked page's link title.
    pub fn title(&self) -> &str {
        if !self.title.is_empty() {
            return &self.title;
        }
        self.page.as_ref().map_or("", |page| page.link_title())
    }

    /// Whether this entry has a children menu.
    ///
    /// An empty but present children menu counts.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Key used to identify this entry among its siblings.
    pub fn key_name(&self) -> &str {
        if self.identifier.is_empty() {
            &self.name
        } else {
            &self.identifier
        }
    }

    /// Identifier, else URL, else name.
    fn unique_id(&self) -> &str {
        if !self.identifier.is_empty() {
            &self.identifier
        } else if !self.url().is_empty() {
            self.url()
        } else {
            &self.name
        }
    }

    /// Whether both entries represent the same menu entry.
    pub fn is_equal(&self, other: &MenuEntry) -> bool {
        self.unique_id() == other.unique_id() && self.parent == other.parent
    }

    /// Whether both entries point to the same resource.
    ///
    /// Two linked pages are compared by identity. Otherwise both resolved
    /// URLs must be non-empty and equal.
    pub fn is_same_resource(&self, other: &MenuEntry) -> bool {
        if let (Some(a), Some(b)) = (&self.page, &other.page)
            && std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
        {
            return true;
        }

        let (a, b) = (self.url(), other.url());
        !a.is_empty() && !b.is_empty() && a == b
    }

    /// Whether any descendant of this entry points to the same resource as
    /// `other`. Used to mark the active trail in rendered navigation.
    pub fn contains_resource(&self, other: &MenuEntry) -> bool {
        self.children.as_ref().is_some_and(|children| {
            children
                .iter()
                .any(|child| child.is_same_resource(other) || child.contains_resource(other))
        })
    }

    /// Assign fields from an open map, matching keys case-insensitively.
    ///
    /// Unknown keys are ignored and scalars are coerced leniently. The only
    /// failure is a `params` value that is neither a map nor null; every
    /// other field is still assigned before the error is returned.
    pub fn marshall_map(&mut self, map: &Map<String, Value>) -> Result<(), NavError> {
        let mut params_err = None;

        for (key, value) in map {
            match key.to_lowercase().as_str() {
                "url" => self.configured_url = cast::to_string(value),
                "pageref" => self.page_ref = cast::to_string(value),
                "weight" => self.weight = cast::to_int(value),
                "name" => self.name = cast::to_string(value),
                "menu" => self.menu = cast::to_string(value),
                "title" => self.title = cast::to_string(value),
                "pre" => self.pre = cast::to_string(value),
                "post" => self.post = cast::to_string(value),
                "identifier" => self.identifier = cast::to_string(value),
                "parent" => self.parent = cast::to_string(value),
                "params" => match to_params_and_prepare(value) {
                    Ok(params) => self.params = params,
                    Err(err) => params_err = Some(err),
                },
                _ => {}
            }
        }

        match params_err {
            Some(source) => Err(NavError::Marshal {
                key: self.key_name().to_owned(),
                source,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_name())?;
        if !self.url().is_empty() {
            write!(f, " -> {}", self.url())?;
        }
        Ok(())
    }
}
