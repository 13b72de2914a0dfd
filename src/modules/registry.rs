// Page registry - pure logic, no Tauri imports.
// Holds every page the shell knows about, in first-registration order.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Icon shown in the menu for pages registered without one.
pub const DEFAULT_ICON: &str = "fas fa-file";

/// Produces the content payload for a page. Renderers have no access to the
/// registry, so rendering can never mutate it.
pub type RenderFn = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct PageEntry {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    render: RenderFn,
}

impl PageEntry {
    /// Builds an entry, falling back to the placeholder renderer bound to
    /// `label` and `id` when no renderer is supplied.
    pub fn new(id: String, label: String, icon: Option<String>, render: Option<RenderFn>) -> Self {
        let render = render.unwrap_or_else(|| placeholder_renderer(&label, &id));
        Self {
            id,
            label,
            icon,
            render,
        }
    }

    pub fn render(&self) -> String {
        (self.render)()
    }

    pub fn menu_item(&self) -> MenuItem {
        MenuItem {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self
                .icon
                .clone()
                .filter(|icon| !icon.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ICON.to_string()),
        }
    }
}

impl fmt::Debug for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageEntry")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// One sidebar link, as sent to the webview.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub icon: String,
}

/// Outcome of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    Replaced,
}

#[derive(Default)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
    index: HashMap<String, usize>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the entry, or overwrites an existing one with the same id.
    /// An overwritten entry keeps its original menu position.
    pub fn insert(&mut self, entry: PageEntry) -> Registration {
        match self.index.get(&entry.id) {
            Some(&slot) => {
                self.entries[slot] = entry;
                Registration::Replaced
            }
            None => {
                self.index.insert(entry.id.clone(), self.entries.len());
                self.entries.push(entry);
                Registration::Inserted
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&PageEntry> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.entries.iter().map(PageEntry::menu_item).collect()
    }
}

/// Content shown for pages registered without a renderer.
pub fn placeholder_content(label: &str, id: &str) -> String {
    format!(
        r#"<div class="page-section">
    <h1 class="page-title">{label}</h1>
    <div class="page-subtitle">
        This is the {lower} page. You can customize this content by providing a render function when registering the page.
    </div>
    <div class="card">
        <div class="card-content">
            <p>To customize this page, register it with a render function:</p>
            <pre class="code-block"><code>register_page('{id}', '{label}', 'fas fa-icon', '&lt;div&gt;Your custom HTML content here&lt;/div&gt;')</code></pre>
        </div>
    </div>
</div>"#,
        label = label,
        lower = label.to_lowercase(),
        id = id,
    )
}

pub fn placeholder_renderer(label: &str, id: &str) -> RenderFn {
    let content = placeholder_content(label, id);
    Arc::new(move || content.clone())
}

/// Wraps fixed markup as a renderer.
pub fn static_renderer(content: impl Into<String>) -> RenderFn {
    let content = content.into();
    Arc::new(move || content.clone())
}
