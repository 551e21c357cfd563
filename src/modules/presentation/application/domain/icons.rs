use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

/// What the client needs to draw an icon from its glyph set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct IconView {
    #[schema(example = "BarChart3")]
    pub name: String,
}

pub trait IconRenderer: Send + Sync {
    fn render(&self) -> IconView;
}

/// An icon from the lucide set, referenced by component name.
#[derive(Debug, Clone, Copy)]
pub struct LucideIcon(pub &'static str);

impl IconRenderer for LucideIcon {
    fn render(&self) -> IconView {
        IconView {
            name: self.0.to_string(),
        }
    }
}

/// Page section an icon is drawn in. Each has its own fallback glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSection {
    Work,
    Education,
    Skills,
    Social,
    Services,
}

impl IconSection {
    pub fn fallback(self) -> &'static str {
        match self {
            IconSection::Work => "BarChart3",
            IconSection::Education => "GraduationCap",
            IconSection::Skills => "Code",
            IconSection::Social => "Linkedin",
            IconSection::Services => "BarChart3",
        }
    }
}

const LUCIDE_NAMES: &[&str] = &[
    "Atom",
    "BarChart",
    "BarChart3",
    "BookOpen",
    "Braces",
    "Brain",
    "Briefcase",
    "Building",
    "Cloud",
    "Code",
    "Coffee",
    "Cpu",
    "Database",
    "Facebook",
    "FileCode",
    "Github",
    "Globe",
    "GraduationCap",
    "Instagram",
    "Laptop",
    "Layers",
    "LayoutDashboard",
    "LineChart",
    "Link",
    "Linkedin",
    "Mail",
    "PieChart",
    "School",
    "Server",
    "Shield",
    "Table",
    "Terminal",
    "Twitter",
    "Youtube",
];

/// Stored records name their icon by string; this resolves the name to a
/// renderer, falling back per section on a miss.
pub struct IconRegistry {
    renderers: HashMap<String, Arc<dyn IconRenderer>>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for name in LUCIDE_NAMES {
            registry.register(name, Arc::new(LucideIcon(name)));
        }
        registry
    }
}

impl IconRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, renderer: Arc<dyn IconRenderer>) {
        self.renderers.insert(name.to_string(), renderer);
    }

    pub fn resolve(&self, name: Option<&str>, section: IconSection) -> Arc<dyn IconRenderer> {
        name.map(str::trim)
            .and_then(|n| self.renderers.get(n))
            .or_else(|| self.renderers.get(section.fallback()))
            .cloned()
            .unwrap_or_else(|| Arc::new(LucideIcon(section.fallback())))
    }

    pub fn render(&self, name: Option<&str>, section: IconSection) -> IconView {
        self.resolve(name, section).render()
    }
}
