//! Portfolio sections the router can switch between

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Stack,
    Projects,
    Lab,
    Contact,
}

impl Section {
    /// Navbar order.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Stack,
        Section::Projects,
        Section::Lab,
        Section::Contact,
    ];

    /// Identifier used by `goto <section>` and the config file.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Stack => "stack",
            Section::Projects => "projects",
            Section::Lab => "lab",
            Section::Contact => "contact",
        }
    }

    /// Exact, lowercase match on the identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Hello, world",
            Section::About => "About me",
            Section::Stack => "Tech stack",
            Section::Projects => "Projects",
            Section::Lab => "Lab",
            Section::Contact => "Contact",
        }
    }

    /// Short body text for the section page.
    pub fn blurb(self) -> &'static [&'static str] {
        match self {
            Section::Hero => &[
                "Full Stack Developer building interfaces that feel alive.",
                "Open the terminal and look around.",
            ],
            Section::About => &[
                "I design and ship web products end to end,",
                "from data models to the last animation frame.",
            ],
            Section::Stack => &[
                "TypeScript, React, Node.js, Python, PostgreSQL, Docker.",
                "Comfortable anywhere between the database and the pixel.",
            ],
            Section::Projects => &[
                "Selected work: dashboards, e-commerce platforms, internal tools.",
                "Each one shipped, measured and iterated on.",
            ],
            Section::Lab => &[
                "Experiments with particles, shaders and generative layouts.",
                "Some of them even work.",
            ],
            Section::Contact => &[
                "Have a project in mind? Let's talk.",
                "Reach out through the links in the footer.",
            ],
        }
    }

    /// Position in navbar order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
