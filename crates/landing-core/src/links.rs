/// One clickable label on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkEntry {
    pub text: &'static str,
    pub url: &'static str,
    /// Carried for completeness; the scene does not render it.
    pub subtitle: Option<&'static str>,
}

/// Labels in display order, top to bottom.
pub const LINKS: [LinkEntry; 4] = [
    LinkEntry {
        text: "elijah",
        url: "https://elijer.github.io/garden/",
        subtitle: Some("Fullstack Engineer"),
    },
    LinkEntry {
        text: "linkedin",
        url: "https://www.linkedin.com/in/eliken/",
        subtitle: None,
    },
    LinkEntry {
        text: "portfolio",
        url: "https://elijahkennedy.com/",
        subtitle: None,
    },
    LinkEntry {
        text: "resume",
        url: "https://docs.google.com/document/d/1Ro5m4rc0K3R9cp_rjB0Fiy0Z3pVhYxavZLxaeGassks/edit?usp=sharing",
        subtitle: None,
    },
];
