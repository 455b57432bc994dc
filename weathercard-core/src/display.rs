//! The display container the controller renders into.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Heading,
    Paragraph,
}

/// A presentation element inserted into the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub text: String,
    pub class: &'static str,
    pub background: Option<String>,
    pub border: Option<String>,
}

impl Element {
    pub fn heading(text: impl Into<String>, class: &'static str) -> Self {
        Self { tag: Tag::Heading, text: text.into(), class, background: None, border: None }
    }

    pub fn paragraph(text: impl Into<String>, class: &'static str) -> Self {
        Self { tag: Tag::Paragraph, text: text.into(), class, background: None, border: None }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_border(mut self, border: impl Into<String>) -> Self {
        self.border = Some(border.into());
        self
    }
}

/// Host-provided output region.
pub trait DisplaySurface: Send {
    /// Remove every child and the container background.
    fn clear(&mut self);

    fn set_visible(&mut self, visible: bool);

    fn set_background(&mut self, background: &str);

    fn append(&mut self, element: Element);
}

/// In-memory container. Starts hidden and empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub visible: bool,
    pub background: Option<String>,
    pub children: Vec<Element>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.children.iter().map(|el| el.text.as_str()).collect()
    }
}

impl DisplaySurface for Card {
    fn clear(&mut self) {
        self.children.clear();
        self.background = None;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_background(&mut self, background: &str) {
        self.background = Some(background.to_string());
    }

    fn append(&mut self, element: Element) {
        self.children.push(element);
    }
}
