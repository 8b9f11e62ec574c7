//! "Back to top" affordance: a link to the page anchor inside a styled
//! container, pinned to the viewport or placed inline.

use askama::Template;
use serde::Deserialize;

use crate::error::RenderError;
use crate::styles::{INLINE_CONTAINER, LINK, OVERLAY_CONTAINER, Style};

/// Where the container sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Fixed to the bottom of the viewport.
    Overlay,
    /// In the document flow, after the content.
    #[default]
    Inline,
}

impl Placement {
    /// Container style for this placement.
    #[must_use]
    pub fn container(self) -> Style {
        match self {
            Self::Overlay => OVERLAY_CONTAINER,
            Self::Inline => INLINE_CONTAINER,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overlay => "overlay",
            Self::Inline => "inline",
        }
    }
}

/// The back-to-top component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackToTop {
    pub placement: Placement,
    /// Link target, usually a fragment such as `#top`.
    pub target: String,
    pub label: String,
}

impl Default for BackToTop {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            target: "#top".to_string(),
            label: "Back to top".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "back_to_top.html")]
struct BackToTopTemplate<'a> {
    placement: Placement,
    container_style: String,
    link_style: String,
    target: &'a str,
    label: &'a str,
}

impl BackToTop {
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Render the component markup.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if the template fails.
    pub fn render(&self) -> Result<String, RenderError> {
        let template = BackToTopTemplate {
            placement: self.placement,
            container_style: self.placement.container().css(),
            link_style: LINK.css(),
            target: &self.target,
            label: &self.label,
        };
        Ok(template.render()?)
    }
}
