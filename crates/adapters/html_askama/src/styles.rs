//! Inline style definitions for the back-to-top affordance.

use std::fmt;

/// An ordered list of CSS declarations, rendered into a `style` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style(&'static [(&'static str, &'static str)]);

impl Style {
    /// Render as `property: value;` pairs separated by spaces.
    #[must_use]
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

/// Fixed bar pinned to the bottom of the viewport.
pub const OVERLAY_CONTAINER: Style = Style(&[
    ("position", "fixed"),
    ("bottom", "0"),
    ("width", "100%"),
    ("padding-top", "20px"),
    ("padding-bottom", "20px"),
    ("background", "transparent"),
    ("z-index", "1234567"),
]);

/// Block placed in the normal document flow.
pub const INLINE_CONTAINER: Style = Style(&[
    ("width", "100%"),
    ("margin-top", "20px"),
    ("margin-bottom", "40px"),
]);

/// The link itself, on a translucent white backdrop.
pub const LINK: Style = Style(&[
    ("background", "rgba(255, 255, 255, .8)"),
    ("padding", ".5em .5em 2em .5em"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_overlay_container_css() {
        assert_eq!(
            OVERLAY_CONTAINER.css(),
            "position: fixed; bottom: 0; width: 100%; padding-top: 20px; \
             padding-bottom: 20px; background: transparent; z-index: 1234567;"
        );
    }

    #[test]
    fn should_render_inline_container_css() {
        assert_eq!(
            INLINE_CONTAINER.css(),
            "width: 100%; margin-top: 20px; margin-bottom: 40px;"
        );
    }

    #[test]
    fn should_render_link_css() {
        assert_eq!(
            LINK.css(),
            "background: rgba(255, 255, 255, .8); padding: .5em .5em 2em .5em;"
        );
    }

    #[test]
    fn should_display_same_text_as_css() {
        assert_eq!(LINK.to_string(), LINK.css());
    }
}
