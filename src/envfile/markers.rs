//! Redaction markers found in env file comments.

/// Forces redaction of the line it appears on.
pub const SECRET: &str = "!SECRET";

/// Starts a mask region.
pub const MASK_ON: &str = "!MASK-ON";

/// Ends a mask region.
pub const MASK_OFF: &str = "!MASK-OFF";

/// Markers present in a single comment.
///
/// Detection is plain substring matching on the comment text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    /// `!SECRET` is present.
    pub secret: bool,
    /// `!MASK-ON` is present.
    pub mask_on: bool,
    /// `!MASK-OFF` is present.
    pub mask_off: bool,
}

impl Markers {
    /// Scan an optional comment for markers.
    ///
    /// # Example
    ///
    /// ```
    /// use examplenv::envfile::Markers;
    ///
    /// let markers = Markers::scan(Some("# !MASK-ON"));
    /// assert!(markers.mask_on);
    /// assert!(!markers.secret);
    ///
    /// assert_eq!(Markers::scan(None), Markers::default());
    /// ```
    pub fn scan(comment: Option<&str>) -> Self {
        match comment {
            Some(text) => Self {
                secret: text.contains(SECRET),
                mask_on: text.contains(MASK_ON),
                mask_off: text.contains(MASK_OFF),
            },
            None => Self::default(),
        }
    }

    /// Whether the comment toggles the mask region.
    pub fn is_region_marker(&self) -> bool {
        self.mask_on || self.mask_off
    }
}
