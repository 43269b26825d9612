use crate::render::RenderedView;

/// Visibility of the details modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Shown,
}

/// The details dialog: a title, HTML content and a visibility state.
///
/// # Fields
///
/// - `state` - Shown or hidden, never anything in between
/// - `title` - Title of the displayed technique
/// - `content` - HTML content of the displayed view
///
/// # Examples
/// ```rust
/// use ml_deconstructed::modal::{AlgorithmModal, ModalState};
///
/// let mut modal = AlgorithmModal::new();
/// modal.show();
/// assert_eq!(modal.get_state(), ModalState::Shown);
///
/// // A click inside the dialog keeps it open, a click on the backdrop closes it
/// modal.on_backdrop_click(false);
/// assert!(modal.is_shown());
/// modal.on_backdrop_click(true);
/// assert!(!modal.is_shown());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlgorithmModal {
    state: ModalState,
    title: String,
    content: String,
}

impl AlgorithmModal {
    pub fn new() -> Self {
        Self::default()
    }

    get_field!(get_state, state, ModalState);
    get_field_as_ref!(get_title, title, &str);
    get_field_as_ref!(get_content, content, &str);

    pub fn is_shown(&self) -> bool {
        self.state == ModalState::Shown
    }

    pub fn show(&mut self) {
        self.state = ModalState::Shown;
    }

    pub fn hide(&mut self) {
        self.state = ModalState::Hidden;
    }

    /// Replaces the title and content with those of `view`.
    ///
    /// An empty view leaves the modal untouched.
    ///
    /// # Returns
    ///
    /// - `bool` - `true` when the modal content was replaced
    pub fn set_view(&mut self, view: &RenderedView) -> bool {
        if view.is_empty() {
            return false;
        }
        self.title = view.title.clone();
        self.content = view.content.clone();
        true
    }

    /// Handles a click on the close button
    pub fn on_close_click(&mut self) {
        self.hide();
    }

    /// Handles a click that reached the modal overlay.
    ///
    /// # Parameters
    ///
    /// - `on_backdrop` - `true` when the click landed on the backdrop itself rather than the dialog
    pub fn on_backdrop_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.hide();
        }
    }
}
