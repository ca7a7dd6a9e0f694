/// Photo intake state
///
/// Single owner of the current selection and the transient drag/zoom flags.
/// Drop and browse both funnel into the same upload flow, and every async
/// completion is stamped with a generation so a slow decode can never clobber
/// a newer selection.

use crate::intake::encode::AcceptedImage;

/// Whether a photo is currently selected
#[derive(Debug, Clone, Default)]
pub enum UploadState {
    #[default]
    Empty,
    Selected(AcceptedImage),
}

/// Drag, selection and zoom state for the upload panel
#[derive(Debug, Default)]
pub struct Intake {
    /// Visual-only flag while a file hovers over the window
    drag_active: bool,
    /// Transient full-size preview flag
    show_zoom: bool,
    state: UploadState,
    /// Highest generation handed to an encode task so far
    issued: u64,
}

impl Intake {
    pub fn begin_drag(&mut self) {
        self.drag_active = true;
    }

    pub fn end_drag(&mut self) {
        self.drag_active = false;
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn current(&self) -> Option<&AcceptedImage> {
        match &self.state {
            UploadState::Selected(image) => Some(image),
            UploadState::Empty => None,
        }
    }

    pub fn current_generation(&self) -> Option<u64> {
        self.current().map(|image| image.generation)
    }

    pub fn is_empty(&self) -> bool {
        self.current().is_none()
    }

    /// Stamp the next upload attempt. A completion carrying an older stamp
    /// lost the race to a newer attempt and is dropped by `select`.
    pub fn reserve_generation(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Install a freshly encoded photo, silently discarding the previous one.
    /// Returns false when a newer upload superseded this one while it was
    /// still decoding, in which case nothing changes.
    pub fn select(&mut self, image: AcceptedImage) -> bool {
        if image.generation != self.issued {
            println!("🗑️ Dropping superseded upload (generation {})", image.generation);
            return false;
        }

        self.state = UploadState::Selected(image);
        self.show_zoom = false;
        true
    }

    /// Clear the selection and every transient flag
    pub fn remove(&mut self) {
        self.state = UploadState::Empty;
        self.show_zoom = false;
        self.drag_active = false;
    }

    pub fn zoomed(&self) -> bool {
        self.show_zoom
    }

    /// Zooming only makes sense with a photo on screen
    pub fn set_zoom(&mut self, zoom: bool) {
        self.show_zoom = zoom && !self.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::validate::ImageKind;

    fn sample(generation: u64) -> AcceptedImage {
        AcceptedImage {
            kind: ImageKind::Jpeg,
            bytes: vec![1, 2, 3],
            preview: String::from("data:image/jpeg;base64,AQID"),
            width: 1,
            height: 1,
            generation,
        }
    }

    #[test]
    fn test_starts_empty() {
        let intake = Intake::default();
        assert!(intake.is_empty());
        assert!(!intake.drag_active());
        assert!(!intake.zoomed());
        assert_eq!(intake.current_generation(), None);
    }

    #[test]
    fn test_drag_flags_are_idempotent() {
        let mut intake = Intake::default();
        intake.begin_drag();
        intake.begin_drag();
        assert!(intake.drag_active());
        intake.end_drag();
        intake.end_drag();
        assert!(!intake.drag_active());
    }

    #[test]
    fn test_select_installs_latest_generation() {
        let mut intake = Intake::default();
        let generation = intake.reserve_generation();

        assert!(intake.select(sample(generation)));
        assert_eq!(intake.current_generation(), Some(generation));
    }

    #[test]
    fn test_select_drops_superseded_upload() {
        let mut intake = Intake::default();
        let old = intake.reserve_generation();
        let new = intake.reserve_generation();

        // The older decode finishing late must not replace the newer one
        assert!(!intake.select(sample(old)));
        assert!(intake.is_empty());

        assert!(intake.select(sample(new)));
        assert_eq!(intake.current_generation(), Some(new));
    }

    #[test]
    fn test_new_selection_replaces_previous_wholesale() {
        let mut intake = Intake::default();
        let first = intake.reserve_generation();
        assert!(intake.select(sample(first)));

        let second = intake.reserve_generation();
        assert!(intake.select(sample(second)));
        assert_eq!(intake.current_generation(), Some(second));
    }

    #[test]
    fn test_remove_clears_selection_and_flags() {
        let mut intake = Intake::default();
        let generation = intake.reserve_generation();
        intake.select(sample(generation));
        intake.set_zoom(true);
        intake.begin_drag();

        intake.remove();

        assert!(intake.is_empty());
        assert!(!intake.zoomed());
        assert!(!intake.drag_active());

        // Removing again is a harmless no-op
        intake.remove();
        assert!(intake.is_empty());
    }

    #[test]
    fn test_zoom_requires_a_selection() {
        let mut intake = Intake::default();
        intake.set_zoom(true);
        assert!(!intake.zoomed());

        let generation = intake.reserve_generation();
        intake.select(sample(generation));
        intake.set_zoom(true);
        assert!(intake.zoomed());
    }

    #[test]
    fn test_replacing_selection_drops_zoom() {
        let mut intake = Intake::default();
        let first = intake.reserve_generation();
        intake.select(sample(first));
        intake.set_zoom(true);

        let second = intake.reserve_generation();
        intake.select(sample(second));
        assert!(!intake.zoomed());
    }
}
