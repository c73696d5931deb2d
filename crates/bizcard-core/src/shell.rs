//! Open/closed state owned by the card page.

/// Modal state for the profile lightbox and the gallery modal.
///
/// `gallery_seed` is the slide the modal starts on. It is read only when the
/// modal opens; closing keeps the old value around unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardShell {
    profile_open: bool,
    gallery_open: bool,
    gallery_seed: usize,
}

impl CardShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_gallery(&mut self, index: usize) {
        self.gallery_seed = index;
        self.gallery_open = true;
    }

    pub fn close_gallery(&mut self) {
        self.gallery_open = false;
    }

    pub fn open_profile(&mut self) {
        self.profile_open = true;
    }

    pub fn close_profile(&mut self) {
        self.profile_open = false;
    }

    pub fn gallery_open(&self) -> bool {
        self.gallery_open
    }

    pub fn gallery_seed(&self) -> usize {
        self.gallery_seed
    }

    pub fn profile_open(&self) -> bool {
        self.profile_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_gallery_sets_seed_and_flag() {
        let mut shell = CardShell::new();
        shell.open_gallery(2);
        assert!(shell.gallery_open());
        assert_eq!(shell.gallery_seed(), 2);
    }

    #[test]
    fn close_gallery_keeps_seed() {
        let mut shell = CardShell::new();
        shell.open_gallery(1);
        shell.close_gallery();
        assert!(!shell.gallery_open());
        assert_eq!(shell.gallery_seed(), 1);
    }

    #[test]
    fn profile_and_gallery_are_independent() {
        let mut shell = CardShell::new();
        shell.open_profile();
        assert!(shell.profile_open());
        assert!(!shell.gallery_open());
        shell.close_profile();
        assert!(!shell.profile_open());
    }
}
