//! Which modal dialogs are open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// The three root-level dialogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Auth,
    Profile,
    AddProperty,
}

/// Open/closed flag per dialog. Only parent triggers open a dialog; the
/// dialogs themselves only ask to close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    auth: bool,
    profile: bool,
    add_property: bool,
}

impl ModalState {
    pub fn open(&mut self, kind: ModalKind) {
        *self.flag(kind) = true;
    }

    pub fn close(&mut self, kind: ModalKind) {
        *self.flag(kind) = false;
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Auth => self.auth,
            ModalKind::Profile => self.profile,
            ModalKind::AddProperty => self.add_property,
        }
    }

    fn flag(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Auth => &mut self.auth,
            ModalKind::Profile => &mut self.profile,
            ModalKind::AddProperty => &mut self.add_property,
        }
    }
}
