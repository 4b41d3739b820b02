use super::*;

const ALL: [ModalKind; 3] = [ModalKind::Auth, ModalKind::Profile, ModalKind::AddProperty];

#[test]
fn all_modals_start_closed() {
    let state = ModalState::default();
    for kind in ALL {
        assert!(!state.is_open(kind));
    }
}

#[test]
fn open_affects_only_that_modal() {
    for kind in ALL {
        let mut state = ModalState::default();
        state.open(kind);
        for other in ALL {
            assert_eq!(state.is_open(other), other == kind);
        }
    }
}

#[test]
fn close_is_idempotent() {
    let mut state = ModalState::default();
    state.open(ModalKind::Profile);
    state.close(ModalKind::Profile);
    state.close(ModalKind::Profile);
    assert!(!state.is_open(ModalKind::Profile));
}
